//! Configuration for the black-hole scene.
//!
//! Settings persist to disk as `config.ron`. Every section falls back to its
//! defaults when missing, CLI flags override loaded values, and
//! [`Config::validate`] rejects values the geometry generators would refuse.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AnimationConfig, ArcConfig, ArcSchedule, BlackHoleConfig, Config, DebugConfig, ParticleConfig,
};
pub use error::ConfigError;
