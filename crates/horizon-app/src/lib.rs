//! Headless application shell: platform directories, the fixed-timestep
//! frame loop and the scene runner behind the `horizon` binary.

pub mod game_loop;
pub mod platform;
pub mod run;

pub use run::{AppError, RunSummary, run_headless, run_realtime};
