//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Headless black-hole scene runner.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "horizon", about = "Procedural black-hole scene")]
pub struct CliArgs {
    /// Number of frames to run.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Pace frames against the wall clock instead of running flat out.
    #[arg(long, default_value_t = false)]
    pub realtime: bool,

    /// Horizon sphere longitude divisions.
    #[arg(long)]
    pub slices: Option<u32>,

    /// Horizon sphere latitude divisions.
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Photon ring samples across the diameter.
    #[arg(long)]
    pub segments: Option<u32>,

    /// Number of accretion arcs.
    #[arg(long)]
    pub arcs: Option<u32>,

    /// Spin in degrees per tick.
    #[arg(long)]
    pub spin: Option<f64>,

    /// Enable or disable the particle effects.
    #[arg(long)]
    pub particles: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(slices) = args.slices {
            self.black_hole.slices = slices;
        }
        if let Some(stacks) = args.stacks {
            self.black_hole.stacks = stacks;
        }
        if let Some(segments) = args.segments {
            self.black_hole.ring_segments = segments;
        }
        if let Some(arcs) = args.arcs {
            self.arcs.count = arcs;
        }
        if let Some(spin) = args.spin {
            self.animation.spin_degrees_per_tick = spin;
        }
        if let Some(enabled) = args.particles {
            self.particles.enabled = enabled;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
