//! Drives a built scene through a fixed number of frames.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use glam::DVec3;
use horizon_config::{Config, ConfigError};
use horizon_scene::{HeadlessHost, Scene, SceneError};
use tracing::{debug, info};

use crate::game_loop::GameLoop;
use crate::platform::PlatformError;

/// Anything that can stop the `horizon` binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("scene setup failed: {0}")]
    Scene(#[from] SceneError),
}

/// What a run did, reported once the last frame finishes.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub updates: u64,
    /// Horizon rotation in degrees after the last update.
    pub horizon_rotation: DVec3,
    pub nodes: usize,
    pub vertices: usize,
    pub primitives: usize,
    pub particle_effects: usize,
    pub transform_updates: u64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.horizon_rotation;
        writeln!(f, "frames:           {} ({} updates)", self.frames, self.updates)?;
        writeln!(f, "nodes:            {}", self.nodes)?;
        writeln!(f, "vertices:         {}", self.vertices)?;
        writeln!(f, "primitives:       {}", self.primitives)?;
        writeln!(f, "particle effects: {}", self.particle_effects)?;
        write!(f, "horizon rotation: ({:.3}, {:.3}, {:.3})", r.x, r.y, r.z)
    }
}

/// Build the scene on a [`HeadlessHost`] and advance `frames` frames of
/// exactly one simulation step each. Deterministic for a given config.
pub fn run_headless(config: &Config, frames: u64) -> Result<RunSummary, AppError> {
    let mut host = HeadlessHost::new();
    let mut scene = Scene::build(config, &mut host)?;
    let mut game_loop = GameLoop::with_rate(config.animation.tick_rate_hz);
    let frame_time = game_loop.fixed_dt();

    info!(frames, dt = frame_time, "running headless");
    for _ in 0..frames {
        game_loop.advance(
            frame_time,
            |dt, _| scene.tick(&mut host, dt),
            |_| {},
        );
    }

    Ok(summarize(&game_loop, &scene, &host))
}

/// Like [`run_headless`] but paced by the wall clock, sleeping out the rest
/// of each frame.
pub fn run_realtime(config: &Config, frames: u64) -> Result<RunSummary, AppError> {
    let mut host = HeadlessHost::new();
    let mut scene = Scene::build(config, &mut host)?;
    let mut game_loop = GameLoop::with_rate(config.animation.tick_rate_hz);
    let frame_budget = Duration::from_secs_f64(game_loop.fixed_dt());

    info!(frames, "running in real time");
    while game_loop.frame_count() < frames {
        let started = Instant::now();
        game_loop.tick(
            |dt, _| scene.tick(&mut host, dt),
            |alpha| debug!(alpha, "frame"),
        );
        if let Some(rest) = frame_budget.checked_sub(started.elapsed()) {
            thread::sleep(rest);
        }
    }

    Ok(summarize(&game_loop, &scene, &host))
}

fn summarize(game_loop: &GameLoop, scene: &Scene, host: &HeadlessHost) -> RunSummary {
    let summary = RunSummary {
        frames: game_loop.frame_count(),
        updates: game_loop.update_count(),
        horizon_rotation: scene.horizon_rotation(),
        nodes: host.nodes().len(),
        vertices: host.vertex_count(),
        primitives: host.primitive_count(),
        particle_effects: host.particle_effects().len(),
        transform_updates: host.transform_updates(),
    };
    info!(
        frames = summary.frames,
        updates = summary.updates,
        rotation = ?summary.horizon_rotation,
        "run finished"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_update_per_frame() {
        let summary = run_headless(&Config::default(), 5).unwrap();
        assert_eq!(summary.frames, 5);
        assert_eq!(summary.updates, 5);
        assert!((summary.horizon_rotation.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_frames() {
        let summary = run_headless(&Config::default(), 0).unwrap();
        assert_eq!(summary.updates, 0);
        assert_eq!(summary.horizon_rotation, DVec3::ZERO);
        assert_eq!(summary.transform_updates, 0);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let mut config = Config::default();
        config.black_hole.slices = 0;
        let err = run_headless(&config, 1).unwrap_err();
        assert!(matches!(err, AppError::Scene(_)), "{err}");
    }

    #[test]
    fn test_summary_display() {
        let summary = run_headless(&Config::default(), 1).unwrap();
        let text = summary.to_string();
        assert!(text.contains("frames:           1 (1 updates)"));
        assert!(text.contains("horizon rotation: (0.000, 10.000, 0.000)"));
    }
}
