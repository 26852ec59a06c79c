//! Fixed-timestep frame loop.
//!
//! Decouples simulation (fixed rate, 60 Hz by default) from presentation using
//! an accumulator. Every frame reports an interpolation alpha for smoothing
//! between simulation states.

use std::time::Instant;
use tracing::warn;

/// Default simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Frame time clamp. Longer frames are cut to this and the simulation slows
/// down instead of running dozens of catch-up steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep loop state.
///
/// Call [`tick`](Self::tick) once per frame to measure wall-clock time, or
/// [`advance`](Self::advance) to drive the loop with explicit frame times.
#[derive(Debug)]
pub struct GameLoop {
    fixed_dt: f64,
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    /// A 60 Hz loop starting from the current instant.
    pub fn new() -> Self {
        Self::with_timestep(FIXED_DT)
    }

    /// A loop stepping `hz` times per simulated second. Zero falls back to
    /// [`FIXED_DT`].
    pub fn with_rate(hz: u32) -> Self {
        if hz == 0 {
            Self::new()
        } else {
            Self::with_timestep(1.0 / f64::from(hz))
        }
    }

    fn with_timestep(fixed_dt: f64) -> Self {
        Self {
            fixed_dt,
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Runs one frame with the wall-clock time since the previous call.
    pub fn tick(&mut self, update_fn: impl FnMut(f64, f64), render_fn: impl FnMut(f64)) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.advance(frame_time, update_fn, render_fn);
    }

    /// Runs one frame of `frame_time` seconds.
    ///
    /// - `update_fn(fixed_dt, total_sim_time)` is called zero or more times at
    ///   the fixed rate.
    /// - `render_fn(alpha)` is called exactly once with the interpolation alpha
    ///   in `[0.0, 1.0)`.
    pub fn advance(
        &mut self,
        frame_time: f64,
        mut update_fn: impl FnMut(f64, f64),
        mut render_fn: impl FnMut(f64),
    ) {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        while self.accumulator >= self.fixed_dt {
            update_fn(self.fixed_dt, self.total_sim_time);
            self.total_sim_time += self.fixed_dt;
            self.accumulator -= self.fixed_dt;
            self.update_count += 1;
        }

        render_fn(self.alpha());
        self.frame_count += 1;
    }

    /// Returns the current interpolation alpha without running a frame.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / self.fixed_dt
        } else {
            0.0
        }
    }

    pub fn fixed_dt(&self) -> f64 {
        self.fixed_dt
    }

    /// Total number of frames run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Total number of simulation steps executed.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total simulated time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_dt_value() {
        assert!((FIXED_DT - 1.0 / 60.0).abs() < f64::EPSILON * 10.0);
        assert!((GameLoop::new().fixed_dt() - FIXED_DT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_with_rate() {
        assert!((GameLoop::with_rate(30).fixed_dt() - 1.0 / 30.0).abs() < 1e-15);
        assert!((GameLoop::with_rate(0).fixed_dt() - FIXED_DT).abs() < 1e-15);
    }

    #[test]
    fn test_accumulator_single_step() {
        let mut loop_ = GameLoop::new();
        let mut updates = 0u32;
        loop_.advance(FIXED_DT, |_, _| updates += 1, |_| {});
        assert_eq!(updates, 1);
        assert!(loop_.accumulator.abs() < 1e-12);
    }

    #[test]
    fn test_accumulator_multiple_steps() {
        let mut loop_ = GameLoop::new();
        let mut sim_times = Vec::new();
        loop_.advance(3.0 * FIXED_DT + 1e-9, |_, t| sim_times.push(t), |_| {});
        assert_eq!(sim_times.len(), 3);
        assert!(sim_times[0].abs() < 1e-12);
        assert!((sim_times[2] - 2.0 * FIXED_DT).abs() < 1e-12);
        assert!((loop_.total_sim_time() - 3.0 * FIXED_DT).abs() < 1e-12);
    }

    #[test]
    fn test_accumulator_partial() {
        let mut loop_ = GameLoop::new();
        let mut updates = 0u32;
        let mut render_called = false;
        loop_.advance(0.5 * FIXED_DT, |_, _| updates += 1, |_| render_called = true);
        assert_eq!(updates, 0);
        assert!(render_called);
        assert!((loop_.accumulator - 0.5 * FIXED_DT).abs() < 1e-12);
    }

    #[test]
    fn test_interpolation_alpha() {
        let mut loop_ = GameLoop::new();
        let mut alpha_received = 0.0;
        loop_.advance(0.25 * FIXED_DT, |_, _| {}, |a| alpha_received = a);
        assert!(
            (alpha_received - 0.25).abs() < 1e-10,
            "alpha should be ~0.25, got {alpha_received}"
        );
        assert!((loop_.alpha() - alpha_received).abs() < 1e-15);
    }

    #[test]
    fn test_max_frame_time_clamp() {
        let mut loop_ = GameLoop::new();
        let mut updates = 0u32;
        loop_.advance(1.0, |_, _| updates += 1, |_| {});
        let max_updates = (MAX_FRAME_TIME / FIXED_DT).ceil() as u32;
        assert!(
            updates <= max_updates,
            "Expected at most {max_updates} updates, got {updates}"
        );
        assert!(updates > 0);
    }

    #[test]
    fn test_negative_frame_time_is_ignored() {
        let mut loop_ = GameLoop::new();
        let mut updates = 0u32;
        loop_.advance(-1.0, |_, _| updates += 1, |_| {});
        assert_eq!(updates, 0);
        assert_eq!(loop_.frame_count(), 1);
        assert!(loop_.alpha().abs() < f64::EPSILON);
    }

    #[test]
    fn test_one_step_per_matching_frame() {
        let mut loop_ = GameLoop::with_rate(60);
        for _ in 0..120 {
            loop_.advance(loop_.fixed_dt(), |_, _| {}, |_| {});
        }
        assert_eq!(loop_.update_count(), 120);
        assert_eq!(loop_.frame_count(), 120);
    }

    #[test]
    fn test_deterministic_sequence() {
        let frame_times = [0.017, 0.015, 0.020, 0.016, 0.033, 0.008, 0.018];

        let mut loop_a = GameLoop::new();
        let mut loop_b = GameLoop::new();

        for &ft in &frame_times {
            let mut alpha_a = 0.0;
            let mut alpha_b = 0.0;
            loop_a.advance(ft, |_, _| {}, |a| alpha_a = a);
            loop_b.advance(ft, |_, _| {}, |a| alpha_b = a);
            assert!((alpha_a - alpha_b).abs() < 1e-15);
        }

        assert_eq!(loop_a.update_count(), loop_b.update_count());
        assert!((loop_a.total_sim_time() - loop_b.total_sim_time()).abs() < 1e-15);
    }

    #[test]
    fn test_wall_clock_tick_renders_once() {
        let mut loop_ = GameLoop::default();
        let mut renders = 0u32;
        loop_.tick(|_, _| {}, |_| renders += 1);
        assert_eq!(renders, 1);
        assert_eq!(loop_.frame_count(), 1);
    }
}
