//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Event horizon, photon ring and disk geometry.
    pub black_hole: BlackHoleConfig,
    /// Concentric accretion arcs.
    pub arcs: ArcConfig,
    /// Accretion-disk particle effects.
    pub particles: ParticleConfig,
    /// Per-frame spin.
    pub animation: AnimationConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Core black-hole geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BlackHoleConfig {
    /// Event horizon sphere radius.
    pub horizon_radius: f64,
    /// Photon ring radius.
    pub photon_radius: f64,
    /// Radius of the particle emitter ring.
    pub disk_radius: f64,
    /// Horizon sphere longitude divisions.
    pub slices: u32,
    /// Horizon sphere latitude divisions.
    pub stacks: u32,
    /// Samples across the photon ring diameter.
    pub ring_segments: u32,
    /// Photon ring line thickness in pixels.
    pub photon_thickness: f32,
    /// Scene center.
    pub position: [f64; 3],
    /// Horizon RGBA.
    pub horizon_color: [f32; 4],
    /// Photon ring RGBA.
    pub photon_color: [f32; 4],
}

/// Radius spacing strategy for the accretion arcs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ArcSchedule {
    /// Constant `step` between arcs.
    Linear,
    /// Step of `step * k²` before arc `k`.
    SquaredRamp,
}

/// Accretion arc family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ArcConfig {
    /// Number of arcs (0 disables the family).
    pub count: u32,
    /// Radius of the innermost arc.
    pub base_radius: f64,
    /// Samples across each arc's diameter.
    pub segments: u32,
    pub schedule: ArcSchedule,
    /// Linear step or ramp scale, depending on `schedule`.
    pub step: f64,
    /// Position of the single larger jump as a fraction of `count`.
    pub jump_fraction: Option<f64>,
    /// Radius step used at the jump index.
    pub jump_step: f64,
    /// RGBA of the innermost arc.
    pub start_color: [f32; 4],
    /// RGBA of the outermost arc.
    pub end_color: [f32; 4],
}

/// Accretion-disk particle effects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    /// Attach the particle effects at all.
    pub enabled: bool,
    /// Particle pool size of the flat disk.
    pub pool_size: u32,
    /// Additional pool for the pitched disk.
    pub extra_pool: u32,
    /// Strength of the inward sink force.
    pub sink_amplitude: f32,
    /// Tangential launch speed at the emitter ring.
    pub emitter_amplitude: f32,
}

/// Per-frame spin of the event horizon.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    /// Degrees added per tick (or per second when `scale_by_elapsed`).
    pub spin_degrees_per_tick: f64,
    /// Per-axis weights for the spin.
    pub spin_axis: [f64; 3],
    /// Treat the spin as a rate per second.
    pub scale_by_elapsed: bool,
    /// Keep angles within `[0, 360)`.
    pub wrap_angles: bool,
    /// Host frame rate driving the ticks (Hz).
    pub tick_rate_hz: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Write JSON logs next to the config in debug builds.
    pub log_to_file: bool,
}

// --- Default implementations ---

const ACCRETION_ORANGE: [f32; 4] = [0.99, 0.39, 0.0, 1.0];

impl Default for BlackHoleConfig {
    fn default() -> Self {
        Self {
            horizon_radius: 7.0,
            photon_radius: 7.1,
            disk_radius: 8.0,
            slices: 30,
            stacks: 30,
            ring_segments: 500,
            photon_thickness: 3.0,
            position: [0.0, 0.0, 0.0],
            horizon_color: [0.0, 0.0, 0.0, 1.0],
            photon_color: ACCRETION_ORANGE,
        }
    }
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            count: 24,
            base_radius: 8.2,
            segments: 500,
            schedule: ArcSchedule::Linear,
            step: 0.12,
            jump_fraction: Some(1.0 / 1.1),
            jump_step: 0.6,
            start_color: ACCRETION_ORANGE,
            end_color: [0.35, 0.08, 0.0, 0.6],
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pool_size: 10_000,
            extra_pool: 10_000,
            sink_amplitude: 55.0,
            emitter_amplitude: 10.0,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            spin_degrees_per_tick: 10.0,
            spin_axis: [0.0, 1.0, 0.0],
            scale_by_elapsed: false,
            wrap_angles: true,
            tick_rate_hz: 60,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Check the values the scene builder depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bh = &self.black_hole;
        finite("black_hole.position", &bh.position)?;
        positive("black_hole.horizon_radius", bh.horizon_radius)?;
        positive("black_hole.photon_radius", bh.photon_radius)?;
        positive("black_hole.disk_radius", bh.disk_radius)?;
        nonzero("black_hole.slices", bh.slices)?;
        nonzero("black_hole.stacks", bh.stacks)?;
        nonzero("black_hole.ring_segments", bh.ring_segments)?;
        positive("black_hole.photon_thickness", bh.photon_thickness as f64)?;

        let arcs = &self.arcs;
        if arcs.count > 0 {
            positive("arcs.base_radius", arcs.base_radius)?;
            nonzero("arcs.segments", arcs.segments)?;
            finite("arcs.step", &[arcs.step])?;
            if let Some(fraction) = arcs.jump_fraction {
                if !(0.0..=1.0).contains(&fraction) {
                    return Err(ConfigError::Invalid {
                        field: "arcs.jump_fraction",
                        reason: format!("must be within [0, 1], got {fraction}"),
                    });
                }
                if arcs.count < 2 {
                    return Err(ConfigError::Invalid {
                        field: "arcs.jump_fraction",
                        reason: "a jump needs at least two arcs".to_string(),
                    });
                }
                finite("arcs.jump_step", &[arcs.jump_step])?;
            }
        }

        nonzero("animation.tick_rate_hz", self.animation.tick_rate_hz)?;
        finite("animation.spin_axis", &self.animation.spin_axis)?;
        if !self.animation.spin_degrees_per_tick.is_finite() {
            return Err(ConfigError::Invalid {
                field: "animation.spin_degrees_per_tick",
                reason: "must be finite".to_string(),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be > 0, got {value}"),
        })
    }
}

fn finite(field: &'static str, values: &[f64]) -> Result<(), ConfigError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(bad) => Err(ConfigError::Invalid {
            field,
            reason: format!("must be finite, got {bad}"),
        }),
        None => Ok(()),
    }
}

fn nonzero(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::Invalid {
            field,
            reason: "must be > 0".to_string(),
        })
    } else {
        Ok(())
    }
}
