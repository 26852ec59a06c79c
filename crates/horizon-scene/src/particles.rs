//! Static descriptions of the accretion-disk particle effects.
//!
//! The particle runtime belongs to the host. These structs only carry the
//! tuning the host needs to start an effect.

use glam::DVec3;
use horizon_config::Config;
use horizon_mesh::Rgba;

/// Birth parameters shared by every particle of an effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointFactory {
    /// Seconds.
    pub lifespan_base: f32,
    pub lifespan_spread: f32,
    pub terminal_velocity_base: f32,
    pub terminal_velocity_spread: f32,
    pub mass_base: f32,
    pub mass_spread: f32,
}

/// Emits particles tangentially from a ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentRingEmitter {
    pub radius: f64,
    /// Launch speed.
    pub amplitude: f32,
    pub amplitude_spread: f32,
}

/// Draws each particle as a short line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineRenderer {
    pub head_color: Rgba,
    pub tail_color: Rgba,
    /// Fade alpha out over the particle's lifetime.
    pub fade_out: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Falloff {
    Constant,
    InverseDistance,
    InverseSquare,
}

/// Pulls particles toward a point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinkForce {
    pub center: DVec3,
    pub radius: f64,
    pub amplitude: f32,
    pub falloff: Falloff,
    pub mass_dependent: bool,
}

/// One particle effect, ready to hand to the host.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleEffectConfig {
    pub name: String,
    /// Maximum live particles.
    pub pool_size: u32,
    /// Seconds between births.
    pub birth_rate: f32,
    /// Particles created per birth.
    pub litter_size: u32,
    pub litter_spread: u32,
    pub factory: PointFactory,
    pub emitter: TangentRingEmitter,
    pub renderer: LineRenderer,
    pub sink: SinkForce,
    pub position: DVec3,
    /// Tilt of the emitter plane about the x axis, in degrees.
    pub pitch_degrees: f64,
}

/// The flat disk and the disk pitched 90° across it.
pub fn accretion_disks(config: &Config) -> [ParticleEffectConfig; 2] {
    let bh = &config.black_hole;
    let particles = &config.particles;
    let position = DVec3::from_array(bh.position);
    let orange = Rgba::from_array(bh.photon_color);

    let emitter = TangentRingEmitter {
        radius: bh.disk_radius,
        amplitude: particles.emitter_amplitude,
        amplitude_spread: 1.0,
    };
    let renderer = LineRenderer {
        head_color: orange,
        tail_color: orange,
        fade_out: true,
    };
    let sink = SinkForce {
        center: position,
        radius: (bh.disk_radius - 1.0).max(0.0),
        amplitude: particles.sink_amplitude,
        falloff: Falloff::InverseSquare,
        mass_dependent: true,
    };
    let factory = PointFactory {
        lifespan_base: 3.0,
        lifespan_spread: 1.0,
        terminal_velocity_base: 12.0,
        terminal_velocity_spread: 1.0,
        mass_base: 1.0,
        mass_spread: 0.25,
    };

    let flat = ParticleEffectConfig {
        name: "accretion disk".to_string(),
        pool_size: particles.pool_size,
        birth_rate: 1e-5,
        litter_size: 10_000,
        litter_spread: 1,
        factory,
        emitter,
        renderer,
        sink,
        position,
        pitch_degrees: 0.0,
    };

    let pitched = ParticleEffectConfig {
        name: "top accretion disk".to_string(),
        pool_size: particles.pool_size.saturating_add(particles.extra_pool),
        birth_rate: 1e-4,
        factory: PointFactory {
            lifespan_base: 2.0,
            ..factory
        },
        pitch_degrees: 90.0,
        ..flat.clone()
    };

    [flat, pitched]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_disks() {
        let [flat, pitched] = accretion_disks(&Config::default());

        assert_eq!(flat.pool_size, 10_000);
        assert_eq!(pitched.pool_size, 20_000);
        assert_eq!(flat.pitch_degrees, 0.0);
        assert_eq!(pitched.pitch_degrees, 90.0);
        assert_eq!(flat.factory.lifespan_base, 3.0);
        assert_eq!(pitched.factory.lifespan_base, 2.0);

        assert_eq!(flat.emitter.radius, 8.0);
        assert_eq!(flat.sink.radius, 7.0);
        assert_eq!(flat.sink.amplitude, 55.0);
        assert_eq!(flat.sink.falloff, Falloff::InverseSquare);
        assert_eq!(flat.renderer.head_color, Rgba::new(0.99, 0.39, 0.0, 1.0));
    }

    #[test]
    fn test_disks_follow_config() {
        let mut config = Config::default();
        config.black_hole.position = [1.0, 2.0, 3.0];
        config.black_hole.disk_radius = 0.5;
        config.particles.pool_size = 100;
        config.particles.extra_pool = 50;

        let [flat, pitched] = accretion_disks(&config);
        assert_eq!(flat.position, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(flat.sink.center, flat.position);
        assert_eq!(flat.sink.radius, 0.0);
        assert_eq!(pitched.pool_size, 150);
    }
}
