//! The scene aggregate: built once, ticked every frame.

use glam::DVec3;
use horizon_animation::{AnimationDriver, NodeHandle, RotationRule, TickScaling, Transform};
use horizon_config::{ArcConfig, ArcSchedule, Config};
use horizon_mesh::{
    ArcFamilyParams, ColorGradient, Mesh, MeshError, RadiusJump, RadiusSchedule, RingParams, Rgba,
    SphereParams, generate_ring, generate_sphere,
};
use tracing::info;

use crate::error::SceneError;
use crate::host::{NodeDesc, SceneHost};
use crate::particles::accretion_disks;

/// A built black-hole scene.
///
/// Holds the host's node handles and the animation driver. The host owns the
/// nodes themselves.
#[derive(Debug)]
pub struct Scene {
    driver: AnimationDriver,
    horizon: NodeHandle,
    photon_ring: NodeHandle,
    arcs: Vec<NodeHandle>,
    particle_effects: usize,
}

impl Scene {
    /// Generate every mesh, create the host nodes, start the particle effects
    /// and register the horizon spin.
    ///
    /// All meshes are generated before the first node is created, so a bad
    /// configuration leaves the host untouched.
    pub fn build<H: SceneHost>(config: &Config, host: &mut H) -> Result<Self, SceneError> {
        config.validate()?;
        let bh = &config.black_hole;
        let position = DVec3::from_array(bh.position);

        let horizon_mesh = generate_sphere(
            &SphereParams::new(bh.horizon_radius, bh.slices, bh.stacks)
                .with_color(Rgba::from_array(bh.horizon_color)),
        )
        .map_err(mesh_error("event horizon"))?;

        let ring_mesh = generate_ring(
            &RingParams::new(bh.photon_radius, bh.ring_segments).with_thickness(bh.photon_thickness),
        )
        .map_err(mesh_error("photon ring"))?;

        let arc_meshes = if config.arcs.count > 0 {
            arc_family_params(&config.arcs)
                .generate()
                .map_err(mesh_error("accretion arcs"))?
        } else {
            Vec::new()
        };

        let place = |name: String, mesh: Mesh, color: Rgba| NodeDesc {
            name,
            mesh,
            transform: Transform::at(position),
            color,
        };

        let horizon = host.create_node(place(
            "event horizon".to_string(),
            horizon_mesh,
            Rgba::from_array(bh.horizon_color),
        ));
        let photon_ring = host.create_node(place(
            "photon ring".to_string(),
            ring_mesh,
            Rgba::from_array(bh.photon_color),
        ));
        let arc_color = Rgba::from_array(config.arcs.start_color);
        let arcs: Vec<NodeHandle> = arc_meshes
            .into_iter()
            .enumerate()
            .map(|(k, mesh)| host.create_node(place(format!("accretion arc {k}"), mesh, arc_color)))
            .collect();

        let mut particle_effects = 0;
        if config.particles.enabled {
            for effect in &accretion_disks(config) {
                host.attach_particles(effect);
                particle_effects += 1;
            }
        }

        let anim = &config.animation;
        let scaling = if anim.scale_by_elapsed {
            TickScaling::PerSecond
        } else {
            TickScaling::PerTick
        };
        let mut driver = AnimationDriver::new(scaling, anim.wrap_angles);
        driver.register_with_transform(
            horizon,
            Transform::at(position),
            RotationRule::new(DVec3::from_array(anim.spin_axis), anim.spin_degrees_per_tick),
        )?;

        info!(
            arcs = arcs.len(),
            particle_effects,
            spin = anim.spin_degrees_per_tick,
            "black hole scene built"
        );

        Ok(Self {
            driver,
            horizon,
            photon_ring,
            arcs,
            particle_effects,
        })
    }

    /// Advance the animation by one host frame and push the new transforms.
    pub fn tick<H: SceneHost>(&mut self, host: &mut H, elapsed: f64) {
        self.driver.tick(elapsed);
        for (handle, transform) in self.driver.transforms() {
            host.set_transform(handle, transform);
        }
    }

    pub fn horizon(&self) -> NodeHandle {
        self.horizon
    }

    pub fn photon_ring(&self) -> NodeHandle {
        self.photon_ring
    }

    pub fn arcs(&self) -> &[NodeHandle] {
        &self.arcs
    }

    pub fn particle_effect_count(&self) -> usize {
        self.particle_effects
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    /// Current horizon rotation in degrees.
    pub fn horizon_rotation(&self) -> DVec3 {
        self.driver
            .transform(self.horizon)
            .map_or(DVec3::ZERO, |t| t.rotation)
    }
}

/// Translate the arc section of the config into generator parameters.
pub fn arc_family_params(arcs: &ArcConfig) -> ArcFamilyParams {
    let jump = arcs
        .jump_fraction
        .map(|fraction| RadiusJump::at_fraction(arcs.count, fraction, arcs.jump_step));
    let schedule = match arcs.schedule {
        ArcSchedule::Linear => RadiusSchedule::Linear {
            step: arcs.step,
            jump,
        },
        ArcSchedule::SquaredRamp => RadiusSchedule::SquaredRamp {
            scale: arcs.step,
            jump,
        },
    };

    ArcFamilyParams {
        base_radius: arcs.base_radius,
        count: arcs.count,
        segments: arcs.segments,
        schedule,
        gradient: ColorGradient::new(
            Rgba::from_array(arcs.start_color),
            Rgba::from_array(arcs.end_color),
        ),
    }
}

fn mesh_error(shape: &'static str) -> impl FnOnce(MeshError) -> SceneError {
    move |source| SceneError::Mesh { shape, source }
}
