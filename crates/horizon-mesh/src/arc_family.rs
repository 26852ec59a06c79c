//! Concentric arc families with configurable radius schedules.
//!
//! An arc family is a stack of open ring outlines whose radius grows from
//! arc to arc. The growth is driven by a step function of the arc index, so
//! both evenly spaced and ramped spacings come out of the same generator.

use tracing::debug;

use crate::color::Rgba;
use crate::error::{MeshError, check_count, check_radius};
use crate::mesh::{Mesh, Topology};
use crate::ring::half_circle_outline;

/// Replaces the regular step at a single arc index with a larger one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusJump {
    pub index: u32,
    pub step: f64,
}

impl RadiusJump {
    /// Jump at `round(count * fraction)`, clamped to the steps a family of
    /// `count` arcs has (`1..count`).
    pub fn at_fraction(count: u32, fraction: f64, step: f64) -> Self {
        let last_step = f64::from(count.saturating_sub(1).max(1));
        Self {
            index: (f64::from(count) * fraction).round().clamp(1.0, last_step) as u32,
            step,
        }
    }
}

/// Radius step strategy for [`generate_arc_family`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RadiusSchedule {
    /// Constant step between neighbouring arcs.
    Linear { step: f64, jump: Option<RadiusJump> },
    /// Step grows with the square of the arc index: `scale * k²`.
    SquaredRamp { scale: f64, jump: Option<RadiusJump> },
}

impl RadiusSchedule {
    pub fn jump(&self) -> Option<RadiusJump> {
        match *self {
            Self::Linear { jump, .. } | Self::SquaredRamp { jump, .. } => jump,
        }
    }

    /// Reject a jump that no step of a `count`-arc family would reach.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] if the jump index is outside `1..count`.
    pub fn check_jump(&self, count: u32) -> Result<(), MeshError> {
        match self.jump() {
            Some(jump) if jump.index == 0 || jump.index >= count => Err(MeshError::invalid(
                "jump.index",
                format!("{} is outside the steps 1..{count}", jump.index),
            )),
            _ => Ok(()),
        }
    }

    /// Radius increment applied when moving to arc `index`.
    pub fn step(&self, index: u32) -> f64 {
        if let Some(jump) = self.jump()
            && jump.index == index
        {
            return jump.step;
        }
        match *self {
            Self::Linear { step, .. } => step,
            Self::SquaredRamp { scale, .. } => {
                let k = index as f64;
                scale * k * k
            }
        }
    }
}

/// Radii of a family: `r_0 = base_radius`, `r_k = r_(k-1) + radius_step(k)`.
///
/// # Errors
///
/// [`MeshError::InvalidParameter`] if `count` is zero or any radius is not
/// positive, [`MeshError::NumericDomainError`] if a radius is not finite.
pub fn arc_radii(
    base_radius: f64,
    count: u32,
    radius_step: impl Fn(u32) -> f64,
) -> Result<Vec<f64>, MeshError> {
    check_count("count", count)?;
    check_radius("base_radius", base_radius)?;

    let mut radii = Vec::with_capacity(count as usize);
    let mut radius = base_radius;
    radii.push(radius);
    for k in 1..count {
        radius += radius_step(k);
        if !radius.is_finite() {
            return Err(MeshError::domain(format!("arc {k} radius {radius}")));
        }
        if radius <= 0.0 {
            return Err(MeshError::invalid(
                "radius_step_fn",
                format!("arc {k} radius {radius} is not positive"),
            ));
        }
        radii.push(radius);
    }
    Ok(radii)
}

/// Whether each radius is strictly larger than the previous one.
pub fn is_strictly_increasing(radii: &[f64]) -> bool {
    radii.windows(2).all(|w| w[0] < w[1])
}

/// Build `count` open arc outlines, one [`Mesh`] per arc in index order.
///
/// Each arc uses the same half-circle sampling as
/// [`generate_ring`](crate::generate_ring) at its own radius and is colored
/// uniformly with `color(k)`. Arcs are returned in generation order even if
/// the schedule is not monotonic.
pub fn generate_arc_family(
    base_radius: f64,
    count: u32,
    segments: u32,
    radius_step: impl Fn(u32) -> f64,
    color: impl Fn(u32) -> Rgba,
) -> Result<Vec<Mesh>, MeshError> {
    check_count("segments", segments)?;
    let radii = arc_radii(base_radius, count, radius_step)?;

    let meshes = radii
        .iter()
        .zip(0u32..)
        .map(|(&radius, k)| {
            half_circle_outline(radius, segments, Some(color(k)))
                .map(|vertices| Mesh::line(vertices, Topology::LineStrip))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if !is_strictly_increasing(&radii) {
        debug!(count, "arc family radii are not monotonic");
    }
    debug!(
        base_radius,
        count,
        segments,
        outer_radius = radii.last().copied().unwrap_or(base_radius),
        "generated arc family"
    );

    Ok(meshes)
}
