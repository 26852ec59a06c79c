//! Planar ring outlines built from two mirrored half-circles.

use glam::DVec3;
use tracing::debug;

use crate::color::Rgba;
use crate::error::{MeshError, check_count, check_radius};
use crate::mesh::{Mesh, Topology, Vertex};
use crate::shape::RingParams;

/// Build a closed ring in the XZ plane.
///
/// `segments` values of `x` are spread evenly over `[-radius, radius]`. The
/// upper half visits them left to right with `z = +sqrt(r² - x²)`, the lower
/// half right to left with `z = -sqrt(r² - x²)`. The two endpoint samples
/// (`z = 0`) are not repeated on the lower half; the [`Topology::LineLoop`]
/// closes the outline back to the first vertex.
///
/// # Errors
///
/// [`MeshError::InvalidParameter`] for a non-positive radius, zero segments or
/// a non-positive thickness. [`MeshError::NumericDomainError`] if a radicand
/// is NaN.
pub fn generate_ring(params: &RingParams) -> Result<Mesh, MeshError> {
    if params.thickness.is_nan() || params.thickness <= 0.0 {
        return Err(MeshError::invalid(
            "thickness",
            format!("must be > 0, got {}", params.thickness),
        ));
    }

    let vertices = half_circle_outline(params.radius, params.segments, None)?;
    debug!(
        radius = params.radius,
        segments = params.segments,
        vertices = vertices.len(),
        "generated ring"
    );

    Ok(Mesh::line(vertices, Topology::LineLoop).with_line_width(params.thickness))
}

/// Shared sampling for rings and arcs: upper half forward, lower half
/// reversed, endpoints emitted once.
pub(crate) fn half_circle_outline(
    radius: f64,
    segments: u32,
    color: Option<Rgba>,
) -> Result<Vec<Vertex>, MeshError> {
    check_radius("radius", radius)?;
    check_count("segments", segments)?;

    let capacity = if segments == 1 {
        1
    } else {
        2 * segments as usize - 2
    };
    let mut vertices = Vec::with_capacity(capacity);

    for k in 0..segments {
        let x = sample_x(radius, segments, k);
        let z = half_height(radius, x)?;
        vertices.push(outline_vertex(x, z, color));
    }
    // Interior samples only: x = ±radius already sits on the axis.
    for k in (1..segments.saturating_sub(1)).rev() {
        let x = sample_x(radius, segments, k);
        let z = half_height(radius, x)?;
        vertices.push(outline_vertex(x, -z, color));
    }

    Ok(vertices)
}

/// The `k`-th of `segments` evenly spaced samples over `[-radius, radius]`.
fn sample_x(radius: f64, segments: u32, k: u32) -> f64 {
    if segments == 1 {
        return -radius;
    }
    if k == segments - 1 {
        return radius;
    }
    let step = 2.0 * radius / (segments - 1) as f64;
    (-radius + step * k as f64).clamp(-radius, radius)
}

/// `sqrt(r² - x²)` with the radicand clamped at zero.
fn half_height(radius: f64, x: f64) -> Result<f64, MeshError> {
    let radicand = radius * radius - x * x;
    if radicand.is_nan() {
        return Err(MeshError::domain(format!(
            "ring radicand for radius={radius}, x={x}"
        )));
    }
    Ok(radicand.max(0.0).sqrt())
}

fn outline_vertex(x: f64, z: f64, color: Option<Rgba>) -> Vertex {
    Vertex {
        position: DVec3::new(x, 0.0, z),
        normal: None,
        color,
    }
}
