//! UV-sphere generation.

use glam::DVec3;
use tracing::debug;

use crate::error::{MeshError, check_count, check_radius};
use crate::mesh::{Mesh, Topology, Vertex};
use crate::shape::SphereParams;

/// Build a UV-sphere as a triangle list.
///
/// Vertex `(i, j)` sits at stack angle `phi_i` and slice angle `theta_j`:
///
/// ```text
/// x = r cos(phi) cos(theta)
/// y = r cos(phi) sin(theta)
/// z = r sin(phi)
/// ```
///
/// Vertices are emitted row-major over `i in 0..=stacks, j in 0..=slices`, so
/// the mesh always has `(slices + 1) * (stacks + 1)` vertices and
/// `2 * slices * stacks` triangles. The seam column and the closing row are
/// duplicated rather than welded.
///
/// # Errors
///
/// [`MeshError::InvalidParameter`] for a zero `slices`/`stacks`, a
/// non-positive radius, or a vertex count beyond the `u32` index range.
/// [`MeshError::NumericDomainError`] for non-finite angular ranges.
pub fn generate_sphere(params: &SphereParams) -> Result<Mesh, MeshError> {
    check_radius("radius", params.radius)?;
    check_count("slices", params.slices)?;
    check_count("stacks", params.stacks)?;

    let (phi0, phi1) = params.phi_range;
    let (theta0, theta1) = params.theta_range;
    if ![phi0, phi1, theta0, theta1].iter().all(|a| a.is_finite()) {
        return Err(MeshError::domain(format!(
            "sphere angular ranges phi={:?} theta={:?}",
            params.phi_range, params.theta_range
        )));
    }

    let row = params.slices as u64 + 1;
    let vertex_count = row * (params.stacks as u64 + 1);
    if vertex_count > u32::MAX as u64 {
        return Err(MeshError::invalid(
            "slices",
            format!("{vertex_count} vertices exceed the u32 index range"),
        ));
    }

    let radius = params.radius;
    let slices = params.slices;
    let stacks = params.stacks;

    let mut vertices = Vec::with_capacity(vertex_count as usize);
    for i in 0..=stacks {
        let phi = phi0 + (phi1 - phi0) * (i as f64 / stacks as f64);
        // Radius of this stack's circle in the xy plane.
        let stack_radius = radius * phi.cos();
        let z = radius * phi.sin();

        for j in 0..=slices {
            let theta = theta0 + (theta1 - theta0) * (j as f64 / slices as f64);
            let position = DVec3::new(stack_radius * theta.cos(), stack_radius * theta.sin(), z);

            vertices.push(Vertex {
                position,
                normal: params.normals.then(|| position / radius),
                color: params.color,
            });
        }
    }

    let row = row as u32;
    let mut indices = Vec::with_capacity(6 * slices as usize * stacks as usize);
    for i in 0..stacks {
        for j in 0..slices {
            let k1 = i * row + j;
            let k2 = (i + 1) * row + j;
            let k1_next = k1 + 1;
            let k2_next = k2 + 1;

            indices.extend_from_slice(&[k1, k2, k1_next, k1_next, k2, k2_next]);
        }
    }

    debug!(
        radius,
        slices,
        stacks,
        vertices = vertices.len(),
        triangles = indices.len() / 3,
        "generated sphere"
    );

    Ok(Mesh::new(vertices, indices, Topology::TriangleList))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_vertex_and_triangle_counts() {
        for slices in 1..6 {
            for stacks in 1..6 {
                let mesh = generate_sphere(&SphereParams::new(2.0, slices, stacks)).unwrap();
                let expected_vertices = ((slices + 1) * (stacks + 1)) as usize;
                assert_eq!(mesh.vertex_count(), expected_vertices);
                assert_eq!(mesh.primitive_count(), (2 * slices * stacks) as usize);
                assert!(mesh.indices().iter().all(|&i| (i as usize) < expected_vertices));
            }
        }
    }

    #[test]
    fn test_first_vertex_on_x_axis() {
        let mesh = generate_sphere(&SphereParams::new(5.0, 4, 4)).unwrap();
        assert_eq!(mesh.vertices()[0].position, DVec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_vertices_lie_on_sphere() {
        let mesh = generate_sphere(&SphereParams::new(7.0, 30, 30)).unwrap();
        for v in mesh.vertices() {
            assert!((v.position.length() - 7.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_normals_are_unit_and_radial() {
        let mesh = generate_sphere(&SphereParams::new(3.0, 12, 8)).unwrap();
        for v in mesh.vertices() {
            let n = v.normal.expect("normals requested");
            assert!((n.length() - 1.0).abs() < 1e-12);
            assert!((n * 3.0 - v.position).length() < 1e-12);
        }

        let bare = generate_sphere(&SphereParams::new(3.0, 12, 8).without_normals()).unwrap();
        assert!(bare.vertices().iter().all(|v| v.normal.is_none()));
    }

    #[test]
    fn test_quad_tessellation_winding() {
        let slices = 5;
        let mesh = generate_sphere(&SphereParams::new(1.0, slices, 3)).unwrap();
        let row = slices + 1;
        let tris: Vec<_> = mesh.triangles().collect();
        for i in 0..3 {
            for j in 0..slices {
                let quad = ((i * slices + j) * 2) as usize;
                let k1 = i * row + j;
                let k2 = (i + 1) * row + j;
                assert_eq!(tris[quad], [k1, k2, k1 + 1]);
                assert_eq!(tris[quad + 1], [k1 + 1, k2, k2 + 1]);
            }
        }
    }

    #[test]
    fn test_color_applied_to_every_vertex() {
        let color = crate::Rgba::BLACK;
        let mesh = generate_sphere(&SphereParams::new(1.0, 4, 4).with_color(color)).unwrap();
        assert!(mesh.vertices().iter().all(|v| v.color == Some(color)));
    }

    #[test]
    fn test_partial_sweep() {
        let mut params = SphereParams::new(1.0, 4, 2);
        params.phi_range = (-FRAC_PI_2, FRAC_PI_2);
        let mesh = generate_sphere(&params).unwrap();
        // First row collapses onto the south pole, last onto the north pole.
        assert!((mesh.vertices()[0].position.z + 1.0).abs() < 1e-12);
        assert!((mesh.vertices().last().unwrap().position.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let params = SphereParams::new(7.0, 30, 30);
        let a = generate_sphere(&params).unwrap();
        let b = generate_sphere(&params).unwrap();
        assert_eq!(a.indices(), b.indices());
        for (va, vb) in a.vertices().iter().zip(b.vertices()) {
            assert_eq!(va.position.x.to_bits(), vb.position.x.to_bits());
            assert_eq!(va.position.y.to_bits(), vb.position.y.to_bits());
            assert_eq!(va.position.z.to_bits(), vb.position.z.to_bits());
        }
    }

    #[test]
    fn test_zero_slices_rejected() {
        let err = generate_sphere(&SphereParams::new(5.0, 0, 4)).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { name: "slices", .. }));

        let err = generate_sphere(&SphereParams::new(5.0, 4, 0)).unwrap_err();
        assert!(matches!(err, MeshError::InvalidParameter { name: "stacks", .. }));
    }

    #[test]
    fn test_bad_radius_rejected() {
        assert!(matches!(
            generate_sphere(&SphereParams::new(0.0, 4, 4)),
            Err(MeshError::InvalidParameter { name: "radius", .. })
        ));
        assert!(matches!(
            generate_sphere(&SphereParams::new(f64::NAN, 4, 4)),
            Err(MeshError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_non_finite_range_rejected() {
        let mut params = SphereParams::new(1.0, 4, 4);
        params.theta_range = (0.0, f64::INFINITY);
        assert!(matches!(
            generate_sphere(&params),
            Err(MeshError::NumericDomainError { .. })
        ));
    }

    #[test]
    fn test_index_range_overflow_rejected() {
        let params = SphereParams::new(1.0, u32::MAX, 2);
        assert!(matches!(
            generate_sphere(&params),
            Err(MeshError::InvalidParameter { .. })
        ));
    }
}
