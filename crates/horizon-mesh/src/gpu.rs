//! Packed `f32` vertex for GPU upload.
//!
//! Generation runs in `f64`; [`GpuVertex`] narrows each vertex to the
//! 40-byte layout described by [`crate::GPU_VERTEX_LAYOUT`].

use crate::color::Rgba;
use crate::mesh::{Mesh, Vertex};

/// Layout (40 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]`, zero when the mesh has no normals
///   - `[24..40]` color `[f32; 4]` RGBA
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

static_assertions::assert_eq_size!(GpuVertex, [u8; 40]);

impl GpuVertex {
    /// Narrow a generated vertex. `fallback` colors vertices that carry none.
    pub fn from_vertex(vertex: &Vertex, fallback: Rgba) -> Self {
        let normal = vertex.normal.map_or([0.0; 3], |n| n.as_vec3().to_array());
        Self {
            position: vertex.position.as_vec3().to_array(),
            normal,
            color: vertex.color.unwrap_or(fallback).to_array(),
        }
    }
}

impl Mesh {
    /// Convert every vertex to [`GpuVertex`], in buffer order.
    pub fn to_gpu_vertices(&self, fallback: Rgba) -> Vec<GpuVertex> {
        self.vertices()
            .iter()
            .map(|v| GpuVertex::from_vertex(v, fallback))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{RingParams, SphereParams};
    use crate::{generate_ring, generate_sphere};

    #[test]
    fn test_sphere_to_gpu() {
        let mesh = generate_sphere(&SphereParams::new(5.0, 4, 4)).unwrap();
        let gpu = mesh.to_gpu_vertices(Rgba::BLACK);
        assert_eq!(gpu.len(), mesh.vertex_count());
        assert_eq!(gpu[0].position, [5.0, 0.0, 0.0]);
        assert_eq!(gpu[0].normal, [1.0, 0.0, 0.0]);
        assert_eq!(gpu[0].color, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_ring_without_normals_or_color() {
        let mesh = generate_ring(&RingParams::new(1.0, 8)).unwrap();
        let orange = Rgba::new(0.99, 0.39, 0.0, 1.0);
        let gpu = mesh.to_gpu_vertices(orange);
        assert!(gpu.iter().all(|v| v.normal == [0.0; 3]));
        assert!(gpu.iter().all(|v| v.color == orange.to_array()));
    }

    #[test]
    fn test_byte_cast() {
        let mesh = generate_ring(&RingParams::new(1.0, 3)).unwrap();
        let gpu = mesh.to_gpu_vertices(Rgba::WHITE);
        let bytes: &[u8] = bytemuck::cast_slice(&gpu);
        assert_eq!(bytes.len(), gpu.len() * 40);
    }
}
