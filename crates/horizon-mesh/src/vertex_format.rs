//! Canonical `wgpu::VertexBufferLayout` and primitive mapping for generated meshes.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |
//! | 2        | 24     | Float32x4 | color    |

use std::borrow::Cow;
use std::mem;

use wgpu::{PrimitiveTopology, VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::gpu::GpuVertex;
use crate::mesh::{Mesh, Topology};

/// Vertex attributes for [`GpuVertex`].
pub const GPU_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 24,
        shader_location: 2,
    },
];

/// The vertex buffer layout shared by sphere, ring and arc pipelines.
pub const GPU_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<GpuVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &GPU_VERTEX_ATTRIBUTES,
};

const _: () = assert!(
    mem::size_of::<GpuVertex>() == 40,
    "GpuVertex size changed, update GPU_VERTEX_LAYOUT"
);
const _: () = assert!(GPU_VERTEX_ATTRIBUTES[2].offset + 16 <= mem::size_of::<GpuVertex>() as u64);

/// Pipeline topology for a mesh.
///
/// wgpu has no line-loop primitive; loops are drawn as line lists using
/// [`draw_indices`].
pub fn primitive_topology(topology: Topology) -> PrimitiveTopology {
    match topology {
        Topology::TriangleList => PrimitiveTopology::TriangleList,
        Topology::LineStrip => PrimitiveTopology::LineStrip,
        Topology::LineLoop => PrimitiveTopology::LineList,
    }
}

/// Index buffer to upload alongside [`primitive_topology`].
///
/// Borrowed for triangle lists and line strips. Line loops are expanded into
/// `(i, i + 1)` pairs plus the closing `(last, first)` pair.
pub fn draw_indices(mesh: &Mesh) -> Cow<'_, [u32]> {
    match mesh.topology() {
        Topology::TriangleList | Topology::LineStrip => Cow::Borrowed(mesh.indices()),
        Topology::LineLoop => {
            let indices = mesh.indices();
            if indices.len() < 2 {
                return Cow::Owned(Vec::new());
            }
            let mut pairs = Vec::with_capacity(indices.len() * 2);
            for (i, &a) in indices.iter().enumerate() {
                let b = indices[(i + 1) % indices.len()];
                pairs.extend_from_slice(&[a, b]);
            }
            Cow::Owned(pairs)
        }
    }
}
