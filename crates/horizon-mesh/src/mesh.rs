//! Mesh data structure holding vertices and indices produced by the generators.

use glam::DVec3;

use crate::color::Rgba;

/// A single generated vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    /// Position relative to the shape's center.
    pub position: DVec3,
    /// Unit normal, if the generator was asked for one.
    pub normal: Option<DVec3>,
    /// Per-vertex color, if the shape carries one.
    pub color: Option<Rgba>,
}

impl Vertex {
    /// A bare position with no normal or color.
    pub const fn at(position: DVec3) -> Self {
        Self {
            position,
            normal: None,
            color: None,
        }
    }
}

/// How the index buffer groups into primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Three indices per triangle.
    TriangleList,
    /// Consecutive indices form connected segments, open at the ends.
    LineStrip,
    /// Like [`Topology::LineStrip`], with the last vertex connected back to the first.
    LineLoop,
}

/// The output of a generator pass.
///
/// Fields are private: once built, a mesh is only read or handed off with
/// [`Mesh::into_parts`].
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    topology: Topology,
    line_width: Option<f32>,
}

impl Mesh {
    pub(crate) fn new(vertices: Vec<Vertex>, indices: Vec<u32>, topology: Topology) -> Self {
        debug_assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        Self {
            vertices,
            indices,
            topology,
            line_width: None,
        }
    }

    /// A line mesh whose indices simply enumerate the vertices in order.
    pub(crate) fn line(vertices: Vec<Vertex>, topology: Topology) -> Self {
        let indices = (0..vertices.len() as u32).collect();
        Self::new(vertices, indices, topology)
    }

    pub(crate) fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Render hint for line thickness, in pixels.
    pub fn line_width(&self) -> Option<f32> {
        self.line_width
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of drawable primitives (triangles or line segments).
    pub fn primitive_count(&self) -> usize {
        let n = self.indices.len();
        match self.topology {
            Topology::TriangleList => n / 3,
            Topology::LineStrip => n.saturating_sub(1),
            Topology::LineLoop if n < 2 => 0,
            Topology::LineLoop => n,
        }
    }

    /// Iterate over triangles as index triples. Empty for line topologies.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        let indices: &[u32] = match self.topology {
            Topology::TriangleList => &self.indices,
            Topology::LineStrip | Topology::LineLoop => &[],
        };
        indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Consume the mesh, returning its buffers and topology.
    pub fn into_parts(self) -> (Vec<Vertex>, Vec<u32>, Topology) {
        (self.vertices, self.indices, self.topology)
    }
}
