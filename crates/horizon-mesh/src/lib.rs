//! Procedural geometry: UV-spheres, planar rings and arc families, plus the
//! packed vertex format and buffer layout used to hand them to the GPU.

pub mod arc_family;
pub mod color;
pub mod error;
pub mod gpu;
pub mod mesh;
pub mod ring;
pub mod shape;
pub mod sphere;
pub mod vertex_format;

pub use arc_family::{RadiusJump, RadiusSchedule, arc_radii, generate_arc_family, is_strictly_increasing};
pub use color::{ColorGradient, Rgba};
pub use error::MeshError;
pub use gpu::GpuVertex;
pub use mesh::{Mesh, Topology, Vertex};
pub use ring::generate_ring;
pub use shape::{ArcFamilyParams, RingParams, ShapeParams, SphereParams};
pub use sphere::generate_sphere;
pub use vertex_format::{GPU_VERTEX_ATTRIBUTES, GPU_VERTEX_LAYOUT, draw_indices, primitive_topology};
