//! The seam between the scene and the rendering engine.

use horizon_animation::{NodeHandle, Transform};
use horizon_mesh::{Mesh, Rgba};
use tracing::warn;

use crate::particles::ParticleEffectConfig;

/// Everything the host needs to create one renderable node.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeDesc {
    pub name: String,
    pub mesh: Mesh,
    pub transform: Transform,
    /// Node-level color, used where the mesh has no vertex colors.
    pub color: Rgba,
}

/// Operations the scene needs from a rendering engine.
///
/// The host owns the nodes; the scene only keeps their handles.
pub trait SceneHost {
    /// Upload a mesh and create a node for it. Ownership of the mesh moves to the host.
    fn create_node(&mut self, desc: NodeDesc) -> NodeHandle;

    /// Start a particle effect.
    fn attach_particles(&mut self, effect: &ParticleEffectConfig);

    /// Push an updated transform for drawing.
    fn set_transform(&mut self, handle: NodeHandle, transform: &Transform);
}

/// A node stored by [`HeadlessHost`].
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessNode {
    pub name: String,
    pub mesh: Mesh,
    pub transform: Transform,
    pub color: Rgba,
}

/// In-memory host with no renderer behind it.
///
/// Handles are `1..=n` in creation order.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    nodes: Vec<HeadlessNode>,
    particles: Vec<ParticleEffectConfig>,
    transform_updates: u64,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&HeadlessNode> {
        let index = usize::try_from(handle.raw()).ok()?.checked_sub(1)?;
        self.nodes.get(index)
    }

    /// First node with the given name.
    pub fn find(&self, name: &str) -> Option<(NodeHandle, &HeadlessNode)> {
        self.nodes
            .iter()
            .enumerate()
            .find(|(_, node)| node.name == name)
            .map(|(i, node)| (NodeHandle::new(i as u64 + 1), node))
    }

    pub fn nodes(&self) -> &[HeadlessNode] {
        &self.nodes
    }

    pub fn particle_effects(&self) -> &[ParticleEffectConfig] {
        &self.particles
    }

    /// Number of `set_transform` calls received.
    pub fn transform_updates(&self) -> u64 {
        self.transform_updates
    }

    /// Total vertices across all nodes.
    pub fn vertex_count(&self) -> usize {
        self.nodes.iter().map(|n| n.mesh.vertex_count()).sum()
    }

    /// Total triangles and line segments across all nodes.
    pub fn primitive_count(&self) -> usize {
        self.nodes.iter().map(|n| n.mesh.primitive_count()).sum()
    }
}

impl SceneHost for HeadlessHost {
    fn create_node(&mut self, desc: NodeDesc) -> NodeHandle {
        self.nodes.push(HeadlessNode {
            name: desc.name,
            mesh: desc.mesh,
            transform: desc.transform,
            color: desc.color,
        });
        NodeHandle::new(self.nodes.len() as u64)
    }

    fn attach_particles(&mut self, effect: &ParticleEffectConfig) {
        self.particles.push(effect.clone());
    }

    fn set_transform(&mut self, handle: NodeHandle, transform: &Transform) {
        let index = usize::try_from(handle.raw())
            .ok()
            .and_then(|raw| raw.checked_sub(1));
        match index.and_then(|i| self.nodes.get_mut(i)) {
            Some(node) => {
                node.transform = *transform;
                self.transform_updates += 1;
            }
            None => warn!(node = %handle, "transform for unknown node"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use horizon_mesh::{RingParams, generate_ring};

    fn ring_desc(name: &str) -> NodeDesc {
        NodeDesc {
            name: name.to_string(),
            mesh: generate_ring(&RingParams::new(1.0, 8)).unwrap(),
            transform: Transform::IDENTITY,
            color: Rgba::WHITE,
        }
    }

    #[test]
    fn test_handles_start_at_one() {
        let mut host = HeadlessHost::new();
        let a = host.create_node(ring_desc("a"));
        let b = host.create_node(ring_desc("b"));
        assert_eq!(a, NodeHandle::new(1));
        assert_eq!(b, NodeHandle::new(2));
        assert_eq!(host.node(a).unwrap().name, "a");
        assert!(host.node(NodeHandle::NULL).is_none());
        assert!(host.node(NodeHandle::new(3)).is_none());
    }

    #[test]
    fn test_find_by_name() {
        let mut host = HeadlessHost::new();
        host.create_node(ring_desc("photon ring"));
        let (handle, node) = host.find("photon ring").unwrap();
        assert_eq!(handle, NodeHandle::new(1));
        assert_eq!(node.mesh.vertex_count(), 14);
        assert!(host.find("missing").is_none());
    }

    #[test]
    fn test_set_transform() {
        let mut host = HeadlessHost::new();
        let handle = host.create_node(ring_desc("a"));
        let t = Transform::IDENTITY.with_rotation(DVec3::new(0.0, 10.0, 0.0));
        host.set_transform(handle, &t);
        host.set_transform(NodeHandle::new(42), &t);

        assert_eq!(host.node(handle).unwrap().transform, t);
        assert_eq!(host.transform_updates(), 1);
    }
}
