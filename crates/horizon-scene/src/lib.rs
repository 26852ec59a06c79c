//! Black-hole scene assembly.
//!
//! [`Scene::build`] turns a [`horizon_config::Config`] into meshes, hands them
//! to a [`SceneHost`], attaches the accretion-disk particle effects and
//! registers the horizon spin. [`Scene::tick`] is called from the host's
//! frame loop.

mod error;
mod host;
mod particles;
mod scene;

pub use error::SceneError;
pub use host::{HeadlessHost, HeadlessNode, NodeDesc, SceneHost};
pub use particles::{
    Falloff, LineRenderer, ParticleEffectConfig, PointFactory, SinkForce, TangentRingEmitter,
    accretion_disks,
};
pub use scene::{Scene, arc_family_params};
