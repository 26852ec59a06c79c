use horizon_animation::AnimationError;
use horizon_config::ConfigError;
use horizon_mesh::MeshError;

/// Errors raised while building the scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("mesh generation failed for {shape}: {source}")]
    Mesh {
        shape: &'static str,
        #[source]
        source: MeshError,
    },

    #[error(transparent)]
    Animation(#[from] AnimationError),
}
