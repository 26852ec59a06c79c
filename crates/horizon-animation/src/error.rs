//! Animation error types.

use crate::transform::NodeHandle;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    /// The null handle was passed where a live node was expected.
    #[error("invalid node handle {0}")]
    InvalidHandle(NodeHandle),

    /// The handle was never registered with this driver.
    #[error("node handle {0} is not registered")]
    UnknownHandle(NodeHandle),
}
