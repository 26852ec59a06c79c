//! Frame-driven rotation animation for scene nodes owned by a host engine.
//!
//! The host hands out opaque [`NodeHandle`]s, registers a [`RotationRule`]
//! per animated node, and calls [`AnimationDriver::tick`] once per frame.
//! The driver keeps the authoritative [`Transform`] for each node; the host
//! reads it back for drawing.

mod driver;
mod error;
mod transform;

pub use driver::{AnimationDriver, DriverState, TickScaling};
pub use error::AnimationError;
pub use transform::{NodeHandle, RotationRule, Transform};
