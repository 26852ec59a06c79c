//! Node handles, transforms and rotation rules.

use std::fmt;

use glam::{DQuat, DVec3, EulerRot};

/// Opaque handle to a node owned by the host engine.
///
/// The raw value `0` is reserved as the null handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(u64);

impl NodeHandle {
    pub const NULL: Self = Self(0);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Orientation and placement of a node.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Transform {
    /// Euler angles in degrees about the x, y and z axes.
    pub rotation: DVec3,
    pub position: DVec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        rotation: DVec3::ZERO,
        position: DVec3::ZERO,
    };

    pub fn at(position: DVec3) -> Self {
        Self {
            rotation: DVec3::ZERO,
            position,
        }
    }

    pub fn with_rotation(mut self, degrees: DVec3) -> Self {
        self.rotation = degrees;
        self
    }

    /// The rotation as a quaternion, applying x, then y, then z.
    pub fn orientation(&self) -> DQuat {
        DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation.x.to_radians(),
            self.rotation.y.to_radians(),
            self.rotation.z.to_radians(),
        )
    }
}

/// Per-tick rotation increment for one node.
///
/// Each tick adds `axis * delta_per_tick` degrees to the node's rotation, so
/// `axis` doubles as a per-axis weight vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationRule {
    pub axis: DVec3,
    pub delta_per_tick: f64,
}

impl RotationRule {
    pub fn new(axis: DVec3, delta_per_tick: f64) -> Self {
        Self {
            axis,
            delta_per_tick,
        }
    }

    pub fn about_x(degrees: f64) -> Self {
        Self::new(DVec3::X, degrees)
    }

    pub fn about_y(degrees: f64) -> Self {
        Self::new(DVec3::Y, degrees)
    }

    pub fn about_z(degrees: f64) -> Self {
        Self::new(DVec3::Z, degrees)
    }

    /// Independent increments for each axis.
    pub fn per_axis(degrees: DVec3) -> Self {
        Self::new(degrees, 1.0)
    }

    /// Rotation added by one tick at the given time scale.
    pub fn increment(&self, scale: f64) -> DVec3 {
        self.axis * (self.delta_per_tick * scale)
    }
}
