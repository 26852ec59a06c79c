//! The per-frame animation driver.

use glam::DVec3;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::error::AnimationError;
use crate::transform::{NodeHandle, RotationRule, Transform};

/// How the `elapsed` argument of [`AnimationDriver::tick`] is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TickScaling {
    /// Every tick applies the full `delta_per_tick`; `elapsed` is ignored.
    #[default]
    PerTick,
    /// `delta_per_tick` is a rate per second, scaled by `elapsed` seconds.
    PerSecond,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// No tick has run yet.
    Uninitialized,
    /// At least one tick has run. There is no stopped state.
    Running,
}

/// Applies rotation rules to registered nodes once per host frame.
///
/// Transforms live in a dense slot vector indexed by handle; rules point at
/// slots. Registering a handle twice attaches a second rule to the same
/// transform. [`tick`](Self::tick) walks the rules in registration order and
/// never allocates.
#[derive(Debug)]
pub struct AnimationDriver {
    slots: Vec<(NodeHandle, Transform)>,
    index: FxHashMap<NodeHandle, usize>,
    rules: Vec<(usize, RotationRule)>,
    scaling: TickScaling,
    wrap_angles: bool,
    state: DriverState,
    tick_count: u64,
}

impl AnimationDriver {
    pub fn new(scaling: TickScaling, wrap_angles: bool) -> Self {
        Self {
            slots: Vec::new(),
            index: FxHashMap::default(),
            rules: Vec::new(),
            scaling,
            wrap_angles,
            state: DriverState::Uninitialized,
            tick_count: 0,
        }
    }

    /// Attach `rule` to `handle`, creating an identity transform for it on
    /// first registration.
    ///
    /// # Errors
    ///
    /// [`AnimationError::InvalidHandle`] for the null handle.
    pub fn register(&mut self, handle: NodeHandle, rule: RotationRule) -> Result<(), AnimationError> {
        let slot = self.slot_for(handle)?;
        self.rules.push((slot, rule));
        debug!(node = %handle, ?rule, "registered rotation rule");
        Ok(())
    }

    /// Like [`register`](Self::register), but seeds (or replaces) the node's
    /// transform first.
    pub fn register_with_transform(
        &mut self,
        handle: NodeHandle,
        transform: Transform,
        rule: RotationRule,
    ) -> Result<(), AnimationError> {
        let slot = self.slot_for(handle)?;
        self.slots[slot].1 = transform;
        self.rules.push((slot, rule));
        debug!(node = %handle, ?rule, "registered rotation rule");
        Ok(())
    }

    /// Drop a node and every rule attached to it.
    ///
    /// # Errors
    ///
    /// [`AnimationError::UnknownHandle`] if the handle was never registered.
    pub fn unregister(&mut self, handle: NodeHandle) -> Result<(), AnimationError> {
        let slot = self
            .index
            .remove(&handle)
            .ok_or(AnimationError::UnknownHandle(handle))?;

        self.rules.retain(|(s, _)| *s != slot);
        self.slots.swap_remove(slot);

        // The former last slot now lives at `slot`.
        let moved_from = self.slots.len();
        if slot < moved_from {
            let moved = self.slots[slot].0;
            self.index.insert(moved, slot);
            for (s, _) in &mut self.rules {
                if *s == moved_from {
                    *s = slot;
                }
            }
        }
        Ok(())
    }

    /// Advance every registered node by one frame.
    ///
    /// In [`TickScaling::PerSecond`] mode a negative or non-finite `elapsed`
    /// is skipped with a warning.
    pub fn tick(&mut self, elapsed: f64) {
        let scale = match self.scaling {
            TickScaling::PerTick => 1.0,
            TickScaling::PerSecond => {
                if !elapsed.is_finite() || elapsed < 0.0 {
                    warn!(elapsed, "ignoring tick with invalid elapsed time");
                    return;
                }
                elapsed
            }
        };

        for (slot, rule) in &self.rules {
            let transform = &mut self.slots[*slot].1;
            transform.rotation += rule.increment(scale);
            if self.wrap_angles {
                transform.rotation = wrap_degrees(transform.rotation);
            }
        }

        if self.state == DriverState::Uninitialized {
            debug!(nodes = self.slots.len(), rules = self.rules.len(), "animation running");
            self.state = DriverState::Running;
        }
        self.tick_count += 1;
    }

    pub fn transform(&self, handle: NodeHandle) -> Option<&Transform> {
        self.index.get(&handle).map(|&slot| &self.slots[slot].1)
    }

    /// All registered nodes and their current transforms, in registration order
    /// (until a node is unregistered).
    pub fn transforms(&self) -> impl Iterator<Item = (NodeHandle, &Transform)> + '_ {
        self.slots.iter().map(|(handle, transform)| (*handle, transform))
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn node_count(&self) -> usize {
        self.slots.len()
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn slot_for(&mut self, handle: NodeHandle) -> Result<usize, AnimationError> {
        if handle.is_null() {
            return Err(AnimationError::InvalidHandle(handle));
        }
        if let Some(&slot) = self.index.get(&handle) {
            return Ok(slot);
        }
        let slot = self.slots.len();
        self.slots.push((handle, Transform::IDENTITY));
        self.index.insert(handle, slot);
        Ok(slot)
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(TickScaling::PerTick, false)
    }
}

/// Bring each angle into `[0, 360)`.
fn wrap_degrees(v: DVec3) -> DVec3 {
    DVec3::new(wrap_angle(v.x), wrap_angle(v.y), wrap_angle(v.z))
}

// `rem_euclid` rounds tiny negative angles up to exactly 360.
fn wrap_angle(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
