//! Mesh generation error types.

/// Errors returned by the geometry generators.
///
/// Both variants are deterministic: calling again with the same parameters
/// fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A count or radius was outside its valid range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the shape description.
        name: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },

    /// A math operation received input outside its domain (NaN, infinity).
    #[error("numeric domain error in {context}")]
    NumericDomainError {
        /// Where the bad value showed up.
        context: String,
    },
}

impl MeshError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn domain(context: impl Into<String>) -> Self {
        Self::NumericDomainError {
            context: context.into(),
        }
    }
}

/// Reject non-positive (and NaN) radii.
pub(crate) fn check_radius(name: &'static str, radius: f64) -> Result<(), MeshError> {
    if radius.is_infinite() {
        return Err(MeshError::domain(format!("{name} = {radius}")));
    }
    if radius.is_nan() || radius <= 0.0 {
        return Err(MeshError::invalid(name, format!("must be > 0, got {radius}")));
    }
    Ok(())
}

/// Reject zero counts.
pub(crate) fn check_count(name: &'static str, count: u32) -> Result<(), MeshError> {
    if count == 0 {
        return Err(MeshError::invalid(name, "must be > 0"));
    }
    Ok(())
}
