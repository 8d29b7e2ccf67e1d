//! Error types for assembly and simulation operations.

use thiserror::Error;

/// Errors that can occur while assembling or stepping a vehicle.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AirframeError {
    /// An element with this id is already present in the design.
    #[error("duplicate element id: '{id}'")]
    DuplicateElement {
        /// The colliding id.
        id: String,
    },

    /// No element with this id exists in the design.
    #[error("unknown element id: '{id}'")]
    UnknownElement {
        /// The missing id.
        id: String,
    },

    /// A static element was mutated after its design was locked.
    #[error("element '{id}' is static and its design is locked")]
    LockedElement {
        /// The frozen element's id.
        id: String,
    },

    /// `lock` was called on an already-locked design.
    #[error("design is already locked")]
    AlreadyLocked,

    /// Non-positive mass or dimension at element construction.
    #[error("invalid geometry: {reason}")]
    InvalidGeometry {
        /// Description of the offending parameter.
        reason: String,
    },

    /// A quaternion with (numerically) zero norm where a unit quaternion
    /// is required.
    #[error("degenerate quaternion: norm is numerically zero")]
    DegenerateQuaternion,

    /// Non-finite values or an unnormalizable orientation passed to `step`.
    #[error("invalid kinematic state: {reason}")]
    InvalidState {
        /// Description of what was rejected.
        reason: String,
    },
}

impl AirframeError {
    /// Create a duplicate-element error.
    #[must_use]
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateElement { id: id.into() }
    }

    /// Create an unknown-element error.
    #[must_use]
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::UnknownElement { id: id.into() }
    }

    /// Create a locked-element error.
    #[must_use]
    pub fn locked(id: impl Into<String>) -> Self {
        Self::LockedElement { id: id.into() }
    }

    /// Create an invalid-geometry error.
    #[must_use]
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Create an invalid-state error.
    #[must_use]
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    /// Check if this is a locked-element error.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::LockedElement { .. })
    }

    /// Check if this is an invalid-state error.
    #[must_use]
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState { .. })
    }

    /// Check if this is a geometry validation error.
    #[must_use]
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, Self::InvalidGeometry { .. })
    }
}
