//! Core types for vehicle mass-property and kinematic-state simulation.
//!
//! This crate provides the foundational types for composing a small
//! aerospace vehicle out of simple rigid parts:
//!
//! - [`Element`] - A single rigid part with a geometry, mass, and pose
//! - [`Geometry`] - The closed set of part shapes with closed-form inertia
//! - [`MassProperties`] - Mass, center of mass, and inertia tensor of a part
//!   or an aggregate of parts
//! - [`KinematicState`] - Position, orientation, velocity of the assembled body
//! - [`KinematicData`] - One step's externally computed state update
//!
//! # Design Philosophy
//!
//! These types are **pure data and pure computation**. They have no staging,
//! no caching, no integration. They're the common language between:
//!
//! - The assembly engine (airframe-core), which owns staging and queries
//! - Control loops that consume mass properties and produce state updates
//! - Configuration loaders that construct elements from typed records
//!
//! # Coordinate System
//!
//! - X: right
//! - Y: forward
//! - Z: up (the natural axis of axisymmetric parts)
//! - Right-handed
//!
//! # Quaternion Convention
//!
//! Orientation quaternions map **body to world**: for a unit quaternion `q`
//! and a body-frame vector `v`, the world-frame vector is `q * v`, i.e. the
//! Hamilton product `q v q⁻¹`. Composition is left-multiplication: `q2 * q1`
//! applies `q1` first. See [`attitude`] for the normalization gate used
//! wherever a quaternion enters from outside.
//!
//! # Example
//!
//! ```
//! use airframe_types::{Element, Geometry, Mobility};
//! use nalgebra::{UnitQuaternion, Vector3};
//!
//! // A propellant tank: a tube repositioned along the vehicle axis.
//! let mut tank = Element::new(
//!     Geometry::tube(0.030, 0.036, 0.25),
//!     0.42,
//!     Mobility::Dynamic,
//! )?;
//! tank.reposition(Vector3::new(0.0, 0.0, 0.4), UnitQuaternion::identity());
//!
//! assert_eq!(tank.mass(), 0.42);
//! assert_eq!(tank.pose().position.z, 0.4);
//! # Ok::<(), airframe_types::AirframeError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,  // Many methods can't be const due to nalgebra
    clippy::suboptimal_flops,       // mul_add style changes aren't always clearer
    clippy::missing_errors_doc,     // Error docs added where non-obvious
)]

pub mod attitude;
mod element;
mod error;
mod mass;
mod state;

pub use element::{Element, Geometry, Mobility, Pose};
pub use error::AirframeError;
pub use mass::MassProperties;
pub use state::{KinematicData, KinematicState};

// Re-export math types for convenience
pub use nalgebra::{Matrix3, Quaternion, UnitQuaternion, Vector3};

/// Result type for airframe operations.
pub type Result<T> = std::result::Result<T, AirframeError>;
