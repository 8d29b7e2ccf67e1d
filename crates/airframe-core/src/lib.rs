//! Element aggregation and kinematic-state engine.
//!
//! This crate composes many individually simple rigid parts
//! ([`Element`](airframe_types::Element)s) into one physically consistent
//! body whose mass, center of mass, and inertia tensor evolve correctly as
//! parts are positioned and as some parts change during flight:
//!
//! - [`Design`] - The aggregate body: element partitioning, the one-way
//!   static-group lock, world-frame mass-property queries, and per-step
//!   kinematic updates
//! - [`build`] / [`ElementSpec`] - Typed-record construction of an
//!   unlocked design
//! - [`ThrustGimbal`] - A two-axis servo-limited thrust-vector mount, the
//!   force/torque collaborator fed by an external control loop
//!
//! # Staging
//!
//! A design starts out **constructing**: every element's pose may be set
//! and reset. [`Design::lock`] is the one-way transition that folds the
//! static group into a single cached aggregate and discards the individual
//! static records, so that every later mass-property query costs only the
//! number of *dynamic* elements. Dynamic elements stay mutable - pose,
//! mass, and membership - through the whole flight.
//!
//! # What stays outside
//!
//! The engine computes no forces and integrates nothing. An external
//! control loop queries [`Design::temporary_properties`], derives
//! accelerations however it likes, and commits the resulting state change
//! through [`Design::step`] as a [`KinematicData`](airframe_types::KinematicData).
//!
//! # Example
//!
//! ```
//! use airframe_core::{build, ElementSpec};
//! use airframe_types::{Geometry, UnitQuaternion, Vector3};
//!
//! let mut design = build([
//!     (
//!         "body-tube".to_string(),
//!         ElementSpec::fixed(Geometry::tube(0.032, 0.036, 0.6), 0.30),
//!     ),
//!     (
//!         "propellant".to_string(),
//!         ElementSpec::movable(Geometry::cylinder(0.02, 0.1), 0.12),
//!     ),
//! ])?;
//!
//! design.manipulate_element(
//!     "body-tube",
//!     Vector3::new(0.0, 0.0, 0.3),
//!     UnitQuaternion::identity(),
//! )?;
//! design.lock()?;
//!
//! let props = design.temporary_properties();
//! assert!((props.mass - 0.42).abs() < 1e-12);
//! # Ok::<(), airframe_types::AirframeError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::missing_errors_doc,
)]

mod builder;
mod design;
mod gimbal;

pub use builder::{build, ElementSpec};
pub use design::Design;
pub use gimbal::ThrustGimbal;

pub use airframe_types::{
    AirframeError, Element, Geometry, KinematicData, KinematicState, MassProperties, Mobility,
    Result,
};
