//! Unit-quaternion bookkeeping.
//!
//! Every quaternion entering the system from outside (a step update, a
//! decoded configuration) passes through [`try_unit`] so that downstream
//! code only ever sees normalized orientations. Internally, orientations
//! are [`UnitQuaternion`], which nalgebra renormalizes on composition.
//!
//! The convention is fixed once, here: quaternions map **body to world**,
//! and rotating a body-frame vector `v` into the world frame is `q * v`
//! (the Hamilton product `q v q⁻¹`).

use nalgebra::{Quaternion, UnitQuaternion};

use crate::{AirframeError, Result};

/// Minimum norm below which a quaternion is considered degenerate.
pub const UNIT_NORM_EPSILON: f64 = 1e-9;

/// Normalize a raw quaternion into a unit quaternion.
///
/// Fails with [`AirframeError::DegenerateQuaternion`] when the norm is
/// below [`UNIT_NORM_EPSILON`] or any component is non-finite.
///
/// # Example
///
/// ```
/// use airframe_types::attitude::try_unit;
/// use nalgebra::{Quaternion, Vector3};
/// use std::f64::consts::FRAC_1_SQRT_2;
///
/// // 90 degrees about +Z, deliberately unnormalized (scaled by 2).
/// let q = try_unit(Quaternion::new(2.0 * FRAC_1_SQRT_2, 0.0, 0.0, 2.0 * FRAC_1_SQRT_2))?;
///
/// // Body +X maps to world +Y under the body-to-world convention.
/// let world = q * Vector3::x();
/// assert!((world.y - 1.0).abs() < 1e-10);
///
/// assert!(try_unit(Quaternion::new(0.0, 0.0, 0.0, 0.0)).is_err());
/// # Ok::<(), airframe_types::AirframeError>(())
/// ```
pub fn try_unit(q: Quaternion<f64>) -> Result<UnitQuaternion<f64>> {
    if !q.coords.iter().all(|c| c.is_finite()) {
        return Err(AirframeError::DegenerateQuaternion);
    }
    UnitQuaternion::try_new(q, UNIT_NORM_EPSILON).ok_or(AirframeError::DegenerateQuaternion)
}
