//! Mass, center of mass, and inertia tensor of a part or an aggregate.

use nalgebra::{Matrix3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Total mass below which an aggregate is treated as empty.
const MIN_TOTAL_MASS: f64 = 1e-10;

/// Mass properties of a rigid part or an aggregate of parts.
///
/// The inertia tensor is always about the part's own center of mass,
/// expressed in the frame the part currently lives in. Moving properties
/// between frames is [`transformed`](Self::transformed); moving the
/// reference point is [`inertia_about`](Self::inertia_about).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MassProperties {
    /// Total mass in kg.
    pub mass: f64,
    /// Center of mass in the current frame.
    pub center_of_mass: Vector3<f64>,
    /// Inertia tensor about the center of mass (kg·m²).
    pub inertia: Matrix3<f64>,
}

impl MassProperties {
    /// Create mass properties with given values.
    #[must_use]
    pub const fn new(mass: f64, center_of_mass: Vector3<f64>, inertia: Matrix3<f64>) -> Self {
        Self {
            mass,
            center_of_mass,
            inertia,
        }
    }

    /// The empty aggregate: zero mass at the origin.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            mass: 0.0,
            center_of_mass: Vector3::zeros(),
            inertia: Matrix3::zeros(),
        }
    }

    /// Transport the inertia tensor to `reference` via the parallel-axis
    /// theorem: `I' = I + m (|d|² E₃ − d dᵀ)` with `d` from the center of
    /// mass to `reference`.
    #[must_use]
    pub fn inertia_about(&self, reference: &Vector3<f64>) -> Matrix3<f64> {
        let d = reference - self.center_of_mass;
        self.inertia + self.mass * (Matrix3::identity() * d.dot(&d) - d * d.transpose())
    }

    /// Express these properties in another frame: the center of mass maps
    /// through the rigid transform, the inertia tensor rotates with it.
    #[must_use]
    pub fn transformed(
        &self,
        rotation: &UnitQuaternion<f64>,
        translation: &Vector3<f64>,
    ) -> Self {
        let rot = rotation.to_rotation_matrix();
        Self {
            mass: self.mass,
            center_of_mass: translation + rotation * self.center_of_mass,
            inertia: rot * self.inertia * rot.transpose(),
        }
    }

    /// Combine parts expressed in a common frame into one aggregate.
    ///
    /// Total mass is the plain sum, the center of mass is mass-weighted,
    /// and each part's inertia is transported to the combined center of
    /// mass by the parallel-axis theorem. An empty (or zero-total-mass)
    /// input yields [`MassProperties::zero`].
    #[must_use]
    pub fn aggregate(parts: &[Self]) -> Self {
        let mass: f64 = parts.iter().map(|p| p.mass).sum();
        if mass < MIN_TOTAL_MASS {
            return Self::zero();
        }

        let center_of_mass =
            parts.iter().map(|p| p.center_of_mass * p.mass).sum::<Vector3<f64>>() / mass;

        let inertia = parts
            .iter()
            .map(|p| p.inertia_about(&center_of_mass))
            .sum();

        Self {
            mass,
            center_of_mass,
            inertia,
        }
    }

    /// Check if the properties contain `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.mass.is_finite()
            && self.center_of_mass.iter().all(|x| x.is_finite())
            && self.inertia.iter().all(|x| x.is_finite())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_inertia_about_point_mass_pair() {
        // Two point masses m at (±d, 0, 0): perpendicular moments 2 m d².
        let m = 0.25;
        let d = 0.3;
        let parts = [
            MassProperties::new(m, Vector3::new(d, 0.0, 0.0), Matrix3::zeros()),
            MassProperties::new(m, Vector3::new(-d, 0.0, 0.0), Matrix3::zeros()),
        ];

        let agg = MassProperties::aggregate(&parts);
        assert_relative_eq!(agg.mass, 2.0 * m, epsilon = 1e-12);
        assert_relative_eq!(agg.center_of_mass, Vector3::zeros(), epsilon = 1e-12);
        assert_relative_eq!(agg.inertia[(1, 1)], 2.0 * m * d * d, epsilon = 1e-12);
        assert_relative_eq!(agg.inertia[(2, 2)], 2.0 * m * d * d, epsilon = 1e-12);
        assert_relative_eq!(agg.inertia[(0, 0)], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parallel_axis_transport_composes() {
        // Transporting com -> a and then applying the a -> b correction
        // equals the direct transport com -> b, for arbitrary a and b.
        let props = MassProperties::new(
            1.7,
            Vector3::new(0.1, -0.2, 0.3),
            Matrix3::from_diagonal(&Vector3::new(0.04, 0.05, 0.01)),
        );
        let a = Vector3::new(0.5, 0.0, -0.25);
        let b = Vector3::new(-0.3, 0.4, 0.1);

        let da = a - props.center_of_mass;
        let db = b - props.center_of_mass;
        let correction = props.mass
            * (Matrix3::identity() * (db.dot(&db) - da.dot(&da))
                - (db * db.transpose() - da * da.transpose()));
        let via_a = props.inertia_about(&a) + correction;

        assert_relative_eq!(via_a, props.inertia_about(&b), epsilon = 1e-12);
    }

    #[test]
    fn test_aggregate_empty_is_zero() {
        let agg = MassProperties::aggregate(&[]);
        assert_eq!(agg, MassProperties::zero());
    }

    #[test]
    fn test_aggregate_single_part_is_identity() {
        let part = MassProperties::new(
            2.0,
            Vector3::new(1.0, 2.0, 3.0),
            Matrix3::from_diagonal(&Vector3::new(0.1, 0.2, 0.3)),
        );
        let agg = MassProperties::aggregate(&[part]);
        assert_relative_eq!(agg.center_of_mass, part.center_of_mass, epsilon = 1e-12);
        assert_relative_eq!(agg.inertia, part.inertia, epsilon = 1e-12);
    }

    #[test]
    fn test_transformed_rotates_inertia() {
        let props = MassProperties::new(
            1.0,
            Vector3::new(0.0, 0.0, 1.0),
            Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 3.0)),
        );
        let rot = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2);
        let moved = props.transformed(&rot, &Vector3::new(5.0, 0.0, 0.0));

        // 90 degrees about Z swaps the XX and YY moments.
        assert_relative_eq!(moved.inertia[(0, 0)], 2.0, epsilon = 1e-10);
        assert_relative_eq!(moved.inertia[(1, 1)], 1.0, epsilon = 1e-10);
        assert_relative_eq!(moved.inertia[(2, 2)], 3.0, epsilon = 1e-10);
        assert_relative_eq!(
            moved.center_of_mass,
            Vector3::new(5.0, 0.0, 1.0),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_is_finite() {
        assert!(MassProperties::zero().is_finite());
        let bad = MassProperties::new(f64::NAN, Vector3::zeros(), Matrix3::zeros());
        assert!(!bad.is_finite());
    }
}
