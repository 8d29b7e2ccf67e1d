//! Rigid part geometry, pose, and inertia.
//!
//! An [`Element`] is one rigid part of a composed vehicle: a geometry kind
//! from a closed set, a positive mass, a cached local inertia tensor, and a
//! pose relative to the owning design's origin. The static/dynamic
//! classification is fixed at construction; the staging rules that make it
//! matter live in the owning design, which holds the elements.

use nalgebra::{Matrix3, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AirframeError, MassProperties, Result};

/// Whether an element's pose and mass freeze when its design locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mobility {
    /// Permanently fixed once the owning design is locked.
    Static,
    /// Mutable at any time, including during simulation.
    Dynamic,
}

impl Mobility {
    /// Check if this is the static classification.
    #[must_use]
    pub fn is_static(self) -> bool {
        matches!(self, Self::Static)
    }
}

/// The closed set of part shapes.
///
/// Every axisymmetric shape is aligned with its local Z axis, and every
/// inertia tensor is about the shape's own center of mass in those
/// canonical axes, so the tensors come out diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    /// Solid cylinder, axis along local Z.
    Cylinder {
        /// Radius in meters.
        radius: f64,
        /// Full height in meters.
        height: f64,
    },
    /// Hollow cylinder (tube), axis along local Z.
    Tube {
        /// Inner radius in meters.
        inner_radius: f64,
        /// Outer radius in meters.
        outer_radius: f64,
        /// Full height in meters.
        height: f64,
    },
    /// Solid cone, apex toward local +Z, inertia about its centroid.
    Cone {
        /// Base radius in meters.
        radius: f64,
        /// Full height in meters.
        height: f64,
    },
    /// Solid sphere.
    Sphere {
        /// Radius in meters.
        radius: f64,
    },
    /// Lumped point mass with zero local inertia.
    PointMass,
}

impl Geometry {
    /// Create a solid cylinder.
    #[must_use]
    pub fn cylinder(radius: f64, height: f64) -> Self {
        Self::Cylinder { radius, height }
    }

    /// Create a tube (hollow cylinder).
    #[must_use]
    pub fn tube(inner_radius: f64, outer_radius: f64, height: f64) -> Self {
        Self::Tube {
            inner_radius,
            outer_radius,
            height,
        }
    }

    /// Create a solid cone.
    #[must_use]
    pub fn cone(radius: f64, height: f64) -> Self {
        Self::Cone { radius, height }
    }

    /// Create a solid sphere.
    #[must_use]
    pub fn sphere(radius: f64) -> Self {
        Self::Sphere { radius }
    }

    /// Create a point mass.
    #[must_use]
    pub fn point_mass() -> Self {
        Self::PointMass
    }

    /// Check that every dimension is positive and finite.
    pub fn validate(&self) -> Result<()> {
        let check = |value: f64, what: &str| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(AirframeError::invalid_geometry(format!(
                    "{what} must be positive, got {value}"
                )))
            }
        };

        match *self {
            Self::Cylinder { radius, height } | Self::Cone { radius, height } => {
                check(radius, "radius")?;
                check(height, "height")
            }
            Self::Tube {
                inner_radius,
                outer_radius,
                height,
            } => {
                check(inner_radius, "inner radius")?;
                check(outer_radius, "outer radius")?;
                check(height, "height")?;
                if inner_radius >= outer_radius {
                    return Err(AirframeError::invalid_geometry(format!(
                        "inner radius {inner_radius} must be smaller than outer radius {outer_radius}"
                    )));
                }
                Ok(())
            }
            Self::Sphere { radius } => check(radius, "radius"),
            Self::PointMass => Ok(()),
        }
    }

    /// Closed-form inertia tensor about the shape's center of mass for the
    /// given mass, in the canonical local axes.
    #[must_use]
    pub fn local_inertia(&self, mass: f64) -> Matrix3<f64> {
        match *self {
            Self::Cylinder { radius, height } => {
                let r2 = radius * radius;
                let h2 = height * height;
                let ix = mass * (3.0 * r2 + h2) / 12.0;
                let iz = 0.5 * mass * r2;
                Matrix3::from_diagonal(&Vector3::new(ix, ix, iz))
            }
            Self::Tube {
                inner_radius,
                outer_radius,
                height,
            } => {
                let rr = inner_radius * inner_radius + outer_radius * outer_radius;
                let h2 = height * height;
                let ix = mass * (3.0 * rr + h2) / 12.0;
                let iz = 0.5 * mass * rr;
                Matrix3::from_diagonal(&Vector3::new(ix, ix, iz))
            }
            Self::Cone { radius, height } => {
                let r2 = radius * radius;
                let h2 = height * height;
                let ix = mass * (3.0 * r2 / 20.0 + 3.0 * h2 / 80.0);
                let iz = 0.3 * mass * r2;
                Matrix3::from_diagonal(&Vector3::new(ix, ix, iz))
            }
            Self::Sphere { radius } => {
                let i = 0.4 * mass * radius * radius;
                Matrix3::from_diagonal(&Vector3::new(i, i, i))
            }
            Self::PointMass => Matrix3::zeros(),
        }
    }
}

/// Position and orientation of an element relative to its design's origin.
///
/// The position locates the element's center of mass; the rotation maps the
/// element's canonical axes into the design frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    /// Center of mass in the design frame.
    pub position: Vector3<f64>,
    /// Orientation of the canonical axes in the design frame.
    pub rotation: UnitQuaternion<f64>,
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl Pose {
    /// The identity pose: center of mass at the design origin, no rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            position: Vector3::zeros(),
            rotation: UnitQuaternion::identity(),
        }
    }

    /// Check if the pose contains `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|x| x.is_finite())
            && self.rotation.coords.iter().all(|x| x.is_finite())
    }
}

/// One rigid part of a composed vehicle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    geometry: Geometry,
    mass: f64,
    /// Local inertia about the element's own center of mass, cached at
    /// construction and rescaled on mass updates.
    inertia: Matrix3<f64>,
    pose: Pose,
    mobility: Mobility,
}

impl Element {
    /// Construct an element at the identity pose.
    ///
    /// Fails with [`AirframeError::InvalidGeometry`] if the mass or any
    /// shape dimension is not positive and finite.
    pub fn new(geometry: Geometry, mass: f64, mobility: Mobility) -> Result<Self> {
        geometry.validate()?;
        if !mass.is_finite() || mass <= 0.0 {
            return Err(AirframeError::invalid_geometry(format!(
                "mass must be positive, got {mass}"
            )));
        }
        Ok(Self {
            geometry,
            mass,
            inertia: geometry.local_inertia(mass),
            pose: Pose::identity(),
            mobility,
        })
    }

    /// The element's geometry kind.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// The element's mass in kg.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// The element's static/dynamic classification.
    #[must_use]
    pub fn mobility(&self) -> Mobility {
        self.mobility
    }

    /// The element's pose in the design frame.
    #[must_use]
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// The local inertia tensor about the element's own center of mass.
    #[must_use]
    pub fn local_inertia(&self) -> Matrix3<f64> {
        self.inertia
    }

    /// Set the pose to the given absolute displacement and attitude from
    /// the canonical origin-centered configuration. Repeated calls
    /// overwrite, they do not compound.
    pub fn reposition(&mut self, displacement: Vector3<f64>, attitude: UnitQuaternion<f64>) {
        self.pose = Pose {
            position: displacement,
            rotation: attitude,
        };
    }

    /// Replace the element's mass, rescaling the cached inertia tensor
    /// (every closed-form tensor is linear in mass).
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(AirframeError::invalid_geometry(format!(
                "mass must be positive, got {mass}"
            )));
        }
        self.inertia *= mass / self.mass;
        self.mass = mass;
        Ok(())
    }

    /// Mass properties in the design frame: the center of mass at the
    /// posed position, the inertia tensor rotated by the posed attitude.
    #[must_use]
    pub fn mass_properties(&self) -> MassProperties {
        let rot = self.pose.rotation.to_rotation_matrix();
        MassProperties::new(
            self.mass,
            self.pose.position,
            rot * self.inertia * rot.transpose(),
        )
    }

    /// Inertia tensor in the design frame about `reference`: the local
    /// tensor rotated by the element attitude and transported by the
    /// parallel-axis theorem.
    #[must_use]
    pub fn world_inertia(&self, reference: &Vector3<f64>) -> Matrix3<f64> {
        self.mass_properties().inertia_about(reference)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylinder_inertia_diagonal_symmetric() {
        let inertia = Geometry::cylinder(0.036, 0.12).local_inertia(0.18);

        // Diagonal with the two off-axis moments equal.
        assert_relative_eq!(inertia[(0, 0)], inertia[(1, 1)], epsilon = 1e-15);
        assert_relative_eq!(inertia[(0, 1)], 0.0);
        assert_relative_eq!(inertia[(0, 2)], 0.0);
        assert_relative_eq!(inertia[(1, 2)], 0.0);

        let expected_ix = 0.18 * (3.0 * 0.036 * 0.036 + 0.12 * 0.12) / 12.0;
        let expected_iz = 0.5 * 0.18 * 0.036 * 0.036;
        assert_relative_eq!(inertia[(0, 0)], expected_ix, epsilon = 1e-15);
        assert_relative_eq!(inertia[(2, 2)], expected_iz, epsilon = 1e-15);
    }

    #[test]
    fn test_tube_matches_cylinder_difference() {
        // A tube of uniform density equals the outer cylinder minus the
        // inner one; compare with masses split by cross-section area.
        let (ri, ro, h) = (0.02, 0.05, 0.3);
        let area_outer = ro * ro;
        let area_inner = ri * ri;
        let mass = 1.3;
        let m_outer = mass * area_outer / (area_outer - area_inner);
        let m_inner = mass * area_inner / (area_outer - area_inner);

        let tube = Geometry::tube(ri, ro, h).local_inertia(mass);
        let diff = Geometry::cylinder(ro, h).local_inertia(m_outer)
            - Geometry::cylinder(ri, h).local_inertia(m_inner);

        assert_relative_eq!(tube, diff, epsilon = 1e-12);
    }

    #[test]
    fn test_cone_axial_inertia() {
        let inertia = Geometry::cone(0.04, 0.1).local_inertia(0.05);
        assert_relative_eq!(inertia[(2, 2)], 0.3 * 0.05 * 0.04 * 0.04, epsilon = 1e-15);
        assert_relative_eq!(inertia[(0, 0)], inertia[(1, 1)], epsilon = 1e-15);
    }

    #[test]
    fn test_sphere_inertia_isotropic() {
        let inertia = Geometry::sphere(0.5).local_inertia(2.0);
        let expected = 0.4 * 2.0 * 0.25;
        for i in 0..3 {
            assert_relative_eq!(inertia[(i, i)], expected, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        assert!(Element::new(Geometry::cylinder(0.0, 1.0), 1.0, Mobility::Static).is_err());
        assert!(Element::new(Geometry::cylinder(0.1, -1.0), 1.0, Mobility::Static).is_err());
        assert!(Element::new(Geometry::sphere(f64::NAN), 1.0, Mobility::Static).is_err());
        // Tube inner radius must stay below the outer radius.
        assert!(Element::new(Geometry::tube(0.05, 0.05, 1.0), 1.0, Mobility::Static).is_err());
        assert!(Element::new(Geometry::tube(0.06, 0.05, 1.0), 1.0, Mobility::Static).is_err());
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        let err = Element::new(Geometry::sphere(0.1), 0.0, Mobility::Dynamic).unwrap_err();
        assert!(err.is_invalid_geometry());
        let err = Element::new(Geometry::sphere(0.1), -2.0, Mobility::Dynamic).unwrap_err();
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn test_reposition_overwrites() {
        let mut el = Element::new(Geometry::point_mass(), 1.0, Mobility::Dynamic).unwrap();
        el.reposition(Vector3::new(1.0, 0.0, 0.0), UnitQuaternion::identity());
        el.reposition(Vector3::new(0.0, 2.0, 0.0), UnitQuaternion::identity());

        // Absolute, not incremental: the second call wins outright.
        assert_relative_eq!(
            el.pose().position,
            Vector3::new(0.0, 2.0, 0.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_world_inertia_point_mass_offset() {
        let mut el = Element::new(Geometry::point_mass(), 0.5, Mobility::Static).unwrap();
        el.reposition(Vector3::new(0.2, 0.0, 0.0), UnitQuaternion::identity());

        let inertia = el.world_inertia(&Vector3::zeros());
        // m d² about the two perpendicular axes, nothing about the offset axis.
        assert_relative_eq!(inertia[(0, 0)], 0.0, epsilon = 1e-15);
        assert_relative_eq!(inertia[(1, 1)], 0.5 * 0.04, epsilon = 1e-15);
        assert_relative_eq!(inertia[(2, 2)], 0.5 * 0.04, epsilon = 1e-15);
    }

    #[test]
    fn test_world_inertia_rotated_cylinder() {
        // Rotating a cylinder 90 degrees about X moves its axis onto Y, so
        // the axial moment shows up on the YY entry.
        let mut el = Element::new(Geometry::cylinder(0.05, 0.4), 1.0, Mobility::Static).unwrap();
        let local = el.local_inertia();
        el.reposition(
            Vector3::zeros(),
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::FRAC_PI_2),
        );

        let world = el.world_inertia(&Vector3::zeros());
        assert_relative_eq!(world[(0, 0)], local[(0, 0)], epsilon = 1e-12);
        assert_relative_eq!(world[(1, 1)], local[(2, 2)], epsilon = 1e-12);
        assert_relative_eq!(world[(2, 2)], local[(1, 1)], epsilon = 1e-12);
    }

    #[test]
    fn test_set_mass_rescales_inertia() {
        let mut el = Element::new(Geometry::cylinder(0.1, 0.3), 2.0, Mobility::Dynamic).unwrap();
        let before = el.local_inertia();
        el.set_mass(1.0).unwrap();

        assert_relative_eq!(el.local_inertia(), before * 0.5, epsilon = 1e-12);
        assert_relative_eq!(el.local_inertia(), Geometry::cylinder(0.1, 0.3).local_inertia(1.0), epsilon = 1e-12);
        assert!(el.set_mass(0.0).is_err());
    }
}
