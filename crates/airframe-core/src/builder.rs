//! Typed-record construction of an unlocked design.
//!
//! Configuration arrives as one compile-time-checked record per element
//! rather than an untyped kind/args mapping; whatever external format the
//! caller reads (a file, a request payload) is decoded into [`ElementSpec`]s
//! before this module sees it.

use airframe_types::{Element, Geometry, Mobility, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Design;

/// Configuration record for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementSpec {
    /// Shape and dimensions.
    pub geometry: Geometry,
    /// Mass in kg.
    pub mass: f64,
    /// Static/dynamic classification.
    pub mobility: Mobility,
}

impl ElementSpec {
    /// Create a spec.
    #[must_use]
    pub const fn new(geometry: Geometry, mass: f64, mobility: Mobility) -> Self {
        Self {
            geometry,
            mass,
            mobility,
        }
    }

    /// A spec for a static element.
    #[must_use]
    pub const fn fixed(geometry: Geometry, mass: f64) -> Self {
        Self::new(geometry, mass, Mobility::Static)
    }

    /// A spec for a dynamic element.
    #[must_use]
    pub const fn movable(geometry: Geometry, mass: f64) -> Self {
        Self::new(geometry, mass, Mobility::Dynamic)
    }
}

/// Build an unlocked design from named element specs.
///
/// Every element starts at the identity pose (center of mass at the design
/// origin); the caller poses elements afterwards and then locks. Geometry
/// and mass validation errors surface per element, as does a duplicate id.
pub fn build(specs: impl IntoIterator<Item = (String, ElementSpec)>) -> Result<Design> {
    let mut design = Design::new();
    for (id, spec) in specs {
        let element = Element::new(spec.geometry, spec.mass, spec.mobility)?;
        design.add_element(id, element)?;
    }
    tracing::debug!(elements = design.element_count(), "design assembled");
    Ok(design)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use airframe_types::AirframeError;

    #[test]
    fn test_build_assembles_unlocked_design() {
        let design = build([
            (
                "nose".to_string(),
                ElementSpec::fixed(Geometry::cone(0.036, 0.1), 0.05),
            ),
            (
                "tube".to_string(),
                ElementSpec::fixed(Geometry::tube(0.032, 0.036, 0.6), 0.30),
            ),
            (
                "propellant".to_string(),
                ElementSpec::movable(Geometry::cylinder(0.02, 0.1), 0.12),
            ),
        ])
        .unwrap();

        assert!(!design.is_locked());
        assert_eq!(design.element_count(), 3);
        assert_eq!(design.dynamic_count(), 1);
        // Unpositioned: everything still sits at the design origin.
        assert_eq!(design.temporary_properties().center_of_mass.norm(), 0.0);
    }

    #[test]
    fn test_build_rejects_duplicate_ids() {
        let err = build([
            (
                "tube".to_string(),
                ElementSpec::fixed(Geometry::cylinder(0.036, 0.6), 0.3),
            ),
            (
                "tube".to_string(),
                ElementSpec::fixed(Geometry::cylinder(0.036, 0.2), 0.1),
            ),
        ])
        .unwrap_err();
        assert_eq!(err, AirframeError::duplicate("tube"));
    }

    #[test]
    fn test_build_surfaces_invalid_specs() {
        let err = build([(
            "bad".to_string(),
            ElementSpec::fixed(Geometry::cylinder(-0.1, 0.6), 0.3),
        )])
        .unwrap_err();
        assert!(err.is_invalid_geometry());

        let err = build([(
            "weightless".to_string(),
            ElementSpec::movable(Geometry::sphere(0.1), 0.0),
        )])
        .unwrap_err();
        assert!(err.is_invalid_geometry());
    }
}
