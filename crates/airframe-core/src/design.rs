//! The aggregate body: partitioning, lock, queries, and step commits.

use hashbrown::{HashMap, HashSet};
use nalgebra::{UnitQuaternion, Vector3};

use airframe_types::{
    attitude, AirframeError, Element, KinematicData, KinematicState, MassProperties, Result,
};

/// The static group, staged by the one-way lock.
///
/// Locking consumes the constructing map: the element records move into
/// the aggregate computation and are dropped with it.
#[derive(Debug, Clone)]
enum StaticGroup {
    /// Pre-lock: individual static elements, still posable.
    Constructing(HashMap<String, Element>),
    /// Post-lock: the cached aggregate (total mass, center of mass, and
    /// inertia about it), expressed in the design's reference orientation
    /// at lock time.
    Locked(MassProperties),
}

/// The aggregate rigid body composed of elements.
///
/// Owns the element partition (static group and dynamic group), performs
/// the one-way static reduction, answers world-frame mass-property queries,
/// and holds the body's kinematic state. See the crate docs for the staging
/// model and an end-to-end example.
#[derive(Debug, Clone)]
pub struct Design {
    statics: StaticGroup,
    /// Static ids outlive their records so that post-lock mutation of a
    /// discarded static element reports the lock, not an unknown id.
    static_ids: HashSet<String>,
    dynamics: HashMap<String, Element>,
    state: KinematicState,
    time: f64,
    step_count: u64,
}

impl Default for Design {
    fn default() -> Self {
        Self::new()
    }
}

impl Design {
    /// Create an empty, unlocked design at rest at the world origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            statics: StaticGroup::Constructing(HashMap::new()),
            static_ids: HashSet::new(),
            dynamics: HashMap::new(),
            state: KinematicState::at_rest(),
            time: 0.0,
            step_count: 0,
        }
    }

    /// Add an element under a unique id.
    ///
    /// Fails with [`AirframeError::DuplicateElement`] if the id is already
    /// present in either group, and with [`AirframeError::LockedElement`]
    /// when a static element is added after the lock (the static group is
    /// frozen as a whole; dynamic additions stay legal).
    pub fn add_element(&mut self, id: impl Into<String>, element: Element) -> Result<()> {
        let id = id.into();
        if self.contains(&id) {
            return Err(AirframeError::duplicate(id));
        }

        if element.mobility().is_static() {
            let StaticGroup::Constructing(elements) = &mut self.statics else {
                return Err(AirframeError::locked(id));
            };
            self.static_ids.insert(id.clone());
            elements.insert(id, element);
        } else {
            self.dynamics.insert(id, element);
        }
        Ok(())
    }

    /// Remove an element, returning it.
    ///
    /// Dynamic elements may be removed at any time (jettisoned ballast,
    /// a separated payload); static elements only before the lock.
    pub fn remove_element(&mut self, id: &str) -> Result<Element> {
        if let Some(element) = self.dynamics.remove(id) {
            return Ok(element);
        }
        if self.static_ids.contains(id) {
            let StaticGroup::Constructing(elements) = &mut self.statics else {
                return Err(AirframeError::locked(id));
            };
            self.static_ids.remove(id);
            return elements
                .remove(id)
                .ok_or_else(|| AirframeError::unknown(id));
        }
        Err(AirframeError::unknown(id))
    }

    /// Set an element's pose to the given absolute displacement and
    /// attitude from the design origin.
    ///
    /// Fails with [`AirframeError::UnknownElement`] for an absent id and
    /// [`AirframeError::LockedElement`] for a static element once the
    /// design is locked.
    pub fn manipulate_element(
        &mut self,
        id: &str,
        displacement: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
    ) -> Result<()> {
        self.element_mut(id)?.reposition(displacement, attitude);
        Ok(())
    }

    /// Replace an element's mass (propellant consumption), rescaling its
    /// inertia. Same staging rules as [`manipulate_element`](Self::manipulate_element);
    /// fails with [`AirframeError::InvalidGeometry`] on a non-positive mass.
    pub fn set_element_mass(&mut self, id: &str, mass: f64) -> Result<()> {
        self.element_mut(id)?.set_mass(mass)
    }

    /// Look up a mutable element, enforcing the staging rules.
    fn element_mut(&mut self, id: &str) -> Result<&mut Element> {
        if self.dynamics.contains_key(id) {
            return self
                .dynamics
                .get_mut(id)
                .ok_or_else(|| AirframeError::unknown(id));
        }
        if self.static_ids.contains(id) {
            let StaticGroup::Constructing(elements) = &mut self.statics else {
                return Err(AirframeError::locked(id));
            };
            return elements.get_mut(id).ok_or_else(|| AirframeError::unknown(id));
        }
        Err(AirframeError::unknown(id))
    }

    /// Irreversibly fold the static group into one cached aggregate.
    ///
    /// Computes the group's total mass, mass-weighted center of mass, and
    /// parallel-axis inertia about it, all in the design's reference
    /// orientation, then discards the individual static records. Later
    /// mass-property queries cost only the number of dynamic elements.
    ///
    /// Fails with [`AirframeError::AlreadyLocked`] on a second call,
    /// leaving the cached aggregate untouched.
    pub fn lock(&mut self) -> Result<()> {
        let StaticGroup::Constructing(elements) = &mut self.statics else {
            return Err(AirframeError::AlreadyLocked);
        };

        let elements = std::mem::take(elements);
        let parts: Vec<MassProperties> =
            elements.values().map(Element::mass_properties).collect();
        let aggregate = MassProperties::aggregate(&parts);

        tracing::debug!(
            mass = aggregate.mass,
            folded = parts.len(),
            "static group reduced to cached aggregate"
        );
        self.statics = StaticGroup::Locked(aggregate);
        Ok(())
    }

    /// Combined mass properties in the world frame.
    ///
    /// Recombines the cached static aggregate (before the lock, the live
    /// static elements) with a freshly computed contribution from every
    /// current dynamic element, each carried through its own pose and the
    /// design's current position and attitude. The dynamic side is never
    /// cached: the result reflects the latest dynamic state on every call.
    ///
    /// An empty design reports zero mass centered on the body position.
    #[must_use]
    pub fn temporary_properties(&self) -> MassProperties {
        let mut parts = Vec::with_capacity(self.dynamics.len() + 1);
        match &self.statics {
            StaticGroup::Constructing(elements) => {
                parts.extend(elements.values().map(Element::mass_properties));
            }
            StaticGroup::Locked(aggregate) => {
                if aggregate.mass > 0.0 {
                    parts.push(*aggregate);
                }
            }
        }
        parts.extend(self.dynamics.values().map(Element::mass_properties));

        MassProperties::aggregate(&parts)
            .transformed(&self.state.attitude, &self.state.position)
    }

    /// Atomically commit one step's externally computed state update.
    ///
    /// Position and velocity deltas accumulate; attitude and angular
    /// velocity are replaced by the given absolute values. Fails with
    /// [`AirframeError::InvalidState`] - leaving every field unchanged -
    /// if `dt` is negative or non-finite, any update component is
    /// non-finite, or the replacement attitude cannot be normalized.
    pub fn step(&mut self, dt: f64, update: &KinematicData) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(AirframeError::invalid_state(format!(
                "timestep must be finite and non-negative, got {dt}"
            )));
        }
        if !update.is_finite() {
            return Err(AirframeError::invalid_state(
                "update contains non-finite components",
            ));
        }
        let attitude = attitude::try_unit(update.attitude).map_err(|_| {
            AirframeError::invalid_state("replacement attitude has near-zero norm")
        })?;

        self.state.position += update.delta_position;
        self.state.velocity += update.delta_velocity;
        self.state.attitude = attitude;
        self.state.angular_velocity = update.angular_velocity;
        self.time += dt;
        self.step_count += 1;
        Ok(())
    }

    /// The current kinematic state.
    #[must_use]
    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    /// Elapsed simulation time committed through [`step`](Self::step).
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Number of committed steps.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Whether the static group has been folded.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self.statics, StaticGroup::Locked(_))
    }

    /// The cached static aggregate, available once locked.
    #[must_use]
    pub fn static_aggregate(&self) -> Option<&MassProperties> {
        match &self.statics {
            StaticGroup::Constructing(_) => None,
            StaticGroup::Locked(aggregate) => Some(aggregate),
        }
    }

    /// Whether an element id is known to the design. Static ids remain
    /// known after the lock even though their records are gone.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.static_ids.contains(id) || self.dynamics.contains_key(id)
    }

    /// Number of known element ids (static ids count after the lock).
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.static_ids.len() + self.dynamics.len()
    }

    /// Number of dynamic elements.
    #[must_use]
    pub fn dynamic_count(&self) -> usize {
        self.dynamics.len()
    }
}
