//! Kinematic state of the assembled body and per-step update records.

use nalgebra::{Quaternion, UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World-frame kinematic state of the assembled vehicle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KinematicState {
    /// Position in the world frame (m).
    pub position: Vector3<f64>,
    /// Velocity in the world frame (m/s).
    pub velocity: Vector3<f64>,
    /// Orientation quaternion mapping body to world.
    pub attitude: UnitQuaternion<f64>,
    /// Angular velocity in the world frame (rad/s).
    pub angular_velocity: Vector3<f64>,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self::at_rest()
    }
}

impl KinematicState {
    /// A body at rest at the world origin with identity attitude.
    #[must_use]
    pub fn at_rest() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }

    /// Check if the state contains `NaN` or `Inf` values.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|x| x.is_finite())
            && self.velocity.iter().all(|x| x.is_finite())
            && self.attitude.coords.iter().all(|x| x.is_finite())
            && self.angular_velocity.iter().all(|x| x.is_finite())
    }
}

/// One step's externally computed state update.
///
/// The update is deliberately asymmetric: position and velocity deltas are
/// **accumulated** onto the current state, while attitude and angular
/// velocity are **replaced** by the given absolute values. Whoever computes
/// the update owns attitude integration; the engine only commits it.
///
/// The attitude is a raw quaternion: it may arrive unnormalized from an
/// external integrator and is normalized (or rejected) at commit time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KinematicData {
    /// Position increment, added to the current position (m).
    pub delta_position: Vector3<f64>,
    /// Velocity increment, added to the current velocity (m/s).
    pub delta_velocity: Vector3<f64>,
    /// Absolute replacement attitude, body to world.
    pub attitude: Quaternion<f64>,
    /// Absolute replacement angular velocity, world frame (rad/s).
    pub angular_velocity: Vector3<f64>,
}

impl KinematicData {
    /// Create a step update.
    #[must_use]
    pub const fn new(
        delta_position: Vector3<f64>,
        delta_velocity: Vector3<f64>,
        attitude: Quaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            delta_position,
            delta_velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Check if every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.delta_position.iter().all(|x| x.is_finite())
            && self.delta_velocity.iter().all(|x| x.is_finite())
            && self.attitude.coords.iter().all(|x| x.is_finite())
            && self.angular_velocity.iter().all(|x| x.is_finite())
    }
}
