//! Two-axis thrust-vector mount with servo rate limiting.

use nalgebra::{UnitQuaternion, Vector3};

/// A gimballed motor mount driven by two servos.
///
/// Deflection angles chase their targets at a bounded rate, modeling real
/// servo response. The gimbal produces a body-frame thrust direction and
/// the resulting force/torque pair for a thrust magnitude supplied by the
/// caller - thrust-curve bookkeeping stays outside, as does everything the
/// engine consumes through [`KinematicData`](airframe_types::KinematicData).
///
/// At zero deflection the thrust vector points along body +Z; `theta_x`
/// tilts it in the Y-Z plane, `theta_y` in the X-Z plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustGimbal {
    theta_x: f64,
    theta_y: f64,
    target_x: f64,
    target_y: f64,
    /// Maximum servo rate in rad/s.
    max_rate: f64,
    /// Motor position in the body frame.
    mount: Vector3<f64>,
}

impl ThrustGimbal {
    /// Create a gimbal at zero deflection with the given maximum servo
    /// rate (rad/s), mounted at the body origin.
    #[must_use]
    pub fn new(max_rate: f64) -> Self {
        Self {
            theta_x: 0.0,
            theta_y: 0.0,
            target_x: 0.0,
            target_y: 0.0,
            max_rate,
            mount: Vector3::zeros(),
        }
    }

    /// Set the motor's position in the body frame, used as the torque arm.
    pub fn mount_at(&mut self, offset: Vector3<f64>) {
        self.mount = offset;
    }

    /// Set the servo target angles in radians.
    pub fn set_target(&mut self, target_x: f64, target_y: f64) {
        self.target_x = target_x;
        self.target_y = target_y;
    }

    /// Jump both deflections straight to their targets (initialization).
    pub fn snap_to_target(&mut self) {
        self.theta_x = self.target_x;
        self.theta_y = self.target_y;
    }

    /// Current deflection angles `(theta_x, theta_y)` in radians.
    #[must_use]
    pub fn deflection(&self) -> (f64, f64) {
        (self.theta_x, self.theta_y)
    }

    /// Advance each servo toward its target by at most `max_rate * dt`.
    ///
    /// Inside that band the deflection snaps onto the target; without the
    /// snap the angles oscillate around an unattainable setpoint.
    pub fn step(&mut self, dt: f64) {
        let band = self.max_rate * dt;
        self.theta_x = Self::slew(self.theta_x, self.target_x, band);
        self.theta_y = Self::slew(self.theta_y, self.target_y, band);
    }

    fn slew(current: f64, target: f64, band: f64) -> f64 {
        let error = target - current;
        if error.abs() > band {
            current + band * error.signum()
        } else {
            target
        }
    }

    /// Unit thrust direction in the body frame for the current deflection.
    #[must_use]
    pub fn thrust_direction(&self) -> Vector3<f64> {
        let (sx, cx) = self.theta_x.sin_cos();
        let (sy, cy) = self.theta_y.sin_cos();
        Vector3::new(sy, -sx * cy, cx * cy)
    }

    /// Body-frame force and torque for a thrust magnitude, with the torque
    /// arm taken from the mount to `center_of_mass`.
    #[must_use]
    pub fn force_torque(
        &self,
        thrust: f64,
        center_of_mass: &Vector3<f64>,
    ) -> (Vector3<f64>, Vector3<f64>) {
        let force = thrust * self.thrust_direction();
        let arm = self.mount - center_of_mass;
        (force, arm.cross(&force))
    }

    /// Orientation of the nozzle: the rotation carrying body -Z onto the
    /// current exhaust direction.
    #[must_use]
    pub fn attitude(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::rotation_between(&-Vector3::z(), &-self.thrust_direction())
            .unwrap_or_else(UnitQuaternion::identity)
    }
}
