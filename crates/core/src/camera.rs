//! Camera path: the camera dollies along z toward and away from the solid.

use crate::types::{CAMERA_ANGULAR_SPEED, CAMERA_MIN_Z, CAMERA_RADIUS};

/// `z(t) = max(min_z, radius * |sin(angular_speed * t)|)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPath {
    pub radius: f64,
    /// Radians per second.
    pub angular_speed: f64,
    pub min_z: f64,
}

impl Default for CameraPath {
    fn default() -> Self {
        Self {
            radius: CAMERA_RADIUS,
            angular_speed: CAMERA_ANGULAR_SPEED,
            min_z: CAMERA_MIN_Z,
        }
    }
}

impl CameraPath {
    /// Camera z after `t` seconds.
    pub fn z_at(&self, t: f64) -> f64 {
        (self.radius * (self.angular_speed * t).sin().abs()).max(self.min_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn starts_clamped_to_min() {
        assert_eq!(CameraPath::default().z_at(0.0), 20.0);
    }

    #[test]
    fn peaks_at_radius() {
        assert_relative_eq!(CameraPath::default().z_at(FRAC_PI_2), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn never_closer_than_min() {
        let path = CameraPath::default();
        for i in 0..1000 {
            let z = path.z_at(i as f64 * 0.013);
            assert!((20.0..=50.0).contains(&z), "z={z}");
        }
    }

    #[test]
    fn absolute_value_keeps_it_positive() {
        // sin is negative here; the camera still sits in front of the origin.
        let z = CameraPath::default().z_at(3.0 * FRAC_PI_2);
        assert_relative_eq!(z, 50.0, epsilon = 1e-9);
    }
}
