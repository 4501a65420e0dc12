//! A single swing: launch parameters and the resulting ball flight

use glam::DVec2;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::consts::*;
use crate::{is_valid_launch_angle, launch_range};

/// Reasons a swing could not be taken
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SwingError {
    /// Launch angle outside the open interval (0°, 90°)
    #[error("angle {angle}° is invalid; it must be greater than 0° and less than 90°")]
    AngleInvalid { angle: f64 },
    /// The hole is already won or lost
    #[error("the hole has already ended")]
    HoleFinished,
}

/// One shot, immutable once taken
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swing {
    /// Launch angle above the ground (degrees)
    angle: f64,
    /// Launch speed (m/s), never negative
    velocity: f64,
}

impl Swing {
    /// Build a swing, rejecting angles outside (0°, 90°).
    ///
    /// Non-positive (or NaN) velocities are not an error: the ball simply
    /// doesn't move, so the effective velocity becomes 0.
    pub fn new(angle: f64, velocity: f64) -> Result<Self, SwingError> {
        if !is_valid_launch_angle(angle) {
            return Err(SwingError::AngleInvalid { angle });
        }

        let velocity = if velocity > 0.0 { velocity } else { 0.0 };

        Ok(Self { angle, velocity })
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angle_in_radians(&self) -> f64 {
        self.angle.to_radians()
    }

    /// Effective launch speed after clamping
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Distance the ball travels along the ground
    pub fn distance(&self) -> f64 {
        launch_range(self.angle, self.velocity)
    }

    /// Launch velocity split into (horizontal, vertical) components
    pub fn launch_velocity(&self) -> DVec2 {
        let theta = self.angle_in_radians();
        DVec2::new(theta.cos(), theta.sin()) * self.velocity
    }

    /// Seconds until the ball lands again
    pub fn flight_time(&self) -> f64 {
        2.0 * self.launch_velocity().y / GRAVITY
    }

    /// Highest point of the flight (meters)
    pub fn apex_height(&self) -> f64 {
        let vy = self.launch_velocity().y;
        vy * vy / (2.0 * GRAVITY)
    }

    /// Ball position `t` seconds after launch, relative to where it was hit.
    /// Clamped to the flight window, so the ball rests where it landed.
    pub fn position_at(&self, t: f64) -> DVec2 {
        let t = t.clamp(0.0, self.flight_time());
        let v = self.launch_velocity();
        DVec2::new(v.x * t, v.y * t - 0.5 * GRAVITY * t * t)
    }
}

/// Serialized with the derived distance so reports show how far each shot went
impl Serialize for Swing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Swing", 3)?;
        state.serialize_field("angle", &self.angle)?;
        state.serialize_field("velocity", &self.velocity)?;
        state.serialize_field("distance", &self.distance())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_at_45_degrees() {
        let swing = Swing::new(45.0, 56.0).unwrap();
        assert_eq!(swing.distance(), 320.0);
    }

    #[test]
    fn test_angle_bounds_are_exclusive() {
        assert_eq!(
            Swing::new(0.0, 10.0),
            Err(SwingError::AngleInvalid { angle: 0.0 })
        );
        assert_eq!(
            Swing::new(90.0, 10.0),
            Err(SwingError::AngleInvalid { angle: 90.0 })
        );
        assert!(Swing::new(-1.0, 100.0).is_err());
        assert!(Swing::new(91.0, 100.0).is_err());
        assert!(Swing::new(f64::NAN, 100.0).is_err());
        assert!(Swing::new(0.001, 10.0).is_ok());
        assert!(Swing::new(89.999, 10.0).is_ok());
    }

    #[test]
    fn test_non_positive_velocity_clamps_to_zero() {
        for v in [-10.0, 0.0, f64::NAN] {
            let swing = Swing::new(45.0, v).unwrap();
            assert_eq!(swing.velocity(), 0.0);
            assert_eq!(swing.distance(), 0.0);
        }
        assert_eq!(Swing::new(45.0, 12.5).unwrap().velocity(), 12.5);
    }

    #[test]
    fn test_flight_lands_at_distance() {
        let swing = Swing::new(30.0, 40.0).unwrap();
        let landing = swing.position_at(swing.flight_time());
        assert!((landing.x - swing.distance()).abs() < 1e-9);
        assert!(landing.y.abs() < 1e-9);

        // Past landing the ball stays put
        assert_eq!(swing.position_at(swing.flight_time() + 5.0), landing);
    }

    #[test]
    fn test_apex_is_reached_at_half_flight() {
        let swing = Swing::new(60.0, 25.0).unwrap();
        let mid = swing.position_at(swing.flight_time() / 2.0);
        assert!((mid.y - swing.apex_height()).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_distance() {
        let json = serde_json::to_value(Swing::new(45.0, 56.0).unwrap()).unwrap();
        assert_eq!(json["angle"], 45.0);
        assert_eq!(json["velocity"], 56.0);
        assert_eq!(json["distance"], 320.0);
    }

    #[test]
    fn test_error_message_names_angle() {
        let err = Swing::new(91.0, 1.0).unwrap_err();
        assert!(err.to_string().contains("91"));
    }
}
