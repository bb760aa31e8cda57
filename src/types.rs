//! Result and settings types for the e-compass

use nalgebra::Vector3;

use crate::axes::AxesAlignment;
use crate::math::CENTIDEGREES_PER_DEGREE;

/// Orientation produced by one e-compass evaluation
///
/// Angles are in centi-degrees (hundredths of a degree):
/// - `roll` in `(-18000, 18000]`
/// - `pitch` in `[-9000, 9000]`
/// - `yaw` in `(-18000, 18000]`, `0` when the horizontal field points along +X
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use fixed_ecompass::ecompass;
///
/// let attitude = ecompass(Vector3::new(0, 0, 16384), Vector3::new(16384, 0, 0));
/// assert_eq!(attitude.roll_degrees(), 0);
/// assert_eq!(attitude.heading(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attitude {
    /// Roll angle (rotation about X) in centi-degrees
    pub roll: i16,
    /// Pitch angle (rotation about Y) in centi-degrees
    pub pitch: i16,
    /// Yaw angle, the tilt-compensated compass heading, in centi-degrees
    pub yaw: i16,
    /// Magnetometer reading de-rotated by roll and pitch into the level frame
    ///
    /// Same unit as the magnetometer input.
    pub magnetic_field: Vector3<i16>,
}

impl Default for Attitude {
    fn default() -> Self {
        Self {
            roll: 0,
            pitch: 0,
            yaw: 0,
            magnetic_field: Vector3::zeros(),
        }
    }
}

impl Attitude {
    /// Roll in whole degrees, truncated towards zero
    pub fn roll_degrees(&self) -> i16 {
        self.roll / CENTIDEGREES_PER_DEGREE
    }

    /// Pitch in whole degrees, truncated towards zero
    pub fn pitch_degrees(&self) -> i16 {
        self.pitch / CENTIDEGREES_PER_DEGREE
    }

    /// Yaw in whole degrees, truncated towards zero
    pub fn yaw_degrees(&self) -> i16 {
        self.yaw / CENTIDEGREES_PER_DEGREE
    }

    /// Compass heading in centi-degrees, `[0, 36000)`
    pub fn heading(&self) -> u16 {
        i32::from(self.yaw).rem_euclid(36000) as u16
    }

    /// Roll, pitch and yaw in degrees
    pub fn to_degrees(&self) -> Vector3<f32> {
        Vector3::new(f32::from(self.roll), f32::from(self.pitch), f32::from(self.yaw))
            / f32::from(CENTIDEGREES_PER_DEGREE)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Attitude {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Attitude {{ roll: {}, pitch: {}, yaw: {}, magnetic_field: ({}, {}, {}) }}",
            self.roll,
            self.pitch,
            self.yaw,
            self.magnetic_field.x,
            self.magnetic_field.y,
            self.magnetic_field.z
        )
    }
}

/// Orientation from the floating-point e-compass
///
/// Angles are in degrees with the same ranges as [`Attitude`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatAttitude {
    /// Roll angle in degrees
    pub roll: f32,
    /// Pitch angle in degrees
    pub pitch: f32,
    /// Yaw angle in degrees
    pub yaw: f32,
    /// Magnetometer reading de-rotated into the level frame
    pub magnetic_field: Vector3<f32>,
}

impl Default for FloatAttitude {
    fn default() -> Self {
        Self {
            roll: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            magnetic_field: Vector3::zeros(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for FloatAttitude {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "FloatAttitude {{ roll: {}, pitch: {}, yaw: {} }}",
            self.roll,
            self.pitch,
            self.yaw
        )
    }
}

/// E-compass settings
///
/// Describes how the sensors are mounted and the constant magnetic offset of
/// the board, both applied by [`crate::ECompass`] before the angles are
/// computed.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use fixed_ecompass::{AxesAlignment, CompassSettings};
///
/// let settings = CompassSettings {
///     magnetometer_alignment: AxesAlignment::PyNxPz,
///     hard_iron_offset: Vector3::new(120, -45, 300),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompassSettings {
    /// Accelerometer axes relative to the body axes
    pub accelerometer_alignment: AxesAlignment,
    /// Magnetometer axes relative to the body axes
    pub magnetometer_alignment: AxesAlignment,
    /// Hard-iron offset in magnetometer counts, expressed in body axes
    pub hard_iron_offset: Vector3<i16>,
}

impl Default for CompassSettings {
    fn default() -> Self {
        Self {
            accelerometer_alignment: AxesAlignment::default(),
            magnetometer_alignment: AxesAlignment::default(),
            hard_iron_offset: Vector3::zeros(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CompassSettings {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "CompassSettings {{ accelerometer_alignment: {}, magnetometer_alignment: {}, hard_iron_offset: ({}, {}, {}) }}",
            self.accelerometer_alignment,
            self.magnetometer_alignment,
            self.hard_iron_offset.x,
            self.hard_iron_offset.y,
            self.hard_iron_offset.z
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attitude(roll: i16, pitch: i16, yaw: i16) -> Attitude {
        Attitude {
            roll,
            pitch,
            yaw,
            magnetic_field: Vector3::zeros(),
        }
    }

    #[test]
    fn test_whole_degrees_truncate_towards_zero() {
        let a = attitude(8999, -4550, -18000);
        assert_eq!(a.roll_degrees(), 89);
        assert_eq!(a.pitch_degrees(), -45);
        assert_eq!(a.yaw_degrees(), -180);
    }

    #[test]
    fn test_heading_wraps_negative_yaw() {
        assert_eq!(attitude(0, 0, 0).heading(), 0);
        assert_eq!(attitude(0, 0, 9000).heading(), 9000);
        assert_eq!(attitude(0, 0, -9000).heading(), 27000);
        assert_eq!(attitude(0, 0, 18000).heading(), 18000);
        assert_eq!(attitude(0, 0, -1).heading(), 35999);
    }

    #[test]
    fn test_to_degrees() {
        let degrees = attitude(4500, -1250, 17999).to_degrees();
        assert!((degrees.x - 45.0).abs() < 1e-4);
        assert!((degrees.y + 12.5).abs() < 1e-4);
        assert!((degrees.z - 179.99).abs() < 1e-3);
    }

    #[test]
    fn test_default_settings_are_identity() {
        let settings = CompassSettings::default();
        assert_eq!(settings.accelerometer_alignment, AxesAlignment::PxPyPz);
        assert_eq!(settings.magnetometer_alignment, AxesAlignment::PxPyPz);
        assert_eq!(settings.hard_iron_offset, Vector3::zeros());
    }
}
