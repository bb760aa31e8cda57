//! Magnetometer hard-iron correction

use nalgebra::Vector3;

/// Removes a constant hard-iron offset from a magnetometer reading
///
/// Computes `magnetometer - hard_iron_offset` per axis, saturating at the
/// `i16` bounds. The offset is the centre of the sphere traced by the raw
/// readings as the board is rotated; estimating it is left to the caller.
///
/// # Arguments
/// * `magnetometer` - Raw magnetometer reading in counts
/// * `hard_iron_offset` - Hard-iron offset in counts
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use fixed_ecompass::calibration::remove_hard_iron;
///
/// let raw = Vector3::new(1100, -180, 420);
/// let offset = Vector3::new(100, 20, -80);
///
/// assert_eq!(remove_hard_iron(raw, offset), Vector3::new(1000, -200, 500));
/// ```
pub fn remove_hard_iron(magnetometer: Vector3<i16>, hard_iron_offset: Vector3<i16>) -> Vector3<i16> {
    magnetometer.zip_map(&hard_iron_offset, i16::saturating_sub)
}
