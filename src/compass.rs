//! Tilt-compensated e-compass
//!
//! Roll is taken from the accelerometer Y/Z plane, pitch from the
//! accelerometer after it has been de-rotated by roll, and yaw from the
//! magnetometer after it has been de-rotated by both. Pitch is confined to
//! [-90°, 90°]; beyond that the roll/pitch decomposition is ambiguous and the
//! heading degrades near vertical.

use nalgebra::{ComplexField, RealField, Vector3};

use crate::math::{RAD_TO_DEG, atan2_deg, narrow_q15, trig};
use crate::types::{Attitude, FloatAttitude};

/// Calculate roll, pitch and tilt-compensated yaw in fixed point
///
/// Runs entirely in 16/32-bit integer arithmetic with a bounded number of
/// operations. Every input produces a result: zero vectors and `-32768`
/// components are clamped rather than rejected.
///
/// # Arguments
/// * `accelerometer` - Accelerometer reading in counts, +Z up when level
/// * `magnetometer` - Hard-iron corrected magnetometer reading in counts
///
/// # Returns
/// Angles in centi-degrees and the de-rotated magnetic field
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use fixed_ecompass::ecompass;
///
/// let level = Vector3::new(0, 0, 16384);
/// let east = Vector3::new(0, -16384, 0);
/// let attitude = ecompass(level, east);
///
/// assert_eq!(attitude.roll, 0);
/// assert_eq!(attitude.pitch, 0);
/// assert_eq!(attitude.yaw, 9000);
/// ```
pub fn ecompass(accelerometer: Vector3<i16>, magnetometer: Vector3<i16>) -> Attitude {
    let (gx, gy, gz) = (accelerometer.x, accelerometer.y, accelerometer.z);
    let bx = i32::from(magnetometer.x);
    let by = i32::from(magnetometer.y);
    let bz = i32::from(magnetometer.z);

    // Roll
    let roll = atan2_deg(gy, gz);
    let sin = i32::from(trig(gy, gz));
    let cos = i32::from(trig(gz, gy));

    // De-rotate by roll
    let field_y = narrow_q15(by * cos - bz * sin);
    let bz = i32::from(narrow_q15(by * sin + bz * cos));
    let gz = narrow_q15(i32::from(gy) * sin + i32::from(gz) * cos);

    // Pitch, folded into [-90°, 90°]
    let pitch = match atan2_deg(gx.saturating_neg(), gz) {
        p if p > 9000 => 18000 - p,
        p if p < -9000 => -18000 - p,
        p => p,
    };
    let sin = -i32::from(trig(gx, gz));
    let cos = i32::from(trig(gz, gx)).abs();

    // De-rotate by pitch
    let field_x = narrow_q15(bx * cos + bz * sin);
    let field_z = narrow_q15(-bx * sin + bz * cos);

    let yaw = atan2_deg(field_y.saturating_neg(), field_x);

    Attitude {
        roll,
        pitch,
        yaw,
        magnetic_field: Vector3::new(field_x, field_y, field_z),
    }
}

/// Floating-point counterpart of [`ecompass`]
///
/// Follows the same rotation sequence with `f32` trigonometry. Useful on
/// targets with an FPU and as a reference for the fixed-point path.
///
/// # Arguments
/// * `accelerometer` - Accelerometer reading, any unit, +Z up when level
/// * `magnetometer` - Hard-iron corrected magnetometer reading, any unit
///
/// # Returns
/// Angles in degrees and the de-rotated magnetic field
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use fixed_ecompass::compass::ecompass_f32;
///
/// let level = Vector3::new(0.0, 0.0, 1.0);
/// let north = Vector3::new(0.3, 0.0, -0.4);
/// let attitude = ecompass_f32(level, north);
///
/// assert!(attitude.roll.abs() < 1e-4);
/// assert!(attitude.yaw.abs() < 1e-4);
/// ```
pub fn ecompass_f32(accelerometer: Vector3<f32>, magnetometer: Vector3<f32>) -> FloatAttitude {
    let roll = accelerometer.y.atan2(accelerometer.z);
    let (sin, cos) = roll.sin_cos();

    let field_y = magnetometer.y * cos - magnetometer.z * sin;
    let bz = magnetometer.y * sin + magnetometer.z * cos;
    let gz = accelerometer.y * sin + accelerometer.z * cos;

    let half_turn = core::f32::consts::PI;
    let quarter_turn = core::f32::consts::FRAC_PI_2;
    let pitch = match (-accelerometer.x).atan2(gz) {
        p if p > quarter_turn => half_turn - p,
        p if p < -quarter_turn => -half_turn - p,
        p => p,
    };
    let (sin, cos) = pitch.sin_cos();

    let field_x = magnetometer.x * cos + bz * sin;
    let field_z = -magnetometer.x * sin + bz * cos;

    let yaw = (-field_y).atan2(field_x);

    FloatAttitude {
        roll: roll * RAD_TO_DEG,
        pitch: pitch * RAD_TO_DEG,
        yaw: yaw * RAD_TO_DEG,
        magnetic_field: Vector3::new(field_x, field_y, field_z),
    }
}
