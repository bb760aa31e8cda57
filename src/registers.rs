//! FXOS8700CQ output register decoding
//!
//! Converts the six-byte output frames of the combined accelerometer and
//! magnetometer into the count vectors consumed by [`crate::ecompass`], and
//! counts into physical units for [`crate::compass::ecompass_f32`]. Reading the
//! registers over I2C is left to the bus driver.

use nalgebra::Vector3;

/// Magnetometer sensitivity in µT per count
pub const MAGNETOMETER_RESOLUTION: f32 = 0.1;

/// Accelerometer counts per full-scale unit of the 14-bit output
const ACCELEROMETER_COUNTS: f32 = 8192.0;

/// Accelerometer full-scale range (`XYZ_DATA_CFG` register)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelerometerRange {
    /// ±2 g
    #[default]
    G2,
    /// ±4 g
    G4,
    /// ±8 g
    G8,
}

impl AccelerometerRange {
    /// Value of the `fs` field in `XYZ_DATA_CFG`
    pub fn register_value(self) -> u8 {
        match self {
            AccelerometerRange::G2 => 0b00,
            AccelerometerRange::G4 => 0b01,
            AccelerometerRange::G8 => 0b10,
        }
    }

    /// Sensitivity in g per count
    pub fn resolution(self) -> f32 {
        let full_scale = match self {
            AccelerometerRange::G2 => 2.0,
            AccelerometerRange::G4 => 4.0,
            AccelerometerRange::G8 => 8.0,
        };
        full_scale / ACCELEROMETER_COUNTS
    }

    /// Convert accelerometer counts to g
    pub fn to_g(self, counts: Vector3<i16>) -> Vector3<f32> {
        counts.cast::<f32>() * self.resolution()
    }
}

/// Decode the accelerometer frame starting at `OUT_X_MSB`
///
/// Each axis is a big-endian, left-justified 14-bit two's complement value.
///
/// # Example
/// ```
/// use fixed_ecompass::registers::accelerometer_from_registers;
///
/// // +1 g on Z in the ±2 g range is 4096 counts
/// let counts = accelerometer_from_registers(&[0x00, 0x00, 0xff, 0xfc, 0x40, 0x00]);
/// assert_eq!(counts, nalgebra::Vector3::new(0, -1, 4096));
/// ```
pub fn accelerometer_from_registers(frame: &[u8; 6]) -> Vector3<i16> {
    big_endian_triple(frame).map(|value| value >> 2)
}

/// Decode the magnetometer frame starting at `M_OUT_X_MSB`
///
/// Each axis is a big-endian 16-bit two's complement value.
pub fn magnetometer_from_registers(frame: &[u8; 6]) -> Vector3<i16> {
    big_endian_triple(frame)
}

/// Convert magnetometer counts to µT
pub fn magnetometer_to_microtesla(counts: Vector3<i16>) -> Vector3<f32> {
    counts.cast::<f32>() * MAGNETOMETER_RESOLUTION
}

fn big_endian_triple(frame: &[u8; 6]) -> Vector3<i16> {
    Vector3::new(
        i16::from_be_bytes([frame[0], frame[1]]),
        i16::from_be_bytes([frame[2], frame[3]]),
        i16::from_be_bytes([frame[4], frame[5]]),
    )
}
