#![no_std]

//! Fixed-point e-compass - tilt-compensated heading without an FPU
//!
//! This library fuses a 3-axis accelerometer and a 3-axis magnetometer into
//! roll, pitch and yaw using nothing but 16/32-bit integer arithmetic. Ratios,
//! arctangents, sines and cosines come from binary-search kernels with a fixed
//! number of rounds, so the cost of an update does not depend on its input
//! and no divide or square-root instruction is needed.
//!
//! # Features
//!
//! - Division-free ratio, arctangent and sine/cosine kernels in Q15
//! - Tilt-compensated yaw with roll and pitch in centi-degrees
//! - Floating-point counterpart for verification or FPU targets
//! - Sensor axes remapping and hard-iron offset removal
//! - FXOS8700CQ register frame decoding
//! - `#![no_std]`, no allocation, optional `defmt` support
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use fixed_ecompass::ECompass;
//!
//! let mut compass = ECompass::new();
//!
//! // Raw sensor counts
//! let accelerometer = Vector3::new(0, 0, 16384); // level
//! let magnetometer = Vector3::new(0, -16384, 0); // field towards east
//!
//! let attitude = compass.update(accelerometer, magnetometer);
//!
//! // Angles in centi-degrees
//! assert_eq!(attitude.roll, 0);
//! assert_eq!(attitude.pitch, 0);
//! assert_eq!(attitude.yaw, 9000);
//! ```

pub mod axes;
pub mod calibration;
pub mod compass;
mod ecompass;
pub mod math;
pub mod registers;
mod types;

// Re-export the main entry points
pub use axes::{AxesAlignment, axes_swap};
pub use compass::{ecompass, ecompass_f32};
pub use ecompass::ECompass;
pub use math::{atan2_deg, atan_deg, divide, trig};
pub use types::*;
