//! Stateful e-compass for periodic sampling loops

use nalgebra::Vector3;

use crate::axes::axes_swap;
use crate::calibration::remove_hard_iron;
use crate::compass::ecompass;
use crate::types::{Attitude, CompassSettings};

/// E-compass bound to a sensor mounting and hard-iron offset
///
/// Applies the configured axes alignment and hard-iron correction to each
/// pair of raw readings, computes the attitude in fixed point and keeps the
/// latest result. Each instance owns its state, so several compasses can run
/// side by side.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use fixed_ecompass::{CompassSettings, ECompass};
///
/// let mut compass = ECompass::with_settings(CompassSettings {
///     hard_iron_offset: Vector3::new(200, -100, 0),
///     ..Default::default()
/// });
/// assert!(compass.attitude().is_none());
///
/// let attitude = compass.update(Vector3::new(0, 0, 16384), Vector3::new(16584, -100, 0));
/// assert_eq!(attitude.yaw, 0);
/// assert_eq!(compass.attitude(), Some(attitude));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ECompass {
    /// Mounting and calibration settings
    settings: CompassSettings,
    /// Result of the most recent update
    attitude: Option<Attitude>,
}

impl ECompass {
    /// Create a new e-compass with default settings
    pub fn new() -> Self {
        Self::with_settings(CompassSettings::default())
    }

    /// Create a new e-compass with specified settings
    pub fn with_settings(settings: CompassSettings) -> Self {
        Self {
            settings,
            attitude: None,
        }
    }

    /// Current settings
    pub fn settings(&self) -> CompassSettings {
        self.settings
    }

    /// Replace the settings; the stored attitude is kept until the next update
    pub fn set_settings(&mut self, settings: CompassSettings) {
        self.settings = settings;
    }

    /// Compute the attitude from raw sensor readings
    ///
    /// Both readings are remapped to body axes first, then the hard-iron
    /// offset is removed from the magnetometer.
    ///
    /// # Arguments
    /// * `accelerometer` - Accelerometer reading in sensor axes
    /// * `magnetometer` - Magnetometer reading in sensor axes
    pub fn update(&mut self, accelerometer: Vector3<i16>, magnetometer: Vector3<i16>) -> Attitude {
        let accelerometer = axes_swap(accelerometer, self.settings.accelerometer_alignment);
        let magnetometer = remove_hard_iron(
            axes_swap(magnetometer, self.settings.magnetometer_alignment),
            self.settings.hard_iron_offset,
        );

        let attitude = ecompass(accelerometer, magnetometer);

        #[cfg(feature = "defmt")]
        defmt::trace!(
            "ecompass roll={} pitch={} yaw={}",
            attitude.roll,
            attitude.pitch,
            attitude.yaw
        );

        self.attitude = Some(attitude);
        attitude
    }

    /// Result of the most recent update, `None` before the first one
    pub fn attitude(&self) -> Option<Attitude> {
        self.attitude
    }

    /// Latest roll in whole degrees
    pub fn roll_degrees(&self) -> Option<i16> {
        self.attitude.map(|attitude| attitude.roll_degrees())
    }

    /// Latest compass heading in centi-degrees, `[0, 36000)`
    pub fn heading(&self) -> Option<u16> {
        self.attitude.map(|attitude| attitude.heading())
    }

    /// Forget the stored attitude
    pub fn reset(&mut self) {
        self.attitude = None;
    }
}
