//! Bit-exact checks of the integer e-compass against recorded vectors
//!
//! `testdata/ecompass_golden.csv` and `testdata/kernel_golden.csv` hold raw
//! inputs and the expected 16-bit outputs for them. Any change in rounding,
//! shift order or clamping shows up here as a mismatch.

use fixed_ecompass::{ECompass, atan2_deg, ecompass, trig};
use nalgebra::Vector3;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct CompassRecord {
    accel_x: i16,
    accel_y: i16,
    accel_z: i16,
    mag_x: i16,
    mag_y: i16,
    mag_z: i16,
    roll: i16,
    pitch: i16,
    yaw: i16,
    field_x: i16,
    field_y: i16,
    field_z: i16,
}

impl CompassRecord {
    fn accelerometer(&self) -> Vector3<i16> {
        Vector3::new(self.accel_x, self.accel_y, self.accel_z)
    }

    fn magnetometer(&self) -> Vector3<i16> {
        Vector3::new(self.mag_x, self.mag_y, self.mag_z)
    }
}

#[derive(Debug, Deserialize)]
struct KernelRecord {
    y: i16,
    x: i16,
    atan2_deg: i16,
    trig: i16,
}

fn load<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

#[test]
fn test_kernels_match_recorded_output() -> Result<(), Box<dyn Error>> {
    let records: Vec<KernelRecord> = load("testdata/kernel_golden.csv")?;
    assert!(!records.is_empty(), "no kernel records loaded");

    for record in &records {
        assert_eq!(
            atan2_deg(record.y, record.x),
            record.atan2_deg,
            "atan2_deg({}, {})",
            record.y,
            record.x
        );
        assert_eq!(
            trig(record.y, record.x),
            record.trig,
            "trig({}, {})",
            record.y,
            record.x
        );
    }

    Ok(())
}

#[test]
fn test_ecompass_matches_recorded_output() -> Result<(), Box<dyn Error>> {
    let records: Vec<CompassRecord> = load("testdata/ecompass_golden.csv")?;
    assert!(!records.is_empty(), "no compass records loaded");

    for (line, record) in records.iter().enumerate() {
        let attitude = ecompass(record.accelerometer(), record.magnetometer());

        assert_eq!(
            (attitude.roll, attitude.pitch, attitude.yaw),
            (record.roll, record.pitch, record.yaw),
            "angles differ on record {}: {:?}",
            line + 1,
            record
        );
        assert_eq!(
            attitude.magnetic_field,
            Vector3::new(record.field_x, record.field_y, record.field_z),
            "field differs on record {}: {:?}",
            line + 1,
            record
        );
    }

    Ok(())
}

#[test]
fn test_stateful_compass_replays_recording() -> Result<(), Box<dyn Error>> {
    let records: Vec<CompassRecord> = load("testdata/ecompass_golden.csv")?;
    let mut compass = ECompass::new();

    for record in &records {
        compass.update(record.accelerometer(), record.magnetometer());
        let attitude = compass.attitude().ok_or("attitude missing after update")?;
        assert_eq!(attitude.roll_degrees(), record.roll / 100);
        assert_eq!(attitude.yaw, record.yaw);
    }

    Ok(())
}
