use fixed_ecompass::{AxesAlignment, CompassSettings, ECompass};
use nalgebra::Vector3;

fn main() {
    let mut compass = ECompass::with_settings(CompassSettings {
        magnetometer_alignment: AxesAlignment::PxPyPz, // replace with the board's mounting
        hard_iron_offset: Vector3::new(0, 0, 0),        // replace with the calibrated offset
        ..Default::default()
    });

    for step in 0..10 {
        // this loop should repeat each time new accelerometer and magnetometer data is available
        let accelerometer = Vector3::new(0, 0, 16384); // replace this with actual accelerometer counts
        let turn = (step as f32 * 36.0).to_radians();
        let magnetometer = Vector3::new(
            (12000.0 * turn.cos()) as i16,
            (-12000.0 * turn.sin()) as i16,
            -9000,
        ); // replace this with actual magnetometer counts

        let attitude = compass.update(accelerometer, magnetometer);
        let degrees = attitude.to_degrees();

        println!(
            "Roll: {:.2}, Pitch: {:.2}, Yaw: {:.2}, Heading: {:.2}",
            degrees.x,
            degrees.y,
            degrees.z,
            f32::from(attitude.heading()) / 100.0
        );
    }
}
