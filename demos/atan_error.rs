//! Arctangent approximation error
//!
//! Sweeps the first octant of `atan_deg` and the full circle of `atan2_deg`
//! against `f64::atan2` and plots the error in centi-degrees.
//!
//! Run with: `cargo run --example atan_error`

use fixed_ecompass::{atan_deg, atan2_deg};
use plotters::prelude::*;
use std::error::Error;

const RADIUS: f64 = 32000.0;

fn main() -> Result<(), Box<dyn Error>> {
    // First octant at full scale, error against the true angle
    let octant: Vec<(f64, f64)> = (0..=i16::MAX)
        .step_by(16)
        .map(|iy| {
            let exact = f64::from(iy).atan2(f64::from(i16::MAX)).to_degrees() * 100.0;
            (exact / 100.0, f64::from(atan_deg(iy, i16::MAX)) - exact)
        })
        .collect();

    // Full circle at a fixed radius
    let circle: Vec<(f64, f64)> = (0..36000)
        .step_by(5)
        .map(|centi| {
            let angle = f64::from(centi - 18000) / 100.0;
            let (sin, cos) = angle.to_radians().sin_cos();
            let (iy, ix) = ((RADIUS * sin) as i16, (RADIUS * cos) as i16);
            let exact = f64::from(iy).atan2(f64::from(ix)).to_degrees() * 100.0;
            let mut error = f64::from(atan2_deg(iy, ix)) - exact;
            if error > 18000.0 {
                error -= 36000.0;
            } else if error < -18000.0 {
                error += 36000.0;
            }
            (angle, error)
        })
        .collect();

    let max_error = octant
        .iter()
        .chain(circle.iter())
        .map(|(_, e)| e.abs())
        .fold(0.0, f64::max);
    println!("Maximum error: {:.2} centi-degrees", max_error);

    let root = BitMapBackend::new("atan_error.png", (1000, 700)).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically(350);

    let mut octant_chart = ChartBuilder::on(&upper)
        .caption("atan_deg error, first octant", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..45f64, -8f64..8f64)?;

    octant_chart
        .configure_mesh()
        .x_desc("Degrees")
        .y_desc("Centi-degrees")
        .draw()?;

    octant_chart
        .draw_series(LineSeries::new(octant, &RED))?
        .label("atan_deg - atan")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED));

    octant_chart.configure_series_labels().draw()?;

    let mut circle_chart = ChartBuilder::on(&lower)
        .caption("atan2_deg error, full circle", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(-180f64..180f64, -8f64..8f64)?;

    circle_chart
        .configure_mesh()
        .x_desc("Degrees")
        .y_desc("Centi-degrees")
        .draw()?;

    circle_chart
        .draw_series(LineSeries::new(circle, &BLUE))?
        .label("atan2_deg - atan2")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLUE));

    circle_chart.configure_series_labels().draw()?;

    root.present()?;
    println!("✓ Plot saved to atan_error.png");
    Ok(())
}
