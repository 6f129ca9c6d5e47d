//! Headless duck pond.
//!
//! Demonstrates: build scene → driver with 10 fixed sub-steps per frame →
//! click disturbances → read back field surfaces and the duck's pose, the
//! way a renderer would once per displayed frame.

use tidepool_bench::{canvas_mapping, click, duck_pond, CANVAS};
use tidepool_core::{BodyId, Command};
use tidepool_engine::{DriverConfig, SimulationDriver, StepMode};

fn main() {
    println!("=== Tidepool Duck Pond ===\n");

    let (scene, _) = duck_pond().unwrap();
    let config = DriverConfig {
        mode: StepMode::FixedSubsteps(10),
        ..Default::default()
    };
    let mut driver = SimulationDriver::new(scene, config).unwrap();
    let mapping = canvas_mapping().unwrap();
    let fields: Vec<_> = driver.scene().fields().map(|(id, _)| id).collect();
    let duck = BodyId(0);

    for frame in 0..300 {
        // the user clicks twice near the duck
        if frame == 30 || frame == 150 {
            let (px, py) = if frame == 30 { (300.0, 150.0) } else { (380.0, 260.0) };
            for &field in &fields {
                for d in click(px, py) {
                    driver.submit(Command::new(field, d));
                }
            }
            println!("frame {frame:>3}: click at ({px}, {py})");
        }

        let report = driver.advance(0.0).unwrap();
        for r in report.receipts.iter().filter(|r| !r.is_applied()) {
            println!("  command {} not applied: {:?}", r.arrival_seq, r.reason);
        }

        if frame % 50 == 0 || frame == 299 {
            let pose = driver.body(duck).unwrap().pose();
            println!(
                "frame {frame:>3}: duck at ({:7.2}, {:7.2}) theta {:+.4}",
                pose.px, pose.py, pose.theta
            );
            for (id, field) in driver.scene().fields() {
                let surface: Vec<f64> = (0..field.len() as isize)
                    .map(|i| mapping.get_y(field, i))
                    .collect();
                let top = surface.iter().cloned().fold(f64::INFINITY, f64::min);
                let bottom = surface.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                println!(
                    "    {}: surface spans y {top:7.2}..{bottom:7.2} of {CANVAS}, mean {:+.2e}",
                    driver.scene().field_name(id).unwrap_or("?"),
                    field.mean()
                );
            }
        }
    }

    println!(
        "\n{} sub-steps simulated, state hash {:016x}",
        driver.current_step(),
        driver.state_hash()
    );
}
