//! Scripted Capture Session
//!
//! This example drives a capture session through the tick loop without a
//! display: two demonstrations are recorded, one is withdrawn with undo,
//! a third is recorded and the ledger is exported.
//!
//! Key concepts:
//! - Deterministic placement with `SequenceRandom`
//! - Events dispatched in arrival order per tick
//! - Export carried out by the loop, not by the session
//! - Scoped log capture with `LogBuffer`
//!
//! Run with: cargo run --example capture_session

use trajectory_capture::ledger::DatasetFile;
use trajectory_capture::session::{Command, InputEvent, SequenceRandom, SessionEffect};
use trajectory_capture::{CaptureLoop, LogBuffer, Point2D, SessionBuilder};

/// Press on `from`, drag in `steps` moves, release on `to`.
fn demonstration(from: Point2D, to: Point2D, steps: usize) -> Vec<InputEvent> {
    let mut events = vec![InputEvent::PointerDown(from)];
    for i in 1..=steps {
        let ratio = i as f64 / steps as f64;
        // A little sideways wobble so the path is not a straight line.
        let wobble = (ratio * std::f64::consts::PI).sin() * 8.0;
        let point = from.lerp(&to, ratio);
        events.push(InputEvent::PointerMove(Point2D::new(point.x, point.y + wobble)));
    }
    events.push(InputEvent::PointerDown(to));
    events
}

fn main() {
    println!("=== Scripted Capture Session ===\n");

    let logs = LogBuffer::new();
    let _scope = logs.attach("info");

    let dir = tempfile::tempdir().unwrap();
    let dataset = DatasetFile::new(dir.path().join("mouse_dataset.jsonl"));

    // Every attempt draws: far branch, x = 0.5625 * 800, y = 0.5 * 600, first color.
    let session = SessionBuilder::new()
        .random_source(SequenceRandom::new(vec![0.9, 0.5625, 0.5, 0.0]))
        .build()
        .unwrap();
    let mut driver = CaptureLoop::with_dataset(session, dataset.clone());

    let origin = Point2D::new(400.0, 300.0);
    let target = Point2D::new(450.0, 300.0);

    for round in 1..=2 {
        let report = driver.tick(demonstration(origin, target, 12), None);
        for effect in report.effects() {
            if let SessionEffect::Committed {
                index,
                displacement,
            } = effect
            {
                println!(
                    "Demonstration {round}: sample #{index}, move ({}, {})",
                    displacement.x, displacement.y
                );
            }
        }
    }

    let report = driver.tick([InputEvent::from(Command::Undo)], None);
    println!("Undo: {:?}", report.effects().collect::<Vec<_>>());

    driver.tick(demonstration(origin, target, 6), None);
    let report = driver.tick([InputEvent::from(Command::Export)], None);
    for export in &report.exports {
        match export {
            Ok(written) => println!("Exported {written} samples"),
            Err(err) => println!("Export failed: {err}"),
        }
    }

    let records = dataset.read_all().unwrap();
    println!("\nDataset now holds {} records:", records.len());
    for record in &records {
        println!("  {}", record.to_json_line().unwrap());
    }

    driver.tick([InputEvent::from(Command::Terminate)], None);
    println!("\nSession running: {}", driver.is_running());

    println!("\nCaptured log lines:");
    for line in logs.lines() {
        println!("  {line}");
    }

    println!("\n=== Example Complete ===");
}
