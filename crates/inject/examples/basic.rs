//! Basic example demonstrating extreme anomaly injection
//!
//! Run with: cargo run --example basic -p inject

use inject::{ExtremeAnomalyConfig, ExtremeAnomalyInjector, SeriesFrame};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows the injector's trace messages
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== spikeful-inject Basic Example ===\n");

    // A smooth signal with mild noise: daily-ish cycle plus drift
    let values: Vec<f64> = (0..100)
        .map(|i| 50.0 + (i as f64 * 0.3).sin() * 2.0 + i as f64 * 0.05)
        .collect();
    let frame = SeriesFrame::from_values("temperature", values);

    println!("Input: {} rows of 'temperature'", frame.len());
    println!("First 10 values: {:?}\n", &frame.column("temperature").unwrap()[..10]);

    // 4 anomalies, each 10x the local variability
    let config = ExtremeAnomalyConfig::new("temperature", 4, 10.0, "temperature_anomaly");
    let injector = ExtremeAnomalyInjector::new(config)?;

    let (result, report) = injector.inject_with_report(&frame, &mut rand::thread_rng())?;

    println!("Injected {} anomalies across {} segments:", report.event_count(), report.segments);
    for event in &report.events {
        println!("   row {:>3}: delta {:+.2}", event.position, event.delta);
    }

    let input = frame.column("temperature").unwrap();
    let output = result.column("temperature_anomaly").unwrap();
    let changed = input
        .iter()
        .zip(output)
        .filter(|(a, b)| a != b)
        .count();
    println!("\nRows changed: {changed} of {}", result.len());

    // Seeded runs reproduce exactly
    let a = injector.inject_seeded(&frame, 42)?;
    let b = injector.inject_seeded(&frame, 42)?;
    assert_eq!(
        a.column("temperature_anomaly").unwrap(),
        b.column("temperature_anomaly").unwrap()
    );
    println!("Seeded run with seed 42 reproduces exactly");

    println!("\n=== Example Complete ===");
    Ok(())
}
