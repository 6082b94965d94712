//! Metrics handle example
//!
//! Sends samples through an absent handle, an in-memory recorder and an
//! events file.
//!
//! Run with: cargo run --example uma_metrics

use rust_liblog_system::prelude::*;
use rust_liblog_system::uma::UmaEventsFile;

fn main() -> Result<()> {
    println!("=== Rust liblog System - UMA Metrics Example ===\n");

    println!("1. Absent handle:");
    let mut handle = MetricsHandle::none();
    handle.initialize();
    println!(
        "   send_enum returned {}",
        handle.send_enum("Platform.BootMode", 1, 3)
    );
    handle.destroy();

    println!("\n2. In-memory recorder:");
    let recorder = MetricsRecorder::new();
    let samples = recorder.samples_handle();
    let mut handle = MetricsHandle::with_library(recorder);
    handle.initialize();
    handle.send_linear("Platform.DiskUsage", 42, 0, 100, 50);
    handle.send_enum("Platform.BootMode", 2, 4);
    handle.destroy();
    for sample in samples.lock().iter() {
        println!("   {}", serde_json::to_string(sample)?);
    }

    println!("\n3. Events file:");
    let path = std::env::temp_dir().join("uma-events-demo");
    let mut handle = MetricsHandle::with_library(UmaEventsFile::with_path(&path));
    handle.initialize();
    let sent = handle.send_linear("Platform.DiskUsage", 42, 0, 100, 50);
    handle.destroy();
    println!("   appended to {}: {}", path.display(), sent);
    let size = std::fs::metadata(&path)?.len();
    println!("   file is now {} bytes", size);

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
