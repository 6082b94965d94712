//! Basic facade usage example
//!
//! Demonstrates tagged logging to the console, property-driven filtering and
//! the conditional macros.
//!
//! Run with: cargo run --example basic_usage

use rust_liblog_system::prelude::*;
use rust_liblog_system::{alog, alogd, aloge, alogi, alogv, alogw, alogw_if, if_alogd};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust liblog System - Basic Usage Example ===\n");

    let properties = Arc::new(PropertyStore::new());
    let logger = Logger::builder()
        .tag("demo")
        .backend(ConsoleBackend::new().with_format(LogFormat::ThreadTime))
        .properties(properties.clone())
        .build();

    println!("1. Logging at every priority:");
    alogv!(logger, "verbose message");
    alogd!(logger, "debug message");
    alogi!(logger, "info message");
    alogw!(logger, "warning message");
    aloge!(logger, "error message");
    logger.flush()?;

    println!("\n2. Explicit tags and the global tag:");
    alog!(logger, LogPriority::Info, Some("vold"), "volume {} mounted", "/data")?;
    alog!(logger, LogPriority::Warn, None, "no tag on this one")?;
    logger.flush()?;

    println!("\n3. Per-tag threshold from properties (log.tag.demo=W):");
    properties.set_tag_level("demo", "W");
    alogi!(logger, "info message (hidden)");
    alogw!(logger, "warning message (visible)");
    if_alogd!(logger, {
        println!("   this block does not run");
    });
    logger.flush()?;

    println!("\n4. Conditional logging:");
    let free_blocks = 12;
    alogw_if!(logger, free_blocks < 100, "only {} blocks free", free_blocks);
    logger.flush()?;

    let metrics = logger.metrics();
    println!(
        "\nLogged: {}, filtered: {}",
        metrics.total_logged(),
        metrics.filtered_count()
    );

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
