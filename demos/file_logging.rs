//! File logging example
//!
//! Demonstrates logging to both the console and an automatically named file.
//!
//! Run with: cargo run --example file_logging

use line_logger::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Line Logger - File Logging Example ===\n");

    // A directory path: the logger creates `logs/log_<timestamp>.txt`
    let logger = Logger::builder()
        .log_path("logs")
        .console(ConsoleTarget::Stdout)
        .on_write_error(Arc::new(|error: &LoggerError| {
            eprintln!("log line lost: {}", error);
        }))
        .build()?;

    println!("1. Logging to both console and file:");

    logger.info("Application started");
    logger.info("Connecting to database...");
    logger.error("Failed to load optional plugin");

    println!("\n2. Performing some operations:");

    for i in 1..=5 {
        logger.info(format!("Processing item {}/5", i));
        if i == 3 {
            logger.warn("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");

    if let Some(path) = logger.file_path() {
        println!("\nCheck '{}' for the full log output", path.display());
    }

    // Release the file handle explicitly
    logger.close()?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
