//! Basic usage example
//!
//! Demonstrates console logging with the default logger, a scoped logger
//! and the formatting macros.
//!
//! Run with: cargo run --example basic_usage

use line_logger::prelude::*;
use line_logger::{error, info};

fn main() -> Result<()> {
    println!("=== Line Logger - Basic Usage Example ===\n");

    // Standard output, default `HH:mm:ss.SSS` timestamps
    let logger = Logger::new();

    logger.trace("Entering main");
    logger.debug("Loading configuration...");
    logger.info("Application started");
    logger.warn("Using default settings for some options");

    // Origin tag bound to a component name
    let db = logger.scoped("database");
    db.info("Connection established");
    db.error("Query timed out");

    // Macros tag lines with the module path
    let port = 8080;
    info!(logger, "Server listening on port {}", port);
    error!(logger, "Error code: {}, message: {}", 500, "Internal error");

    // Console on stderr with an ISO 8601 timestamp
    let stderr_logger = Logger::builder()
        .console(ConsoleTarget::Stderr)
        .message_pattern(TimestampPattern::iso8601())
        .build()?;
    stderr_logger.fatal("Unable to recover from error: disk full");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
