//! Basic logger usage example
//!
//! Demonstrates the four severities, component names, and trailing values.
//!
//! Run with: cargo run --example basic_usage

use console_logger::prelude::*;
use console_logger::{error, info, warning};

fn main() {
    println!("=== Console Logger - Basic Usage Example ===\n");

    // Anonymous logger
    let logger = Logger::new();

    println!("1. Logging at different levels:");
    logger.debug("this is a debug message", &[]);
    logger.info("this is an info message", &[]);
    logger.warning("this is a warning message", &[]);
    logger.error("this is an error message", &[]);

    // Named logger with trailing values
    println!("\n2. Component names and trailing values:");
    let db = Logger::with_name("db");
    db.info("connected", &[]);
    db.warning("slow query", &[&"elapsed_ms=1204"]);
    db.error("connection failed", &[&"retry=3"]);

    // Macro surface for mixed-type values
    println!("\n3. Macro surface:");
    let server = Logger::with_name("server");
    info!(server, "listening", 8080, "tls=off");
    warning!(server, "queue depth", 17);
    error!(server, "bad status", 500, "backing off");

    println!("\n=== Example completed successfully! ===");
}
