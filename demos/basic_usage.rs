//! Basic logger usage example
//!
//! Demonstrates an explicit logger, the default instance and the failure
//! helpers.
//!
//! Run with: cargo run --example basic_usage

use leveled_log::prelude::*;
use leveled_log::{info, warning};

fn main() -> Result<()> {
    println!("=== Leveled Log - Basic Usage Example ===\n");

    // Explicit logger on stderr
    let logger = Logger::new(std::io::stderr(), Severity::Debug, "");

    println!("1. Logging at different levels:");
    for severity in Severity::ALL {
        logger.write(severity, format_args!("This is a {} message", severity.name())).ok();
    }

    println!("\n2. Prefix and threshold:");
    logger.set_prefix("myapp");
    logger.set_level_by_name("warning")?;
    logger.info("Info message (hidden)").ok();
    warning!(logger, "Disk {}% full", 91).ok();

    println!("\n3. Default instance:");
    leveled_log::set_prefix("demo");
    info!("hello {}", "Tobi").ok();
    leveled_log::set_show_caller(true);
    leveled_log::notice("with caller location").ok();

    println!("\n4. Failure helpers:");
    let missing = std::fs::read_to_string("/definitely/not/here");
    if leveled_log::error_if_failed(&missing) {
        println!("   (error was logged above)");
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
