//! Basic jog usage example
//!
//! Demonstrates writing events at different levels to the console store.
//!
//! Run with: cargo run --example basic_usage

use jog::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== jog - Basic Usage Example ===\n");

    let log = Logger::new(Arc::new(ConsoleStore::new()));

    println!("1. Writing at every level:");
    log.debug("cache warmed", attrs! { "entries" => 1200 })?;
    log.info("server started", attrs! { "port" => 8080 })?;
    log.warn("slow request", attrs! { "path" => "/videos", "ms" => 950 })?;
    log.error("upstream failed", attrs! { "status" => 502 })?;

    println!("\n2. Raising the level to warn - debug and info won't show:");
    log.set_level_name("warn")?;
    log.debug("hidden", ())?;
    log.info("hidden", ())?;
    log.warn("visible", ())?;

    println!("\n3. Custom level names always pass:");
    log.write("audit", "password changed", attrs! { "uid" => "tobi" })?;

    println!("\n4. Errors are reduced to stack and message:");
    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "read timed out");
    log.error("fetch failed", Attributes::new().with_error(&err))?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
