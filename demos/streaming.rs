//! Streaming example
//!
//! Demonstrates replaying history and following new events.
//!
//! Run with: cargo run --example streaming

use jog::prelude::*;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let log = Arc::new(Logger::new(store));

    log.info("booted", ())?;

    println!("1. History only:");
    for event in log.stream(StreamOptions::new().end(true))? {
        println!("   {}", event);
    }

    println!("\n2. Following new events:");
    let stream = log.stream(StreamOptions::new().interval(100))?;
    let handle = stream.handle();

    let producer = {
        let log = Arc::clone(&log);
        thread::spawn(move || -> Result<()> {
            for i in 0..3 {
                log.info("heartbeat", attrs! { "n" => i })?;
                thread::sleep(Duration::from_millis(150));
            }
            handle.cancel();
            Ok(())
        })
    };

    for event in stream {
        println!("   {}", event);
    }

    producer
        .join()
        .map_err(|_| JogError::other("producer panicked"))??;

    Ok(())
}
