//! Namespaced loggers example
//!
//! Demonstrates default attributes inherited through `namespace`.
//!
//! Run with: cargo run --example namespaces

use jog::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    let store = Arc::new(MemoryStore::new());
    let log = Logger::with_defaults(store.clone(), attrs! { "service" => "videos" });

    // all user related events
    let user_log = log.namespace(attrs! { "uid" => "tobi" });

    // all video related events for that user, uid inherited
    let video_log = user_log.namespace(attrs! { "vid" => "abc" });

    user_log.info("login", ())?;
    video_log.info("play", attrs! { "position" => 0 })?;
    video_log.info("pause", attrs! { "position" => 42 })?;

    for event in store.events() {
        println!("{}", event);
    }

    Ok(())
}
