//! Stress tests for shared stores
//!
//! These tests verify:
//! - Many loggers on many threads can share one store
//! - Per-logger write order survives concurrent use
//! - Level changes on one namespace never leak into another

use jog::prelude::*;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const EVENTS_PER_THREAD: usize = 500;

/// Every accepted event reaches the store exactly once
#[test]
fn test_concurrent_namespaces_share_store() {
    let store = Arc::new(MemoryStore::new());
    let root = Arc::new(Logger::new(store.clone()));

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let root = Arc::clone(&root);
            thread::spawn(move || {
                let log = root.namespace(attrs! { "worker" => worker });
                for seq in 0..EVENTS_PER_THREAD {
                    log.info("tick", attrs! { "seq" => seq }).expect("memory store accepts");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    assert_eq!(store.len(), THREADS * EVENTS_PER_THREAD);
}

/// Sequential writes on one logger keep their order even when interleaved
#[test]
fn test_per_logger_order_preserved() {
    let store = Arc::new(MemoryStore::new());
    let root = Logger::new(store.clone());
    let root = Arc::new(root);

    let handles: Vec<_> = (0..THREADS)
        .map(|worker| {
            let root = Arc::clone(&root);
            thread::spawn(move || {
                let log = root.namespace(attrs! { "worker" => worker });
                for seq in 0..EVENTS_PER_THREAD {
                    log.debug("tick", attrs! { "seq" => seq }).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker panicked");
    }

    let events = store.events();
    for worker in 0..THREADS {
        let seqs: Vec<u64> = events
            .iter()
            .filter(|e| e.get("worker").and_then(|w| w.as_u64()) == Some(worker as u64))
            .map(|e| e.get("seq").and_then(|s| s.as_u64()).unwrap())
            .collect();
        assert_eq!(seqs.len(), EVENTS_PER_THREAD);
        assert!(seqs.windows(2).all(|w| w[0] < w[1]), "worker {} out of order", worker);
    }
}

/// Raising one namespace's level filters only that namespace
#[test]
fn test_levels_isolated_under_load() {
    let store = Arc::new(MemoryStore::new());
    let root = Arc::new(Logger::new(store.clone()));

    let quiet = {
        let root = Arc::clone(&root);
        thread::spawn(move || {
            let log = root.namespace(attrs! { "role" => "quiet" });
            log.set_level(Level::Error);
            for _ in 0..EVENTS_PER_THREAD {
                log.info("dropped", ()).unwrap();
            }
        })
    };
    let chatty = {
        let root = Arc::clone(&root);
        thread::spawn(move || {
            let log = root.namespace(attrs! { "role" => "chatty" });
            for _ in 0..EVENTS_PER_THREAD {
                log.info("kept", ()).unwrap();
            }
        })
    };
    quiet.join().expect("quiet panicked");
    chatty.join().expect("chatty panicked");

    assert_eq!(store.len(), EVENTS_PER_THREAD);
    assert!(store.events().iter().all(|e| e.kind() == Some("kept")));
    assert_eq!(root.level(), Level::Debug);
}
