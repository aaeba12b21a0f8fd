//! In-process store

use crate::core::{EventStream, LogEvent, Result, Store, StreamOptions, StreamSender};
use crate::observability::log_debug;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Default)]
struct Journal {
    /// Events tagged with a sequence number that survives `clear`
    events: Vec<(u64, LogEvent)>,
    next_seq: u64,
    last_options: Option<StreamOptions>,
}

impl Journal {
    fn since(&self, seq: u64) -> Vec<(u64, LogEvent)> {
        self.events
            .iter()
            .filter(|(s, _)| *s >= seq)
            .cloned()
            .collect()
    }
}

/// Keeps events in memory.
///
/// Streams replay everything stored so far. Indefinite streams then poll at
/// the requested interval for newly added events until they are cancelled
/// or dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    journal: Arc<Mutex<Journal>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored events, oldest first
    pub fn events(&self) -> Vec<LogEvent> {
        self.journal
            .lock()
            .events
            .iter()
            .map(|(_, event)| event.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.journal.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.journal.lock().events.is_empty()
    }

    /// Options of the most recent `stream` request
    pub fn last_stream_options(&self) -> Option<StreamOptions> {
        self.journal.lock().last_options.clone()
    }

    fn pump(journal: Arc<Mutex<Journal>>, sender: StreamSender, options: StreamOptions) {
        let interval = options.interval_duration();
        let mut cursor = 0;

        loop {
            let batch = journal.lock().since(cursor);
            for (seq, event) in batch {
                if !sender.send(event) {
                    log_debug!(event = "stream_cancelled", store = "memory");
                    return;
                }
                cursor = seq + 1;
            }

            if !options.is_indefinite() || sender.is_cancelled() {
                return;
            }
            thread::sleep(interval);
        }
    }
}

impl Store for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn add(&self, event: LogEvent) -> Result<()> {
        let mut journal = self.journal.lock();
        let seq = journal.next_seq;
        journal.next_seq += 1;
        journal.events.push((seq, event));
        Ok(())
    }

    fn stream(&self, options: StreamOptions) -> Result<EventStream> {
        self.journal.lock().last_options = Some(options.clone());

        let (sender, stream) = EventStream::channel();
        let journal = Arc::clone(&self.journal);
        thread::Builder::new()
            .name("jog-memory-stream".to_string())
            .spawn(move || Self::pump(journal, sender, options))?;
        Ok(stream)
    }

    fn clear(&self) -> Result<()> {
        self.journal.lock().events.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Logger;
    use std::time::Duration;

    #[test]
    fn test_add_and_clear() {
        let store = Arc::new(MemoryStore::new());
        let log = Logger::new(store.clone());

        log.info("one", ()).unwrap();
        log.info("two", ()).unwrap();
        assert_eq!(store.len(), 2);

        log.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_finite_stream_replays_history() {
        let store = Arc::new(MemoryStore::new());
        let log = Logger::new(store.clone());
        for kind in ["a", "b", "c"] {
            log.info(kind, ()).unwrap();
        }

        let stream = log.stream(StreamOptions::new().end(true)).unwrap();
        let kinds: Vec<String> = stream.map(|e| e.kind().unwrap().to_string()).collect();

        assert_eq!(kinds, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_indefinite_stream_sees_new_events() {
        let store = Arc::new(MemoryStore::new());
        let log = Logger::new(store.clone());
        log.info("before", ()).unwrap();

        let stream = log.stream(StreamOptions::new().interval(5)).unwrap();
        let first = stream.recv_timeout(Duration::from_secs(2)).unwrap().unwrap();
        assert_eq!(first.kind(), Some("before"));

        log.info("after", ()).unwrap();
        let second = stream.recv_timeout(Duration::from_secs(2)).unwrap().unwrap();
        assert_eq!(second.kind(), Some("after"));

        stream.cancel();
        assert!(stream.recv().is_err());
    }

    #[test]
    fn test_stream_after_clear_only_sees_new_events() {
        let store = Arc::new(MemoryStore::new());
        let log = Logger::new(store.clone());
        log.info("old", ()).unwrap();
        log.clear().unwrap();
        log.info("new", ()).unwrap();

        let stream = log.stream(StreamOptions::new().end(true)).unwrap();
        let kinds: Vec<String> = stream.map(|e| e.kind().unwrap().to_string()).collect();
        assert_eq!(kinds, vec!["new"]);
    }
}
