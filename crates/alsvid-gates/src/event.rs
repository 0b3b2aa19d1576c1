//! Symbolic event recording.
//!
//! Every completed gate or topology unit emits one symbolic record. The sink
//! is an injected collaborator — the engine holds no global logger — and the
//! call is fire-and-forget: nothing in the engine consumes a sink's result.

use std::sync::Mutex;

use crate::qubit::QubitId;

/// Receiver for symbolic gate events.
pub trait EventSink {
    /// Record one event for a completed unit of work.
    fn record_event(&self, gate: &str, qubit: QubitId, tag: &str, message: &str);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record_event(&self, _gate: &str, _qubit: QubitId, _tag: &str, _message: &str) {}
}

/// Sink that forwards events to the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record_event(&self, gate: &str, qubit: QubitId, tag: &str, message: &str) {
        tracing::info!(target: "alsvid::event", gate, qubit = qubit.0, tag, "{message}");
    }
}

/// One recorded event, as captured by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub gate: String,
    pub qubit: QubitId,
    pub tag: String,
    pub message: String,
}

/// Sink that keeps every event in memory, for tests and inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<EventRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all records so far.
    pub fn records(&self) -> Vec<EventRecord> {
        self.records.lock().expect("event sink poisoned").clone()
    }

    /// Number of records so far.
    pub fn len(&self) -> usize {
        self.records.lock().expect("event sink poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<EventRecord> {
        self.records.lock().expect("event sink poisoned").last().cloned()
    }
}

impl EventSink for MemorySink {
    fn record_event(&self, gate: &str, qubit: QubitId, tag: &str, message: &str) {
        self.records.lock().expect("event sink poisoned").push(EventRecord {
            gate: gate.to_owned(),
            qubit,
            tag: tag.to_owned(),
            message: message.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_captures_in_order() {
        let sink = MemorySink::new();
        sink.record_event("HADAMARD", QubitId(1), "a", "first");
        sink.record_event("CNOT", QubitId(2), "b", "second");

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].gate, "HADAMARD");
        assert_eq!(sink.last().unwrap().message, "second");
    }
}
