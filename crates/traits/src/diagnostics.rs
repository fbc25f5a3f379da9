//! Diagnostics sink for pipeline progress output.
//!
//! The pipeline never writes to a shared console stream directly. Every
//! progress message goes through the [`Diagnostics`] trait, so the host build
//! tool decides where messages end up and tests can assert on them.
//!
//! # Implementations
//!
//! - [`LogDiagnostics`]: Forwards messages to the `log` crate (default)
//! - [`MemoryDiagnostics`]: Records messages in memory for test assertions
//! - [`NullDiagnostics`]: Discards all messages

use std::fmt::Debug;
use std::sync::Mutex;

/// A sink for human-readable progress messages.
///
/// Messages are a side channel, not a stable contract: wording may change
/// between releases and no caller should parse them.
pub trait Diagnostics: Send + Sync + Debug {
    /// Emit a single progress message.
    fn emit(&self, message: &str);

    /// Returns a human-readable name for this sink (for debugging).
    fn name(&self) -> &'static str;
}

/// A sink that forwards every message to `log::info!`.
///
/// This is the default sink; the host binary chooses the logger
/// implementation (e.g. `env_logger`).
#[derive(Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn emit(&self, message: &str) {
        log::info!(target: "fontbridge", "{}", message);
    }

    fn name(&self) -> &'static str {
        "LogDiagnostics"
    }
}

/// A sink that silently discards every message.
#[derive(Debug, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn emit(&self, _message: &str) {}

    fn name(&self) -> &'static str {
        "NullDiagnostics"
    }
}

/// A sink that records messages in memory.
///
/// Intended for tests that assert on the pipeline's progress output.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    messages: Mutex<Vec<String>>,
}

impl MemoryDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded messages, in emission order.
    ///
    /// Returns an empty vector if the internal lock is poisoned.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().map(|m| m.clone()).unwrap_or_default()
    }

    /// Returns `true` if any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|message| message.contains(needle))
    }

    /// Number of recorded messages. Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.messages.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn emit(&self, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push(message.to_string());
        }
    }

    fn name(&self) -> &'static str {
        "MemoryDiagnostics"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_diagnostics_records_in_order() {
        let sink = MemoryDiagnostics::new();
        sink.emit("first");
        sink.emit("second");

        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_memory_diagnostics_contains() {
        let sink = MemoryDiagnostics::new();
        sink.emit("copied 3 font file(s)");

        assert!(sink.contains("3 font file(s)"));
        assert!(!sink.contains("plist"));
    }

    #[test]
    fn test_memory_diagnostics_empty() {
        let sink = MemoryDiagnostics::new();
        assert!(sink.is_empty());
        assert!(sink.messages().is_empty());
    }

    #[test]
    fn test_null_diagnostics_discards() {
        let sink = NullDiagnostics;
        sink.emit("anything");
        assert_eq!(sink.name(), "NullDiagnostics");
    }

    #[test]
    fn test_sink_names() {
        assert_eq!(LogDiagnostics.name(), "LogDiagnostics");
        assert_eq!(MemoryDiagnostics::new().name(), "MemoryDiagnostics");
    }
}
