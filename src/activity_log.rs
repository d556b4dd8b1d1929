//! Activity Log
//!
//! TigerStyle: All observable output goes through an injectable interface.
//!
//! Registration, feeding and trick lines are behavior, not diagnostics, so
//! they are routed through [`ActivityLog`] rather than printed directly.
//! Production uses [`TracingLog`]; tests capture lines with [`MemoryLog`].

use std::sync::{Arc, Mutex};

// =============================================================================
// TigerStyle Constants
// =============================================================================

/// Tracing target for activity lines
pub const ACTIVITY_TARGET: &str = "menagerie::activity";

// =============================================================================
// Trait
// =============================================================================

/// Sink for line-oriented activity output.
///
/// Recording is fire-and-forget: implementations must not fail in a way
/// the caller can observe.
pub trait ActivityLog: Send + Sync {
    /// Record a single activity line.
    fn record(&self, line: &str);
}

/// Shared handle to an activity sink
pub type SharedActivityLog = Arc<dyn ActivityLog>;

// =============================================================================
// Tracing Sink
// =============================================================================

/// Emits every line as an `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl ActivityLog for TracingLog {
    fn record(&self, line: &str) {
        tracing::info!(target: ACTIVITY_TARGET, "{}", line);
    }
}

// =============================================================================
// Memory Sink
// =============================================================================

/// Collects lines in memory, in the order they were recorded.
#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Create an empty memory log
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty memory log behind an `Arc`
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Get a copy of every recorded line
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Drop all recorded lines
    pub fn clear(&self) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl ActivityLog for MemoryLog {
    fn record(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}

// =============================================================================
// Tests
// =============================================================================
