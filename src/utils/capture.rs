//! Event capture sink for testing

use std::sync::{Arc, RwLock};

use crate::traits::EventSink;
use crate::types::*;

/// Recording sink for testing and development
///
/// Clones share one buffer, so a test can hold a handle while the
/// ledger owns another.
#[derive(Debug, Clone)]
pub struct CaptureSink {
    events: Arc<RwLock<Vec<TokenEvent>>>,
}

impl CaptureSink {
    /// Create an empty capture sink
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of every event delivered so far
    pub fn events(&self) -> Vec<TokenEvent> {
        self.events.read().unwrap().clone()
    }

    /// Number of events delivered so far
    pub fn len(&self) -> usize {
        self.events.read().unwrap().len()
    }

    /// True when no event has been delivered
    pub fn is_empty(&self) -> bool {
        self.events.read().unwrap().is_empty()
    }

    /// Drop all captured events (useful for testing)
    pub fn clear(&self) {
        self.events.write().unwrap().clear();
    }
}

impl Default for CaptureSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for CaptureSink {
    fn emit(&self, event: &TokenEvent) -> SinkResult<()> {
        self.events.write().unwrap().push(event.clone());
        Ok(())
    }
}
