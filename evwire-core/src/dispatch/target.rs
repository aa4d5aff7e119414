//! Dispatch target seam and the in-process event bus.
//!
//! The Initializer only ever talks to the [`DispatchTarget`] trait, so tests
//! construct an isolated [`EventBus`] per case instead of relying on shared
//! environment state and manual teardown.

use std::panic::{self, AssertUnwindSafe};

use compact_str::CompactString;
use dashmap::DashMap;
use tracing::{trace, warn};

use super::event::Event;
use super::handler::Handler;

/// Registration surface between the Initializer and whatever owns delivery.
///
/// Registration is append-only: no deduplication, no replacement of prior
/// registrations for the same type.
pub trait DispatchTarget: Send + Sync {
    fn add_listener(&self, event_type: &str, handler: Handler);
}

/// In-process dispatch target backed by a sharded listener table.
///
/// Invocation order among listeners for the same event type is
/// implementation-defined and must not be relied upon by callers.
#[derive(Debug, Default)]
pub struct EventBus {
    listeners: DashMap<CompactString, Vec<Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke every listener registered for `event.event_type`.
    ///
    /// A panicking listener is caught and logged; its siblings still run.
    pub fn notify(&self, event: &Event) {
        // Clone the list out so a listener can register further listeners on
        // this bus without holding the shard lock.
        let handlers: Vec<Handler> = match self.listeners.get(event.event_type.as_str()) {
            Some(entry) => entry.clone(),
            None => {
                trace!(event_type = %event.event_type, "no listeners registered");
                return;
            }
        };

        for handler in &handlers {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler.invoke(event)));

            if outcome.is_err() {
                warn!(
                    handler = handler.name(),
                    event_type = %event.event_type,
                    "listener panicked, continuing with siblings"
                );
            }
        }
    }

    /// Number of listeners currently registered for `event_type`.
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners.get(event_type).map_or(0, |entry| entry.len())
    }

    /// Total registrations across all event types.
    pub fn total_listeners(&self) -> usize {
        self.listeners.iter().map(|entry| entry.len()).sum()
    }

    /// Drop every registration. Used between initializations in tests.
    pub fn clear(&self) {
        self.listeners.clear();
    }
}

impl DispatchTarget for EventBus {
    fn add_listener(&self, event_type: &str, handler: Handler) {
        trace!(event_type, handler = handler.name(), "listener added");

        self.listeners
            .entry(CompactString::from(event_type))
            .or_default()
            .push(handler);
    }
}
