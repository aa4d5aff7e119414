//! Configuration and the Initializer.
//!
//! The Initializer translates a [`Configuration`] into concrete
//! registrations on a [`DispatchTarget`]: one `add_listener` call per
//! `(event_type, handler)` pair, nothing else. It performs no validation and
//! defines no error conditions.

use std::collections::HashMap;

use compact_str::CompactString;
use tracing::{debug, info};

use super::handler::HandlerSpec;
use super::target::DispatchTarget;
use crate::handlers;

/// Mapping from event-type name to the handler(s) to attach.
///
/// Key iteration order is unspecified and must not be relied upon. The
/// configuration is built once and treated as immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    entries: HashMap<CompactString, HandlerSpec>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in wiring used when no explicit configuration is supplied:
    /// the two reference handlers under `foo_event` and `bar_event`.
    pub fn builtin() -> Self {
        Self::new()
            .with("foo_event", handlers::log_event("on_foo"))
            .with("bar_event", handlers::log_payload("on_bar"))
    }

    /// Builder-style insert. A later insert for the same key replaces the
    /// earlier one, per plain map semantics.
    pub fn with(mut self, event_type: impl Into<CompactString>, spec: impl Into<HandlerSpec>) -> Self {
        self.insert(event_type, spec);
        self
    }

    pub fn insert(&mut self, event_type: impl Into<CompactString>, spec: impl Into<HandlerSpec>) {
        self.entries.insert(event_type.into(), spec.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HandlerSpec)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of event-type keys (not of handlers).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Attach every configured handler to `target`.
///
/// Exactly one registration per `(event_type, handler)` pair; a key mapped to
/// an empty sequence produces no registration. Calling this twice against the
/// same target registers every listener twice (additive, not idempotent) —
/// accepted behavior, not a bug.
pub fn initialize(config: &Configuration, target: &dyn DispatchTarget) {
    let mut registered = 0usize;

    for (event_type, spec) in config.iter() {
        let handlers = spec.as_slice();

        if handlers.is_empty() {
            debug!(event_type, "no handlers listed, skipping");
            continue;
        }

        for handler in handlers {
            target.add_listener(event_type, handler.clone());

            debug!(event_type, handler = handler.name(), "listener attached");

            registered += 1;
        }
    }

    info!(
        registrations = registered,
        event_types = config.len(),
        "dispatch wiring complete"
    );
}

/// [`initialize`] with the built-in default configuration.
pub fn initialize_default(target: &dyn DispatchTarget) {
    initialize(&Configuration::builtin(), target);
}
