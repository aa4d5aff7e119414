//! Reference handlers.
//!
//! These define the expected shape of all handlers: receive the event
//! immutably, emit a structured log, return nothing. Both log the *actual*
//! triggering event type; a handler must never bake an assumed event-type
//! name into its output. Cross-handler composition happens by listing several
//! handlers under one event type in the [`Configuration`], never by one
//! handler calling another directly.
//!
//! [`Configuration`]: crate::dispatch::init::Configuration

use tracing::info;

use crate::dispatch::event::Event;
use crate::dispatch::handler::Handler;

/// Handler whose logged content depends only on its fixed `label`.
pub fn log_event(label: &'static str) -> Handler {
    Handler::new(label, move |event: &Event| {
        info!(handler = label, event_type = %event.event_type, "event received");
    })
}

/// Handler that additionally echoes the event payload.
pub fn log_payload(label: &'static str) -> Handler {
    Handler::new(label, move |event: &Event| {
        info!(
            handler = label,
            event_type = %event.event_type,
            payload = %event.payload,
            "event received"
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_handlers_accept_any_event_type() {
        // The handlers key nothing on the type they receive; any string works.
        log_event("on_foo").invoke(&Event::new("totally_unrelated"));
        log_payload("on_bar").invoke(&Event::new("").with_payload(serde_json::json!([1, 2])));
    }

    #[test]
    fn test_handler_names_match_labels() {
        assert_eq!(log_event("on_foo").name(), "on_foo");
        assert_eq!(log_payload("on_bar").name(), "on_bar");
    }
}
