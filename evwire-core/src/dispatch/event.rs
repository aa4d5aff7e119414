//! Event descriptor delivered to listeners.
//!
//! Dispatch keys on `event_type` exactly as given; no validation or
//! normalization of the name is performed. Payload and timestamp are
//! carried for the benefit of handlers, the bus never inspects them.

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// An event as seen by a handler. The raiser builds this; the bus routes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Routing key. Any string is accepted.
    pub event_type: CompactString,

    /// Opaque JSON payload for handlers.
    pub payload: serde_json::Value,

    /// When the event was constructed.
    pub ts: DateTime<Utc>,
}

impl Event {
    /// Create an event of the given type with an empty payload.
    pub fn new(event_type: impl Into<CompactString>) -> Self {
        Self {
            event_type: event_type.into(),
            payload: serde_json::Value::Null,
            ts: Utc::now(),
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = Event::new("foo_event").with_payload(serde_json::json!({ "n": 1 }));

        assert_eq!(event.event_type, "foo_event");
        assert_eq!(event.payload["n"], 1);
    }

    #[test]
    fn test_event_serde_round_trip() {
        let event = Event::new("bar_event");
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();

        assert_eq!(back.event_type, event.event_type);
        assert_eq!(back.payload, serde_json::Value::Null);
    }
}
