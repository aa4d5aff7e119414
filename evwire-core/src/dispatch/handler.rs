//! Handler type and the single-or-many wiring shape.
//!
//! A [`Handler`] is a named, cloneable wrapper around a boxed closure. The
//! name exists for diagnostics only and plays no role in dispatch. Cloning a
//! `Handler` clones the `Arc`, not the closure, so a handler registered under
//! several event types shares one underlying function.

use std::fmt;
use std::sync::Arc;

use compact_str::CompactString;

use super::event::Event;

type HandlerFn = dyn Fn(&Event) + Send + Sync;

/// A unit of behavior invoked in response to an event.
///
/// Handlers return nothing; their only observable effects are whatever
/// external operations the closure performs (logging, further dispatch).
#[derive(Clone)]
pub struct Handler {
    name: CompactString,
    func: Arc<HandlerFn>,
}

impl Handler {
    pub fn new(name: impl Into<CompactString>, func: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Diagnostic name, used in registration and panic logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self, event: &Event) {
        (self.func)(event)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").field("name", &self.name).finish()
    }
}

/// A configuration value: one handler, or an ordered sequence of handlers.
///
/// Order inside `Many` fixes *attachment* order only; invocation order among
/// listeners for the same event type is owned by the dispatch target.
#[derive(Debug, Clone)]
pub enum HandlerSpec {
    Single(Handler),
    Many(Vec<Handler>),
}

impl HandlerSpec {
    /// View the spec as a handler sequence: `Single(h)` is a one-element
    /// slice, `Many` passes through unchanged (empty stays empty).
    pub fn as_slice(&self) -> &[Handler] {
        match self {
            Self::Single(handler) => std::slice::from_ref(handler),
            Self::Many(handlers) => handlers,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<Handler> for HandlerSpec {
    fn from(handler: Handler) -> Self {
        Self::Single(handler)
    }
}

impl From<Vec<Handler>> for HandlerSpec {
    fn from(handlers: Vec<Handler>) -> Self {
        Self::Many(handlers)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counting(name: &'static str, hits: &Arc<AtomicUsize>) -> Handler {
        let hits = Arc::clone(hits);
        Handler::new(name, move |_event: &Event| {
            hits.fetch_add(1, Ordering::Relaxed);
        })
    }

    #[test]
    fn test_invoke_runs_closure() {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler = counting("probe", &hits);

        handler.invoke(&Event::new("anything"));
        handler.invoke(&Event::new("anything_else"));

        assert_eq!(hits.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_clone_shares_closure() {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler = counting("probe", &hits);
        let copy = handler.clone();

        handler.invoke(&Event::new("x"));
        copy.invoke(&Event::new("x"));

        assert_eq!(hits.load(Ordering::Relaxed), 2);
        assert_eq!(copy.name(), "probe");
    }

    #[test]
    fn test_single_equals_one_element_many() {
        let hits = Arc::new(AtomicUsize::new(0));
        let handler = counting("probe", &hits);

        let single = HandlerSpec::from(handler.clone());
        let many = HandlerSpec::from(vec![handler]);

        assert_eq!(single.len(), 1);
        assert_eq!(many.len(), 1);
        assert_eq!(single.as_slice()[0].name(), many.as_slice()[0].name());
    }

    #[test]
    fn test_empty_many_stays_empty() {
        let spec = HandlerSpec::Many(Vec::new());

        assert!(spec.is_empty());
        assert!(spec.as_slice().is_empty());
    }
}
