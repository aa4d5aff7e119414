//! Named-handler catalog.
//!
//! The wiring file refers to handlers by name; the catalog maps those names
//! to actual [`Handler`]s and resolves a [`WiringConfig`] into the
//! [`Configuration`] the Initializer consumes.

use std::collections::HashMap;

use compact_str::CompactString;
use tracing::debug;

use super::handler::{Handler, HandlerSpec};
use super::init::Configuration;
use crate::config::{OneOrMany, WiringConfig};
use crate::error::AppError;
use crate::handlers;

#[derive(Debug, Default)]
pub struct HandlerCatalog {
    entries: HashMap<CompactString, Handler>,
}

impl HandlerCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with the reference handlers, registered under
    /// the names the default wiring file uses.
    pub fn with_defaults() -> Self {
        Self::new()
            .with("on_foo", handlers::log_event("on_foo"))
            .with("on_bar", handlers::log_payload("on_bar"))
    }

    /// Builder-style registration. A later entry replaces an earlier one
    /// under the same name.
    pub fn with(mut self, name: impl Into<CompactString>, handler: Handler) -> Self {
        self.register(name, handler);
        self
    }

    pub fn register(&mut self, name: impl Into<CompactString>, handler: Handler) {
        let name = name.into();

        debug!(name = %name, "handler cataloged");

        self.entries.insert(name, handler);
    }

    /// Look up a handler by name. Cloning is cheap (shared closure).
    pub fn get(&self, name: &str) -> Option<Handler> {
        self.entries.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve every wiring entry against the catalog.
    ///
    /// A name the catalog does not know fails the whole resolve; partial
    /// wirings are never produced.
    pub fn resolve(&self, config: &WiringConfig) -> Result<Configuration, AppError> {
        let mut resolved = Configuration::new();

        for (event_type, value) in &config.events {
            let lookup = |name: &String| {
                self.get(name)
                    .ok_or_else(|| AppError::unknown_handler(event_type.clone(), name.clone()))
            };

            // Preserve the file's single-versus-list shape.
            let spec = match value {
                OneOrMany::One(name) => HandlerSpec::Single(lookup(name)?),
                OneOrMany::Many(names) => {
                    let attached: Vec<Handler> =
                        names.iter().map(lookup).collect::<Result<_, _>>()?;

                    HandlerSpec::Many(attached)
                }
            };

            resolved.insert(event_type.as_str(), spec);
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OneOrMany;

    fn noop(name: &'static str) -> Handler {
        Handler::new(name, |_event: &crate::dispatch::event::Event| {})
    }

    fn wiring(entries: &[(&str, OneOrMany)]) -> WiringConfig {
        let mut cfg = WiringConfig::default();
        cfg.events = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        cfg
    }

    #[test]
    fn test_resolve_preserves_shape_and_order() {
        let catalog = HandlerCatalog::new()
            .with("a", noop("a"))
            .with("b", noop("b"));

        let cfg = wiring(&[
            ("zim", OneOrMany::One("a".to_string())),
            ("gir", OneOrMany::Many(vec!["b".to_string(), "a".to_string()])),
        ]);

        let resolved = catalog.resolve(&cfg).unwrap();
        let by_key: HashMap<&str, &HandlerSpec> = resolved.iter().collect();

        assert!(matches!(by_key["zim"], HandlerSpec::Single(_)));

        let gir = by_key["gir"].as_slice();
        assert_eq!(gir.len(), 2);
        assert_eq!(gir[0].name(), "b");
        assert_eq!(gir[1].name(), "a");
    }

    #[test]
    fn test_resolve_unknown_name_fails_whole_config() {
        let catalog = HandlerCatalog::new().with("a", noop("a"));

        let cfg = wiring(&[
            ("zim", OneOrMany::One("a".to_string())),
            ("gir", OneOrMany::One("missing".to_string())),
        ]);

        let err = catalog.resolve(&cfg).unwrap_err();

        match err {
            AppError::UnknownHandler { event_type, name } => {
                assert_eq!(event_type, "gir");
                assert_eq!(name, "missing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_empty_list_yields_empty_spec() {
        let catalog = HandlerCatalog::new();
        let cfg = wiring(&[("gaz", OneOrMany::Many(Vec::new()))]);

        let resolved = catalog.resolve(&cfg).unwrap();
        let (_, spec) = resolved.iter().next().unwrap();

        assert!(spec.is_empty());
    }

    #[test]
    fn test_default_catalog_resolves_default_wiring() {
        let catalog = HandlerCatalog::with_defaults();
        let resolved = catalog.resolve(&WiringConfig::default()).unwrap();

        assert_eq!(resolved.len(), 2);
    }
}
