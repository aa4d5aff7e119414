//! src/main.rs
//! Demo wiring: load the config, resolve handlers, initialize a bus, raise a
//! few sample events.

use anyhow::{Context, Result};
use tracing::info;

use evwire_core::{
    Event, EventBus, HandlerCatalog, LoggingConfig, WiringConfig, initialize, logging,
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    let config = WiringConfig::load()
        .await
        .context("Failed to load wiring config")?;

    let _log_guard = logging::init(&LoggingConfig {
        log_level: config.log_level.clone(),
        ..LoggingConfig::default()
    })
    .context("Failed to initialize logging")?;

    let catalog = HandlerCatalog::with_defaults();
    let wiring = catalog
        .resolve(&config)
        .context("Failed to resolve handler wiring")?;

    let bus = EventBus::new();
    initialize(&wiring, &bus);

    info!(listeners = bus.total_listeners(), "event bus initialized");

    for event_type in ["foo_event", "bar_event", "unwired_event"] {
        bus.notify(&Event::new(event_type).with_payload(serde_json::json!({ "source": "demo" })));
    }

    info!("Demo dispatch complete");
    Ok(())
}
