pub mod error;

pub mod config;

pub mod dispatch {
    pub mod event;
    pub use event::Event;

    pub mod handler;
    pub use handler::{Handler, HandlerSpec};

    pub mod target;
    pub use target::{DispatchTarget, EventBus};

    pub mod catalog;
    pub use catalog::HandlerCatalog;

    pub mod init;
    pub use init::{Configuration, initialize, initialize_default};
}

pub mod handlers;

pub mod logging;
pub use logging::LoggingConfig;

pub use config::{OneOrMany, WiringConfig};

pub use dispatch::{
    Configuration, DispatchTarget, Event, EventBus, Handler, HandlerCatalog, HandlerSpec,
    initialize, initialize_default,
};

pub use error::AppError;
