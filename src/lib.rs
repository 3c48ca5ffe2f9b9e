//! Core library surface for the Health Hub terminal site.
//!
//! The state model (`state`, `filter`, `content`) is independent of the
//! terminal front-end in `ui`, so it can be driven and tested on its own.
pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod state;
pub mod ui;

pub use config::Settings;
pub use content::{seed_catalog, ContentCatalog, SiteContent};
pub use error::{CatalogError, ConfigError};

/// Domain types that other layers manipulate.
pub use models::{Category, Theme, TipRecord, View};

pub use state::{AppShell, Page};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
