//! enade-dash - ENADE results dashboard
//!
//! Fetches pre-aggregated ENADE course evaluation data from the backend,
//! reshapes it into charts, tables and cards, and shows it in a terminal
//! dashboard or as a plain-text report.

pub mod api;
pub mod app;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod state;
pub mod transform;
pub mod ui;

// Re-exports
pub use api::ApiClient;
pub use app::{App, View};
pub use config::Config;
pub use error::{FetchError, FetchResult};
pub use loader::{LoadEvent, Loader, Payload, Request};
pub use state::{AppState, WidgetContent};

/// Result type alias
pub type Result<T> = anyhow::Result<T>;
