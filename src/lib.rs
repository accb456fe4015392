//! # Amphibians TUI
//!
//! A terminal client for the amphibians catalogue.
//!
//! ## Features
//! - Fetches the listing with a single GET request
//! - Loading, error and empty states with manual retry
//! - Scrollable list of cards (name, type, image source, description)
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous rendering of `RenderState`
//! - App Layer - view model (observable `UiState`) and event processing
//! - Network Layer - HTTP client behind a repository trait

pub mod constants;
pub mod config;
pub mod error;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{ApiError, ErrorKind};
pub use models::Amphibian;
pub use messages::{UiEvent, RenderState};
pub use app::{AmphibianViewModel, AppActor, AppState, UiState};
pub use network::{AmphibianApi, AmphibiansRepository, NetworkAmphibiansRepository};
