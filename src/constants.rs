//! Application constants
//!
//! Centralized location for user-visible strings and configuration defaults.

use std::time::Duration;

/// Server that hosts the amphibians catalogue
pub const BASE_URL: &str = "https://android-kotlin-fun-mars-server.appspot.com/";

/// Path of the amphibians listing, relative to [`BASE_URL`]
pub const AMPHIBIANS_PATH: &str = "amphibians";

/// Request timeout applied when nothing else is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Log file, written to the working directory
pub const LOG_FILE: &str = "amphibians.log";

/// Application name, shown in the title bar
pub const APP_NAME: &str = "Amphibians";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const LOADING_MESSAGE: &str = "Loading amphibians...";
pub const LOADING_FAILED_MESSAGE: &str = "Failed to load amphibians.";
pub const NO_AMPHIBIANS_MESSAGE: &str = "No amphibians found.";
pub const RETRY_LABEL: &str = "[r] Retry";
