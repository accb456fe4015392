//! Render state - snapshot sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::app::UiState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub ui_state: UiState,
    /// Index of the highlighted card, always within the list when it is non-empty
    pub selected: usize,
    pub show_help: bool,
    /// When the last successful fetch completed
    pub last_updated: Option<DateTime<Local>>,
}
