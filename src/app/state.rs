//! App state - pure data structure with no I/O logic

use chrono::{DateTime, Local};

use crate::app::view_model::UiState;
use crate::messages::RenderState;

/// Cards skipped by PageUp / PageDown
const PAGE_SIZE: usize = 5;

/// Main application state - pure data, no I/O
#[derive(Debug, Default)]
pub struct AppState {
    pub ui_state: UiState,
    pub selected: usize,
    pub show_help: bool,
    pub last_updated: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a state published by the view model.
    ///
    /// The selection survives Loading and Error so a refresh keeps the
    /// highlighted card; it is only clamped against a new list.
    pub fn apply_ui_state(&mut self, ui_state: UiState) {
        let is_success = matches!(ui_state, UiState::Success(_));
        self.ui_state = ui_state;
        if is_success {
            self.last_updated = Some(Local::now());
            self.clamp_selection();
        }
    }

    fn len(&self) -> usize {
        self.ui_state.amphibians().len()
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.len().saturating_sub(1));
    }

    // ========================
    // Navigation
    // ========================

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn page_down(&mut self) {
        self.move_selection(PAGE_SIZE);
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(PAGE_SIZE);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        if self.len() > 0 {
            self.selected = self.len() - 1;
        }
    }

    fn move_selection(&mut self, by: usize) {
        // Nothing to move through while no list is shown
        if self.len() == 0 {
            return;
        }
        self.selected = self.selected.saturating_add(by);
        self.clamp_selection();
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            ui_state: self.ui_state.clone(),
            selected: self.selected,
            show_help: self.show_help,
            last_updated: self.last_updated,
        }
    }
}
