//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::UiState;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    // Fetch
    Retry,

    // List navigation
    SelectNext,
    SelectPrev,
    PageDown,
    PageUp,
    SelectFirst,
    SelectLast,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on what is currently on screen
pub fn key_to_ui_event(key: KeyEvent, ui_state: &UiState, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        // The loading screen has no retry control
        KeyCode::Char('r') | KeyCode::Enter if ui_state.can_retry() => Some(UiEvent::Retry),
        KeyCode::Char('j') | KeyCode::Down => Some(UiEvent::SelectNext),
        KeyCode::Char('k') | KeyCode::Up => Some(UiEvent::SelectPrev),
        KeyCode::PageDown => Some(UiEvent::PageDown),
        KeyCode::PageUp => Some(UiEvent::PageUp),
        KeyCode::Char('g') | KeyCode::Home => Some(UiEvent::SelectFirst),
        KeyCode::Char('G') | KeyCode::End => Some(UiEvent::SelectLast),
        _ => None,
    }
}
