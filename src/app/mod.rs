//! App layer - view model, central state and event processing
//!
//! The view model owns the observable fetch state. The App actor receives
//! UI events and view-model updates, and emits render state.

pub mod state;
pub mod actor;
pub mod view_model;

pub use state::AppState;
pub use actor::AppActor;
pub use view_model::{AmphibianViewModel, UiState};
