//! Message types for inter-layer communication in the actor-based architecture.
//!
//! UI events flow from the terminal loop to the app actor; render states flow back.

pub mod ui_events;
pub mod render;

pub use ui_events::UiEvent;
pub use render::RenderState;
