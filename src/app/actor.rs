//! App actor - message loop processing UI events and view-model updates

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::app::view_model::AmphibianViewModel;
use crate::messages::{RenderState, UiEvent};

/// App actor that processes UI events and state changes from the view model
pub struct AppActor {
    state: AppState,
    view_model: AmphibianViewModel,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(view_model: AmphibianViewModel, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor {
            state: AppState::new(),
            view_model,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // A fetch may already have finished; start from whatever is published now
        let mut state_rx = self.view_model.ui_state();
        let initial = state_rx.borrow_and_update().clone();
        self.state.apply_ui_state(initial);

        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    let Some(event) = event else {
                        break;
                    };
                    if self.handle_ui_event(event) {
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Ok(()) = state_rx.changed() => {
                    let ui_state = state_rx.borrow_and_update().clone();
                    self.state.apply_ui_state(ui_state);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                else => break,
            }
        }

        tracing::info!("App actor stopped");
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Retry => {
                // Fire and forget; the outcome arrives through `state_rx`
                drop(self.view_model.retry());
            }

            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::PageDown => self.state.page_down(),
            UiEvent::PageUp => self.state.page_up(),
            UiEvent::SelectFirst => self.state.select_first(),
            UiEvent::SelectLast => self.state.select_last(),

            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            UiEvent::Quit => return true,
        }

        false
    }
}
