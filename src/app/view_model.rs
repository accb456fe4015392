//! View model - owns the observable UI state and drives the fetch

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::models::Amphibian;
use crate::network::AmphibiansRepository;

/// Progress of the amphibians fetch
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Loading,
    /// Records in server response order
    Success(Vec<Amphibian>),
    Error,
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }

    /// Whether the screen for this state offers a retry control
    pub fn can_retry(&self) -> bool {
        !self.is_loading()
    }

    pub fn amphibians(&self) -> &[Amphibian] {
        match self {
            UiState::Success(amphibians) => amphibians,
            _ => &[],
        }
    }
}

/// Holds the current [`UiState`] and refreshes it from the repository.
///
/// Fetches are never cancelled and overlapping fetches are not coordinated:
/// whichever completes last determines the published state.
pub struct AmphibianViewModel {
    repository: Arc<dyn AmphibiansRepository>,
    ui_state: Arc<watch::Sender<UiState>>,
    next_fetch_id: AtomicU64,
}

impl AmphibianViewModel {
    /// Creates the view model and starts the initial fetch.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(repository: Arc<dyn AmphibiansRepository>) -> Self {
        let (ui_state, _) = watch::channel(UiState::Loading);
        let view_model = AmphibianViewModel {
            repository,
            ui_state: Arc::new(ui_state),
            next_fetch_id: AtomicU64::new(1),
        };
        view_model.get_amphibians_list();
        view_model
    }

    /// Subscribe to state changes
    pub fn ui_state(&self) -> watch::Receiver<UiState> {
        self.ui_state.subscribe()
    }

    pub fn current_state(&self) -> UiState {
        self.ui_state.borrow().clone()
    }

    /// Publish `Loading`, then fetch in the background and publish the outcome.
    ///
    /// The returned handle may be dropped; the fetch runs to completion either way.
    pub fn get_amphibians_list(&self) -> JoinHandle<()> {
        let fetch_id = self.next_fetch_id.fetch_add(1, Ordering::Relaxed);
        self.ui_state.send_replace(UiState::Loading);

        let repository = Arc::clone(&self.repository);
        let ui_state = Arc::clone(&self.ui_state);

        tokio::spawn(async move {
            tracing::info!(fetch_id, "Fetching amphibians");
            let next = match repository.get_amphibians().await {
                Ok(amphibians) => {
                    tracing::info!(fetch_id, count = amphibians.len(), "Fetch succeeded");
                    UiState::Success(amphibians)
                }
                Err(e) => {
                    tracing::warn!(fetch_id, kind = ?e.kind(), error = %e, "Fetch failed");
                    UiState::Error
                }
            };
            ui_state.send_replace(next);
        })
    }

    /// Same as [`get_amphibians_list`](Self::get_amphibians_list), triggered by the user
    pub fn retry(&self) -> JoinHandle<()> {
        tracing::debug!("Retry requested");
        self.get_amphibians_list()
    }
}
