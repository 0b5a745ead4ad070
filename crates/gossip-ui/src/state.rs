//! UI-level state that drives rendering.
//! Conversation data lives in the session controller; this only tracks
//! what the panels need between frames, updated by draining the EventBus.

use gossip_types::article::CatalogStatus;
use gossip_types::event::SessionEvent;

pub const STATUS_LOADING: &str = "Loading articles...";
pub const STATUS_THINKING: &str = "Thinking...";
pub const STATUS_READY: &str = "Ready";

/// State visible to UI panels
pub struct UiState {
    /// Catalog progress as last reported
    pub catalog: CatalogStatus,
    /// A query is waiting for its answer
    pub busy: bool,
    /// Whether the Sources side panel is expanded
    pub sidebar_open: bool,
    /// Give the search field keyboard focus on the next frame
    pub focus_input: bool,
    /// Status line text
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            catalog: CatalogStatus::Pending,
            busy: false,
            sidebar_open: true,
            focus_input: true,
            status_text: STATUS_LOADING.to_string(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<SessionEvent>) {
        for event in events {
            match event {
                SessionEvent::SessionStarted { .. } => {
                    self.status_text = STATUS_LOADING.to_string();
                }
                SessionEvent::CatalogLoaded { .. } => {
                    self.catalog = CatalogStatus::Loaded;
                }
                SessionEvent::CatalogUnavailable => {
                    self.catalog = CatalogStatus::Unavailable;
                }
                SessionEvent::QuerySubmitted { .. } => {
                    self.busy = true;
                }
                SessionEvent::AnswerReceived { .. } | SessionEvent::QueryFailed { .. } => {
                    self.busy = false;
                    self.focus_input = true;
                }
                SessionEvent::InputReplaced => {
                    self.focus_input = true;
                }
                // The aborted query still reports through QueryFailed
                SessionEvent::TornDown => {}
            }
            self.status_text = self.derive_status().to_string();
        }
    }

    fn derive_status(&self) -> &'static str {
        if self.busy {
            STATUS_THINKING
        } else if self.catalog.is_loading() {
            STATUS_LOADING
        } else {
            STATUS_READY
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Consume the pending focus request
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_input)
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
