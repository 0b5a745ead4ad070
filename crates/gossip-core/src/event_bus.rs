//! Event bus between the session controller and the UI.
//!
//! Single-threaded (WASM main thread). The controller emits
//! [`SessionEvent`]s as transitions complete; the app drains them once per
//! frame and feeds them to `UiState`.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use gossip_types::event::SessionEvent;

/// Clones share one queue.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<SessionEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: SessionEvent) {
        log::trace!("session event: {:?}", event);
        self.queue.borrow_mut().push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&self) -> Vec<SessionEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }
}
