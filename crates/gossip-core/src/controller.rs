//! Session controller: owns the conversation and gates the query path.
//!
//! Every transition runs synchronously to completion. The only suspension
//! points are the futures handed back by [`SessionController::submit`] and
//! [`SessionController::load_catalog`]; the caller spawns them (the app uses
//! `wasm_bindgen_futures::spawn_local`, tests drive them by hand). No
//! `RefCell` borrow is held across an `.await`, so the UI can keep reading
//! [`SessionController::view_state`] while a query is pending.
//!
//! Lifecycle of one accepted query:
//! 1. `submit` appends the user message, raises `request_in_flight`,
//!    clears the input and returns the query future
//! 2. the future calls the [`QueryPort`]
//! 3. on settle, an assistant message is appended (the answer, or the
//!    fallback text on any failure) and the flag drops

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use tokio_util::sync::CancellationToken;
use gossip_types::{
    Result,
    article::{Article, CatalogStatus, SourceCount},
    event::SessionEvent,
    message::{Message, MessageId, Role},
    session::SessionInfo,
};

use crate::aggregate::aggregate;
use crate::event_bus::EventBus;
use crate::ports::{CatalogPort, QueryAnswer, QueryPort};

/// Shown in place of an answer whenever the query path fails.
pub const FALLBACK_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Mutable session data. Only the controller touches it.
struct SessionState {
    info: SessionInfo,
    messages: Vec<Message>,
    articles: Vec<Article>,
    catalog: CatalogStatus,
    catalog_requested: bool,
    request_in_flight: bool,
    input: String,
    next_message_id: u64,
}

impl SessionState {
    fn new() -> Self {
        Self {
            info: SessionInfo::new(),
            messages: Vec::new(),
            articles: Vec::new(),
            catalog: CatalogStatus::Pending,
            catalog_requested: false,
            request_in_flight: false,
            input: String::new(),
            next_message_id: 0,
        }
    }

    fn append(&mut self, role: Role, text: &str) -> MessageId {
        self.next_message_id += 1;
        let id = MessageId(self.next_message_id);
        let message = match role {
            Role::User => Message::user(id, text),
            Role::Assistant => Message::assistant(id, text),
        };
        self.messages.push(message);
        id
    }

    fn thinking(&self) -> bool {
        self.request_in_flight && self.messages.last().map_or(true, Message::is_user)
    }
}

/// Read-only snapshot handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub messages: Vec<Message>,
    pub articles: Vec<Article>,
    pub catalog: CatalogStatus,
    pub sources: Vec<SourceCount>,
    /// Waiting on the answer to the most recent user turn
    pub thinking: bool,
    pub request_in_flight: bool,
    pub input: String,
    /// The conversation has started; switch from landing to results view
    pub show_results: bool,
    /// At least one assistant turn exists
    pub has_answers: bool,
}

impl ViewState {
    /// Submit button / Enter key availability
    pub fn can_submit(&self) -> bool {
        !self.request_in_flight && !self.input.trim().is_empty()
    }
}

/// The query-session controller. Clone-cheap; clones share one session.
#[derive(Clone)]
pub struct SessionController {
    state: Rc<RefCell<SessionState>>,
    query: Rc<dyn QueryPort>,
    catalog: Rc<dyn CatalogPort>,
    event_bus: EventBus,
    cancel: CancellationToken,
}

impl SessionController {
    pub fn new(
        query: Rc<dyn QueryPort>,
        catalog: Rc<dyn CatalogPort>,
        event_bus: EventBus,
    ) -> Self {
        let state = SessionState::new();
        log::info!(
            "Session {} started at {} (query endpoint: {})",
            state.info.id,
            state.info.started_at,
            query.endpoint()
        );
        event_bus.emit(SessionEvent::SessionStarted {
            session_id: state.info.id.clone(),
        });

        Self {
            state: Rc::new(RefCell::new(state)),
            query,
            catalog,
            event_bus,
            cancel: CancellationToken::new(),
        }
    }

    /// Start the one-shot catalog fetch. Returns `None` if it was already
    /// started; the catalog is never refetched within a session.
    pub fn load_catalog(&self) -> Option<LocalBoxFuture<'static, ()>> {
        {
            let mut state = self.state.borrow_mut();
            if state.catalog_requested {
                log::debug!("Catalog already requested; ignoring");
                return None;
            }
            state.catalog_requested = true;
        }

        let controller = self.clone();
        Some(Box::pin(async move {
            let result = controller.catalog.fetch_catalog().await;
            controller.settle_catalog(result);
        }))
    }

    fn settle_catalog(&self, result: Result<Vec<Article>>) {
        let event = {
            let mut state = self.state.borrow_mut();
            match result {
                Ok(articles) => {
                    log::info!("Catalog loaded: {} articles", articles.len());
                    let count = articles.len();
                    state.articles = articles;
                    state.catalog = CatalogStatus::Loaded;
                    SessionEvent::CatalogLoaded { count }
                }
                Err(e) => {
                    log::warn!("Catalog unavailable ({}): {}", e.kind(), e);
                    state.articles.clear();
                    state.catalog = CatalogStatus::Unavailable;
                    SessionEvent::CatalogUnavailable
                }
            }
        };
        self.event_bus.emit(event);
    }

    /// Accept a user query.
    ///
    /// Returns `None` (and changes nothing) when the text is blank, a query
    /// is already in flight, or the session was torn down. Otherwise the
    /// user turn is appended immediately and the returned future performs
    /// the request and appends the assistant turn. Blankness is judged on
    /// the trimmed text; the turn and the query keep the text as typed.
    pub fn submit(&self, text: &str) -> Option<LocalBoxFuture<'static, ()>> {
        let message_id = {
            let mut state = self.state.borrow_mut();
            if text.trim().is_empty() {
                log::debug!("Ignoring blank submit");
                return None;
            }
            if state.request_in_flight {
                log::debug!("Ignoring submit while a query is in flight");
                return None;
            }
            if self.cancel.is_cancelled() {
                log::debug!("Ignoring submit after teardown");
                return None;
            }

            let id = state.append(Role::User, text);
            state.request_in_flight = true;
            state.input.clear();
            id
        };

        log::info!("Query {} accepted", message_id);
        self.event_bus.emit(SessionEvent::QuerySubmitted { message_id });

        let controller = self.clone();
        let query = text.to_string();
        Some(Box::pin(async move {
            let result = controller
                .query
                .submit_query(&query, &controller.cancel)
                .await;
            controller.settle_query(message_id, result);
        }))
    }

    fn settle_query(&self, message_id: MessageId, result: Result<QueryAnswer>) {
        let event = {
            let mut state = self.state.borrow_mut();
            let event = match result {
                Ok(reply) if !reply.answer.trim().is_empty() => {
                    let id = state.append(Role::Assistant, &reply.answer);
                    log::info!("Query {} answered ({})", message_id, id);
                    SessionEvent::AnswerReceived { message_id: id }
                }
                Ok(_) => {
                    log::warn!("Query {} returned an empty answer", message_id);
                    let id = state.append(Role::Assistant, FALLBACK_MESSAGE);
                    SessionEvent::QueryFailed { message_id: id }
                }
                Err(e) => {
                    log::warn!("Query {} failed ({}): {}", message_id, e.kind(), e);
                    let id = state.append(Role::Assistant, FALLBACK_MESSAGE);
                    SessionEvent::QueryFailed { message_id: id }
                }
            };
            state.request_in_flight = false;
            event
        };
        self.event_bus.emit(event);
    }

    /// Copy an article's title into the input. Does not submit.
    pub fn select_article(&self, article: &Article) {
        self.state.borrow_mut().input = article.title.clone();
        self.event_bus.emit(SessionEvent::InputReplaced);
    }

    /// Clear the input buffer. The conversation is left as is.
    pub fn new_search(&self) {
        self.state.borrow_mut().input.clear();
        self.event_bus.emit(SessionEvent::InputReplaced);
    }

    /// Mirror the text field into the input buffer.
    pub fn set_input(&self, text: impl Into<String>) {
        self.state.borrow_mut().input = text.into();
    }

    /// Abort any in-flight query and refuse further submits.
    ///
    /// The aborted query still settles through the usual failure path, so
    /// its assistant turn is appended and the in-flight flag drops.
    pub fn teardown(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        log::info!("Session {} torn down", self.state.borrow().info.id);
        self.cancel.cancel();
        self.event_bus.emit(SessionEvent::TornDown);
    }

    pub fn is_request_in_flight(&self) -> bool {
        self.state.borrow().request_in_flight
    }

    pub fn view_state(&self) -> ViewState {
        let state = self.state.borrow();
        ViewState {
            messages: state.messages.clone(),
            articles: state.articles.clone(),
            catalog: state.catalog,
            sources: aggregate(&state.articles),
            thinking: state.thinking(),
            request_in_flight: state.request_in_flight,
            input: state.input.clone(),
            show_results: !state.messages.is_empty(),
            has_answers: state.messages.iter().any(|m| m.role == Role::Assistant),
        }
    }
}
