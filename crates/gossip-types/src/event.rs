use serde::{Deserialize, Serialize};
use crate::message::MessageId;

/// Events emitted by the session controller.
/// The UI drains these each frame to update its status projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Session created
    SessionStarted { session_id: String },

    /// Catalog fetch finished with this many articles
    CatalogLoaded { count: usize },

    /// Catalog fetch failed; the session runs without articles
    CatalogUnavailable,

    /// A user query was accepted and sent to the answering service
    QuerySubmitted { message_id: MessageId },

    /// The assistant answer for the pending query was appended
    AnswerReceived { message_id: MessageId },

    /// The pending query failed and the fallback message was appended.
    /// Carries no error detail; that only goes to the log.
    QueryFailed { message_id: MessageId },

    /// The input buffer was replaced from outside the text field
    InputReplaced,

    /// The session cancellation token fired
    TornDown,
}
