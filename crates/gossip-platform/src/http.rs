//! Shared response handling for the fetch adapters.

use gossip_types::{GossipError, Result};

/// Classify an HTTP status the way `Response::ok()` does: 2xx passes,
/// anything else becomes [`GossipError::Status`].
pub fn check_status(status: u16, status_text: &str) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(GossipError::Status {
            status,
            status_text: status_text.to_string(),
        })
    }
}
