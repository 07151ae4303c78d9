//! Session Manager service

use crate::error::{Result, SessionError};
use crate::storage::SessionStorage;
use crate::structs::SessionState;
use std::sync::Arc;

/// Session Manager - opens and commits per-browser sessions
///
/// Each request opens the session it belongs to, mutates the returned value
/// and commits it back. There is no locking across requests: two concurrent
/// requests for the same session are last-writer-wins.
#[derive(Clone)]
pub struct SessionManager {
    storage: Arc<dyn SessionStorage>,
}

impl SessionManager {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Load the session, or start an empty one when the store has none
    pub async fn open(&self, session_id: &str) -> Result<SessionState> {
        match self.storage.load_session(session_id).await {
            Ok(session) => Ok(session),
            Err(SessionError::NotFound) => {
                tracing::debug!(session_id, "Starting new session");
                Ok(SessionState::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Write the session back
    ///
    /// A blank session is indistinguishable from an unknown one, so it is
    /// removed from storage instead of written. Visits that never create
    /// anything leave no trace.
    pub async fn commit(&self, session_id: &str, session: &mut SessionState) -> Result<()> {
        if session.is_blank() {
            return self.storage.delete_session(session_id).await;
        }
        session.touch();
        self.storage.save_session(session_id, session).await
    }
}
