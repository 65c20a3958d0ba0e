//! Session store: opaque bearer token mapped to an authenticated identity.
//!
//! Identity resolution is an explicit input to every core operation: a
//! handler presents the token it received and gets back the identity or
//! nothing. There is no ambient "current user" state anywhere.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

/// The identity a session token resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    pub user_id: Uuid,
    pub email: String,
}

/// In-process token registry. Tokens are random UUIDv4 strings and live
/// until logout or account deletion revokes them.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionIdentity>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a fresh opaque token for an identity
    pub async fn create(&self, identity: SessionIdentity) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.write().await.insert(token.clone(), identity);
        token
    }

    /// Resolve a token to its identity, if the session is still active
    pub async fn resolve(&self, token: &str) -> Option<SessionIdentity> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Revoke a single token (logout). Unknown tokens are a no-op.
    pub async fn revoke(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }

    /// Revoke every session belonging to a user (account deletion)
    pub async fn revoke_all_for_user(&self, user_id: Uuid) {
        self.sessions
            .write()
            .await
            .retain(|_, identity| identity.user_id != user_id);
    }
}
