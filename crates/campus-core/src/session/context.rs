use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::model::Session;
use crate::error::{CampusError, Result};
use crate::user::UserSummary;

/// The single, process-wide session shared by the API client and the
/// session store.
///
/// Constructed once by the composition root and injected as
/// `Arc<SessionContext>`. The API client only reads the token (at call time);
/// the session store and the client's auth interceptor are the only writers.
/// Locks are never held across an `.await`.
#[derive(Debug, Default)]
pub struct SessionContext {
    state: RwLock<Session>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.read().clone()
    }

    /// The bearer token attached to outgoing requests, if any.
    pub fn token(&self) -> Option<String> {
        self.read().token.clone()
    }

    pub fn current_user(&self) -> Option<UserSummary> {
        self.read().current_user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// Attaches a bearer token to the transport.
    ///
    /// A token that differs from the current one has not been validated yet,
    /// so any previously established user is dropped.
    pub fn attach_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut state = self.write();
        if state.token.as_deref() != Some(token.as_str()) {
            state.current_user = None;
        }
        state.token = Some(token);
    }

    /// Records the user that the attached token was validated as.
    ///
    /// Fails when no token is attached.
    pub fn establish(&self, user: UserSummary) -> Result<()> {
        let mut state = self.write();
        if state.token.is_none() {
            return Err(CampusError::internal(
                "cannot establish a user without an attached token",
            ));
        }
        state.current_user = Some(user);
        Ok(())
    }

    /// Detaches the token and forgets the user.
    pub fn clear(&self) {
        *self.write() = Session::default();
    }
}
