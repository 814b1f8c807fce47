use serde::{Deserialize, Serialize};

use crate::user::UserSummary;

/// Snapshot of the client-side session.
///
/// `current_user` is only ever `Some` while `token` is `Some` and the token
/// has been validated against `GET /auth/me`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub current_user: Option<UserSummary>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.current_user.is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("current_user", &self.current_user)
            .finish()
    }
}
