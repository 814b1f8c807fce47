use campus_core::auth::{LoginRequest, RegisterRequest};
use campus_core::error::{CampusError, Result};
use campus_core::session::{Session, SessionContext, TokenStore};
use campus_core::user::{Role, UserSummary};
use campus_infrastructure::ApiClient;
use std::sync::Arc;

/// Result of [`SessionStore::restore_session`].
#[derive(Debug, Clone, PartialEq)]
pub enum RestoreOutcome {
    /// Nothing in durable storage; no request was made.
    NoStoredToken,
    /// The stored token was accepted and the session is populated.
    Restored(UserSummary),
    /// The API rejected the stored token; it has been purged.
    InvalidTokenPurged,
    /// Restore failed for another reason (network, server error, unreadable
    /// storage). The stored token is kept and stays attached, but no user is
    /// established for this run.
    Deferred(CampusError),
}

impl RestoreOutcome {
    pub fn user(&self) -> Option<&UserSummary> {
        match self {
            RestoreOutcome::Restored(user) => Some(user),
            _ => None,
        }
    }
}

/// Single source of truth for "is there a logged-in user, and who are they".
///
/// Owns the write side of the shared [`SessionContext`] and the durable
/// token slot. The API client reads the same context for every request.
pub struct SessionStore {
    api: ApiClient,
    context: Arc<SessionContext>,
    token_store: Arc<dyn TokenStore>,
}

impl SessionStore {
    /// Creates a store over the client's session and the given token slot.
    ///
    /// `token_store` must be the same slot the client's interceptor purges
    /// on authentication failures.
    pub fn new(api: ApiClient, token_store: Arc<dyn TokenStore>) -> Self {
        let context = api.session().clone();
        Self {
            api,
            context,
            token_store,
        }
    }

    pub fn context(&self) -> &Arc<SessionContext> {
        &self.context
    }

    pub fn snapshot(&self) -> Session {
        self.context.snapshot()
    }

    pub fn current_user(&self) -> Option<UserSummary> {
        self.context.current_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.context.is_authenticated()
    }

    /// Exchanges credentials for a token, persists it, attaches it to the
    /// transport and loads the viewer.
    ///
    /// # Errors
    ///
    /// - `Authentication` when the credentials are rejected
    /// - `Storage` when the token cannot be persisted
    /// - any client error from `GET /auth/me`; the token then stays attached
    ///   without a user, and the next restore retries it
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSummary> {
        let response = self.api.login(&LoginRequest::new(email, password)).await?;

        self.token_store.save(&response.access_token).await?;
        self.context.attach_token(response.access_token);

        let user = self.api.current_user().await?;
        self.context.establish(user.clone())?;

        tracing::info!(user_id = %user.id, role = %user.role, "Logged in");
        Ok(user)
    }

    /// Creates an account. Does not log in.
    pub async fn register(&self, name: &str, email: &str, password: &str, role: Role) -> Result<()> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        self.api.register(&request).await?;
        tracing::info!(email, %role, "Registered account");
        Ok(())
    }

    /// Clears the stored token, detaches it from the transport and forgets
    /// the user. Local only; a storage failure is logged, not returned.
    pub async fn logout(&self) {
        if let Err(e) = self.token_store.clear().await {
            tracing::warn!(error = %e, "Failed to clear stored token during logout");
        }
        self.context.clear();
        tracing::info!("Logged out");
    }

    /// Ends the session at shutdown of an explicitly logged-out console.
    pub async fn teardown(&self) {
        self.logout().await;
    }

    /// Resumes the session persisted by a previous run.
    ///
    /// Only a token the API confirms as invalid is purged; any other failure
    /// leaves it in storage for the next run.
    pub async fn restore_session(&self) -> RestoreOutcome {
        let token = match self.token_store.load().await {
            Ok(Some(token)) => token,
            Ok(None) => return RestoreOutcome::NoStoredToken,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read stored token");
                return RestoreOutcome::Deferred(e);
            }
        };

        self.context.attach_token(token);

        match self.api.current_user().await {
            Ok(user) => match self.context.establish(user.clone()) {
                Ok(()) => {
                    tracing::info!(user_id = %user.id, role = %user.role, "Restored session");
                    RestoreOutcome::Restored(user)
                }
                Err(e) => RestoreOutcome::Deferred(e),
            },
            Err(e) if e.is_authentication() => {
                // Normally already purged by the interceptor.
                if let Err(clear_err) = self.token_store.clear().await {
                    tracing::warn!(error = %clear_err, "Failed to purge rejected token");
                }
                self.context.clear();
                tracing::info!("Stored token was rejected, purged");
                RestoreOutcome::InvalidTokenPurged
            }
            Err(e) => {
                // Token stays attached; no user until it is validated.
                tracing::warn!(error = %e, "Could not validate stored token, keeping it for next run");
                RestoreOutcome::Deferred(e)
            }
        }
    }
}
