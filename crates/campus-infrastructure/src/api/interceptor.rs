//! The cross-cutting authorization stage of the API client.

use campus_core::auth::AuthFailureHook;
use campus_core::session::{SessionContext, TokenStore};
use reqwest::RequestBuilder;
use std::sync::Arc;

/// Request/response stage applied to every call made by [`super::ApiClient`].
///
/// - request: attaches `Authorization: Bearer <token>` when the session holds
///   a token;
/// - response: on an authentication failure, purges the stored token, clears
///   the session, then fires the auth-failure hook exactly once.
pub struct AuthInterceptor {
    context: Arc<SessionContext>,
    token_store: Arc<dyn TokenStore>,
    hook: Arc<dyn AuthFailureHook>,
}

impl AuthInterceptor {
    pub fn new(
        context: Arc<SessionContext>,
        token_store: Arc<dyn TokenStore>,
        hook: Arc<dyn AuthFailureHook>,
    ) -> Self {
        Self {
            context,
            token_store,
            hook,
        }
    }

    pub fn context(&self) -> &Arc<SessionContext> {
        &self.context
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.token_store
    }

    pub(crate) fn on_request(&self, request: RequestBuilder) -> RequestBuilder {
        // Read at call time so login/logout take effect on the next request.
        match self.context.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn on_auth_failure(&self, resource: &str) {
        tracing::warn!(resource, "API rejected the credential, clearing session");
        if let Err(e) = self.token_store.clear().await {
            tracing::warn!(error = %e, "Failed to clear stored token");
        }
        self.context.clear();
        self.hook.on_auth_failure();
    }
}
