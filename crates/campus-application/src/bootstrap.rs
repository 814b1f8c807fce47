//! Composition root: wires config, token slot, session context, API client
//! and the use cases into one [`CampusApp`].

use campus_core::auth::AuthFailureHook;
use campus_core::config::ClientConfig;
use campus_core::error::Result;
use campus_core::session::{SessionContext, TokenStore};
use campus_infrastructure::{ApiClient, AuthInterceptor, FileTokenStore, MemoryTokenStore};
use std::sync::Arc;

use crate::dashboard::DashboardService;
use crate::session::{RestoreOutcome, SessionStore};

/// Where the bearer token is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenPersistence {
    /// `session.json` in the config directory, or `config.token_file`.
    #[default]
    File,
    /// Process memory only.
    Ephemeral,
}

/// Builds the token slot selected by `persistence`.
pub fn token_store_for(
    config: &ClientConfig,
    persistence: TokenPersistence,
) -> Result<Arc<dyn TokenStore>> {
    let store: Arc<dyn TokenStore> = match persistence {
        TokenPersistence::Ephemeral => Arc::new(MemoryTokenStore::new()),
        TokenPersistence::File => match &config.token_file {
            Some(path) => Arc::new(FileTokenStore::with_path(path.clone())),
            None => Arc::new(FileTokenStore::new()?),
        },
    };
    Ok(store)
}

/// The fully wired application.
pub struct CampusApp {
    pub api: ApiClient,
    pub session: SessionStore,
    pub dashboard: DashboardService,
}

impl CampusApp {
    /// Wires every component around a single session context.
    pub fn bootstrap(
        config: &ClientConfig,
        token_store: Arc<dyn TokenStore>,
        on_auth_failure: Arc<dyn AuthFailureHook>,
    ) -> Result<Self> {
        let context = Arc::new(SessionContext::new());
        let interceptor = AuthInterceptor::new(context, token_store.clone(), on_auth_failure);
        let api = ApiClient::new(config, interceptor)?;

        tracing::debug!(api = %api.base_url(), "Bootstrapped API client");

        Ok(Self {
            session: SessionStore::new(api.clone(), token_store),
            dashboard: DashboardService::new(api.clone()),
            api,
        })
    }

    /// Startup step: resume the persisted session, if any.
    pub async fn init(&self) -> RestoreOutcome {
        self.session.restore_session().await
    }
}
