//! Typed gateway to the remote REST API.
//!
//! One async method per remote operation, grouped by resource in the
//! submodules. Every call goes through [`ApiClient::execute`], which applies
//! the [`AuthInterceptor`] stages and maps failures to the error taxonomy:
//! `Authentication`, `Validation`, `NotFound`, `Request`. There are no
//! retries; one call yields one outcome.

mod assignments;
mod auth;
mod courses;
mod enrollments;
mod error;
mod interceptor;
mod submissions;
mod users;

pub use interceptor::AuthInterceptor;

use campus_core::config::ClientConfig;
use campus_core::error::{CampusError, Result};
use campus_core::session::SessionContext;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for the education platform API.
///
/// Holds no entity state. The only shared state it touches is the session
/// token, read through the interceptor at call time.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    interceptor: Arc<AuthInterceptor>,
}

impl ApiClient {
    /// Creates a client for `config.api_base_url`.
    pub fn new(config: &ClientConfig, interceptor: AuthInterceptor) -> Result<Self> {
        let base_url = parse_base_url(config.normalized_base_url())?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CampusError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            interceptor: Arc::new(interceptor),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The session this client reads its bearer token from.
    pub fn session(&self) -> &Arc<SessionContext> {
        self.interceptor.context()
    }

    fn endpoint(&self, path: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CampusError::config(format!("API base URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }

    /// Sends one request through the interceptor and returns the successful
    /// response, or the mapped error.
    async fn execute<F>(&self, method: Method, path: &[&str], configure: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let resource = resource_label(path);
        let url = self.endpoint(path)?;

        let request = self.interceptor.on_request(configure(self.http.request(method.clone(), url)));

        let response = request.send().await.map_err(|e| {
            tracing::debug!(%method, %resource, error = %e, "API request failed");
            CampusError::request(e.status().map(|s| s.as_u16()), format!("{method} {resource}: {e}"))
        })?;

        let status = response.status();
        tracing::debug!(%method, %resource, status = status.as_u16(), "API response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        if status == StatusCode::UNAUTHORIZED {
            self.interceptor.on_auth_failure(&resource).await;
        }
        Err(error::map_http_error(status, &resource, &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            CampusError::request(Some(status), format!("Invalid response body from {resource}: {e}"))
        })
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> Result<T> {
        let response = self.execute(Method::GET, path, |r| r).await?;
        Self::decode(response, &resource_label(path)).await
    }

    pub(crate) async fn get_with_query<T, Q>(&self, path: &[&str], query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.execute(Method::GET, path, |r| r.query(query)).await?;
        Self::decode(response, &resource_label(path)).await
    }

    pub(crate) async fn post<B, T>(&self, path: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::POST, path, |r| r.json(body)).await?;
        Self::decode(response, &resource_label(path)).await
    }

    /// POST whose response body is ignored.
    pub(crate) async fn post_discarding<B>(&self, path: &[&str], body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, |r| r.json(body)).await?;
        Ok(())
    }

    pub(crate) async fn patch<B, T>(&self, path: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::PATCH, path, |r| r.json(body)).await?;
        Self::decode(response, &resource_label(path)).await
    }

    pub(crate) async fn delete(&self, path: &[&str]) -> Result<()> {
        self.execute(Method::DELETE, path, |r| r).await?;
        Ok(())
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| CampusError::config(format!("Invalid API base URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CampusError::config(format!(
            "API base URL must use http or https, got '{other}'"
        ))),
    }
}

fn resource_label(path: &[&str]) -> String {
    format!("/{}", path.join("/"))
}
