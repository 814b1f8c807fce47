use campus_core::auth::{LoginRequest, LoginResponse, RegisterRequest};
use campus_core::error::Result;
use campus_core::user::UserSummary;

use super::ApiClient;

impl ApiClient {
    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.post(&["auth", "login"], request).await
    }

    /// `POST /auth/register`. The created record is not returned.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.post_discarding(&["auth", "register"], request).await
    }

    /// `GET /auth/me`: validates the attached token.
    pub async fn current_user(&self) -> Result<UserSummary> {
        self.get(&["auth", "me"]).await
    }
}
