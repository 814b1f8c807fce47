use crate::error::Result;

/// Durable storage for the bearer token: a single named slot that survives
/// restarts.
///
/// Implementations must treat `clear` on an empty slot as success.
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the stored token, or `None` when the slot is empty.
    async fn load(&self) -> Result<Option<String>>;

    /// Replaces the stored token.
    async fn save(&self, token: &str) -> Result<()>;

    /// Empties the slot.
    async fn clear(&self) -> Result<()>;
}
