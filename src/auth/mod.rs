mod api_key;

pub use api_key::ApiKeyAuth;

use crate::errors::FineTuneResult;
use async_trait::async_trait;
use http::HeaderMap;

/// Applies provider authentication to outgoing request headers.
#[async_trait]
pub trait AuthManager: Send + Sync {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> FineTuneResult<()>;

    fn validate(&self) -> FineTuneResult<()>;
}
