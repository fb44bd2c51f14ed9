use async_trait::async_trait;

use crate::error::Result;
use crate::types::SqlRequest;

/// Trait for SQL transport implementations.
/// Transports are responsible for:
/// - Delivering a serialized request to the Druid SQL endpoint
/// - Returning the response body decoded as JSON
#[async_trait]
pub trait SqlTransport: Send + Sync {
    /// Post a SQL request to the given endpoint and decode the response
    /// body as JSON.
    async fn post(&self, endpoint: &str, request: &SqlRequest) -> Result<serde_json::Value>;
}
