use std::sync::Arc;

use crate::error::{DruidRsError, Result};
use crate::traits::SqlTransport;
use crate::transports::ReqwestTransport;
use crate::types::{QueryOutcome, SqlRequest};

/// Main entry point for druidrs.
/// Holds the configured SQL API endpoint and issues queries over a transport.
pub struct DruidRsClient {
    endpoint: String,
    transport: Arc<dyn SqlTransport>,
}

impl DruidRsClient {
    /// Create a client for the given Druid SQL API endpoint.
    ///
    /// # Example
    /// ```ignore
    /// let client = DruidRsClient::new("http://localhost:8082/druid/v2/sql")?;
    /// ```
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_transport(endpoint, Arc::new(ReqwestTransport::new()))
    }

    /// Create a new client with a custom transport.
    /// Useful for testing or using alternative HTTP stacks.
    pub fn with_transport(
        endpoint: impl Into<String>,
        transport: Arc<dyn SqlTransport>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.trim().is_empty() {
            return Err(DruidRsError::InvalidEndpoint(
                "endpoint must not be empty".to_string(),
            ));
        }
        Ok(Self {
            endpoint,
            transport,
        })
    }

    /// Returns the configured endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a SQL query against the Druid SQL API.
    ///
    /// Returns [`QueryOutcome::Rows`] for a successful query, or
    /// [`QueryOutcome::Error`] when the response body carries an `error`
    /// field. Transport and decode failures are `Err`.
    pub async fn sql(&self, query: &str) -> Result<QueryOutcome> {
        let request = SqlRequest::new(query);
        let body = self.transport.post(&self.endpoint, &request).await?;
        QueryOutcome::from_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_endpoint_is_rejected() {
        assert!(matches!(
            DruidRsClient::new(""),
            Err(DruidRsError::InvalidEndpoint(_))
        ));
        assert!(matches!(
            DruidRsClient::new("   "),
            Err(DruidRsError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_endpoint_is_preserved_verbatim() {
        let client = DruidRsClient::new("http://localhost:8082/druid/v2/sql").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8082/druid/v2/sql");
    }
}
