use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::error::{DruidRsError, Result};
use crate::traits::SqlTransport;
use crate::types::SqlRequest;

/// HTTP transport implementation using reqwest.
///
/// Posts the request as JSON and decodes the body regardless of HTTP status:
/// Druid reports SQL failures as JSON bodies on non-2xx responses, and the
/// error field is discriminated downstream.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SqlTransport for ReqwestTransport {
    async fn post(&self, endpoint: &str, request: &SqlRequest) -> Result<serde_json::Value> {
        debug!("[DRUID_SQL] POST {} (query len={})", endpoint, request.query.len());

        let response = self
            .client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("[DRUID_SQL] Transport failure: {}", e);
                DruidRsError::RequestFailed(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DruidRsError::RequestFailed(e.to_string()))?;

        debug!("[DRUID_SQL] Response: status={} body_len={}", status, body.len());

        serde_json::from_str(&body).map_err(|e| {
            warn!("[DRUID_SQL] Undecodable body (status={}): {}", status, e);
            DruidRsError::MalformedResponse(e.to_string())
        })
    }
}
