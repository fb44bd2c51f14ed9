use serde::Serialize;

/// Result format requested from the Druid SQL API.
/// Only `object` is used: each row arrives as a column-to-value mapping.
pub const RESULT_FORMAT_OBJECT: &str = "object";

/// Request body for the Druid SQL API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlRequest {
    /// The SQL text to execute.
    pub query: String,
    /// Always `"object"` so rows come back as column-to-value mappings.
    #[serde(rename = "resultFormat")]
    pub result_format: &'static str,
}

impl SqlRequest {
    /// Creates a request for the given SQL text with `resultFormat: "object"`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            result_format: RESULT_FORMAT_OBJECT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_result_format() {
        let request = SqlRequest::new("SELECT 1");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["query"], "SELECT 1");
        assert_eq!(body["resultFormat"], "object");
    }
}
