use serde_json::{Map, Value};

use crate::error::{DruidRsError, Result};

/// A single row from a query result.
/// Columns keep the order Druid returned them in.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Map<String, Value>,
}

impl Row {
    /// Creates a new Row from a decoded JSON object.
    pub(crate) fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Gets a value by column name.
    pub fn get(&self, column: &str) -> Result<&Value> {
        self.values
            .get(column)
            .ok_or_else(|| DruidRsError::ColumnNotFound(column.to_string()))
    }

    /// Gets a value by column name as a string slice.
    /// Returns an error if the column is missing or not a JSON string.
    pub fn get_str(&self, column: &str) -> Result<&str> {
        self.get(column)?.as_str().ok_or_else(|| {
            DruidRsError::MalformedResponse(format!("column '{}' is not a string", column))
        })
    }

    /// Returns all column names in this row, in response order.
    pub fn columns(&self) -> Vec<&str> {
        self.values.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outcome of a query execution.
///
/// Druid reports SQL failures inside an otherwise well-formed JSON body, so a
/// completed request is either a sequence of rows or a database-reported
/// error message. Transport and decode failures are `DruidRsError` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Rows in the order the database returned them.
    Rows(Vec<Row>),
    /// The message from the `error` field of the response body.
    Error(String),
}

impl QueryOutcome {
    /// Discriminates a decoded response body.
    ///
    /// An object with a non-empty `error` field becomes [`QueryOutcome::Error`];
    /// an array of objects becomes [`QueryOutcome::Rows`]. Anything else is a
    /// malformed response.
    pub fn from_response(body: Value) -> Result<Self> {
        match body {
            Value::Object(map) => match error_message(&map) {
                Some(message) => Ok(QueryOutcome::Error(message)),
                None => Err(DruidRsError::MalformedResponse(
                    "object body without an error field".to_string(),
                )),
            },
            Value::Array(elements) => {
                let rows = elements
                    .into_iter()
                    .map(|element| match element {
                        Value::Object(values) => Ok(Row::new(values)),
                        other => Err(DruidRsError::MalformedResponse(format!(
                            "expected a row object, got {}",
                            other
                        ))),
                    })
                    .collect::<Result<Vec<Row>>>()?;
                Ok(QueryOutcome::Rows(rows))
            }
            other => Err(DruidRsError::MalformedResponse(format!(
                "expected rows or an error object, got {}",
                other
            ))),
        }
    }

    /// Returns true if this outcome is a database-reported error.
    pub fn is_error(&self) -> bool {
        matches!(self, QueryOutcome::Error(_))
    }

    /// Returns a reference to the rows, converting a database-reported error
    /// into `DruidRsError::DatabaseError`.
    pub fn rows(&self) -> Result<&[Row]> {
        match self {
            QueryOutcome::Rows(rows) => Ok(rows),
            QueryOutcome::Error(message) => Err(DruidRsError::DatabaseError(message.clone())),
        }
    }

    /// Consumes the outcome and returns the rows, converting a
    /// database-reported error into `DruidRsError::DatabaseError`.
    pub fn into_rows(self) -> Result<Vec<Row>> {
        match self {
            QueryOutcome::Rows(rows) => Ok(rows),
            QueryOutcome::Error(message) => Err(DruidRsError::DatabaseError(message)),
        }
    }
}

/// Extracts a non-empty error message from a response object.
/// An absent, null, or empty `error` field does not count.
fn error_message(map: &Map<String, Value>) -> Option<String> {
    match map.get("error")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_get() {
        let outcome =
            QueryOutcome::from_response(json!([{"id": 1, "name": "John"}])).unwrap();
        let rows = outcome.into_rows().unwrap();
        assert_eq!(rows.len(), 1);

        assert_eq!(rows[0].get("id").unwrap(), &json!(1));
        assert_eq!(rows[0].get_str("name").unwrap(), "John");
        assert!(matches!(
            rows[0].get("missing"),
            Err(DruidRsError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_row_columns_preserve_response_order() {
        let outcome =
            QueryOutcome::from_response(json!([{"z": 1, "a": 2, "m": 3}])).unwrap();
        let rows = outcome.into_rows().unwrap();
        assert_eq!(rows[0].columns(), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_error_object_becomes_error_outcome() {
        let outcome =
            QueryOutcome::from_response(json!({"error": "parse error"})).unwrap();
        assert_eq!(outcome, QueryOutcome::Error("parse error".to_string()));
        assert!(outcome.is_error());
    }

    #[test]
    fn test_non_string_error_is_rendered_as_json() {
        let outcome = QueryOutcome::from_response(
            json!({"error": {"errorCode": "SQL_PARSE_FAILED"}}),
        )
        .unwrap();
        match outcome {
            QueryOutcome::Error(message) => {
                assert!(message.contains("SQL_PARSE_FAILED"));
            }
            other => panic!("Expected error outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_error_field_is_malformed() {
        let err = QueryOutcome::from_response(json!({"error": ""})).unwrap_err();
        assert!(matches!(err, DruidRsError::MalformedResponse(_)));

        let err = QueryOutcome::from_response(json!({"error": null})).unwrap_err();
        assert!(matches!(err, DruidRsError::MalformedResponse(_)));
    }

    #[test]
    fn test_scalar_body_is_malformed() {
        let err = QueryOutcome::from_response(json!("not rows")).unwrap_err();
        assert!(matches!(err, DruidRsError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_object_row_is_malformed() {
        let err = QueryOutcome::from_response(json!([{"col": "val"}, 42])).unwrap_err();
        assert!(matches!(err, DruidRsError::MalformedResponse(_)));
    }

    #[test]
    fn test_rows_accessor_converts_error_to_database_error() {
        let outcome = QueryOutcome::Error("boom".to_string());
        match outcome.rows() {
            Err(DruidRsError::DatabaseError(message)) => assert_eq!(message, "boom"),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_array_is_zero_rows() {
        let outcome = QueryOutcome::from_response(json!([])).unwrap();
        assert_eq!(outcome.into_rows().unwrap().len(), 0);
    }
}
