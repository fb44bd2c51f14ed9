//! druidrs - A minimal, transport-agnostic connector for the Druid SQL API
//!
//! # Example
//! ```ignore
//! use druidrs::{DruidRsClient, QueryOutcome};
//!
//! // Point at a Druid SQL endpoint
//! let client = DruidRsClient::new("http://localhost:8082/druid/v2/sql")?;
//!
//! // Execute a query
//! match client.sql("SELECT __time, channel FROM wikipedia LIMIT 10").await? {
//!     QueryOutcome::Rows(rows) => {
//!         for row in &rows {
//!             let channel = row.get_str("channel")?;
//!             let time = row.get("__time")?;
//!             println!("{channel}: {time}");
//!         }
//!     }
//!     QueryOutcome::Error(message) => eprintln!("Druid rejected the query: {message}"),
//! }
//! ```

pub mod error;
pub mod sanitize;
pub mod time;
pub mod traits;
pub mod transports;
pub mod types;

mod client;

// Re-export main types for convenient access
pub use client::DruidRsClient;
pub use error::{DruidRsError, Result};
pub use sanitize::{sanitize_str, sanitize_value};
pub use time::{iso_from_epoch_millis, iso_from_epoch_str};
pub use traits::SqlTransport;
pub use types::{QueryOutcome, Row, SqlRequest};
