mod request;
mod row;

pub use request::{SqlRequest, RESULT_FORMAT_OBJECT};
pub use row::{QueryOutcome, Row};
