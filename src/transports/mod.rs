mod reqwest;

pub use self::in_memory_test::{InMemoryTransport, RecordedRequest};
pub use self::reqwest::ReqwestTransport;
