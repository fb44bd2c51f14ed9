mod transport;

pub use transport::SqlTransport;
