pub mod logging;
pub mod security_headers;
pub mod tracing;
