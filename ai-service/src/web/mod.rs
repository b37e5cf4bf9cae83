//! HTTP surface: extractors, handlers and middleware

pub mod extract;
pub mod handlers;
pub mod middleware;

pub use extract::ValidatedJson;
pub use middleware::REQUEST_ID_HEADER;
