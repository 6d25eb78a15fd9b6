pub use crate::http::{Client, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
pub use crate::query::Unit;

pub mod http;
pub mod query;

/// Failure outcome of an API call. Expected failures are returned as values;
/// no operation panics or propagates a foreign error type.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or no response was received
    /// (DNS, connect, TLS, timeout). Carries no status code.
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-200 status. The body is carried
    /// through as literal text, even when it happens to be JSON.
    #[error("HTTP {status}: {body}")]
    Remote { status: u16, body: String },
    /// A 200 response whose body was not valid JSON.
    #[error("invalid JSON in response body: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
