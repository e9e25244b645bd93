//! Error types for the records API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `HttpError` with the raw
//! status code and body for debugging. `Transport` is produced by hosts when
//! the round-trip itself fails (connection refused, timeout).

use thiserror::Error;

/// Errors returned by `RecordClient` parse methods and `Transport` hosts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404: the requested record does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status outside the accepted set, other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The base URL cannot carry a record path below it.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),
}
