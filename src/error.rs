//! Error types for the Instamojo client.
//!
//! This module defines all error types that can occur when talking to the
//! Instamojo REST API. All errors implement the standard [`std::error::Error`]
//! trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Construction errors** ([`ClientError::InvalidCredentials`]): the client
//!   was built with unusable configuration
//! - **Network errors** ([`ClientError::Transport`]): HTTP communication failures
//! - **Gateway errors** ([`ClientError::Validation`],
//!   [`ClientError::Authentication`], [`ClientError::NotFound`],
//!   [`ClientError::ServerError`], [`ClientError::Forbidden`]): the gateway
//!   rejected the request
//! - **Codec errors** ([`ClientError::Serialize`], [`ClientError::Decode`],
//!   [`ClientError::Unrecognized`]): a request payload could not be encoded,
//!   or the gateway answered with a body or status this client does not
//!   understand
//!
//! # Examples
//!
//! ```
//! use instamojo::{ClientError, Credentials};
//!
//! let err = Credentials::new("", "token").unwrap_err();
//! assert!(matches!(err, ClientError::InvalidCredentials));
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

/// Result type alias for client operations.
///
/// This is a convenience type that uses [`ClientError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Returns the first message of the first field, in lexicographic field order.
///
/// The gateway's 400 payload maps field names to lists of human-readable
/// messages. Iteration is over a `BTreeMap`, so which field is surfaced first
/// is deterministic.
fn first_message(fields: &BTreeMap<String, Vec<String>>) -> &str {
    fields
        .values()
        .flat_map(|messages| messages.first())
        .next()
        .map_or("bad request", String::as_str)
}

/// Errors that can occur when using the Instamojo client.
///
/// All errors propagate to the caller; nothing is swallowed or retried
/// internally.
///
/// # Error Recovery
///
/// - **Transient errors** ([`Transport`](Self::Transport),
///   [`ServerError`](Self::ServerError)): the request may succeed if repeated;
///   this client never retries on its own
/// - **Validation errors** ([`Validation`](Self::Validation)): fix the request
///   payload and retry
/// - **Credential errors** ([`InvalidCredentials`](Self::InvalidCredentials),
///   [`Authentication`](Self::Authentication),
///   [`Forbidden`](Self::Forbidden)): check the API key and auth token
/// - **Codec errors** ([`Serialize`](Self::Serialize),
///   [`Decode`](Self::Decode), [`Unrecognized`](Self::Unrecognized)): a
///   request payload that will not encode, or a gateway-side contract change;
///   the raw body is attached where available
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The API key or auth token was empty at construction time.
    ///
    /// Not recoverable at runtime; supply non-empty credentials.
    #[error("invalid credentials: API key and auth token must be non-empty")]
    InvalidCredentials,

    /// HTTP request failed at the network level.
    ///
    /// This error wraps [`reqwest::Error`] and covers DNS resolution failures,
    /// refused connections, timeouts, and TLS errors. The request is not
    /// retried.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway answered 404; the response body is not read.
    #[error("not found")]
    NotFound,

    /// The gateway answered 500, 502, or 504; the response body is not read.
    #[error("internal server error")]
    ServerError,

    /// The gateway answered 403; the response body is not read.
    #[error("insufficient permissions")]
    Forbidden,

    /// The gateway rejected the request payload (status 400).
    ///
    /// Carries the full mapping from field name to human-readable messages.
    /// The display text is the first message of the lexicographically first
    /// field; inspect `fields` for the complete set.
    #[error("{}", first_message(.fields))]
    Validation {
        /// Field name to rejection messages, in lexicographic field order.
        fields: BTreeMap<String, Vec<String>>,
    },

    /// The gateway rejected the credentials (status 401).
    ///
    /// The display text is the gateway's message verbatim.
    #[error("{0}")]
    Authentication(String),

    /// A request payload could not be serialized to JSON.
    #[error("serialize error: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A response body did not match the expected structure.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The gateway answered with a status code this client does not map.
    ///
    /// The raw body is attached for diagnostic visibility.
    #[error("unrecognized response (status {status}): {}", String::from_utf8_lossy(.body))]
    Unrecognized {
        /// Numeric HTTP status code.
        status: u16,
        /// Raw response body bytes.
        body: Vec<u8>,
    },
}
