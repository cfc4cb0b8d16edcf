//! Client construction and the authenticated request/response cycle.
//!
//! Every API operation in this crate is an instantiation of one mechanism:
//! build a request with the two Instamojo auth headers, dispatch it, and
//! branch on the HTTP status code into a typed success or a typed failure.
//! The mechanism lives in [`Client::execute`]; the per-operation methods in
//! [`crate::api`] only supply an [`Operation`] descriptor and the payload type
//! to decode.

use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, instrument};

use crate::{
    error::{ClientError, Result},
    models::{AuthErrorBody, ValidationErrorBody},
};

/// Production API base address.
const PRODUCTION_BASE_URL: &str = "https://www.instamojo.com";

/// Sandbox API base address.
const SANDBOX_BASE_URL: &str = "https://test.instamojo.com";

/// Header carrying the API key on every call.
const API_KEY_HEADER: &str = "X-Api-Key";

/// Header carrying the auth token on every call.
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// API credentials: an opaque key and an opaque auth token.
///
/// Both values are required non-empty and are validated once at construction.
/// The `Debug` implementation redacts both values so credentials never leak
/// into logs.
///
/// # Examples
///
/// ```
/// use instamojo::Credentials;
///
/// let credentials = Credentials::new("test-key", "test-token").unwrap();
/// assert!(Credentials::new("", "test-token").is_err());
/// ```
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    auth_token: String,
}

impl Credentials {
    /// Creates credentials from an API key and an auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidCredentials`] if either value is empty.
    pub fn new(api_key: impl Into<String>, auth_token: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let auth_token = auth_token.into();

        if api_key.is_empty() || auth_token.is_empty() {
            return Err(ClientError::InvalidCredentials);
        }

        Ok(Self { api_key, auth_token })
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn auth_token(&self) -> &str {
        &self.auth_token
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("auth_token", &"<redacted>")
            .finish()
    }
}

/// Selects between the production and sandbox gateway addresses.
///
/// Resolved into a fixed base URL once at client construction; immutable
/// thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Live gateway at `https://www.instamojo.com`.
    Production,
    /// Test gateway at `https://test.instamojo.com`.
    Sandbox,
}

impl Environment {
    /// Returns the fixed base URL for this environment.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

/// Descriptor for one API operation.
///
/// Supplies everything the dispatcher needs that varies per endpoint: the
/// method, the path relative to the base URL, the serialized body for writes,
/// and the status code that selects the success payload.
#[derive(Debug)]
pub(crate) struct Operation {
    method: Method,
    path: String,
    body: Option<Vec<u8>>,
    success: StatusCode,
}

impl Operation {
    /// A read returning 200 on success.
    pub(crate) fn get(path: impl Into<String>) -> Self {
        Self { method: Method::GET, path: path.into(), body: None, success: StatusCode::OK }
    }

    /// A bodyless write returning 200 on success (enable/disable toggles).
    pub(crate) fn post(path: impl Into<String>) -> Self {
        Self { method: Method::POST, path: path.into(), body: None, success: StatusCode::OK }
    }

    /// A JSON write returning 201 on success (resource creation).
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub(crate) fn post_json<T: Serialize>(path: impl Into<String>, payload: &T) -> Result<Self> {
        let body = serde_json::to_vec(payload).map_err(ClientError::Serialize)?;
        Ok(Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
            success: StatusCode::CREATED,
        })
    }
}

/// Asynchronous client for the Instamojo REST API.
///
/// The client holds only immutable configuration after construction: the
/// credentials, the resolved base URL, and a [`reqwest::Client`] handle. It is
/// cheap to clone and safe to share across tasks; concurrent calls need no
/// locking.
///
/// # Examples
///
/// ```no_run
/// use instamojo::{Client, Credentials, Environment};
///
/// # async fn example() -> instamojo::Result<()> {
/// let credentials = Credentials::new("api-key", "auth-token")?;
/// let client = Client::new(credentials, Environment::Sandbox)?;
///
/// let requests = client.list_payment_requests().await?;
/// println!("{} payment requests", requests.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl Client {
    /// Creates a client for the given environment.
    ///
    /// No network activity occurs during construction. The default underlying
    /// HTTP client applies no operation-level timeout; use
    /// [`with_http_client`](Self::with_http_client) to configure one.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be created.
    pub fn new(credentials: Credentials, environment: Environment) -> Result<Self> {
        let http = reqwest::Client::builder().build().map_err(ClientError::Transport)?;
        Ok(Self::with_http_client(http, credentials, environment))
    }

    /// Creates a client with a caller-supplied [`reqwest::Client`].
    ///
    /// Use this to set timeouts, proxies, or connection pool limits.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::time::Duration;
    ///
    /// use instamojo::{Client, Credentials, Environment};
    ///
    /// # fn example() -> instamojo::Result<()> {
    /// let http = reqwest::Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .map_err(instamojo::ClientError::Transport)?;
    ///
    /// let credentials = Credentials::new("api-key", "auth-token")?;
    /// let client = Client::with_http_client(http, credentials, Environment::Production);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn with_http_client(
        http: reqwest::Client,
        credentials: Credentials,
        environment: Environment,
    ) -> Self {
        Self { http, credentials, base_url: environment.base_url().to_owned() }
    }

    /// Creates a client pointed at a custom base address.
    ///
    /// Intended for tests against a mock server and for staging deployments;
    /// production callers should use [`new`](Self::new) with
    /// [`Environment`]. A trailing slash on `base_url` is ignored.
    #[must_use]
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { http: reqwest::Client::new(), credentials, base_url }
    }

    /// Returns the resolved base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Executes one authenticated request/response cycle.
    ///
    /// Attaches the two auth headers (and a JSON content type on write
    /// methods), dispatches the request, then branches on the status code:
    ///
    /// - 404, 500/502/504, 403 short-circuit to fixed errors without reading
    ///   the body;
    /// - the operation's success code decodes the body as `T`;
    /// - 400 decodes the structured validation payload;
    /// - 401 decodes the structured authentication payload;
    /// - anything else reads the raw body into
    ///   [`ClientError::Unrecognized`].
    ///
    /// The response body is consumed or dropped on every exit path.
    #[instrument(
        skip(self, operation),
        fields(method = %operation.method, path = %operation.path)
    )]
    pub(crate) async fn execute<T: DeserializeOwned>(&self, operation: Operation) -> Result<T> {
        let url = format!("{}{}", self.base_url, operation.path);
        let is_write = operation.method != Method::GET;

        let mut request = self
            .http
            .request(operation.method, &url)
            .header(API_KEY_HEADER, self.credentials.api_key())
            .header(AUTH_TOKEN_HEADER, self.credentials.auth_token());

        // Write calls declare the JSON content type even when bodyless
        // (enable/disable); the gateway expects the header on every POST.
        if is_write {
            request = request.header(header::CONTENT_TYPE, "application/json");
        }

        if let Some(body) = operation.body {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "gateway responded");

        // Fixed-status errors first: the body is never read for these.
        match status {
            StatusCode::NOT_FOUND => return Err(ClientError::NotFound),
            StatusCode::FORBIDDEN => return Err(ClientError::Forbidden),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::GATEWAY_TIMEOUT => return Err(ClientError::ServerError),
            _ => {}
        }

        if status == operation.success {
            let body = response.bytes().await?;
            return Ok(serde_json::from_slice(&body)?);
        }

        match status {
            StatusCode::BAD_REQUEST => {
                let body = response.bytes().await?;
                let payload: ValidationErrorBody = serde_json::from_slice(&body)?;
                Err(ClientError::Validation { fields: payload.message })
            }
            StatusCode::UNAUTHORIZED => {
                let body = response.bytes().await?;
                let payload: AuthErrorBody = serde_json::from_slice(&body)?;
                Err(ClientError::Authentication(payload.message))
            }
            other => {
                let body = response.bytes().await?;
                Err(ClientError::Unrecognized { status: other.as_u16(), body: body.to_vec() })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_rejects_empty_key() {
        let result = Credentials::new("", "token");
        assert!(matches!(result.unwrap_err(), ClientError::InvalidCredentials));
    }

    #[test]
    fn test_credentials_rejects_empty_token() {
        let result = Credentials::new("key", "");
        assert!(matches!(result.unwrap_err(), ClientError::InvalidCredentials));
    }

    #[test]
    fn test_credentials_accepts_non_empty_values() {
        let credentials = Credentials::new("key", "token").unwrap();
        assert_eq!(credentials.api_key(), "key");
        assert_eq!(credentials.auth_token(), "token");
    }

    #[test]
    fn test_credentials_debug_redacts_values() {
        let credentials = Credentials::new("secret-key", "secret-token").unwrap();
        let debug_str = format!("{credentials:?}");
        assert!(!debug_str.contains("secret-key"));
        assert!(!debug_str.contains("secret-token"));
        assert!(debug_str.contains("<redacted>"));
    }

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::Production.base_url(), "https://www.instamojo.com");
        assert_eq!(Environment::Sandbox.base_url(), "https://test.instamojo.com");
    }

    #[test]
    fn test_client_new_rejects_empty_credentials_both_environments() {
        for environment in [Environment::Production, Environment::Sandbox] {
            assert!(Credentials::new("", "token")
                .and_then(|c| Client::new(c, environment))
                .is_err());
            assert!(Credentials::new("key", "")
                .and_then(|c| Client::new(c, environment))
                .is_err());
        }
    }

    #[test]
    fn test_client_resolves_base_url_from_environment() {
        let credentials = Credentials::new("key", "token").unwrap();
        let client = Client::new(credentials.clone(), Environment::Sandbox).unwrap();
        assert_eq!(client.base_url(), "https://test.instamojo.com");

        let client = Client::new(credentials, Environment::Production).unwrap();
        assert_eq!(client.base_url(), "https://www.instamojo.com");
    }

    #[test]
    fn test_client_with_base_url_trims_trailing_slash() {
        let credentials = Credentials::new("key", "token").unwrap();
        let client = Client::with_base_url(credentials, "http://127.0.0.1:9090/");
        assert_eq!(client.base_url(), "http://127.0.0.1:9090");
    }

    #[test]
    fn test_operation_get_expects_200() {
        let operation = Operation::get("/api/1.1/payment-requests/");
        assert_eq!(operation.method, Method::GET);
        assert_eq!(operation.success, StatusCode::OK);
        assert!(operation.body.is_none());
    }

    #[test]
    fn test_operation_post_json_expects_201() {
        #[derive(serde::Serialize)]
        struct Payload {
            purpose: String,
        }

        let operation =
            Operation::post_json("/api/1.1/payment-requests/", &Payload {
                purpose: "testing".to_owned(),
            })
            .unwrap();
        assert_eq!(operation.method, Method::POST);
        assert_eq!(operation.success, StatusCode::CREATED);
        let body = operation.body.unwrap();
        assert_eq!(body, br#"{"purpose":"testing"}"#);
    }

    #[test]
    fn test_operation_post_expects_200_without_body() {
        let operation = Operation::post("/api/1.1/payment-requests/abc/enable");
        assert_eq!(operation.method, Method::POST);
        assert_eq!(operation.success, StatusCode::OK);
        assert!(operation.body.is_none());
    }
}
