//! Typed async client for the [Instamojo](https://www.instamojo.com) payment
//! gateway REST API.
//!
//! This crate maps the gateway's endpoints to typed calls: creating payment
//! request URLs, listing and fetching payment requests, issuing and listing
//! refunds, fetching payment and refund details, enabling and disabling
//! payment requests, and parsing inbound webhook notifications.
//!
//! # Architecture
//!
//! Every operation is the same mechanism instantiated with different
//! parameters: build a request carrying the two Instamojo auth headers,
//! dispatch it, and branch on the HTTP status code into a typed success or a
//! typed failure. The gateway's error contract is inconsistent: 400 and 401
//! carry structured JSON, 404/403/5xx carry nothing useful, and anything else
//! is unspecified. The dispatcher therefore maps each band explicitly instead
//! of assuming a single error envelope:
//!
//! ```text
//! ┌────────────┐   Operation descriptor    ┌──────────────────────────┐
//! │  API call  │──(method, path, body,────▶│  authenticated dispatch  │
//! │  (api::*)  │    success code)          │     (client::execute)    │
//! └────────────┘                           └────────────┬─────────────┘
//!                                                       │ status code
//!                  success code → decode typed payload  │
//!                  400 → ValidationError (per-field)    │
//!                  401 → AuthenticationError            │
//!                  404 / 403 / 5xx → fixed error        │
//!                  anything else → raw body attached    ▼
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use instamojo::{models::CreatePaymentRequest, Client, Credentials, Environment};
//! use rust_decimal::Decimal;
//!
//! # async fn example() -> instamojo::Result<()> {
//! let credentials = Credentials::new("api-key", "auth-token")?;
//! let client = Client::new(credentials, Environment::Sandbox)?;
//!
//! let created = client
//!     .create_payment_request(&CreatePaymentRequest {
//!         purpose: "FIFA 16".to_owned(),
//!         amount: Decimal::new(250_000, 2),
//!         email: Some("abc@xyz.com".to_owned()),
//!         send_email: true,
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! println!("collect the payment at {}", created.longurl);
//! # Ok(())
//! # }
//! ```
//!
//! # Webhooks
//!
//! When a payment completes, the gateway POSTs a URL-encoded form to the
//! webhook URL configured on the payment request:
//!
//! ```
//! use instamojo::WebhookPayload;
//!
//! let payload = WebhookPayload::from_urlencoded(
//!     "payment_id=MOJO5a06005J21512197&status=Credit&amount=2500.00",
//! );
//! assert_eq!(payload.status, "Credit");
//! ```
//!
//! The webhook's `mac` field is carried through as-is; this crate does not
//! verify it.
//!
//! # Module Organization
//!
//! - [`client`]: client construction and the authenticated request/response
//!   cycle
//! - [`api`]: per-endpoint operations (payment requests, refunds, payments)
//! - [`models`]: wire types for requests and responses
//! - [`webhook`]: webhook payload extraction
//! - [`error`]: error taxonomy with recovery guidance
//!
//! # Concurrency
//!
//! The client is stateless after construction: it holds only immutable
//! configuration, so it can be cloned cheaply and shared across tasks, and
//! concurrent calls need no locking. No operation retries automatically, and
//! the default transport applies no operation-level timeout; configure one
//! through [`Client::with_http_client`] if you need it.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod webhook;

pub use client::{Client, Credentials, Environment};
pub use error::{ClientError, Result};
pub use webhook::WebhookPayload;
