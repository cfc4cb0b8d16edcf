//! Webhook payload extraction.
//!
//! After a payment event the gateway POSTs a URL-encoded form to the webhook
//! URL configured on the payment request. This module turns that form into a
//! flat [`WebhookPayload`]. Extraction is pure and total: recognized keys are
//! copied through, absent keys become empty strings, and unknown keys are
//! ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Flat view of a gateway webhook notification.
///
/// One field per recognized form key. Fields for keys absent from the input
/// are empty strings, not errors.
///
/// The [`mac`](Self::mac) field is the gateway's message authentication code;
/// this crate carries it through but never verifies it.
///
/// # Examples
///
/// ```
/// use instamojo::WebhookPayload;
///
/// let payload =
///     WebhookPayload::from_urlencoded("payment_id=MOJO5a06005J21512197&status=Credit");
/// assert_eq!(payload.payment_id, "MOJO5a06005J21512197");
/// assert_eq!(payload.status, "Credit");
/// assert_eq!(payload.buyer, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    /// Identifier of the captured payment.
    pub payment_id: String,
    /// Payment status (e.g. `Credit`, `Failed`).
    pub status: String,
    /// Short shareable payment URL.
    pub shorturl: String,
    /// Full payment page URL.
    pub longurl: String,
    /// What the payment was for.
    pub purpose: String,
    /// Amount paid.
    pub amount: String,
    /// Gateway fees charged.
    pub fees: String,
    /// Currency code.
    pub currency: String,
    /// Payer email address.
    pub buyer: String,
    /// Payer name.
    pub buyer_name: String,
    /// Payer phone number.
    pub buyer_phone: String,
    /// Identifier of the payment request the payment was made against.
    pub payment_request_id: String,
    /// Message authentication code; carried through, never verified.
    pub mac: String,
}

impl WebhookPayload {
    /// Extracts a payload from a URL-encoded form body.
    pub fn from_urlencoded(body: &str) -> Self {
        Self::from_pairs(form_urlencoded::parse(body.as_bytes()))
    }

    /// Extracts a payload from decoded key/value pairs.
    ///
    /// The first occurrence of a key wins when duplicates are present.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values: HashMap<String, String> = HashMap::new();
        for (key, value) in pairs {
            values.entry(key.as_ref().to_owned()).or_insert_with(|| value.into());
        }

        let mut get = |key: &str| values.remove(key).unwrap_or_default();

        Self {
            payment_id: get("payment_id"),
            status: get("status"),
            shorturl: get("shorturl"),
            longurl: get("longurl"),
            purpose: get("purpose"),
            amount: get("amount"),
            fees: get("fees"),
            currency: get("currency"),
            buyer: get("buyer"),
            buyer_name: get("buyer_name"),
            buyer_phone: get("buyer_phone"),
            payment_request_id: get("payment_request_id"),
            mac: get("mac"),
        }
    }
}
