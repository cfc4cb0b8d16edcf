//! Data models for the Instamojo REST API.
//!
//! Wire types for payment requests, captured payments, and refunds. Amounts
//! travel as decimal strings on the wire and are decoded into
//! [`rust_decimal::Decimal`]; timestamps are RFC 3339 and decode into
//! [`chrono::DateTime`].

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload for creating a new payment request.
///
/// Only `purpose` and `amount` are required by the gateway; the remaining
/// fields tune notifications and the post-payment redirect.
///
/// # Examples
///
/// ```
/// use instamojo::models::CreatePaymentRequest;
/// use rust_decimal::Decimal;
///
/// let request = CreatePaymentRequest {
///     purpose: "FIFA 16".to_owned(),
///     amount: Decimal::new(250_000, 2),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePaymentRequest {
    /// What the payment is for; shown to the payer.
    pub purpose: String,
    /// Amount to collect.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Payer phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Payer email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Payer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_name: Option<String>,
    /// URL the payer is redirected to after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// Webhook URL notified after a payment event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<String>,
    /// Whether the gateway emails the payment link to the payer.
    pub send_email: bool,
    /// Whether the gateway texts the payment link to the payer.
    pub send_sms: bool,
    /// Whether the same link may collect more than one payment.
    pub allow_repeated_payments: bool,
}

/// A gateway-hosted payment request.
///
/// Returned on creation, listing, and detail fetches. The embedded
/// [`payments`](Self::payments) list is populated only on detail fetches; the
/// gateway omits it elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Unique payment request identifier.
    pub id: String,
    /// Payer phone number.
    pub phone: Option<String>,
    /// Payer email address.
    pub email: Option<String>,
    /// Payer name.
    pub buyer_name: Option<String>,
    /// Amount to collect.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// What the payment is for.
    pub purpose: String,
    /// Request status (e.g. `Pending`, `Completed`).
    pub status: String,
    /// Whether the gateway texts the payment link to the payer.
    pub send_sms: bool,
    /// Whether the gateway emails the payment link to the payer.
    pub send_email: bool,
    /// Delivery status of the SMS notification.
    pub sms_status: Option<String>,
    /// Delivery status of the email notification.
    pub email_status: Option<String>,
    /// Short shareable payment URL.
    pub shorturl: Option<String>,
    /// Full payment page URL.
    pub longurl: String,
    /// URL the payer is redirected to after payment.
    pub redirect_url: Option<String>,
    /// Webhook URL notified after a payment event.
    pub webhook: Option<String>,
    /// Payments captured against this request; detail fetches only.
    #[serde(default)]
    pub payments: Vec<Payment>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub modified_at: DateTime<Utc>,
    /// Whether the same link may collect more than one payment.
    pub allow_repeated_payments: bool,
}

/// A captured payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique payment identifier.
    pub payment_id: String,
    /// Number of units purchased.
    pub quantity: u32,
    /// Payment status (e.g. `Credit`, `Failed`).
    pub status: String,
    /// Slug of the payment link, when sold through one.
    pub link_slug: Option<String>,
    /// Title of the payment link, when sold through one.
    pub link_title: Option<String>,
    /// Payer name.
    pub buyer_name: Option<String>,
    /// Payer phone number.
    pub buyer_phone: Option<String>,
    /// Payer email address.
    pub buyer_email: Option<String>,
    /// Currency code (e.g. `INR`).
    pub currency: String,
    /// Price per unit.
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    /// Total amount paid.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Gateway fees charged on this payment.
    #[serde(with = "rust_decimal::serde::str")]
    pub fees: Decimal,
    /// Shipping street address, when collected.
    pub shipping_address: Option<String>,
    /// Shipping city, when collected.
    pub shipping_city: Option<String>,
    /// Shipping state, when collected.
    pub shipping_state: Option<String>,
    /// Shipping postal code, when collected.
    pub shipping_zip: Option<String>,
    /// Shipping country, when collected.
    pub shipping_country: Option<String>,
    /// Discount code applied, if any.
    pub discount_code: Option<String>,
    /// Discount amount taken off, if any; shape varies by discount type.
    #[serde(default)]
    pub discount_amount_off: Option<serde_json::Value>,
    /// Selected product variants; shape is link-specific.
    #[serde(default)]
    pub variants: Vec<serde_json::Value>,
    /// Custom checkout fields; shape is link-specific.
    #[serde(default)]
    pub custom_fields: serde_json::Value,
    /// Affiliate identifier, if the payment came through an affiliate.
    #[serde(default)]
    pub affiliate_id: Option<serde_json::Value>,
    /// Commission paid to the affiliate.
    pub affiliate_commission: Option<String>,
    /// Capture timestamp.
    pub created_at: DateTime<Utc>,
    /// Identifier of the payment request this payment belongs to, if any.
    pub payment_request: Option<String>,
}

/// Reason codes the gateway accepts when creating a refund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RefundType {
    /// Duplicate or delayed payment.
    Rfd,
    /// Product or service no longer available.
    Tnr,
    /// Customer not satisfied.
    Qfl,
    /// Product lost or damaged.
    Qnr,
    /// Digital download issue.
    Ewn,
    /// Event was cancelled or postponed.
    Tan,
    /// Problem not covered by the other codes.
    Pth,
}

/// Payload for creating a refund against a captured payment.
#[derive(Debug, Clone, Serialize)]
pub struct CreateRefund {
    /// Identifier of the payment to refund.
    pub payment_id: String,
    /// Reason code for the refund.
    #[serde(rename = "type")]
    pub refund_type: RefundType,
    /// Amount to refund; full or partial.
    #[serde(with = "rust_decimal::serde::str")]
    pub refund_amount: Decimal,
    /// Free-text explanation shown to the gateway's support staff.
    pub body: String,
}

/// A refund, full or partial, of a captured payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    /// Unique refund identifier.
    pub id: String,
    /// Identifier of the refunded payment.
    pub payment_id: String,
    /// Refund status (e.g. `Refunded`).
    pub status: String,
    /// Reason code supplied at creation.
    #[serde(rename = "type")]
    pub refund_type: RefundType,
    /// Free-text explanation supplied at creation.
    pub body: String,
    /// Amount refunded.
    #[serde(with = "rust_decimal::serde::str")]
    pub refund_amount: Decimal,
    /// Total amount of the original payment.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

// Response envelopes. The gateway wraps every success payload in an object
// with a `success` flag and one payload field; the operations unwrap these so
// callers get domain types directly.

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentRequestEnvelope {
    pub payment_request: PaymentRequest,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentRequestListEnvelope {
    pub payment_requests: Vec<PaymentRequest>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefundEnvelope {
    pub refund: Refund,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RefundListEnvelope {
    pub refunds: Vec<Refund>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentEnvelope {
    pub payment: Payment,
}

/// Bare `{"success": bool}` body returned by the enable/disable toggles.
#[derive(Debug, Deserialize)]
pub(crate) struct StatusEnvelope {
    pub success: bool,
}

/// Structured 400 body: field name to human-readable rejection messages.
#[derive(Debug, Deserialize)]
pub(crate) struct ValidationErrorBody {
    pub message: BTreeMap<String, Vec<String>>,
}

/// Structured 401 body: a single message string.
#[derive(Debug, Deserialize)]
pub(crate) struct AuthErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payment_request_json() -> &'static str {
        r#"{
            "id": "d66cb29dd059482e8072999f995c4eef",
            "phone": "+919999999999",
            "email": "abc@xyz.com",
            "buyer_name": "John Doe",
            "amount": "2500.00",
            "purpose": "FIFA 16",
            "status": "Pending",
            "send_sms": true,
            "send_email": true,
            "sms_status": "Pending",
            "email_status": "Pending",
            "shorturl": "https://imjo.in/NNxHg",
            "longurl": "https://www.instamojo.com/@portrack/077a7ff202f94d3e86ffe64511efa8a4",
            "redirect_url": "https://example.com/thanks",
            "webhook": "https://example.com/webhook",
            "created_at": "2024-01-05T10:00:09.831Z",
            "modified_at": "2024-01-05T10:00:09.831Z",
            "allow_repeated_payments": false
        }"#
    }

    #[test]
    fn test_payment_request_decodes_all_fields() {
        let request: PaymentRequest = serde_json::from_str(payment_request_json()).unwrap();
        assert_eq!(request.id, "d66cb29dd059482e8072999f995c4eef");
        assert_eq!(request.amount, Decimal::new(250_000, 2));
        assert_eq!(request.purpose, "FIFA 16");
        assert_eq!(request.status, "Pending");
        assert_eq!(request.shorturl.as_deref(), Some("https://imjo.in/NNxHg"));
        assert!(request.payments.is_empty());
        assert!(!request.allow_repeated_payments);
    }

    #[test]
    fn test_payment_request_envelope_unwraps() {
        let json = format!(r#"{{"payment_request": {}, "success": true}}"#, payment_request_json());
        let envelope: PaymentRequestEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(envelope.payment_request.id, "d66cb29dd059482e8072999f995c4eef");
    }

    #[test]
    fn test_payment_decodes_with_loose_fields() {
        let json = r#"{
            "payment_id": "MOJO5a06005J21512197",
            "quantity": 1,
            "status": "Credit",
            "link_slug": null,
            "link_title": null,
            "buyer_name": "John Doe",
            "buyer_phone": "+919999999999",
            "buyer_email": "abc@xyz.com",
            "currency": "INR",
            "unit_price": "2500.00",
            "amount": "2500.00",
            "fees": "125.00",
            "shipping_address": null,
            "shipping_city": null,
            "shipping_state": null,
            "shipping_zip": null,
            "shipping_country": null,
            "discount_code": null,
            "discount_amount_off": null,
            "variants": [],
            "custom_fields": {},
            "affiliate_id": null,
            "affiliate_commission": "0",
            "created_at": "2024-01-05T11:03:22.701Z",
            "payment_request": "d66cb29dd059482e8072999f995c4eef"
        }"#;

        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.payment_id, "MOJO5a06005J21512197");
        assert_eq!(payment.fees, Decimal::new(12_500, 2));
        assert!(payment.link_slug.is_none());
        assert!(payment.variants.is_empty());
    }

    #[test]
    fn test_refund_round_fields() {
        let json = r#"{
            "id": "C5c0751269",
            "payment_id": "MOJO5a06005J21512197",
            "status": "Refunded",
            "type": "QFL",
            "body": "Customer isn't satisfied",
            "refund_amount": "2500.00",
            "total_amount": "2500.00",
            "created_at": "2024-01-06T09:00:00.000Z"
        }"#;

        let refund: Refund = serde_json::from_str(json).unwrap();
        assert_eq!(refund.refund_type, RefundType::Qfl);
        assert_eq!(refund.refund_amount, Decimal::new(250_000, 2));
    }

    #[test]
    fn test_create_payment_request_serializes_amount_as_string() {
        let request = CreatePaymentRequest {
            purpose: "FIFA 16".to_owned(),
            amount: Decimal::new(250_000, 2),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["amount"], "2500.00");
        assert_eq!(value["purpose"], "FIFA 16");
    }

    #[test]
    fn test_create_refund_serializes_type_code() {
        let refund = CreateRefund {
            payment_id: "MOJO5a06005J21512197".to_owned(),
            refund_type: RefundType::Ewn,
            refund_amount: Decimal::new(50_000, 2),
            body: "download issue".to_owned(),
        };

        let value = serde_json::to_value(&refund).unwrap();
        assert_eq!(value["type"], "EWN");
        assert_eq!(value["refund_amount"], "500.00");
    }

    #[test]
    fn test_validation_error_body_decodes() {
        let body: ValidationErrorBody =
            serde_json::from_str(r#"{"success": false, "message": {"email": ["invalid"]}}"#)
                .unwrap();
        assert_eq!(body.message["email"], vec!["invalid"]);
    }

    #[test]
    fn test_auth_error_body_decodes() {
        let body: AuthErrorBody =
            serde_json::from_str(r#"{"success": false, "message": "unauthorized"}"#).unwrap();
        assert_eq!(body.message, "unauthorized");
    }
}
