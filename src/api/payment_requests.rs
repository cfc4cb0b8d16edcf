//! Payment request operations: create, list, fetch, enable, disable.

use tracing::{debug, instrument};

use crate::{
    api::API_ROOT,
    client::{Client, Operation},
    error::Result,
    models::{
        CreatePaymentRequest, PaymentRequest, PaymentRequestEnvelope, PaymentRequestListEnvelope,
        StatusEnvelope,
    },
};

impl Client {
    /// Creates a payment request and returns the gateway-hosted record,
    /// including the shareable payment URL.
    ///
    /// `POST /api/1.1/payment-requests/`, success 201.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`](crate::ClientError::Validation) if
    /// the gateway rejects the payload, or any other
    /// [`ClientError`](crate::ClientError) from the request cycle.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use instamojo::{models::CreatePaymentRequest, Client, Credentials, Environment};
    /// use rust_decimal::Decimal;
    ///
    /// # async fn example() -> instamojo::Result<()> {
    /// let client = Client::new(Credentials::new("key", "token")?, Environment::Sandbox)?;
    ///
    /// let created = client
    ///     .create_payment_request(&CreatePaymentRequest {
    ///         purpose: "FIFA 16".to_owned(),
    ///         amount: Decimal::new(250_000, 2),
    ///         email: Some("abc@xyz.com".to_owned()),
    ///         send_email: true,
    ///         ..Default::default()
    ///     })
    ///     .await?;
    ///
    /// println!("share this URL: {}", created.longurl);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, request), fields(purpose = %request.purpose))]
    pub async fn create_payment_request(
        &self,
        request: &CreatePaymentRequest,
    ) -> Result<PaymentRequest> {
        let operation = Operation::post_json(format!("{API_ROOT}/payment-requests/"), request)?;
        let envelope: PaymentRequestEnvelope = self.execute(operation).await?;
        Ok(envelope.payment_request)
    }

    /// Lists all payment requests created so far.
    ///
    /// `GET /api/1.1/payment-requests/`, success 200.
    ///
    /// # Errors
    ///
    /// Returns any [`ClientError`](crate::ClientError) from the request cycle.
    pub async fn list_payment_requests(&self) -> Result<Vec<PaymentRequest>> {
        let operation = Operation::get(format!("{API_ROOT}/payment-requests/"));
        let envelope: PaymentRequestListEnvelope = self.execute(operation).await?;
        Ok(envelope.payment_requests)
    }

    /// Fetches one payment request by identifier, including its captured
    /// payments.
    ///
    /// `GET /api/1.1/payment-requests/{id}`, success 200.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`](crate::ClientError::NotFound) for an
    /// unknown identifier, or any other [`ClientError`](crate::ClientError)
    /// from the request cycle.
    pub async fn payment_request(&self, id: &str) -> Result<PaymentRequest> {
        let operation = Operation::get(format!("{API_ROOT}/payment-requests/{id}"));
        let envelope: PaymentRequestEnvelope = self.execute(operation).await?;
        Ok(envelope.payment_request)
    }

    /// Re-enables a disabled payment request.
    ///
    /// `POST /api/1.1/payment-requests/{id}/enable`, success 200.
    ///
    /// # Errors
    ///
    /// Returns any [`ClientError`](crate::ClientError) from the request cycle.
    #[instrument(skip(self))]
    pub async fn enable_payment_request(&self, id: &str) -> Result<()> {
        let operation = Operation::post(format!("{API_ROOT}/payment-requests/{id}/enable"));
        let status: StatusEnvelope = self.execute(operation).await?;
        debug!(success = status.success, "payment request enabled");
        Ok(())
    }

    /// Disables a payment request so its URL stops collecting payments.
    ///
    /// `POST /api/1.1/payment-requests/{id}/disable`, success 200.
    ///
    /// # Errors
    ///
    /// Returns any [`ClientError`](crate::ClientError) from the request cycle.
    #[instrument(skip(self))]
    pub async fn disable_payment_request(&self, id: &str) -> Result<()> {
        let operation = Operation::post(format!("{API_ROOT}/payment-requests/{id}/disable"));
        let status: StatusEnvelope = self.execute(operation).await?;
        debug!(success = status.success, "payment request disabled");
        Ok(())
    }
}
