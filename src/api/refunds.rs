//! Refund operations: create, list, fetch.

use tracing::instrument;

use crate::{
    api::API_ROOT,
    client::{Client, Operation},
    error::Result,
    models::{CreateRefund, Refund, RefundEnvelope, RefundListEnvelope},
};

impl Client {
    /// Issues a refund, full or partial, against a captured payment.
    ///
    /// `POST /api/1.1/refunds`, success 201.
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
    /// use instamojo::{
    ///     models::{CreateRefund, RefundType},
    ///     Client, Credentials, Environment,
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// # async fn example() -> instamojo::Result<()> {
    /// let client = Client::new(Credentials::new("key", "token")?, Environment::Sandbox)?;
    ///
    /// let refund = client
    ///     .create_refund(&CreateRefund {
    ///         payment_id: "MOJO5a06005J21512197".to_owned(),
    ///         refund_type: RefundType::Qfl,
    ///         refund_amount: Decimal::new(250_000, 2),
    ///         body: "Customer is not satisfied".to_owned(),
    ///     })
    ///     .await?;
    ///
    /// println!("refund {} is {}", refund.id, refund.status);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self, request), fields(payment_id = %request.payment_id))]
    pub async fn create_refund(&self, request: &CreateRefund) -> Result<Refund> {
        let operation = Operation::post_json(format!("{API_ROOT}/refunds"), request)?;
        let envelope: RefundEnvelope = self.execute(operation).await?;
        Ok(envelope.refund)
    }

    /// Lists all refunds issued so far.
    ///
    /// `GET /api/1.1/refunds`, success 200.
    ///
    /// # Errors
    ///
    /// Returns any [`ClientError`](crate::ClientError) from the request cycle.
    pub async fn list_refunds(&self) -> Result<Vec<Refund>> {
        let operation = Operation::get(format!("{API_ROOT}/refunds"));
        let envelope: RefundListEnvelope = self.execute(operation).await?;
        Ok(envelope.refunds)
    }

    /// Fetches one refund by identifier.
    ///
    /// `GET /api/1.1/refunds/{id}`, success 200.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`](crate::ClientError::NotFound) for an
    /// unknown identifier, or any other [`ClientError`](crate::ClientError)
    /// from the request cycle.
    pub async fn refund(&self, id: &str) -> Result<Refund> {
        let operation = Operation::get(format!("{API_ROOT}/refunds/{id}"));
        let envelope: RefundEnvelope = self.execute(operation).await?;
        Ok(envelope.refund)
    }
}
