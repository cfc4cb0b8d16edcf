//! Captured payment operations.

use crate::{
    api::API_ROOT,
    client::{Client, Operation},
    error::Result,
    models::{Payment, PaymentEnvelope},
};

impl Client {
    /// Fetches one captured payment by identifier.
    ///
    /// `GET /api/1.1/payments/{id}`, success 200. Unlike
    /// [`payment_request`](Client::payment_request), which fetches the
    /// gateway-hosted request record, this returns the record of a successful
    /// payment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`](crate::ClientError::NotFound) for an
    /// unknown identifier, or any other [`ClientError`](crate::ClientError)
    /// from the request cycle.
    pub async fn payment(&self, id: &str) -> Result<Payment> {
        let operation = Operation::get(format!("{API_ROOT}/payments/{id}"));
        let envelope: PaymentEnvelope = self.execute(operation).await?;
        Ok(envelope.payment)
    }
}
