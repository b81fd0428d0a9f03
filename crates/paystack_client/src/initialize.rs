use serde::{Deserialize, Serialize};

use crate::error::PaystackClientError;
use crate::metadata::PaymentMetadata;
use crate::PaystackClient;

#[derive(Debug, Serialize)]
struct InitializeRequest<'a> {
    email: &'a str,
    /// Minor currency units
    amount: i64,
    callback_url: &'a str,
    metadata: &'a PaymentMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeData {
    pub authorization_url: String,
    pub access_code: String,
    pub reference: String,
}

impl PaystackClient {
    /// Open a redirect checkout session for callers without a phone number.
    /// The callback URL carries the purchase context back to the frontend.
    #[tracing::instrument(skip(self, email))]
    pub async fn initialize_transaction(
        &self,
        email: &str,
        amount_minor: i64,
        callback_url: &str,
        metadata: &PaymentMetadata,
    ) -> Result<InitializeData, PaystackClientError> {
        let res = self
            .client
            .post(format!("{}/transaction/initialize", self.base_url))
            .json(&InitializeRequest {
                email,
                amount: amount_minor,
                callback_url,
                metadata,
            })
            .send()
            .await
            .map_err(|e| PaystackClientError::Transport {
                details: e.to_string(),
            })?;

        self.read_envelope(res).await
    }
}
