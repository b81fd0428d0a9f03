use serde::{Deserialize, Serialize};

use crate::error::PaystackClientError;
use crate::metadata::PaymentMetadata;
use crate::PaystackClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedTransaction {
    /// Provider-side transaction state, e.g. "success", "failed", "pending"
    pub status: String,
    /// Minor currency units
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub reference: Option<String>,
    /// The metadata we attached at initiation time, echoed back
    #[serde(default)]
    pub metadata: Option<PaymentMetadata>,
}

impl VerifiedTransaction {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Settled amount in whole KES
    pub fn amount_major(&self) -> i64 {
        self.amount.unwrap_or(0) / 100
    }
}

impl PaystackClient {
    /// Poll the gateway for a transaction's current outcome by reference.
    #[tracing::instrument(skip(self))]
    pub async fn verify_transaction(
        &self,
        reference: &str,
    ) -> Result<VerifiedTransaction, PaystackClientError> {
        let res = self
            .client
            .get(format!("{}/transaction/verify/{reference}", self.base_url))
            .send()
            .await
            .map_err(|e| PaystackClientError::Transport {
                details: e.to_string(),
            })?;

        self.read_envelope(res).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::payment::PaymentType;

    #[test]
    fn success_status_and_amount_conversion() {
        let tx: VerifiedTransaction = serde_json::from_value(serde_json::json!({
            "status": "success",
            "amount": 49900,
            "reference": "ref_abc123",
            "metadata": {"user_id": 4, "type": "contact_access", "listing_id": 12}
        }))
        .unwrap();

        assert!(tx.is_success());
        assert_eq!(tx.amount_major(), 499);
        let metadata = tx.metadata.unwrap();
        assert_eq!(metadata.purchase, PaymentType::ContactAccess);
        assert_eq!(metadata.listing_id, Some(12));
    }

    #[test]
    fn pending_transaction_is_not_success() {
        let tx: VerifiedTransaction = serde_json::from_value(serde_json::json!({
            "status": "ongoing"
        }))
        .unwrap();
        assert!(!tx.is_success());
        assert_eq!(tx.amount_major(), 0);
    }
}
