use serde::{Deserialize, Serialize};

use crate::error::PaystackClientError;
use crate::metadata::PaymentMetadata;
use crate::PaystackClient;

#[derive(Debug, Serialize)]
struct MobileMoney<'a> {
    phone: &'a str,
    provider: &'a str,
}

#[derive(Debug, Serialize)]
struct ChargeRequest<'a> {
    email: &'a str,
    /// Minor currency units
    amount: i64,
    currency: &'a str,
    mobile_money: MobileMoney<'a>,
    metadata: &'a PaymentMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeData {
    pub reference: String,
    #[serde(default)]
    pub status: Option<String>,
    /// Prompt Paystack asks us to show while the STK push is pending
    #[serde(default)]
    pub display_text: Option<String>,
}

impl PaystackClient {
    /// Fire an M-Pesa STK push at the given MSISDN. The phone number must
    /// already be normalized, see [crate::phone::format_msisdn].
    #[tracing::instrument(skip(self, email))]
    pub async fn charge_mobile_money(
        &self,
        email: &str,
        amount_minor: i64,
        msisdn: &str,
        metadata: &PaymentMetadata,
    ) -> Result<ChargeData, PaystackClientError> {
        let res = self
            .client
            .post(format!("{}/charge", self.base_url))
            .json(&ChargeRequest {
                email,
                amount: amount_minor,
                currency: "KES",
                mobile_money: MobileMoney {
                    phone: msisdn,
                    provider: "mpesa",
                },
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
