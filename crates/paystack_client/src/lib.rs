pub mod charge;
pub mod error;
pub mod initialize;
pub mod metadata;
pub mod phone;
pub mod verify;

use error::PaystackClientError;
use serde::de::DeserializeOwned;

pub static DEFAULT_BASE_URL: &str = "https://api.paystack.co";

/// Thin client over the Paystack HTTP API. All amounts cross the wire in
/// minor currency units.
#[derive(Clone)]
pub struct PaystackClient {
    base_url: String,
    client: reqwest::Client,
}

impl PaystackClient {
    pub fn new(secret_key: &str) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        let mut auth: reqwest::header::HeaderValue =
            format!("Bearer {secret_key}").parse().unwrap();
        auth.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Points the client at a different host. Used against a stub gateway in
    /// local environments.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Unwrap Paystack's uniform `{status, message, data}` envelope. Anything
    /// other than a 2xx with `status: true` surfaces as a decline carrying
    /// the raw provider payload.
    pub(crate) async fn read_envelope<T: DeserializeOwned>(
        &self,
        res: reqwest::Response,
    ) -> Result<T, PaystackClientError> {
        let http_status = res.status();
        let body: serde_json::Value =
            res.json()
                .await
                .map_err(|e| PaystackClientError::Transport {
                    details: e.to_string(),
                })?;

        let accepted = http_status.is_success()
            && body
                .get("status")
                .and_then(|v| v.as_bool())
                .unwrap_or(false);

        if !accepted {
            let message = body
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("payment gateway request failed")
                .to_string();
            tracing::error!(%http_status, %message, "paystack request rejected");
            return Err(PaystackClientError::Declined {
                message,
                details: body,
            });
        }

        let data = body.get("data").cloned().unwrap_or(serde_json::Value::Null);
        serde_json::from_value(data).map_err(|e| PaystackClientError::Unexpected {
            details: e.to_string(),
        })
    }
}
