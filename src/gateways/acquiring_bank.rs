use crate::gateways::{AuthorizationRequest, BankError, BankGateway, BankOutcome};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP client for the acquiring bank's `/payments` endpoint.
#[derive(Clone)]
pub struct AcquiringBankClient {
    pub base_url: String,
    pub client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct BankPaymentRequest<'a> {
    card_number: &'a str,
    expiry_date: String,
    currency: &'a str,
    amount: i64,
    cvv: &'a str,
}

#[derive(Debug, Deserialize)]
struct BankPaymentResponse {
    authorized: bool,
    #[serde(default)]
    authorization_code: Option<String>,
}

impl AcquiringBankClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl BankGateway for AcquiringBankClient {
    async fn authorize(&self, request: &AuthorizationRequest) -> Result<BankOutcome, BankError> {
        let url = format!("{}/payments", self.base_url);
        let body = BankPaymentRequest {
            card_number: request.card_number.expose(),
            expiry_date: format!("{:02}/{}", request.expiry_month, request.expiry_year),
            currency: &request.currency,
            amount: request.amount,
            cvv: request.cvv.expose(),
        };

        let resp = self.client.post(url).json(&body).send().await;

        let resp = match resp {
            Ok(r) => r,
            Err(e) if e.is_timeout() => {
                return Err(BankError::unavailable(None, "acquiring bank timed out"))
            }
            Err(e) => return Err(BankError::unavailable(None, e.to_string())),
        };

        // Bank bodies may echo the card back, so none of their text goes into
        // an error message.
        let status = resp.status();
        if !status.is_success() {
            return Err(BankError::unavailable(
                Some(status.as_u16()),
                format!("HTTP_{}", status.as_u16()),
            ));
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| BankError::unavailable(Some(status.as_u16()), e.to_string()))?;
        let parsed: BankPaymentResponse = serde_json::from_slice(&bytes).map_err(|e| {
            BankError::InvalidResponse(format!(
                "{:?} error at line {} column {}",
                e.classify(),
                e.line(),
                e.column()
            ))
        })?;

        Ok(if parsed.authorized {
            BankOutcome::Authorized {
                authorization_code: parsed.authorization_code,
            }
        } else {
            BankOutcome::Declined
        })
    }
}
