use crate::domain::card::{CardNumber, Cvv};
use crate::domain::payment::PaymentRequest;
use axum::http::StatusCode;
use thiserror::Error;

pub mod acquiring_bank;
pub mod mock;

/// What the bank needs to decide on a single charge.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    pub card_number: CardNumber,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub currency: String,
    pub amount: i64,
    pub cvv: Cvv,
}

impl From<&PaymentRequest> for AuthorizationRequest {
    fn from(req: &PaymentRequest) -> Self {
        Self {
            card_number: req.card_number.clone(),
            expiry_month: req.expiry_month,
            expiry_year: req.expiry_year,
            currency: req.currency.clone(),
            amount: req.amount,
            cvv: req.cvv.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankOutcome {
    Authorized { authorization_code: Option<String> },
    Declined,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BankError {
    /// Transport failure, timeout, or a non-2xx answer. `status` is the
    /// bank's HTTP status when one was received.
    #[error("acquiring bank unavailable: {cause}")]
    Unavailable { status: Option<u16>, cause: String },

    /// 2xx with a body that does not match the bank contract.
    #[error("acquiring bank returned a malformed response: {0}")]
    InvalidResponse(String),
}

impl BankError {
    pub fn unavailable(status: Option<u16>, cause: impl Into<String>) -> Self {
        Self::Unavailable {
            status,
            cause: cause.into(),
        }
    }

    /// Status the API surface should answer with for this failure.
    pub fn status_hint(&self) -> StatusCode {
        match self {
            BankError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            BankError::InvalidResponse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[async_trait::async_trait]
pub trait BankGateway: Send + Sync {
    async fn authorize(&self, request: &AuthorizationRequest) -> Result<BankOutcome, BankError>;
}
