use crate::domain::payment::{ErrorBody, ErrorClassification, FieldViolation, PaymentStatus, RejectionBody};
use crate::gateways::BankError;
use crate::repo::payments_repo::RepoError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub const BANK_UNAVAILABLE_MESSAGE: &str =
    "The acquiring bank is currently unavailable. Please try again later.";
pub const INTERNAL_ERROR_MESSAGE: &str =
    "An internal error occurred while processing the payment.";

/// Every way a payment attempt can end without a stored record.
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("payment rejected with {} field violation(s)", .0.len())]
    Rejected(Vec<FieldViolation>),

    #[error("acquiring bank unavailable: {cause}")]
    BankUnavailable { status: Option<u16>, cause: String },

    #[error("acquiring bank response invalid: {0}")]
    BankResponseInvalid(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl From<BankError> for PaymentError {
    fn from(e: BankError) -> Self {
        match e {
            BankError::Unavailable { status, cause } => Self::BankUnavailable { status, cause },
            BankError::InvalidResponse(cause) => Self::BankResponseInvalid(cause),
        }
    }
}

impl PaymentError {
    /// `None` for rejections, which are the caller's to fix.
    pub fn classification(&self) -> Option<ErrorClassification> {
        match self {
            Self::Rejected(_) => None,
            Self::BankUnavailable { .. } => Some(ErrorClassification::Unavailable),
            Self::BankResponseInvalid(_) | Self::Repository(_) => Some(ErrorClassification::Internal),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.classification() {
            None => StatusCode::BAD_REQUEST,
            Some(ErrorClassification::Unavailable) => StatusCode::SERVICE_UNAVAILABLE,
            Some(ErrorClassification::Internal) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::Rejected(errors) => (
                status,
                Json(RejectionBody {
                    status: PaymentStatus::Rejected,
                    errors,
                }),
            )
                .into_response(),
            Self::BankUnavailable { .. } => (
                status,
                Json(ErrorBody {
                    message: BANK_UNAVAILABLE_MESSAGE.to_string(),
                    classification: ErrorClassification::Unavailable,
                }),
            )
                .into_response(),
            // Detail stays in the logs.
            Self::BankResponseInvalid(_) | Self::Repository(_) => {
                tracing::error!(error = %self, "payment failed with internal error");
                (
                    status,
                    Json(ErrorBody {
                        message: INTERNAL_ERROR_MESSAGE.to_string(),
                        classification: ErrorClassification::Internal,
                    }),
                )
                    .into_response()
            }
        }
    }
}
