use crate::domain::card::{CardNumber, Cvv};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inbound authorization request. Missing fields fall back to their
/// defaults so that the validator, not the decoder, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentRequest {
    pub card_number: CardNumber,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub currency: String,
    pub amount: i64,
    pub cvv: Cvv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Authorized,
    Declined,
    Rejected,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PaymentStatus::Authorized => "authorized",
            PaymentStatus::Declined => "declined",
            PaymentStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Stored outcome of an authorization attempt. Holds only the last four
/// digits of the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord {
    pub id: String,
    pub status: PaymentStatus,
    pub card_number_last_four: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub currency: String,
    pub amount: i64,
}

/// View returned by both create and retrieve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub id: String,
    pub status: PaymentStatus,
    /// JSON string, not a number, so `"0042"` keeps its leading zeros.
    pub card_number_last_four: String,
    pub expiry_month: u8,
    pub expiry_year: u16,
    pub currency: String,
    pub amount: i64,
}

impl From<PaymentRecord> for PaymentResponse {
    fn from(record: PaymentRecord) -> Self {
        Self {
            id: record.id,
            status: record.status,
            card_number_last_four: record.card_number_last_four,
            expiry_month: record.expiry_month,
            expiry_year: record.expiry_year,
            currency: record.currency,
            amount: record.amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RejectionBody {
    pub status: PaymentStatus,
    pub errors: Vec<FieldViolation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorClassification {
    Unavailable,
    Internal,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub classification: ErrorClassification,
}
