use crate::domain::payment::{PaymentRecord, PaymentRequest, PaymentResponse, PaymentStatus};
use crate::domain::validation::validate;
use crate::error::PaymentError;
use crate::gateways::{AuthorizationRequest, BankGateway, BankOutcome};
use crate::repo::payments_repo::PaymentsRepo;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct PaymentService {
    pub payments_repo: PaymentsRepo,
    pub bank: Arc<dyn BankGateway>,
}

impl PaymentService {
    pub fn new(payments_repo: PaymentsRepo, bank: Arc<dyn BankGateway>) -> Self {
        Self {
            payments_repo,
            bank,
        }
    }

    pub async fn process(&self, req: PaymentRequest) -> Result<PaymentResponse, PaymentError> {
        self.process_at(req, Utc::now()).await
    }

    /// Validate, authorize with the bank, then store. A record is written
    /// only when the bank gave a definite authorized/declined answer.
    pub async fn process_at(
        &self,
        req: PaymentRequest,
        now: DateTime<Utc>,
    ) -> Result<PaymentResponse, PaymentError> {
        if let Err(violations) = validate(&req, now) {
            tracing::info!(violations = violations.len(), "payment rejected");
            return Err(PaymentError::Rejected(violations));
        }

        let last_four = req.card_number.last_four();
        let outcome = self
            .bank
            .authorize(&AuthorizationRequest::from(&req))
            .await
            .map_err(|e| {
                let e = PaymentError::from(e);
                tracing::warn!(
                    card_last_four = %last_four,
                    classification = ?e.classification(),
                    error = %e,
                    "bank authorization failed"
                );
                e
            })?;

        let status = match outcome {
            BankOutcome::Authorized { authorization_code } => {
                tracing::debug!(bank_reference = ?authorization_code, "bank authorized payment");
                PaymentStatus::Authorized
            }
            BankOutcome::Declined => PaymentStatus::Declined,
        };

        let record = PaymentRecord {
            id: Uuid::new_v4().to_string(),
            status,
            card_number_last_four: last_four,
            expiry_month: req.expiry_month,
            expiry_year: req.expiry_year,
            currency: req.currency,
            amount: req.amount,
        };

        self.payments_repo.insert(record.clone()).await?;
        tracing::info!(
            payment_id = %record.id,
            status = %record.status,
            card_last_four = %record.card_number_last_four,
            amount = record.amount,
            currency = %record.currency,
            "payment stored"
        );

        Ok(record.into())
    }

    pub async fn get(&self, id: &str) -> Option<PaymentResponse> {
        self.payments_repo.get(id).await.map(PaymentResponse::from)
    }
}
