use crate::gateways::{AuthorizationRequest, BankError, BankGateway, BankOutcome};
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    AlwaysAuthorize,
    AlwaysDecline,
    AlwaysUnavailable,
    MalformedResponse,
}

impl FromStr for MockBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALWAYS_AUTHORIZE" => Ok(Self::AlwaysAuthorize),
            "ALWAYS_DECLINE" => Ok(Self::AlwaysDecline),
            "ALWAYS_UNAVAILABLE" => Ok(Self::AlwaysUnavailable),
            "MALFORMED_RESPONSE" => Ok(Self::MalformedResponse),
            other => Err(format!("unknown mock bank behavior: {other}")),
        }
    }
}

/// In-process bank that answers from a fixed script and counts calls.
pub struct MockBank {
    pub behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockBank {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl BankGateway for MockBank {
    async fn authorize(&self, _request: &AuthorizationRequest) -> Result<BankOutcome, BankError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.behavior {
            MockBehavior::AlwaysAuthorize => Ok(BankOutcome::Authorized {
                authorization_code: Some(format!("mock_auth_{}", uuid::Uuid::new_v4())),
            }),
            MockBehavior::AlwaysDecline => Ok(BankOutcome::Declined),
            MockBehavior::AlwaysUnavailable => {
                Err(BankError::unavailable(Some(503), "mock bank unavailable"))
            }
            MockBehavior::MalformedResponse => {
                Err(BankError::InvalidResponse("mock malformed body".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_env_names() {
        assert_eq!(
            "ALWAYS_DECLINE".parse::<MockBehavior>(),
            Ok(MockBehavior::AlwaysDecline)
        );
        assert!("SOMETIMES".parse::<MockBehavior>().is_err());
    }

    #[tokio::test]
    async fn counts_every_call() {
        let bank = MockBank::new(MockBehavior::AlwaysUnavailable);
        let req = AuthorizationRequest {
            card_number: "2222405343248877".into(),
            expiry_month: 4,
            expiry_year: 2030,
            currency: "GBP".to_string(),
            amount: 100,
            cvv: "123".into(),
        };
        assert!(bank.authorize(&req).await.is_err());
        assert!(bank.authorize(&req).await.is_err());
        assert_eq!(bank.calls(), 2);
    }
}
