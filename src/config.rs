use crate::gateways::mock::MockBehavior;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub bank_base_url: String,
    pub bank_timeout_ms: u64,
    /// When set, payments go to an in-process mock bank instead of HTTP.
    pub bank_mock_behavior: Option<MockBehavior>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8090".to_string()),
            bank_base_url: std::env::var("BANK_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            bank_timeout_ms: std::env::var("BANK_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(5000),
            bank_mock_behavior: std::env::var("BANK_MOCK_BEHAVIOR")
                .ok()
                .and_then(|s| match s.parse::<MockBehavior>() {
                    Ok(b) => Some(b),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring BANK_MOCK_BEHAVIOR");
                        None
                    }
                }),
        }
    }
}
