use payment_gateway::config::AppConfig;
use payment_gateway::gateways::acquiring_bank::AcquiringBankClient;
use payment_gateway::gateways::mock::MockBank;
use payment_gateway::gateways::BankGateway;
use payment_gateway::repo::payments_repo::PaymentsRepo;
use payment_gateway::service::payment_service::PaymentService;
use payment_gateway::AppState;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let bank: Arc<dyn BankGateway> = match cfg.bank_mock_behavior {
        Some(behavior) => {
            tracing::warn!(?behavior, "using mock acquiring bank");
            Arc::new(MockBank::new(behavior))
        }
        None => Arc::new(AcquiringBankClient::new(
            cfg.bank_base_url.clone(),
            Duration::from_millis(cfg.bank_timeout_ms),
        )?),
    };

    let state = AppState {
        payment_service: PaymentService::new(PaymentsRepo::new(), bank),
    };
    let app = payment_gateway::app(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(bank = %cfg.bank_base_url, "listening on {}", cfg.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
