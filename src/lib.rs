pub mod config;
pub mod domain {
    pub mod card;
    pub mod payment;
    pub mod validation;
}
pub mod error;
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod payments;
    }
}
pub mod repo {
    pub mod payments_repo;
}
pub mod service {
    pub mod payment_service;
}

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub payment_service: service::payment_service::PaymentService,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(http::handlers::payments::health))
        .route("/api/payments", post(http::handlers::payments::create_payment))
        .route("/api/payments/:id", get(http::handlers::payments::get_payment))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
