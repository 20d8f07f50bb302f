use crate::domain::payment::PaymentRequest;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

pub const MALFORMED_REQUEST_MESSAGE: &str = "request body must be a JSON payment request";

pub async fn create_payment(
    State(state): State<AppState>,
    body: Result<Json<PaymentRequest>, JsonRejection>,
) -> impl IntoResponse {
    // serde's message can quote the submitted card number, so it is not echoed.
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::info!(rejected_status = %rejection.status(), "malformed payment request");
            return (
                axum::http::StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"message": MALFORMED_REQUEST_MESSAGE})),
            )
                .into_response();
        }
    };

    match state.payment_service.process(req).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> impl IntoResponse {
    match state.payment_service.get(&payment_id).await {
        Some(payment) => (axum::http::StatusCode::OK, Json(payment)).into_response(),
        None => (
            axum::http::StatusCode::NOT_FOUND,
            Json(serde_json::json!({"message": "payment not found"})),
        )
            .into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}
