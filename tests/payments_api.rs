use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use payment_gateway::domain::payment::{
    ErrorBody, ErrorClassification, PaymentRecord, PaymentResponse, PaymentStatus, RejectionBody,
};
use payment_gateway::error::BANK_UNAVAILABLE_MESSAGE;
use payment_gateway::gateways::mock::{MockBank, MockBehavior};
use payment_gateway::http::handlers::payments::MALFORMED_REQUEST_MESSAGE;
use payment_gateway::repo::payments_repo::PaymentsRepo;
use payment_gateway::service::payment_service::PaymentService;
use payment_gateway::AppState;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn test_app(behavior: MockBehavior, repo: PaymentsRepo) -> axum::Router {
    let state = AppState {
        payment_service: PaymentService::new(repo, Arc::new(MockBank::new(behavior))),
    };
    payment_gateway::app(state)
}

fn post_payment(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/payments")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_payment(id: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/payments/{id}"))
        .body(Body::empty())
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::http::Response<Body>) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_body() -> serde_json::Value {
    json!({
        "card_number": "2222405343248877",
        "expiry_month": 4,
        "expiry_year": 2099,
        "currency": "GBP",
        "amount": 100,
        "cvv": "123"
    })
}

#[tokio::test]
async fn health_is_ok() {
    let app = test_app(MockBehavior::AlwaysAuthorize, PaymentsRepo::new());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_existing_payment() {
    let repo = PaymentsRepo::new();
    repo.insert(PaymentRecord {
        id: "test-id".to_string(),
        status: PaymentStatus::Authorized,
        card_number_last_four: "1234".to_string(),
        expiry_month: 10,
        expiry_year: 2035,
        currency: "GBP".to_string(),
        amount: 100,
    })
    .await
    .unwrap();
    let app = test_app(MockBehavior::AlwaysAuthorize, repo);

    let response = app.oneshot(get_payment("test-id")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let payment: PaymentResponse = body_json(response).await;
    assert_eq!(payment.id, "test-id");
    assert_eq!(payment.card_number_last_four, "1234");
    assert_eq!(payment.expiry_year, 2035);
}

#[tokio::test]
async fn get_missing_payment_is_404() {
    let app = test_app(MockBehavior::AlwaysAuthorize, PaymentsRepo::new());
    let response = app.oneshot(get_payment("NonExistingID")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_then_get_returns_same_view() {
    let app = test_app(MockBehavior::AlwaysAuthorize, PaymentsRepo::new());

    let response = app.clone().oneshot(post_payment(valid_body())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created: PaymentResponse = body_json(response).await;
    assert_eq!(created.status, PaymentStatus::Authorized);
    assert_eq!(created.card_number_last_four, "8877");

    let response = app.oneshot(get_payment(&created.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: PaymentResponse = body_json(response).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn response_never_contains_full_card_number() {
    let app = test_app(MockBehavior::AlwaysDecline, PaymentsRepo::new());
    let response = app.oneshot(post_payment(valid_body())).await.unwrap();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("\"declined\""));
    assert!(!text.contains("2222405343248877"));
    assert!(!text.contains("cvv"));
}

#[tokio::test]
async fn invalid_request_is_400_with_every_violation() {
    let app = test_app(MockBehavior::AlwaysAuthorize, PaymentsRepo::new());
    let body = json!({ "card_number": "1234", "currency": "JPY", "cvv": "1" });

    let response = app.oneshot(post_payment(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let rejection: RejectionBody = body_json(response).await;
    assert_eq!(rejection.status, PaymentStatus::Rejected);
    let fields: Vec<_> = rejection.errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["card_number", "expiry_month", "expiry_year", "currency", "amount", "cvv"]
    );
}

#[tokio::test]
async fn bank_unavailable_is_503_with_retry_message() {
    let app = test_app(MockBehavior::AlwaysUnavailable, PaymentsRepo::new());

    let response = app.oneshot(post_payment(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: ErrorBody = body_json(response).await;
    assert_eq!(
        body.message,
        "The acquiring bank is currently unavailable. Please try again later."
    );
    assert_eq!(body.message, BANK_UNAVAILABLE_MESSAGE);
    assert_eq!(body.classification, ErrorClassification::Unavailable);
}

#[tokio::test]
async fn malformed_bank_response_is_500() {
    let app = test_app(MockBehavior::MalformedResponse, PaymentsRepo::new());

    let response = app.oneshot(post_payment(valid_body())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorBody = body_json(response).await;
    assert_eq!(body.classification, ErrorClassification::Internal);
}

async fn assert_malformed(app: axum::Router, request: Request<Body>) {
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(response).await;
    assert_eq!(body["message"], MALFORMED_REQUEST_MESSAGE);
}

#[tokio::test]
async fn post_without_body_is_400() {
    let app = test_app(MockBehavior::AlwaysAuthorize, PaymentsRepo::new());
    let request = Request::builder()
        .method("POST")
        .uri("/api/payments")
        .body(Body::empty())
        .unwrap();
    assert_malformed(app, request).await;
}

#[tokio::test]
async fn post_invalid_json_is_400() {
    let app = test_app(MockBehavior::AlwaysAuthorize, PaymentsRepo::new());
    let request = Request::builder()
        .method("POST")
        .uri("/api/payments")
        .header("content-type", "application/json")
        .body(Body::from("invalid json"))
        .unwrap();
    assert_malformed(app, request).await;
}

#[tokio::test]
async fn mistyped_fields_are_400_without_echoing_card() {
    let mut numeric_card = valid_body();
    numeric_card["card_number"] = json!(2222405343248877u64);
    let mut negative_year = valid_body();
    negative_year["expiry_year"] = json!(-1);
    let mut fractional_amount = valid_body();
    fractional_amount["amount"] = json!(10.5);

    for body in [numeric_card, negative_year, fractional_amount] {
        let repo = PaymentsRepo::new();
        let app = test_app(MockBehavior::AlwaysAuthorize, repo.clone());
        let response = app.oneshot(post_payment(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.contains(MALFORMED_REQUEST_MESSAGE));
        assert!(!text.contains("2222405343248877"));
        assert!(repo.is_empty().await);
    }
}

#[tokio::test]
async fn last_four_is_a_string_keeping_leading_zeros() {
    let app = test_app(MockBehavior::AlwaysAuthorize, PaymentsRepo::new());
    let mut body = valid_body();
    body["card_number"] = json!("2222405343240042");

    let response = app.oneshot(post_payment(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let created: serde_json::Value = body_json(response).await;
    assert_eq!(created["card_number_last_four"], json!("0042"));
}
