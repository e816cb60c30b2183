//! Integration tests for the HTTP surface.
//!
//! These drive the full router (gate middleware included) over in-memory
//! adapters and assert the envelope contract: statuses, bodies, and the
//! absence of downstream side effects on rejected requests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{json, Value};
use tower::ServiceExt;

use subhub::adapters::auth::JwtTokenCodec;
use subhub::adapters::http::{app_router, AppState};
use subhub::adapters::postgres::InMemoryUserRepository;
use subhub::adapters::stripe::MockPaymentProvider;
use subhub::config::PaymentConfig;
use subhub::ports::TokenCodec;

const SECRET: &str = "integration-secret-integration-secret";

struct TestApp {
    users: Arc<InMemoryUserRepository>,
    payments: Arc<MockPaymentProvider>,
    tokens: Arc<JwtTokenCodec>,
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        Self::with_ttl(3600)
    }

    fn with_ttl(ttl_secs: u64) -> Self {
        let users = Arc::new(InMemoryUserRepository::new());
        let payments = Arc::new(MockPaymentProvider::new());
        let tokens = Arc::new(JwtTokenCodec::with_secret(SECRET, ttl_secs));

        let payment_config = PaymentConfig {
            stripe_api_key: SecretString::new("sk_test_integration".to_string()),
            checkout_success_url: "http://localhost:5173/articles".to_string(),
            checkout_cancel_url: "http://localhost:5173/articles-plans".to_string(),
        };

        let state = AppState::new(
            users.clone(),
            payments.clone(),
            tokens.clone(),
            &payment_config,
        );

        Self {
            users,
            payments,
            tokens,
            router: app_router(state),
        }
    }

    async fn request(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn raw_body(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    async fn signup(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.request(post_json(
            "/auth/signup",
            json!({"email": email, "password": password}),
        ))
        .await
    }

    async fn login(&self, email: &str, password: &str) -> (StatusCode, Value) {
        self.request(post_json(
            "/auth/login",
            json!({"email": email, "password": password}),
        ))
        .await
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with_token(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

// Signup and login

#[tokio::test]
async fn signup_then_login_round_trip() {
    let app = TestApp::new();

    let (status, body) = app.signup("a@example.com", "hunter2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["errors"], json!([]));

    let user = &body["data"]["user"];
    assert!(!user["id"].as_str().unwrap().is_empty());
    assert!(!user["billingCustomerId"].as_str().unwrap().is_empty());

    // The issued token satisfies the gate.
    let token = body["data"]["token"].as_str().unwrap().to_string();
    let (status, me) = app.request(get_with_token("/auth/me", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["data"]["user"]["email"], "a@example.com");

    // And a fresh login works with the same credentials.
    let (status, login) = app.login("a@example.com", "hunter2").await;
    assert_eq!(status, StatusCode::OK);
    let login_token = login["data"]["token"].as_str().unwrap();
    assert_eq!(
        app.tokens.verify(login_token).unwrap(),
        "a@example.com"
    );
}

#[tokio::test]
async fn short_password_yields_one_error_and_no_mutation() {
    let app = TestApp::new();

    let (status, body) = app.signup("a@example.com", "1234").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["data"], Value::Null);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(errors[0]["msg"].as_str().unwrap().contains("password"));

    assert!(app.users.is_empty());
    assert!(app.payments.created_customers().is_empty());
}

#[tokio::test]
async fn invalid_email_and_password_errors_accumulate() {
    let app = TestApp::new();

    let (status, body) = app.signup("nope", "123").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn duplicate_email_creates_no_second_user_or_customer() {
    let app = TestApp::new();
    app.signup("a@example.com", "hunter2").await;

    let (status, body) = app.signup("a@example.com", "hunter2").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"errors": [{"msg": "Email already in use"}], "data": null})
    );
    assert_eq!(app.users.len(), 1);
    assert_eq!(app.payments.created_customers().len(), 1);
}

#[tokio::test]
async fn billing_failure_aborts_signup() {
    let app = TestApp::new();
    app.payments
        .set_error(subhub::ports::PaymentError::provider("declined"));

    let (status, body) = app.signup("a@example.com", "hunter2").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["data"], Value::Null);
    assert!(app.users.is_empty());
}

#[tokio::test]
async fn login_failures_have_byte_identical_bodies() {
    let app = TestApp::new();
    app.signup("a@example.com", "hunter2").await;

    let (unknown_status, unknown_body) = app
        .raw_body(post_json(
            "/auth/login",
            json!({"email": "ghost@example.com", "password": "hunter2"}),
        ))
        .await;
    let (wrong_status, wrong_body) = app
        .raw_body(post_json(
            "/auth/login",
            json!({"email": "a@example.com", "password": "wrong"}),
        ))
        .await;

    assert_eq!(unknown_status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong_status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(
        serde_json::from_slice::<Value>(&unknown_body).unwrap(),
        json!({"errors": [{"msg": "Invalid credentials"}], "data": null})
    );
}

#[tokio::test]
async fn missing_body_fields_stay_in_the_envelope() {
    let app = TestApp::new();

    let (status, body) = app.request(post_json("/auth/signup", json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"errors": [{"msg": "Invalid request body"}], "data": null})
    );
    assert!(app.users.is_empty());
}

#[tokio::test]
async fn unparseable_body_stays_in_the_envelope() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.request(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"errors": [{"msg": "Invalid request body"}], "data": null})
    );
}

#[tokio::test]
async fn login_response_omits_billing_customer_id() {
    let app = TestApp::new();
    app.signup("a@example.com", "hunter2").await;

    let (_, body) = app.login("a@example.com", "hunter2").await;

    assert!(body["data"]["user"].get("billingCustomerId").is_none());
    assert!(body["data"]["user"]["id"].is_string());
}

// Authorization gate

#[tokio::test]
async fn protected_routes_reject_missing_and_bad_tokens() {
    let app = TestApp::new();
    let expected = json!({"errors": [{"msg": "unauthorized"}], "data": null});

    for uri in ["/auth/me", "/subs/prices"] {
        let (status, body) = app.request(get_with_token(uri, None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "no header on {uri}");
        assert_eq!(body, expected);

        let (status, body) = app.request(get_with_token(uri, Some("garbage"))).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "garbage token on {uri}");
        assert_eq!(body, expected);
    }

    // Nothing reached the payment provider.
    assert!(app.payments.created_customers().is_empty());
    assert!(app.payments.checkout_requests().is_empty());
}

#[tokio::test]
async fn expired_token_is_rejected() {
    // TTL of one second, token aged past it.
    let app = TestApp::with_ttl(1);
    let (_, body) = app.signup("a@example.com", "hunter2").await;
    let token = body["data"]["token"].as_str().unwrap().to_string();

    tokio::time::sleep(std::time::Duration::from_secs(2)).await;

    let (status, body) = app.request(get_with_token("/auth/me", Some(&token))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        json!({"errors": [{"msg": "unauthorized"}], "data": null})
    );
}

#[tokio::test]
async fn token_resolves_to_its_own_subject() {
    let app = TestApp::new();
    let (_, a) = app.signup("a@example.com", "hunter2").await;
    app.signup("b@example.com", "hunter2").await;

    let token_a = a["data"]["token"].as_str().unwrap().to_string();
    let (_, me) = app
        .request(get_with_token("/auth/me", Some(&token_a)))
        .await;

    assert_eq!(me["data"]["user"]["email"], "a@example.com");
    assert_eq!(me["data"]["user"]["id"], a["data"]["user"]["id"]);
}

#[tokio::test]
async fn me_for_vanished_account_is_404() {
    let app = TestApp::new();
    // Token for an email with no record behind it.
    let token = app.tokens.issue("ghost@example.com").unwrap();

    let (status, body) = app.request(get_with_token("/auth/me", Some(&token))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"errors": [{"msg": "User not found"}], "data": null})
    );
}

// Billing routes

#[tokio::test]
async fn prices_pass_through_unmodified() {
    let app = TestApp::new();
    let (_, signup) = app.signup("a@example.com", "hunter2").await;
    let token = signup["data"]["token"].as_str().unwrap().to_string();

    let price_list = json!({
        "object": "list",
        "data": [{"id": "price_123", "unit_amount": 999, "currency": "usd"}]
    });
    app.payments.set_prices(price_list.clone());

    let (status, body) = app
        .request(get_with_token("/subs/prices", Some(&token)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, price_list);
}

#[tokio::test]
async fn checkout_session_binds_customer_and_passes_through() {
    let app = TestApp::new();
    let (_, signup) = app.signup("a@example.com", "hunter2").await;
    let token = signup["data"]["token"].as_str().unwrap().to_string();
    let customer_id = signup["data"]["user"]["billingCustomerId"]
        .as_str()
        .unwrap()
        .to_string();

    let session = json!({"id": "cs_test_1", "url": "https://checkout.stripe.com/c/cs_test_1"});
    app.payments.set_checkout_session(session.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/subs/session")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(json!({"priceId": "price_123"}).to_string()))
        .unwrap();
    let (status, body) = app.request(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, session);

    let requests = app.payments.checkout_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].customer_id, customer_id);
    assert_eq!(requests[0].price_id, "price_123");
    assert_eq!(requests[0].success_url, "http://localhost:5173/articles");
    assert_eq!(
        requests[0].cancel_url,
        "http://localhost:5173/articles-plans"
    );
}

#[tokio::test]
async fn upstream_failure_on_prices_returns_enveloped_500() {
    let app = TestApp::new();
    let (_, signup) = app.signup("a@example.com", "hunter2").await;
    let token = signup["data"]["token"].as_str().unwrap().to_string();

    app.payments
        .set_error(subhub::ports::PaymentError::network("connection reset"));

    let (status, body) = app
        .request(get_with_token("/subs/prices", Some(&token)))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"errors": [{"msg": "Internal server error"}], "data": null})
    );
}

// Root route

#[tokio::test]
async fn root_says_hello() {
    let app = TestApp::new();
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let (status, bytes) = app.raw_body(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"Hello, World!");
}
