#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tourdesk_api::config::ServerConfig;
use tourdesk_api::router::build_app_router;
use tourdesk_api::state::AppState;
use tourdesk_db::{Store, StorePool};

/// Build a test `ServerConfig` with safe defaults: memory-only store, no
/// seeding, `http://localhost:3000` as CORS origin.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        data_file: None,
        seed_sample_data: false,
        log_json: false,
    }
}

/// A fresh, empty in-memory store.
pub fn test_pool() -> StorePool {
    Arc::new(Store::in_memory())
}

/// Build the full application router, with all middleware layers, over the
/// given store.
pub fn build_test_app(pool: StorePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

/// POST a raw, possibly malformed, JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn tour_body(name: &str, price: f64, capacity: u32) -> Value {
    json!({
        "name": name,
        "destination": "Thimphu, Paro - Bhutan",
        "start_date": "2025-03-15",
        "end_date": "2025-03-22",
        "price": price,
        "transport_mode": "flight_and_local",
        "max_capacity": capacity,
    })
}

/// A registration form that passes every check.
pub fn customer_body(tour_id: &str) -> Value {
    json!({
        "tour_id": tour_id,
        "first_name": "Asha",
        "last_name": "Rao",
        "date_of_birth": "1990-04-12",
        "gender": "female",
        "email": "asha@example.com",
        "mobile": "9876543210",
        "address": "12 MG Road",
        "city": "Bengaluru",
        "state": "Karnataka",
        "pincode": "560001",
        "aadhaar_number": "234123412346",
        "pan_number": "abcde1234f",
        "emergency_contact_name": "Ravi Rao",
        "emergency_contact_number": "+91 91234 56789",
    })
}

/// Create a tour and return its id.
pub async fn create_tour(pool: &StorePool, name: &str, price: f64, capacity: u32) -> String {
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/tours", tour_body(name, price, capacity)).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["tour_id"].as_str().unwrap().to_string()
}

/// Register a customer with the given payment status and return its id.
pub async fn create_customer(pool: &StorePool, tour_id: &str, payment_status: &str) -> String {
    let mut body = customer_body(tour_id);
    body["payment_status"] = json!(payment_status);
    let app = build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/customers", body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    let json = body_json(response).await;
    json["data"]["customer_id"].as_str().unwrap().to_string()
}
