//! HTTP-level integration tests for customer registration and the
//! `/customers` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;

async fn booked_count(pool: &tourdesk_db::StorePool, tour_id: &str) -> u64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/tours/{tour_id}")).await).await;
    json["data"]["booked_count"].as_u64().unwrap()
}

#[tokio::test]
async fn valid_registration_returns_201_with_normalized_values() {
    let pool = common::test_pool();
    let tour_id = common::create_tour(&pool, "Bhutan", 85000.0, 25).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/customers", common::customer_body(&tour_id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["pan_number"], "ABCDE1234F");
    assert_eq!(json["data"]["gender"], "female");
    assert_eq!(json["data"]["payment_status"], "pending");
    assert_eq!(booked_count(&pool, &tour_id).await, 1);
}

#[tokio::test]
async fn invalid_registration_reports_every_field() {
    let pool = common::test_pool();
    let tour_id = common::create_tour(&pool, "Bhutan", 85000.0, 25).await;

    let mut body = common::customer_body(&tour_id);
    body["aadhaar_number"] = json!("234123412347");
    body["pan_number"] = json!("ABCDE12345");
    body["mobile"] = json!("5876543210");
    body["email"] = json!("a@b");
    body["date_of_birth"] = json!("2015-01-01");
    body["city"] = json!("  ");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/customers", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    let fields = &json["fields"];
    assert_eq!(fields["aadhaar_number"]["kind"], "checksum");
    assert_eq!(fields["pan_number"]["kind"], "format");
    assert_eq!(fields["mobile"]["kind"], "format");
    assert_eq!(fields["email"]["kind"], "format");
    assert_eq!(fields["date_of_birth"]["kind"], "range");
    assert_eq!(fields["city"]["kind"], "required");
    assert_eq!(fields.as_object().unwrap().len(), 6);

    assert_eq!(booked_count(&pool, &tour_id).await, 0);
}

#[tokio::test]
async fn numeric_contact_fields_are_accepted() {
    let pool = common::test_pool();
    let tour_id = common::create_tour(&pool, "Bhutan", 85000.0, 25).await;

    let mut body = common::customer_body(&tour_id);
    body["pincode"] = json!(560001);
    body["mobile"] = json!(9876543210u64);

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/customers", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["pincode"], "560001");
    assert_eq!(json["data"]["mobile"], "9876543210");
}

#[tokio::test]
async fn wrong_typed_fields_join_the_error_set() {
    let pool = common::test_pool();
    let tour_id = common::create_tour(&pool, "Bhutan", 85000.0, 25).await;

    let mut body = common::customer_body(&tour_id);
    body["payment_status"] = json!("refunded");
    body["city"] = json!(["Pune"]);
    body["email"] = json!("a@b");

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/customers", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_FAILED");
    let fields = json["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields["payment_status"]["kind"], "format");
    assert_eq!(fields["city"]["kind"], "format");
    assert_eq!(fields["email"]["kind"], "format");
    assert_eq!(booked_count(&pool, &tour_id).await, 0);
}

#[tokio::test]
async fn empty_form_lists_every_required_field() {
    let app = common::build_test_app(common::test_pool());
    let response = post_json(app, "/api/v1/customers", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    let fields = json["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 14);
    assert!(!fields.contains_key("pan_number"));
    assert!(fields.values().all(|f| f["kind"] == "required"));
}

#[tokio::test]
async fn unknown_tour_is_a_reference_error() {
    let app = common::build_test_app(common::test_pool());
    let response = post_json(app, "/api/v1/customers", common::customer_body("no-such-tour")).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["fields"]["tour_id"]["kind"], "reference");
}

#[tokio::test]
async fn full_tour_returns_409() {
    let pool = common::test_pool();
    let tour_id = common::create_tour(&pool, "Tiny", 1000.0, 1).await;
    common::create_customer(&pool, &tour_id, "paid").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/v1/customers", common::customer_body(&tour_id)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(booked_count(&pool, &tour_id).await, 1);
}

#[tokio::test]
async fn delete_releases_the_seat() {
    let pool = common::test_pool();
    let tour_id = common::create_tour(&pool, "Bhutan", 85000.0, 25).await;
    let first = common::create_customer(&pool, &tour_id, "pending").await;
    common::create_customer(&pool, &tour_id, "pending").await;
    assert_eq!(booked_count(&pool, &tour_id).await, 2);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/customers/{first}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(booked_count(&pool, &tour_id).await, 1);

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/customers/{first}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/customers/{first}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(booked_count(&pool, &tour_id).await, 1);
}

#[tokio::test]
async fn list_filters_by_tour() {
    let pool = common::test_pool();
    let a = common::create_tour(&pool, "A", 1000.0, 10).await;
    let b = common::create_tour(&pool, "B", 1000.0, 10).await;
    common::create_customer(&pool, &a, "pending").await;
    common::create_customer(&pool, &b, "pending").await;
    common::create_customer(&pool, &b, "paid").await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/v1/customers?tour_id={b}")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/customers").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn update_changes_payment_but_not_identity() {
    let pool = common::test_pool();
    let tour_id = common::create_tour(&pool, "Bhutan", 85000.0, 25).await;
    let id = common::create_customer(&pool, &tour_id, "pending").await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/customers/{id}"),
        json!({
            "payment_status": "partial",
            "amount_paid": 40000.0,
            "aadhaar_number": "499118665246",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["payment_status"], "partial");
    assert_eq!(json["data"]["amount_paid"], 40000.0);
    assert_eq!(json["data"]["aadhaar_number"], "234123412346");

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/customers/{id}"),
        json!({"email": "not-an-email"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["fields"]["email"]["kind"], "format");
}
