//! Handler tests for the Products domain
//!
//! These run the products router against the seeded in-memory store and
//! check status codes, headers and JSON bodies. Routing under `/api`,
//! CORS and tracing are covered by the app crate.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use domain_products::*;
use http_body_util::BodyExt;
use mediator::Mediator;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> axum::Router {
    let service = ProductService::new(InMemoryProductRepository::seeded());
    handlers::router(Mediator::new(service))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_product_returns_201_with_location() {
    let request = json_request(
        "POST",
        "/",
        json!({ "name": "Desk Lamp", "description": "Warm light", "price": 24.5 }),
    );

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/api/products/4"
    );

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], 4);
    assert_eq!(body["name"], "Desk Lamp");
    assert_eq!(body["price"], json!(24.5));
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_product_validation_errors() {
    let request = json_request("POST", "/", json!({ "name": "", "price": 0 }));

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Validation Error");
    assert_eq!(body["status"], 400);
    assert_eq!(body["errors"]["name"], json!(["Name is required"]));
    assert_eq!(
        body["errors"]["price"],
        json!(["Price must be greater than zero"])
    );
}

#[tokio::test]
async fn test_create_product_price_outside_storage() {
    let app = app();

    let request = json_request("POST", "/", json!({ "name": "Yacht", "price": 1e20 }));
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["errors"]["price"],
        json!(["Price must not exceed 9999999999999999.99"])
    );

    let request = json_request("POST", "/", json!({ "name": "Gum", "price": 0.125 }));
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(
        body["errors"]["price"],
        json!(["Price must have at most 2 decimal places"])
    );
}

#[tokio::test]
async fn test_create_product_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Bad Request");
}

#[tokio::test]
async fn test_get_product() {
    let response = app().oneshot(empty_request("GET", "/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["name"], "Sample Product 1");
    assert_eq!(body["price"], json!(19.99));
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let response = app().oneshot(empty_request("GET", "/999")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Not Found");
    assert_eq!(body["detail"], "Product was not found.");
}

#[tokio::test]
async fn test_get_product_with_non_numeric_id() {
    let response = app().oneshot(empty_request("GET", "/abc")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_pages() {
    let response = app()
        .oneshot(empty_request("GET", "/?page=2&pageSize=1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["totalCount"], 3);
    assert_eq!(body["page"], 2);
    assert_eq!(body["pageSize"], 1);
    assert_eq!(body["products"].as_array().unwrap().len(), 1);
    assert_eq!(body["products"][0]["id"], 2);
}

#[tokio::test]
async fn test_list_products_defaults() {
    let response = app().oneshot(empty_request("GET", "/")).await.unwrap();

    let body = json_body(response.into_body()).await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageSize"], 10);
    assert_eq!(body["products"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_list_products_rejects_bad_paging() {
    let response = app()
        .oneshot(empty_request("GET", "/?page=0&pageSize=500"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert!(body["errors"]["page"].is_array());
    assert!(body["errors"]["pageSize"].is_array());
}

#[tokio::test]
async fn test_list_products_far_past_the_end_is_empty() {
    let response = app()
        .oneshot(empty_request("GET", "/?page=9223372036854775807&pageSize=100"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["totalCount"], 3);
    assert!(body["products"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_product() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/2",
            json!({ "name": "Renamed", "description": "Updated", "price": 31.0 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(empty_request("GET", "/2")).await.unwrap();
    let body = json_body(response.into_body()).await;
    assert_eq!(body["name"], "Renamed");
    assert_eq!(body["description"], "Updated");
    assert_eq!(body["price"], json!(31.0));
}

#[tokio::test]
async fn test_update_missing_product() {
    let response = app()
        .oneshot(json_request(
            "PUT",
            "/77",
            json!({ "name": "Ghost", "price": 1.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product() {
    let app = app();

    let response = app.clone().oneshot(empty_request("DELETE", "/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.clone().oneshot(empty_request("DELETE", "/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("GET", "/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
