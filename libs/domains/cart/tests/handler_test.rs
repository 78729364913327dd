//! Handler tests for the Shopping Cart domain
//!
//! The cart router runs against in-memory stores, with products resolved
//! through a real product mediator over the seeded catalog.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_cart::*;
use domain_products::{InMemoryProductRepository, ProductService};
use http_body_util::BodyExt;
use mediator::Mediator;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> axum::Router {
    let products = Mediator::new(ProductService::new(InMemoryProductRepository::seeded()));
    let service = CartService::new(InMemoryCartRepository::new(), products);
    handlers::router(Mediator::new(service))
}

fn add_item(user_id: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/{user_id}/items"))
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
async fn test_add_item_returns_cart_view() {
    let response = app()
        .oneshot(add_item("alice", json!({ "productId": 1, "quantity": 2 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["userId"], "alice");
    assert_eq!(body["totalItems"], 2);
    assert_eq!(body["totalAmount"], json!(39.98));
    assert_eq!(body["items"][0]["productName"], "Sample Product 1");
    assert_eq!(body["items"][0]["unitPrice"], json!(19.99));
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn test_add_same_product_twice_merges() {
    let app = app();

    app.clone()
        .oneshot(add_item("alice", json!({ "productId": 2, "quantity": 1 })))
        .await
        .unwrap();
    let response = app
        .oneshot(add_item("alice", json!({ "productId": 2, "quantity": 2 })))
        .await
        .unwrap();

    let body = json_body(response.into_body()).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["quantity"], 3);
}

#[tokio::test]
async fn test_add_item_validation() {
    let response = app()
        .oneshot(add_item("alice", json!({ "productId": 0, "quantity": 0 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Validation Error");
    assert_eq!(
        body["errors"]["productId"],
        json!(["Product ID must be greater than zero"])
    );
    assert_eq!(
        body["errors"]["quantity"],
        json!(["Quantity must be greater than zero"])
    );
}

#[tokio::test]
async fn test_add_item_past_quantity_limit_returns_400() {
    let app = app();

    let response = app
        .clone()
        .oneshot(add_item("alice", json!({ "productId": 1, "quantity": i32::MAX })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(add_item("alice", json!({ "productId": 1, "quantity": 1 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Validation Error");
    assert_eq!(
        body["errors"]["Cart.InvalidQuantity"],
        json!(["Quantity must be greater than zero."])
    );
}

#[tokio::test]
async fn test_add_unknown_product_returns_404() {
    let response = app()
        .oneshot(add_item("alice", json!({ "productId": 99, "quantity": 1 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Product was not found.");
}

#[tokio::test]
async fn test_get_missing_cart_returns_404() {
    let response = app().oneshot(empty_request("GET", "/nobody")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["title"], "Not Found");
    assert_eq!(body["detail"], "Cart was not found.");
}

#[tokio::test]
async fn test_clear_cart_keeps_record() {
    let app = app();
    app.clone()
        .oneshot(add_item("alice", json!({ "productId": 1, "quantity": 2 })))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/alice"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.oneshot(empty_request("GET", "/alice")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["totalItems"], 0);
    assert_eq!(body["totalAmount"], json!(0.0));
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_item() {
    let app = app();
    app.clone()
        .oneshot(add_item("alice", json!({ "productId": 1, "quantity": 1 })))
        .await
        .unwrap();
    app.clone()
        .oneshot(add_item("alice", json!({ "productId": 3, "quantity": 1 })))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/alice/items/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 1);
    assert_eq!(body["items"][0]["productId"], 3);

    let response = app
        .oneshot(empty_request("DELETE", "/alice/items/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["detail"], "Item not found in cart.");
}

#[tokio::test]
async fn test_remove_item_bad_product_id() {
    let response = app()
        .oneshot(empty_request("DELETE", "/alice/items/abc"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
