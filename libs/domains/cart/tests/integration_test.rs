//! Integration tests for the Shopping Cart domain
//!
//! Exercise `PgCartRepository` and the full cart flow against PostgreSQL
//! started with testcontainers.

use chrono::{Duration, Utc};
use domain_cart::*;
use domain_products::{PgProductRepository, ProductService};
use mediator::Mediator;
use rust_decimal::Decimal;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn item(user_id: &str, product_id: i32, quantity: i32, minutes_ago: i64) -> CartItem {
    CartItem {
        user_id: user_id.to_string(),
        product_id,
        product_name: format!("Sample Product {product_id}"),
        unit_price: Decimal::new(1999, 2),
        quantity,
        added_at: Utc::now() - Duration::minutes(minutes_ago),
    }
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_and_find_orders_items_by_added_at() {
    let db = TestDatabase::new().await;
    let repo = PgCartRepository::new(db.connection());
    let user_id = TestDataBuilder::from_test_name("save_and_find").user_id();

    let mut cart = Cart::new(user_id.clone(), Utc::now());
    cart.items.push(item(&user_id, 3, 1, 1));
    cart.items.push(item(&user_id, 1, 2, 10));
    repo.save(&cart).await.unwrap();

    let stored = assert_some(repo.find(&user_id).await.unwrap(), "saved cart");
    let ids: Vec<i32> = stored.items.iter().map(|i| i.product_id).collect();

    assert_eq!(ids, vec![1, 3]);
    assert_eq!(stored.total_items(), 3);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_replaces_items() {
    let db = TestDatabase::new().await;
    let repo = PgCartRepository::new(db.connection());
    let user_id = TestDataBuilder::from_test_name("save_replaces").user_id();

    let mut cart = Cart::new(user_id.clone(), Utc::now());
    cart.items.push(item(&user_id, 1, 1, 0));
    cart.items.push(item(&user_id, 2, 1, 0));
    repo.save(&cart).await.unwrap();

    cart.items.retain(|i| i.product_id == 2);
    cart.items[0].quantity = 5;
    repo.save(&cart).await.unwrap();

    let stored = assert_some(repo.find(&user_id).await.unwrap(), "saved cart");
    assert_eq!(stored.items.len(), 1);
    assert_id_eq(stored.items[0].product_id, 2, "remaining item");
    assert_eq!(stored.items[0].quantity, 5);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_cleared_cart_is_still_found() {
    let db = TestDatabase::new().await;
    let repo = PgCartRepository::new(db.connection());
    let user_id = TestDataBuilder::from_test_name("cleared_cart").user_id();

    let mut cart = Cart::new(user_id.clone(), Utc::now());
    cart.items.push(item(&user_id, 1, 1, 0));
    repo.save(&cart).await.unwrap();

    cart.items.clear();
    repo.save(&cart).await.unwrap();

    let stored = assert_some(repo.find(&user_id).await.unwrap(), "cleared cart");
    assert!(stored.items.is_empty());
    assert_eq!(stored.total_amount(), Decimal::ZERO);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_add_item_flow_against_postgres() {
    let db = TestDatabase::new().await;
    let products = Mediator::new(ProductService::new(PgProductRepository::new(
        db.connection(),
    )));
    let carts = Mediator::new(CartService::new(
        PgCartRepository::new(db.connection()),
        products,
    ));
    let user_id = TestDataBuilder::from_test_name("add_item_flow").user_id();

    for quantity in [1, 2] {
        carts
            .send(AddItemToCart {
                user_id: user_id.clone(),
                product_id: 2,
                quantity,
            })
            .await
            .unwrap();
    }

    let cart = carts.send(GetCart { user_id }).await.unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 3);
    assert_eq!(cart.total_amount, Decimal::new(8997, 2));
}
