//! HTTP handlers for the Shopping Cart API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
};
use axum_helpers::{
    ApiResult, JsonBody, PathParams,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use domain_products::GetProductById;
use mediator::Handler;
use utoipa::OpenApi;

use crate::models::{
    AddItemBody, AddItemToCart, CartItemView, CartView, ClearCart, GetCart, RemoveItemFromCart,
};
use crate::repository::CartRepository;
use crate::service::CartMediator;

/// OpenAPI documentation for the Shopping Cart API
#[derive(OpenApi)]
#[openapi(
    paths(get_cart, clear_cart, add_item, remove_item),
    components(
        schemas(CartView, CartItemView, AddItemBody),
        responses(
            ValidationErrorResponse,
            BadRequestResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Cart", description = "Shopping cart endpoints")
    )
)]
pub struct ApiDoc;

/// Create the cart router, mounted under `/api/cart`
pub fn router<C, P>(mediator: CartMediator<C, P>) -> Router
where
    C: CartRepository + 'static,
    P: Handler<GetProductById> + 'static,
{
    Router::new()
        .route("/{user_id}", get(get_cart::<C, P>).delete(clear_cart::<C, P>))
        .route("/{user_id}/items", post(add_item::<C, P>))
        .route(
            "/{user_id}/items/{product_id}",
            delete(remove_item::<C, P>),
        )
        .with_state(mediator)
}

/// Get a user's cart
#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "Cart",
    params(
        ("user_id" = String, Path, description = "Cart owner")
    ),
    responses(
        (status = 200, description = "Cart found", body = CartView),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_cart<C, P>(
    State(mediator): State<CartMediator<C, P>>,
    PathParams(user_id): PathParams<String>,
) -> ApiResult<Json<CartView>>
where
    C: CartRepository + 'static,
    P: Handler<GetProductById> + 'static,
{
    let cart = mediator.send(GetCart { user_id }).await?;
    Ok(Json(cart))
}

/// Empty a cart; the cart itself is kept
#[utoipa::path(
    delete,
    path = "/{user_id}",
    tag = "Cart",
    params(
        ("user_id" = String, Path, description = "Cart owner")
    ),
    responses(
        (status = 204, description = "Cart cleared"),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn clear_cart<C, P>(
    State(mediator): State<CartMediator<C, P>>,
    PathParams(user_id): PathParams<String>,
) -> ApiResult<StatusCode>
where
    C: CartRepository + 'static,
    P: Handler<GetProductById> + 'static,
{
    mediator.send(ClearCart { user_id }).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a product to a cart, creating the cart on first use
///
/// Adding a product that is already in the cart increases its quantity.
#[utoipa::path(
    post,
    path = "/{user_id}/items",
    tag = "Cart",
    params(
        ("user_id" = String, Path, description = "Cart owner")
    ),
    request_body = AddItemBody,
    responses(
        (status = 200, description = "Updated cart", body = CartView),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_item<C, P>(
    State(mediator): State<CartMediator<C, P>>,
    PathParams(user_id): PathParams<String>,
    JsonBody(body): JsonBody<AddItemBody>,
) -> ApiResult<Json<CartView>>
where
    C: CartRepository + 'static,
    P: Handler<GetProductById> + 'static,
{
    let cart = mediator.send(AddItemToCart::new(user_id, body)).await?;
    Ok(Json(cart))
}

/// Remove a product from a cart
#[utoipa::path(
    delete,
    path = "/{user_id}/items/{product_id}",
    tag = "Cart",
    params(
        ("user_id" = String, Path, description = "Cart owner"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Updated cart", body = CartView),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove_item<C, P>(
    State(mediator): State<CartMediator<C, P>>,
    PathParams((user_id, product_id)): PathParams<(String, i32)>,
) -> ApiResult<Json<CartView>>
where
    C: CartRepository + 'static,
    P: Handler<GetProductById> + 'static,
{
    let cart = mediator
        .send(RemoveItemFromCart {
            user_id,
            product_id,
        })
        .await?;
    Ok(Json(cart))
}
