//! HTTP handlers for the Products API

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ApiResult, JsonBody, PathParams, QueryParams,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        ValidationErrorResponse,
    },
};
use utoipa::OpenApi;

use crate::models::{
    CreateProduct, DeleteProduct, GetProductById, GetProducts, Product, ProductPage,
    UpdateProduct, UpdateProductBody,
};
use crate::repository::ProductRepository;
use crate::service::ProductMediator;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, ProductPage, CreateProduct, UpdateProductBody),
        responses(
            ValidationErrorResponse,
            BadRequestResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router, mounted under `/api/products`
pub fn router<R: ProductRepository + 'static>(mediator: ProductMediator<R>) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(mediator)
}

/// List products one page at a time
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(GetProducts),
    responses(
        (status = 200, description = "Page of products", body = ProductPage),
        (status = 400, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository + 'static>(
    State(mediator): State<ProductMediator<R>>,
    QueryParams(query): QueryParams<GetProducts>,
) -> ApiResult<Json<ProductPage>> {
    let page = mediator.send(query).await?;
    Ok(Json(page))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, response = ValidationErrorResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository + 'static>(
    State(mediator): State<ProductMediator<R>>,
    JsonBody(input): JsonBody<CreateProduct>,
) -> ApiResult<impl IntoResponse> {
    let product = mediator.send(input).await?;
    let location = format!("/api/products/{}", product.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(product),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository + 'static>(
    State(mediator): State<ProductMediator<R>>,
    PathParams(id): PathParams<i32>,
) -> ApiResult<Json<Product>> {
    let product = mediator.send(GetProductById { id }).await?;
    Ok(Json(product))
}

/// Replace a product's name, description and price
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductBody,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository + 'static>(
    State(mediator): State<ProductMediator<R>>,
    PathParams(id): PathParams<i32>,
    JsonBody(body): JsonBody<UpdateProductBody>,
) -> ApiResult<Json<Product>> {
    let product = mediator.send(UpdateProduct::new(id, body)).await?;
    Ok(Json(product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository + 'static>(
    State(mediator): State<ProductMediator<R>>,
    PathParams(id): PathParams<i32>,
) -> ApiResult<StatusCode> {
    mediator.send(DeleteProduct { id }).await?;
    Ok(StatusCode::NO_CONTENT)
}
