//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Validation Error",
    content_type = "application/json",
    example = json!({
        "title": "Validation Error",
        "status": 400,
        "detail": "One or more validation errors occurred",
        "errors": { "name": ["Name is required"] }
    })
)]
pub struct ValidationErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed body, path or query",
    content_type = "application/json",
    example = json!({
        "title": "Bad Request",
        "status": 400,
        "detail": "Invalid URL: Cannot parse `abc` to a `i32`"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "title": "Not Found",
        "status": 404,
        "detail": "Product was not found."
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "title": "An error occurred",
        "status": 500,
        "detail": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);
