use chrono::{DateTime, Utc};
use mediator::Request;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
/// Largest price a `numeric(18,2)` column holds
pub const MAX_PRICE: Decimal = Decimal::from_parts(2_808_348_671, 232_830_643, 0, false, 2);
pub const PRICE_SCALE: u32 = 2;

fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("Name is required".into()));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::new("length")
            .with_message("Name must not exceed 100 characters".into()));
    }
    Ok(())
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(ValidationError::new("range")
            .with_message("Price must be greater than zero".into()));
    }
    if *price > MAX_PRICE {
        return Err(ValidationError::new("range")
            .with_message("Price must not exceed 9999999999999999.99".into()));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::new("scale")
            .with_message("Price must have at most 2 decimal places".into()));
    }
    Ok(())
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = f64, example = 19.99)]
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Product about to be inserted; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(custom(function = "validate_product_name"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: String,
    #[schema(value_type = f64, example = 19.99)]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

impl Request for CreateProduct {
    type Response = Product;
    const NAME: &'static str = "CreateProduct";

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetProductById {
    pub id: i32,
}

impl Request for GetProductById {
    type Response = Product;
    const NAME: &'static str = "GetProductById";
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// One page of the catalog, ordered by id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct GetProducts {
    /// 1-based page number
    #[serde(default = "default_page")]
    #[param(default = 1, minimum = 1)]
    #[validate(range(min = 1, message = "Page must be greater than or equal to 1"))]
    pub page: i64,
    #[serde(default = "default_page_size", alias = "page_size")]
    #[param(default = 10, minimum = 1, maximum = 100)]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub page_size: i64,
}

impl Default for GetProducts {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl GetProducts {
    /// Rows to skip: `(page - 1) * page_size`, capped at `i64::MAX` so
    /// pages far past the end still read as empty.
    pub fn offset(&self) -> u64 {
        (self.page.max(1) - 1)
            .unsigned_abs()
            .saturating_mul(self.limit())
            .min(i64::MAX.unsigned_abs())
    }

    pub fn limit(&self) -> u64 {
        self.page_size.clamp(1, MAX_PAGE_SIZE).unsigned_abs()
    }
}

impl Request for GetProducts {
    type Response = ProductPage;
    const NAME: &'static str = "GetProducts";

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total_count: u64,
    pub page: i64,
    pub page_size: i64,
}

/// Body of `PUT /{id}`
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductBody {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = f64, example = 24.99)]
    pub price: Decimal,
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateProduct {
    #[validate(range(min = 1, message = "Id must be greater than zero"))]
    pub id: i32,
    #[validate(custom(function = "validate_product_name"))]
    pub name: String,
    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

impl UpdateProduct {
    pub fn new(id: i32, body: UpdateProductBody) -> Self {
        Self {
            id,
            name: body.name,
            description: body.description,
            price: body.price,
        }
    }
}

impl Request for UpdateProduct {
    type Response = Product;
    const NAME: &'static str = "UpdateProduct";

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteProduct {
    pub id: i32,
}

impl Request for DeleteProduct {
    type Response = ();
    const NAME: &'static str = "DeleteProduct";
}
