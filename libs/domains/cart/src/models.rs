use chrono::{DateTime, Utc};
use mediator::Request;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

pub const MAX_USER_ID_LENGTH: usize = 50;

fn validate_user_id(user_id: &str) -> Result<(), ValidationError> {
    if user_id.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("User ID is required".into()));
    }
    if user_id.chars().count() > MAX_USER_ID_LENGTH {
        return Err(ValidationError::new("length")
            .with_message("User ID must not exceed 50 characters".into()));
    }
    Ok(())
}

/// Line in a cart. Name and price are copied from the product when the
/// line is first added and are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub user_id: String,
    pub product_id: i32,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn total_price(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub user_id: String,
    /// Kept in the order the products were first added
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn total_amount(&self) -> Decimal {
        self.items
            .iter()
            .map(CartItem::total_price)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    pub fn item_mut(&mut self, product_id: i32) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.product_id == product_id)
    }

    /// Removes the line for `product_id`, returning whether one existed.
    pub fn remove_item(&mut self, product_id: i32) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.product_id != product_id);
        self.items.len() != before
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub product_id: i32,
    pub product_name: String,
    #[schema(value_type = f64, example = 19.99)]
    pub unit_price: Decimal,
    pub quantity: i32,
    #[schema(value_type = f64, example = 39.98)]
    pub total_price: Decimal,
}

/// Cart as returned over HTTP, totals included
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub user_id: String,
    pub items: Vec<CartItemView>,
    #[schema(value_type = f64, example = 39.98)]
    pub total_amount: Decimal,
    pub total_items: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        let total_amount = cart.total_amount();
        let total_items = cart.total_items();

        Self {
            user_id: cart.user_id,
            items: cart
                .items
                .into_iter()
                .map(|item| CartItemView {
                    total_price: item.total_price(),
                    product_id: item.product_id,
                    product_name: item.product_name,
                    unit_price: item.unit_price,
                    quantity: item.quantity,
                })
                .collect(),
            total_amount,
            total_items,
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}

/// Body of `POST /{user_id}/items`
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemBody {
    #[schema(example = 1)]
    pub product_id: i32,
    #[schema(example = 2)]
    pub quantity: i32,
}

#[derive(Debug, Clone, Validate)]
pub struct AddItemToCart {
    #[validate(custom(function = "validate_user_id"))]
    pub user_id: String,
    #[validate(range(min = 1, message = "Product ID must be greater than zero"))]
    pub product_id: i32,
    #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
    pub quantity: i32,
}

impl AddItemToCart {
    pub fn new(user_id: String, body: AddItemBody) -> Self {
        Self {
            user_id,
            product_id: body.product_id,
            quantity: body.quantity,
        }
    }
}

impl Request for AddItemToCart {
    type Response = CartView;
    const NAME: &'static str = "AddItemToCart";

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
    }
}

#[derive(Debug, Clone)]
pub struct GetCart {
    pub user_id: String,
}

impl Request for GetCart {
    type Response = CartView;
    const NAME: &'static str = "GetCart";
}

#[derive(Debug, Clone, Validate)]
pub struct RemoveItemFromCart {
    #[validate(custom(function = "validate_user_id"))]
    pub user_id: String,
    #[validate(range(min = 1, message = "Product ID must be greater than zero"))]
    pub product_id: i32,
}

impl Request for RemoveItemFromCart {
    type Response = CartView;
    const NAME: &'static str = "RemoveItemFromCart";

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
    }
}

#[derive(Debug, Clone, Validate)]
pub struct ClearCart {
    #[validate(custom(function = "validate_user_id"))]
    pub user_id: String,
}

impl Request for ClearCart {
    type Response = ();
    const NAME: &'static str = "ClearCart";

    fn validate(&self) -> Result<(), ValidationErrors> {
        Validate::validate(self)
    }
}
