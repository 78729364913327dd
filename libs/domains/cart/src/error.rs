use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Cart not found for user {0}")]
    NotFound(String),

    #[error("Product {product_id} not in cart of user {user_id}")]
    ItemNotFound { user_id: String, product_id: i32 },

    #[error("Merged quantity exceeds the supported range")]
    InvalidQuantity,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type CartResult<T> = Result<T, CartError>;

impl CartError {
    pub const NOT_FOUND_CODE: &'static str = "Cart.NotFound";
    pub const NOT_FOUND_DESCRIPTION: &'static str = "Cart was not found.";
    pub const ITEM_NOT_FOUND_CODE: &'static str = "Cart.ItemNotFound";
    pub const ITEM_NOT_FOUND_DESCRIPTION: &'static str = "Item not found in cart.";
    pub const INVALID_QUANTITY_CODE: &'static str = "Cart.InvalidQuantity";
    pub const INVALID_QUANTITY_DESCRIPTION: &'static str = "Quantity must be greater than zero.";
    pub const PERSISTENCE_CODE: &'static str = "Cart.Persistence";
}

impl From<CartError> for mediator::Error {
    fn from(err: CartError) -> Self {
        match err {
            CartError::NotFound(_) => mediator::Error::not_found(
                CartError::NOT_FOUND_CODE,
                CartError::NOT_FOUND_DESCRIPTION,
            ),
            CartError::ItemNotFound { .. } => mediator::Error::not_found(
                CartError::ITEM_NOT_FOUND_CODE,
                CartError::ITEM_NOT_FOUND_DESCRIPTION,
            ),
            CartError::InvalidQuantity => mediator::Error::validation(
                CartError::INVALID_QUANTITY_CODE,
                CartError::INVALID_QUANTITY_DESCRIPTION,
            ),
            CartError::Database(e) => mediator::Error::unexpected(CartError::PERSISTENCE_CODE, &e),
        }
    }
}
