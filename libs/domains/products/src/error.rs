use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i32),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    pub const NOT_FOUND_CODE: &'static str = "Product.NotFound";
    pub const NOT_FOUND_DESCRIPTION: &'static str = "Product was not found.";
    pub const PERSISTENCE_CODE: &'static str = "Product.Persistence";
}

impl From<ProductError> for mediator::Error {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => mediator::Error::not_found(
                ProductError::NOT_FOUND_CODE,
                ProductError::NOT_FOUND_DESCRIPTION,
            ),
            ProductError::Database(e) => {
                mediator::Error::unexpected(ProductError::PERSISTENCE_CODE, &e)
            }
        }
    }
}
