//! Product use cases, one [`Handler`] impl per request

use async_trait::async_trait;
use chrono::Utc;
use mediator::{Handler, Mediator, Outcome};
use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductError;
use crate::models::{
    CreateProduct, DeleteProduct, GetProductById, GetProducts, NewProduct, Product, ProductPage,
    UpdateProduct,
};
use crate::repository::ProductRepository;

/// Handles every product request against a single repository.
///
/// Validation has already run by the time a handler is reached; the
/// handlers only deal with lookups and persistence.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

/// Mediator dispatching product requests to a [`ProductService`]
pub type ProductMediator<R> = Mediator<ProductService<R>>;

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self::from_arc(Arc::new(repository))
    }

    pub fn from_arc(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProductRepository> Handler<CreateProduct> for ProductService<R> {
    #[instrument(skip(self, request), fields(product_name = %request.name))]
    async fn handle(&self, request: CreateProduct) -> Outcome<Product> {
        let product = self
            .repository
            .create(NewProduct {
                name: request.name,
                description: request.description,
                price: request.price,
                created_at: Utc::now(),
            })
            .await?;

        Ok(product)
    }
}

#[async_trait]
impl<R: ProductRepository> Handler<GetProductById> for ProductService<R> {
    #[instrument(skip(self))]
    async fn handle(&self, request: GetProductById) -> Outcome<Product> {
        let product = self
            .repository
            .get_by_id(request.id)
            .await?
            .ok_or(ProductError::NotFound(request.id))?;

        Ok(product)
    }
}

#[async_trait]
impl<R: ProductRepository> Handler<GetProducts> for ProductService<R> {
    #[instrument(skip(self))]
    async fn handle(&self, request: GetProducts) -> Outcome<ProductPage> {
        let products = self
            .repository
            .list(request.offset(), request.limit())
            .await?;
        let total_count = self.repository.count().await?;

        Ok(ProductPage {
            products,
            total_count,
            page: request.page,
            page_size: request.page_size,
        })
    }
}

#[async_trait]
impl<R: ProductRepository> Handler<UpdateProduct> for ProductService<R> {
    #[instrument(skip(self, request), fields(product_id = request.id))]
    async fn handle(&self, request: UpdateProduct) -> Outcome<Product> {
        let mut product = self
            .repository
            .get_by_id(request.id)
            .await?
            .ok_or(ProductError::NotFound(request.id))?;

        product.name = request.name;
        product.description = request.description;
        product.price = request.price;
        product.updated_at = Utc::now();

        Ok(self.repository.update(product).await?)
    }
}

#[async_trait]
impl<R: ProductRepository> Handler<DeleteProduct> for ProductService<R> {
    #[instrument(skip(self))]
    async fn handle(&self, request: DeleteProduct) -> Outcome<()> {
        if !self.repository.delete(request.id).await? {
            return Err(ProductError::NotFound(request.id).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mediator::ErrorKind;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use sea_orm::DbErr;

    fn sample_product(id: i32) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: String::new(),
            price: Decimal::new(1000, 2),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn mediator(repo: MockProductRepository) -> ProductMediator<MockProductRepository> {
        Mediator::new(ProductService::new(repo))
    }

    #[tokio::test]
    async fn test_create_product_persists() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_create()
            .withf(|input| input.name == "Lamp" && input.price == Decimal::new(1250, 2))
            .times(1)
            .returning(|input| {
                Ok(Product {
                    id: 7,
                    name: input.name,
                    description: input.description,
                    price: input.price,
                    created_at: input.created_at,
                    updated_at: input.created_at,
                })
            });

        let product = mediator(mock_repo)
            .send(CreateProduct {
                name: "Lamp".into(),
                description: String::new(),
                price: Decimal::new(1250, 2),
            })
            .await
            .unwrap();

        assert_eq!(product.id, 7);
    }

    #[tokio::test]
    async fn test_invalid_create_never_reaches_repository() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_create().never();

        let err = mediator(mock_repo)
            .send(CreateProduct {
                name: String::new(),
                description: String::new(),
                price: Decimal::ZERO,
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        let fields = err.field_errors().unwrap();
        assert_eq!(fields["name"], vec!["Name is required".to_string()]);
        assert_eq!(
            fields["price"],
            vec!["Price must be greater than zero".to_string()]
        );
    }

    #[tokio::test]
    async fn test_get_missing_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(42))
            .returning(|_| Ok(None));

        let err = mediator(mock_repo)
            .send(GetProductById { id: 42 })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), "Product.NotFound");
    }

    #[tokio::test]
    async fn test_get_products_reports_total() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .with(eq(10), eq(10))
            .returning(|_, _| Ok(vec![sample_product(11)]));
        mock_repo.expect_count().returning(|| Ok(11));

        let page = mediator(mock_repo)
            .send(GetProducts { page: 2, page_size: 10 })
            .await
            .unwrap();

        assert_eq!(page.products.len(), 1);
        assert_eq!(page.total_count, 11);
        assert_eq!(page.page, 2);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(sample_product(id))));
        mock_repo
            .expect_update()
            .withf(|p| p.id == 1 && p.name == "Renamed" && p.description == "New")
            .returning(Ok);

        let product = mediator(mock_repo)
            .send(UpdateProduct {
                id: 1,
                name: "Renamed".into(),
                description: "New".into(),
                price: Decimal::new(2000, 2),
            })
            .await
            .unwrap();

        assert_eq!(product.price, Decimal::new(2000, 2));
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let err = mediator(mock_repo)
            .send(UpdateProduct {
                id: 9,
                name: "Renamed".into(),
                description: String::new(),
                price: Decimal::ONE,
            })
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_delete().with(eq(5)).returning(|_| Ok(false));

        let err = mediator(mock_repo)
            .send(DeleteProduct { id: 5 })
            .await
            .unwrap_err();

        assert_eq!(err.code(), "Product.NotFound");
    }

    #[tokio::test]
    async fn test_database_failure_becomes_failure() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_count()
            .returning(|| Err(DbErr::Custom("connection reset".into()).into()));
        mock_repo.expect_list().returning(|_, _| Ok(vec![]));

        let err = mediator(mock_repo)
            .send(GetProducts::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Failure);
        assert_eq!(err.code(), "Product.Persistence");
    }
}
