use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};

use crate::{
    entity::{cart, cart_item},
    error::CartResult,
    models::{Cart, CartItem},
    repository::CartRepository,
};

/// PostgreSQL-backed cart store
#[derive(Clone)]
pub struct PgCartRepository {
    db: DatabaseConnection,
}

impl PgCartRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepository for PgCartRepository {
    async fn find(&self, user_id: &str) -> CartResult<Option<Cart>> {
        let Some(model) = cart::Entity::find_by_id(user_id.to_string())
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let items = cart_item::Entity::find()
            .filter(cart_item::Column::UserId.eq(user_id))
            .order_by_asc(cart_item::Column::AddedAt)
            .order_by_asc(cart_item::Column::ProductId)
            .all(&self.db)
            .await?;

        Ok(Some(Cart {
            user_id: model.user_id,
            items: items.into_iter().map(CartItem::from).collect(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }))
    }

    async fn save(&self, cart: &Cart) -> CartResult<()> {
        let txn = self.db.begin().await?;

        let header = cart::ActiveModel {
            user_id: Set(cart.user_id.clone()),
            created_at: Set(cart.created_at.into()),
            updated_at: Set(cart.updated_at.into()),
        };
        cart::Entity::insert(header)
            .on_conflict(
                OnConflict::column(cart::Column::UserId)
                    .update_column(cart::Column::UpdatedAt)
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        cart_item::Entity::delete_many()
            .filter(cart_item::Column::UserId.eq(cart.user_id.as_str()))
            .exec(&txn)
            .await?;

        if !cart.items.is_empty() {
            let items = cart.items.iter().map(cart_item::ActiveModel::from);
            cart_item::Entity::insert_many(items)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        tracing::debug!(user_id = %cart.user_id, items = cart.items.len(), "Saved cart");
        Ok(())
    }
}
