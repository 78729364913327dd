use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::CartItem;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(schema_name = "storefront", table_name = "cart_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    pub product_name: String,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub unit_price: Decimal,
    pub quantity: i32,
    pub added_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cart::Entity",
        from = "Column::UserId",
        to = "super::cart::Column::UserId",
        on_delete = "Cascade"
    )]
    Cart,
}

impl Related<super::cart::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CartItem {
    fn from(model: Model) -> Self {
        Self {
            user_id: model.user_id,
            product_id: model.product_id,
            product_name: model.product_name,
            unit_price: model.unit_price,
            quantity: model.quantity,
            added_at: model.added_at.into(),
        }
    }
}

impl From<&CartItem> for ActiveModel {
    fn from(item: &CartItem) -> Self {
        ActiveModel {
            user_id: Set(item.user_id.clone()),
            product_id: Set(item.product_id),
            product_name: Set(item.product_name.clone()),
            unit_price: Set(item.unit_price),
            quantity: Set(item.quantity),
            added_at: Set(item.added_at.into()),
        }
    }
}
