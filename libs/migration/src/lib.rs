pub use sea_orm_migration::prelude::*;

mod m20250827_000001_create_products;
mod m20250827_000002_create_carts;
mod m20250827_000003_seed_products;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250827_000001_create_products::Migration),
            Box::new(m20250827_000002_create_carts::Migration),
            Box::new(m20250827_000003_seed_products::Migration),
        ]
    }
}

/// Schema holding every storefront table.
#[derive(DeriveIden)]
pub(crate) enum Storefront {
    #[sea_orm(iden = "storefront")]
    Schema,
}
