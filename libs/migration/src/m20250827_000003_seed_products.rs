use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO storefront.products (id, name, description, price, created_at, updated_at)
            VALUES
                (1, 'Sample Product 1', 'A sample product', 19.99, NOW() - INTERVAL '5 days', NOW() - INTERVAL '5 days'),
                (2, 'Sample Product 2', 'Another sample product', 29.99, NOW() - INTERVAL '3 days', NOW() - INTERVAL '3 days'),
                (3, 'Sample Product 3', 'Yet another sample product', 39.99, NOW() - INTERVAL '1 day', NOW() - INTERVAL '1 day')
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .await?;

        // Explicit ids bypass the sequence; move it past them.
        db.execute_unprepared(
            r#"
            SELECT setval(
                pg_get_serial_sequence('storefront.products', 'id'),
                GREATEST((SELECT MAX(id) FROM storefront.products), 1)
            )
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM storefront.products WHERE id IN (1, 2, 3)")
            .await?;

        Ok(())
    }
}
