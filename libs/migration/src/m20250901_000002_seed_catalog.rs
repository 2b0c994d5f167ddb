use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let connection = manager.get_connection();

        // Demo categories
        connection
            .execute_unprepared(
                r#"
            INSERT INTO categories (id, name, description)
            VALUES
                ('01990b3c-0000-7000-8000-000000000001', 'Shoes', 'Footwear for every season'),
                ('01990b3c-0000-7000-8000-000000000002', 'Hats', 'Caps, beanies and brims'),
                ('01990b3c-0000-7000-8000-000000000003', 'Accessories', NULL)
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Demo tags
        connection
            .execute_unprepared(
                r#"
            INSERT INTO tags (id, name)
            VALUES
                ('01990b3c-0000-7000-8000-000000000101', 'Sale'),
                ('01990b3c-0000-7000-8000-000000000102', 'New'),
                ('01990b3c-0000-7000-8000-000000000103', 'Eco'),
                ('01990b3c-0000-7000-8000-000000000104', 'Limited')
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Demo products with staggered creation times for the newest-first
        // default ordering
        connection
            .execute_unprepared(
                r#"
            INSERT INTO products (id, name, description, price, category_id, created_at, updated_at)
            VALUES
                (
                    '01990b3c-0000-7000-8000-000000000201',
                    'Red Running Shoes',
                    'Lightweight trainers with recycled mesh upper',
                    89.99,
                    '01990b3c-0000-7000-8000-000000000001',
                    NOW() - INTERVAL '6 days',
                    NOW() - INTERVAL '6 days'
                ),
                (
                    '01990b3c-0000-7000-8000-000000000202',
                    'Leather Boots',
                    'Waterproof boots for autumn walks',
                    149.50,
                    '01990b3c-0000-7000-8000-000000000001',
                    NOW() - INTERVAL '5 days',
                    NOW() - INTERVAL '5 days'
                ),
                (
                    '01990b3c-0000-7000-8000-000000000203',
                    'Wool Beanie',
                    'Warm merino beanie',
                    24.00,
                    '01990b3c-0000-7000-8000-000000000002',
                    NOW() - INTERVAL '4 days',
                    NOW() - INTERVAL '4 days'
                ),
                (
                    '01990b3c-0000-7000-8000-000000000204',
                    'Straw Sun Hat',
                    'Wide-brim hat for sunny days',
                    32.75,
                    '01990b3c-0000-7000-8000-000000000002',
                    NOW() - INTERVAL '3 days',
                    NOW() - INTERVAL '3 days'
                ),
                (
                    '01990b3c-0000-7000-8000-000000000205',
                    'Canvas Tote Bag',
                    'Organic cotton tote with inner pocket',
                    19.99,
                    '01990b3c-0000-7000-8000-000000000003',
                    NOW() - INTERVAL '2 days',
                    NOW() - INTERVAL '2 days'
                ),
                (
                    '01990b3c-0000-7000-8000-000000000206',
                    'Trail Sandals',
                    'Grippy sandals for river crossings',
                    54.25,
                    '01990b3c-0000-7000-8000-000000000001',
                    NOW() - INTERVAL '1 day',
                    NOW() - INTERVAL '1 day'
                )
            ON CONFLICT (id) DO NOTHING
            "#,
            )
            .await?;

        // Tag memberships
        connection
            .execute_unprepared(
                r#"
            INSERT INTO product_tags (product_id, tag_id)
            VALUES
                ('01990b3c-0000-7000-8000-000000000201', '01990b3c-0000-7000-8000-000000000101'),
                ('01990b3c-0000-7000-8000-000000000201', '01990b3c-0000-7000-8000-000000000102'),
                ('01990b3c-0000-7000-8000-000000000201', '01990b3c-0000-7000-8000-000000000103'),
                ('01990b3c-0000-7000-8000-000000000202', '01990b3c-0000-7000-8000-000000000104'),
                ('01990b3c-0000-7000-8000-000000000203', '01990b3c-0000-7000-8000-000000000101'),
                ('01990b3c-0000-7000-8000-000000000204', '01990b3c-0000-7000-8000-000000000102'),
                ('01990b3c-0000-7000-8000-000000000205', '01990b3c-0000-7000-8000-000000000103'),
                ('01990b3c-0000-7000-8000-000000000206', '01990b3c-0000-7000-8000-000000000102'),
                ('01990b3c-0000-7000-8000-000000000206', '01990b3c-0000-7000-8000-000000000103')
            ON CONFLICT (product_id, tag_id) DO NOTHING
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let connection = manager.get_connection();

        connection
            .execute_unprepared(
                "DELETE FROM products WHERE id::text LIKE '01990b3c-0000-7000-8000-%'",
            )
            .await?;
        connection
            .execute_unprepared("DELETE FROM tags WHERE id::text LIKE '01990b3c-0000-7000-8000-%'")
            .await?;
        connection
            .execute_unprepared(
                "DELETE FROM categories WHERE id::text LIKE '01990b3c-0000-7000-8000-%'",
            )
            .await?;

        Ok(())
    }
}
