pub use sea_orm_migration::prelude::*;

mod m20250612_091504_create_users_table;
mod m20250613_142217_create_catalog_tables;
mod m20250616_101340_create_orders_table;
mod m20250616_153908_create_ratings_table;
mod m20250618_120455_create_preference_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250612_091504_create_users_table::Migration),
            Box::new(m20250613_142217_create_catalog_tables::Migration),
            Box::new(m20250616_101340_create_orders_table::Migration),
            Box::new(m20250616_153908_create_ratings_table::Migration),
            Box::new(m20250618_120455_create_preference_tables::Migration),
        ]
    }
}
