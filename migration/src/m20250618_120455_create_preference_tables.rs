use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per user, replaced wholesale on save
        manager
            .create_table(
                Table::create()
                    .table(Preferences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Preferences::UserId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Preferences::YearMin).integer())
                    .col(ColumnDef::new(Preferences::YearMax).integer())
                    .col(ColumnDef::new(Preferences::PriceMin).big_integer())
                    .col(ColumnDef::new(Preferences::PriceMax).big_integer())
                    .col(ColumnDef::new(Preferences::OdometerMin).integer())
                    .col(ColumnDef::new(Preferences::OdometerMax).integer())
                    .col(
                        ColumnDef::new(Preferences::FuelTypeIds)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Preferences::TransmissionTypeIds)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Preferences::ModelIds)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Preferences::BrandIds)
                            .json_binary()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_preferences_user_id")
                            .from(Preferences::Table, Preferences::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WishlistCars::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WishlistCars::UserId).uuid().not_null())
                    .col(ColumnDef::new(WishlistCars::CarId).uuid().not_null())
                    .col(
                        ColumnDef::new(WishlistCars::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(WishlistCars::UserId)
                            .col(WishlistCars::CarId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_cars_user_id")
                            .from(WishlistCars::Table, WishlistCars::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_cars_car_id")
                            .from(WishlistCars::Table, WishlistCars::CarId)
                            .to(CarListings::Table, CarListings::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Who wishlisted a given car
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_wishlist_cars_car_id
                ON wishlist_cars (car_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_wishlist_cars_car_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(WishlistCars::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Preferences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Preferences {
    Table,
    UserId,
    YearMin,
    YearMax,
    PriceMin,
    PriceMax,
    OdometerMin,
    OdometerMax,
    FuelTypeIds,
    TransmissionTypeIds,
    ModelIds,
    BrandIds,
}

#[derive(DeriveIden)]
enum WishlistCars {
    Table,
    UserId,
    CarId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum CarListings {
    Table,
    Id,
}
