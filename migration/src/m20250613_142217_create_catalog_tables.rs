use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Reference tables
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CarBrands::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CarBrands::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CarBrands::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CarModels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CarModels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CarModels::BrandId).integer().not_null())
                    .col(ColumnDef::new(CarModels::Name).string_len(100).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_models_brand_id")
                            .from(CarModels::Table, CarModels::BrandId)
                            .to(CarBrands::Table, CarBrands::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FuelTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FuelTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FuelTypes::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TransmissionTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TransmissionTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TransmissionTypes::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // A model name repeats across brands but not within one
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_car_models_brand_name
                ON car_models (brand_id, name);
                "#,
            )
            .await?;

        // =====================================================
        // Listings
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CarListings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CarListings::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CarListings::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(CarListings::Year).integer().not_null())
                    .col(ColumnDef::new(CarListings::ModelId).integer().not_null())
                    .col(ColumnDef::new(CarListings::FuelTypeId).integer().not_null())
                    .col(
                        ColumnDef::new(CarListings::TransmissionTypeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CarListings::RegistrationNo)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CarListings::Odometer).integer().not_null())
                    .col(ColumnDef::new(CarListings::Price).double().not_null())
                    .col(
                        ColumnDef::new(CarListings::Condition)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CarListings::Status)
                            .string_len(20)
                            .not_null()
                            .default("AVAILABLE"),
                    )
                    .col(
                        ColumnDef::new(CarListings::PrevOwnerCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(CarListings::Location)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CarListings::Description).text().not_null())
                    .col(
                        ColumnDef::new(CarListings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_listings_owner_id")
                            .from(CarListings::Table, CarListings::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_listings_model_id")
                            .from(CarListings::Table, CarListings::ModelId)
                            .to(CarModels::Table, CarModels::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_listings_fuel_type_id")
                            .from(CarListings::Table, CarListings::FuelTypeId)
                            .to(FuelTypes::Table, FuelTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_listings_transmission_type_id")
                            .from(CarListings::Table, CarListings::TransmissionTypeId)
                            .to(TransmissionTypes::Table, TransmissionTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Seller's own listings
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_car_listings_owner_id
                ON car_listings (owner_id);
                "#,
            )
            .await?;

        // Browse queries filter on status first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_car_listings_status
                ON car_listings (status, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_car_listings_owner_id;
                DROP INDEX IF EXISTS idx_car_listings_status;
                DROP INDEX IF EXISTS idx_car_models_brand_name;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CarListings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TransmissionTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FuelTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CarModels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CarBrands::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CarBrands {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum CarModels {
    Table,
    Id,
    BrandId,
    Name,
}

#[derive(DeriveIden)]
enum FuelTypes {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum TransmissionTypes {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum CarListings {
    Table,
    Id,
    OwnerId,
    Year,
    ModelId,
    FuelTypeId,
    TransmissionTypeId,
    RegistrationNo,
    Odometer,
    Price,
    Condition,
    Status,
    PrevOwnerCount,
    Location,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
