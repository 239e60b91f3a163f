use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "car_listings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner_id: Uuid,
    pub year: i32,
    pub model_id: i32,
    pub fuel_type_id: i32,
    pub transmission_type_id: i32,
    #[sea_orm(unique)]
    pub registration_no: String,
    pub odometer: i32,
    pub price: f64,
    pub condition: String,
    pub status: String,
    pub prev_owner_count: i32,
    pub location: String,
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::car_models::Entity",
        from = "Column::ModelId",
        to = "super::car_models::Column::Id"
    )]
    CarModel,
    #[sea_orm(
        belongs_to = "super::fuel_types::Entity",
        from = "Column::FuelTypeId",
        to = "super::fuel_types::Column::Id"
    )]
    FuelType,
    #[sea_orm(
        belongs_to = "super::transmission_types::Entity",
        from = "Column::TransmissionTypeId",
        to = "super::transmission_types::Column::Id"
    )]
    TransmissionType,
}

impl Related<super::car_models::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarModel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
