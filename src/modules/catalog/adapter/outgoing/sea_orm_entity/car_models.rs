use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "car_models")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::car_brands::Entity",
        from = "Column::BrandId",
        to = "super::car_brands::Column::Id"
    )]
    CarBrand,
}

impl Related<super::car_brands::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CarBrand.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
