use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

/// Id selections are stored as JSON arrays; an empty array means
/// "no filter on this dimension".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct IdList(pub Vec<i32>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "preferences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub odometer_min: Option<i32>,
    pub odometer_max: Option<i32>,
    #[sea_orm(column_type = "Json")]
    pub fuel_type_ids: IdList,
    #[sea_orm(column_type = "Json")]
    pub transmission_type_ids: IdList,
    #[sea_orm(column_type = "Json")]
    pub model_ids: IdList,
    #[sea_orm(column_type = "Json")]
    pub brand_ids: IdList,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
