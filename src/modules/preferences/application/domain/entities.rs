use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A buyer's saved search preference, one row per user. All bounds are
/// optional; a range is only constrained where both ends are given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    pub user_id: Uuid,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
    pub odometer_min: Option<i32>,
    pub odometer_max: Option<i32>,
    pub fuel_type_ids: Vec<i32>,
    pub transmission_type_ids: Vec<i32>,
    pub model_ids: Vec<i32>,
    pub brand_ids: Vec<i32>,
}

impl Preference {
    pub fn empty(user_id: Uuid) -> Self {
        Self {
            user_id,
            year_min: None,
            year_max: None,
            price_min: None,
            price_max: None,
            odometer_min: None,
            odometer_max: None,
            fuel_type_ids: Vec::new(),
            transmission_type_ids: Vec::new(),
            model_ids: Vec::new(),
            brand_ids: Vec::new(),
        }
    }
}
