use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct CarBrand {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CarModel {
    pub id: i32,
    pub brand_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FuelType {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransmissionType {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CarCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarCondition::Excellent => "EXCELLENT",
            CarCondition::Good => "GOOD",
            CarCondition::Fair => "FAIR",
            CarCondition::Poor => "POOR",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "EXCELLENT" => Some(CarCondition::Excellent),
            "GOOD" => Some(CarCondition::Good),
            "FAIR" => Some(CarCondition::Fair),
            "POOR" => Some(CarCondition::Poor),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    Available,
    Pending,
    Sold,
    Unavailable,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Available => "AVAILABLE",
            ListingStatus::Pending => "PENDING",
            ListingStatus::Sold => "SOLD",
            ListingStatus::Unavailable => "UNAVAILABLE",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "AVAILABLE" => Some(ListingStatus::Available),
            "PENDING" => Some(ListingStatus::Pending),
            "SOLD" => Some(ListingStatus::Sold),
            "UNAVAILABLE" => Some(ListingStatus::Unavailable),
            _ => None,
        }
    }
}

/// A car offered for sale.
#[derive(Debug, Clone, Serialize)]
pub struct CarListing {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub year: i32,
    pub model_id: i32,
    pub fuel_type_id: i32,
    pub transmission_type_id: i32,
    pub registration_no: String,
    pub odometer: i32,
    pub price: f64,
    pub condition: CarCondition,
    pub status: ListingStatus,
    pub prev_owner_count: i32,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
