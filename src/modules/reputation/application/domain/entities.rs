use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The capacity the ratee was judged in for a given transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RatingRole {
    Seller,
    Buyer,
}

impl RatingRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingRole::Seller => "SELLER",
            RatingRole::Buyer => "BUYER",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "SELLER" => Some(RatingRole::Seller),
            "BUYER" => Some(RatingRole::Buyer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Rating {
    pub id: Uuid,
    pub rater_id: Uuid,
    pub ratee_id: Uuid,
    pub role: RatingRole,
    /// 1..=5 inclusive.
    pub score: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
