use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub athlete_id: Uuid,
    pub name: String,
    pub age: i32,
    pub weight: Decimal,
    pub height: Decimal,
    pub sex: String,
    pub created_at: chrono::NaiveDateTime,
    pub category_id: Uuid,
    pub training_center_id: Uuid,
}

/// Athlete row joined with the names of its category and training center
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AthleteRecord {
    pub athlete_id: Uuid,
    pub name: String,
    pub age: i32,
    pub weight: Decimal,
    pub height: Decimal,
    pub sex: String,
    pub created_at: chrono::NaiveDateTime,
    pub category_name: String,
    pub training_center_name: String,
}
