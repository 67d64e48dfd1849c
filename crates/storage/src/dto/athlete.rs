use std::borrow::Cow;

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{Athlete, AthleteRecord};

/// By-name pointer to an existing category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CategoryReference {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Category name must be between 1 and 50 characters"
    ))]
    pub name: String,
}

/// By-name pointer to an existing training center
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct TrainingCenterReference {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Training center name must be between 1 and 50 characters"
    ))]
    pub name: String,
}

/// Response containing athlete information and its resolved references
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    pub athlete_id: Uuid,
    pub created_at: NaiveDateTime,
    pub name: String,
    pub age: i32,
    pub weight: Decimal,
    pub height: Decimal,
    pub sex: String,
    pub category: CategoryReference,
    pub training_center: TrainingCenterReference,
}

/// Request payload for registering a new athlete
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAthleteRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Name must be between 1 and 50 characters"
    ))]
    pub name: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: i32,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Decimal,

    #[validate(custom(function = "validate_height"))]
    pub height: Decimal,

    #[validate(custom(function = "validate_sex"))]
    pub sex: String,

    #[validate(nested)]
    pub category: CategoryReference,

    #[validate(nested)]
    pub training_center: TrainingCenterReference,
}

/// Request payload for partially updating an athlete
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,

    #[validate(range(min = 1, max = 120))]
    pub age: Option<i32>,

    #[validate(custom(function = "validate_weight"))]
    pub weight: Option<Decimal>,

    #[validate(custom(function = "validate_height"))]
    pub height: Option<Decimal>,

    #[validate(custom(function = "validate_sex"))]
    pub sex: Option<String>,
}

fn validate_sex(sex: &str) -> Result<(), ValidationError> {
    const VALID_SEXES: &[&str] = &["M", "F"];

    if VALID_SEXES.contains(&sex) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_sex");
        error.message = Some(Cow::Borrowed("Sex must be 'M' or 'F'"));
        Err(error)
    }
}

/// Decimal places kept by the `weight` and `height` columns
const MEASUREMENT_SCALE: u32 = 2;

/// Rounds a measurement the way PostgreSQL stores it in a two-decimal `NUMERIC` column.
pub fn to_column_scale(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MEASUREMENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

fn validate_weight(value: &Decimal) -> Result<(), ValidationError> {
    validate_measurement(
        *value,
        // NUMERIC(6, 2)
        Decimal::from(10_000i32),
        "Weight must be greater than 0 and less than 10000",
    )
}

fn validate_height(value: &Decimal) -> Result<(), ValidationError> {
    validate_measurement(
        *value,
        // NUMERIC(4, 2)
        Decimal::ONE_HUNDRED,
        "Height must be greater than 0 and less than 100",
    )
}

// Bounds apply to the stored (rounded) value.
fn validate_measurement(
    value: Decimal,
    max: Decimal,
    message: &'static str,
) -> Result<(), ValidationError> {
    let stored = to_column_scale(value);

    if stored > Decimal::ZERO && stored < max {
        Ok(())
    } else {
        let mut error = ValidationError::new("out_of_range");
        error.message = Some(Cow::Borrowed(message));
        Err(error)
    }
}

impl AthleteResponse {
    /// Builds the representation of a freshly inserted athlete without re-reading it
    pub fn from_parts(
        athlete: Athlete,
        category_name: String,
        training_center_name: String,
    ) -> Self {
        Self {
            athlete_id: athlete.athlete_id,
            created_at: athlete.created_at,
            name: athlete.name,
            age: athlete.age,
            weight: athlete.weight,
            height: athlete.height,
            sex: athlete.sex,
            category: CategoryReference {
                name: category_name,
            },
            training_center: TrainingCenterReference {
                name: training_center_name,
            },
        }
    }
}

impl From<AthleteRecord> for AthleteResponse {
    fn from(record: AthleteRecord) -> Self {
        Self {
            athlete_id: record.athlete_id,
            created_at: record.created_at,
            name: record.name,
            age: record.age,
            weight: record.weight,
            height: record.height,
            sex: record.sex,
            category: CategoryReference {
                name: record.category_name,
            },
            training_center: TrainingCenterReference {
                name: record.training_center_name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> CreateAthleteRequest {
        CreateAthleteRequest {
            name: "Ana".to_string(),
            age: 25,
            weight: Decimal::new(6520, 2),
            height: Decimal::new(168, 2),
            sex: "F".to_string(),
            category: CategoryReference {
                name: "Iniciante".to_string(),
            },
            training_center: TrainingCenterReference {
                name: "CT Centro".to_string(),
            },
        }
    }

    #[test]
    fn accepts_well_formed_payload() {
        assert!(ana().validate().is_ok());
    }

    #[test]
    fn rejects_unknown_sex() {
        let mut req = ana();
        req.sex = "X".to_string();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("sex"));
    }

    #[test]
    fn rejects_non_positive_measurements() {
        let mut req = ana();
        req.weight = Decimal::ZERO;
        req.height = Decimal::new(-170, 2);

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("weight"));
        assert!(fields.contains_key("height"));
    }

    #[test]
    fn rejects_measurements_beyond_column_precision() {
        let mut req = ana();
        req.weight = Decimal::new(10_000, 0);
        req.height = Decimal::new(17_000, 2);

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("weight"));
        assert!(fields.contains_key("height"));
    }

    #[test]
    fn bounds_apply_after_rounding() {
        let mut req = ana();
        req.weight = Decimal::new(9_999_995, 3);
        assert!(req.validate().is_err());

        req.weight = Decimal::new(9_999_994, 3);
        req.height = Decimal::new(4, 3);
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(!fields.contains_key("weight"));
        assert!(fields.contains_key("height"));
    }

    #[test]
    fn column_scale_rounds_half_away_from_zero() {
        assert_eq!(to_column_scale(Decimal::new(65_555, 3)), Decimal::new(6_556, 2));
        assert_eq!(to_column_scale(Decimal::new(65_565, 3)), Decimal::new(6_557, 2));
        assert_eq!(to_column_scale(Decimal::new(168, 2)), Decimal::new(168, 2));
    }

    #[test]
    fn rejects_empty_reference_names() {
        let mut req = ana();
        req.category.name = String::new();

        let errors = req.validate().unwrap_err();
        assert!(errors.errors().contains_key("category"));
    }

    #[test]
    fn update_validates_only_present_fields() {
        assert!(UpdateAthleteRequest::default().validate().is_ok());

        let update = UpdateAthleteRequest {
            age: Some(0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn response_nests_reference_names() {
        let record = AthleteRecord {
            athlete_id: Uuid::new_v4(),
            name: "Ana".to_string(),
            age: 25,
            weight: Decimal::new(6520, 2),
            height: Decimal::new(168, 2),
            sex: "F".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
            category_name: "Iniciante".to_string(),
            training_center_name: "CT Centro".to_string(),
        };

        let json = serde_json::to_value(AthleteResponse::from(record)).unwrap();
        assert_eq!(json["category"]["name"], "Iniciante");
        assert_eq!(json["training_center"]["name"], "CT Centro");
    }
}
