//! Athlete registration: resolve the category and training center by name,
//! then insert the athlete in a single transaction.

use std::fmt;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::dto::athlete::{AthleteResponse, CreateAthleteRequest, to_column_scale};
use crate::error::{Result, StorageError};
use crate::models::{Athlete, Category, TrainingCenter};
use crate::repository::athlete::AthleteRepository;
use crate::repository::category::CategoryRepository;
use crate::repository::training_center::TrainingCenterRepository;

/// Which by-name reference failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Category,
    TrainingCenter,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category => write!(f, "Category"),
            Self::TrainingCenter => write!(f, "Training center"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{kind} '{name}' was not found")]
    ReferenceNotFound { kind: ReferenceKind, name: String },

    #[error("Failed to persist athlete: {0}")]
    PersistenceFailure(#[source] StorageError),
}

/// Persistence operations the registration workflow depends on
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>>;

    async fn find_training_center_by_name(&self, name: &str) -> Result<Option<TrainingCenter>>;

    /// Insert the athlete atomically: either the row is committed or nothing is visible.
    async fn insert_athlete(&self, athlete: &Athlete) -> Result<()>;
}

/// PostgreSQL-backed store; each insert runs in its own transaction
pub struct PgRegistrationStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PgRegistrationStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<'a> RegistrationStore for PgRegistrationStore<'a> {
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        CategoryRepository::new(self.pool).find_by_name(name).await
    }

    async fn find_training_center_by_name(&self, name: &str) -> Result<Option<TrainingCenter>> {
        TrainingCenterRepository::new(self.pool)
            .find_by_name(name)
            .await
    }

    async fn insert_athlete(&self, athlete: &Athlete) -> Result<()> {
        // Dropping `tx` without commit rolls the insert back.
        let mut tx = self.pool.begin().await?;
        AthleteRepository::insert(&mut tx, athlete).await?;
        tx.commit().await?;
        Ok(())
    }
}

/// Register a new athlete.
///
/// The category is resolved first, then the training center; the first
/// missing reference aborts the registration with
/// [`RegistrationError::ReferenceNotFound`] before anything is written.
/// Identifier and creation timestamp are generated here, and measurements
/// are rounded to the column scale, so the returned representation matches
/// the stored row without a re-read.
pub async fn register_athlete<S>(
    store: &S,
    request: &CreateAthleteRequest,
) -> std::result::Result<AthleteResponse, RegistrationError>
where
    S: RegistrationStore + ?Sized,
{
    let category = store
        .find_category_by_name(&request.category.name)
        .await
        .map_err(persistence_failure)?
        .ok_or_else(|| RegistrationError::ReferenceNotFound {
            kind: ReferenceKind::Category,
            name: request.category.name.clone(),
        })?;

    let training_center = store
        .find_training_center_by_name(&request.training_center.name)
        .await
        .map_err(persistence_failure)?
        .ok_or_else(|| RegistrationError::ReferenceNotFound {
            kind: ReferenceKind::TrainingCenter,
            name: request.training_center.name.clone(),
        })?;

    let athlete = Athlete {
        athlete_id: Uuid::new_v4(),
        name: request.name.clone(),
        age: request.age,
        weight: to_column_scale(request.weight),
        height: to_column_scale(request.height),
        sex: request.sex.clone(),
        // TIMESTAMP keeps microseconds
        created_at: Utc::now().naive_utc().trunc_subsecs(6),
        category_id: category.category_id,
        training_center_id: training_center.training_center_id,
    };

    store
        .insert_athlete(&athlete)
        .await
        .map_err(persistence_failure)?;

    tracing::info!(
        athlete_id = %athlete.athlete_id,
        category = %category.name,
        training_center = %training_center.name,
        "Athlete registered"
    );

    Ok(AthleteResponse::from_parts(
        athlete,
        category.name,
        training_center.name,
    ))
}

fn persistence_failure(error: StorageError) -> RegistrationError {
    tracing::error!("Athlete registration failed in storage: {:?}", error);
    RegistrationError::PersistenceFailure(error)
}
