use sqlx::PgPool;
use storage::{
    dto::{
        athlete::{AthleteResponse, CreateAthleteRequest, UpdateAthleteRequest},
        common::PaginationParams,
    },
    error::Result,
    models::AthleteRecord,
    repository::athlete::AthleteRepository,
    services::registration::{self, PgRegistrationStore, RegistrationError},
};
use uuid::Uuid;

/// List one page of athletes together with the total count
pub async fn list_athletes(
    pool: &PgPool,
    pagination: &PaginationParams,
) -> Result<(Vec<AthleteRecord>, i64)> {
    let repo = AthleteRepository::new(pool);
    let athletes = repo.list(pagination).await?;
    let total = repo.count().await?;
    Ok((athletes, total))
}

/// Get athlete by id
pub async fn get_athlete(pool: &PgPool, id: Uuid) -> Result<AthleteRecord> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Register a new athlete against existing category and training center
pub async fn register_athlete(
    pool: &PgPool,
    request: &CreateAthleteRequest,
) -> std::result::Result<AthleteResponse, RegistrationError> {
    let store = PgRegistrationStore::new(pool);
    registration::register_athlete(&store, request).await
}

/// Update an athlete
pub async fn update_athlete(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateAthleteRequest,
) -> Result<AthleteRecord> {
    let repo = AthleteRepository::new(pool);
    repo.update(id, request).await
}

/// Delete an athlete
pub async fn delete_athlete(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await
}
