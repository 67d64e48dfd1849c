use sqlx::PgPool;
use storage::{
    dto::training_center::CreateTrainingCenterRequest, error::Result, models::TrainingCenter,
    repository::training_center::TrainingCenterRepository,
};
use uuid::Uuid;

pub async fn list_training_centers(pool: &PgPool) -> Result<Vec<TrainingCenter>> {
    let repo = TrainingCenterRepository::new(pool);
    repo.list().await
}

pub async fn get_training_center(pool: &PgPool, id: Uuid) -> Result<TrainingCenter> {
    let repo = TrainingCenterRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a training center with a freshly generated id
pub async fn create_training_center(
    pool: &PgPool,
    request: &CreateTrainingCenterRequest,
) -> Result<TrainingCenter> {
    let repo = TrainingCenterRepository::new(pool);
    let center = TrainingCenter {
        training_center_id: Uuid::new_v4(),
        name: request.name.clone(),
        address: request.address.clone(),
        owner: request.owner.clone(),
    };

    let created = repo.create(&center).await?;
    tracing::info!(
        training_center_id = %created.training_center_id,
        name = %created.name,
        "Training center created"
    );
    Ok(created)
}
