use sqlx::PgPool;
use storage::{
    dto::category::CreateCategoryRequest, error::Result, models::Category,
    repository::category::CategoryRepository,
};
use uuid::Uuid;

pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>> {
    let repo = CategoryRepository::new(pool);
    repo.list().await
}

pub async fn get_category(pool: &PgPool, id: Uuid) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a category with a freshly generated id
pub async fn create_category(pool: &PgPool, request: &CreateCategoryRequest) -> Result<Category> {
    let repo = CategoryRepository::new(pool);
    let category = Category {
        category_id: Uuid::new_v4(),
        name: request.name.clone(),
    };

    let created = repo.create(&category).await?;
    tracing::info!(category_id = %created.category_id, name = %created.name, "Category created");
    Ok(created)
}
