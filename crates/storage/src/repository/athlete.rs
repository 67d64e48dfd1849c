use sqlx::{PgExecutor, PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::dto::athlete::{UpdateAthleteRequest, to_column_scale};
use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::{Athlete, AthleteRecord};

const RECORD_SELECT: &str = r#"
    SELECT a.athlete_id, a.name, a.age, a.weight, a.height, a.sex, a.created_at,
           c.name AS category_name,
           tc.name AS training_center_name
    FROM athletes a
    JOIN categories c ON a.category_id = c.category_id
    JOIN training_centers tc ON a.training_center_id = tc.training_center_id
"#;

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List one page of athletes ordered by name
    pub async fn list(&self, pagination: &PaginationParams) -> Result<Vec<AthleteRecord>> {
        let query = format!("{RECORD_SELECT} ORDER BY a.name, a.created_at LIMIT $1 OFFSET $2");

        let athletes = sqlx::query_as::<_, AthleteRecord>(&query)
            .bind(pagination.limit())
            .bind(pagination.offset())
            .fetch_all(self.pool)
            .await?;

        Ok(athletes)
    }

    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM athletes")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<AthleteRecord> {
        fetch_record(self.pool, id, false).await
    }

    /// Insert a fully built athlete inside the caller's transaction
    pub async fn insert(tx: &mut Transaction<'_, Postgres>, athlete: &Athlete) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO athletes (
                athlete_id, name, age, weight, height, sex, created_at,
                category_id, training_center_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(athlete.athlete_id)
        .bind(&athlete.name)
        .bind(athlete.age)
        .bind(athlete.weight)
        .bind(athlete.height)
        .bind(&athlete.sex)
        .bind(athlete.created_at)
        .bind(athlete.category_id)
        .bind(athlete.training_center_id)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Apply the fields present in `req`, keeping the existing values for the rest.
    ///
    /// Read, write and re-read share one transaction with the row locked.
    pub async fn update(&self, id: Uuid, req: &UpdateAthleteRequest) -> Result<AthleteRecord> {
        let mut tx = self.pool.begin().await?;

        let existing = fetch_record(&mut *tx, id, true).await?;

        let name = req.name.as_ref().unwrap_or(&existing.name);
        let age = req.age.unwrap_or(existing.age);
        let weight = req.weight.map(to_column_scale).unwrap_or(existing.weight);
        let height = req.height.map(to_column_scale).unwrap_or(existing.height);
        let sex = req.sex.as_ref().unwrap_or(&existing.sex);

        sqlx::query(
            r#"
            UPDATE athletes
            SET name = $2,
                age = $3,
                weight = $4,
                height = $5,
                sex = $6
            WHERE athlete_id = $1
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(age)
        .bind(weight)
        .bind(height)
        .bind(sex)
        .execute(&mut *tx)
        .await?;

        let updated = fetch_record(&mut *tx, id, false).await?;
        tx.commit().await?;

        Ok(updated)
    }

    /// Delete an athlete by ID
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

async fn fetch_record<'e, E>(executor: E, id: Uuid, lock: bool) -> Result<AthleteRecord>
where
    E: PgExecutor<'e>,
{
    let query = if lock {
        format!("{RECORD_SELECT} WHERE a.athlete_id = $1 FOR UPDATE OF a")
    } else {
        format!("{RECORD_SELECT} WHERE a.athlete_id = $1")
    };

    sqlx::query_as::<_, AthleteRecord>(&query)
        .bind(id)
        .fetch_optional(executor)
        .await?
        .ok_or(StorageError::NotFound)
}
