use crate::{
    db::DbPool,
    error::AppError,
    models::trip::{TripRecord, TripSource},
};

/// Listing never returns more than this many records.
pub const LIST_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct TripStore {
    db: DbPool,
}

impl TripStore {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub async fn insert(&self, record: &TripRecord) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO trips (id, user_identifier, prompt, plan_text, saved_at, source, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )
        .bind(&record.id)
        .bind(&record.user_identifier)
        .bind(&record.prompt)
        .bind(&record.plan_text)
        .bind(record.saved_at)
        .bind(record.source)
        .bind(record.created_at)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    /// Newest-first manual saves for one identifier, capped at [`LIST_LIMIT`].
    pub async fn list_manual(&self, user_identifier: &str) -> Result<Vec<TripRecord>, AppError> {
        let records = sqlx::query_as::<_, TripRecord>(
            "SELECT id, user_identifier, prompt, plan_text, saved_at, source, created_at \
             FROM trips \
             WHERE user_identifier = ?1 AND source = ?2 \
             ORDER BY created_at DESC \
             LIMIT ?3",
        )
        .bind(user_identifier)
        .bind(TripSource::Manual)
        .bind(LIST_LIMIT)
        .fetch_all(&self.db)
        .await?;
        Ok(records)
    }
}
