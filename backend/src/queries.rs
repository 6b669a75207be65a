use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;
use shared::models::*;
use crate::config::TableName;
use crate::store::{ScanPage, StoreError, VoteStore};

// Table name is spliced in with format!; values are always bound.
pub struct PgVoteStore {
    pool: PgPool,
    table: TableName,
}

impl PgVoteStore {
    pub fn new(pool: PgPool, table: TableName) -> Self {
        Self { pool, table }
    }

    pub async fn ensure_table(&self) -> Result<(), StoreError> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY,
                vote TEXT NOT NULL,
                session_id TEXT NOT NULL
             )",
            self.table
        );
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }
}

fn page_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

#[rocket::async_trait]
impl VoteStore for PgVoteStore {
    async fn put_vote(&self, record: &VoteRecord) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO {} (id, vote, session_id) VALUES ($1, $2, $3)",
            self.table
        );
        sqlx::query(&sql)
            .bind(record.id)
            .bind(record.option.as_str())
            .bind(&record.session_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn scan_votes(
        &self,
        start_after: Option<Uuid>,
        limit: usize,
    ) -> Result<ScanPage<VoteOption>, StoreError> {
        let sql = format!(
            "SELECT id, vote FROM {}
             WHERE ($1::uuid IS NULL OR id > $1)
             ORDER BY id LIMIT $2",
            self.table
        );
        let rows: Vec<(Uuid, String)> = sqlx::query_as(&sql)
            .bind(start_after)
            .bind(page_limit(limit))
            .fetch_all(&self.pool)
            .await?;

        let scanned = rows.len();
        let last_key = rows.last().map(|(id, _)| *id);
        let items = rows
            .into_iter()
            .filter_map(|(id, vote)| match vote.parse::<VoteOption>() {
                Ok(option) => Some(option),
                Err(e) => {
                    warn!("Skipping record {} in {}: {}", id, self.table, e);
                    None
                }
            })
            .collect();

        debug!("Scanned {} vote rows from {}", scanned, self.table);
        Ok(ScanPage::new(items, last_key, scanned, limit))
    }

    async fn scan_ids(
        &self,
        start_after: Option<Uuid>,
        limit: usize,
    ) -> Result<ScanPage<Uuid>, StoreError> {
        let sql = format!(
            "SELECT id FROM {}
             WHERE ($1::uuid IS NULL OR id > $1)
             ORDER BY id LIMIT $2",
            self.table
        );
        let ids: Vec<Uuid> = sqlx::query_scalar(&sql)
            .bind(start_after)
            .bind(page_limit(limit))
            .fetch_all(&self.pool)
            .await?;

        let (scanned, last_key) = (ids.len(), ids.last().copied());
        Ok(ScanPage::new(ids, last_key, scanned, limit))
    }

    async fn delete_votes(&self, ids: &[Uuid]) -> Result<u64, StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = ANY($1)", self.table);
        let result = sqlx::query(&sql)
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
