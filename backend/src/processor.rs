use tracing::{debug, info};
use uuid::Uuid;
use shared::{models::*, validation::validate_cast_vote, Tally};
use crate::error::ApiError;
use crate::store::{StoreError, VoteStore};

pub struct VoteProcessor;

impl VoteProcessor {
    // Repeat votes from one session are held back by the client only.
    pub async fn cast_vote(
        store: &dyn VoteStore,
        request: &CastVoteRequest,
    ) -> Result<VoteRecord, ApiError> {
        let option = validate_cast_vote(request)?;
        let session_id = request.session_id.clone().unwrap_or_default();
        let record = VoteRecord::new(option, session_id);

        store
            .put_vote(&record)
            .await
            .map_err(ApiError::Storage)?;
        Ok(record)
    }

    pub async fn tally(store: &dyn VoteStore, page_size: usize) -> Result<Tally, StoreError> {
        let mut tally = Tally::new();
        let mut cursor = None;
        let mut pages = 0usize;

        loop {
            let page = store.scan_votes(cursor, page_size).await?;
            tally.extend(page.items);
            pages += 1;

            match page.last_evaluated_key {
                Some(key) => cursor = Some(key),
                None => break,
            }
        }

        debug!("Tallied {} votes over {} pages", tally.total(), pages);
        Ok(tally)
    }

    pub async fn collect_ids(store: &dyn VoteStore, page_size: usize) -> Result<Vec<Uuid>, StoreError> {
        let mut ids = Vec::new();
        let mut cursor = None;

        loop {
            let page = store.scan_ids(cursor, page_size).await?;
            ids.extend(page.items);

            match page.last_evaluated_key {
                Some(key) => cursor = Some(key),
                None => break,
            }
        }
        Ok(ids)
    }

    // Not atomic: batches issued before a failure stay deleted.
    pub async fn reset(
        store: &dyn VoteStore,
        page_size: usize,
        batch_size: usize,
    ) -> Result<u64, StoreError> {
        let ids = Self::collect_ids(store, page_size).await?;
        if ids.is_empty() {
            debug!("Reset requested on an empty store");
            return Ok(0);
        }

        let mut deleted = 0;
        for batch in ids.chunks(batch_size.max(1)) {
            deleted += store.delete_votes(batch).await?;
        }

        info!("🗑️ Removed {} votes", deleted);
        Ok(deleted)
    }
}
