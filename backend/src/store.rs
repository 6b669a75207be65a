use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::Mutex;
use uuid::Uuid;
use shared::models::*;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Failed to acquire store lock")]
    LockFailed,
}

// `last_evaluated_key` is only set on a full page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanPage<T> {
    pub items: Vec<T>,
    pub last_evaluated_key: Option<Uuid>,
}

impl<T> ScanPage<T> {
    pub(crate) fn new(items: Vec<T>, last_key: Option<Uuid>, scanned: usize, limit: usize) -> Self {
        Self {
            items,
            last_evaluated_key: if scanned >= limit { last_key } else { None },
        }
    }
}

#[rocket::async_trait]
pub trait VoteStore: Send + Sync + 'static {
    async fn put_vote(&self, record: &VoteRecord) -> Result<(), StoreError>;

    async fn scan_votes(
        &self,
        start_after: Option<Uuid>,
        limit: usize,
    ) -> Result<ScanPage<VoteOption>, StoreError>;

    async fn scan_ids(
        &self,
        start_after: Option<Uuid>,
        limit: usize,
    ) -> Result<ScanPage<Uuid>, StoreError>;

    async fn delete_votes(&self, ids: &[Uuid]) -> Result<u64, StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    votes: Mutex<BTreeMap<Uuid, VoteRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.votes.lock().map_err(|_| StoreError::LockFailed)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.len().map(|n| n == 0)
    }

    pub fn records(&self) -> Result<Vec<VoteRecord>, StoreError> {
        let votes = self.votes.lock().map_err(|_| StoreError::LockFailed)?;
        Ok(votes.values().cloned().collect())
    }

    fn scan<T>(
        &self,
        start_after: Option<Uuid>,
        limit: usize,
        project: impl Fn(&VoteRecord) -> T,
    ) -> Result<ScanPage<T>, StoreError> {
        let votes = self.votes.lock().map_err(|_| StoreError::LockFailed)?;
        let lower = match start_after {
            Some(id) => Bound::Excluded(id),
            None => Bound::Unbounded,
        };

        let page: Vec<_> = votes
            .range((lower, Bound::Unbounded))
            .take(limit)
            .map(|(id, record)| (*id, project(record)))
            .collect();

        let last_key = page.last().map(|(id, _)| *id);
        let scanned = page.len();
        let items = page.into_iter().map(|(_, item)| item).collect();
        Ok(ScanPage::new(items, last_key, scanned, limit))
    }
}

#[rocket::async_trait]
impl VoteStore for MemoryStore {
    async fn put_vote(&self, record: &VoteRecord) -> Result<(), StoreError> {
        let mut votes = self.votes.lock().map_err(|_| StoreError::LockFailed)?;
        votes.insert(record.id, record.clone());
        Ok(())
    }

    async fn scan_votes(
        &self,
        start_after: Option<Uuid>,
        limit: usize,
    ) -> Result<ScanPage<VoteOption>, StoreError> {
        self.scan(start_after, limit, |record| record.option)
    }

    async fn scan_ids(
        &self,
        start_after: Option<Uuid>,
        limit: usize,
    ) -> Result<ScanPage<Uuid>, StoreError> {
        self.scan(start_after, limit, |record| record.id)
    }

    async fn delete_votes(&self, ids: &[Uuid]) -> Result<u64, StoreError> {
        let mut votes = self.votes.lock().map_err(|_| StoreError::LockFailed)?;
        Ok(ids.iter().filter(|id| votes.remove(*id).is_some()).count() as u64)
    }
}
