use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use linkbio_core::error::StorageError;
use linkbio_core::repository::{LinkRepository, Result};
use linkbio_core::{Link, LinkId, NewLink};
use std::cmp::Reverse;
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory implementation of [`LinkRepository`] using DashMap.
///
/// Ids come from a monotonically increasing counter starting at 1, the
/// same way a `BIGSERIAL` column hands them out. Ids are never reused.
#[derive(Debug)]
pub struct InMemoryRepository {
    storage: DashMap<LinkId, Link>,
    next_id: AtomicI64,
}

impl InMemoryRepository {
    /// Creates a new, empty in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryRepository {
    async fn list_all(&self) -> Result<Vec<Link>> {
        let mut links: Vec<Link> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        links.sort_by_key(|link| Reverse((link.created_at, link.id)));
        Ok(links)
    }

    async fn get_by_id(&self, id: LinkId) -> Result<Link> {
        self.storage
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or(StorageError::NotFound(id))
    }

    async fn create(&self, link: NewLink) -> Result<Link> {
        let id = LinkId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let link = link.into_link(id, Timestamp::now());
        self.storage.insert(id, link.clone());
        Ok(link)
    }

    async fn update(&self, id: LinkId, link: NewLink) -> Result<Link> {
        let Some(mut entry) = self.storage.get_mut(&id) else {
            return Err(StorageError::NotFound(id));
        };

        let stored = entry.value_mut();
        stored.title = link.title().to_owned();
        stored.url = link.url().to_owned();
        Ok(stored.clone())
    }

    async fn delete(&self, id: LinkId) -> Result<()> {
        self.storage
            .remove(&id)
            .map(|_| ())
            .ok_or(StorageError::NotFound(id))
    }
}
