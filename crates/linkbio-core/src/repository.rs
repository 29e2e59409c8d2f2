use crate::error::StorageError;
use crate::link::{Link, LinkId, NewLink};
use async_trait::async_trait;

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Persistence contract for [`Link`]s.
///
/// Each operation is a single round trip to the store. Operations addressing
/// a row by id return [`StorageError::NotFound`] when no row matches.
#[async_trait]
pub trait LinkRepository: Send + Sync + 'static {
    /// Returns every link, newest first. An empty store yields an empty vec.
    async fn list_all(&self) -> Result<Vec<Link>>;

    /// Retrieves the link with the given id.
    async fn get_by_id(&self, id: LinkId) -> Result<Link>;

    /// Inserts a link and returns it with the store-assigned `id` and
    /// `created_at` populated.
    async fn create(&self, link: NewLink) -> Result<Link>;

    /// Replaces the title and url of an existing link. `created_at` is kept.
    async fn update(&self, id: LinkId, link: NewLink) -> Result<Link>;

    /// Hard-deletes the link with the given id.
    async fn delete(&self, id: LinkId) -> Result<()>;
}
