//! Storage backends implementing [`LinkRepository`].

pub mod memory;
pub mod postgres;

pub use linkbio_core::{LinkRepository, StorageError};
pub use memory::InMemoryRepository;
pub use postgres::PostgresRepository;
