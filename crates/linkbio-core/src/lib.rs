//! Core types and traits for the linkbio service.
//!
//! This crate provides the `Link` entity, its validation rules and the
//! repository contract shared by the storage backends and the HTTP gateway.

pub mod error;
pub mod link;
pub mod repository;
pub mod validation;

pub use error::{CoreError, StorageError};
pub use link::{Link, LinkId, NewLink};
pub use repository::LinkRepository;
pub use validation::{FieldError, ValidationErrors};
