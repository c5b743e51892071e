//! # anonbox-core
//!
//! Domain layer containing entities, value objects, store traits, and submission validation.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Attachment, MessageRecord, NewMessage};
pub use error::DomainError;
pub use traits::{BlobStore, MessageStore, StoreResult};
pub use validation::{
    is_allowed_mime, validate_file, validate_file_count, validate_text, MAX_FILES,
    MAX_FILE_BYTES, MAX_TEXT_CHARS,
};
pub use value_objects::{
    format_file_size, wib_now, CategoryFilter, MediaCategory, ParseCategoryFilterError,
};
