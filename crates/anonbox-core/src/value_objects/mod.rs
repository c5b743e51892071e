//! Value objects - small immutable domain types and pure helpers

mod clock;
mod file_size;
mod media_category;

pub use clock::wib_now;
pub use file_size::format_file_size;
pub use media_category::{CategoryFilter, MediaCategory, ParseCategoryFilterError};
