//! Question storage
//!
//! The whole collection lives in a single storage slot and is always read and
//! written as a unit:
//! - `JsonFileStore` keeps it in one JSON file on disk
//! - `MemoryStore` keeps it in memory

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::models::Question;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur when reading or writing the collection
///
/// Malformed content is not an error: stores return an empty collection instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to access question storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize questions: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid storage path: {0}")]
    InvalidPath(String),
}

/// Backend holding the persisted question collection
pub trait QuestionStore {
    /// Load the full collection in stored order
    ///
    /// Missing or malformed content yields an empty collection.
    fn load(&self) -> StoreResult<Vec<Question>>;

    /// Overwrite the stored collection entirely
    fn save(&mut self, questions: &[Question]) -> StoreResult<()>;
}
