use super::{QuestionStore, StoreError, StoreResult};
use crate::models::Question;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Collection stored as a JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> StoreResult<&Path> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(parent),
            Some(_) => Ok(Path::new(".")),
            None => Err(StoreError::InvalidPath(format!(
                "{} has no parent directory",
                self.path.display()
            ))),
        }
    }
}

impl QuestionStore for JsonFileStore {
    fn load(&self) -> StoreResult<Vec<Question>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No question storage yet");
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.path)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let records = match serde_json::from_slice::<Vec<serde_json::Value>>(&bytes) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Malformed question storage, treating it as empty"
                );
                return Ok(Vec::new());
            }
        };

        // One bad record must not hide the rest of the collection
        let total = records.len();
        let questions: Vec<Question> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(question) => Some(question),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed question record");
                    None
                }
            })
            .collect();

        tracing::debug!(count = questions.len(), skipped = total - questions.len(), "Loaded questions");
        Ok(questions)
    }

    /// Atomic write: temp file in the same directory, then persist over the target
    fn save(&mut self, questions: &[Question]) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(questions)?;

        let parent = self.parent_dir()?;
        fs::create_dir_all(parent)?;

        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        tracing::debug!(count = questions.len(), path = %self.path.display(), "Saved questions");
        Ok(())
    }
}
