use super::{QuestionStore, StoreResult};
use crate::models::Question;

/// In-memory store, used by tests and when embedding the library
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    questions: Vec<Question>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions,
            saves: 0,
        }
    }

    /// Number of times the collection has been written
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl QuestionStore for MemoryStore {
    fn load(&self) -> StoreResult<Vec<Question>> {
        Ok(self.questions.clone())
    }

    fn save(&mut self, questions: &[Question]) -> StoreResult<()> {
        self.questions = questions.to_vec();
        self.saves += 1;
        Ok(())
    }
}
