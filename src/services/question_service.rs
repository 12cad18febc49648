//! Question service - CRUD over the persisted collection
//!
//! Every mutation loads the full collection, changes it, and writes it back.
//! The service is the only component that talks to the store.

use crate::error::QuizResult;
use crate::models::question::newest_first;
use crate::models::Question;
use crate::store::QuestionStore;
use chrono::Utc;

pub struct QuestionService<S> {
    store: S,
}

impl<S: QuestionStore> QuestionService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Full collection in stored order
    pub fn list(&self) -> QuizResult<Vec<Question>> {
        Ok(self.store.load()?)
    }

    /// Management view: newest `createdAt` first, ties in stored order
    pub fn list_recent_first(&self) -> QuizResult<Vec<Question>> {
        let mut questions = self.list()?;
        questions.sort_by(|a, b| newest_first(a.created_at_time(), b.created_at_time()));
        Ok(questions)
    }

    /// First question with the given id
    pub fn get_by_id(&self, id: &str) -> QuizResult<Option<Question>> {
        Ok(self.list()?.into_iter().find(|q| q.id == id))
    }

    /// Assign the next id, prepend, and persist
    pub fn create(&mut self, mut payload: Question) -> QuizResult<Question> {
        let mut questions = self.list()?;

        payload.id = next_id(&questions);
        if payload.created_at.is_empty() {
            payload.created_at = Utc::now().to_rfc3339();
        }

        questions.insert(0, payload.clone());
        self.store.save(&questions)?;

        tracing::info!(id = %payload.id, question_type = %payload.question_type, "Created question");
        Ok(payload)
    }

    /// Replace the question with `id` by `payload` as given
    ///
    /// Returns `false` without writing when no question has that id.
    pub fn update(&mut self, id: &str, payload: Question) -> QuizResult<bool> {
        let mut questions = self.list()?;

        let Some(index) = questions.iter().position(|q| q.id == id) else {
            tracing::debug!(id, "Update skipped, question not found");
            return Ok(false);
        };

        questions[index] = payload;
        self.store.save(&questions)?;

        tracing::info!(id, "Updated question");
        Ok(true)
    }

    /// Replace the question with `id` and move it to the front of the collection
    ///
    /// Returns `false` without writing when no question has that id.
    pub fn move_to_front(&mut self, id: &str, payload: Question) -> QuizResult<bool> {
        let mut questions = self.list()?;

        let Some(index) = questions.iter().position(|q| q.id == id) else {
            tracing::debug!(id, "Move skipped, question not found");
            return Ok(false);
        };

        questions.remove(index);
        questions.insert(0, payload);
        self.store.save(&questions)?;

        tracing::info!(id, "Updated question and moved it to the front");
        Ok(true)
    }

    /// Remove the question with `id`
    ///
    /// Returns `false` without writing when no question has that id.
    pub fn delete_by_id(&mut self, id: &str) -> QuizResult<bool> {
        let mut questions = self.list()?;

        let Some(index) = questions.iter().position(|q| q.id == id) else {
            tracing::debug!(id, "Delete skipped, question not found");
            return Ok(false);
        };

        questions.remove(index);
        self.store.save(&questions)?;

        tracing::info!(id, "Deleted question");
        Ok(true)
    }
}

/// Next id: one past the largest numeric id
///
/// Ids that are not numbers, or that have no successor, count as 0.
pub fn next_id(questions: &[Question]) -> String {
    let max = questions
        .iter()
        .filter_map(|q| q.id.trim().parse::<u64>().ok())
        .filter(|n| n.checked_add(1).is_some())
        .max()
        .unwrap_or(0);

    (max + 1).to_string()
}
