// Quizbank - local question bank
// Author single-choice, multiple-choice and open questions, answer them, and manage them

pub mod cli;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use error::{QuizError, QuizResult};
pub use models::{AnswerInput, AnswerState, AnswerValue, Question, QuestionType, QuizbankConfig};
pub use services::{AnswerBoard, QuestionEditor, QuestionService, SubmitOutcome};
pub use store::{JsonFileStore, MemoryStore, QuestionStore};
