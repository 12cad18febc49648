//! Service layer for quizbank
//!
//! The question service is the only component that reads or writes the
//! store. Answering and editing both go through it, and the CLI commands are
//! thin wrappers around these services.

pub mod answer_service;
pub mod editor_service;
pub mod question_service;

// Re-export commonly used types
pub use answer_service::{answer_fits, validate_answer, AnswerBoard};
pub use editor_service::{QuestionEditor, SubmitOutcome};
pub use question_service::{next_id, QuestionService};
