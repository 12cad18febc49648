pub mod config;
pub mod question;
pub mod validation;

pub use config::{LoggingConfig, QuizbankConfig};
pub use question::{
    AnswerInput, AnswerState, AnswerValue, Question, QuestionOption, QuestionType,
    OPEN_ANSWER_MAX_CHARS,
};
pub use validation::{FieldError, ValidationErrors};
