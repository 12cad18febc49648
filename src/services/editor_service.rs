//! Question editor - builds and validates a question before it is saved
//!
//! The editor holds a draft: text, type and option slots. Switching into a
//! choice type with no slots opens two empty ones; switching to `open`
//! discards all slots. An open question with option text is rejected rather
//! than saved without it. Submitting routes to create or update depending on
//! whether the draft was loaded from an existing question.

use crate::error::QuizResult;
use crate::models::{AnswerValue, Question, QuestionOption, QuestionType, ValidationErrors};
use crate::services::{answer_fits, QuestionService};
use crate::store::QuestionStore;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Number of empty option slots opened when switching into a choice type
const DEFAULT_OPTION_SLOTS: usize = 2;

/// What a submit did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Question),
    Updated(Question),
    /// The edited question no longer exists; nothing was written
    Missing(String),
}

#[derive(Debug, Clone, Default)]
pub struct QuestionEditor {
    id: Option<String>,
    question: String,
    question_type: Option<QuestionType>,
    options: Vec<String>,
    created_at: Option<String>,
    // Carried over from the loaded question
    loaded_type: Option<QuestionType>,
    answer: Option<AnswerValue>,
    answered_at: Option<String>,
    updated_at: Option<String>,
}

impl QuestionEditor {
    /// Empty draft for a new question
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft for editing an existing question, `None` when the id is unknown
    pub fn load<S: QuestionStore>(service: &QuestionService<S>, id: &str) -> QuizResult<Option<Self>> {
        Ok(service.get_by_id(id)?.map(|q| Self::from_question(&q)))
    }

    pub fn from_question(question: &Question) -> Self {
        Self {
            id: Some(question.id.clone()),
            question: question.question.clone(),
            question_type: Some(question.question_type),
            options: question.option_labels().map(str::to_string).collect(),
            created_at: Some(question.created_at.clone()).filter(|c| !c.is_empty()),
            loaded_type: Some(question.question_type),
            answer: question.answer.clone(),
            answered_at: question.answered_at.clone(),
            updated_at: question.updated_at.clone(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn question_type(&self) -> Option<QuestionType> {
        self.question_type
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.question = text.into();
    }

    /// Change the type, opening or discarding option slots as needed
    pub fn set_question_type(&mut self, question_type: QuestionType) {
        self.question_type = Some(question_type);

        if !question_type.has_options() {
            self.options.clear();
        } else if self.options.is_empty() {
            self.options
                .extend(std::iter::repeat(String::new()).take(DEFAULT_OPTION_SLOTS));
        }
    }

    /// Append an empty option slot
    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    /// Set the text of an option slot, `false` when the slot does not exist
    pub fn set_option(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.options.get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    pub fn remove_option(&mut self, index: usize) -> Option<String> {
        (index < self.options.len()).then(|| self.options.remove(index))
    }

    /// Replace all option slots
    pub fn set_options<I, T>(&mut self, options: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
    }

    /// Check every field, collecting all failures
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.question.trim().is_empty() {
            errors.push("question", "Question text is required");
        }

        match self.question_type {
            None => errors.push("questionType", "Question type is required"),
            Some(question_type) if question_type.has_options() => {
                if self.options.is_empty() {
                    errors.push("options", "At least one option is required");
                }

                let mut seen = HashSet::new();
                for (index, option) in self.options.iter().enumerate() {
                    let field = format!("options[{}]", index);
                    if option.trim().is_empty() {
                        errors.push(field, "Option text is required");
                    } else if !seen.insert(option.as_str()) {
                        errors.push(field, format!("Duplicate option '{}'", option));
                    }
                }
            }
            Some(_) => {
                if !self.options.is_empty() {
                    errors.push("options", "Open questions take no options");
                }
            }
        }

        errors.into_result()
    }

    /// Build the question record without saving it
    pub fn build_at(&self, now: DateTime<Utc>) -> Result<Question, ValidationErrors> {
        self.validate()?;

        let question_type = self
            .question_type
            .ok_or_else(|| ValidationErrors::single("questionType", "Question type is required"))?;

        let mut question = Question {
            id: self.id.clone().unwrap_or_default(),
            question: self.question.clone(),
            question_type,
            options: if question_type.has_options() {
                self.options.iter().map(QuestionOption::new).collect()
            } else {
                Vec::new()
            },
            created_at: self
                .created_at
                .clone()
                .unwrap_or_else(|| now.to_rfc3339()),
            answer: None,
            answered_at: None,
            updated_at: self.updated_at.clone(),
        };

        // The stored answer survives only under the same type and current options
        if let Some(answer) = &self.answer {
            if self.loaded_type == Some(question_type) && answer_fits(&question, answer) {
                question.answer = Some(answer.clone());
                question.answered_at = self.answered_at.clone();
            } else {
                tracing::debug!(id = %question.id, "Dropping answer that no longer fits the question");
            }
        }

        Ok(question)
    }

    /// Validate and save through the question service
    pub fn submit<S: QuestionStore>(&self, service: &mut QuestionService<S>) -> QuizResult<SubmitOutcome> {
        self.submit_at(service, Utc::now())
    }

    pub fn submit_at<S: QuestionStore>(
        &self,
        service: &mut QuestionService<S>,
        now: DateTime<Utc>,
    ) -> QuizResult<SubmitOutcome> {
        let question = self.build_at(now)?;

        match &self.id {
            Some(id) => {
                if service.update(id, question.clone())? {
                    Ok(SubmitOutcome::Updated(question))
                } else {
                    tracing::warn!(id = %id, "Edited question no longer exists");
                    Ok(SubmitOutcome::Missing(id.clone()))
                }
            }
            None => Ok(SubmitOutcome::Created(service.create(question)?)),
        }
    }
}
