//! CLI commands
//!
//! Each command opens the question service for the project root and prints
//! the result. Nothing here touches the storage file directly.

pub mod add;
pub mod answer;
pub mod board;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;

use crate::models::{AnswerState, Question, QuizbankConfig, ValidationErrors};
use crate::services::{QuestionEditor, QuestionService, SubmitOutcome};
use crate::store::{JsonFileStore, QuestionStore};
use crate::{QuizError, QuizResult, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

/// Open the question service configured for a project
pub fn open_service(project_root: &Path) -> Result<QuestionService<JsonFileStore>> {
    let config = QuizbankConfig::load(project_root)?;
    let path = config.storage_path(project_root);
    tracing::debug!(path = %path.display(), "Opening question storage");
    Ok(QuestionService::new(JsonFileStore::new(path)))
}

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line summary: id, type and text
pub(crate) fn summary_line(question: &Question) -> String {
    format!(
        "{} {} {}",
        format!("#{}", question.id).bold(),
        format!("[{}]", question.question_type).dimmed(),
        question.question
    )
}

/// Answer rendered for display
pub(crate) fn format_answer(question: &Question) -> String {
    match question.answer_state() {
        AnswerState::Unanswered => "-".dimmed().to_string(),
        AnswerState::Single(choice) => choice,
        AnswerState::Open(text) => text,
        AnswerState::Multiple(choices) => {
            let selected: Vec<_> = question
                .option_labels()
                .filter(|label| choices.get(*label).copied().unwrap_or(false))
                .collect();
            selected.join(", ")
        }
    }
}

/// Full detail block for a single question
pub(crate) fn print_question(question: &Question) {
    println!("{}", summary_line(question));

    for option in question.option_labels() {
        println!("   • {}", option);
    }

    if !question.created_at.is_empty() {
        println!("   {} {}", "Created:".dimmed(), question.created_at);
    }

    if question.is_answered() {
        println!("   {} {}", "Answer:".green(), format_answer(question));
        if let Some(answered_at) = &question.answered_at {
            println!("   {} {}", "Answered:".dimmed(), answered_at);
        }
    } else {
        println!("   {}", "Unanswered".yellow());
    }
}

/// Inline field errors, one per line
pub(crate) fn print_validation_errors(errors: &ValidationErrors) {
    println!("{}", "✗ Not saved, please fix:".red());
    for error in &errors.errors {
        println!("   {} {}", format!("{}:", error.field).red(), error.message);
    }
}

/// Report a missing question as a warning, not a failure
pub(crate) fn warn_not_found(id: &str) {
    println!("{}", format!("⚠ Question '{}' not found", id).yellow());
}

/// Fill an editor from command-line values
///
/// Options given for an open question stay in the draft so validation rejects them.
pub(crate) fn fill_editor(
    editor: &mut QuestionEditor,
    question: Option<String>,
    question_type: Option<crate::QuestionType>,
    options: Vec<String>,
) {
    if let Some(text) = question {
        editor.set_question(text);
    }
    if let Some(question_type) = question_type {
        editor.set_question_type(question_type);
    }
    if !options.is_empty() {
        editor.set_options(options);
    }
}

/// Submit an editor and print the outcome
pub(crate) fn submit_editor<S: QuestionStore>(
    editor: &QuestionEditor,
    service: &mut QuestionService<S>,
) -> Result<()> {
    match report_validation(editor.submit(service))? {
        Some(SubmitOutcome::Created(question)) => {
            println!("{}", format!("✓ Created question #{}", question.id).green());
        }
        Some(SubmitOutcome::Updated(question)) => {
            println!("{}", format!("✓ Updated question #{}", question.id).green());
        }
        Some(SubmitOutcome::Missing(id)) => warn_not_found(&id),
        None => {}
    }
    Ok(())
}

/// Turn validation failures and lookup misses into printed messages
///
/// Returns `Ok(None)` when the failure was reported, so callers exit cleanly.
pub(crate) fn report_validation<T>(result: QuizResult<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(QuizError::Validation(errors)) => {
            print_validation_errors(&errors);
            Ok(None)
        }
        Err(QuizError::NotFound(id)) => {
            warn_not_found(&id);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
