use super::{open_service, report_validation};
use crate::services::AnswerBoard;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Clear an answer, moving the question back to the unanswered view
pub fn run(project_root: &Path, id: &str) -> Result<()> {
    let mut service = open_service(project_root)?;
    let mut board = AnswerBoard::load(&service)?;

    if board.unanswered().iter().any(|q| q.id == id) {
        println!("{}", format!("• Question #{} has no answer to clear", id).yellow());
        return Ok(());
    }

    if let Some(question) = report_validation(board.clear(&mut service, id))? {
        println!("{}", format!("✓ Cleared answer of question #{}", question.id).green());
    }

    Ok(())
}
