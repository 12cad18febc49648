use super::{format_answer, open_service, print_json, summary_line};
use crate::models::Question;
use crate::services::AnswerBoard;
use crate::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct BoardView<'a> {
    unanswered: &'a [Question],
    answered: &'a [Question],
}

/// Show the unanswered view, then the answered view
pub fn run(project_root: &Path, json: bool) -> Result<()> {
    let service = open_service(project_root)?;
    let board = AnswerBoard::load(&service)?;

    if json {
        return print_json(&BoardView {
            unanswered: board.unanswered(),
            answered: board.answered(),
        });
    }

    println!("{}", format!("❓ Unanswered ({})", board.unanswered().len()).yellow().bold());
    for question in board.unanswered() {
        println!("   {}", summary_line(question));
        for option in question.option_labels() {
            println!("      • {}", option);
        }
    }

    println!();
    println!("{}", format!("✅ Answered ({})", board.answered().len()).green().bold());
    for question in board.answered() {
        println!("   {}", summary_line(question));
        println!("      {} {}", "→".green(), format_answer(question));
    }

    Ok(())
}
