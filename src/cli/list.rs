use super::{format_answer, open_service, print_json, summary_line};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Management view: every question, newest first
pub fn run(project_root: &Path, json: bool) -> Result<()> {
    let service = open_service(project_root)?;
    let questions = service.list_recent_first()?;

    if json {
        return print_json(&questions);
    }

    println!("{}", "📋 Questions".cyan());

    if questions.is_empty() {
        println!("{}", "No questions yet. Run 'quizbank add' to create one.".yellow());
        return Ok(());
    }

    for question in &questions {
        println!("   {}", summary_line(question));
        if question.is_answered() {
            println!("      {} {}", "→".green(), format_answer(question));
        }
    }
    println!("\nTotal: {} question(s)", questions.len());

    Ok(())
}
