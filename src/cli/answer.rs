use super::{open_service, report_validation, warn_not_found};
use crate::models::{AnswerInput, Question, QuestionType};
use crate::services::AnswerBoard;
use crate::Result;
use colored::Colorize;
use dialoguer::{Input, MultiSelect, Select};
use std::collections::BTreeMap;
use std::path::Path;

/// Answer an unanswered question
///
/// With no values the answer is prompted for interactively.
pub fn run(project_root: &Path, id: &str, values: Vec<String>) -> Result<()> {
    let mut service = open_service(project_root)?;
    let mut board = AnswerBoard::load(&service)?;

    let Some(question) = board.find(id).cloned() else {
        warn_not_found(id);
        return Ok(());
    };

    if question.is_answered() {
        println!(
            "{}",
            format!("• Question #{} is already answered, run 'quizbank clear {}' first", id, id)
                .yellow()
        );
        return Ok(());
    }

    let input = if values.is_empty() {
        prompt_answer(&question)?
    } else {
        input_from_values(&question, values)
    };

    if let Some(answered) = report_validation(board.submit(&mut service, id, input))? {
        println!("{}", format!("✓ Answered question #{}", answered.id).green());
    }

    Ok(())
}

/// Map command-line values onto the answer shape of the question type
///
/// - single: the one value given (several values join into one label, which fails validation)
/// - multiple: the values are the selected labels, every other option is unselected
/// - open: the values joined by spaces
pub fn input_from_values(question: &Question, values: Vec<String>) -> AnswerInput {
    match question.question_type {
        QuestionType::Single => AnswerInput::Choice(values.join(" ")),
        QuestionType::Multiple => {
            let mut choices: BTreeMap<String, bool> = question
                .option_labels()
                .map(|label| (label.to_string(), false))
                .collect();
            for value in values {
                choices.insert(value, true);
            }
            AnswerInput::Choices(choices)
        }
        QuestionType::Open => AnswerInput::Text(values.join(" ")),
    }
}

fn prompt_answer(question: &Question) -> Result<AnswerInput> {
    println!("{}", question.question.bold());
    let labels: Vec<&str> = question.option_labels().collect();

    let input = match question.question_type {
        QuestionType::Single => {
            let selection = Select::new().items(&labels).default(0).interact()?;
            AnswerInput::Choice(labels[selection].to_string())
        }
        QuestionType::Multiple => {
            let selected = MultiSelect::new().items(&labels).interact()?;
            let choices = labels
                .iter()
                .enumerate()
                .map(|(index, label)| (label.to_string(), selected.contains(&index)))
                .collect();
            AnswerInput::Choices(choices)
        }
        QuestionType::Open => {
            let text: String = Input::new()
                .with_prompt("Answer")
                .allow_empty(true)
                .interact_text()?;
            AnswerInput::Text(text)
        }
    };

    Ok(input)
}
