use super::{fill_editor, open_service, submit_editor};
use crate::models::QuestionType;
use crate::services::QuestionEditor;
use crate::Result;
use dialoguer::{Confirm, Input, Select};
use std::path::Path;

const TYPES: [QuestionType; 3] = [QuestionType::Single, QuestionType::Multiple, QuestionType::Open];

/// Create a question from flags, or interactively when no text is given
pub fn run(
    project_root: &Path,
    question: Option<String>,
    question_type: Option<QuestionType>,
    options: Vec<String>,
) -> Result<()> {
    let mut service = open_service(project_root)?;
    let mut editor = QuestionEditor::new();

    if question.is_some() {
        fill_editor(&mut editor, question, question_type, options);
    } else {
        prompt_editor(&mut editor)?;
    }

    submit_editor(&editor, &mut service)
}

/// Interactive editor: text, type, then one prompt per option slot
fn prompt_editor(editor: &mut QuestionEditor) -> Result<()> {
    let text: String = Input::new()
        .with_prompt("Question")
        .interact_text()?;
    editor.set_question(text);

    let labels: Vec<&str> = TYPES.iter().map(|t| t.name()).collect();
    let selection = Select::new()
        .with_prompt("Type")
        .items(&labels)
        .default(0)
        .interact()?;
    let question_type = TYPES[selection];
    editor.set_question_type(question_type);

    if !question_type.has_options() {
        return Ok(());
    }

    let mut index = 0;
    loop {
        while index < editor.options().len() {
            let option: String = Input::new()
                .with_prompt(format!("Option {}", index + 1))
                .allow_empty(true)
                .interact_text()?;
            editor.set_option(index, option);
            index += 1;
        }

        let more = Confirm::new()
            .with_prompt("Add another option?")
            .default(false)
            .interact()?;
        if !more {
            break;
        }
        editor.add_option();
    }

    Ok(())
}
