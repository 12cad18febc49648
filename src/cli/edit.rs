use super::{fill_editor, open_service, submit_editor, warn_not_found};
use crate::models::QuestionType;
use crate::services::QuestionEditor;
use crate::Result;
use std::path::Path;

/// Load an existing question into the editor, apply flags, and save
pub fn run(
    project_root: &Path,
    id: &str,
    question: Option<String>,
    question_type: Option<QuestionType>,
    options: Vec<String>,
) -> Result<()> {
    let mut service = open_service(project_root)?;

    let Some(mut editor) = QuestionEditor::load(&service, id)? else {
        warn_not_found(id);
        return Ok(());
    };

    fill_editor(&mut editor, question, question_type, options);
    submit_editor(&editor, &mut service)
}
