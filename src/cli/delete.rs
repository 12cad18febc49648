use super::{open_service, warn_not_found};
use crate::Result;
use colored::Colorize;
use dialoguer::Confirm;
use std::path::Path;

/// Delete a question after confirmation
pub fn run(project_root: &Path, id: &str, yes: bool) -> Result<()> {
    let mut service = open_service(project_root)?;

    let Some(question) = service.get_by_id(id)? else {
        warn_not_found(id);
        return Ok(());
    };

    if !yes {
        let confirm = Confirm::new()
            .with_prompt(format!("Delete question #{} \"{}\"?", question.id, question.question))
            .default(false)
            .interact()?;
        if !confirm {
            println!("{}", "Cancelled.".yellow());
            return Ok(());
        }
    }

    if service.delete_by_id(id)? {
        println!("{}", format!("✓ Deleted question #{}", id).green());
    } else {
        warn_not_found(id);
    }

    Ok(())
}
