use super::{open_service, print_json, print_question, warn_not_found};
use crate::Result;
use std::path::Path;

pub fn run(project_root: &Path, id: &str, json: bool) -> Result<()> {
    let service = open_service(project_root)?;

    match service.get_by_id(id)? {
        Some(question) if json => print_json(&question)?,
        Some(question) => print_question(&question),
        None => warn_not_found(id),
    }

    Ok(())
}
