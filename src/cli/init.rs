use crate::models::config::CONFIG_PATH;
use crate::models::QuizbankConfig;
use crate::store::{JsonFileStore, QuestionStore};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Write the default config and an empty collection
pub fn run(project_root: &Path, force: bool) -> Result<()> {
    let config_path = project_root.join(CONFIG_PATH);

    let config = if config_path.exists() && !force {
        println!(
            "{}",
            format!("• {} already exists, keeping it (use --force to reset)", CONFIG_PATH).yellow()
        );
        QuizbankConfig::load(project_root)?
    } else {
        let config = QuizbankConfig::default();
        config.save(project_root)?;
        println!("{}", format!("✓ Wrote {}", CONFIG_PATH).green());
        config
    };

    let storage_path = config.storage_path(project_root);
    if storage_path.exists() {
        println!(
            "{}",
            format!("• {} already exists, leaving questions untouched", storage_path.display()).yellow()
        );
    } else {
        JsonFileStore::new(&storage_path).save(&[])?;
        println!("{}", format!("✓ Created {}", storage_path.display()).green());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_config_and_storage() {
        let temp_dir = TempDir::new().unwrap();
        run(temp_dir.path(), false).unwrap();

        assert!(temp_dir.path().join(CONFIG_PATH).exists());
        let storage = temp_dir.path().join("quizbank/questions.json");
        assert_eq!(std::fs::read_to_string(storage).unwrap().trim(), "[]");
    }

    #[test]
    fn test_init_keeps_existing_questions() {
        let temp_dir = TempDir::new().unwrap();
        run(temp_dir.path(), false).unwrap();

        let storage = temp_dir.path().join("quizbank/questions.json");
        std::fs::write(&storage, r#"[{"id":"1","question":"Q","questionType":"open"}]"#).unwrap();

        run(temp_dir.path(), true).unwrap();
        assert!(std::fs::read_to_string(&storage).unwrap().contains("\"Q\""));
    }
}
