//! Init command - write an example crawlsight.toml

use crate::config::{CONFIG_FILE, EXAMPLE_CONFIG};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join(CONFIG_FILE);
    if config_path.exists() {
        println!(
            "{} {} already exists, leaving it untouched",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&config_path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).cyan()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_example() {
        let dir = tempdir().expect("tempdir");
        run(dir.path()).expect("init");
        let written = std::fs::read_to_string(dir.path().join(CONFIG_FILE)).expect("read");
        assert_eq!(written, EXAMPLE_CONFIG);
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[fetch]\ntimeout_secs = 3\n").expect("write");
        run(dir.path()).expect("init");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            "[fetch]\ntimeout_secs = 3\n"
        );
    }

    #[test]
    fn test_init_rejects_missing_dir() {
        let dir = tempdir().expect("tempdir");
        assert!(run(&dir.path().join("nope")).is_err());
    }
}
