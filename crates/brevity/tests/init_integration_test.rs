//! Integration tests for the init command

use anyhow::Result;
use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_init_creates_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .map_err(|_| anyhow::anyhow!("non-utf8 path"))?;

    let config_path = temp_path.join(".brevity.toml");
    assert!(!config_path.exists());

    // Run init command
    brevity::init::run_init(brevity::cli::InitArgs {
        path: temp_path.clone(),
        force: false,
    })?;

    // Verify file was created
    assert!(config_path.exists());

    // Verify content is valid TOML
    let content = fs::read_to_string(&config_path)?;
    let _parsed: toml::Value = toml::from_str(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_without_force_if_exists() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .map_err(|_| anyhow::anyhow!("non-utf8 path"))?;

    let config_path = temp_path.join(".brevity.toml");

    // Create existing file
    fs::write(&config_path, "# existing content\n")?;

    // Attempt init without --force should fail
    let result = brevity::init::run_init(brevity::cli::InitArgs {
        path: temp_path.clone(),
        force: false,
    });

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("already exists"));

    // Original content should be preserved
    let content = fs::read_to_string(&config_path)?;
    assert_eq!(content, "# existing content\n");

    Ok(())
}

#[test]
fn test_init_overwrites_with_force() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .map_err(|_| anyhow::anyhow!("non-utf8 path"))?;

    let config_path = temp_path.join(".brevity.toml");

    // Create existing file
    fs::write(&config_path, "# old content\n")?;

    // Init with --force should succeed
    brevity::init::run_init(brevity::cli::InitArgs {
        path: temp_path.clone(),
        force: true,
    })?;

    // Content should be replaced
    let content = fs::read_to_string(&config_path)?;
    assert!(content.contains("[rule.closure_body_length]"));
    assert!(!content.contains("# old content"));

    Ok(())
}

#[test]
fn test_init_fails_on_nonexistent_directory() {
    let nonexistent = Utf8PathBuf::from("/nonexistent/path/that/does/not/exist");

    let result = brevity::init::run_init(brevity::cli::InitArgs {
        path: nonexistent,
        force: false,
    });

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("does not exist"));
}

#[test]
fn test_init_creates_loadable_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .map_err(|_| anyhow::anyhow!("non-utf8 path"))?;

    brevity::init::run_init(brevity::cli::InitArgs {
        path: temp_path.clone(),
        force: false,
    })?;

    let config_path = temp_path.join(".brevity.toml");
    let config = brevity_core::BrevityConfig::from_file(config_path.as_std_path())?;
    assert!(config.is_enabled("closure_body_length"));

    let settings = config
        .rule_settings("closure_body_length")
        .expect("rule configured");
    assert_eq!(settings.warning, Some(20));
    assert_eq!(settings.error, Some(100));
    assert!(settings.levels.is_none());

    // Reporting settings in the same file load too
    let cli_config = brevity::config::load_config(Some(&config_path))?;
    assert_eq!(cli_config.format, None);
    assert_eq!(cli_config.strict, None);

    Ok(())
}

#[test]
fn test_init_with_current_directory_default() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let temp_path = Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .map_err(|_| anyhow::anyhow!("non-utf8 path"))?;

    // Change to temp directory
    let original_dir = std::env::current_dir()?;
    std::env::set_current_dir(&temp_path)?;

    // Run init with default path (".")
    let result = brevity::init::run_init(brevity::cli::InitArgs {
        path: Utf8PathBuf::from("."),
        force: false,
    });

    // Restore original directory
    std::env::set_current_dir(original_dir)?;

    result?;

    // Verify file was created
    let config_path = temp_path.join(".brevity.toml");
    assert!(config_path.exists());

    Ok(())
}
