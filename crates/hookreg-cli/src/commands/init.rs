// Rust guideline compliant 2026-02-06

//! Implementation of the `hookreg init` command.
//!
//! Initializes a project by writing a starter manifest and a default
//! tool configuration.

use anyhow::Result;
use hookreg_core::{Config, Hook, Registry, Repository};
use std::path::Path;

/// Initializes a hookreg project.
///
/// Writes a starter `hooks.toml` manifest and a default `.hookreg.toml`
/// configuration. Existing files are left untouched.
///
/// # Arguments
///
/// * `root` - Path to the project root
///
/// # Returns
///
/// Ok if initialization was successful, Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The manifest file cannot be written
/// - The configuration file cannot be written
pub fn execute(root: &Path) -> Result<()> {
    let config = Config::default();

    // Create starter manifest (only if it doesn't exist)
    let manifest_path = root.join(&config.manifest_file);
    if !manifest_path.exists() {
        starter_registry().save(&manifest_path)?;
        println!("✓ Created {}", manifest_path.display());
    } else {
        println!("  {} already exists, skipping", manifest_path.display());
    }

    // Create default .hookreg.toml (only if it doesn't exist)
    let config_path = root.join(".hookreg.toml");
    if !config_path.exists() {
        config.save(root)?;
        println!("✓ Created {}", config_path.display());
    } else {
        println!("  {} already exists, skipping", config_path.display());
    }

    Ok(())
}

/// Builds the starter registry written by `init`.
fn starter_registry() -> Registry {
    Registry::new(vec![Repository::new(
        "https://github.com/astral-sh/ruff-pre-commit",
        "v0.6.9",
        vec![Hook::new("ruff"), Hook::new("ruff-format")],
    )])
}
