// Rust guideline compliant 2026-02-06

//! Implementation of the `hookreg show` command.

use crate::output::OutputFormatter;
use anyhow::Result;
use hookreg_core::{Error, Registry};
use std::path::Path;

/// Shows one repository entry from the manifest.
///
/// # Arguments
///
/// * `manifest` - Path to the manifest file
/// * `name` - Repository source location, full or trailing path segment
/// * `formatter` - Output formatter for the selected format
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded or no entry matches.
pub fn execute(manifest: &Path, name: &str, formatter: &dyn OutputFormatter) -> Result<()> {
    let registry = Registry::load(manifest)?;

    match registry.find_repo(name) {
        Some(repo) => {
            println!("{}", formatter.format_repo(repo));
            Ok(())
        }
        None => Err(Error::NotFound(name.to_string()).into()),
    }
}
