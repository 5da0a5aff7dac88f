// Rust guideline compliant 2026-02-06

//! Implementation of the `hookreg validate` command.

use crate::output::OutputFormatter;
use crate::terminal::print_success;
use anyhow::Result;
use hookreg_core::Registry;
use std::path::Path;

/// Validates the manifest and reports the result.
///
/// # Arguments
///
/// * `manifest` - Path to the manifest file
/// * `formatter` - Output formatter for failure reporting
///
/// # Returns
///
/// Ok if the manifest is valid; the process exit code communicates the result.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read or is malformed.
pub fn execute(manifest: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    match Registry::load(manifest) {
        Ok(registry) => {
            print_success(&format!(
                "{} is valid: {} repositories, {} hooks",
                manifest.display(),
                registry.len(),
                registry.hook_count()
            ));
            Ok(())
        }
        Err(err) => {
            println!("{}", formatter.format_error(&err.to_string()));
            anyhow::bail!("Manifest validation failed")
        }
    }
}
