// Rust guideline compliant 2026-02-06

//! Implementation of the `hookreg list` command.

use crate::output::OutputFormatter;
use anyhow::Result;
use hookreg_core::Registry;
use std::path::Path;

/// Lists every hook activation in the manifest, in execution order.
///
/// # Arguments
///
/// * `manifest` - Path to the manifest file
/// * `formatter` - Output formatter for the selected format
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded.
pub fn execute(manifest: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    let registry = Registry::load(manifest)?;
    println!("{}", formatter.format_list(&registry));
    Ok(())
}
