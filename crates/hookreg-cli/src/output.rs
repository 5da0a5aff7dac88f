// Rust guideline compliant 2026-02-06

//! Output formatting module for the hookreg CLI.
//!
//! This module provides functionality for formatting registry data
//! in various output formats (JSON, table, plain text).

use hookreg_core::{OutputFormat, Registry, Repository};
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Defines the interface for formatting registry data in different output formats.
pub trait OutputFormatter {
    /// Formats a single repository entry for display.
    ///
    /// # Arguments
    /// * `repo` - The repository entry to format
    ///
    /// # Returns
    /// A formatted string representation of the entry
    fn format_repo(&self, repo: &Repository) -> String;

    /// Formats every hook activation in the registry for display.
    ///
    /// # Arguments
    /// * `registry` - The registry to format
    ///
    /// # Returns
    /// A formatted string representation of the registry
    fn format_list(&self, registry: &Registry) -> String;

    /// Formats an error message for display.
    ///
    /// # Arguments
    /// * `error` - The error message to format
    ///
    /// # Returns
    /// A formatted error string
    fn format_error(&self, error: &str) -> String;
}

/// JSON output formatter.
///
/// Formats registry data as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_repo(&self, repo: &Repository) -> String {
        serde_json::to_string_pretty(repo)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize repository" }).to_string())
    }

    fn format_list(&self, registry: &Registry) -> String {
        let repos: Vec<&Repository> = registry.iter().collect();
        let output = json!({
            "repos": repos,
            "total": registry.len(),
            "hooks": registry.hook_count(),
        });
        serde_json::to_string_pretty(&output)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize registry" }).to_string())
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "error": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats registry data as human-readable tables.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    ///
    /// # Returns
    /// A new TableFormatter instance
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TableFormatter {
    fn format_repo(&self, repo: &Repository) -> String {
        let mut output = String::new();

        output.push_str(&format!("Repository:  {}\n", repo.repo));
        output.push_str(&format!("Revision:    {}\n", repo.rev));

        for hook in &repo.hooks {
            output.push_str(&format!("Hook:        {}\n", hook.id));
            if !hook.additional_dependencies.is_empty() {
                output.push_str(&format!(
                    "  Dependencies: {}\n",
                    hook.additional_dependencies.join(", ")
                ));
            }
            if !hook.args.is_empty() {
                output.push_str(&format!("  Args:         {}\n", hook.args.join(" ")));
            }
            if let Some(files) = &hook.files {
                output.push_str(&format!("  Files:        {}\n", files));
            }
            if let Some(exclude) = &hook.exclude {
                output.push_str(&format!("  Exclude:      {}\n", exclude));
            }
        }

        output
    }

    fn format_list(&self, registry: &Registry) -> String {
        if registry.is_empty() {
            return "No repositories in manifest.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Repository", "Revision", "Hook"]);

        for (repo, hook) in registry.hooks() {
            builder.push_record(vec![repo.short_name(), repo.rev.as_str(), hook.id.as_str()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        if self.use_color {
            let mut buffer = Buffer::ansi();
            let _ = buffer.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
            let _ = write!(buffer, "Error: ");
            let _ = buffer.reset();
            let _ = write!(buffer, "{}", error);
            String::from_utf8_lossy(buffer.as_slice()).to_string()
        } else {
            format!("Error: {}", error)
        }
    }
}

/// Plain text output formatter.
///
/// Formats registry data as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_repo(&self, repo: &Repository) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", repo.repo));
        output.push_str(&format!("{}\n", repo.rev));
        for hook in &repo.hooks {
            output.push_str(&format!("{}\n", hook.id));
        }

        output
    }

    fn format_list(&self, registry: &Registry) -> String {
        if registry.is_empty() {
            return "No repositories in manifest.".to_string();
        }

        let mut output = String::new();
        for (repo, hook) in registry.hooks() {
            output.push_str(&format!("{} {} {}\n", repo.repo, repo.rev, hook.id));
        }
        output
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON)
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
