// Rust guideline compliant 2026-02-06

//! Implementation of the `hookreg doctor` command.
//!
//! Reports validation errors and advisory findings the hard validation
//! contract does not cover: mutable revision pins, duplicate entries.

use anyhow::Result;
use hookreg_core::{Config, Registry};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
    Info,
}

struct Finding {
    severity: Severity,
    message: String,
}

/// Executes the doctor command.
///
/// # Arguments
///
/// * `manifest` - Path to the manifest file
/// * `config` - Tool configuration
///
/// # Returns
///
/// Ok if no errors are found (warnings do not fail the run), Err otherwise.
///
/// # Errors
///
/// Returns an error if:
/// - The manifest file does not exist or cannot be read
/// - Any finding has Error severity
pub fn execute(manifest: &Path, config: &Config) -> Result<()> {
    if !manifest.exists() {
        anyhow::bail!(
            "Manifest not found at {}. Run 'hookreg init' first.",
            manifest.display()
        );
    }

    let content = std::fs::read_to_string(manifest)?;
    let mut findings = Vec::new();

    match toml::from_str::<Registry>(&content) {
        Ok(registry) => {
            for repo in registry.iter() {
                if let Err(err) = repo.validate() {
                    findings.push(Finding {
                        severity: Severity::Error,
                        message: err.to_string(),
                    });
                }
            }

            collect_mutable_rev_findings(&registry, config, &mut findings);
            collect_duplicate_findings(&registry, &mut findings);

            findings.push(Finding {
                severity: Severity::Info,
                message: format!(
                    "{} repositories, {} hook activations",
                    registry.len(),
                    registry.hook_count()
                ),
            });
        }
        Err(err) => {
            findings.push(Finding {
                severity: Severity::Error,
                message: format!("Invalid manifest: {}", err),
            });
        }
    }

    report_findings(&findings);

    if findings.iter().any(|f| f.severity == Severity::Error) {
        anyhow::bail!("Doctor found errors.");
    }

    Ok(())
}

fn collect_mutable_rev_findings(registry: &Registry, config: &Config, findings: &mut Vec<Finding>) {
    let severity = if config.allow_mutable_revs {
        Severity::Info
    } else {
        Severity::Warning
    };

    for repo in registry.iter() {
        if repo.has_mutable_rev() {
            findings.push(Finding {
                severity,
                message: format!(
                    "Repository '{}' pins mutable revision '{}'; use a tag or commit for reproducibility",
                    repo.repo, repo.rev
                ),
            });
        }
    }
}

fn collect_duplicate_findings(registry: &Registry, findings: &mut Vec<Finding>) {
    let mut seen_repos = HashSet::new();
    for repo in registry.iter() {
        if !seen_repos.insert(repo.repo.as_str()) {
            findings.push(Finding {
                severity: Severity::Warning,
                message: format!("Repository '{}' is listed more than once", repo.repo),
            });
        }
    }

    let mut seen_hooks = HashSet::new();
    for (repo, hook) in registry.hooks() {
        if !seen_hooks.insert(hook.id.as_str()) {
            findings.push(Finding {
                severity: Severity::Warning,
                message: format!(
                    "Hook id '{}' appears more than once (last in '{}')",
                    hook.id, repo.repo
                ),
            });
        }
    }
}

fn report_findings(findings: &[Finding]) {
    if findings.is_empty() {
        println!("Doctor: no issues found.");
        return;
    }

    println!("Doctor findings:");
    for finding in findings {
        let label = match finding.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        };
        println!("[{}] {}", label, finding.message);
    }
}
