// Rust guideline compliant 2026-02-06

//! Core data models for hookreg.

use serde::{Deserialize, Serialize};

/// Revision names that point at moving targets rather than pinned states.
const MUTABLE_REVS: &[&str] = &["HEAD", "head", "main", "master", "latest", "trunk", "develop"];

/// A single hook activation within a repository entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hook {
    /// Identifier of the hook, as defined by the providing repository.
    pub id: String,
    /// Extra dependency specifiers installed alongside the hook.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_dependencies: Vec<String>,
    /// Extra arguments passed to the hook by the runner.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// File-path inclusion pattern (regular expression, interpreted by the runner).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<String>,
    /// File-path exclusion pattern (regular expression, interpreted by the runner).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
}

impl Hook {
    /// Creates a hook activation with only an identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - The hook identifier
    ///
    /// # Returns
    ///
    /// A new Hook with no extra dependencies, arguments, or filters.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            additional_dependencies: Vec::new(),
            args: Vec::new(),
            files: None,
            exclude: None,
        }
    }

    /// Validates the hook activation.
    ///
    /// # Returns
    ///
    /// Ok if the hook is valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The identifier is empty
    /// - Any listed additional dependency specifier is empty
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::MalformedConfig(
                "Hook id cannot be empty".to_string(),
            ));
        }

        for dep in &self.additional_dependencies {
            if dep.trim().is_empty() {
                return Err(crate::Error::MalformedConfig(format!(
                    "Hook '{}' lists an empty additional dependency",
                    self.id
                )));
            }
        }

        Ok(())
    }
}

/// A repository entry: a hook source pinned to a revision, with its activations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Source location of the hook repository.
    pub repo: String,
    /// Pinned revision. Must reference an immutable state for reproducibility.
    pub rev: String,
    /// Hook activations, in execution order.
    pub hooks: Vec<Hook>,
}

impl Repository {
    /// Creates a repository entry.
    ///
    /// # Arguments
    ///
    /// * `repo` - Source location
    /// * `rev` - Pinned revision
    /// * `hooks` - Hook activations in execution order
    pub fn new(repo: impl Into<String>, rev: impl Into<String>, hooks: Vec<Hook>) -> Self {
        Self {
            repo: repo.into(),
            rev: rev.into(),
            hooks,
        }
    }

    /// Validates the repository entry.
    ///
    /// # Returns
    ///
    /// Ok if the entry is valid, Err otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The source location is empty
    /// - The revision is empty
    /// - No hook activation is present
    /// - Any hook activation fails validation
    pub fn validate(&self) -> crate::Result<()> {
        if self.repo.trim().is_empty() {
            return Err(crate::Error::MalformedConfig(
                "Repository source location cannot be empty".to_string(),
            ));
        }

        if self.rev.trim().is_empty() {
            return Err(crate::Error::MalformedConfig(format!(
                "Repository '{}' has an empty revision",
                self.repo
            )));
        }

        if self.hooks.is_empty() {
            return Err(crate::Error::MalformedConfig(format!(
                "Repository '{}' activates no hooks",
                self.repo
            )));
        }

        for hook in &self.hooks {
            hook.validate()?;
        }

        Ok(())
    }

    /// Returns true if the pinned revision names a well-known mutable reference.
    ///
    /// A mutable pin (branch name, HEAD) defeats reproducibility; the hard
    /// validation only requires non-emptiness, so this is surfaced as an
    /// advisory finding by `hookreg doctor`.
    pub fn has_mutable_rev(&self) -> bool {
        MUTABLE_REVS.contains(&self.rev.trim())
    }

    /// Returns the trailing path segment of the source location.
    ///
    /// Used for short-name lookups, e.g. `ruff-pre-commit` for
    /// `https://github.com/astral-sh/ruff-pre-commit`.
    pub fn short_name(&self) -> &str {
        self.repo
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.repo)
    }
}
