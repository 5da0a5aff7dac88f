// Rust guideline compliant 2026-02-06

//! Registry loader for hookreg manifests.
//!
//! This module provides functionality for reading and writing the hook
//! registry manifest (TOML), with validation and order-preserving access.

use crate::{Error, Repository, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An ordered registry of hook repositories.
///
/// Entry order is significant: it defines the order in which the external
/// runner executes hooks. The registry is loaded once per invocation and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Registry {
    /// Repository entries in execution order.
    repos: Vec<Repository>,
}

impl Registry {
    /// Creates a registry from repository entries.
    ///
    /// # Arguments
    ///
    /// * `repos` - Repository entries in execution order
    pub fn new(repos: Vec<Repository>) -> Self {
        Self { repos }
    }

    /// Parses and validates a registry from a TOML document.
    ///
    /// # Arguments
    ///
    /// * `input` - The manifest document text
    ///
    /// # Returns
    ///
    /// The validated registry.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedConfig` if the document is not valid TOML,
    /// lacks the top-level `repos` sequence, or fails validation.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let registry: Registry = toml::from_str(input)
            .map_err(|e| Error::MalformedConfig(format!("Invalid manifest: {}", e)))?;
        registry.validate()?;
        Ok(registry)
    }

    /// Loads and validates a registry from a manifest file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the manifest file
    ///
    /// # Returns
    ///
    /// The validated registry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The document fails parsing or validation
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes the registry back to its TOML document form.
    ///
    /// Loading the returned document yields an identical registry.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedConfig` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::MalformedConfig(format!("Failed to serialize manifest: {}", e)))
    }

    /// Writes the registry to a manifest file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the manifest file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates every repository entry.
    ///
    /// An empty registry is valid. Each present entry must carry a
    /// non-empty source location, a non-empty revision, and at least one
    /// hook activation with a non-empty identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedConfig` on the first violation.
    pub fn validate(&self) -> Result<()> {
        for repo in &self.repos {
            repo.validate()?;
        }
        Ok(())
    }

    /// Returns the number of repository entries.
    pub fn len(&self) -> usize {
        self.repos.len()
    }

    /// Returns true if the registry has no repository entries.
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Iterates repository entries in execution order.
    pub fn iter(&self) -> impl Iterator<Item = &Repository> {
        self.repos.iter()
    }

    /// Iterates all hook activations in execution order, with their repository.
    pub fn hooks(&self) -> impl Iterator<Item = (&Repository, &crate::Hook)> {
        self.repos
            .iter()
            .flat_map(|repo| repo.hooks.iter().map(move |hook| (repo, hook)))
    }

    /// Returns the total number of hook activations.
    pub fn hook_count(&self) -> usize {
        self.repos.iter().map(|repo| repo.hooks.len()).sum()
    }

    /// Finds a repository entry by source location.
    ///
    /// Matches the exact location first. Failing that, matches the trailing
    /// path segment of the location, but only when exactly one entry matches.
    ///
    /// # Arguments
    ///
    /// * `name` - Full source location or trailing path segment
    pub fn find_repo(&self, name: &str) -> Option<&Repository> {
        if let Some(repo) = self.repos.iter().find(|repo| repo.repo == name) {
            return Some(repo);
        }

        let mut matches = self.repos.iter().filter(|repo| repo.short_name() == name);
        match (matches.next(), matches.next()) {
            (Some(repo), None) => Some(repo),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Hook;

    const MINIMAL: &str = r#"
[[repos]]
repo = "https://github.com/astral-sh/ruff-pre-commit"
rev = "v0.6.9"

[[repos.hooks]]
id = "ruff"
"#;

    #[test]
    fn test_parse_minimal_manifest() {
        let registry = Registry::from_toml_str(MINIMAL).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.hook_count(), 1);
        let repo = registry.iter().next().unwrap();
        assert_eq!(repo.rev, "v0.6.9");
        assert_eq!(repo.hooks[0].id, "ruff");
        assert!(repo.hooks[0].additional_dependencies.is_empty());
        assert!(repo.hooks[0].exclude.is_none());
    }

    #[test]
    fn test_empty_repos_sequence_is_valid() {
        let registry = Registry::from_toml_str("repos = []\n").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_missing_repos_key_fails() {
        let err = Registry::from_toml_str("").unwrap_err();
        assert!(matches!(err, Error::MalformedConfig(_)));
    }

    #[test]
    fn test_missing_rev_fails() {
        let doc = r#"
[[repos]]
repo = "https://github.com/astral-sh/ruff-pre-commit"

[[repos.hooks]]
id = "ruff"
"#;
        let err = Registry::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, Error::MalformedConfig(_)));
    }

    #[test]
    fn test_missing_hook_id_fails() {
        let doc = r#"
[[repos]]
repo = "https://github.com/astral-sh/ruff-pre-commit"
rev = "v0.6.9"

[[repos.hooks]]
args = ["--fix"]
"#;
        let err = Registry::from_toml_str(doc).unwrap_err();
        assert!(matches!(err, Error::MalformedConfig(_)));
    }

    #[test]
    fn test_invalid_toml_fails() {
        let err = Registry::from_toml_str("repos = [").unwrap_err();
        assert!(matches!(err, Error::MalformedConfig(_)));
    }

    #[test]
    fn test_find_repo_exact_and_short() {
        let registry = Registry::from_toml_str(MINIMAL).unwrap();
        assert!(registry
            .find_repo("https://github.com/astral-sh/ruff-pre-commit")
            .is_some());
        assert!(registry.find_repo("ruff-pre-commit").is_some());
        assert!(registry.find_repo("mypy").is_none());
    }

    #[test]
    fn test_find_repo_ambiguous_short_name() {
        let registry = Registry::new(vec![
            Repository::new("https://github.com/a/hooks", "v1", vec![Hook::new("x")]),
            Repository::new("https://github.com/b/hooks", "v2", vec![Hook::new("y")]),
        ]);
        assert!(registry.find_repo("hooks").is_none());
        assert!(registry.find_repo("https://github.com/a/hooks").is_some());
    }
}
