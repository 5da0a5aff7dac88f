// Rust guideline compliant 2026-02-06

//! Hookreg Core Library
//!
//! This crate provides the foundational components for the hookreg manifest loader:
//! - Data models (Repository, Hook)
//! - Registry loader (TOML read/write, validation, ordered access)
//! - Tool configuration
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod models;
pub mod registry;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use models::{Hook, Repository};
pub use registry::Registry;
