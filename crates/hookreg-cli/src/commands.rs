// Rust guideline compliant 2026-02-06

//! Command implementations for the hookreg CLI.

pub mod doctor;
pub mod init;
pub mod list;
pub mod show;
pub mod validate;
