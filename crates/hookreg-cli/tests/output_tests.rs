// Rust guideline compliant 2026-02-06

//! Tests for the output formatters.

use hookreg_cli::output::{create_formatter, JsonFormatter, OutputFormatter, PlainFormatter};
use hookreg_core::{Hook, OutputFormat, Registry, Repository};

fn sample_registry() -> Registry {
    let mut mypy = Hook::new("mypy");
    mypy.additional_dependencies = vec!["types-requests".to_string()];
    mypy.exclude = Some("^docs/".to_string());

    Registry::new(vec![
        Repository::new(
            "https://github.com/astral-sh/ruff-pre-commit",
            "v0.6.9",
            vec![Hook::new("ruff"), Hook::new("ruff-format")],
        ),
        Repository::new(
            "https://github.com/pre-commit/mirrors-mypy",
            "v1.13.0",
            vec![mypy],
        ),
    ])
}

#[test]
fn test_json_list_is_valid_json() {
    let registry = sample_registry();
    let output = JsonFormatter.format_list(&registry);

    let value: serde_json::Value = serde_json::from_str(&output).expect("Output should be JSON");
    assert_eq!(value["total"], 2);
    assert_eq!(value["hooks"], 3);
    assert_eq!(value["repos"][0]["rev"], "v0.6.9");
}

#[test]
fn test_json_repo_round_trips_fields() {
    let registry = sample_registry();
    let repo = registry.find_repo("mirrors-mypy").unwrap();
    let output = JsonFormatter.format_repo(repo);

    let value: serde_json::Value = serde_json::from_str(&output).expect("Output should be JSON");
    assert_eq!(value["hooks"][0]["id"], "mypy");
    assert_eq!(value["hooks"][0]["exclude"], "^docs/");
}

#[test]
fn test_table_list_contains_headers_and_hooks() {
    let registry = sample_registry();
    let formatter = create_formatter(OutputFormat::Table, false);
    let output = formatter.format_list(&registry);

    assert!(output.contains("Repository"));
    assert!(output.contains("Revision"));
    assert!(output.contains("ruff-format"));
    assert!(output.contains("mypy"));
}

#[test]
fn test_table_list_empty_registry() {
    let formatter = create_formatter(OutputFormat::Table, false);
    let output = formatter.format_list(&Registry::default());
    assert_eq!(output, "No repositories in manifest.");
}

#[test]
fn test_table_repo_shows_filters() {
    let registry = sample_registry();
    let repo = registry.find_repo("mirrors-mypy").unwrap();
    let formatter = create_formatter(OutputFormat::Table, false);
    let output = formatter.format_repo(repo);

    assert!(output.contains("https://github.com/pre-commit/mirrors-mypy"));
    assert!(output.contains("v1.13.0"));
    assert!(output.contains("types-requests"));
    assert!(output.contains("^docs/"));
}

#[test]
fn test_plain_list_one_line_per_hook() {
    let registry = sample_registry();
    let output = PlainFormatter.format_list(&registry);
    assert_eq!(output.lines().count(), registry.hook_count());
}

#[test]
fn test_format_error_mentions_message() {
    for format in [OutputFormat::Json, OutputFormat::Table, OutputFormat::Plain] {
        let formatter = create_formatter(format, false);
        let output = formatter.format_error("revision missing");
        assert!(output.contains("revision missing"));
    }
}
