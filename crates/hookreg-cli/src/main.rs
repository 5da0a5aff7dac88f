// Rust guideline compliant 2026-02-06

//! Hookreg CLI Application
//!
//! Command-line interface for the hookreg manifest loader.

use clap::Parser;
use hookreg_core::{Config, OutputFormat};
use std::path::{Path, PathBuf};

pub mod commands;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;

#[derive(Parser, Debug)]
#[command(
    name = "hookreg",
    version,
    about = "Hookreg: declarative hook registry manifests",
    long_about = "Hookreg loads, validates, and inspects the hook registry manifest consumed by a pre-commit style hook runner. It stores repository entries in TOML with pinned revisions and never executes hooks itself.",
    after_help = "Examples:\n  hookreg init\n  hookreg list\n  hookreg show ruff-pre-commit\n  hookreg validate\n  hookreg doctor\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Manifest file path (overrides configuration)
    #[arg(long, global = true)]
    manifest: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormatArg {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a starter manifest and tool configuration
    Init,

    /// List every hook activation in execution order
    List,

    /// Show one repository entry
    Show {
        /// Repository source location (full or trailing path segment)
        repo: String,
    },

    /// Validate the manifest
    Validate,

    /// Report advisory findings (mutable pins, duplicate hooks)
    Doctor,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let root = Path::new(".");
    let config = Config::load(root)?;

    // Determine output format and color usage
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormatArg::Json) => OutputFormat::Json,
        Some(OutputFormatArg::Table) => OutputFormat::Table,
        Some(OutputFormatArg::Plain) => OutputFormat::Plain,
        None => {
            if cli.json {
                OutputFormat::Json
            } else {
                config.output_format
            }
        }
    };
    let formatter = create_formatter(format, use_color);

    let manifest_path = cli
        .manifest
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.manifest_file));

    match cli.command {
        Some(Commands::Init) => {
            commands::init::execute(root)?;
        }
        Some(Commands::List) => {
            commands::list::execute(&manifest_path, formatter.as_ref())?;
        }
        Some(Commands::Show { repo }) => {
            commands::show::execute(&manifest_path, &repo, formatter.as_ref())?;
        }
        Some(Commands::Validate) => {
            commands::validate::execute(&manifest_path, formatter.as_ref())?;
        }
        Some(Commands::Doctor) => {
            commands::doctor::execute(&manifest_path, &config)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
