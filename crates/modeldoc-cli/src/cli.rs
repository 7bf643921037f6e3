//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use modeldoc_core::DocumentFormat;
use std::path::PathBuf;

/// Modeldoc CLI - Documentation tables for data models and route handlers
///
/// Reads a manifest describing models or controllers and renders their
/// documentation as Markdown, CSV, JSON or YAML.
#[derive(Parser, Debug)]
#[command(
    name = "modeldoc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MODELDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Document the models described in a manifest
    Model(ExportArgs),

    /// Document the controllers described in a manifest
    Controller(ExportArgs),

    /// List the supported output formats
    Formats,

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments shared by the model and controller commands
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Path to the type manifest (YAML or JSON)
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Output format (defaults to the configured format, then markdown)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Only document the named types, in the given order
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub types: Vec<String>,

    /// XML documentation file used as description fallback
    #[arg(long = "xml-doc", value_name = "PATH")]
    pub xml_doc: Option<PathBuf>,

    /// Save the document into this directory instead of printing it
    #[arg(long = "save-to", value_name = "DIR")]
    pub save_to: Option<PathBuf>,

    /// File name used with --save-to
    #[arg(long, value_name = "NAME")]
    pub file_name: Option<String>,

    /// Append to the saved file instead of overwriting it
    #[arg(long)]
    pub append: bool,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Document output formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Markdown table
    Markdown,
    /// Comma-separated table
    Csv,
    /// Indented JSON with PascalCase keys
    Json,
    /// YAML with camelCase keys
    Yaml,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<FormatArg> for DocumentFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Markdown => DocumentFormat::Markdown,
            FormatArg::Csv => DocumentFormat::Csv,
            FormatArg::Json => DocumentFormat::Json,
            FormatArg::Yaml => DocumentFormat::Yaml,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
