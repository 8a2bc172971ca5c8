//! CLI adapter for mdslice
//!
//! Provides the command-line interface on top of the core chunking
//! engine. This module depends on `core/` but never the other way
//! around.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// mdslice - Markdown chunking for retrieval indexing
///
/// Splits markdown documents into retrieval-sized chunks and writes
/// one JSON chunk index per document.
#[derive(Parser, Debug)]
#[command(name = "mdslice")]
#[command(version)]
#[command(about = "Markdown chunking for retrieval indexing", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Slice a markdown file or directory into chunk indexes
    Slice(commands::SliceArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  mdslice completions bash > ~/.local/share/bash-completion/completions/mdslice
    ///   zsh:   mdslice completions zsh > ~/.zfunc/_mdslice
    ///   fish:  mdslice completions fish > ~/.config/fish/completions/mdslice.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::xdg::XdgDirs;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;
    xdg.log_paths();

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    match cli.command {
        Commands::Slice(args) => commands::slice::execute(args, config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, &xdg, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
