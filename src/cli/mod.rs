//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - assemble: Assemble command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod assemble;
pub mod completions;
pub mod show;

pub use assemble::AssembleArgs;
pub use completions::CompletionsArgs;
pub use show::ShowArgs;

/// Launchpack - bundle list assembler
///
/// Assemble launcher bundle-list descriptors and configuration archives.
#[derive(Parser, Debug)]
#[command(
    name = "launchpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Assembles launcher bundle-list descriptors and configuration archives",
    long_about = "Launchpack merges discovered dependencies into a bundle list descriptor, \
                  resolves property placeholders, and packages per-environment configuration \
                  files into a single archive for a downstream launcher.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  launchpack assemble                      \x1b[90m# Assemble with defaults\x1b[0m\n   \
                  launchpack assemble -D engine.version=2.4.0 \x1b[90m# Override a property\x1b[0m\n   \
                  launchpack assemble --skip-config        \x1b[90m# Descriptor only, no archive\x1b[0m\n   \
                  launchpack show dist/bundles.yaml        \x1b[90m# Inspect an assembled descriptor\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "LAUNCHPACK_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble the bundle list and configuration archive
    Assemble(AssembleArgs),

    /// Show a bundle list descriptor
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
