//! Launchpack - bundle list assembler
//!
//! A command line tool that assembles a deployable bundle-list descriptor
//! for a launcher runtime and packages per-environment configuration files
//! into a companion archive, registering both as build outputs.

use clap::Parser;

mod archive;
mod artifact;
mod assembly;
mod cli;
mod commands;
mod common;
mod descriptor;
mod error;
mod operations;
mod progress;
mod project;
mod properties;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assemble(args) => commands::assemble::run(cli.workspace, args, cli.verbose),
        Commands::Show(args) => commands::show::run(cli.workspace, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
