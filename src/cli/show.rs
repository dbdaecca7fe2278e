use clap::Parser;
use std::path::PathBuf;

/// Arguments for the show command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Descriptor to show (defaults to bundles.yaml in the workspace)
    pub path: Option<PathBuf>,

    /// Show per-entry details (run modes, level overrides)
    #[arg(long)]
    pub detailed: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_show_detailed() {
        let cli = super::super::Cli::try_parse_from([
            "launchpack",
            "show",
            "dist/bundles.yaml",
            "--detailed",
        ])
        .unwrap();
        match cli.command {
            super::super::Commands::Show(args) => {
                assert_eq!(args.path, Some(PathBuf::from("dist/bundles.yaml")));
                assert!(args.detailed);
            }
            _ => panic!("Expected Show command"),
        }
    }
}
