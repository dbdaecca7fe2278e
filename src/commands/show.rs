//! Show command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::ShowArgs;
use crate::commands::{resolve_path, resolve_workspace};
use crate::descriptor::{BundleList, codec};
use crate::error::Result;

pub fn run(workspace: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let root = resolve_workspace(workspace)?;
    let path = resolve_path(
        &root,
        args.path
            .as_deref()
            .unwrap_or_else(|| std::path::Path::new("bundles.yaml")),
    );

    let list = codec::read(&path)?;

    println!();
    display_bundle_list(&path, &list, args.detailed);

    Ok(())
}

fn display_bundle_list(path: &std::path::Path, list: &BundleList, detailed: bool) {
    println!(
        "  {}",
        Style::new().bold().yellow().apply_to(path.display())
    );

    if list.start_levels.is_empty() {
        println!("    {}", Style::new().dim().apply_to("No start levels"));
        return;
    }

    for start_level in &list.start_levels {
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Start level"),
            Style::new().green().apply_to(start_level.level)
        );

        if start_level.bundles.is_empty() {
            println!("      {}", Style::new().dim().apply_to("No bundles"));
            continue;
        }

        for entry in &start_level.bundles {
            println!(
                "      - {} {}",
                Style::new()
                    .cyan()
                    .apply_to(format!("{}:{}", entry.group, entry.artifact)),
                entry.version
            );

            if detailed {
                if let Some(run_modes) = &entry.run_modes {
                    println!("        Run modes: {}", run_modes);
                }
                if let Some(level) = entry.start_level {
                    println!("        Level override: {}", level);
                }
            }
        }
    }
}
