//! Assemble command implementation

use std::collections::BTreeMap;
use std::path::PathBuf;

use console::Style;

use crate::assembly::ConfigInputs;
use crate::cli::AssembleArgs;
use crate::commands::{resolve_path, resolve_workspace};
use crate::error::{LaunchpackError, Result};
use crate::operations::assemble::{AssembleOutputs, AssembleRequest};

pub fn run(workspace: Option<PathBuf>, args: AssembleArgs, verbose: bool) -> Result<()> {
    let root = resolve_workspace(workspace)?;
    let defines = parse_defines(&args.defines)?;

    let request = AssembleRequest {
        bundle_list_path: resolve_path(&root, &args.bundle_list),
        manifest_path: resolve_path(&root, &args.manifest),
        output_dir: resolve_path(&root, &args.output_dir),
        config_inputs: ConfigInputs {
            common_properties: resolve_path(&root, &args.common_properties),
            common_bootstrap: resolve_path(&root, &args.common_bootstrap),
            webapp_properties: resolve_path(&root, &args.webapp_properties),
            webapp_bootstrap: resolve_path(&root, &args.webapp_bootstrap),
            standalone_properties: resolve_path(&root, &args.standalone_properties),
            standalone_bootstrap: resolve_path(&root, &args.standalone_bootstrap),
            config_dir: resolve_path(&root, &args.config_dir),
        },
        skip_config: args.skip_config,
        defines,
        show_progress: verbose,
    };

    let outputs = crate::operations::assemble::run(&request)?;
    display_outputs(&outputs, args.skip_config);

    Ok(())
}

/// Parse repeatable KEY=VALUE definitions
fn parse_defines(raw: &[String]) -> Result<BTreeMap<String, String>> {
    let mut defines = BTreeMap::new();

    for value in raw {
        let Some((key, val)) = value.split_once('=') else {
            return Err(LaunchpackError::InvalidDefine {
                value: value.clone(),
            });
        };
        if key.is_empty() {
            return Err(LaunchpackError::InvalidDefine {
                value: value.clone(),
            });
        }
        defines.insert(key.to_string(), val.to_string());
    }

    Ok(defines)
}

fn display_outputs(outputs: &AssembleOutputs, skip_config: bool) {
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    println!(
        "{} {} ({} entries, {} merged)",
        bold.apply_to("Bundle list:"),
        outputs.descriptor_path.display(),
        outputs.total_entries,
        outputs.merged,
    );

    match &outputs.archive_path {
        Some(archive) => {
            println!(
                "{} {} ({} staged)",
                bold.apply_to("Configuration:"),
                archive.display(),
                outputs.staged_copies,
            );
        }
        None if skip_config => {
            println!("{}", dim.apply_to("Configuration packaging skipped"));
        }
        None => {
            println!(
                "{}",
                dim.apply_to("No configuration inputs present, nothing to package")
            );
        }
    }

    println!(
        "{} {}",
        bold.apply_to("Artifacts:"),
        outputs.registry_path.display()
    );
}
