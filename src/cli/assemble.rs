use clap::Parser;
use std::path::PathBuf;

/// Arguments for the assemble command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Assemble with defaults:\n    launchpack assemble\n\n\
                   Override a property for this run:\n    launchpack assemble -D engine.version=2.4.0\n\n\
                   Use a different descriptor input:\n    launchpack assemble --bundle-list base/bundles.yaml\n\n\
                   Skip the configuration archive:\n    launchpack assemble --skip-config")]
pub struct AssembleArgs {
    /// Existing bundle list descriptor to extend
    #[arg(long, value_name = "PATH", default_value = "bundles.yaml")]
    pub bundle_list: PathBuf,

    /// Project manifest supplying dependencies and properties
    #[arg(long, value_name = "PATH", default_value = "launchpack.yaml")]
    pub manifest: PathBuf,

    /// Output directory for all produced files
    #[arg(long, short = 'o', value_name = "DIR", default_value = "dist")]
    pub output_dir: PathBuf,

    /// Common properties file
    #[arg(long, value_name = "PATH", default_value = "sling/common.properties")]
    pub common_properties: PathBuf,

    /// Common bootstrap script
    #[arg(long, value_name = "PATH", default_value = "sling/common.bootstrap.txt")]
    pub common_bootstrap: PathBuf,

    /// Webapp properties file
    #[arg(long, value_name = "PATH", default_value = "sling/webapp.properties")]
    pub webapp_properties: PathBuf,

    /// Webapp bootstrap script
    #[arg(long, value_name = "PATH", default_value = "sling/webapp.bootstrap.txt")]
    pub webapp_bootstrap: PathBuf,

    /// Standalone properties file
    #[arg(long, value_name = "PATH", default_value = "sling/standalone.properties")]
    pub standalone_properties: PathBuf,

    /// Standalone bootstrap script
    #[arg(long, value_name = "PATH", default_value = "sling/standalone.bootstrap.txt")]
    pub standalone_bootstrap: PathBuf,

    /// Free-form configuration directory
    #[arg(long, value_name = "DIR", default_value = "config")]
    pub config_dir: PathBuf,

    /// Skip configuration packaging even when inputs exist
    #[arg(long)]
    pub skip_config: bool,

    /// Define a session property (KEY=VALUE, repeatable)
    #[arg(long = "define", short = 'D', value_name = "KEY=VALUE")]
    pub defines: Vec<String>,
}
