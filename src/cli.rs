use clap::Parser;
use std::path::PathBuf;

/// Pre-commit YAML checker – find duplicate mapping keys and parse errors.
#[derive(Parser, Debug)]
#[command(name = "yamlcheck", version, about)]
pub struct Cli {
    /// Directory to scan recursively for .yml/.yaml files.
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,
}
