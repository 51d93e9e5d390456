mod checker;
mod cli;
mod error;
mod report;
mod scanner;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if !cli.directory.exists() {
        println!("Path not found: {}", cli.directory.display());
        std::process::exit(report::EXIT_USAGE);
    }

    let findings: Vec<_> = scanner::collect_yaml_files(&cli.directory)
        .into_iter()
        .filter_map(|path| match checker::check_file(&path) {
            Ok(()) => None,
            Err(e) => Some((path, e)),
        })
        .collect();

    std::process::exit(report::print_summary(&findings));
}
