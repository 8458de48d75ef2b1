mod logging;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::debug;

use mdpress_core::convert::{Converter, DiskStorage};
use mdpress_core::walker::DirectoryWalker;

#[derive(Debug, Parser)]
#[command(name = "mdpress", version, about = "Converts markdown to HTML")]
struct Cli {
    /// The directory to convert markdown files in
    directory: PathBuf,

    /// Whether to recursively convert markdown files in subdirectories
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1,
        require_equals = true,
    )]
    recursive: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init();

    // Invalid invocation aborts before any processing.
    let walker = match DirectoryWalker::new(&cli.directory, cli.recursive) {
        Ok(walker) => walker,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    debug!("directory: {}", walker.root().display());
    debug!("recursive: {}", cli.recursive);

    let converter = Converter::new(DiskStorage);
    let report = converter.run(&walker);

    println!("Conversion complete:");
    println!("  Converted:     {}", report.converted);
    println!("  Up to date:    {}", report.fresh);
    println!("  Stale removed: {}", report.removed_stale);
    if report.failed > 0 {
        println!("  Failed:        {}", report.failed);
    }

    // Individual document failures are logged, not fatal: the pass completed.
}
