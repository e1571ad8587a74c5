use clap::Parser;

use siterel::{RewriteConfig, Walker, logging};

use std::path::PathBuf;

/// Rewrite absolute repo-rooted URLs in a static site tree into relative
/// ones, in place, so the tree can be served from any base path or opened
/// straight from the filesystem.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Repository root to process
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Suppress all logging
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(changed) => println!("Files updated: {changed}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> siterel::Result<usize> {
    let config = RewriteConfig::new(&cli.root);
    Walker::new(config).run()
}
