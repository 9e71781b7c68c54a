mod cli;
mod format;
mod listing;
mod meta;
mod printer;

use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use cli::{Cli, DisplayOptions};
use log::debug;
use std::io;
use std::process;

fn main() -> Result<()> {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => err.exit(),
        Err(_) => {
            // Usage is reported on stdout
            println!("Usage: vedi <directory_path> <options>");
            process::exit(1);
        }
    };

    debug!("listing {}", cli.directory.display());

    let opts = DisplayOptions::from_args(&cli.options);
    let mut entries = listing::read_directory(&cli.directory)?;

    // Sort for consistent output
    entries.sort();

    let stdout = io::stdout();
    printer::print_listing(&mut stdout.lock(), &cli.directory, &entries, &opts)
}
