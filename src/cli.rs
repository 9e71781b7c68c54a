use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vedi", version, about = "Vedi: Minimal Directory Lister")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Directory to list
    pub directory: PathBuf,

    /// Display options, e.g. -l (long listing) and -h (human-readable sizes)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub long_listing: bool,
    pub human_readable: bool,
}

impl DisplayOptions {
    /// Scans raw argv tokens for display options. A token enables an
    /// option when it starts with '-' and contains the option letter
    /// anywhere, so `-l`, `-lh` and `-hl` all work. Anything else is
    /// silently ignored.
    pub fn from_args(args: &[String]) -> Self {
        let mut opts = Self::default();

        for arg in args {
            if !arg.starts_with('-') {
                continue;
            }
            if arg.contains('l') {
                opts.long_listing = true;
            }
            if arg.contains('h') {
                opts.human_readable = true;
            }
        }

        opts
    }
}
