use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the config file (signal_alerter.toml). Built-in defaults are
    /// used when absent.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log alerts instead of delivering them.
    #[arg(long)]
    pub dry_run: bool,
}
