//! Command-line surface (spec §4.11, §6), in the teacher's
//! `#[derive(Parser)]` idiom (`examples/alexcu2718-fdf/src/main.rs`'s
//! `Args`) generalised from a single regex/glob pattern to the
//! query + startup-configuration shape spec §6 describes.

use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::config::StartupConfig;

#[derive(Parser, Debug)]
#[command(version = env!("CARGO_PKG_VERSION"), about = "Interactive file and C/C++ symbol finder")]
pub struct Args {
    #[arg(value_name = "QUERY", help = "Query to search for (literal parts separated by '*')", index = 1)]
    pub query: Option<String>,

    #[arg(
        value_name = "ROOT",
        help = "Root directory to index (defaults to the current directory)",
        value_hint = ValueHint::DirPath,
        index = 2
    )]
    pub root: Option<PathBuf>,

    #[arg(short = 'i', long = "ignore", help = "Path prefix to exclude from indexing (repeatable)\n")]
    pub ignore: Vec<PathBuf>,

    #[arg(short = 'I', long = "include", help = "Path prefix to re-include under an ignored prefix\n")]
    pub include: Vec<PathBuf>,

    #[arg(long = "no-files", help = "Skip file-name indexing\n")]
    pub no_files: bool,

    #[arg(short = 's', long = "symbols", help = "Also index C/C++ symbols\n")]
    pub symbols: bool,

    #[arg(long = "stats-only", help = "Print index statistics and exit, skip the query\n")]
    pub stats_only: bool,

    #[arg(short = 'v', long = "verbose", help = "Log scan/tokenisation warnings to stderr\n")]
    pub verbose: bool,
}

impl Args {
    /// Resolves CLI args into a validated [`StartupConfig`] plus the
    /// one-shot query string, if any.
    #[must_use]
    pub fn into_parts(self) -> (StartupConfig, Option<String>) {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        let config = StartupConfig::new(
            root,
            self.ignore,
            self.include,
            !self.no_files,
            self.symbols,
            self.stats_only,
            self.verbose,
        );
        (config, self.query)
    }
}
