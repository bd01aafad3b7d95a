// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   link-sweeper bookmarks.json                 # report only
//   link-sweeper bookmarks.json --remove        # report, then prompt to remove
//   link-sweeper bookmarks.json --debug         # log every probed URL
//
// Everything configurable about a run comes from here; there are no config
// files. `checker_config()` turns the flags into the checker's settings.
// =============================================================================

use crate::checker::CheckerConfig;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "link-sweeper",
    version,
    about = "Find broken links in a JSON link tree and optionally remove them",
    long_about = "link-sweeper walks a JSON document of nested nodes, checks every \
                  {\"type\": \"url\"} node with an HTTP HEAD request, and reports the ones \
                  that are broken (HTTP 404 or a connection failure). With --remove it asks \
                  about each broken link and saves the pruned document back to the same file."
)]
pub struct Cli {
    /// Path to the JSON file to scan
    ///
    /// This is a positional argument (required, no flag needed)
    pub json_file: PathBuf,

    /// Prompt to remove broken links (HTTP 404 or connection error) from the file
    #[arg(long)]
    pub remove: bool,

    /// Print a diagnostic line for every checked URL
    #[arg(long)]
    pub debug: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Maximum number of URLs checked at the same time
    #[arg(long, default_value_t = 10, value_parser = at_least_one)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}

impl Cli {
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            concurrency: self.concurrency,
            timeout: Duration::from_secs(self.timeout),
            ..CheckerConfig::default()
        }
    }
}

fn at_least_one(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why PathBuf instead of String for the file?
//    - PathBuf is the owned path type; file names do not have to be UTF-8
//    - clap parses straight into it, no conversion needed later
//
// 2. What is value_parser?
//    - It tells clap how to turn the raw text into our type
//    - range(1..) rejects 0 before our code ever sees it
//    - at_least_one does the same for usize, which has no built-in range
//
// 3. What does ..CheckerConfig::default() do?
//    - "Struct update syntax": fill every field we did not name from default()
// -----------------------------------------------------------------------------
