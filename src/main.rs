// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Load the JSON document and find every link node in it
// 3. Check all links concurrently and print the broken ones
// 4. With --remove, ask about each broken link, prune the tree, save it
// 5. Exit with proper code (0 = finished, 2 = error)
//
// Finding broken links is a normal result, not a failure, so it still exits 0.
//
// With --json, stdout carries exactly one JSON document, written at the very
// end. Prompts and removal messages go to stderr in that mode.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker;   // src/checker/ - HTTP probes and broken/not-broken verdicts
mod cli;       // src/cli.rs - command-line parsing
mod document;  // src/document.rs - JSON load/save
mod error;     // src/error.rs - typed errors
mod prompt;    // src/prompt.rs - the [Y/n] question
mod removal;   // src/removal.rs - interactive removal session
mod report;    // src/report.rs - totals and the broken-link list
mod tree;      // src/tree/ - walking and editing the document tree

use anyhow::Result;
use checker::LinkChecker;
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use prompt::{Confirm, LinePrompt};
use removal::{RemovalState, RemovalSummary};
use report::Report;
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let result = run().await;
    if let Err(e) = &result {
        // {:#} prints the whole context chain on one line
        eprintln!("Error: {:#}", e);
    }

    std::process::exit(exit_code(&result));
}

async fn run() -> Result<ScanOutcome> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let mut stdout = io::stdout();
    let outcome = if cli.json {
        handle_scan(&cli, &mut LinePrompt::terminal(io::stderr()), &mut stdout).await?
    } else {
        handle_scan(&cli, &mut LinePrompt::terminal(io::stdout()), &mut stdout).await?
    };

    info!(
        "Finished: {} broken, {} removed, saved: {}",
        outcome.report.broken_count,
        outcome.removal.as_ref().map_or(0, RemovalSummary::removed),
        outcome.saved
    );

    Ok(outcome)
}

// 0 for any finished run, broken links or not; 2 when the run itself failed
fn exit_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => 2,
    }
}

// --debug always shows per-URL lines; otherwise RUST_LOG decides (warn by default)
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("link_sweeper=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("link_sweeper=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Everything one run produced, returned so tests can look at it
#[derive(Debug)]
struct ScanOutcome {
    report: Report,
    removal: Option<RemovalSummary>,
    saved: bool,
}

/// The --json document: the report fields, plus removal totals after --remove
#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    removal: Option<RemovalTotals>,
}

#[derive(Serialize)]
struct RemovalTotals {
    removed: usize,
    kept: usize,
    failed: usize,
    saved: bool,
}

impl<'a> JsonOutput<'a> {
    fn new(outcome: &'a ScanOutcome) -> Self {
        Self {
            report: &outcome.report,
            removal: outcome.removal.as_ref().map(|summary| RemovalTotals {
                removed: summary.removed(),
                kept: summary.kept(),
                failed: summary.failed(),
                saved: outcome.saved,
            }),
        }
    }
}

// Scans the file named on the command line, and prunes it with --remove.
//
// `confirm` answers the removal questions (stdin in the real program) and
// `out` is stdout. In JSON mode the only thing written to `out` is the final
// JSON document; the removal messages go to stderr instead.
async fn handle_scan(
    cli: &Cli,
    confirm: &mut impl Confirm,
    out: &mut impl Write,
) -> Result<ScanOutcome> {
    let mut document = document::load(&cli.json_file)?;

    let entries = tree::enumerate(&document);
    info!("Loaded {} with {} link(s)", cli.json_file.display(), entries.len());

    let mut stderr = io::stderr();
    let console: &mut dyn Write = if cli.json { &mut stderr } else { &mut *out };

    if !cli.json {
        writeln!(console, "\n🔍 Found {} links in the JSON file.\n", entries.len())?;
        writeln!(
            console,
            "🔍 Checking URLs (only 404 or connection errors are treated as broken)...\n"
        )?;
    }

    let checker = LinkChecker::new(&cli.checker_config())?;
    let urls = entries.iter().map(|e| e.url.clone()).collect();
    let results = checker.check_all(urls).await;

    let report = Report::build(&entries, &results);
    if !cli.json {
        print_report(console, &report)?;
    }

    let mut removal = None;
    let mut saved = false;

    if cli.remove && report.has_broken() {
        writeln!(
            console,
            "\n📢 You will now be prompted to remove each broken link. \
             Press ENTER (or 'y') to remove, or 'n' to skip."
        )?;

        let summary = removal::run_session(&mut document, &report.broken, confirm)?;
        print_removal(console, &summary)?;

        if summary.removed() > 0 {
            document::save(&cli.json_file, &document)?;
            writeln!(console, "\n✅ Updated JSON file saved.")?;
            saved = true;
        }

        removal = Some(summary);
    }

    if !cli.json {
        print_summary(console, &report, removal.as_ref(), cli.remove)?;
    }

    let outcome = ScanOutcome {
        report,
        removal,
        saved,
    };

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &JsonOutput::new(&outcome))?;
        writeln!(out)?;
    }

    Ok(outcome)
}

// Prints the broken links as text
fn print_report(out: &mut dyn Write, report: &Report) -> io::Result<()> {
    writeln!(out, "\n📌 Broken Links Report (404 or connection errors):\n")?;
    if report.broken.is_empty() {
        writeln!(out, "No broken links found!")?;
    }
    for record in &report.broken {
        writeln!(out, "- ❌ {} (Status: {}) at {}", record.url, record.outcome, record.path)?;
    }

    Ok(())
}

// One line per broken link, in report order
fn print_removal(out: &mut dyn Write, summary: &RemovalSummary) -> io::Result<()> {
    writeln!(out)?;
    for (record, state) in &summary.items {
        match state {
            RemovalState::Removed => writeln!(out, "✅ Removed: {}", record.url)?,
            RemovalState::Kept | RemovalState::Pending => writeln!(out, "⏳ Kept: {}", record.url)?,
            RemovalState::Failed(e) => {
                writeln!(out, "⚠️  Failed to remove: {} ({})", record.url, e)?
            }
        }
    }

    Ok(())
}

fn print_summary(
    out: &mut dyn Write,
    report: &Report,
    removal: Option<&RemovalSummary>,
    remove_mode: bool,
) -> io::Result<()> {
    writeln!(out, "\n==================== 📊 SUMMARY ====================")?;
    writeln!(out, "🔹 Total URLs Found: {}", report.total_found)?;
    writeln!(out, "🔹 Total URLs Checked: {}", report.total_checked)?;
    writeln!(out, "✅ Working URLs (everything except 404/exception): {}", report.passed)?;
    writeln!(out, "❌ Broken URLs (404 or exception): {}", report.broken_count)?;
    if remove_mode {
        writeln!(out, "🗑 Removed URLs: {}", removal.map_or(0, RemovalSummary::removed))?;
        if let Some(summary) = removal {
            writeln!(out, "⏳ Kept URLs: {}", summary.kept())?;
            if summary.failed() > 0 {
                writeln!(out, "⚠️  Failed removals: {}", summary.failed())?;
            }
        }
    }
    writeln!(out, "====================================================\n")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does handle_scan take `&mut impl Confirm` and `&mut impl Write`?
//    - The real program answers questions from the keyboard and prints to stdout
//    - Tests answer them from a string and capture output in a Vec<u8>
//    - Both are just "something that implements the trait"
//
// 2. What is `&mut dyn Write` doing in handle_scan?
//    - `console` points at stdout in text mode and at stderr in JSON mode
//    - The print_* helpers don't care which one they got
//
// 3. What does {:#} do in eprintln!?
//    - anyhow errors carry a chain of context messages
//    - The alternate form prints them all: "Failed to read 'x': No such file"
// -----------------------------------------------------------------------------
