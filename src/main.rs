use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use logsweep::{Config, run_with_config};

/// logsweep - finish half-commented console.log calls.
///
/// Rewrites a JavaScript file in place, commenting out the continuation
/// lines of multi-line `console.log(...)` calls whose first line was
/// commented out but whose remaining lines were left live. By default it:
///
///   - leaves lines that are already commented untouched
///   - leaves blank lines untouched
///   - is safe to run repeatedly (a second run changes nothing)
#[derive(Parser, Debug)]
#[command(
    name = "logsweep",
    author,
    version,
    about = "Comment out dangling continuation lines of half-commented console.log calls",
    long_about = r#"Rewrites a JavaScript file in place, commenting out the continuation
lines of multi-line console.log(...) calls whose first line was commented
out but whose remaining lines were left live.

A block starts at a commented console.log ending in a comma and runs until
a line containing `);` closes the call (or end of file). Lines inside the
block that are already commented, or blank, are left untouched, so running
the tool twice is the same as running it once.

Typical usage:
  logsweep
  logsweep src/app.js
  logsweep --dry-run src/app.js
"#
)]
struct Args {
    /// JavaScript file to rewrite in place.
    #[arg(value_name = "FILE", default_value = "public/js/paint.js")]
    file: PathBuf,

    /// Print the rewritten content to stdout instead of writing the file.
    #[arg(long = "dry-run")]
    dry_run: bool,

    /// Print a JSON summary { "path", "blocks", "commented_lines" } instead
    /// of the plain confirmation message.
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let cfg = Config {
        path: args.file,
        dry_run: args.dry_run,
        json: args.json,
    };

    run_with_config(cfg)
}
