use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub mod normalize;

use crate::normalize::normalize;

/// Configuration passed from the CLI layer (main.rs) into the core logic.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub dry_run: bool,
    pub json: bool,
}

#[derive(Debug, serde::Serialize)]
struct Summary {
    path: String,
    blocks: usize,
    commented_lines: usize,
}

pub fn run_with_config(cfg: Config) -> Result<()> {
    let display_path = cfg.path.to_string_lossy().into_owned();

    let content = fs::read_to_string(&cfg.path)
        .with_context(|| format!("Failed to read {}", display_path))?;

    // Split on '\n' rather than lines(): the trailing empty segment carries a
    // final newline through the join, so the rewrite is byte-faithful outside
    // the commented lines.
    let lines: Vec<&str> = content.split('\n').collect();
    let result = normalize(&lines);
    let fixed = result.lines.join("\n");

    if cfg.dry_run {
        print!("{fixed}");
        return Ok(());
    }

    fs::write(&cfg.path, fixed)
        .with_context(|| format!("Failed to write {}", display_path))?;

    if cfg.json {
        let summary = Summary {
            path: display_path,
            blocks: result.blocks,
            commented_lines: result.commented,
        };
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!("Fixed multiline console.log statements");
    }

    Ok(())
}
