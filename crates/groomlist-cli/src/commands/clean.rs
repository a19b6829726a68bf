use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use groomlist_core::pipeline::{organize, render_csv, OrganizeSummary};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CleanArgs {
    /// Input export; defaults to the configured path
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output file; defaults to the configured path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CleanReport {
    #[serde(flatten)]
    summary: OrganizeSummary,
    output: String,
}

pub fn clean(ctx: &Context<'_>, args: CleanArgs) -> Result<()> {
    let input = args.input.unwrap_or_else(|| ctx.config.input.clone());
    let output = args.output.unwrap_or_else(|| ctx.config.output.clone());
    if input == output {
        return Err(invalid_input(format!(
            "input and output are the same file: {}",
            input.display()
        )));
    }

    let data = fs::read_to_string(&input)
        .with_context(|| format!("read contact export {}", input.display()))?;
    let organized = organize(data.lines());
    debug!(
        rows = organized.summary.rows_read,
        contacts = organized.summary.contacts,
        personal = organized.summary.personal_skipped,
        duplicates = organized.summary.duplicates_dropped,
        "export organized"
    );

    fs::write(&output, render_csv(&organized.contacts))
        .with_context(|| format!("write cleaned contacts {}", output.display()))?;

    if ctx.json {
        return print_json(&CleanReport {
            summary: organized.summary,
            output: output.display().to_string(),
        });
    }

    println!("Contacts cleaned. Output saved to {}", output.display());
    Ok(())
}
