use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use groomlist_core::pipeline::{organize, render_csv};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input export; defaults to the configured path
    #[arg(long)]
    pub input: Option<PathBuf>,
}

pub fn preview(ctx: &Context<'_>, args: PreviewArgs) -> Result<()> {
    let input = args.input.unwrap_or_else(|| ctx.config.input.clone());
    let data = fs::read_to_string(&input)
        .with_context(|| format!("read contact export {}", input.display()))?;
    let organized = organize(data.lines());

    if ctx.json {
        return print_json(&organized.contacts);
    }

    print!("{}", render_csv(&organized.contacts));
    Ok(())
}
