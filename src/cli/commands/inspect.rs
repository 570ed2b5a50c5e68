//! Inspect Command
//!
//! Run the full pipeline for one repository and print the report.
//!
//! Usage:
//!   repolens inspect https://github.com/owner/repo [-f json]

use crate::cli::ui::{Output, render_report};
use crate::cli::{CommandContext, runtime};
use crate::inspect::RepoInspector;
use crate::types::Result;

pub fn run(ctx: &CommandContext, url: &str, format: &str) -> Result<()> {
    let inspector = RepoInspector::from_config(&ctx.config)?;
    let report = runtime()?.block_on(inspector.inspect(url))?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_report(&Output::new(), &report);
    }
    Ok(())
}
