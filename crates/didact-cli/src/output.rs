//! Output format selection and page writing.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// How listing commands print their results.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable formatted output
    #[default]
    Text,
    /// Machine-readable JSON for scripting
    Json,
}

/// Write a rendered page to a file, or to stdout when no path is given.
pub fn write_page(html: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("failed to write page to {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "page written");
        },
        None => println!("{html}"),
    }
    Ok(())
}
