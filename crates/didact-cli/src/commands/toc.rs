use anyhow::Result;
use colored::Colorize;
use didact_core::{ContentClient, Outline};

use crate::output::OutputFormat;

pub async fn execute(client: &ContentClient, slug: &str, format: OutputFormat) -> Result<()> {
    let tutorial = client.tutorial(slug).await?;
    let outline = Outline::extract(&tutorial.content);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&outline.sections)?);
        },
        OutputFormat::Text => {
            println!("{}\n", tutorial.title.bold());
            if outline.sections.is_empty() {
                println!("No navigable sections.");
                return Ok(());
            }
            for section in &outline.sections {
                let indent = if section.level == 3 { "    " } else { "  " };
                println!("{indent}{}  {}", section.title, format!("#{}", section.id).bright_black());
            }
            if !outline.is_navigable() {
                println!("\n{}", "Fewer than 2 sections - the page hides its section nav.".bright_black());
            }
        },
    }

    Ok(())
}
