use anyhow::Result;
use colored::Colorize;
use didact_core::ContentClient;

use crate::output::OutputFormat;

pub async fn execute(client: &ContentClient, format: OutputFormat) -> Result<()> {
    let categories = client.categories().await?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        },
        OutputFormat::Text => {
            if categories.is_empty() {
                println!("No tutorial categories available yet.");
                return Ok(());
            }
            for category in &categories {
                println!("{}  {}", category.slug.green().bold(), category.name);
                if let Some(description) = &category.description {
                    println!("    {}", description.bright_black());
                }
            }
        },
    }

    Ok(())
}
