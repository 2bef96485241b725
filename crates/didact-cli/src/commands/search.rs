use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use didact_core::{ContentClient, MIN_SEARCH_QUERY_CHARS, ResultKind};

use crate::output::{OutputFormat, write_page};
use crate::page;

pub async fn execute(
    client: &ContentClient,
    query: &str,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let results = client.search(query).await?;

    if let Some(path) = output {
        return write_page(&page::search_page(query, &results), Some(path));
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        },
        OutputFormat::Text => {
            if query.trim().chars().count() < MIN_SEARCH_QUERY_CHARS {
                println!("Search queries need at least {MIN_SEARCH_QUERY_CHARS} characters.");
                return Ok(());
            }
            if results.is_empty() {
                println!("No results found for \"{query}\"");
                return Ok(());
            }

            println!(
                "Found {} result{} for \"{}\"\n",
                results.len(),
                if results.len() == 1 { "" } else { "s" },
                query.bold()
            );
            for result in &results {
                let (tag, path) = match result.kind {
                    ResultKind::Tutorial => {
                        let category_slug = result
                            .category
                            .as_ref()
                            .map_or("", |category| category.slug.as_str());
                        (
                            "tutorial".cyan(),
                            format!("/tutorials/{category_slug}/{}", result.slug),
                        )
                    },
                    ResultKind::Blog => ("blog".magenta(), format!("/blog/{}", result.slug)),
                };
                println!("{} {}", tag, result.title.bold());
                println!("  {}", path.bright_black());
                if !result.summary.is_empty() {
                    println!("  {}", result.summary);
                }
                println!();
            }
        },
    }

    Ok(())
}
