//! didact CLI - render tutorials and blog pages from the content API
//!
//! This is the main entry point for the didact command-line interface.
//! Command implementations live in separate modules under `commands`;
//! page shells the HTML commands compose are in `page`.

use anyhow::Result;
use clap::Parser;
use didact_core::{ContentClient, SiteConfig};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod output;
mod page;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;
    execute_command(cli).await
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

async fn execute_command(cli: Cli) -> Result<()> {
    let config = SiteConfig::load()?;
    let client = ContentClient::new(&config)?;

    match cli.command {
        Commands::Categories { format } => commands::list_categories(&client, format).await,
        Commands::Category { slug, output } => {
            commands::render_category(&client, &slug, output.as_deref()).await
        },
        Commands::Tutorial {
            category_slug,
            slug,
            output,
        } => {
            commands::render_tutorial(&client, &config, &category_slug, &slug, output.as_deref())
                .await
        },
        Commands::Blog { slug, output } => {
            commands::render_blog(&client, &config, slug.as_deref(), output.as_deref()).await
        },
        Commands::Search {
            query,
            format,
            output,
        } => commands::search(&client, &query, format, output.as_deref()).await,
        Commands::Toc { slug, format } => commands::show_toc(&client, &slug, format).await,
    }
}
