//! CLI structure and argument parsing.
//!
//! The CLI follows a command-subcommand pattern: page commands
//! (`tutorial`, `blog`, `category`) fetch documents and emit complete HTML
//! pages, data commands (`categories`, `search`, `toc`) print listings in
//! text or JSON.
//!
//! ```bash
//! # Render a tutorial page to a file
//! didact tutorial rust ownership --output ownership.html
//!
//! # Print a tutorial's section outline
//! didact toc ownership
//!
//! # Search through the content API
//! didact search "borrow checker" --format json
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Main CLI structure for the `didact` command.
#[derive(Parser, Debug)]
#[command(name = "didact")]
#[command(version)]
#[command(about = "didact - render tutorial & blog pages from the content API", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tutorial categories
    Categories {
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Render a category's tutorial listing page
    Category {
        /// Category slug
        slug: String,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a tutorial page
    Tutorial {
        /// Category slug (for breadcrumbs and the course side nav)
        category_slug: String,

        /// Tutorial slug
        slug: String,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a blog post page, or the blog index when no slug is given
    Blog {
        /// Blog post slug; omit for the index page
        slug: Option<String>,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Search tutorials and blog posts through the content API
    Search {
        /// Search query (minimum 2 characters)
        query: String,

        /// Output format for the result listing
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Render a full search-results page to a file instead
        #[arg(short, long, conflicts_with = "format")]
        output: Option<PathBuf>,
    },

    /// Print the section outline of a tutorial
    Toc {
        /// Tutorial slug
        slug: String,

        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
}
