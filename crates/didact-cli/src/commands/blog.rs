use std::path::Path;

use anyhow::Result;
use didact_core::{ContentClient, Error, SiteConfig};
use tracing::warn;

use crate::output::write_page;
use crate::page;

pub async fn execute(
    client: &ContentClient,
    config: &SiteConfig,
    slug: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let html = match slug {
        Some(slug) => match client.blog(slug).await {
            Ok(blog) => page::blog_page(&blog, &config.image_policy()),
            Err(Error::NotFound(what)) => {
                warn!(%what, "rendering not-found page");
                page::not_found_page(&format!("Blog post '{slug}'"))
            },
            Err(err) => return Err(err.into()),
        },
        None => {
            let blogs = client.blogs().await?;
            page::blog_index_page(&blogs)
        },
    };

    write_page(&html, output)
}
