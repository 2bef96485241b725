use std::path::Path;

use anyhow::Result;
use didact_core::{ContentClient, Error, SiteConfig};
use tracing::{debug, warn};

use crate::output::write_page;
use crate::page;

pub async fn execute(
    client: &ContentClient,
    config: &SiteConfig,
    category_slug: &str,
    slug: &str,
    output: Option<&Path>,
) -> Result<()> {
    let html = match client.tutorial(slug).await {
        Ok(tutorial) => {
            if tutorial.category.slug != category_slug {
                debug!(
                    expected = category_slug,
                    actual = %tutorial.category.slug,
                    "tutorial belongs to a different category than requested"
                );
            }
            let siblings = client.tutorials_in_category(&tutorial.category.id).await?;
            page::tutorial_page(&tutorial, &siblings, &config.image_policy())
        },
        Err(Error::NotFound(what)) => {
            warn!(%what, "rendering not-found page");
            page::not_found_page(&format!("Tutorial '{slug}'"))
        },
        Err(err) => return Err(err.into()),
    };

    write_page(&html, output)
}
