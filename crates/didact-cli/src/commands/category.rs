use std::path::Path;

use anyhow::Result;
use didact_core::{ContentClient, Error};
use tracing::warn;

use crate::output::write_page;
use crate::page;

pub async fn execute(client: &ContentClient, slug: &str, output: Option<&Path>) -> Result<()> {
    let html = match client.category(slug).await {
        Ok(category) => {
            let tutorials = client.tutorials_in_category(&category.id).await?;
            page::category_page(&category, &tutorials)
        },
        Err(Error::NotFound(what)) => {
            warn!(%what, "rendering not-found page");
            page::not_found_page(&format!("Category '{slug}'"))
        },
        Err(err) => return Err(err.into()),
    };

    write_page(&html, output)
}
