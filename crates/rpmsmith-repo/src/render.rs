//! HTML rendering and site output.

use crate::errors::RepoError;
use crate::listing::Listing;
use minijinja::{context, Environment};
use std::path::{Path, PathBuf};

const LISTING_TEMPLATE: &str = include_str!("../templates/listing.html");
const STYLESHEET: &str = include_str!("../templates/styles.css");

/// Renders the listing model to an HTML page.
///
/// The template is registered under an `.html` name so minijinja's default
/// auto-escaping applies: package summaries are untrusted header content and
/// must never reach the page as markup.
pub fn render_listing(listing: &Listing, title: &str) -> Result<String, RepoError> {
    let mut env = Environment::new();
    env.add_template("listing.html", LISTING_TEMPLATE)?;
    let template = env.get_template("listing.html")?;

    let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    let html = template.render(context! {
        title,
        generated_at,
        releases => &listing.releases,
    })?;
    Ok(html)
}

/// Writes `index.html` and the accompanying stylesheet into `output_dir`.
///
/// Returns the path of the written index page.
pub fn write_site(output_dir: &Path, html: &str) -> Result<PathBuf, RepoError> {
    std::fs::create_dir_all(output_dir)?;
    let index = output_dir.join("index.html");
    std::fs::write(&index, html)?;
    std::fs::write(output_dir.join("styles.css"), STYLESHEET)?;
    Ok(index)
}
