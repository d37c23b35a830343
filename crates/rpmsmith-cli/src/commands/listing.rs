//! Listing command implementation.

use anyhow::{Context, Result};
use rpmsmith_repo::{render_listing, scan_repository, write_site};
use std::path::PathBuf;

pub fn run(repo: PathBuf, output: Option<PathBuf>, title: String) -> Result<()> {
    let listing = scan_repository(&repo)
        .with_context(|| format!("scanning repository {}", repo.display()))?;
    let html = render_listing(&listing, &title)?;

    let output_dir = output.unwrap_or(repo);
    let index = write_site(&output_dir, &html)?;
    println!("Updated {}", index.display());

    Ok(())
}
