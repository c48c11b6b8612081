//! `ikt edit-link <url>` – print the edit view link for an image.

use anyhow::Result;
use ikt_core::navigation::{accept_url_input, edit_link};

pub fn run_edit_link(image_url: &str) -> Result<()> {
    let image_url = accept_url_input(image_url)?;
    println!("{}", edit_link(&image_url));
    Ok(())
}
