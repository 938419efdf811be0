//! `mcview decode <value>` – strict decode of a textures property value.

use anyhow::{Context, Result};
use mcview_core::textures;

pub fn run_decode(value: &str) -> Result<()> {
    let descriptor = textures::decode_value(value).context("decoding textures value")?;
    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    if let Some(at) = descriptor.updated_at() {
        eprintln!("updated: {}", at.to_rfc3339());
    }
    Ok(())
}
