//! `ikt presets` – list configured presets.

use anyhow::Result;
use ikt_core::config::IktConfig;
use ikt_core::encode;

pub fn run_presets(cfg: &IktConfig) -> Result<()> {
    if cfg.presets.is_empty() {
        println!("No presets configured.");
        return Ok(());
    }
    println!("{:<16} {:<8} {}", "NAME", "ACTIVE", "TOKENS");
    for (name, options) in &cfg.presets {
        println!(
            "{:<16} {:<8} {}",
            name,
            options.count(),
            encode::encode(options)
        );
    }
    Ok(())
}
