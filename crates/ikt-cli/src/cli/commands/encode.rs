//! `ikt encode -o KEY=VALUE...` – print the token string.

use anyhow::Result;
use ikt_core::config::IktConfig;
use ikt_core::encode;

use crate::cli::TransformArgs;

pub fn run_encode(cfg: &IktConfig, transform: &TransformArgs, prefixed: bool) -> Result<()> {
    let options = transform.build(cfg)?;
    let line = if prefixed {
        encode::transformation_string(&options).unwrap_or_default()
    } else {
        encode::encode(&options)
    };
    println!("{line}");
    Ok(())
}
