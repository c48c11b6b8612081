//! `ikt url <base> -o KEY=VALUE...` – print the transformed URL.

use anyhow::Result;
use ikt_core::config::IktConfig;
use ikt_core::navigation::accept_url_input;
use ikt_core::session::EditSession;
use ikt_core::url_merge::MergeStrategy;

use crate::cli::TransformArgs;

pub fn run_url(
    cfg: &IktConfig,
    base_url: &str,
    transform: &TransformArgs,
    splice: bool,
    filename: bool,
) -> Result<()> {
    let base_url = accept_url_input(base_url)?;
    let options = transform.build(cfg)?;

    let mut session = EditSession::from_config(base_url, cfg);
    if splice {
        session = session.with_strategy(MergeStrategy::Splice);
    }
    session.apply_preset(&options);

    println!("{}", session.output_url());
    if filename {
        println!("{}", session.download_filename());
    }
    Ok(())
}
