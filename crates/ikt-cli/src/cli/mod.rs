//! CLI for building transformed image delivery URLs.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use ikt_core::config::{self, IktConfig};
use ikt_core::options::OptionSet;

use commands::{
    run_completions, run_edit_link, run_encode, run_man, run_options, run_presets, run_url,
};

/// Top-level CLI for ikt.
#[derive(Debug, Parser)]
#[command(name = "ikt")]
#[command(about = "ikt: build image delivery URLs with transformation tokens", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Option assignments shared by commands that build an option set.
#[derive(Debug, Clone, Default, Args)]
pub struct TransformArgs {
    /// Set an option: KEY=VALUE, KEY= to clear, or a bare KEY to turn a flag on (repeatable).
    #[arg(short = 'o', long = "option", value_name = "KEY[=VALUE]")]
    pub options: Vec<String>,

    /// Start from a preset defined in config.toml; -o assignments apply on top.
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,
}

impl TransformArgs {
    /// Preset first, then every assignment in command-line order.
    /// Values outside the editor's ranges are encoded anyway, with a warning.
    pub fn build(&self, cfg: &IktConfig) -> Result<OptionSet> {
        let mut options = match &self.preset {
            Some(name) => cfg
                .preset(name)
                .cloned()
                .with_context(|| format!("unknown preset: {name}"))?,
            None => OptionSet::new(),
        };
        for assignment in &self.options {
            let key = options.apply_assignment(assignment)?;
            if let Some(value) = options.get(key) {
                let widget = key.widget();
                if !widget.admits(value) {
                    tracing::warn!(
                        "{key}={value} is outside the usual domain ({}); encoding as given",
                        widget.describe()
                    );
                }
            }
        }
        Ok(options)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the token string for a set of options.
    Encode {
        #[command(flatten)]
        transform: TransformArgs,

        /// Print the display form (tr:...) instead of the bare tokens.
        #[arg(long)]
        prefixed: bool,
    },

    /// Merge options into an image URL's `tr` parameter and print the result.
    Url {
        /// Image URL to transform.
        base_url: String,

        #[command(flatten)]
        transform: TransformArgs,

        /// Replace the tr segment in place instead of rebuilding the query string.
        #[arg(long)]
        splice: bool,

        /// Also print the suggested download filename.
        #[arg(long)]
        filename: bool,
    },

    /// Print the edit view link for an image URL.
    EditLink {
        /// Image URL to edit.
        image_url: String,
    },

    /// List every option with the range or vocabulary the editor offers.
    Options,

    /// List presets from config.toml with their tokens.
    Presets,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Encode {
                transform,
                prefixed,
            } => run_encode(&cfg, &transform, prefixed)?,
            CliCommand::Url {
                base_url,
                transform,
                splice,
                filename,
            } => run_url(&cfg, &base_url, &transform, splice, filename)?,
            CliCommand::EditLink { image_url } => run_edit_link(&image_url)?,
            CliCommand::Options => run_options()?,
            CliCommand::Presets => run_presets(&cfg)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
