//! Edit session: the mutable state an editor holds, recomputed in full on
//! every change.
//!
//! The session owns the base URL and option set; each mutation re-runs the
//! encoder and merger from scratch, so the output never depends on the
//! previous output or on the order edits arrived in.

use crate::config::IktConfig;
use crate::encode;
use crate::options::{OptionError, OptionKey, OptionSet, OptionValue};
use crate::url_merge::{self, MergeStrategy};

/// Extension used for downloads when no output format was chosen.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Stem of the suggested download filename.
const DOWNLOAD_STEM: &str = "transformed-image";

#[derive(Debug, Clone)]
pub struct EditSession {
    base_url: String,
    options: OptionSet,
    strategy: MergeStrategy,
    default_extension: String,
    output_url: String,
}

impl EditSession {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            output_url: base_url.clone(),
            base_url,
            options: OptionSet::new(),
            strategy: MergeStrategy::default(),
            default_extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Session using the merge strategy and download extension from `cfg`.
    pub fn from_config(base_url: impl Into<String>, cfg: &IktConfig) -> Self {
        let mut session = Self::new(base_url);
        session.strategy = cfg.merge_strategy;
        session.default_extension = cfg.default_extension.clone();
        session.recompute();
        session
    }

    pub fn with_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self.recompute();
        self
    }

    pub fn set(&mut self, key: OptionKey, value: impl Into<OptionValue>) {
        self.options.set(key, value);
        self.recompute();
    }

    pub fn unset(&mut self, key: OptionKey) {
        self.options.unset(key);
        self.recompute();
    }

    /// See [`OptionSet::apply_assignment`]. On error nothing changes.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<OptionKey, OptionError> {
        let key = self.options.apply_assignment(assignment)?;
        self.recompute();
        Ok(key)
    }

    /// Layer a preset's present values over the current options.
    pub fn apply_preset(&mut self, preset: &OptionSet) {
        self.options.extend_from(preset);
        self.recompute();
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
        self.recompute();
    }

    /// Clear every option; the base URL stays.
    pub fn reset(&mut self) {
        self.options.reset();
        self.recompute();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// URL for preview, copy and download.
    pub fn output_url(&self) -> &str {
        &self.output_url
    }

    pub fn tokens(&self) -> String {
        encode::encode(&self.options)
    }

    /// `tr:<tokens>`, or `None` when nothing would be encoded.
    pub fn transformation_string(&self) -> Option<String> {
        encode::transformation_string(&self.options)
    }

    pub fn active_count(&self) -> usize {
        self.options.count()
    }

    /// `transformed-image.<format>`, falling back to the default extension.
    pub fn download_filename(&self) -> String {
        let ext = self
            .options
            .text(OptionKey::Format)
            .unwrap_or(self.default_extension.as_str());
        format!("{DOWNLOAD_STEM}.{ext}")
    }

    fn recompute(&mut self) {
        let tokens = encode::encode(&self.options);
        self.output_url = url_merge::merge_with(&self.base_url, &tokens, self.strategy);
        tracing::debug!(
            active = self.options.count(),
            tokens = %tokens,
            output = %self.output_url,
            "recomputed transformation url"
        );
    }
}
