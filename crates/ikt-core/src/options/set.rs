//! The option set: present values only, keyed by [`OptionKey`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::value::RawValue;
use super::{OptionError, OptionKey, OptionValue};

/// All transformation options currently selected.
///
/// Absent values are never stored, so equality ignores edit history: two sets
/// reached through different sequences of `set` calls compare equal when they
/// end with the same present values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, RawValue>",
    into = "BTreeMap<String, OptionValue>"
)]
pub struct OptionSet {
    values: BTreeMap<OptionKey, OptionValue>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`OptionSet::set`].
    pub fn with(mut self, key: OptionKey, value: impl Into<OptionValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Store `value` under `key`. Empty text or `false` clears the key.
    pub fn set(&mut self, key: OptionKey, value: impl Into<OptionValue>) {
        let value = value.into();
        if value.is_present() {
            self.values.insert(key, value);
        } else {
            self.values.remove(&key);
        }
    }

    pub fn unset(&mut self, key: OptionKey) {
        self.values.remove(&key);
    }

    pub fn get(&self, key: OptionKey) -> Option<&OptionValue> {
        self.values.get(&key)
    }

    /// Text value of `key`, if present and stored as text.
    pub fn text(&self, key: OptionKey) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_text)
    }

    pub fn is_present(&self, key: OptionKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Number of present keys (the "N active" badge).
    pub fn count(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn reset(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &OptionValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Copy every present value of `other` over this set.
    pub fn extend_from(&mut self, other: &OptionSet) {
        for (key, value) in other.iter() {
            self.values.insert(key, value.clone());
        }
    }

    /// Apply a textual assignment: `key=value`, `key=` (clear) or a bare
    /// `key` (flag on). Flag keys read `true`/`false` as booleans.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<OptionKey, OptionError> {
        let (name, value) = match assignment.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (assignment, None),
        };
        let key: OptionKey = name.parse()?;
        let value = match value {
            None => OptionValue::Flag(true),
            Some("true") if key.is_flag() => OptionValue::Flag(true),
            Some("false") if key.is_flag() => OptionValue::Flag(false),
            Some(text) => OptionValue::from(text),
        };
        self.set(key, value);
        Ok(key)
    }
}

impl TryFrom<BTreeMap<String, RawValue>> for OptionSet {
    type Error = OptionError;

    fn try_from(raw: BTreeMap<String, RawValue>) -> Result<Self, Self::Error> {
        let mut set = OptionSet::new();
        for (name, value) in raw {
            set.set(name.parse()?, OptionValue::from(value));
        }
        Ok(set)
    }
}

impl From<OptionSet> for BTreeMap<String, OptionValue> {
    fn from(set: OptionSet) -> Self {
        set.values
            .into_iter()
            .map(|(k, v)| (k.name().to_string(), v))
            .collect()
    }
}
