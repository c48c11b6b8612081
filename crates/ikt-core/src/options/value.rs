//! Option values and presence rules.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A value stored under an option key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Flag(bool),
    Text(String),
}

impl OptionValue {
    /// Empty text and `false` are absent; everything else (including `"0"`)
    /// is present.
    pub fn is_present(&self) -> bool {
        match self {
            OptionValue::Flag(on) => *on,
            OptionValue::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            OptionValue::Flag(_) => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Flag(on) => write!(f, "{on}"),
            OptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<bool> for OptionValue {
    fn from(on: bool) -> Self {
        OptionValue::Flag(on)
    }
}

/// Looser value shape accepted when reading option sets from config files,
/// so `width = 200` works as well as `width = "200"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Flag(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<RawValue> for OptionValue {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Flag(on) => OptionValue::Flag(on),
            RawValue::Int(n) => OptionValue::Text(n.to_string()),
            RawValue::Float(x) => OptionValue::Text(x.to_string()),
            RawValue::Text(s) => OptionValue::Text(s),
        }
    }
}
