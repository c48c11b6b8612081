//! Token encoder: option set to the comma-joined `tr` value.
//!
//! Output order is fixed by the delivery service's wire format and never
//! depends on the order options were edited in.

use std::fmt;

use crate::options::{OptionKey, OptionSet};

/// Color used for the border token when none was chosen.
pub const DEFAULT_BORDER_COLOR: &str = "000000";

/// Prefix of the human-facing transformation string.
pub const DISPLAY_PREFIX: &str = "tr:";

/// One comma-delimited fragment of the transformation value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `key-value`.
    Pair { key: &'static str, value: String },
    /// `e-name-value`, or bare `e-name` for on/off effects.
    Effect {
        name: &'static str,
        value: Option<String>,
    },
    /// `b-width_color`.
    Border { width: String, color: String },
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Pair { key, value } => write!(f, "{key}-{value}"),
            Token::Effect { name, value: None } => write!(f, "e-{name}"),
            Token::Effect {
                name,
                value: Some(value),
            } => write!(f, "e-{name}-{value}"),
            Token::Border { width, color } => write!(f, "b-{width}_{color}"),
        }
    }
}

/// How a key turns into a token.
#[derive(Debug, Clone, Copy)]
enum Rule {
    Pair(&'static str),
    Effect(&'static str),
    EffectFlag(&'static str),
    /// Flag that always encodes as `key-true`.
    Marker(&'static str),
    Border,
}

/// Wire order. `BorderColor` has no slot of its own; it rides on `Border`.
const ENCODING_ORDER: [(OptionKey, Rule); 21] = [
    (OptionKey::Height, Rule::Pair("h")),
    (OptionKey::Width, Rule::Pair("w")),
    (OptionKey::AspectRatio, Rule::Pair("ar")),
    (OptionKey::Quality, Rule::Pair("q")),
    (OptionKey::Format, Rule::Pair("f")),
    (OptionKey::Rotation, Rule::Pair("rt")),
    (OptionKey::Crop, Rule::Pair("c")),
    (OptionKey::Focus, Rule::Pair("fo")),
    (OptionKey::Blur, Rule::Pair("bl")),
    (OptionKey::Sharpen, Rule::Effect("sharpen")),
    (OptionKey::Radius, Rule::Pair("r")),
    (OptionKey::Border, Rule::Border),
    (OptionKey::Brightness, Rule::Effect("brightness")),
    (OptionKey::Contrast, Rule::Effect("contrast")),
    (OptionKey::Saturation, Rule::Effect("saturation")),
    (OptionKey::Hue, Rule::Effect("hue")),
    (OptionKey::Gamma, Rule::Effect("gamma")),
    (OptionKey::Grayscale, Rule::EffectFlag("grayscale")),
    (OptionKey::Sepia, Rule::EffectFlag("sepia")),
    (OptionKey::Progressive, Rule::Marker("pr")),
    (OptionKey::Lossless, Rule::Marker("lo")),
];

/// Structured tokens for every present option, in wire order.
pub fn tokens(options: &OptionSet) -> Vec<Token> {
    ENCODING_ORDER
        .iter()
        .filter_map(|(key, rule)| {
            let value = options.get(*key)?;
            let token = match *rule {
                Rule::Pair(short) => Token::Pair {
                    key: short,
                    value: value.to_string(),
                },
                Rule::Effect(name) => Token::Effect {
                    name,
                    value: Some(value.to_string()),
                },
                Rule::EffectFlag(name) => Token::Effect { name, value: None },
                Rule::Marker(short) => Token::Pair {
                    key: short,
                    value: "true".to_string(),
                },
                Rule::Border => Token::Border {
                    width: value.to_string(),
                    color: options
                        .get(OptionKey::BorderColor)
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| DEFAULT_BORDER_COLOR.to_string()),
                },
            };
            Some(token)
        })
        .collect()
}

/// Comma-joined token string. Empty means no transformation was requested.
pub fn encode(options: &OptionSet) -> String {
    tokens(options)
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// `tr:<tokens>` as shown to the user, or `None` when nothing encodes.
pub fn transformation_string(options: &OptionSet) -> Option<String> {
    let encoded = encode(options);
    if encoded.is_empty() {
        None
    } else {
        Some(format!("{DISPLAY_PREFIX}{encoded}"))
    }
}
