//! The closed set of transformation option keys.

use std::fmt;
use std::str::FromStr;

use super::OptionError;

/// Shape of the value a key expects. Informational only: values are never
/// checked against it before encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free-form text expected to parse as a number.
    Numeric,
    /// One of a fixed vocabulary.
    Enumerated,
    /// Six hex digits, no leading `#`.
    Color,
    /// Presence only.
    Flag,
}

/// Every option the encoder understands.
///
/// Declaration order is the order options appear in the catalog; the wire
/// order of tokens is defined separately by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    Height,
    Width,
    AspectRatio,
    Quality,
    Format,
    Rotation,
    Crop,
    Focus,
    Blur,
    Sharpen,
    Radius,
    Border,
    BorderColor,
    Brightness,
    Contrast,
    Saturation,
    Hue,
    Gamma,
    Grayscale,
    Sepia,
    Progressive,
    Lossless,
}

impl OptionKey {
    pub const ALL: [OptionKey; 22] = [
        OptionKey::Height,
        OptionKey::Width,
        OptionKey::AspectRatio,
        OptionKey::Quality,
        OptionKey::Format,
        OptionKey::Rotation,
        OptionKey::Crop,
        OptionKey::Focus,
        OptionKey::Blur,
        OptionKey::Sharpen,
        OptionKey::Radius,
        OptionKey::Border,
        OptionKey::BorderColor,
        OptionKey::Brightness,
        OptionKey::Contrast,
        OptionKey::Saturation,
        OptionKey::Hue,
        OptionKey::Gamma,
        OptionKey::Grayscale,
        OptionKey::Sepia,
        OptionKey::Progressive,
        OptionKey::Lossless,
    ];

    /// Canonical snake_case name, as used in config files and on the CLI.
    pub fn name(self) -> &'static str {
        match self {
            OptionKey::Height => "height",
            OptionKey::Width => "width",
            OptionKey::AspectRatio => "aspect_ratio",
            OptionKey::Quality => "quality",
            OptionKey::Format => "format",
            OptionKey::Rotation => "rotation",
            OptionKey::Crop => "crop",
            OptionKey::Focus => "focus",
            OptionKey::Blur => "blur",
            OptionKey::Sharpen => "sharpen",
            OptionKey::Radius => "radius",
            OptionKey::Border => "border",
            OptionKey::BorderColor => "border_color",
            OptionKey::Brightness => "brightness",
            OptionKey::Contrast => "contrast",
            OptionKey::Saturation => "saturation",
            OptionKey::Hue => "hue",
            OptionKey::Gamma => "gamma",
            OptionKey::Grayscale => "grayscale",
            OptionKey::Sepia => "sepia",
            OptionKey::Progressive => "progressive",
            OptionKey::Lossless => "lossless",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            OptionKey::AspectRatio | OptionKey::Crop | OptionKey::Focus | OptionKey::Format => {
                ValueKind::Enumerated
            }
            OptionKey::BorderColor => ValueKind::Color,
            OptionKey::Grayscale
            | OptionKey::Sepia
            | OptionKey::Progressive
            | OptionKey::Lossless => ValueKind::Flag,
            _ => ValueKind::Numeric,
        }
    }

    pub fn is_flag(self) -> bool {
        self.kind() == ValueKind::Flag
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionKey {
    type Err = OptionError;

    /// Accepts snake_case, kebab-case and camelCase spellings
    /// (`aspect_ratio`, `aspect-ratio`, `aspectRatio`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        OptionKey::ALL
            .iter()
            .copied()
            .find(|key| key.name().replace('_', "") == folded)
            .ok_or_else(|| OptionError::UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_spellings() {
        assert_eq!("aspect_ratio".parse::<OptionKey>().unwrap(), OptionKey::AspectRatio);
        assert_eq!("aspect-ratio".parse::<OptionKey>().unwrap(), OptionKey::AspectRatio);
        assert_eq!("aspectRatio".parse::<OptionKey>().unwrap(), OptionKey::AspectRatio);
        assert_eq!("borderColor".parse::<OptionKey>().unwrap(), OptionKey::BorderColor);
        assert_eq!(" width ".parse::<OptionKey>().unwrap(), OptionKey::Width);
    }

    #[test]
    fn unknown_key_is_error() {
        let err = "zoom".parse::<OptionKey>().unwrap_err();
        assert_eq!(err, OptionError::UnknownKey("zoom".to_string()));
        assert!("".parse::<OptionKey>().is_err());
    }

    #[test]
    fn names_round_trip() {
        for key in OptionKey::ALL {
            assert_eq!(key.name().parse::<OptionKey>().unwrap(), key);
        }
    }

    #[test]
    fn flag_keys() {
        let flags: Vec<_> = OptionKey::ALL.iter().filter(|k| k.is_flag()).collect();
        assert_eq!(
            flags,
            vec![
                &OptionKey::Grayscale,
                &OptionKey::Sepia,
                &OptionKey::Progressive,
                &OptionKey::Lossless
            ]
        );
    }
}
