//! Widget catalog: how an editing front end constrains each option.
//!
//! These are the editor's slider ranges and select vocabularies. The encoder
//! never looks at them; a front end may use [`Widget::admits`] to warn about
//! values its own controls would not have produced.

use crate::options::{OptionKey, OptionValue};

/// One entry of a select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

pub const ASPECT_RATIOS: &[Choice] = &[
    choice("1-1", "1:1 Square"),
    choice("4-3", "4:3 Standard"),
    choice("16-9", "16:9 Widescreen"),
    choice("3-2", "3:2 Photo"),
    choice("21-9", "21:9 Ultra Wide"),
    choice("9-16", "9:16 Portrait"),
];

pub const CROP_MODES: &[Choice] = &[
    choice("maintain_ratio", "Maintain Ratio"),
    choice("force", "Force Dimensions"),
    choice("at_least", "At Least"),
    choice("at_max", "At Maximum"),
];

pub const FOCUS_MODES: &[Choice] = &[
    choice("center", "Center"),
    choice("top", "Top"),
    choice("bottom", "Bottom"),
    choice("left", "Left"),
    choice("right", "Right"),
    choice("face", "Face Detection"),
    choice("auto", "Smart Auto"),
];

pub const ROTATIONS: &[Choice] = &[
    choice("90", "90° Right"),
    choice("180", "180° Flip"),
    choice("270", "270° Left"),
];

pub const FORMATS: &[Choice] = &[
    choice("auto", "Smart Auto"),
    choice("webp", "WebP (Modern)"),
    choice("avif", "AVIF (Next-gen)"),
    choice("jpg", "JPEG (Standard)"),
    choice("png", "PNG (Lossless)"),
];

/// The control used to edit an option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Widget {
    /// Free text box.
    Text { placeholder: &'static str },
    /// Slider over a closed numeric range.
    Range { min: f64, max: f64, step: f64 },
    /// Select; `none_label` is the entry that leaves the option absent.
    Choice {
        none_label: &'static str,
        choices: &'static [Choice],
    },
    /// Color picker producing six hex digits.
    Color,
    /// Checkbox.
    Flag,
}

impl Widget {
    /// Whether `value` is something this control could have produced.
    /// Text boxes accept anything.
    pub fn admits(&self, value: &OptionValue) -> bool {
        match (self, value) {
            (Widget::Flag, OptionValue::Flag(_)) => true,
            (Widget::Flag, OptionValue::Text(_)) => false,
            (_, OptionValue::Flag(_)) => false,
            (Widget::Text { .. }, OptionValue::Text(_)) => true,
            (Widget::Range { min, max, .. }, OptionValue::Text(s)) => s
                .trim()
                .parse::<f64>()
                .map(|v| v >= *min && v <= *max)
                .unwrap_or(false),
            (Widget::Choice { choices, .. }, OptionValue::Text(s)) => {
                choices.iter().any(|c| c.value == s.as_str())
            }
            (Widget::Color, OptionValue::Text(s)) => is_hex_color(s),
        }
    }

    /// Short human description of the accepted domain.
    pub fn describe(&self) -> String {
        match self {
            Widget::Text { placeholder } => format!("text (e.g. {placeholder})"),
            Widget::Range { min, max, step } => {
                if *step == 1.0 {
                    format!("{min}..={max}")
                } else {
                    format!("{min}..={max} step {step}")
                }
            }
            Widget::Choice { choices, .. } => choices
                .iter()
                .map(|c| c.value)
                .collect::<Vec<_>>()
                .join(" | "),
            Widget::Color => "6 hex digits (e.g. ff8800)".to_string(),
            Widget::Flag => "flag".to_string(),
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit())
}

const fn range(min: f64, max: f64) -> Widget {
    Widget::Range { min, max, step: 1.0 }
}

impl OptionKey {
    pub fn widget(self) -> Widget {
        match self {
            OptionKey::Width => Widget::Text { placeholder: "400" },
            OptionKey::Height => Widget::Text { placeholder: "300" },
            OptionKey::Border => Widget::Text { placeholder: "5" },
            OptionKey::AspectRatio => Widget::Choice {
                none_label: "Custom",
                choices: ASPECT_RATIOS,
            },
            OptionKey::Crop => Widget::Choice {
                none_label: "No Cropping",
                choices: CROP_MODES,
            },
            OptionKey::Focus => Widget::Choice {
                none_label: "Auto Focus",
                choices: FOCUS_MODES,
            },
            OptionKey::Rotation => Widget::Choice {
                none_label: "No Rotation",
                choices: ROTATIONS,
            },
            OptionKey::Format => Widget::Choice {
                none_label: "Auto Format",
                choices: FORMATS,
            },
            OptionKey::Quality => range(1.0, 100.0),
            OptionKey::Blur => range(0.0, 20.0),
            OptionKey::Sharpen => range(0.0, 10.0),
            OptionKey::Radius => range(0.0, 50.0),
            OptionKey::Brightness | OptionKey::Contrast | OptionKey::Saturation => {
                range(-100.0, 100.0)
            }
            OptionKey::Hue => range(-180.0, 180.0),
            OptionKey::Gamma => Widget::Range {
                min: 0.1,
                max: 3.0,
                step: 0.1,
            },
            OptionKey::BorderColor => Widget::Color,
            OptionKey::Grayscale
            | OptionKey::Sepia
            | OptionKey::Progressive
            | OptionKey::Lossless => Widget::Flag,
        }
    }

    /// Display label used by the editor.
    pub fn label(self) -> &'static str {
        match self {
            OptionKey::Height => "Height (px)",
            OptionKey::Width => "Width (px)",
            OptionKey::AspectRatio => "Aspect Ratio",
            OptionKey::Quality => "Quality (%)",
            OptionKey::Format => "Format",
            OptionKey::Rotation => "Rotation",
            OptionKey::Crop => "Crop Mode",
            OptionKey::Focus => "Focus Point",
            OptionKey::Blur => "Blur Intensity",
            OptionKey::Sharpen => "Sharpen",
            OptionKey::Radius => "Border Radius",
            OptionKey::Border => "Border Width",
            OptionKey::BorderColor => "Border Color",
            OptionKey::Brightness => "Brightness",
            OptionKey::Contrast => "Contrast",
            OptionKey::Saturation => "Saturation",
            OptionKey::Hue => "Hue Shift",
            OptionKey::Gamma => "Gamma",
            OptionKey::Grayscale => "Grayscale",
            OptionKey::Sepia => "Sepia",
            OptionKey::Progressive => "Progressive",
            OptionKey::Lossless => "Lossless",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges() {
        let blur = OptionKey::Blur.widget();
        assert!(blur.admits(&"0".into()));
        assert!(blur.admits(&"20".into()));
        assert!(!blur.admits(&"21".into()));
        assert!(!blur.admits(&"soft".into()));

        let hue = OptionKey::Hue.widget();
        assert!(hue.admits(&"-180".into()));
        assert!(!hue.admits(&"-181".into()));

        let gamma = OptionKey::Gamma.widget();
        assert!(gamma.admits(&"0.1".into()));
        assert!(!gamma.admits(&"0".into()));
    }

    #[test]
    fn choices() {
        assert!(OptionKey::Format.widget().admits(&"webp".into()));
        assert!(!OptionKey::Format.widget().admits(&"gif".into()));
        assert!(OptionKey::Rotation.widget().admits(&"270".into()));
        assert!(!OptionKey::Rotation.widget().admits(&"45".into()));
        assert!(OptionKey::Crop.widget().admits(&"at_max".into()));
    }

    #[test]
    fn colors_and_flags() {
        let color = OptionKey::BorderColor.widget();
        assert!(color.admits(&"FF00aa".into()));
        assert!(!color.admits(&"#ff00aa".into()));
        assert!(!color.admits(&"fff".into()));

        let flag = OptionKey::Sepia.widget();
        assert!(flag.admits(&true.into()));
        assert!(!flag.admits(&"yes".into()));
        assert!(!OptionKey::Width.widget().admits(&true.into()));
    }

    #[test]
    fn text_boxes_accept_anything() {
        assert!(OptionKey::Width.widget().admits(&"wide".into()));
    }

    #[test]
    fn describe() {
        assert_eq!(OptionKey::Blur.widget().describe(), "0..=20");
        assert_eq!(OptionKey::Gamma.widget().describe(), "0.1..=3 step 0.1");
        assert_eq!(OptionKey::Rotation.widget().describe(), "90 | 180 | 270");
    }
}
