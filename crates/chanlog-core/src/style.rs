//! Segment styles.

use serde::{Deserialize, Deserializer, Serialize};

/// Fallback foreground for the channel segment.
pub const CHANNEL_FALLBACK_COLOR: &str = "#7a7a7a";

/// Fallback foreground for path segments.
pub const PIECE_FALLBACK_COLOR: &str = "#717171";

/// Font weight used when none is given.
pub const NORMAL_WEIGHT: &str = "400";

/// The only font weight rendered as bold on a terminal.
pub const BOLD_WEIGHT: &str = "700";

/// A partial style. Every field is optional; absent fields fall through to
/// the next level when styles are layered.
///
/// `background_color` is tri-state: `None` means "not specified",
/// `Some(None)` means explicitly transparent and `Some(Some(c))` is a color.
/// An explicit transparent background still overrides a lower level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Foreground color, usually a hex string such as `#009aff`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Background color (`null` for transparent)
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_color: Option<Option<String>>,
    /// CSS-like font weight, `"700"` renders bold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
}

/// Distinguishes `"backgroundColor": null` from a missing key.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl Style {
    /// Create an empty style
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the background color
    #[must_use]
    pub fn background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(Some(color.into()));
        self
    }

    /// Explicitly clear the background
    #[must_use]
    pub fn transparent_background(mut self) -> Self {
        self.background_color = Some(None);
        self
    }

    /// Set the font weight
    #[must_use]
    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    /// Shorthand for `font_weight("700")`
    #[must_use]
    pub fn bold(self) -> Self {
        self.font_weight(BOLD_WEIGHT)
    }

    /// True when no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.background_color.is_none() && self.font_weight.is_none()
    }

    /// Layer `self` on top of `base`, field by field.
    ///
    /// Fields present in `self` win; everything else comes from `base`.
    #[must_use]
    pub fn over(&self, base: &Style) -> Style {
        Style {
            color: self.color.clone().or_else(|| base.color.clone()),
            background_color: self
                .background_color
                .clone()
                .or_else(|| base.background_color.clone()),
            font_weight: self
                .font_weight
                .clone()
                .or_else(|| base.font_weight.clone()),
        }
    }

    /// Fill the remaining gaps from hard-coded fallbacks.
    #[must_use]
    pub fn resolve_with(&self, fallback_color: &str) -> ResolvedStyle {
        ResolvedStyle {
            color: self
                .color
                .clone()
                .unwrap_or_else(|| fallback_color.to_string()),
            background_color: self.background_color.clone().flatten(),
            font_weight: self
                .font_weight
                .clone()
                .unwrap_or_else(|| NORMAL_WEIGHT.to_string()),
        }
    }
}

/// A fully specified style, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Foreground color
    pub color: String,
    /// Background color, `None` for transparent
    pub background_color: Option<String>,
    /// Font weight
    pub font_weight: String,
}

impl ResolvedStyle {
    /// Whether the terminal renderer should use bold.
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.font_weight == BOLD_WEIGHT
    }

    /// CSS declarations for browser-console `%c` styling.
    ///
    /// Declarations always come in the order color, font-weight,
    /// background-color.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "color: {}; font-weight: {}; background-color: {}",
            self.color,
            self.font_weight,
            self.background_color.as_deref().unwrap_or("transparent")
        )
    }
}
