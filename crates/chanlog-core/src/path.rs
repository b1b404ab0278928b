//! Path pieces and severities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::style::Style;

/// One hierarchical sub-label of a log call, rendered as its own
/// bracketed segment after the channel id.
///
/// A bare [`PathPiece::Label`] always renders with the fallback path style;
/// it never inherits the channel style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathPiece {
    /// A bare label
    Label(String),
    /// A label with its own style
    Styled {
        /// Text shown inside the brackets
        label: String,
        /// Style for this segment only
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<Style>,
    },
}

impl PathPiece {
    /// Create a styled piece
    #[must_use]
    pub fn styled(label: impl Into<String>, style: Style) -> Self {
        Self::Styled {
            label: label.into(),
            style: Some(style),
        }
    }

    /// The text inside the brackets
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Label(label) | Self::Styled { label, .. } => label,
        }
    }

    /// The piece's own style, if any
    #[must_use]
    pub fn style(&self) -> Option<&Style> {
        match self {
            Self::Label(_) => None,
            Self::Styled { style, .. } => style.as_ref(),
        }
    }
}

impl From<&str> for PathPiece {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

impl From<String> for PathPiece {
    fn from(label: String) -> Self {
        Self::Label(label)
    }
}

impl From<(&str, Style)> for PathPiece {
    fn from((label, style): (&str, Style)) -> Self {
        Self::styled(label, style)
    }
}

/// The method a log call was made through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Plain `log`, no trailing marker
    Log,
    /// `error`
    Error,
    /// `warn`
    Warn,
    /// `info`
    Info,
    /// `success`
    Success,
}

impl Severity {
    /// All severities, in declaration order
    pub const ALL: [Severity; 5] = [
        Severity::Log,
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Success,
    ];

    /// Label of the synthetic trailing piece.
    ///
    /// `Warn` shares the `INFO` label with `Info` and is told apart only by
    /// color. Downstream consumers match on this literal, so it is kept
    /// unless `distinct_warn_label` asks for `WARN`.
    #[must_use]
    pub fn marker_label(self, distinct_warn_label: bool) -> Option<&'static str> {
        match self {
            Self::Log => None,
            Self::Error => Some("ERROR"),
            Self::Warn if distinct_warn_label => Some("WARN"),
            Self::Warn | Self::Info => Some("INFO"),
            Self::Success => Some("SUCCESS"),
        }
    }

    /// Built-in style of the synthetic trailing piece
    #[must_use]
    pub fn marker_style(self) -> Option<Style> {
        let style = match self {
            Self::Log => return None,
            Self::Error => Style::new().color("#ff2400"),
            Self::Warn => Style::new().color("#ff8c00"),
            Self::Info => Style::new().color("#fffa00").background("#000"),
            Self::Success => Style::new().color("#3ce200").background("#000"),
        };
        Some(style.bold())
    }

    /// The synthetic piece appended by this severity, if any
    #[must_use]
    pub fn marker(self, distinct_warn_label: bool) -> Option<PathPiece> {
        let label = self.marker_label(distinct_warn_label)?;
        let style = self.marker_style()?;
        Some(PathPiece::styled(label, style))
    }

    /// Lowercase method name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
