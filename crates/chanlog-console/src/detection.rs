//! Color support selection
//!
//! The rendering strategy is chosen once, explicitly, when a logger is built.
//! [`ColorSupport::detect`] is available for applications that want to probe
//! the terminal themselves; the logger never calls it on its own.

use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Styled rendering strategy. `None` in an `Option<ColorSupport>` means plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSupport {
    /// ANSI escapes for a terminal
    Terminal,
    /// Browser-console `%c` format string with CSS arguments
    Chrome,
}

impl ColorSupport {
    /// Probe the environment: terminal colors when stderr is a TTY and
    /// `NO_COLOR` is unset, otherwise plain.
    #[must_use]
    pub fn detect() -> Option<Self> {
        Self::detect_from(
            std::env::var_os("NO_COLOR").is_some(),
            std::io::stderr().is_terminal(),
        )
    }

    /// Detection on already-probed facts
    #[must_use]
    pub fn detect_from(no_color: bool, stderr_is_terminal: bool) -> Option<Self> {
        (!no_color && stderr_is_terminal).then_some(Self::Terminal)
    }

    /// Lowercase name as used in configuration
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Chrome => "chrome",
        }
    }

    /// Parse a configuration value where `none`, `plain`, `off` and the
    /// empty string all mean "no styling".
    pub fn parse_optional(value: &str) -> Result<Option<Self>, ParseColorSupportError> {
        match value.trim().to_lowercase().as_str() {
            "" | "none" | "null" | "plain" | "off" => Ok(None),
            other => other.parse().map(Some),
        }
    }
}

impl fmt::Display for ColorSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorSupport {
    type Err = ParseColorSupportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terminal" | "ansi" => Ok(Self::Terminal),
            "chrome" | "browser" => Ok(Self::Chrome),
            _ => Err(ParseColorSupportError(s.to_string())),
        }
    }
}

/// Unknown color support name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorSupportError(pub String);

impl fmt::Display for ParseColorSupportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color support type: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorSupportError {}
