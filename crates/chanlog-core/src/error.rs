//! Error types.
//!
//! The logger absorbs bad input (unregistered channels, repeated mutes,
//! odd style values) without failing. The only errors a log call can return
//! come from its collaborators: the color renderer and the output sink.
//! Loading configuration files has its own [`ConfigError`].

use std::fmt;
use std::io;

/// Result alias for chanlog operations.
pub type ChanlogResult<T> = Result<T, ChanlogError>;

/// Failure to turn a color string into a terminal escape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Not a `#rgb` or `#rrggbb` hex color
    InvalidHex(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHex(value) => write!(f, "invalid hex color: {value:?}"),
        }
    }
}

impl std::error::Error for ColorError {}

/// Failure to load logger options.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the file failed
    Io(io::Error),
    /// JSON parsing error
    Json(serde_json::Error),
    /// TOML parsing error
    Toml(toml::de::Error),
    /// File extension is neither `.json` nor `.toml`
    UnsupportedFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Toml(e) => write!(f, "TOML error: {e}"),
            ConfigError::UnsupportedFormat(ext) => {
                write!(f, "unsupported config format: {ext:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
            ConfigError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err)
    }
}

/// Top-level error type.
#[derive(Debug)]
pub enum ChanlogError {
    /// The output sink failed to write
    Sink(io::Error),
    /// The color renderer rejected a style
    Color(ColorError),
    /// Options could not be loaded
    Config(ConfigError),
}

impl fmt::Display for ChanlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChanlogError::Sink(e) => write!(f, "sink error: {e}"),
            ChanlogError::Color(e) => write!(f, "color error: {e}"),
            ChanlogError::Config(e) => write!(f, "config error: {e}"),
        }
    }
}

impl std::error::Error for ChanlogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChanlogError::Sink(e) => Some(e),
            ChanlogError::Color(e) => Some(e),
            ChanlogError::Config(e) => Some(e),
        }
    }
}

impl From<io::Error> for ChanlogError {
    fn from(err: io::Error) -> Self {
        ChanlogError::Sink(err)
    }
}

impl From<ColorError> for ChanlogError {
    fn from(err: ColorError) -> Self {
        ChanlogError::Color(err)
    }
}

impl From<ConfigError> for ChanlogError {
    fn from(err: ConfigError) -> Self {
        ChanlogError::Config(err)
    }
}
