//! Construction options.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use chanlog_console::{ColorSupport, ConsoleConfig};
use chanlog_core::{ChannelConfig, ChannelIds, ConfigError};

/// Everything a [`Logger`](crate::Logger) is constructed from.
///
/// The serde shape is the camelCase configuration object:
///
/// ```json
/// {
///   "colorSupportType": "terminal",
///   "channelIds": { "DEFAULT": "default", "auth": { "STATE": "auth/state" } },
///   "channels": { "auth/state": { "options": { "style": { "color": "#009aff" } } } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggerOptions {
    /// Channels to register
    pub channels: BTreeMap<String, ChannelConfig>,
    /// Friendly-name table, returned verbatim
    pub channel_ids: ChannelIds,
    /// Rendering strategy for the lifetime of the logger (None = plain)
    pub color_support_type: Option<ColorSupport>,
    /// Start with styling switched off
    pub plain: bool,
    /// Label `warn` calls `WARN` instead of `INFO`
    pub distinct_warn_label: bool,
}

impl LoggerOptions {
    /// Empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse JSON options
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse TOML options
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Load options from a `.json` or `.toml` file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        let content = fs::read_to_string(path)?;
        match ext.as_str() {
            "json" => Self::from_json_str(&content),
            "toml" => Self::from_toml_str(&content),
            _ => Err(ConfigError::UnsupportedFormat(ext)),
        }
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Add or replace a channel
    #[must_use]
    pub fn with_channel(mut self, id: impl Into<String>, config: ChannelConfig) -> Self {
        self.channels.insert(id.into(), config);
        self
    }

    /// Set the friendly-name table
    #[must_use]
    pub fn with_channel_ids(mut self, ids: ChannelIds) -> Self {
        self.channel_ids = ids;
        self
    }

    /// Set the rendering strategy
    #[must_use]
    pub fn with_color_support(mut self, kind: Option<ColorSupport>) -> Self {
        self.color_support_type = kind;
        self
    }

    /// Start with styling off
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.plain = true;
        self
    }

    /// Label `warn` calls `WARN`
    #[must_use]
    pub fn with_distinct_warn_label(mut self, distinct: bool) -> Self {
        self.distinct_warn_label = distinct;
        self
    }

    /// Apply output settings from a [`ConsoleConfig`].
    ///
    /// A strategy in `console` only replaces an unset one here.
    #[must_use]
    pub fn with_console_config(mut self, console: &ConsoleConfig) -> Self {
        if self.color_support_type.is_none() {
            self.color_support_type = console.color_support;
        }
        self.plain |= !console.styling_enabled();
        self.distinct_warn_label |= console.distinct_warn_label;
        self
    }
}
