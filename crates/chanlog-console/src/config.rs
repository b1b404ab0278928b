//! Console output configuration.
//!
//! `ConsoleConfig` collects the output-related knobs of a logger in one
//! place, either programmatically or from environment variables. Nothing
//! here is read implicitly: an application opts in by calling
//! [`ConsoleConfig::from_env`].

use std::env;
use std::io::{self, IsTerminal};

use chanlog_core::logging::{targets, warn};

use crate::detection::ColorSupport;

/// Output configuration for a logger
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Rendering strategy (None = plain)
    pub color_support: Option<ColorSupport>,
    /// Force plain text mode (no styling) while keeping `color_support`
    pub force_plain: bool,
    /// Label `warn` calls `WARN` instead of `INFO`
    pub distinct_warn_label: bool,
}

impl ConsoleConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create config from environment variables
    ///
    /// # Environment Variables
    ///
    /// | Variable | Values | Description |
    /// |----------|--------|-------------|
    /// | `CHANLOG_COLOR` | terminal/chrome/none | Rendering strategy (unset = probe stderr) |
    /// | `CHANLOG_PLAIN` | (set) | Disable styling |
    /// | `NO_COLOR` | (set) | Disable styling (standard) |
    /// | `CHANLOG_WARN_LABEL` | warn/info | Label for `warn` calls |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_sources(|key| env::var(key).ok(), io::stderr().is_terminal())
    }

    /// Same as [`ConsoleConfig::from_env`] with a custom variable source.
    ///
    /// Nothing outside `lookup` is consulted: with `CHANLOG_COLOR` unset,
    /// stderr is treated as not being a terminal.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_sources(lookup, false)
    }

    fn from_sources<F>(lookup: F, stderr_is_terminal: bool) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.color_support = match lookup("CHANLOG_COLOR") {
            Some(val) => match ColorSupport::parse_optional(&val) {
                Ok(kind) => kind,
                Err(e) => {
                    warn!(target: targets::CHANLOG, "{e}; falling back to plain output");
                    None
                }
            },
            None => ColorSupport::detect_from(lookup("NO_COLOR").is_some(), stderr_is_terminal),
        };

        if lookup("CHANLOG_PLAIN").is_some() || lookup("NO_COLOR").is_some() {
            config.force_plain = true;
        }

        if let Some(val) = lookup("CHANLOG_WARN_LABEL") {
            config.distinct_warn_label = val.eq_ignore_ascii_case("warn");
        }

        config
    }

    // ─────────────────────────────────────────────────
    // Builder Methods
    // ─────────────────────────────────────────────────

    /// Set the rendering strategy
    #[must_use]
    pub fn with_color_support(mut self, kind: Option<ColorSupport>) -> Self {
        self.color_support = kind;
        self
    }

    /// Enable plain text mode (no styling)
    #[must_use]
    pub fn plain_mode(mut self) -> Self {
        self.force_plain = true;
        self
    }

    /// Label `warn` calls `WARN`
    #[must_use]
    pub fn with_distinct_warn_label(mut self, distinct: bool) -> Self {
        self.distinct_warn_label = distinct;
        self
    }

    // ─────────────────────────────────────────────────
    // Resolution Methods
    // ─────────────────────────────────────────────────

    /// Whether styled rendering should be applied
    #[must_use]
    pub fn styling_enabled(&self) -> bool {
        !self.force_plain
    }

    /// The strategy actually used for rendering
    #[must_use]
    pub fn effective_color_support(&self) -> Option<ColorSupport> {
        if self.force_plain {
            None
        } else {
            self.color_support
        }
    }
}
