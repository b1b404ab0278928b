//! Forwarding events to the `log` facade.

use chanlog_console::format_line;
use chanlog_console::render::render_plain;
use chanlog_core::logging::{Level, is_enabled, targets};
use chanlog_core::{LogEvent, Severity};

/// Listener body that re-emits events through the `log` crate.
///
/// Events go to target `chanlog::<channel id>` as a plain line, so any
/// `log` backend (env_logger, a file logger, ...) sees channel output too.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBridge;

impl LogBridge {
    /// Create a bridge
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// `log` level for a severity
    #[must_use]
    pub fn level_for(severity: Severity) -> Level {
        match severity {
            Severity::Error => Level::Error,
            Severity::Warn => Level::Warn,
            Severity::Info | Severity::Success => Level::Info,
            Severity::Log => Level::Debug,
        }
    }

    /// `log` target for a channel
    #[must_use]
    pub fn target_for(channel_id: &str) -> String {
        format!("{}::{}", targets::CHANLOG, channel_id)
    }

    /// Plain text of an event, as a non-styled console would print it
    #[must_use]
    pub fn line_for(event: &LogEvent) -> String {
        let prefix = render_plain(&event.channel_id, &event.path);
        format_line(&prefix, &[], &event.messages)
    }

    /// Forward one event
    ///
    /// The line is only formatted when the backend accepts the level and
    /// target.
    pub fn forward(&self, event: &LogEvent) {
        let target = Self::target_for(&event.channel_id);
        let level = Self::level_for(event.severity);
        if !is_enabled(level, &target) {
            return;
        }
        log::log!(target: target.as_str(), level, "{}", Self::line_for(event));
    }
}
