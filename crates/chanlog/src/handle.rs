//! Fluent call chain.
//!
//! `logger.channel(id).with_path(..).with_options(..).error(..)` builds a
//! [`ChannelHandle`] holding the channel id, the accumulated path and the
//! accumulated style override, then hands them to
//! [`Logger::dispatch`](crate::Logger::dispatch).

use chanlog_core::{ChanlogResult, ChannelOptions, Messages, PathPiece, Severity, Style};

use crate::dispatch::Dispatch;
use crate::logger::Logger;

/// Call-chain state for one channel.
///
/// Severity methods take `&self`: a handle can be kept and used for any
/// number of calls, each getting exactly one severity marker.
#[derive(Debug, Clone)]
pub struct ChannelHandle<'a> {
    logger: &'a Logger,
    channel_id: String,
    path: Vec<PathPiece>,
    options: ChannelOptions,
}

impl<'a> ChannelHandle<'a> {
    pub(crate) fn new(logger: &'a Logger, channel_id: String) -> Self {
        Self {
            logger,
            channel_id,
            path: Vec::new(),
            options: ChannelOptions::default(),
        }
    }

    /// Append path pieces
    #[must_use]
    pub fn with_path<I, P>(mut self, pieces: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathPiece>,
    {
        self.path.extend(pieces.into_iter().map(Into::into));
        self
    }

    /// Append one path piece
    #[must_use]
    pub fn with_piece(mut self, piece: impl Into<PathPiece>) -> Self {
        self.path.push(piece.into());
        self
    }

    /// Layer per-call options over any set earlier in the chain
    #[must_use]
    pub fn with_options(mut self, options: ChannelOptions) -> Self {
        self.options = options.over(&self.options);
        self
    }

    /// Shorthand for `with_options` carrying only a style
    #[must_use]
    pub fn with_style(self, style: Style) -> Self {
        self.with_options(ChannelOptions::with_style(style))
    }

    /// Channel id of this chain
    #[must_use]
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Pieces accumulated so far
    #[must_use]
    pub fn path(&self) -> &[PathPiece] {
        &self.path
    }

    /// Options accumulated so far
    #[must_use]
    pub fn options(&self) -> &ChannelOptions {
        &self.options
    }

    /// Emit with an explicit severity
    pub fn emit(&self, severity: Severity, messages: impl Into<Messages>) -> ChanlogResult<Dispatch> {
        let mut path = self.path.clone();
        path.extend(self.logger.severity_marker(severity));
        self.logger
            .dispatch(&self.channel_id, severity, path, &self.options, messages.into())
    }

    /// Emit without a severity marker
    pub fn log(&self, messages: impl Into<Messages>) -> ChanlogResult<Dispatch> {
        self.emit(Severity::Log, messages)
    }

    /// Emit with an `[ERROR]` marker
    pub fn error(&self, messages: impl Into<Messages>) -> ChanlogResult<Dispatch> {
        self.emit(Severity::Error, messages)
    }

    /// Emit with a warning marker (labelled `INFO` unless configured otherwise)
    pub fn warn(&self, messages: impl Into<Messages>) -> ChanlogResult<Dispatch> {
        self.emit(Severity::Warn, messages)
    }

    /// Emit with an `[INFO]` marker
    pub fn info(&self, messages: impl Into<Messages>) -> ChanlogResult<Dispatch> {
        self.emit(Severity::Info, messages)
    }

    /// Emit with a `[SUCCESS]` marker
    pub fn success(&self, messages: impl Into<Messages>) -> ChanlogResult<Dispatch> {
        self.emit(Severity::Success, messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LoggerOptions;
    use chanlog_console::testing::TestConsole;
    use chanlog_core::ChannelConfig;

    fn logger(console: &TestConsole) -> Logger {
        Logger::builder()
            .options(LoggerOptions::new().with_channel("c", ChannelConfig::new()))
            .sink(console.clone())
            .build()
    }

    #[test]
    fn test_with_path_accumulates() {
        let console = TestConsole::new();
        let logger = logger(&console);
        let handle = logger
            .channel("c")
            .with_path(["a", "b"])
            .with_piece(PathPiece::styled("c", Style::new().bold()));
        assert_eq!(handle.path().len(), 3);
        assert_eq!(handle.path()[2].label(), "c");
        assert_eq!(handle.channel_id(), "c");
    }

    #[test]
    fn test_with_options_layers() {
        let console = TestConsole::new();
        let logger = logger(&console);
        let handle = logger
            .channel("c")
            .with_style(Style::new().color("#111111").bold())
            .with_style(Style::new().color("#222222"));
        let style = handle.options().style.as_ref().unwrap();
        assert_eq!(style.color.as_deref(), Some("#222222"));
        assert_eq!(style.font_weight.as_deref(), Some("700"));
    }

    #[test]
    fn test_reused_handle_gets_one_marker_per_call() {
        let console = TestConsole::new();
        let logger = logger(&console);
        let handle = logger.channel("c").with_path(["set"]);

        handle.error("one").unwrap();
        handle.error("two").unwrap();
        handle.log("three").unwrap();

        assert_eq!(
            console.output(),
            vec!["[c][set][ERROR] one", "[c][set][ERROR] two", "[c][set] three"]
        );
        assert_eq!(handle.path().len(), 1);
    }

    #[test]
    fn test_every_severity_marker() {
        let console = TestConsole::new();
        let logger = logger(&console);
        let handle = logger.channel("c");

        handle.log("l").unwrap();
        handle.error("e").unwrap();
        handle.warn("w").unwrap();
        handle.info("i").unwrap();
        handle.success("s").unwrap();

        assert_eq!(
            console.output(),
            vec![
                "[c] l",
                "[c][ERROR] e",
                "[c][INFO] w",
                "[c][INFO] i",
                "[c][SUCCESS] s",
            ]
        );
    }
}
