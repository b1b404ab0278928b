//! The logger.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chanlog_console::{AnsiColorizer, ColorSupport, Colorize, ConsoleSink, PathRenderer, StderrSink};
use chanlog_core::logging::{targets, trace};
use chanlog_core::{
    ChanlogResult, ChannelConfig, ChannelIds, ChannelOptions, LogEvent, Messages, PathPiece,
    Severity,
};

use crate::bridge::LogBridge;
use crate::dispatch::{self, Dispatch};
use crate::handle::ChannelHandle;
use crate::listeners::{ListenerId, ListenerRegistry};
use crate::options::LoggerOptions;
use crate::registry::LoggerConfig;

/// Channel-based console logger.
///
/// A logger owns its channel registry, mute state and listeners. It is
/// `Send + Sync`; state changes made between calls apply to the next call.
///
/// # Example
///
/// ```no_run
/// use chanlog::{ChannelConfig, ColorSupport, Logger, LoggerOptions, Style};
///
/// let logger = Logger::new(
///     LoggerOptions::new()
///         .with_color_support(Some(ColorSupport::Terminal))
///         .with_channel("auth/state", ChannelConfig::styled(Style::new().color("#009aff"))),
/// );
///
/// logger.channel("auth/state").with_path(["set"]).error("boom")?;
/// # Ok::<(), chanlog::ChanlogError>(())
/// ```
pub struct Logger {
    config: RwLock<LoggerConfig>,
    listeners: ListenerRegistry,
    renderer: PathRenderer,
    sink: Arc<dyn ConsoleSink>,
    channel_ids: ChannelIds,
}

impl Logger {
    /// Create a logger writing to stderr with ANSI colors.
    #[must_use]
    pub fn new(options: LoggerOptions) -> Self {
        Self::builder().options(options).build()
    }

    /// Create a logger using the builder pattern.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn read_config(&self) -> RwLockReadGuard<'_, LoggerConfig> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_config(&self) -> RwLockWriteGuard<'_, LoggerConfig> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ─────────────────────────────────────────────────
    // Facade
    // ─────────────────────────────────────────────────

    /// Start a call chain on a channel.
    ///
    /// The channel does not need to be registered; calls on an unknown id
    /// are dropped silently.
    pub fn channel(&self, channel_id: impl Into<String>) -> ChannelHandle<'_> {
        ChannelHandle::new(self, channel_id.into())
    }

    /// The friendly-name table given at construction
    #[must_use]
    pub fn channel_ids(&self) -> &ChannelIds {
        &self.channel_ids
    }

    // ─────────────────────────────────────────────────
    // Channel registry
    // ─────────────────────────────────────────────────

    /// Register channels. Last write wins per id; nothing is removed.
    pub fn init<I, K>(&self, channels: I)
    where
        I: IntoIterator<Item = (K, ChannelConfig)>,
        K: Into<String>,
    {
        self.write_config().register_channels(channels);
    }

    /// Whether a channel id is registered
    #[must_use]
    pub fn has_channel(&self, channel_id: &str) -> bool {
        self.read_config().channel(channel_id).is_some()
    }

    /// Select a rendering strategy; `None` keeps the current one
    pub fn set_color_support(&self, kind: Option<ColorSupport>) {
        self.write_config().set_color_support(kind);
    }

    /// Selected rendering strategy (None = plain)
    #[must_use]
    pub fn color_support(&self) -> Option<ColorSupport> {
        self.read_config().color_support()
    }

    /// Switch styling on or off, keeping the selected strategy
    pub fn set_styling_enabled(&self, enabled: bool) {
        self.write_config().set_styling_enabled(enabled);
    }

    /// Whether styling is applied
    #[must_use]
    pub fn styling_enabled(&self) -> bool {
        self.read_config().styling_enabled()
    }

    // ─────────────────────────────────────────────────
    // Mute gate
    // ─────────────────────────────────────────────────

    /// Mute one channel
    pub fn mute(&self, channel_id: &str) {
        self.write_config().mute(channel_id);
    }

    /// Unmute one channel
    pub fn unmute(&self, channel_id: &str) {
        self.write_config().unmute(channel_id);
    }

    /// Mute every channel
    pub fn mute_all(&self) {
        self.write_config().mute_all();
    }

    /// Lift the global mute
    pub fn unmute_all(&self) {
        self.write_config().unmute_all();
    }

    /// Whether output on a channel is currently suppressed
    #[must_use]
    pub fn is_gated(&self, channel_id: &str) -> bool {
        self.read_config().is_gated(channel_id)
    }

    /// Individually muted channels
    #[must_use]
    pub fn muted_channels(&self) -> Vec<String> {
        self.read_config().muted_channels()
    }

    /// Whether the global mute is on
    #[must_use]
    pub fn is_everything_muted(&self) -> bool {
        self.read_config().is_everything_muted()
    }

    // ─────────────────────────────────────────────────
    // Listeners
    // ─────────────────────────────────────────────────

    /// Register a listener for every dispatched call
    pub fn add_listener<F>(&self, callback: F) -> ListenerId
    where
        F: Fn(&mut LogEvent) + Send + Sync + 'static,
    {
        self.listeners.add(callback)
    }

    /// Remove a listener; unknown ids are ignored
    pub fn remove_listener(&self, id: ListenerId) {
        self.listeners.remove(id);
    }

    /// Number of registered listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Forward every dispatched call to the `log` facade.
    pub fn bridge_to_log(&self) -> ListenerId {
        let bridge = LogBridge::new();
        self.add_listener(move |event| bridge.forward(event))
    }

    // ─────────────────────────────────────────────────
    // Dispatch
    // ─────────────────────────────────────────────────

    /// Synthetic trailing piece for a severity, honoring the warn label
    /// setting.
    #[must_use]
    pub fn severity_marker(&self, severity: Severity) -> Option<PathPiece> {
        severity.marker(self.read_config().distinct_warn_label())
    }

    /// Run one log call through the pipeline.
    ///
    /// `path` is the complete piece sequence, severity marker included.
    /// Sink and colorizer errors are returned as-is; nothing is written and
    /// no listener runs once rendering has failed.
    pub fn dispatch(
        &self,
        channel_id: &str,
        severity: Severity,
        path: Vec<PathPiece>,
        options: &ChannelOptions,
        messages: Messages,
    ) -> ChanlogResult<Dispatch> {
        let plan = {
            let config = self.read_config();
            dispatch::plan(&config, channel_id, options)
        };
        let plan = match plan {
            Ok(plan) => plan,
            Err(reason) => {
                trace!(
                    target: targets::DISPATCH,
                    "dropped {severity} on {channel_id:?}: {reason}"
                );
                return Ok(Dispatch::Blocked(reason));
            }
        };

        let prefix = self
            .renderer
            .render(channel_id, &plan.channel_style, &path, plan.mode)?;
        self.sink
            .write(prefix.prefix(), prefix.style_args(), messages.as_slice())?;

        let mut event = LogEvent::new(channel_id, severity, path, messages.into_vec());
        self.listeners.notify(&mut event);
        Ok(Dispatch::Dispatched)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerOptions::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.read_config())
            .field("listeners", &self.listeners)
            .field("channel_ids", &self.channel_ids)
            .finish_non_exhaustive()
    }
}

/// Builder for configuring a logger.
pub struct LoggerBuilder {
    options: LoggerOptions,
    sink: Option<Arc<dyn ConsoleSink>>,
    colorizer: Option<Arc<dyn Colorize>>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            options: LoggerOptions::default(),
            sink: None,
            colorizer: None,
        }
    }

    /// Set the construction options.
    #[must_use]
    pub fn options(mut self, options: LoggerOptions) -> Self {
        self.options = options;
        self
    }

    /// Write to a custom sink instead of stderr.
    #[must_use]
    pub fn sink<S: ConsoleSink + 'static>(self, sink: S) -> Self {
        self.shared_sink(Arc::new(sink))
    }

    /// Write to a shared sink.
    #[must_use]
    pub fn shared_sink(mut self, sink: Arc<dyn ConsoleSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Use a custom terminal colorizer.
    #[must_use]
    pub fn colorizer<C: Colorize + 'static>(mut self, colorizer: C) -> Self {
        self.colorizer = Some(Arc::new(colorizer));
        self
    }

    /// Build the logger.
    #[must_use]
    pub fn build(self) -> Logger {
        let LoggerOptions {
            channels,
            channel_ids,
            color_support_type,
            plain,
            distinct_warn_label,
        } = self.options;

        let mut config = LoggerConfig::new();
        config.register_channels(channels);
        config.set_color_support(color_support_type);
        config.set_styling_enabled(!plain);
        config.set_distinct_warn_label(distinct_warn_label);

        let colorizer = self.colorizer.unwrap_or_else(|| Arc::new(AnsiColorizer));
        Logger {
            config: RwLock::new(config),
            listeners: ListenerRegistry::new(),
            renderer: PathRenderer::new(colorizer),
            sink: self.sink.unwrap_or_else(|| Arc::new(StderrSink)),
            channel_ids,
        }
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("options", &self.options)
            .field("custom_sink", &self.sink.is_some())
            .field("custom_colorizer", &self.colorizer.is_some())
            .finish()
    }
}
