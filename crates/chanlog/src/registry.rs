//! Channel registry and mute gate.

use std::collections::{BTreeMap, BTreeSet};

use chanlog_console::ColorSupport;
use chanlog_core::ChannelConfig;
use chanlog_core::logging::{debug, targets};

use crate::dispatch::BlockReason;

/// Per-logger mutable state: registered channels, mute state and the
/// rendering strategy.
///
/// Mute state is read fresh on every call, so changes apply to the next
/// call and never to one already dispatched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerConfig {
    channels: BTreeMap<String, ChannelConfig>,
    muted_channels: BTreeSet<String>,
    everything_muted: bool,
    color_support: Option<ColorSupport>,
    styling_disabled: bool,
    distinct_warn_label: bool,
}

impl LoggerConfig {
    /// Empty registry, plain rendering
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge channels in. Last write wins per id; channels missing from
    /// `channels` stay registered.
    pub fn register_channels<I, K>(&mut self, channels: I)
    where
        I: IntoIterator<Item = (K, ChannelConfig)>,
        K: Into<String>,
    {
        for (id, config) in channels {
            let id = id.into();
            debug!(target: targets::REGISTRY, "registering channel {id:?}");
            self.channels.insert(id, config);
        }
    }

    /// Look up a registered channel
    #[must_use]
    pub fn channel(&self, id: &str) -> Option<&ChannelConfig> {
        self.channels.get(id)
    }

    /// Registered channel ids
    pub fn channel_ids(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    /// Select a rendering strategy. `None` leaves the current one alone.
    pub fn set_color_support(&mut self, kind: Option<ColorSupport>) {
        if let Some(kind) = kind {
            debug!(target: targets::REGISTRY, "color support set to {kind}");
            self.color_support = Some(kind);
        }
    }

    /// Selected rendering strategy (None = plain)
    #[must_use]
    pub fn color_support(&self) -> Option<ColorSupport> {
        self.color_support
    }

    /// Turn styling on or off without forgetting the selected strategy
    pub fn set_styling_enabled(&mut self, enabled: bool) {
        self.styling_disabled = !enabled;
    }

    /// Whether styling is applied
    #[must_use]
    pub fn styling_enabled(&self) -> bool {
        !self.styling_disabled
    }

    /// Strategy actually used for the next call
    #[must_use]
    pub fn render_mode(&self) -> Option<ColorSupport> {
        if self.styling_disabled {
            None
        } else {
            self.color_support
        }
    }

    /// Label `warn` markers `WARN` instead of `INFO`
    pub fn set_distinct_warn_label(&mut self, distinct: bool) {
        self.distinct_warn_label = distinct;
    }

    /// Whether `warn` markers read `WARN`
    #[must_use]
    pub fn distinct_warn_label(&self) -> bool {
        self.distinct_warn_label
    }

    /// Mute one channel. Muting twice is a no-op.
    pub fn mute(&mut self, channel_id: &str) {
        if self.muted_channels.insert(channel_id.to_string()) {
            debug!(target: targets::REGISTRY, "muted channel {channel_id:?}");
        }
    }

    /// Unmute one channel. Unmuting a channel that is not muted is a no-op.
    /// Does not override [`LoggerConfig::mute_all`].
    pub fn unmute(&mut self, channel_id: &str) {
        if self.muted_channels.remove(channel_id) {
            debug!(target: targets::REGISTRY, "unmuted channel {channel_id:?}");
        }
    }

    /// Suppress every channel. The per-channel mute set is left untouched.
    pub fn mute_all(&mut self) {
        if !self.everything_muted {
            debug!(target: targets::REGISTRY, "muted all channels");
        }
        self.everything_muted = true;
    }

    /// Lift the global mute; per-channel mutes still apply.
    pub fn unmute_all(&mut self) {
        if self.everything_muted {
            debug!(target: targets::REGISTRY, "unmuted all channels");
        }
        self.everything_muted = false;
    }

    /// Whether the global mute is on
    #[must_use]
    pub fn is_everything_muted(&self) -> bool {
        self.everything_muted
    }

    /// Individually muted channels
    #[must_use]
    pub fn muted_channels(&self) -> Vec<String> {
        self.muted_channels.iter().cloned().collect()
    }

    /// True if output on `channel_id` is suppressed
    #[must_use]
    pub fn is_gated(&self, channel_id: &str) -> bool {
        self.everything_muted || self.muted_channels.contains(channel_id)
    }

    /// Resolve a channel and check the mute gate.
    ///
    /// Unregistered channels are blocked the same way muted ones are: no
    /// output, no listener notification, no error.
    pub fn admit(&self, channel_id: &str) -> Result<&ChannelConfig, BlockReason> {
        let channel = self
            .channels
            .get(channel_id)
            .ok_or(BlockReason::UnregisteredChannel)?;
        if self.everything_muted {
            return Err(BlockReason::EverythingMuted);
        }
        if self.muted_channels.contains(channel_id) {
            return Err(BlockReason::ChannelMuted);
        }
        Ok(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chanlog_core::Style;
    use chanlog_core::logging::LevelFilter;
    use std::sync::Mutex;

    /// Records registry diagnostics for the whole test binary.
    struct RegistryCapture(Mutex<Vec<String>>);

    impl log::Log for RegistryCapture {
        fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            if record.target() == targets::REGISTRY {
                self.0.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: RegistryCapture = RegistryCapture(Mutex::new(Vec::new()));

    fn captured_messages() -> &'static Mutex<Vec<String>> {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);
        &CAPTURE.0
    }

    fn config_with(ids: &[&str]) -> LoggerConfig {
        let mut config = LoggerConfig::new();
        config.register_channels(ids.iter().map(|id| (*id, ChannelConfig::new())));
        config
    }

    #[test]
    fn test_register_is_additive_last_write_wins() {
        let mut config = LoggerConfig::new();
        config.register_channels([
            ("a", ChannelConfig::styled(Style::new().color("#111111"))),
            ("b", ChannelConfig::new()),
        ]);
        config.register_channels([("a", ChannelConfig::styled(Style::new().color("#222222")))]);

        assert!(config.channel("b").is_some());
        assert_eq!(
            config
                .channel("a")
                .and_then(ChannelConfig::default_style)
                .and_then(|s| s.color.as_deref()),
            Some("#222222")
        );
        assert_eq!(config.channel_ids().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_set_color_support_none_keeps_current() {
        let mut config = LoggerConfig::new();
        config.set_color_support(Some(ColorSupport::Terminal));
        config.set_color_support(None);
        assert_eq!(config.color_support(), Some(ColorSupport::Terminal));
        config.set_color_support(Some(ColorSupport::Chrome));
        assert_eq!(config.color_support(), Some(ColorSupport::Chrome));
    }

    #[test]
    fn test_styling_toggle_keeps_mode() {
        let mut config = LoggerConfig::new();
        config.set_color_support(Some(ColorSupport::Terminal));
        config.set_styling_enabled(false);
        assert_eq!(config.render_mode(), None);
        assert_eq!(config.color_support(), Some(ColorSupport::Terminal));
        config.set_styling_enabled(true);
        assert_eq!(config.render_mode(), Some(ColorSupport::Terminal));
    }

    #[test]
    fn test_mute_unmute_idempotent() {
        let mut config = config_with(&["a"]);
        config.mute("a");
        config.mute("a");
        assert_eq!(config.muted_channels(), vec!["a".to_string()]);
        config.unmute("a");
        assert!(!config.is_gated("a"));
        config.unmute("a");
        config.unmute("never-muted");
        assert!(config.muted_channels().is_empty());
    }

    #[test]
    fn test_mute_all_preserves_channel_mutes() {
        let mut config = config_with(&["a", "b"]);
        config.mute("a");
        config.mute_all();
        assert!(config.is_gated("a"));
        assert!(config.is_gated("b"));

        config.unmute("b");
        assert!(config.is_gated("b"), "unmute must not override mute_all");

        config.unmute_all();
        assert!(config.is_gated("a"));
        assert!(!config.is_gated("b"));
        assert_eq!(config.muted_channels(), vec!["a".to_string()]);
    }

    #[test]
    fn test_admit() {
        let mut config = config_with(&["a", "b"]);
        assert!(config.admit("a").is_ok());
        assert_eq!(config.admit("zzz"), Err(BlockReason::UnregisteredChannel));

        config.mute("a");
        assert_eq!(config.admit("a"), Err(BlockReason::ChannelMuted));

        config.mute_all();
        assert_eq!(config.admit("b"), Err(BlockReason::EverythingMuted));
        assert_eq!(config.admit("zzz"), Err(BlockReason::UnregisteredChannel));
    }

    #[test]
    fn test_global_mute_changes_are_logged() {
        let messages = captured_messages();
        let count = |needle: &str| {
            messages
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.as_str() == needle)
                .count()
        };

        let mut config = config_with(&["a"]);
        let muted_before = count("muted all channels");
        config.mute_all();
        assert!(count("muted all channels") > muted_before);

        let unmuted_before = count("unmuted all channels");
        config.unmute_all();
        assert!(count("unmuted all channels") > unmuted_before);
    }
}
