//! Per-call dispatch.
//!
//! A log call moves through these stages, in order:
//!
//! ```text
//! Idle ─► ChannelResolved ─► StyleMerged ─► Gated ─┬─► Rendered ─► Dispatched
//!                                                  └─► Blocked
//! ```
//!
//! Blocked calls have no side effects at all. Dispatched calls write once to
//! the sink and then notify every listener in registration order.

use std::fmt;

use chanlog_console::{ColorSupport, resolve_channel_style};
use chanlog_core::{ChannelOptions, ResolvedStyle};

use crate::registry::LoggerConfig;

/// Why a call produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    /// No channel with this id is registered
    UnregisteredChannel,
    /// Everything is muted
    EverythingMuted,
    /// This channel is muted
    ChannelMuted,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::UnregisteredChannel => "channel not registered",
            Self::EverythingMuted => "all channels muted",
            Self::ChannelMuted => "channel muted",
        };
        f.write_str(reason)
    }
}

/// Outcome of a log call that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// Written to the sink and delivered to listeners
    Dispatched,
    /// Suppressed without side effects
    Blocked(BlockReason),
}

impl Dispatch {
    /// True if output was written
    #[must_use]
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Self::Dispatched)
    }

    /// True if the call was suppressed
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked(_))
    }
}

/// Everything the rendering stage needs, captured from the config so the
/// config lock can be released before any collaborator runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchPlan {
    /// Effective style of the channel segment
    pub channel_style: ResolvedStyle,
    /// Rendering strategy for this call (None = plain)
    pub mode: Option<ColorSupport>,
}

/// Resolve the channel, merge styles and apply the mute gate.
pub fn plan(
    config: &LoggerConfig,
    channel_id: &str,
    options: &ChannelOptions,
) -> Result<DispatchPlan, BlockReason> {
    let channel = config.admit(channel_id)?;
    let channel_style = resolve_channel_style(channel.default_style(), options.style.as_ref());
    Ok(DispatchPlan {
        channel_style,
        mode: config.render_mode(),
    })
}
