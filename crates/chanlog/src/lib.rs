//! Channel-based console logging.
//!
//! Applications register named channels, each with a default style, then log
//! through a fluent chain:
//!
//! ```no_run
//! use chanlog::{ChannelConfig, ColorSupport, Logger, LoggerOptions, Style};
//!
//! let logger = Logger::new(
//!     LoggerOptions::new()
//!         .with_color_support(Some(ColorSupport::Terminal))
//!         .with_channel("auth/state", ChannelConfig::styled(Style::new().color("#009aff"))),
//! );
//!
//! // [auth/state][set][ERROR] boom
//! logger.channel("auth/state").with_path(["set"]).error("boom")?;
//! # Ok::<(), chanlog::ChanlogError>(())
//! ```
//!
//! Every call resolves its channel, merges styles, checks the mute gate,
//! renders a prefix, writes to the sink and notifies listeners, all before
//! returning. Calls on unregistered or muted channels do nothing.

#![forbid(unsafe_code)]

pub mod bridge;
pub mod dispatch;
mod handle;
pub mod listeners;
mod logger;
pub mod options;
pub mod registry;

pub use bridge::LogBridge;
pub use dispatch::{BlockReason, Dispatch};
pub use handle::ChannelHandle;
pub use listeners::{Listener, ListenerId};
pub use logger::{Logger, LoggerBuilder};
pub use options::LoggerOptions;
pub use registry::LoggerConfig;

pub use chanlog_console::{
    AnsiColorizer, ColorSupport, Colorize, ConsoleConfig, ConsoleSink, RenderedPrefix, StderrSink,
    WriterSink, testing,
};
pub use chanlog_core::{
    ChanlogError, ChanlogResult, ChannelConfig, ChannelIds, ChannelOptions, ColorError,
    ConfigError, LogEvent, Messages, PathPiece, ResolvedStyle, Severity, Style,
};
