//! Core types for chanlog.
//!
//! This crate provides the data model shared by the renderer and the logger:
//! - [`Style`] and [`ResolvedStyle`] describing how a bracketed segment looks
//! - [`PathPiece`] and [`Severity`] describing the hierarchical prefix
//! - [`ChannelConfig`] and [`ChannelIds`] describing registered channels
//! - [`LogEvent`] and [`Messages`] describing what a log call emitted
//! - Error types for the collaborators a log call can fail in
//!
//! # Design Principles
//!
//! - Plain data, no shared state
//! - All types support `Send + Sync`
//! - Serde shapes match the camelCase configuration objects applications write

#![forbid(unsafe_code)]

mod channel;
mod error;
mod event;
pub mod logging;
mod path;
mod style;

pub use channel::{ChannelConfig, ChannelIds, ChannelOptions};
pub use error::{ChanlogError, ChanlogResult, ColorError, ConfigError};
pub use event::{LogEvent, Messages};
pub use path::{PathPiece, Severity};
pub use style::{
    BOLD_WEIGHT, CHANNEL_FALLBACK_COLOR, NORMAL_WEIGHT, PIECE_FALLBACK_COLOR, ResolvedStyle, Style,
};
