#![forbid(unsafe_code)]
//! Rendering and output for chanlog.
//!
//! Turns a channel id plus its path pieces into a prefix for one of three
//! rendering strategies, and writes prefix and messages to a console sink:
//!
//! - **plain**: `[channel][piece]...` with no styling
//! - **terminal**: each bracketed segment wrapped in 24-bit ANSI escapes
//! - **chrome**: a `%c` format string plus one CSS declaration per segment

pub mod colorize;
pub mod config;
pub mod console;
pub mod detection;
pub mod render;
pub mod resolve;
pub mod testing;

pub use colorize::{AnsiColorizer, Colorize, parse_hex};
pub use config::ConsoleConfig;
pub use console::{ConsoleSink, StderrSink, WriterSink, format_line};
pub use detection::{ColorSupport, ParseColorSupportError};
pub use render::{PathRenderer, RenderedPrefix};
pub use resolve::{resolve_channel_style, resolve_piece_style};
