//! Testing utilities for chanlog output
//!
//! Provides `TestConsole` for capturing and asserting on sink writes in tests.

mod test_console;

pub use test_console::{CapturedWrite, TestConsole};
