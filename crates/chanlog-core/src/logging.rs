//! Diagnostic logging for chanlog itself.
//!
//! chanlog reports its own internal decisions (dropped calls, mute changes,
//! listener churn) through the standard [`log`] facade. It does not install
//! a log implementation; applications choose their own backend.
//!
//! # Log Targets
//!
//! - `chanlog`: Root target for all chanlog diagnostics
//! - `chanlog::registry`: Channel registration and mute state
//! - `chanlog::dispatch`: Per-call gating decisions
//! - `chanlog::listeners`: Listener add/remove
//! - `chanlog::render`: Prefix rendering
//!
//! Example filter: `RUST_LOG=chanlog::dispatch=trace`

// Re-export log macros for ergonomic use
pub use log::{debug, error, info, trace, warn};

// Re-export log level types for programmatic use
pub use log::{Level, LevelFilter};

/// Log targets used by chanlog components.
pub mod targets {
    /// Root target for all chanlog diagnostics.
    pub const CHANLOG: &str = "chanlog";

    /// Channel registration and mute state.
    pub const REGISTRY: &str = "chanlog::registry";

    /// Per-call gating and dispatch.
    pub const DISPATCH: &str = "chanlog::dispatch";

    /// Listener registration.
    pub const LISTENERS: &str = "chanlog::listeners";

    /// Prefix rendering.
    pub const RENDER: &str = "chanlog::render";
}

/// Returns whether logging is enabled at the given level for the given target.
#[inline]
#[must_use]
pub fn is_enabled(level: Level, target: &str) -> bool {
    log::log_enabled!(target: target, level)
}
