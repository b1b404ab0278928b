//! Style resolution.
//!
//! Every bracketed segment is resolved independently. The channel segment
//! layers the call override over the channel default over the channel
//! fallback. A path piece uses its own style over the path fallback and
//! never sees the channel style.

use chanlog_core::{CHANNEL_FALLBACK_COLOR, PIECE_FALLBACK_COLOR, PathPiece, ResolvedStyle, Style};

/// Effective style of the channel segment.
///
/// Per field: call override, else channel default, else fallback
/// (`#7a7a7a`, weight `400`, transparent). Values are not validated here.
#[must_use]
pub fn resolve_channel_style(
    channel_default: Option<&Style>,
    call_override: Option<&Style>,
) -> ResolvedStyle {
    let merged = match (call_override, channel_default) {
        (Some(top), Some(base)) => top.over(base),
        (Some(top), None) => top.clone(),
        (None, Some(base)) => base.clone(),
        (None, None) => Style::new(),
    };
    merged.resolve_with(CHANNEL_FALLBACK_COLOR)
}

/// Effective style of one path segment (`#717171`, weight `400`,
/// transparent unless the piece says otherwise).
#[must_use]
pub fn resolve_piece_style(piece: &PathPiece) -> ResolvedStyle {
    match piece.style() {
        Some(style) => style.resolve_with(PIECE_FALLBACK_COLOR),
        None => Style::new().resolve_with(PIECE_FALLBACK_COLOR),
    }
}
