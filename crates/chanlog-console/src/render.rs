//! Path rendering.
//!
//! A prefix is the channel id followed by every path piece, each in its own
//! brackets with nothing in between: `[auth/state][set][ERROR]`.

use std::fmt;
use std::sync::Arc;

use chanlog_core::logging::{debug, targets};
use chanlog_core::{ColorError, PathPiece, ResolvedStyle};

use crate::colorize::{AnsiColorizer, Colorize};
use crate::detection::ColorSupport;
use crate::resolve::resolve_piece_style;

/// A rendered prefix, shaped for the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedPrefix {
    /// `[channel][piece]...`
    Plain(String),
    /// Bracketed segments with embedded ANSI escapes
    Terminal(String),
    /// One `%c` token per segment and one CSS declaration per token
    Chrome {
        /// Format string, e.g. `%c[auth/state]%c[set]`; `%` in labels is doubled
        format: String,
        /// CSS declarations in token order
        styles: Vec<String>,
    },
}

impl RenderedPrefix {
    /// The leading value handed to the sink
    #[must_use]
    pub fn prefix(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Terminal(s) => s,
            Self::Chrome { format, .. } => format,
        }
    }

    /// Style directives handed to the sink (chrome only)
    #[must_use]
    pub fn style_args(&self) -> &[String] {
        match self {
            Self::Plain(_) | Self::Terminal(_) => &[],
            Self::Chrome { styles, .. } => styles,
        }
    }
}

impl fmt::Display for RenderedPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Renders channel and path pieces with a given strategy.
#[derive(Clone)]
pub struct PathRenderer {
    colorizer: Arc<dyn Colorize>,
}

impl PathRenderer {
    /// Create a renderer with a custom colorizer
    #[must_use]
    pub fn new(colorizer: Arc<dyn Colorize>) -> Self {
        Self { colorizer }
    }

    /// Render a prefix.
    ///
    /// `mode` of `None` renders plain. Only the terminal strategy can fail,
    /// when the colorizer rejects a color value.
    pub fn render(
        &self,
        channel_id: &str,
        channel_style: &ResolvedStyle,
        pieces: &[PathPiece],
        mode: Option<ColorSupport>,
    ) -> Result<RenderedPrefix, ColorError> {
        match mode {
            None => Ok(RenderedPrefix::Plain(render_plain(channel_id, pieces))),
            Some(ColorSupport::Terminal) => {
                let colorize = |label: &str, style: &ResolvedStyle| {
                    self.colorizer.colorize(&bracket(label), style).inspect_err(|e| {
                        debug!(target: targets::RENDER, "cannot style [{label}]: {e}");
                    })
                };
                let mut out = colorize(channel_id, channel_style)?;
                for piece in pieces {
                    out.push_str(&colorize(piece.label(), &resolve_piece_style(piece))?);
                }
                Ok(RenderedPrefix::Terminal(out))
            }
            Some(ColorSupport::Chrome) => {
                let mut format = format!("%c{}", bracket(&escape_format(channel_id)));
                let mut styles = Vec::with_capacity(pieces.len() + 1);
                styles.push(channel_style.to_css());
                for piece in pieces {
                    format.push_str("%c");
                    format.push_str(&bracket(&escape_format(piece.label())));
                    styles.push(resolve_piece_style(piece).to_css());
                }
                Ok(RenderedPrefix::Chrome { format, styles })
            }
        }
    }
}

impl Default for PathRenderer {
    fn default() -> Self {
        Self::new(Arc::new(AnsiColorizer))
    }
}

impl fmt::Debug for PathRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathRenderer").finish_non_exhaustive()
    }
}

/// Unstyled prefix
#[must_use]
pub fn render_plain(channel_id: &str, pieces: &[PathPiece]) -> String {
    let mut out = bracket(channel_id);
    for piece in pieces {
        out.push_str(&bracket(piece.label()));
    }
    out
}

fn bracket(label: &str) -> String {
    format!("[{label}]")
}

/// Labels are literal text inside a console format string.
fn escape_format(label: &str) -> String {
    label.replace('%', "%%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_channel_style;
    use chanlog_core::{Severity, Style};

    fn auth_style() -> ResolvedStyle {
        resolve_channel_style(Some(&Style::new().color("#009aff")), None)
    }

    fn set_error_pieces() -> Vec<PathPiece> {
        vec![PathPiece::from("set"), Severity::Error.marker(false).unwrap()]
    }

    #[test]
    fn test_plain() {
        let prefix = PathRenderer::default()
            .render("auth/state", &auth_style(), &set_error_pieces(), None)
            .unwrap();
        assert_eq!(prefix, RenderedPrefix::Plain("[auth/state][set][ERROR]".into()));
        assert!(prefix.style_args().is_empty());
    }

    #[test]
    fn test_plain_without_pieces() {
        assert_eq!(render_plain("default", &[]), "[default]");
    }

    #[test]
    fn test_terminal_segments_styled_independently() {
        let prefix = PathRenderer::default()
            .render(
                "auth/state",
                &auth_style(),
                &set_error_pieces(),
                Some(ColorSupport::Terminal),
            )
            .unwrap();
        let RenderedPrefix::Terminal(text) = &prefix else {
            panic!("expected terminal prefix, got {prefix:?}");
        };

        let channel_at = text.find("38;2;0;154;255").unwrap();
        let set_at = text.find("38;2;113;113;113").unwrap();
        let error_at = text.find("38;2;255;36;0").unwrap();
        assert!(channel_at < set_at && set_at < error_at);

        let stripped = String::from_utf8(strip_ansi_escapes::strip(text)).unwrap();
        assert_eq!(stripped, "[auth/state][set][ERROR]");
    }

    #[test]
    fn test_terminal_bare_piece_ignores_channel_style() {
        let bold_channel =
            resolve_channel_style(Some(&Style::new().color("#009aff").bold()), None);
        let prefix = PathRenderer::default()
            .render(
                "c",
                &bold_channel,
                &[PathPiece::from("p")],
                Some(ColorSupport::Terminal),
            )
            .unwrap();
        let text = prefix.prefix();
        let piece_part = &text[text.find("[p]").unwrap().saturating_sub(30)..];
        assert!(piece_part.contains("38;2;113;113;113"));
        assert_eq!(text.matches("\x1b[1m").count(), 1);
    }

    #[test]
    fn test_terminal_invalid_piece_color_fails() {
        let pieces = vec![PathPiece::styled("x", Style::new().color("oops"))];
        let err = PathRenderer::default()
            .render("c", &auth_style(), &pieces, Some(ColorSupport::Terminal))
            .unwrap_err();
        assert_eq!(err, ColorError::InvalidHex("oops".into()));
    }

    #[test]
    fn test_chrome_format_and_styles() {
        let prefix = PathRenderer::default()
            .render(
                "auth/state",
                &auth_style(),
                &set_error_pieces(),
                Some(ColorSupport::Chrome),
            )
            .unwrap();
        assert_eq!(prefix.prefix(), "%c[auth/state]%c[set]%c[ERROR]");
        assert_eq!(
            prefix.style_args(),
            &[
                "color: #009aff; font-weight: 400; background-color: transparent".to_string(),
                "color: #717171; font-weight: 400; background-color: transparent".to_string(),
                "color: #ff2400; font-weight: 700; background-color: transparent".to_string(),
            ]
        );
    }

    #[test]
    fn test_chrome_never_validates_colors() {
        let pieces = vec![PathPiece::styled("x", Style::new().color("oops"))];
        let prefix = PathRenderer::default()
            .render("c", &auth_style(), &pieces, Some(ColorSupport::Chrome))
            .unwrap();
        assert_eq!(prefix.style_args()[1], "color: oops; font-weight: 400; background-color: transparent");
    }

    #[test]
    fn test_percent_labels_in_every_mode() {
        let renderer = PathRenderer::default();
        let pieces = vec![PathPiece::from("100%cap")];
        let style = auth_style();

        let plain = renderer.render("c", &style, &pieces, None).unwrap();
        assert_eq!(plain.prefix(), "[c][100%cap]");

        let terminal = renderer
            .render("c", &style, &pieces, Some(ColorSupport::Terminal))
            .unwrap();
        let stripped = String::from_utf8(strip_ansi_escapes::strip(terminal.prefix())).unwrap();
        assert_eq!(stripped, "[c][100%cap]");

        let chrome = renderer
            .render("c%c", &style, &pieces, Some(ColorSupport::Chrome))
            .unwrap();
        assert_eq!(chrome.prefix(), "%c[c%%c]%c[100%%cap]");
        assert_eq!(chrome.style_args().len(), 2);
        assert_eq!(
            crate::console::format_line(chrome.prefix(), chrome.style_args(), &[]),
            "[c%c][100%cap]"
        );
    }

    #[test]
    fn test_bracket_count_matches_pieces() {
        let renderer = PathRenderer::default();
        for n in 0..6 {
            let pieces: Vec<PathPiece> = (0..n).map(|i| PathPiece::from(format!("p{i}"))).collect();
            for mode in [None, Some(ColorSupport::Terminal), Some(ColorSupport::Chrome)] {
                let prefix = renderer.render("ch", &auth_style(), &pieces, mode).unwrap();
                let plain = String::from_utf8(strip_ansi_escapes::strip(prefix.prefix())).unwrap();
                assert_eq!(plain.matches('[').count(), n + 1, "{mode:?}");
            }
        }
    }
}
