//! Terminal color escapes.

use anstyle::{Color, RgbColor, Style};
use chanlog_core::{ColorError, ResolvedStyle};

/// Wraps text in terminal styling.
///
/// This is the seam for the color library: the logger calls it once per
/// bracketed segment in terminal mode and propagates any error it returns.
pub trait Colorize: Send + Sync {
    /// Style `text` according to `style`
    fn colorize(&self, text: &str, style: &ResolvedStyle) -> Result<String, ColorError>;
}

/// 24-bit ANSI colorizer backed by `anstyle`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiColorizer;

impl AnsiColorizer {
    /// Create the colorizer
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn style_for(style: &ResolvedStyle) -> Result<Style, ColorError> {
        let mut out = Style::new().fg_color(Some(Color::Rgb(parse_hex(&style.color)?)));
        if let Some(bg) = style
            .background_color
            .as_deref()
            .filter(|bg| !bg.eq_ignore_ascii_case("transparent"))
        {
            out = out.bg_color(Some(Color::Rgb(parse_hex(bg)?)));
        }
        if style.is_bold() {
            out = out.bold();
        }
        Ok(out)
    }
}

impl Colorize for AnsiColorizer {
    fn colorize(&self, text: &str, style: &ResolvedStyle) -> Result<String, ColorError> {
        let ansi = Self::style_for(style)?;
        Ok(format!("{}{}{}", ansi.render(), text, ansi.render_reset()))
    }
}

/// Parse `#rgb` or `#rrggbb` (the `#` is optional).
pub fn parse_hex(value: &str) -> Result<RgbColor, ColorError> {
    let invalid = || ColorError::InvalidHex(value.to_string());
    let digits = value.trim().strip_prefix('#').unwrap_or(value.trim());
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    match digits.len() {
        3 => {
            let expand = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
            Ok(RgbColor(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Ok(RgbColor(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(color: &str, bg: Option<&str>, weight: &str) -> ResolvedStyle {
        ResolvedStyle {
            color: color.to_string(),
            background_color: bg.map(String::from),
            font_weight: weight.to_string(),
        }
    }

    #[test]
    fn test_parse_hex_long() {
        assert_eq!(parse_hex("#009aff").unwrap(), RgbColor(0x00, 0x9a, 0xff));
        assert_eq!(parse_hex("FF2400").unwrap(), RgbColor(0xff, 0x24, 0x00));
    }

    #[test]
    fn test_parse_hex_short() {
        assert_eq!(parse_hex("#000").unwrap(), RgbColor(0, 0, 0));
        assert_eq!(parse_hex("#fa0").unwrap(), RgbColor(0xff, 0xaa, 0x00));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        for bad in ["", "#", "#12", "#12345", "#gggggg", "red", "#ff00ff00"] {
            assert_eq!(
                parse_hex(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_colorize_foreground_truecolor() {
        let out = AnsiColorizer
            .colorize("[auth/state]", &resolved("#009aff", None, "400"))
            .unwrap();
        assert!(out.contains("\x1b[38;2;0;154;255m"), "{out:?}");
        assert!(out.contains("[auth/state]"));
        assert!(out.ends_with("\x1b[0m"));
        assert!(!out.contains("\x1b[1m"));
        assert!(!out.contains("48;2"));
    }

    #[test]
    fn test_colorize_bold_and_background() {
        let out = AnsiColorizer
            .colorize("[INFO]", &resolved("#fffa00", Some("#000"), "700"))
            .unwrap();
        assert!(out.contains("\x1b[1m"), "{out:?}");
        assert!(out.contains("48;2;0;0;0"), "{out:?}");
        assert!(out.contains("38;2;255;250;0"), "{out:?}");
    }

    #[test]
    fn test_colorize_transparent_background_word() {
        let out = AnsiColorizer
            .colorize("[x]", &resolved("#717171", Some("transparent"), "400"))
            .unwrap();
        assert!(!out.contains("48;2"));
    }

    #[test]
    fn test_colorize_invalid_color_errors() {
        let err = AnsiColorizer
            .colorize("[x]", &resolved("blue-ish", None, "400"))
            .unwrap_err();
        assert_eq!(err, ColorError::InvalidHex("blue-ish".to_string()));
    }
}
