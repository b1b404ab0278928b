//! Channel configuration and friendly channel id tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::Style;

/// Per-channel or per-call options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelOptions {
    /// Style applied to the channel segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl ChannelOptions {
    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying only a style
    #[must_use]
    pub fn with_style(style: Style) -> Self {
        Self { style: Some(style) }
    }

    /// Layer `self` on top of `base`; styles merge field by field.
    #[must_use]
    pub fn over(&self, base: &ChannelOptions) -> ChannelOptions {
        let style = match (&self.style, &base.style) {
            (Some(top), Some(bottom)) => Some(top.over(bottom)),
            (Some(top), None) => Some(top.clone()),
            (None, bottom) => bottom.clone(),
        };
        ChannelOptions { style }
    }
}

/// A registered channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Default options for every call on this channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ChannelOptions>,
}

impl ChannelConfig {
    /// A channel with no default styling
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel with a default style
    #[must_use]
    pub fn styled(style: Style) -> Self {
        Self {
            options: Some(ChannelOptions::with_style(style)),
        }
    }

    /// The channel's default style, if any
    #[must_use]
    pub fn default_style(&self) -> Option<&Style> {
        self.options.as_ref().and_then(|o| o.style.as_ref())
    }
}

/// Friendly names for channel ids, nested arbitrarily deep.
///
/// The logger returns this table verbatim and never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelIds {
    /// A channel id
    Id(String),
    /// A group of named entries
    Group(BTreeMap<String, ChannelIds>),
}

impl Default for ChannelIds {
    fn default() -> Self {
        Self::Group(BTreeMap::new())
    }
}

impl ChannelIds {
    /// Create an empty group
    #[must_use]
    pub fn group() -> Self {
        Self::default()
    }

    /// Add an entry to a group. Has no effect on a leaf.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, entry: impl Into<ChannelIds>) -> Self {
        if let Self::Group(map) = &mut self {
            map.insert(name.into(), entry.into());
        }
        self
    }

    /// Look up a leaf id by dotted path, e.g. `"auth.STATE"`.
    #[must_use]
    pub fn get(&self, dotted: &str) -> Option<&str> {
        let mut node = self;
        for name in dotted.split('.') {
            match node {
                Self::Group(map) => node = map.get(name)?,
                Self::Id(_) => return None,
            }
        }
        match node {
            Self::Id(id) => Some(id.as_str()),
            Self::Group(_) => None,
        }
    }

    /// All leaf ids, depth first in name order
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_ids(&mut out);
        out
    }

    fn collect_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Id(id) => out.push(id),
            Self::Group(map) => {
                for entry in map.values() {
                    entry.collect_ids(out);
                }
            }
        }
    }
}

impl From<&str> for ChannelIds {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl From<String> for ChannelIds {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ids() -> ChannelIds {
        ChannelIds::group()
            .with("DEFAULT", "default")
            .with("auth", ChannelIds::group().with("STATE", "auth/state"))
    }

    #[test]
    fn test_channel_ids_lookup() {
        let ids = sample_ids();
        assert_eq!(ids.get("DEFAULT"), Some("default"));
        assert_eq!(ids.get("auth.STATE"), Some("auth/state"));
        assert_eq!(ids.get("auth"), None);
        assert_eq!(ids.get("auth.STATE.deeper"), None);
        assert_eq!(ids.get("missing"), None);
    }

    #[test]
    fn test_channel_ids_deserialize_nested() {
        let ids: ChannelIds =
            serde_json::from_str(r#"{"DEFAULT":"default","auth":{"STATE":"auth/state"}}"#)
                .unwrap();
        assert_eq!(ids, sample_ids());
        assert_eq!(ids.ids(), vec!["default", "auth/state"]);
    }

    #[test]
    fn test_channel_config_shape() {
        let config: ChannelConfig =
            serde_json::from_str(r##"{"options":{"style":{"color":"#009aff"}}}"##).unwrap();
        assert_eq!(
            config.default_style().and_then(|s| s.color.as_deref()),
            Some("#009aff")
        );

        let empty: ChannelConfig = serde_json::from_str("{}").unwrap();
        assert!(empty.default_style().is_none());
    }

    #[test]
    fn test_options_over_merges_styles() {
        let base = ChannelOptions::with_style(Style::new().color("#009aff").bold());
        let top = ChannelOptions::with_style(Style::new().background("#000"));

        let merged = top.over(&base);
        let style = merged.style.unwrap();
        assert_eq!(style.color.as_deref(), Some("#009aff"));
        assert_eq!(style.background_color, Some(Some("#000".to_string())));
        assert_eq!(style.font_weight.as_deref(), Some("700"));

        assert_eq!(ChannelOptions::new().over(&base), base);
    }
}
