//! Style hooks for the tree.
//!
//! Every field can be overridden from a document's `theme` table; keys follow
//! the hook names (`selected-background-color`, `selected-color`,
//! `toggle-theme`, `icon-theme`). A color that does not parse keeps the
//! field's default and is logged.

mod color;

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub use color::{Color, Rgb};

/// Background of the selected row.
pub const DEFAULT_SELECTED_BACKGROUND: Color = Color::rgba(0, 136, 255, 0.18);

/// Text and icon color of the selected row.
pub const DEFAULT_SELECTED_FOREGROUND: Color = Color::Inherit;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeTheme {
    #[serde(
        rename = "selected-background-color",
        deserialize_with = "background_or_default"
    )]
    pub selected_background: Color,
    #[serde(rename = "selected-color", deserialize_with = "foreground_or_default")]
    pub selected_foreground: Color,
    #[serde(rename = "toggle-theme")]
    pub toggle: MarkerTheme,
    #[serde(rename = "icon-theme")]
    pub icon: IconTheme,
}

impl Default for TreeTheme {
    fn default() -> Self {
        Self {
            selected_background: DEFAULT_SELECTED_BACKGROUND,
            selected_foreground: DEFAULT_SELECTED_FOREGROUND,
            toggle: MarkerTheme::default(),
            icon: IconTheme::default(),
        }
    }
}

impl TreeTheme {
    pub fn selected_background(mut self, color: Color) -> Self {
        self.selected_background = color;
        self
    }

    pub fn selected_foreground(mut self, color: Color) -> Self {
        self.selected_foreground = color;
        self
    }

    pub fn toggle(mut self, toggle: MarkerTheme) -> Self {
        self.toggle = toggle;
        self
    }

    pub fn icon(mut self, icon: IconTheme) -> Self {
        self.icon = icon;
        self
    }
}

/// Glyphs and color of the expand/collapse marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerTheme {
    pub collapsed: String,
    pub expanded: String,
    #[serde(deserialize_with = "color_or_inherit")]
    pub color: Color,
}

impl Default for MarkerTheme {
    fn default() -> Self {
        Self {
            collapsed: "\u{002B}".into(),
            expanded: "\u{2212}".into(),
            color: Color::Inherit,
        }
    }
}

/// Icon color plus glyph overrides keyed by icon identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconTheme {
    #[serde(deserialize_with = "color_or_inherit")]
    pub color: Color,
    pub glyphs: BTreeMap<String, String>,
}

fn color_or(value: Value, fallback: Color) -> Color {
    match value.as_str().map(str::parse::<Color>) {
        Some(Ok(color)) => color,
        _ => {
            warn!("invalid theme color {value}, using {fallback}");
            fallback
        }
    }
}

fn background_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    Ok(color_or(Value::deserialize(deserializer)?, DEFAULT_SELECTED_BACKGROUND))
}

fn foreground_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    Ok(color_or(Value::deserialize(deserializer)?, DEFAULT_SELECTED_FOREGROUND))
}

fn color_or_inherit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    Ok(color_or(Value::deserialize(deserializer)?, Color::Inherit))
}
