//! Icon lookup collaborator.

use std::collections::HashMap;

/// Turns an icon identifier into something a renderer can draw.
pub trait IconProvider {
    fn glyph(&self, icon: &str) -> &str;
}

/// Identifier to glyph table with a fallback for unknown identifiers.
#[derive(Debug, Clone)]
pub struct IconSet {
    glyphs: HashMap<String, String>,
    fallback: String,
}

impl Default for IconSet {
    fn default() -> Self {
        let glyphs = [
            ("folder", "📁"),
            ("folder-open", "📂"),
            ("file", "📄"),
            ("description", "📝"),
            ("image", "🎨"),
            ("code", "📜"),
        ]
        .into_iter()
        .map(|(name, glyph)| (name.to_string(), glyph.to_string()))
        .collect();

        Self {
            glyphs,
            fallback: "•".into(),
        }
    }
}

impl IconSet {
    /// An empty set: every identifier renders `fallback`.
    pub fn empty(fallback: impl Into<String>) -> Self {
        Self {
            glyphs: HashMap::new(),
            fallback: fallback.into(),
        }
    }

    pub fn insert(&mut self, icon: impl Into<String>, glyph: impl Into<String>) {
        self.glyphs.insert(icon.into(), glyph.into());
    }

    /// Add or replace glyphs, e.g. from a theme's icon overrides.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (icon, glyph) in overrides {
            self.insert(icon, glyph);
        }
        self
    }
}

impl IconProvider for IconSet {
    fn glyph(&self, icon: &str) -> &str {
        self.glyphs.get(icon).unwrap_or(&self.fallback)
    }
}
