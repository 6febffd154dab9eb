//! Host documents: root data, actions and theme in one JSON file.
//!
//! ```json
//! {
//!   "data": { "name": "root", "open": true, "children": [ { "name": "a" } ] },
//!   "actions": [ { "label": "Delete", "eventName": "delete" } ],
//!   "theme": { "selected-background-color": "rgba(0, 136, 255, 0.18)" }
//! }
//! ```

use std::fs;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{PaperTreeError, Result};
use crate::icon::IconSet;
use crate::record::{Action, NodeRecord};
use crate::theme::TreeTheme;
use crate::tree::PaperTree;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub data: NodeRecord,
    #[serde(default, deserialize_with = "lenient_actions")]
    pub actions: Vec<Action>,
    #[serde(default, deserialize_with = "lenient_theme")]
    pub theme: TreeTheme,
}

impl Document {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| PaperTreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self::from_json(&input)?;
        debug!(
            "loaded {} ({} actions)",
            path.display(),
            document.actions.len()
        );
        Ok(document)
    }

    /// Icon set with the theme's glyph overrides applied.
    pub fn icons(&self) -> IconSet {
        IconSet::default().with_overrides(self.theme.icon.glyphs.clone())
    }

    /// Build the tree. The theme stays with the caller for rendering.
    pub fn into_tree(self) -> (PaperTree, TreeTheme) {
        let tree = PaperTree::new(self.data).with_actions(self.actions);
        (tree, self.theme)
    }
}

fn lenient_actions<'de, D>(deserializer: D) -> std::result::Result<Vec<Action>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(Action::list_from_value(&value))
}

/// A theme table of the wrong shape falls back to the default theme.
fn lenient_theme<'de, D>(deserializer: D) -> std::result::Result<TreeTheme, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(TreeTheme::deserialize(&value).unwrap_or_else(|e| {
        warn!("ignoring theme: {e}");
        TreeTheme::default()
    }))
}
