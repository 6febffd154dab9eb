//! Expandable, single-selection tree of labeled nodes.
//!
//! A [`PaperTree`] owns one root [`TreeNode`]. Nodes derive their open state
//! and child list from host-supplied [`NodeRecord`]s, mount child nodes only
//! while open, and report clicks as [`NodeEvent`]s that bubble up to the
//! tree. The tree keeps at most one node selected.

pub mod document;
pub mod error;
pub mod event;
pub mod icon;
pub mod marker;
pub mod node;
pub mod record;
pub mod render;
pub mod theme;
pub mod tree;
pub mod walk;

pub use document::Document;
pub use error::{PaperTreeError, Result};
pub use event::{EventKind, Interaction, NodeEvent, Propagation};
pub use icon::{IconProvider, IconSet};
pub use marker::Marker;
pub use node::{NodeId, TreeNode};
pub use record::{Action, Children, DEFAULT_ICON, NodeRecord};
pub use render::{Region, Row, Span, hit_test, rows};
pub use theme::{Color, IconTheme, MarkerTheme, Rgb, TreeTheme};
pub use tree::{NodeMut, PaperTree};
