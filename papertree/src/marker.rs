//! Expansion marker shown in front of each node.

/// Visual state of the twisty control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// No children, no toggle glyph.
    Leaf,
    /// Has children and is closed.
    Collapsed,
    /// Has children and is open.
    Expanded,
}

impl Marker {
    /// Derive the marker from the open flag and the number of derived children.
    pub fn derive(open: bool, child_count: usize) -> Self {
        match (child_count, open) {
            (0, _) => Self::Leaf,
            (_, true) => Self::Expanded,
            (_, false) => Self::Collapsed,
        }
    }

    /// Class list for the marker element.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Leaf => "node-preicon",
            Self::Collapsed => "node-preicon collapsed",
            Self::Expanded => "node-preicon expanded",
        }
    }

    pub fn is_toggleable(&self) -> bool {
        !matches!(self, Self::Leaf)
    }
}
