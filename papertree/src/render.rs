//! Flatten the mounted tree into terminal rows.
//!
//! Each mounted node becomes one [`Row`] in pre-order. A row is a list of
//! styled spans, some of which are click targets. [`hit_test`] maps a cell
//! back to the node and interaction under it.

use unicode_width::UnicodeWidthStr;

use crate::event::Interaction;
use crate::icon::IconProvider;
use crate::marker::Marker;
use crate::node::{NodeId, TreeNode};
use crate::theme::{Color, TreeTheme};
use crate::tree::PaperTree;
use crate::walk;

/// Cells of indentation per depth level.
pub const INDENT: usize = 2;

/// Cells reserved for the marker glyph and its gap.
const MARKER_WIDTH: usize = 2;

/// Click target a span belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Marker,
    Icon,
    Name,
}

impl Region {
    /// Interaction triggered by a click on this region.
    pub fn interaction(&self) -> Interaction {
        match self {
            Self::Marker => Interaction::Toggle,
            Self::Icon | Self::Name => Interaction::Select,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub region: Option<Region>,
    pub foreground: Color,
    /// `None` leaves the host background.
    pub background: Option<Color>,
}

impl Span {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            region: None,
            foreground: Color::Inherit,
            background: None,
        }
    }

    pub fn width(&self) -> usize {
        self.text.width()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub node: NodeId,
    pub depth: u16,
    pub marker: Marker,
    pub selected: bool,
    pub spans: Vec<Span>,
}

impl Row {
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Unstyled text of the row.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Region under column `x`.
    pub fn region_at(&self, x: u16) -> Option<Region> {
        let x = usize::from(x);
        let mut start = 0;
        for span in &self.spans {
            let end = start + span.width();
            if x >= start && x < end {
                return span.region;
            }
            start = end;
        }
        None
    }
}

/// Build one row per mounted node, root first.
pub fn rows(tree: &PaperTree, theme: &TreeTheme, icons: &impl IconProvider) -> Vec<Row> {
    walk::pre_order(tree.root())
        .map(|(depth, node)| row(node, depth, theme, icons))
        .collect()
}

fn row(node: &TreeNode, depth: u16, theme: &TreeTheme, icons: &impl IconProvider) -> Row {
    let marker = node.marker();
    let selected = node.is_selected();

    let glyph = match marker {
        Marker::Leaf => "",
        Marker::Collapsed => theme.toggle.collapsed.as_str(),
        Marker::Expanded => theme.toggle.expanded.as_str(),
    };

    let styled = |text: String, region: Region, color: Color| Span {
        text,
        region: Some(region),
        foreground: if selected && !theme.selected_foreground.is_inherit() {
            theme.selected_foreground
        } else {
            color
        },
        background: selected.then_some(theme.selected_background),
    };

    let mut spans = Vec::with_capacity(4);
    if depth > 0 {
        spans.push(Span::plain(" ".repeat(usize::from(depth) * INDENT)));
    }
    spans.push(styled(
        pad(glyph, MARKER_WIDTH),
        Region::Marker,
        theme.toggle.color,
    ));
    spans.push(styled(
        format!("{} ", icons.glyph(node.icon())),
        Region::Icon,
        theme.icon.color,
    ));
    spans.push(styled(node.name().to_string(), Region::Name, Color::Inherit));

    Row {
        node: node.id(),
        depth,
        marker,
        selected,
        spans,
    }
}

/// Right-pad `text` with spaces to at least `width` cells.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Node and interaction under cell `(x, y)`, with rows starting at line 0.
pub fn hit_test(rows: &[Row], x: u16, y: u16) -> Option<(NodeId, Interaction)> {
    let row = rows.get(usize::from(y))?;
    let region = row.region_at(x)?;
    Some((row.node, region.interaction()))
}
