//! Host state: the tree, its look, and the rows last drawn.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::info;
use papertree::{Document, IconSet, PaperTree, Row, TreeTheme, hit_test, rows};

/// What the event loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    tree: PaperTree,
    theme: TreeTheme,
    icons: IconSet,
    rows: Vec<Row>,
    /// Last notification that reached the host.
    last_event: Rc<RefCell<Option<String>>>,
}

impl App {
    pub fn new(document: Document) -> Self {
        let icons = document.icons();
        let (mut tree, theme) = document.into_tree();
        let last_event = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&last_event);
        tree.on_toggle(move |node| {
            let state = if node.is_open() { "opened" } else { "closed" };
            info!("toggle '{}' {}", node.name(), state);
            *sink.borrow_mut() = Some(format!("{} {}", state, node.name()));
        });

        let mut app = Self {
            tree,
            theme,
            icons,
            rows: Vec::new(),
            last_event,
        };
        app.refresh();
        app
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn handle(&mut self, event: Event) -> Control {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => Control::Quit,
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Control::Quit,
                _ => Control::Continue,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                self.click(column, row);
                Control::Continue
            }
            _ => Control::Continue,
        }
    }

    /// Route a click at `(x, y)` to the node under it. Returns whether a
    /// node was hit.
    pub fn click(&mut self, x: u16, y: u16) -> bool {
        let Some((node, interaction)) = hit_test(&self.rows, x, y) else {
            return false;
        };
        self.tree.interact(node, interaction);
        self.refresh();
        true
    }

    fn refresh(&mut self) {
        self.rows = rows(&self.tree, &self.theme, &self.icons);
    }

    /// Bottom line: selection, its actions, and the last toggle.
    pub fn status_line(&self) -> String {
        let mut parts = Vec::new();

        match self.tree.selected_node() {
            Some(node) => {
                parts.push(format!("selected: {}", node.name()));
                let labels: Vec<&str> = self
                    .tree
                    .node_actions(node.id())
                    .unwrap_or_default()
                    .iter()
                    .map(|action| action.label.as_str())
                    .collect();
                if !labels.is_empty() {
                    parts.push(format!("actions: {}", labels.join(", ")));
                }
            }
            None => parts.push("nothing selected".to_string()),
        }

        if let Some(event) = self.last_event.borrow().as_ref() {
            parts.push(event.clone());
        }

        parts.push("q to quit".to_string());
        parts.join("  |  ")
    }
}
