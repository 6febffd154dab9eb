//! Plain data supplied by the host: node records and actions.
//!
//! Both types deserialize leniently from JSON. Malformed fields fall back to
//! defaults instead of failing, so a partially broken document still renders.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Icon identifier used when a record carries none.
pub const DEFAULT_ICON: &str = "folder";

/// Shared child sequence. Cloning a record shares its children.
pub type Children = Arc<[NodeRecord]>;

/// The data describing one tree entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeRecord {
    /// Display label.
    pub name: String,
    /// Icon identifier, `None` renders [`DEFAULT_ICON`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Initial expansion hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    /// Child records. `None` means the field was absent, which matters when
    /// the record is re-assigned to a node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,
}

impl NodeRecord {
    /// Create a record with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the icon identifier.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the expansion hint.
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Set the child records.
    pub fn children(mut self, children: Vec<NodeRecord>) -> Self {
        self.children = Some(Arc::from(children));
        self
    }

    /// Share an existing child sequence.
    pub fn shared_children(mut self, children: Children) -> Self {
        self.children = Some(children);
        self
    }

    /// Whether the record asks to be shown expanded.
    pub fn opens(&self) -> bool {
        self.open.unwrap_or(false)
    }

    /// The icon identifier to display.
    pub fn icon_or_default(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_ICON)
    }

    /// Child records, empty when absent.
    pub fn child_records(&self) -> &[NodeRecord] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.child_records().is_empty()
    }

    /// Build a record from arbitrary JSON.
    ///
    /// Non-object values become an empty record. `children` that is present
    /// but not an array is treated as an empty sequence; `null` counts as
    /// absent. `open` follows truthiness.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let name = match object.get("name") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let icon = match object.get("icon") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        };

        let open = match object.get("open") {
            None | Some(Value::Null) => None,
            Some(v) => Some(truthy(v)),
        };

        let children = match object.get("children") {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(items.iter().map(Self::from_value).collect()),
            Some(_) => Some(Arc::from(Vec::new())),
        };

        Self {
            name,
            icon,
            open,
            children,
        }
    }
}

impl<'de> Deserialize<'de> for NodeRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// A menu command available uniformly on every node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Action {
    /// Display name of the menu item.
    pub label: String,
    /// Name of the event dispatched when the item is chosen.
    #[serde(rename = "eventName")]
    pub event_name: String,
}

impl Action {
    pub fn new(label: impl Into<String>, event_name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            event_name: event_name.into(),
        }
    }

    /// Build an action from JSON. Returns `None` for non-object values.
    /// Accepts `eventName` or `event`; missing fields become empty strings.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |key: &str| object.get(key).and_then(Value::as_str);

        Some(Self {
            label: field("label").unwrap_or_default().to_string(),
            event_name: field("eventName")
                .or_else(|| field("event"))
                .unwrap_or_default()
                .to_string(),
        })
    }

    /// Build an action list from JSON, dropping entries that are not objects.
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        match value {
            Value::Array(items) => items.iter().filter_map(Self::from_value).collect(),
            _ => Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value).unwrap_or_default())
    }
}

/// Loose truthiness for hint flags coming from hand-written documents.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let record = NodeRecord::from_value(&json!({}));
        assert_eq!(record.name, "");
        assert_eq!(record.icon_or_default(), "folder");
        assert_eq!(record.open, None);
        assert!(record.children.is_none());
    }

    #[test]
    fn test_non_array_children_is_empty() {
        let record = NodeRecord::from_value(&json!({ "name": "x", "children": "nope" }));
        assert_eq!(record.children.as_deref().map(<[_]>::len), Some(0));
        assert!(!record.has_children());
    }

    #[test]
    fn test_null_children_is_absent() {
        let record = NodeRecord::from_value(&json!({ "name": "x", "children": null }));
        assert!(record.children.is_none());
    }

    #[test]
    fn test_open_truthiness() {
        let open = |v: Value| NodeRecord::from_value(&json!({ "open": v })).opens();
        assert!(open(json!(true)));
        assert!(open(json!(1)));
        assert!(open(json!("yes")));
        assert!(!open(json!(false)));
        assert!(!open(json!(0)));
        assert!(!open(json!("")));
    }

    #[test]
    fn test_non_object_record() {
        assert_eq!(NodeRecord::from_value(&json!(42)), NodeRecord::default());
    }

    #[test]
    fn test_action_event_alias() {
        let a = Action::from_value(&json!({ "label": "Delete", "event": "delete" })).unwrap();
        assert_eq!(a, Action::new("Delete", "delete"));

        let b = Action::from_value(&json!({ "label": "Open", "eventName": "open" })).unwrap();
        assert_eq!(b.event_name, "open");
    }

    #[test]
    fn test_action_list_drops_non_objects() {
        let list = Action::list_from_value(&json!([{ "label": "A" }, 3, "x", { "event": "b" }]));
        assert_eq!(list, vec![Action::new("A", ""), Action::new("", "b")]);
    }
}
