//! Form field value objects

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of a list-valued field.
///
/// Entries carry a generated id so removal stays stable when the host
/// reorders or filters the list for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: Uuid,
    pub value: String,
}

impl ListItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            value: value.into(),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    List(Vec<ListItem>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl FieldValue {
    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the checked value (returns false for non-checkbox fields)
    pub fn as_checked(&self) -> bool {
        matches!(self, FieldValue::Checked(true))
    }

    /// Get the list entries (empty slice for non-list fields)
    pub fn as_list(&self) -> &[ListItem] {
        match self {
            FieldValue::List(items) => items,
            _ => &[],
        }
    }

    /// Whether the value counts as empty for `required` validation
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Checked(checked) => !checked,
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

/// Represents a single form field tracked by the reducer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldState {
    pub name: String,
    pub value: FieldValue,
    /// Per-field validity flag, maintained by validation dispatches
    pub valid: bool,
    /// Set once the field has received a validation result
    pub touched: bool,
}

impl FieldState {
    /// Create a new text field
    pub fn text(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: FieldValue::Text(String::new()),
            valid: true,
            touched: false,
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: FieldValue::Text(value.into()),
            valid: true,
            touched: false,
        }
    }

    /// Create a new checkbox field
    pub fn checked(name: &str, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            value: FieldValue::Checked(checked),
            valid: true,
            touched: false,
        }
    }

    /// Create a new list field
    pub fn list(name: &str, items: Vec<ListItem>) -> Self {
        Self {
            name: name.to_string(),
            value: FieldValue::List(items),
            valid: true,
            touched: false,
        }
    }

    /// Create a field with an explicit initial validity flag
    pub fn with_validity(name: &str, value: FieldValue, valid: bool) -> Self {
        Self {
            name: name.to_string(),
            value,
            valid,
            touched: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_value_is_empty_text() {
        let value = FieldValue::default();
        assert_eq!(value, FieldValue::Text(String::new()));
        assert!(value.is_empty());
    }

    #[test]
    fn test_as_text_for_other_variants() {
        assert_eq!(FieldValue::Checked(true).as_text(), "");
        assert_eq!(FieldValue::List(vec![]).as_text(), "");
    }

    #[test]
    fn test_as_checked() {
        assert!(FieldValue::Checked(true).as_checked());
        assert!(!FieldValue::Checked(false).as_checked());
        assert!(!FieldValue::Text("yes".to_string()).as_checked());
    }

    #[test]
    fn test_is_empty() {
        assert!(FieldValue::Text(String::new()).is_empty());
        assert!(!FieldValue::Text("x".to_string()).is_empty());
        assert!(FieldValue::Checked(false).is_empty());
        assert!(!FieldValue::Checked(true).is_empty());
        assert!(FieldValue::List(vec![]).is_empty());
        assert!(!FieldValue::List(vec![ListItem::new("a")]).is_empty());
    }

    #[test]
    fn test_list_items_get_distinct_ids() {
        let a = ListItem::new("same");
        let b = ListItem::new("same");
        assert_ne!(a.id, b.id);
        assert_eq!(a.value, b.value);
    }

    #[test]
    fn test_text_constructor() {
        let field = FieldState::text("email");
        assert_eq!(field.name, "email");
        assert_eq!(field.value.as_text(), "");
        assert!(field.valid);
        assert!(!field.touched);
    }

    #[test]
    fn test_text_with_value_constructor() {
        let field = FieldState::text_with_value("email", "a@b.c");
        assert_eq!(field.value.as_text(), "a@b.c");
    }

    #[test]
    fn test_with_validity_constructor() {
        let field = FieldState::with_validity("terms", FieldValue::Checked(false), false);
        assert!(!field.valid);
        assert!(!field.touched);
    }

    #[test]
    fn test_serialization_round_trip() {
        let field = FieldState::list("tags", vec![ListItem::new("rust")]);
        let json = serde_json::to_string(&field).unwrap();
        let parsed: FieldState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, field);
    }
}
