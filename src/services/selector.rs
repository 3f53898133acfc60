//! Value selectors
//!
//! A selector turns a raw key event into the field's next value. The default
//! change handler picks a selector per field: text fields edit like the usual
//! single-line input, checkbox fields toggle on space or enter.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::FieldValue;

/// Computes the next value of a field from a key event.
///
/// Returning `None` means the event carries no value change for this field.
pub trait ValueSelector: Send + Sync {
    fn select(&self, current: &FieldValue, event: &KeyEvent) -> Option<FieldValue>;
}

/// Character push/pop editing for text fields
#[derive(Debug, Clone, Copy, Default)]
pub struct TextValueSelector {
    /// Enter inserts a newline instead of being ignored
    pub multiline: bool,
}

impl TextValueSelector {
    pub fn multiline() -> Self {
        Self { multiline: true }
    }
}

impl ValueSelector for TextValueSelector {
    fn select(&self, current: &FieldValue, event: &KeyEvent) -> Option<FieldValue> {
        let mut text = current.as_text().to_string();
        match event.code {
            KeyCode::Char(c) => {
                if event.modifiers.contains(KeyModifiers::SHIFT) {
                    text.extend(c.to_uppercase());
                } else {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                text.pop();
            }
            KeyCode::Enter if self.multiline => text.push('\n'),
            _ => return None,
        }
        Some(FieldValue::Text(text))
    }
}

/// Space/enter toggling for checkbox fields
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleValueSelector;

impl ValueSelector for ToggleValueSelector {
    fn select(&self, current: &FieldValue, event: &KeyEvent) -> Option<FieldValue> {
        match event.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                Some(FieldValue::Checked(!current.as_checked()))
            }
            _ => None,
        }
    }
}
