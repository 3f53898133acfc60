//! Reducer actions
//!
//! Every mutation of [`FormState`](super::FormState) goes through one of
//! these actions. Field-scoped actions carry the field name; actions naming
//! an unknown field leave state unchanged.

use uuid::Uuid;

use super::field::{FieldState, FieldValue, ListItem};

/// All state transitions the form reducer understands
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Insert (or overwrite) a field on mount
    InitializeField { field: FieldState },
    /// Drop a field on unmount
    RemoveField { name: String },
    /// Replace a field's value
    SetValue { name: String, value: FieldValue },
    /// Record a validation result for a field
    SetValidity { name: String, valid: bool },
    /// Reset a field's value
    ClearValue { name: String, value: FieldValue },
    /// Append an entry to a list field
    ArrayItemAdded { name: String, item: ListItem },
    /// Remove an entry from a list field by id
    ArrayItemRemoved { name: String, id: Uuid },
    /// Submit was requested; validation starts
    SubmitRequested,
    /// Validation passed; the request is on the wire
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed { message: String },
    /// Return the submission lifecycle to idle
    SubmitReset,
}

impl FormAction {
    /// The field this action is scoped to, if any
    pub fn field_name(&self) -> Option<&str> {
        match self {
            FormAction::InitializeField { field } => Some(&field.name),
            FormAction::RemoveField { name }
            | FormAction::SetValue { name, .. }
            | FormAction::SetValidity { name, .. }
            | FormAction::ClearValue { name, .. }
            | FormAction::ArrayItemAdded { name, .. }
            | FormAction::ArrayItemRemoved { name, .. } => Some(name),
            _ => None,
        }
    }
}
