//! Pure form reducer
//!
//! `reduce` is a pure function: the same `(state, action)` pair always yields
//! the same new state, and field-scoped actions never touch unrelated fields.
//! Actions that cannot apply (unknown field, disallowed submit transition,
//! list mutation on a non-list value) leave state unchanged and log a warning.

use uuid::Uuid;

use super::actions::FormAction;
use super::field::{FieldValue, ListItem};
use super::form_state::{FormState, SubmitState};

/// Apply a single action to the form state
pub fn reduce(state: FormState, action: FormAction) -> FormState {
    match action {
        FormAction::InitializeField { field } => {
            let mut state = state;
            state.fields.insert(field.name.clone(), field);
            state
        }
        FormAction::RemoveField { name } => {
            let mut state = state;
            state.fields.remove(&name);
            state
        }
        FormAction::SetValue { name, value } => apply_to_field(state, &name, |field| {
            field.value = value;
        }),
        FormAction::SetValidity { name, valid } => apply_to_field(state, &name, |field| {
            field.valid = valid;
            field.touched = true;
        }),
        FormAction::ClearValue { name, value } => apply_to_field(state, &name, |field| {
            field.value = value;
            field.valid = true;
            field.touched = false;
        }),
        FormAction::ArrayItemAdded { name, item } => apply_array(state, &name, |items| {
            items.push(item);
        }),
        FormAction::ArrayItemRemoved { name, id } => apply_array(state, &name, |items| {
            remove_item(items, id);
        }),
        FormAction::SubmitRequested => {
            let mut state = transition(state, SubmitState::Validating);
            if state.submit_state == SubmitState::Validating {
                state.submit_count = state.submit_count.saturating_add(1);
                state.submit_error = None;
            }
            state
        }
        FormAction::SubmitStarted => transition(state, SubmitState::Submitting),
        FormAction::SubmitSucceeded => transition(state, SubmitState::Succeeded),
        FormAction::SubmitFailed { message } => {
            let was = state.submit_state;
            let mut state = transition(state, SubmitState::Failed);
            if was != state.submit_state {
                state.submit_error = Some(message);
            }
            state
        }
        FormAction::SubmitReset => {
            let mut state = transition(state, SubmitState::Idle);
            state.submit_error = None;
            state
        }
    }
}

fn apply_to_field(
    mut state: FormState,
    name: &str,
    mutate: impl FnOnce(&mut super::field::FieldState),
) -> FormState {
    match state.fields.get_mut(name) {
        Some(field) => mutate(field),
        None => tracing::warn!(field = name, "action targets unknown field"),
    }
    state
}

fn apply_array(
    mut state: FormState,
    name: &str,
    mutate: impl FnOnce(&mut Vec<ListItem>),
) -> FormState {
    match state.fields.get_mut(name) {
        Some(field) => match &mut field.value {
            FieldValue::List(items) => mutate(items),
            _ => tracing::warn!(field = name, "array action targets non-list field"),
        },
        None => tracing::warn!(field = name, "action targets unknown field"),
    }
    state
}

fn remove_item(items: &mut Vec<ListItem>, id: Uuid) {
    let before = items.len();
    items.retain(|item| item.id != id);
    if items.len() == before {
        tracing::warn!(%id, "array removal targets unknown item");
    }
}

fn transition(mut state: FormState, next: SubmitState) -> FormState {
    if state.submit_state.can_transition_to(next) {
        state.submit_state = next;
    } else {
        tracing::warn!(
            from = ?state.submit_state,
            to = ?next,
            "ignoring disallowed submit transition"
        );
    }
    state
}
