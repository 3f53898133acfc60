//! Form state container and dispatching store

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::actions::FormAction;
use super::field::FieldState;
use super::reducer::reduce;

/// Submission lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitState {
    /// Whether a transition from `self` to `next` is allowed
    pub fn can_transition_to(self, next: SubmitState) -> bool {
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (SubmitState::Idle, SubmitState::Validating)
                | (SubmitState::Validating, SubmitState::Submitting)
                | (SubmitState::Validating, SubmitState::Failed)
                | (SubmitState::Submitting, SubmitState::Succeeded)
                | (SubmitState::Submitting, SubmitState::Failed)
                | (SubmitState::Succeeded, SubmitState::Validating)
                | (SubmitState::Failed, SubmitState::Validating)
                | (_, SubmitState::Idle)
        )
    }
}

/// The full form state owned by the reducer.
///
/// Fields are keyed by name. Nothing outside dispatched actions mutates this;
/// form-level validity is derived, never stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormState {
    pub fields: BTreeMap<String, FieldState>,
    pub submit_state: SubmitState,
    /// Number of submit attempts since the form was created
    pub submit_count: u32,
    /// Message from the most recent `SubmitFailed`, cleared on the next request
    pub submit_error: Option<String>,
}

impl FormState {
    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    /// Form-level validity: every mounted field is valid
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|field| field.valid)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(
            self.submit_state,
            SubmitState::Validating | SubmitState::Submitting
        )
    }
}

/// Reducer-style state container.
///
/// The store is owned by the host event loop; services receive it by mutable
/// reference and communicate exclusively through [`dispatch`](Self::dispatch).
#[derive(Debug, Default)]
pub struct FormStore {
    state: FormState,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: FormState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Apply an action through the reducer
    pub fn dispatch(&mut self, action: FormAction) {
        tracing::debug!(field = action.field_name(), ?action, "dispatch");
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }
}
