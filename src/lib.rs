//! Reducer-driven form state management for terminal UIs.
//!
//! Field state lives in a [`FormState`] snapshot that only changes through
//! [`FormAction`] dispatches, so every transition is deterministic and easy
//! to test. Side effects (key interpretation, validation, uploads, the
//! submission round trip) live in services resolved by a
//! [`ServiceFactory`], which the host application wires up with a
//! [`FormDefinition`] and its own [`HttpTransport`].
//!
//! A minimal flow:
//!
//! ```
//! use formwork::{FieldState, FormAction, FormStore};
//!
//! let mut store = FormStore::new();
//! store.dispatch(FormAction::InitializeField {
//!     field: FieldState::text("title"),
//! });
//! assert!(store.state().field("title").is_some());
//! ```

pub mod config;
pub mod definition;
pub mod error;
pub mod events;
pub mod services;
pub mod state;

pub use config::{CollectorOptions, ServiceOptions, SubmitOptions, UploadOptions};
pub use definition::{FieldConfiguration, FormDefinition, ValidationRules};
pub use error::FormError;
pub use events::{ChangeEvent, UploadPayload};
pub use services::{
    ChangeHandler, DefaultServiceFactory, HttpRequest, HttpResponse, HttpTransport,
    ServiceFactory, SubmitOutcome, SubmitService,
};
pub use state::{
    FieldState, FieldValue, FormAction, FormState, FormStore, ListItem, SubmitState,
};
