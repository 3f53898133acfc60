//! Service protocol traits resolved by the factory, with transport
//! abstraction to enable mocking in tests

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::config::UploadOptions;
use crate::definition::ValidationRules;
use crate::error::FormError;
use crate::events::{ChangeEvent, UploadPayload};
use crate::state::{FieldValue, FormState, FormStore};

/// Interprets change events for one field and dispatches the resulting
/// value and validation actions
#[async_trait]
pub trait ChangeHandler: Send + Sync {
    async fn handle(&self, event: ChangeEvent, store: &mut FormStore) -> Result<()>;
}

/// Add/remove entries of a list field
pub trait ArrayFieldChangeHandler: Send + Sync {
    fn add_item(&self, value: String, store: &mut FormStore) -> Result<(), FormError>;
    fn remove_item(&self, id: Uuid, store: &mut FormStore) -> Result<(), FormError>;
}

/// Validates a single value against declarative rules
pub trait FieldValidator: Send + Sync {
    fn validate(&self, value: &FieldValue, rules: &ValidationRules) -> Result<bool, FormError>;
}

/// Validates every mounted field and dispatches per-field validity
pub trait FormValidator: Send + Sync {
    fn validate(&self, store: &mut FormStore) -> Result<bool, FormError>;
}

/// Folds form state into a submission body
pub trait DataCollector: Send + Sync {
    fn collect(&self, state: &FormState) -> Map<String, Value>;
}

/// Outcome of a submit attempt that reached a decision
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Rejected,
    /// The endpoint accepted the submission
    Completed(Value),
}

/// Drives the submission lifecycle
#[async_trait]
pub trait SubmitService: Send + Sync {
    async fn submit(&self, store: &mut FormStore) -> Result<SubmitOutcome>;
}

/// Sends an upload payload and returns the stored-value string
#[async_trait]
pub trait FileUploader: Send + Sync {
    async fn upload(&self, payload: &UploadPayload, options: &UploadOptions) -> Result<String>;
}

/// An HTTP request as handed to the application's transport
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: String,
    pub body: Value,
    /// Present for uploads only; the transport owns binary handling
    pub file: Option<UploadPayloadRef>,
}

/// Upload metadata attached to a transport request
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPayloadRef {
    pub param_name: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// An HTTP response as returned by the application's transport
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Value,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for the wire collaborator supplied by the host application,
/// enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}
