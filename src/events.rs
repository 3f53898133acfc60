//! Input events consumed by change handlers
//!
//! The host event loop owns the terminal; this crate only interprets the
//! events it forwards. Key events come straight from crossterm, programmatic
//! changes and uploads use the dedicated variants.

use crossterm::event::KeyEvent;

use crate::state::FieldValue;

/// A change event targeting a single field
#[derive(Debug, Clone)]
pub enum ChangeEvent {
    /// Raw key input from the host terminal
    Key(KeyEvent),
    /// Programmatic value replacement
    Set(FieldValue),
    /// Reset the field to its configured clear value
    Clear,
    /// A file was picked for an upload field
    File(UploadPayload),
}

/// Opaque upload payload handed through to the transport.
///
/// The crate never inspects the bytes; binary handling belongs to the
/// application-supplied transport.
#[derive(Debug, Clone)]
pub struct UploadPayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl UploadPayload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}
