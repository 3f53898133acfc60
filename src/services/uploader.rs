//! Default file uploader

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::UploadOptions;
use crate::events::UploadPayload;

use super::traits::{FileUploader, HttpRequest, HttpTransport, UploadPayloadRef};

/// JSON pointer used when the options don't name one
const DEFAULT_VALUE_POINTER: &str = "/url";

/// Sends uploads through the application transport and pulls the stored
/// value out of the JSON response
pub struct HttpFileUploader {
    transport: Arc<dyn HttpTransport>,
}

impl HttpFileUploader {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl FileUploader for HttpFileUploader {
    async fn upload(&self, payload: &UploadPayload, options: &UploadOptions) -> Result<String> {
        let request = HttpRequest {
            url: options.url.clone(),
            method: options.http_method.clone(),
            body: Value::Null,
            file: Some(UploadPayloadRef {
                param_name: options.param_name.clone(),
                file_name: payload.file_name.clone(),
                bytes: payload.bytes.clone(),
                content_type: payload.content_type.clone(),
            }),
        };

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(anyhow!("upload failed with status {}", response.status));
        }

        let pointer = options
            .value_pointer
            .as_deref()
            .unwrap_or(DEFAULT_VALUE_POINTER);
        response
            .body
            .pointer(pointer)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("upload response has no string at {pointer}"))
    }
}
