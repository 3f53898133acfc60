//! Default HTTP submit service
//!
//! Drives the full submission lifecycle against the reducer: request,
//! validate, collect, send, and report the result as dispatched actions.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::definition::FormDefinition;
use crate::error::FormError;
use crate::state::{FormAction, FormStore};

use super::traits::{
    DataCollector, FormValidator, HttpRequest, HttpTransport, SubmitOutcome, SubmitService,
};

pub struct HttpSubmitService {
    definition: Arc<FormDefinition>,
    validator: Box<dyn FormValidator>,
    collector: Box<dyn DataCollector>,
    transport: Arc<dyn HttpTransport>,
}

impl HttpSubmitService {
    pub fn new(
        definition: Arc<FormDefinition>,
        validator: Box<dyn FormValidator>,
        collector: Box<dyn DataCollector>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            definition,
            validator,
            collector,
            transport,
        }
    }

    fn fail(&self, store: &mut FormStore, message: impl Into<String>) {
        store.dispatch(FormAction::SubmitFailed {
            message: message.into(),
        });
    }
}

#[async_trait]
impl SubmitService for HttpSubmitService {
    async fn submit(&self, store: &mut FormStore) -> Result<SubmitOutcome> {
        if store.state().is_submitting() {
            return Err(FormError::SubmitInProgress.into());
        }

        store.dispatch(FormAction::SubmitRequested);

        // A validator error must still land the form in Failed, otherwise
        // the lifecycle is stuck in Validating and later submits are refused.
        let valid = match self.validator.validate(store) {
            Ok(valid) => valid,
            Err(error) => {
                self.fail(store, error.to_string());
                return Err(error.into());
            }
        };
        if !valid {
            self.fail(store, "validation failed");
            return Ok(SubmitOutcome::Rejected);
        }

        let options = match &self.definition.options.submit {
            Some(options) => options.clone(),
            None => {
                self.fail(store, "no submit endpoint configured");
                return Err(FormError::MissingSubmitOptions.into());
            }
        };

        store.dispatch(FormAction::SubmitStarted);

        let body = self.collector.collect(store.state());
        let request = HttpRequest {
            url: options.url,
            method: options.method,
            body: Value::Object(body),
            file: None,
        };

        tracing::debug!(url = %request.url, method = %request.method, "submitting form");

        match self.transport.send(request).await {
            Ok(response) if response.is_success() => {
                store.dispatch(FormAction::SubmitSucceeded);
                Ok(SubmitOutcome::Completed(response.body))
            }
            Ok(response) => {
                let message = format!("endpoint returned status {}", response.status);
                self.fail(store, message.clone());
                Err(anyhow!(message))
            }
            Err(error) => {
                self.fail(store, error.to_string());
                Err(error)
            }
        }
    }
}
