//! Service resolution
//!
//! The factory is the single place where per-field overrides from the
//! [`FormDefinition`] beat the built-in defaults. Hosts hand it the
//! definition and their transport once and resolve services per field as
//! they mount.

use std::sync::Arc;

use crate::definition::{FieldConfiguration, FormDefinition};

use super::change_handler::{
    DefaultArrayFieldChangeHandler, DefaultChangeHandler, FileChangeHandler,
};
use super::collector::JsonDataCollector;
use super::selector::ValueSelector;
use super::submit::HttpSubmitService;
use super::traits::{
    ArrayFieldChangeHandler, ChangeHandler, DataCollector, FieldValidator, FileUploader,
    FormValidator, HttpTransport, SubmitService,
};
use super::uploader::HttpFileUploader;
use super::validator::{resolve_field_validator, DefaultFormValidator};

/// Resolves the services backing one form
pub trait ServiceFactory: Send + Sync {
    /// Change handler for a text or toggle field. The optional selector is
    /// used when neither the field configuration nor the caller supply one.
    fn create_change_handler(
        &self,
        field_name: &str,
        default_selector: Option<Arc<dyn ValueSelector>>,
    ) -> Box<dyn ChangeHandler>;

    /// Change handler for an upload field
    fn create_file_change_handler(&self, field_name: &str) -> Box<dyn ChangeHandler>;

    /// Change handler for a list field
    fn create_array_field_change_handler(&self, field_name: &str)
        -> Box<dyn ArrayFieldChangeHandler>;

    /// Validator for a single field
    fn create_field_validator(&self, field_name: &str) -> Box<dyn FieldValidator>;

    /// Validator that sweeps every mounted field
    fn create_form_validator(&self) -> Box<dyn FormValidator>;

    /// Submission driver wired to the configured endpoint
    fn create_submit_service(&self) -> Box<dyn SubmitService>;

    fn create_file_uploader(&self) -> Box<dyn FileUploader>;

    fn create_data_collector(&self) -> Box<dyn DataCollector>;
}

/// Factory backed by the built-in services
pub struct DefaultServiceFactory {
    definition: Arc<FormDefinition>,
    transport: Arc<dyn HttpTransport>,
}

impl DefaultServiceFactory {
    pub fn new(definition: Arc<FormDefinition>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            definition,
            transport,
        }
    }

    fn configuration(&self, field_name: &str) -> FieldConfiguration {
        self.definition
            .field_configuration(field_name)
            .cloned()
            .unwrap_or_default()
    }
}

impl ServiceFactory for DefaultServiceFactory {
    fn create_change_handler(
        &self,
        field_name: &str,
        default_selector: Option<Arc<dyn ValueSelector>>,
    ) -> Box<dyn ChangeHandler> {
        let configuration = self.configuration(field_name);
        if let Some(factory) = &configuration.change_handler {
            return factory();
        }
        let validator = self.create_field_validator(field_name);
        Box::new(DefaultChangeHandler::new(
            field_name,
            configuration,
            validator,
            default_selector,
        ))
    }

    fn create_file_change_handler(&self, field_name: &str) -> Box<dyn ChangeHandler> {
        let configuration = self.configuration(field_name);
        if let Some(factory) = &configuration.change_handler {
            return factory();
        }
        let validator = self.create_field_validator(field_name);
        Box::new(FileChangeHandler::new(
            field_name,
            configuration,
            validator,
            self.create_file_uploader(),
            self.definition.options.upload.clone(),
        ))
    }

    fn create_array_field_change_handler(
        &self,
        field_name: &str,
    ) -> Box<dyn ArrayFieldChangeHandler> {
        let configuration = self.configuration(field_name);
        if let Some(factory) = &configuration.array_change_handler {
            return factory();
        }
        let validator = self.create_field_validator(field_name);
        Box::new(DefaultArrayFieldChangeHandler::new(
            field_name,
            configuration,
            validator,
        ))
    }

    fn create_field_validator(&self, field_name: &str) -> Box<dyn FieldValidator> {
        resolve_field_validator(self.definition.field_configuration(field_name))
    }

    fn create_form_validator(&self) -> Box<dyn FormValidator> {
        Box::new(DefaultFormValidator::new(self.definition.clone()))
    }

    fn create_submit_service(&self) -> Box<dyn SubmitService> {
        Box::new(HttpSubmitService::new(
            self.definition.clone(),
            self.create_form_validator(),
            self.create_data_collector(),
            self.transport.clone(),
        ))
    }

    fn create_file_uploader(&self) -> Box<dyn FileUploader> {
        Box::new(HttpFileUploader::new(self.transport.clone()))
    }

    fn create_data_collector(&self) -> Box<dyn DataCollector> {
        Box::new(JsonDataCollector::new(self.definition.clone()))
    }
}
