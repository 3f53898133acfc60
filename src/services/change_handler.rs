//! Default change handlers
//!
//! Change handlers translate a [`ChangeEvent`] into reducer dispatches for a
//! single field: value first, then a validation result when the field is
//! configured to validate on change.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::config::UploadOptions;
use crate::definition::FieldConfiguration;
use crate::error::FormError;
use crate::events::ChangeEvent;
use crate::state::{FieldValue, FormAction, FormStore, ListItem};

use super::selector::{TextValueSelector, ValueSelector};
use super::traits::{ArrayFieldChangeHandler, ChangeHandler, FieldValidator, FileUploader};

/// Selector-driven handler used when no override is configured
pub struct DefaultChangeHandler {
    field_name: String,
    configuration: FieldConfiguration,
    validator: Box<dyn FieldValidator>,
    selector: Arc<dyn ValueSelector>,
}

impl DefaultChangeHandler {
    pub fn new(
        field_name: impl Into<String>,
        configuration: FieldConfiguration,
        validator: Box<dyn FieldValidator>,
        default_selector: Option<Arc<dyn ValueSelector>>,
    ) -> Self {
        let selector = configuration
            .value_selector
            .clone()
            .or(default_selector)
            .unwrap_or_else(|| Arc::new(TextValueSelector::default()));
        Self {
            field_name: field_name.into(),
            configuration,
            validator,
            selector,
        }
    }

    fn validate_and_dispatch(&self, value: &FieldValue, store: &mut FormStore) -> Result<()> {
        if self.configuration.skip_validation || !self.configuration.validate_on_change() {
            return Ok(());
        }
        let valid = self
            .validator
            .validate(value, &self.configuration.validation_rules)?;
        store.dispatch(FormAction::SetValidity {
            name: self.field_name.clone(),
            valid,
        });
        Ok(())
    }
}

#[async_trait]
impl ChangeHandler for DefaultChangeHandler {
    async fn handle(&self, event: ChangeEvent, store: &mut FormStore) -> Result<()> {
        let current = store
            .state()
            .field(&self.field_name)
            .ok_or_else(|| FormError::UnknownField(self.field_name.clone()))?
            .value
            .clone();

        if self.configuration.readonly {
            tracing::debug!(field = %self.field_name, "ignoring change for readonly field");
            return Ok(());
        }

        let value = match event {
            ChangeEvent::Key(key) => match self.selector.select(&current, &key) {
                Some(value) => value,
                None => return Ok(()),
            },
            ChangeEvent::Set(value) => value,
            ChangeEvent::Clear => {
                store.dispatch(FormAction::ClearValue {
                    name: self.field_name.clone(),
                    value: self.configuration.clear_value.clone().unwrap_or_default(),
                });
                return Ok(());
            }
            ChangeEvent::File(_) => {
                tracing::warn!(field = %self.field_name, "file event on non-upload field");
                return Ok(());
            }
        };

        store.dispatch(FormAction::SetValue {
            name: self.field_name.clone(),
            value: value.clone(),
        });
        self.validate_and_dispatch(&value, store)
    }
}

/// Upload-field handler: runs the uploader, then stores the returned value
pub struct FileChangeHandler {
    field_name: String,
    configuration: FieldConfiguration,
    validator: Box<dyn FieldValidator>,
    uploader: Box<dyn FileUploader>,
    upload_options: Option<UploadOptions>,
}

impl FileChangeHandler {
    pub fn new(
        field_name: impl Into<String>,
        configuration: FieldConfiguration,
        validator: Box<dyn FieldValidator>,
        uploader: Box<dyn FileUploader>,
        upload_options: Option<UploadOptions>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            configuration,
            validator,
            uploader,
            upload_options,
        }
    }
}

#[async_trait]
impl ChangeHandler for FileChangeHandler {
    async fn handle(&self, event: ChangeEvent, store: &mut FormStore) -> Result<()> {
        if store.state().field(&self.field_name).is_none() {
            return Err(FormError::UnknownField(self.field_name.clone()).into());
        }

        if self.configuration.readonly {
            tracing::debug!(field = %self.field_name, "ignoring change for readonly field");
            return Ok(());
        }

        let value = match event {
            ChangeEvent::File(payload) => {
                let options = self
                    .upload_options
                    .as_ref()
                    .ok_or(FormError::MissingUploadOptions)?;
                let stored = self.uploader.upload(&payload, options).await?;
                FieldValue::Text(stored)
            }
            ChangeEvent::Set(value) => value,
            ChangeEvent::Clear => {
                store.dispatch(FormAction::ClearValue {
                    name: self.field_name.clone(),
                    value: self.configuration.clear_value.clone().unwrap_or_default(),
                });
                return Ok(());
            }
            // Upload fields have no key-driven editing
            ChangeEvent::Key(_) => return Ok(()),
        };

        store.dispatch(FormAction::SetValue {
            name: self.field_name.clone(),
            value: value.clone(),
        });

        if !self.configuration.skip_validation && self.configuration.validate_on_change() {
            let valid = self
                .validator
                .validate(&value, &self.configuration.validation_rules)?;
            store.dispatch(FormAction::SetValidity {
                name: self.field_name.clone(),
                valid,
            });
        }
        Ok(())
    }
}

/// List-field handler used when no override is configured
pub struct DefaultArrayFieldChangeHandler {
    field_name: String,
    configuration: FieldConfiguration,
    validator: Box<dyn FieldValidator>,
}

impl DefaultArrayFieldChangeHandler {
    pub fn new(
        field_name: impl Into<String>,
        configuration: FieldConfiguration,
        validator: Box<dyn FieldValidator>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            configuration,
            validator,
        }
    }

    fn revalidate(&self, store: &mut FormStore) -> Result<(), FormError> {
        if self.configuration.skip_validation || !self.configuration.validate_on_change() {
            return Ok(());
        }
        let value = match store.state().field(&self.field_name) {
            Some(field) => field.value.clone(),
            None => return Ok(()),
        };
        let valid = self
            .validator
            .validate(&value, &self.configuration.validation_rules)?;
        store.dispatch(FormAction::SetValidity {
            name: self.field_name.clone(),
            valid,
        });
        Ok(())
    }

    fn ensure_mutable(&self, store: &FormStore) -> Result<bool, FormError> {
        if store.state().field(&self.field_name).is_none() {
            return Err(FormError::UnknownField(self.field_name.clone()));
        }
        if self.configuration.readonly {
            tracing::debug!(field = %self.field_name, "ignoring change for readonly field");
            return Ok(false);
        }
        Ok(true)
    }
}

impl ArrayFieldChangeHandler for DefaultArrayFieldChangeHandler {
    fn add_item(&self, value: String, store: &mut FormStore) -> Result<(), FormError> {
        if !self.ensure_mutable(store)? {
            return Ok(());
        }
        store.dispatch(FormAction::ArrayItemAdded {
            name: self.field_name.clone(),
            item: ListItem::new(value),
        });
        self.revalidate(store)
    }

    fn remove_item(&self, id: Uuid, store: &mut FormStore) -> Result<(), FormError> {
        if !self.ensure_mutable(store)? {
            return Ok(());
        }
        store.dispatch(FormAction::ArrayItemRemoved {
            name: self.field_name.clone(),
            id,
        });
        self.revalidate(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::ValidationRules;
    use crate::services::RegexFieldValidator;
    use crate::state::FieldState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> ChangeEvent {
        ChangeEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn store_with_text(name: &str, value: &str) -> FormStore {
        let mut store = FormStore::new();
        store.dispatch(FormAction::InitializeField {
            field: FieldState::text_with_value(name, value),
        });
        store
    }

    fn handler(configuration: FieldConfiguration) -> DefaultChangeHandler {
        DefaultChangeHandler::new("title", configuration, Box::new(RegexFieldValidator), None)
    }

    mod default_handler {
        use super::*;

        #[tokio::test]
        async fn test_key_input_appends_and_validates() {
            let configuration = FieldConfiguration::with_rules(ValidationRules {
                min_length: Some(3),
                ..Default::default()
            });
            let mut store = store_with_text("title", "ab");

            handler(configuration)
                .handle(key(KeyCode::Char('c')), &mut store)
                .await
                .unwrap();

            let field = store.state().field("title").unwrap();
            assert_eq!(field.value.as_text(), "abc");
            assert!(field.valid);
            assert!(field.touched);
        }

        #[tokio::test]
        async fn test_invalid_input_flags_field() {
            let configuration = FieldConfiguration::with_rules(ValidationRules {
                pattern: Some("^[0-9]+$".to_string()),
                ..Default::default()
            });
            let mut store = store_with_text("title", "12");

            handler(configuration)
                .handle(key(KeyCode::Char('x')), &mut store)
                .await
                .unwrap();

            let field = store.state().field("title").unwrap();
            assert_eq!(field.value.as_text(), "12x");
            assert!(!field.valid);
        }

        #[tokio::test]
        async fn test_readonly_field_ignores_input() {
            let configuration = FieldConfiguration {
                readonly: true,
                ..Default::default()
            };
            let mut store = store_with_text("title", "fixed");

            handler(configuration)
                .handle(key(KeyCode::Char('x')), &mut store)
                .await
                .unwrap();

            assert_eq!(store.state().field("title").unwrap().value.as_text(), "fixed");
        }

        #[tokio::test]
        async fn test_unknown_field_is_an_error() {
            let mut store = FormStore::new();
            let result = handler(FieldConfiguration::default())
                .handle(key(KeyCode::Char('x')), &mut store)
                .await;
            assert!(result.is_err());
        }

        #[tokio::test]
        async fn test_clear_uses_configured_clear_value() {
            let configuration = FieldConfiguration {
                clear_value: Some(FieldValue::Text("n/a".to_string())),
                ..Default::default()
            };
            let mut store = store_with_text("title", "typed");

            handler(configuration)
                .handle(ChangeEvent::Clear, &mut store)
                .await
                .unwrap();

            assert_eq!(store.state().field("title").unwrap().value.as_text(), "n/a");
        }

        #[tokio::test]
        async fn test_clear_falls_back_to_default_value() {
            let mut store = store_with_text("title", "typed");
            handler(FieldConfiguration::default())
                .handle(ChangeEvent::Clear, &mut store)
                .await
                .unwrap();
            assert_eq!(store.state().field("title").unwrap().value.as_text(), "");
        }

        #[tokio::test]
        async fn test_validate_on_change_disabled_keeps_field_pristine() {
            let configuration = FieldConfiguration {
                validation_rules: ValidationRules {
                    min_length: Some(10),
                    ..Default::default()
                },
                validate_on_change: Some(false),
                ..Default::default()
            };
            let mut store = store_with_text("title", "ab");

            handler(configuration)
                .handle(key(KeyCode::Char('c')), &mut store)
                .await
                .unwrap();

            let field = store.state().field("title").unwrap();
            assert!(field.valid);
            assert!(!field.touched);
        }

        #[tokio::test]
        async fn test_navigation_keys_leave_state_unchanged() {
            let mut store = store_with_text("title", "ab");
            let before = store.state().clone();
            handler(FieldConfiguration::default())
                .handle(key(KeyCode::Tab), &mut store)
                .await
                .unwrap();
            assert_eq!(store.state(), &before);
        }

        #[tokio::test]
        async fn test_programmatic_set() {
            let mut store = store_with_text("title", "");
            handler(FieldConfiguration::default())
                .handle(
                    ChangeEvent::Set(FieldValue::Text("direct".to_string())),
                    &mut store,
                )
                .await
                .unwrap();
            assert_eq!(store.state().field("title").unwrap().value.as_text(), "direct");
        }
    }

    mod file_handler {
        use super::*;
        use crate::config::UploadOptions;
        use crate::events::UploadPayload;

        struct FixedUploader {
            stored: &'static str,
        }

        #[async_trait]
        impl FileUploader for FixedUploader {
            async fn upload(
                &self,
                _payload: &UploadPayload,
                _options: &UploadOptions,
            ) -> Result<String> {
                Ok(self.stored.to_string())
            }
        }

        fn file_handler(
            configuration: FieldConfiguration,
            upload_options: Option<UploadOptions>,
        ) -> FileChangeHandler {
            FileChangeHandler::new(
                "avatar",
                configuration,
                Box::new(RegexFieldValidator),
                Box::new(FixedUploader {
                    stored: "https://cdn.test/stored",
                }),
                upload_options,
            )
        }

        fn file_event() -> ChangeEvent {
            ChangeEvent::File(UploadPayload::new("avatar.png", vec![1, 2, 3]))
        }

        #[tokio::test]
        async fn test_upload_stores_returned_value() {
            let mut store = store_with_text("avatar", "");
            file_handler(
                FieldConfiguration::default(),
                Some(UploadOptions::new("https://files.test/upload", "file")),
            )
            .handle(file_event(), &mut store)
            .await
            .unwrap();

            let field = store.state().field("avatar").unwrap();
            assert_eq!(field.value.as_text(), "https://cdn.test/stored");
        }

        #[tokio::test]
        async fn test_upload_revalidates_field() {
            let configuration = FieldConfiguration::with_rules(ValidationRules {
                required: true,
                ..Default::default()
            });
            let mut store = store_with_text("avatar", "");
            file_handler(
                configuration,
                Some(UploadOptions::new("https://files.test/upload", "file")),
            )
            .handle(file_event(), &mut store)
            .await
            .unwrap();

            let field = store.state().field("avatar").unwrap();
            assert!(field.valid);
            assert!(field.touched);
        }

        #[tokio::test]
        async fn test_missing_upload_options_is_an_error() {
            let mut store = store_with_text("avatar", "");
            let result = file_handler(FieldConfiguration::default(), None)
                .handle(file_event(), &mut store)
                .await;
            assert!(result.is_err());
            assert_eq!(store.state().field("avatar").unwrap().value.as_text(), "");
        }

        #[tokio::test]
        async fn test_key_events_are_ignored() {
            let mut store = store_with_text("avatar", "kept");
            file_handler(FieldConfiguration::default(), None)
                .handle(key(KeyCode::Char('x')), &mut store)
                .await
                .unwrap();
            assert_eq!(store.state().field("avatar").unwrap().value.as_text(), "kept");
        }
    }

    mod array_handler {
        use super::*;

        fn array_store() -> FormStore {
            let mut store = FormStore::new();
            store.dispatch(FormAction::InitializeField {
                field: FieldState::list("tags", vec![]),
            });
            store
        }

        fn array_handler(configuration: FieldConfiguration) -> DefaultArrayFieldChangeHandler {
            DefaultArrayFieldChangeHandler::new(
                "tags",
                configuration,
                Box::new(RegexFieldValidator),
            )
        }

        #[test]
        fn test_add_and_remove_items() {
            let mut store = array_store();
            let handler = array_handler(FieldConfiguration::default());

            handler.add_item("rust".to_string(), &mut store).unwrap();
            handler.add_item("tui".to_string(), &mut store).unwrap();
            let items = store.state().field("tags").unwrap().value.as_list().to_vec();
            assert_eq!(items.len(), 2);

            handler.remove_item(items[0].id, &mut store).unwrap();
            let items = store.state().field("tags").unwrap().value.as_list();
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].value, "tui");
        }

        #[test]
        fn test_add_revalidates_list() {
            let configuration = FieldConfiguration::with_rules(ValidationRules {
                max_items: Some(1),
                ..Default::default()
            });
            let mut store = array_store();
            let handler = array_handler(configuration);

            handler.add_item("one".to_string(), &mut store).unwrap();
            assert!(store.state().field("tags").unwrap().valid);

            handler.add_item("two".to_string(), &mut store).unwrap();
            assert!(!store.state().field("tags").unwrap().valid);
        }

        #[test]
        fn test_unknown_field_is_an_error() {
            let mut store = FormStore::new();
            let result = array_handler(FieldConfiguration::default())
                .add_item("x".to_string(), &mut store);
            assert!(matches!(result, Err(FormError::UnknownField(_))));
        }

        #[test]
        fn test_readonly_list_is_noop() {
            let configuration = FieldConfiguration {
                readonly: true,
                ..Default::default()
            };
            let mut store = array_store();
            array_handler(configuration)
                .add_item("x".to_string(), &mut store)
                .unwrap();
            assert!(store.state().field("tags").unwrap().value.as_list().is_empty());
        }
    }
}
