//! Form definition and per-field configuration
//!
//! A [`FormDefinition`] is supplied by the host application when the form is
//! declared and stays immutable for the form's lifetime. Per-field
//! [`FieldConfiguration`] overrides take precedence over the default services
//! resolved by the factory.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ServiceOptions;
use crate::services::{ArrayFieldChangeHandler, ChangeHandler, FieldValidator, ValueSelector};
use crate::state::FieldValue;

/// Declarative validation rules consumed by the default field validator
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default)]
    pub required: bool,
    /// Regex the full text value must match
    pub pattern: Option<String>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
}

/// Factory for a user-supplied field validator
pub type ValidatorFactory = Arc<dyn Fn() -> Box<dyn FieldValidator> + Send + Sync>;

/// Factory for a user-supplied change handler
pub type ChangeHandlerFactory = Arc<dyn Fn() -> Box<dyn ChangeHandler> + Send + Sync>;

/// Factory for a user-supplied array-field change handler
pub type ArrayHandlerFactory = Arc<dyn Fn() -> Box<dyn ArrayFieldChangeHandler> + Send + Sync>;

/// Per-field override bag
#[derive(Clone, Default)]
pub struct FieldConfiguration {
    pub validation_rules: ValidationRules,
    /// Leave the field out of validation entirely
    pub skip_validation: bool,
    /// Validate on every change (on by default)
    pub validate_on_change: Option<bool>,
    /// Value used by `ChangeEvent::Clear`; falls back to the value default
    pub clear_value: Option<FieldValue>,
    /// Hidden fields are skipped by the data collector
    pub hidden: bool,
    /// Readonly fields ignore change events
    pub readonly: bool,
    /// Override the default value selector
    pub value_selector: Option<Arc<dyn ValueSelector>>,
    /// Override the default field validator
    pub field_validator: Option<ValidatorFactory>,
    /// Override the default change handler
    pub change_handler: Option<ChangeHandlerFactory>,
    /// Override the default array-field change handler
    pub array_change_handler: Option<ArrayHandlerFactory>,
}

impl FieldConfiguration {
    pub fn with_rules(rules: ValidationRules) -> Self {
        Self {
            validation_rules: rules,
            ..Default::default()
        }
    }

    pub fn validate_on_change(&self) -> bool {
        self.validate_on_change.unwrap_or(true)
    }
}

impl fmt::Debug for FieldConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldConfiguration")
            .field("validation_rules", &self.validation_rules)
            .field("skip_validation", &self.skip_validation)
            .field("validate_on_change", &self.validate_on_change)
            .field("clear_value", &self.clear_value)
            .field("hidden", &self.hidden)
            .field("readonly", &self.readonly)
            .field("value_selector", &self.value_selector.is_some())
            .field("field_validator", &self.field_validator.is_some())
            .field("change_handler", &self.change_handler.is_some())
            .field("array_change_handler", &self.array_change_handler.is_some())
            .finish()
    }
}

/// Everything the host declares about one form
#[derive(Debug, Clone, Default)]
pub struct FormDefinition {
    pub fields: BTreeMap<String, FieldConfiguration>,
    pub options: ServiceOptions,
}

impl FormDefinition {
    pub fn new(options: ServiceOptions) -> Self {
        Self {
            fields: BTreeMap::new(),
            options,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, configuration: FieldConfiguration) -> Self {
        self.fields.insert(name.into(), configuration);
        self
    }

    /// Configuration for a field, if the host declared any
    pub fn field_configuration(&self, name: &str) -> Option<&FieldConfiguration> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_on_change_defaults_to_true() {
        let configuration = FieldConfiguration::default();
        assert!(configuration.validate_on_change());

        let configuration = FieldConfiguration {
            validate_on_change: Some(false),
            ..Default::default()
        };
        assert!(!configuration.validate_on_change());
    }

    #[test]
    fn test_field_configuration_lookup() {
        let definition = FormDefinition::default().with_field(
            "email",
            FieldConfiguration::with_rules(ValidationRules {
                required: true,
                ..Default::default()
            }),
        );
        assert!(definition
            .field_configuration("email")
            .unwrap()
            .validation_rules
            .required);
        assert!(definition.field_configuration("missing").is_none());
    }

    #[test]
    fn test_rules_deserialize_with_defaults() {
        let rules: ValidationRules = serde_json::from_str(r#"{"pattern": "^[a-z]+$"}"#).unwrap();
        assert!(!rules.required);
        assert_eq!(rules.pattern.as_deref(), Some("^[a-z]+$"));
        assert!(rules.min_length.is_none());
    }
}
