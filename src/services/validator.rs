//! Default validators
//!
//! `RegexFieldValidator` checks one value against declarative rules;
//! `DefaultFormValidator` runs every mounted field through its resolved
//! validator and dispatches the per-field results.

use std::sync::Arc;

use crate::definition::{FieldConfiguration, FormDefinition, ValidationRules};
use crate::error::FormError;
use crate::state::{FieldValue, FormAction, FormStore};

use super::traits::{FieldValidator, FormValidator};

/// Rules-based validator used when no override is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexFieldValidator;

impl RegexFieldValidator {
    fn matches(pattern: &str, text: &str) -> Result<bool, FormError> {
        let regex = regex::Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(regex.is_match(text))
    }

    fn validate_text(text: &str, rules: &ValidationRules) -> Result<bool, FormError> {
        let length = text.chars().count();
        if rules.min_length.is_some_and(|min| length < min) {
            return Ok(false);
        }
        if rules.max_length.is_some_and(|max| length > max) {
            return Ok(false);
        }
        if let Some(pattern) = &rules.pattern {
            return Self::matches(pattern, text);
        }
        Ok(true)
    }
}

impl FieldValidator for RegexFieldValidator {
    fn validate(&self, value: &FieldValue, rules: &ValidationRules) -> Result<bool, FormError> {
        if value.is_empty() {
            // Empty values only fail the `required` rule; pattern and length
            // rules apply to present input.
            return Ok(!rules.required);
        }

        match value {
            FieldValue::Text(text) => Self::validate_text(text, rules),
            FieldValue::Checked(_) => Ok(true),
            FieldValue::List(items) => {
                if rules.min_items.is_some_and(|min| items.len() < min) {
                    return Ok(false);
                }
                if rules.max_items.is_some_and(|max| items.len() > max) {
                    return Ok(false);
                }
                for item in items {
                    if !Self::validate_text(&item.value, rules)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
        }
    }
}

/// Resolve the validator for a field, honoring a configured override
pub(crate) fn resolve_field_validator(
    configuration: Option<&FieldConfiguration>,
) -> Box<dyn FieldValidator> {
    match configuration.and_then(|c| c.field_validator.as_ref()) {
        Some(factory) => factory(),
        None => Box::new(RegexFieldValidator),
    }
}

/// Validates all mounted fields against the form definition
pub struct DefaultFormValidator {
    definition: Arc<FormDefinition>,
}

impl DefaultFormValidator {
    pub fn new(definition: Arc<FormDefinition>) -> Self {
        Self { definition }
    }
}

impl FormValidator for DefaultFormValidator {
    fn validate(&self, store: &mut FormStore) -> Result<bool, FormError> {
        let names: Vec<String> = store.state().fields.keys().cloned().collect();
        let mut all_valid = true;

        for name in names {
            let configuration = self.definition.field_configuration(&name);
            if configuration.is_some_and(|c| c.skip_validation) {
                continue;
            }
            let rules = configuration
                .map(|c| c.validation_rules.clone())
                .unwrap_or_default();
            let value = match store.state().field(&name) {
                Some(field) => field.value.clone(),
                None => continue,
            };
            let validator = resolve_field_validator(configuration);
            let valid = validator.validate(&value, &rules)?;
            all_valid &= valid;
            store.dispatch(FormAction::SetValidity { name, valid });
        }

        Ok(all_valid)
    }
}
