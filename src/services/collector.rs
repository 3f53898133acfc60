//! Default data collector

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::definition::FormDefinition;
use crate::state::{FieldValue, FormState};

use super::traits::DataCollector;

/// Folds visible fields into a JSON object for submission.
///
/// Hidden fields are skipped unless the collector options say otherwise;
/// list fields flatten to arrays of their entry values.
pub struct JsonDataCollector {
    definition: Arc<FormDefinition>,
}

impl JsonDataCollector {
    pub fn new(definition: Arc<FormDefinition>) -> Self {
        Self { definition }
    }

    fn field_value_to_json(value: &FieldValue) -> Value {
        match value {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Checked(checked) => Value::Bool(*checked),
            FieldValue::List(items) => Value::Array(
                items
                    .iter()
                    .map(|item| Value::String(item.value.clone()))
                    .collect(),
            ),
        }
    }
}

impl DataCollector for JsonDataCollector {
    fn collect(&self, state: &FormState) -> Map<String, Value> {
        let options = &self.definition.options.collector;
        let mut body = Map::new();
        for (name, field) in &state.fields {
            if options.exclude.iter().any(|excluded| excluded == name) {
                continue;
            }
            let hidden = self
                .definition
                .field_configuration(name)
                .is_some_and(|c| c.hidden);
            if hidden && !options.include_hidden {
                continue;
            }
            body.insert(name.clone(), Self::field_value_to_json(&field.value));
        }
        body
    }
}
