//! Declarative tool input schemas and the validator that interprets them.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use std::fmt;

/// The constraint attached to a single input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// A required string.
    String,
    /// A required string whose length in characters lies within the bounds (inclusive).
    BoundedString {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// A string that may be omitted.
    OptionalString,
    /// An array of strings that may be omitted.
    OptionalStringArray,
}

impl FieldKind {
    fn is_required(&self) -> bool {
        matches!(self, FieldKind::String | FieldKind::BoundedString { .. })
    }

    fn describe(&self) -> String {
        match self {
            FieldKind::String | FieldKind::OptionalString => "string".to_string(),
            FieldKind::BoundedString { min, max } => match (min, max) {
                (Some(min), Some(max)) if min == max => format!("string of exactly {min} characters"),
                (Some(min), Some(max)) => format!("string of {min} to {max} characters"),
                (Some(min), None) => format!("string of at least {min} characters"),
                (None, Some(max)) => format!("string of at most {max} characters"),
                (None, None) => "string".to_string(),
            },
            FieldKind::OptionalStringArray => "array of strings".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub description: String,
    pub kind: FieldKind,
}

/// An ordered set of named fields describing a tool's arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSchema {
    fields: Vec<Field>,
}

impl InputSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        kind: FieldKind,
        description: impl Into<String>,
    ) -> Self {
        self.fields.push(Field {
            name: name.into(),
            description: description.into(),
            kind,
        });
        self
    }

    pub fn string(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.field(name, FieldKind::String, description)
    }

    pub fn bounded_string(
        self,
        name: impl Into<String>,
        min: Option<usize>,
        max: Option<usize>,
        description: impl Into<String>,
    ) -> Self {
        self.field(name, FieldKind::BoundedString { min, max }, description)
    }

    pub fn optional_string(self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.field(name, FieldKind::OptionalString, description)
    }

    pub fn optional_string_array(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.field(name, FieldKind::OptionalStringArray, description)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Renders the schema as a JSON Schema object for `tools/list`.
    pub fn to_json_schema(&self) -> schemars::Schema {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            let mut property = match &field.kind {
                FieldKind::String | FieldKind::OptionalString => json!({ "type": "string" }),
                FieldKind::BoundedString { min, max } => {
                    let mut property = json!({ "type": "string" });
                    if let Some(min) = min {
                        property["minLength"] = json!(min);
                    }
                    if let Some(max) = max {
                        property["maxLength"] = json!(max);
                    }
                    property
                }
                FieldKind::OptionalStringArray => {
                    json!({ "type": "array", "items": { "type": "string" } })
                }
            };
            if !field.description.is_empty() {
                property["description"] = json!(field.description);
            }
            properties.insert(field.name.clone(), property);

            if field.kind.is_required() {
                required.push(field.name.clone());
            }
        }

        schemars::json_schema!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// A field-level diagnostic produced when raw input does not satisfy a schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Path to the offending value, e.g. `state` or `tags[1]`. Empty for the root.
    pub path: String,
    /// The constraint that was expected.
    pub constraint: String,
    /// The value that was found; `null` when the field was missing.
    pub actual: Value,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, constraint: impl Into<String>, actual: Value) -> Self {
        Self {
            path: path.into(),
            constraint: constraint.into(),
            actual,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "input"
        } else {
            &self.path
        };
        write!(f, "{path}: expected {}, got {}", self.constraint, self.actual)
    }
}

impl std::error::Error for ValidationError {}

/// Arguments that have passed schema validation.
///
/// Only declared fields are retained and absent optional fields are omitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedInput {
    fields: Map<String, Value>,
}

impl ValidatedInput {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Deserializes the record into a typed parameter struct.
    pub fn parse<T: DeserializeOwned>(self) -> serde_json::Result<T> {
        serde_json::from_value(Value::Object(self.fields))
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

pub trait SchemaValidator: Send + Sync {
    fn validate(&self, schema: &InputSchema, raw: &Value)
    -> Result<ValidatedInput, ValidationError>;
}

/// The default validator, interpreting each [`FieldKind`] directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldValidator;

impl SchemaValidator for FieldValidator {
    fn validate(
        &self,
        schema: &InputSchema,
        raw: &Value,
    ) -> Result<ValidatedInput, ValidationError> {
        let Some(raw) = raw.as_object() else {
            return Err(ValidationError::new("", "object", raw.clone()));
        };

        let null = Value::Null;
        let mut fields = Map::new();
        for field in schema.fields() {
            // optional fields treat null the same as a missing key
            let value = match raw.get(&field.name) {
                Some(Value::Null) | None if !field.kind.is_required() => continue,
                Some(value) => value,
                None => &null,
            };
            check_field(&field.name, &field.kind, value)?;
            fields.insert(field.name.clone(), value.clone());
        }

        Ok(ValidatedInput { fields })
    }
}

fn check_field(name: &str, kind: &FieldKind, value: &Value) -> Result<(), ValidationError> {
    let mismatch = || ValidationError::new(name, kind.describe(), value.clone());

    match kind {
        FieldKind::String | FieldKind::OptionalString => {
            value.as_str().ok_or_else(mismatch)?;
        }
        FieldKind::BoundedString { min, max } => {
            let len = value.as_str().ok_or_else(mismatch)?.chars().count();
            if min.is_some_and(|min| len < min) || max.is_some_and(|max| len > max) {
                return Err(mismatch());
            }
        }
        FieldKind::OptionalStringArray => {
            let items = value.as_array().ok_or_else(mismatch)?;
            for (idx, item) in items.iter().enumerate() {
                if !item.is_string() {
                    return Err(ValidationError::new(
                        format!("{name}[{idx}]"),
                        "string",
                        item.clone(),
                    ));
                }
            }
        }
    }

    Ok(())
}
