//! Fixed-schema validation of JSON text.
//!
//! A [`SchemaDefinition`] is an ordered list of required keys with the JSON
//! value kind each must hold. [`SchemaValidator::validate`] classifies an
//! arbitrary text blob into exactly one [`ValidationResult`]:
//!
//! 1. not parseable → [`ValidationResult::ParseError`]
//! 2. parseable but not an object → [`ValidationResult::NotAnObject`]
//! 3. any required key absent → [`ValidationResult::MissingKeys`] (every
//!    absent key, in schema order; type checks are skipped)
//! 4. any present key of the wrong kind → [`ValidationResult::TypeMismatches`]
//! 5. otherwise [`ValidationResult::Valid`]
//!
//! Kinds are compared strictly: a boolean is never an integer and `30.0` is a
//! `number`, not an `integer`.
//!
//! The definition can also be exported as a JSON Schema document built with
//! [`schemars`] types, see [`SchemaDefinition::to_json_schema`].

use std::fmt::Display;

use schemars::schema::{InstanceType, ObjectValidation, Schema, SchemaObject};
use serde_json::Value;

use crate::error::Result;

/// JSON value kinds a schema field can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    Integer,
    Number,
    Boolean,
    Array,
    Object,
    Null,
}

impl ValueKind {
    /// Classify a parsed value. Whole numbers are `Integer`, everything else
    /// numeric is `Number`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::Text,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueKind::Integer,
            Value::Number(_) => ValueKind::Number,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Null => ValueKind::Null,
        }
    }

    /// Whether `value` satisfies this kind. `Number` accepts integers too.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            ValueKind::Number => value.is_number(),
            kind => ValueKind::of(value) == kind,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Integer => "integer",
            ValueKind::Number => "number",
            ValueKind::Boolean => "boolean",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Null => "null",
        }
    }

    fn instance_type(self) -> InstanceType {
        match self {
            ValueKind::Text => InstanceType::String,
            ValueKind::Integer => InstanceType::Integer,
            ValueKind::Number => InstanceType::Number,
            ValueKind::Boolean => InstanceType::Boolean,
            ValueKind::Array => InstanceType::Array,
            ValueKind::Object => InstanceType::Object,
            ValueKind::Null => InstanceType::Null,
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered required keys and their expected kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDefinition {
    fields: Vec<(String, ValueKind)>,
}

impl Default for SchemaDefinition {
    fn default() -> Self {
        Self::contact()
    }
}

impl SchemaDefinition {
    pub fn new<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, ValueKind)>,
        K: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// The contact-record schema used by the JSON validation task:
    /// `name` text, `age` integer, `email` text, `city` text.
    pub fn contact() -> Self {
        Self::new([
            ("name", ValueKind::Text),
            ("age", ValueKind::Integer),
            ("email", ValueKind::Text),
            ("city", ValueKind::Text),
        ])
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, ValueKind)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Export as a draft-07 JSON Schema object.
    pub fn to_json_schema(&self) -> Result<Value> {
        let mut object = ObjectValidation::default();
        for (key, kind) in self.fields() {
            let property = SchemaObject {
                instance_type: Some(kind.instance_type().into()),
                ..Default::default()
            };
            object
                .properties
                .insert(key.to_owned(), Schema::Object(property));
            object.required.insert(key.to_owned());
        }

        let mut root = SchemaObject {
            instance_type: Some(InstanceType::Object.into()),
            object: Some(Box::new(object)),
            ..Default::default()
        };
        root.extensions.insert(
            "$schema".to_owned(),
            Value::String("http://json-schema.org/draft-07/schema#".to_owned()),
        );

        Ok(serde_json::to_value(root)?)
    }
}

/// A present key whose value has the wrong kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatch {
    pub key: String,
    pub expected: ValueKind,
    pub actual: ValueKind,
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} expected {}, got {}", self.key, self.expected, self.actual)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The parser's diagnostic.
    ParseError(String),
    NotAnObject,
    MissingKeys(Vec<String>),
    TypeMismatches(Vec<TypeMismatch>),
    Valid,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationResult::ParseError(detail) => {
                write!(f, "[Invalid JSON] Error: {detail}")
            }
            ValidationResult::NotAnObject => {
                f.write_str("[Invalid JSON] Root element must be a JSON object.")
            }
            ValidationResult::MissingKeys(keys) => {
                write!(f, "[Schema Mismatch] Missing keys: {}", keys.join(", "))
            }
            ValidationResult::TypeMismatches(mismatches) => {
                let joined = mismatches
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[Schema Mismatch] Type errors: {joined}")
            }
            ValidationResult::Valid => {
                f.write_str("[Valid JSON] JSON structure is correct and matches schema.")
            }
        }
    }
}

/// Validates text against a [`SchemaDefinition`] supplied at construction.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    schema: SchemaDefinition,
}

impl SchemaValidator {
    pub fn new(schema: SchemaDefinition) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &SchemaDefinition {
        &self.schema
    }

    pub fn validate(&self, text: &str) -> ValidationResult {
        let parsed: Value = match serde_json::from_str(text) {
            Ok(value) => value,
            Err(err) => return ValidationResult::ParseError(err.to_string()),
        };

        let Value::Object(object) = parsed else {
            return ValidationResult::NotAnObject;
        };

        let missing: Vec<String> = self
            .schema
            .fields()
            .filter(|(key, _)| !object.contains_key(*key))
            .map(|(key, _)| key.to_owned())
            .collect();
        if !missing.is_empty() {
            return ValidationResult::MissingKeys(missing);
        }

        let mismatches: Vec<TypeMismatch> = self
            .schema
            .fields()
            .filter_map(|(key, expected)| {
                let value = object.get(key)?;
                (!expected.accepts(value)).then(|| TypeMismatch {
                    key: key.to_owned(),
                    expected,
                    actual: ValueKind::of(value),
                })
            })
            .collect();
        if !mismatches.is_empty() {
            return ValidationResult::TypeMismatches(mismatches);
        }

        ValidationResult::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(text: &str) -> ValidationResult {
        SchemaValidator::default().validate(text)
    }

    #[test]
    fn complete_record_is_valid() {
        let result = validate(r#"{"name":"A","age":30,"email":"a@b.com","city":"X"}"#);
        assert_eq!(result, ValidationResult::Valid);
        assert_eq!(
            result.to_string(),
            "[Valid JSON] JSON structure is correct and matches schema."
        );
    }

    #[test]
    fn reports_every_missing_key_in_schema_order() {
        let result = validate(r#"{"name":"A"}"#);
        assert_eq!(
            result,
            ValidationResult::MissingKeys(vec!["age".into(), "email".into(), "city".into()])
        );
        assert_eq!(
            result.to_string(),
            "[Schema Mismatch] Missing keys: age, email, city"
        );
    }

    #[test]
    fn string_age_is_a_type_mismatch() {
        let result = validate(r#"{"name":"A","age":"30","email":"a@b.com","city":"X"}"#);
        let ValidationResult::TypeMismatches(ref mismatches) = result else {
            panic!("expected type mismatches, got {result:?}");
        };
        let rendered: Vec<String> = mismatches.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, vec!["age expected integer, got text"]);
    }

    #[test]
    fn missing_keys_take_precedence_over_type_errors() {
        let result = validate(r#"{"name":42,"age":"30"}"#);
        assert_eq!(
            result,
            ValidationResult::MissingKeys(vec!["email".into(), "city".into()])
        );
    }

    #[test]
    fn lists_every_mismatch() {
        let result = validate(r#"{"name":1,"age":true,"email":null,"city":["X"]}"#);
        assert_eq!(
            result.to_string(),
            "[Schema Mismatch] Type errors: name expected text, got integer, \
             age expected integer, got boolean, email expected text, got null, \
             city expected text, got array"
        );
    }

    #[test]
    fn fractional_age_is_not_an_integer() {
        let result = validate(r#"{"name":"A","age":30.5,"email":"a@b.com","city":"X"}"#);
        assert!(result.to_string().contains("age expected integer, got number"));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let result = validate("not json");
        assert!(matches!(result, ValidationResult::ParseError(_)));
        assert!(result.to_string().starts_with("[Invalid JSON] Error: "));
    }

    #[test]
    fn arrays_are_not_objects() {
        assert_eq!(validate("[1,2,3]"), ValidationResult::NotAnObject);
    }

    #[test]
    fn exports_a_json_schema_document() {
        let schema = SchemaDefinition::contact().to_json_schema().unwrap();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["age"]["type"], "integer");
        assert_eq!(schema["properties"]["city"]["type"], "string");
        assert_eq!(schema["required"].as_array().unwrap().len(), 4);
        assert_eq!(schema["$schema"], "http://json-schema.org/draft-07/schema#");
    }

    #[test]
    fn number_kind_accepts_integers() {
        let validator = SchemaValidator::new(SchemaDefinition::new([("score", ValueKind::Number)]));
        assert!(validator.validate(r#"{"score": 7}"#).is_valid());
        assert!(validator.validate(r#"{"score": 7.5}"#).is_valid());
    }
}
