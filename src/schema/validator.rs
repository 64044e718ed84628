//! Schema validation engine.
//!
//! Validation semantics, per field in schema order:
//! - Required fields must be present: absent, null, and empty-string values
//!   all count as missing.
//! - Present values are checked against the field's compiled constraint
//!   list; when several rules fail, the last failing rule's message wins, so
//!   at most one message per field is retained.
//! - Values coerce the way form clients expect: numeric strings count as
//!   numbers, numbers and booleans render as text, lists join with commas.
//!
//! The engine is a pure function of (schema, record). It never mutates the
//! record and signals validity with an empty error map.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};
use super::types::{Constraint, FieldType, FormSchema};

/// Validator holding a schema together with its compiled constraint lists.
///
/// Compiling once at construction keeps regex work out of the per-record
/// path; `validate` itself is allocation-light and deterministic.
pub struct SchemaValidator {
    schema: FormSchema,
    compiled: Vec<Vec<Constraint>>,
}

impl SchemaValidator {
    /// Builds a validator for the given schema, compiling every field's
    /// constraint set.
    ///
    /// # Errors
    ///
    /// Returns `FORM_SCHEMA_INVALID` if the schema structure is invalid or a
    /// constraint pattern does not compile.
    pub fn new(schema: FormSchema) -> SchemaResult<Self> {
        schema.validate_structure().map_err(SchemaError::invalid)?;

        let compiled = schema
            .fields
            .iter()
            .map(|field| field.compile_constraints())
            .collect::<Result<Vec<_>, _>>()
            .map_err(SchemaError::invalid)?;

        Ok(Self { schema, compiled })
    }

    /// Returns the schema this validator enforces.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Validates a candidate record against the schema.
    ///
    /// Returns a mapping of field id to error message; an empty mapping
    /// means the record is valid. `id` and `createdAt` are system fields and
    /// are never inspected here.
    pub fn validate(&self, record: &Map<String, Value>) -> BTreeMap<String, String> {
        let mut errors = BTreeMap::new();

        for (field, constraints) in self.schema.fields.iter().zip(&self.compiled) {
            let value = record.get(&field.id);

            if is_blank(value) {
                if field.required {
                    errors.insert(field.id.clone(), format!("{} is required", field.label));
                }
                continue;
            }
            let Some(value) = value else { continue };

            let mut message = None;

            if field.field_type == FieldType::Number && coerce_number(value).is_none() {
                message = Some(format!("{} must be a number", field.label));
            }

            for constraint in constraints {
                match constraint {
                    Constraint::MinLength(n) => {
                        if coerce_text(value).chars().count() < *n {
                            message = Some(format!(
                                "{} must be at least {} characters",
                                field.label, n
                            ));
                        }
                    }
                    Constraint::MaxLength(n) => {
                        if coerce_text(value).chars().count() > *n {
                            message = Some(format!(
                                "{} must be at most {} characters",
                                field.label, n
                            ));
                        }
                    }
                    Constraint::Min(bound) => {
                        // A value with no numeric coercion never violates a bound.
                        if coerce_number(value).is_some_and(|n| n < *bound) {
                            message =
                                Some(format!("{} must be at least {}", field.label, bound));
                        }
                    }
                    Constraint::Max(bound) => {
                        if coerce_number(value).is_some_and(|n| n > *bound) {
                            message =
                                Some(format!("{} must be at most {}", field.label, bound));
                        }
                    }
                    Constraint::Pattern(pattern) => {
                        if !pattern.is_match(&coerce_text(value)) {
                            message = Some(format!("{} is invalid", field.label));
                        }
                    }
                    // Selection counts are evaluated in the shape pass below.
                    Constraint::MinSelected(_) | Constraint::MaxSelected(_) => {}
                }
            }

            if field.field_type == FieldType::MultiSelect && field.validation.is_some() {
                match value.as_array() {
                    None => {
                        message = Some(format!("{} must be selected", field.label));
                    }
                    Some(items) => {
                        for constraint in constraints {
                            match constraint {
                                Constraint::MinSelected(n) if items.len() < *n => {
                                    message =
                                        Some(format!("Select at least {} options", n));
                                }
                                Constraint::MaxSelected(n) if items.len() > *n => {
                                    message = Some(format!("Select at most {} options", n));
                                }
                                _ => {}
                            }
                        }
                    }
                }
            }

            if let Some(message) = message {
                errors.insert(field.id.clone(), message);
            }
        }

        errors
    }
}

/// Whether a value counts as missing for the required check.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Numeric coercion: numbers, numeric strings (surrounding whitespace
/// ignored), and booleans coerce; everything else does not.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// String coercion used by the length and pattern checks.
fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(coerce_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Null => String::new(),
        Value::Object(_) => value.to_string(),
    }
}
