//! Form schema type definitions.
//!
//! A form schema is an ordered list of field descriptors. Each descriptor
//! carries the input type, a label, an optional constraint set, and, for
//! selection fields, the list of choices. The schema document is served
//! verbatim to clients, so the serde representation here is the wire format.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Supported field input types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    /// Single-line text input
    Text,
    /// Numeric input
    Number,
    /// Single choice from `options`
    Select,
    /// Multiple choices from `options`; value is a list of option values
    MultiSelect,
    /// Calendar date, stored as a string
    Date,
    /// Multi-line text input
    Textarea,
    /// Boolean toggle
    Switch,
}

impl FieldType {
    /// Returns the wire name for error messages and logs.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::MultiSelect => "multi-select",
            FieldType::Date => "date",
            FieldType::Textarea => "textarea",
            FieldType::Switch => "switch",
        }
    }

    /// Whether this type carries an `options` list.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::MultiSelect)
    }
}

/// One selectable choice for select/multi-select fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Stored value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Declarative constraint set attached to a field.
///
/// All bounds are optional. A bound with value `0` is treated as absent when
/// the set is compiled (see [`ValidationRules::compile`]); this mirrors the
/// behavior clients already depend on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRules {
    /// Minimum string length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    /// Maximum string length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Minimum numeric value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum numeric value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Pattern the string coercion of the value must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    /// Minimum number of selected options (multi-select)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_selected: Option<usize>,
    /// Maximum number of selected options (multi-select)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selected: Option<usize>,
    /// Earliest accepted date. Declarative only: the engine does not enforce
    /// it, form clients may.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
}

impl ValidationRules {
    /// Compiles the declarative set into an ordered constraint list.
    ///
    /// The order is the evaluation order of the engine: length bounds,
    /// numeric bounds, pattern, selection counts. Zero-valued bounds are
    /// dropped. `minDate` is never emitted (declarative only).
    ///
    /// Fails only when `regex` does not compile.
    pub fn compile(&self) -> Result<Vec<Constraint>, String> {
        let mut constraints = Vec::new();

        if let Some(n) = self.min_length.filter(|n| *n > 0) {
            constraints.push(Constraint::MinLength(n));
        }
        if let Some(n) = self.max_length.filter(|n| *n > 0) {
            constraints.push(Constraint::MaxLength(n));
        }
        if let Some(v) = self.min.filter(|v| *v != 0.0) {
            constraints.push(Constraint::Min(v));
        }
        if let Some(v) = self.max.filter(|v| *v != 0.0) {
            constraints.push(Constraint::Max(v));
        }
        if let Some(pattern) = &self.regex {
            let compiled = Regex::new(pattern)
                .map_err(|e| format!("invalid regex '{}': {}", pattern, e))?;
            constraints.push(Constraint::Pattern(compiled));
        }
        if let Some(n) = self.min_selected.filter(|n| *n > 0) {
            constraints.push(Constraint::MinSelected(n));
        }
        if let Some(n) = self.max_selected.filter(|n| *n > 0) {
            constraints.push(Constraint::MaxSelected(n));
        }

        Ok(constraints)
    }
}

/// A single compiled constraint, dispatched by kind in the engine.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// String coercion must have at least this many characters
    MinLength(usize),
    /// String coercion must have at most this many characters
    MaxLength(usize),
    /// Numeric coercion must be at least this value
    Min(f64),
    /// Numeric coercion must be at most this value
    Max(f64),
    /// String coercion must match
    Pattern(Regex),
    /// List value must have at least this many entries
    MinSelected(usize),
    /// List value must have at most this many entries
    MaxSelected(usize),
}

/// One form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Unique key within the schema; also the record key for the value
    pub id: String,
    /// Input type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Display label, used verbatim in error messages
    pub label: String,
    /// Placeholder text for form clients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Whether a value must be supplied
    #[serde(default)]
    pub required: bool,
    /// Choices for select/multi-select fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    /// Optional constraint set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
}

impl FieldDescriptor {
    /// Compiles this field's constraint set (empty if none declared).
    pub fn compile_constraints(&self) -> Result<Vec<Constraint>, String> {
        match &self.validation {
            Some(rules) => rules
                .compile()
                .map_err(|e| format!("field '{}': {}", self.id, e)),
            None => Ok(Vec::new()),
        }
    }
}

/// Complete form schema document, served as-is by the schema endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Form title
    pub title: String,
    /// Form description shown above the fields
    pub description: String,
    /// Ordered field list
    pub fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    /// Create a new schema.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            fields,
        }
    }

    /// Validates the schema structure itself (not a record).
    ///
    /// Checks field id uniqueness, that `options` appear exactly on
    /// selection fields, and that every regex compiles.
    pub fn validate_structure(&self) -> Result<(), String> {
        let mut seen = std::collections::HashSet::new();
        for field in &self.fields {
            if field.id.is_empty() {
                return Err("field with empty id".into());
            }
            if !seen.insert(field.id.as_str()) {
                return Err(format!("duplicate field id '{}'", field.id));
            }

            let has_options = field.options.as_ref().is_some_and(|o| !o.is_empty());
            if field.field_type.has_options() && !has_options {
                return Err(format!(
                    "field '{}' is {} but declares no options",
                    field.id,
                    field.field_type.type_name()
                ));
            }
            if !field.field_type.has_options() && field.options.is_some() {
                return Err(format!(
                    "field '{}' is {} but declares options",
                    field.id,
                    field.field_type.type_name()
                ));
            }

            field.compile_constraints()?;
        }

        Ok(())
    }

    /// Looks up a field by id.
    pub fn field(&self, id: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_field(id: &str) -> FieldDescriptor {
        FieldDescriptor {
            id: id.into(),
            field_type: FieldType::Text,
            label: id.into(),
            placeholder: None,
            required: false,
            options: None,
            validation: None,
        }
    }

    #[test]
    fn test_field_type_wire_names() {
        assert_eq!(FieldType::Text.type_name(), "text");
        assert_eq!(FieldType::MultiSelect.type_name(), "multi-select");
        assert_eq!(FieldType::Switch.type_name(), "switch");
    }

    #[test]
    fn test_field_type_serde_round_trip() {
        for ty in [
            FieldType::Text,
            FieldType::Number,
            FieldType::Select,
            FieldType::MultiSelect,
            FieldType::Date,
            FieldType::Textarea,
            FieldType::Switch,
        ] {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.type_name()));
            let back: FieldType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn test_compile_preserves_order() {
        let rules = ValidationRules {
            min_length: Some(2),
            max_length: Some(50),
            min: Some(18.0),
            max: Some(100.0),
            regex: Some("^a".into()),
            min_selected: Some(1),
            max_selected: Some(5),
            min_date: Some("2023-01-01".into()),
        };
        let constraints = rules.compile().unwrap();
        assert_eq!(constraints.len(), 7);
        assert!(matches!(constraints[0], Constraint::MinLength(2)));
        assert!(matches!(constraints[4], Constraint::Pattern(_)));
        assert!(matches!(constraints[6], Constraint::MaxSelected(5)));
    }

    #[test]
    fn test_compile_drops_zero_bounds() {
        let rules = ValidationRules {
            min_length: Some(0),
            min: Some(0.0),
            max: Some(0.0),
            min_selected: Some(0),
            ..Default::default()
        };
        assert!(rules.compile().unwrap().is_empty());
    }

    #[test]
    fn test_compile_never_emits_min_date() {
        let rules = ValidationRules {
            min_date: Some("2023-01-01".into()),
            ..Default::default()
        };
        assert!(rules.compile().unwrap().is_empty());
    }

    #[test]
    fn test_compile_rejects_bad_regex() {
        let rules = ValidationRules {
            regex: Some("([unclosed".into()),
            ..Default::default()
        };
        assert!(rules.compile().is_err());
    }

    #[test]
    fn test_structure_rejects_duplicate_ids() {
        let schema = FormSchema::new(
            "t",
            "d",
            vec![text_field("name"), text_field("name")],
        );
        let err = schema.validate_structure().unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn test_structure_requires_options_on_select() {
        let mut field = text_field("dept");
        field.field_type = FieldType::Select;
        let schema = FormSchema::new("t", "d", vec![field]);
        assert!(schema.validate_structure().is_err());
    }

    #[test]
    fn test_structure_rejects_options_on_text() {
        let mut field = text_field("name");
        field.options = Some(vec![SelectOption::new("a", "A")]);
        let schema = FormSchema::new("t", "d", vec![field]);
        assert!(schema.validate_structure().is_err());
    }

    #[test]
    fn test_descriptor_wire_format() {
        let field = FieldDescriptor {
            id: "skills".into(),
            field_type: FieldType::MultiSelect,
            label: "Skills".into(),
            placeholder: None,
            required: false,
            options: Some(vec![SelectOption::new("react", "React")]),
            validation: Some(ValidationRules {
                min_selected: Some(1),
                ..Default::default()
            }),
        };
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "multi-select");
        assert_eq!(json["validation"]["minSelected"], 1);
        // Absent bounds must not serialize
        assert!(json["validation"].get("maxLength").is_none());
        assert!(json.get("placeholder").is_none());
    }
}
