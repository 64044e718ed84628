//! Schema loading.
//!
//! The service ships with a built-in employee onboarding schema and can load
//! a replacement schema document from a JSON file. Either way the structure
//! is validated before use, so the engine never sees a malformed schema.

use std::fs;
use std::path::Path;

use super::errors::{SchemaError, SchemaResult};
use super::types::{FieldDescriptor, FieldType, FormSchema, SelectOption, ValidationRules};

/// Loads a schema document from a JSON file and validates its structure.
pub fn load_from_file(path: &Path) -> SchemaResult<FormSchema> {
    let content = fs::read_to_string(path).map_err(|e| {
        SchemaError::io_error(format!("failed to read '{}': {}", path.display(), e))
    })?;

    let schema: FormSchema = serde_json::from_str(&content).map_err(|e| {
        SchemaError::parse_failed(format!("'{}': {}", path.display(), e))
    })?;

    schema.validate_structure().map_err(SchemaError::invalid)?;

    Ok(schema)
}

/// The built-in employee onboarding form schema.
pub fn builtin() -> FormSchema {
    FormSchema::new(
        "Employee Onboarding",
        "Please fill out the following details to complete your onboarding process.",
        vec![
            FieldDescriptor {
                id: "fullName".into(),
                field_type: FieldType::Text,
                label: "Full Name".into(),
                placeholder: Some("Enter your full name".into()),
                required: true,
                options: None,
                validation: Some(ValidationRules {
                    min_length: Some(2),
                    max_length: Some(50),
                    ..Default::default()
                }),
            },
            FieldDescriptor {
                id: "email".into(),
                field_type: FieldType::Text,
                label: "Email Address".into(),
                placeholder: Some("Enter your email".into()),
                required: true,
                options: None,
                validation: Some(ValidationRules {
                    regex: Some(r"^[^\s@]+@[^\s@]+\.[^\s@]+$".into()),
                    ..Default::default()
                }),
            },
            FieldDescriptor {
                id: "age".into(),
                field_type: FieldType::Number,
                label: "Age".into(),
                placeholder: Some("Enter your age".into()),
                required: true,
                options: None,
                validation: Some(ValidationRules {
                    min: Some(18.0),
                    max: Some(100.0),
                    ..Default::default()
                }),
            },
            FieldDescriptor {
                id: "department".into(),
                field_type: FieldType::Select,
                label: "Department".into(),
                placeholder: Some("Select your department".into()),
                required: true,
                options: Some(vec![
                    SelectOption::new("engineering", "Engineering"),
                    SelectOption::new("design", "Design"),
                    SelectOption::new("marketing", "Marketing"),
                    SelectOption::new("hr", "Human Resources"),
                ]),
                validation: None,
            },
            FieldDescriptor {
                id: "skills".into(),
                field_type: FieldType::MultiSelect,
                label: "Skills".into(),
                placeholder: Some("Select your skills".into()),
                required: false,
                options: Some(vec![
                    SelectOption::new("react", "React"),
                    SelectOption::new("node", "Node.js"),
                    SelectOption::new("python", "Python"),
                    SelectOption::new("java", "Java"),
                    SelectOption::new("sql", "SQL"),
                ]),
                validation: Some(ValidationRules {
                    min_selected: Some(1),
                    max_selected: Some(5),
                    ..Default::default()
                }),
            },
            FieldDescriptor {
                id: "startDate".into(),
                field_type: FieldType::Date,
                label: "Start Date".into(),
                placeholder: None,
                required: true,
                options: None,
                validation: Some(ValidationRules {
                    min_date: Some("2023-01-01".into()),
                    ..Default::default()
                }),
            },
            FieldDescriptor {
                id: "bio".into(),
                field_type: FieldType::Textarea,
                label: "Bio".into(),
                placeholder: Some("Tell us a bit about yourself".into()),
                required: false,
                options: None,
                validation: Some(ValidationRules {
                    max_length: Some(500),
                    ..Default::default()
                }),
            },
            FieldDescriptor {
                id: "remote".into(),
                field_type: FieldType::Switch,
                label: "Remote Work".into(),
                placeholder: None,
                required: false,
                options: None,
                validation: None,
            },
        ],
    )
}
