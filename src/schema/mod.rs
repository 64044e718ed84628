//! Form schema: field descriptors, loading, and the validation engine.

pub mod errors;
pub mod loader;
pub mod types;
pub mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use types::{
    Constraint, FieldDescriptor, FieldType, FormSchema, SelectOption, ValidationRules,
};
pub use validator::SchemaValidator;
