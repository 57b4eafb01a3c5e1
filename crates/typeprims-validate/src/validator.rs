use serde_json::Value;
use typeprims_types::TypeChecker;

use crate::config::ValidatorConfig;
use crate::error::{Result, ValidationError};

/// Evaluates a schema's `type` keyword against instances.
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Value,
    config: ValidatorConfig,
}

impl Validator {
    /// Create a validator whose draft follows the schema's `$schema`.
    pub fn new(schema: Value) -> Self {
        let config = ValidatorConfig::for_schema(&schema);
        Self::with_config(schema, config)
    }

    /// Create a validator with an explicit configuration.
    pub fn with_config(schema: Value, config: ValidatorConfig) -> Self {
        Self { schema, config }
    }

    /// Validate `instance` against the schema's `type` keyword, if any.
    pub fn validate(&self, instance: &Value) -> Result<()> {
        match self.schema.get("type") {
            Some(declared) => self.config.check_type(instance, declared),
            None => Ok(()),
        }
    }

    /// Like [`validate`](Self::validate), but a type mismatch is `Ok(false)`.
    ///
    /// Undefined type checks and malformed declarations are still errors.
    pub fn is_valid(&self, instance: &Value) -> Result<bool> {
        match self.validate(instance) {
            Ok(()) => Ok(true),
            Err(ValidationError::TypeMismatch { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub fn schema(&self) -> &Value {
        &self.schema
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}

pub(crate) fn check_declared_type(
    checker: &TypeChecker,
    instance: &Value,
    declared: &Value,
) -> Result<()> {
    let types = declared_type_names(declared)?;

    for name in &types {
        if checker.is_type(instance, name)? {
            return Ok(());
        }
    }

    Err(ValidationError::TypeMismatch {
        instance: instance.clone(),
        expected: types.into_iter().map(str::to_string).collect(),
    })
}

fn declared_type_names(declared: &Value) -> Result<Vec<&str>> {
    match declared {
        Value::String(name) => Ok(vec![name.as_str()]),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str().ok_or_else(|| {
                    ValidationError::InvalidTypeDeclaration(format!(
                        "expected a type name, found {item}"
                    ))
                })
            })
            .collect(),
        other => Err(ValidationError::InvalidTypeDeclaration(format!(
            "expected a type name or list of type names, found {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use typeprims_types::{Draft, TypeCheckError};

    use super::*;

    #[test]
    fn single_type_accepts_and_rejects() {
        let validator = Validator::new(json!({"type": "integer"}));

        assert!(validator.validate(&json!(4)).is_ok());
        assert!(validator.validate(&json!(4.0)).is_ok());
        assert_eq!(
            validator.validate(&json!(4.5)),
            Err(ValidationError::TypeMismatch {
                instance: json!(4.5),
                expected: vec!["integer".to_string()],
            })
        );
    }

    #[test]
    fn type_list_accepts_any_candidate() {
        let validator = Validator::new(json!({"type": ["string", "null"]}));

        assert!(validator.is_valid(&json!("x")).unwrap());
        assert!(validator.is_valid(&json!(null)).unwrap());
        assert!(!validator.is_valid(&json!(1)).unwrap());
    }

    #[test]
    fn mismatch_names_every_attempted_type() {
        let validator = Validator::new(json!({"type": ["string", "null", "boolean"]}));
        let err = validator.validate(&json!(12)).unwrap_err();

        assert_eq!(
            err.to_string(),
            r#"12 is not of type "string", "null", "boolean""#
        );
    }

    #[test]
    fn candidates_short_circuit_on_first_match() {
        let validator = Validator::new(json!({"type": ["integer", "unknown"]}));

        assert!(validator.validate(&json!(1)).is_ok());
        assert_eq!(
            validator.validate(&json!("x")),
            Err(ValidationError::TypeCheck(
                TypeCheckError::UndefinedTypeCheck {
                    type_name: "unknown".to_string()
                }
            ))
        );
    }

    #[test]
    fn draft4_schema_rejects_any() {
        let validator = Validator::with_config(
            json!({"type": "any"}),
            ValidatorConfig::new(Draft::Draft4),
        );
        assert!(matches!(
            validator.is_valid(&json!(1)),
            Err(ValidationError::TypeCheck(_))
        ));
    }

    #[test]
    fn malformed_declaration_is_rejected() {
        let validator = Validator::new(json!({"type": 5}));
        assert!(matches!(
            validator.validate(&json!(1)),
            Err(ValidationError::InvalidTypeDeclaration(_))
        ));

        let nested = Validator::new(json!({"type": ["string", {"type": "integer"}]}));
        assert!(matches!(
            nested.validate(&json!("x")),
            Err(ValidationError::InvalidTypeDeclaration(_))
        ));
    }

    #[test]
    fn schema_without_type_accepts_everything() {
        let validator = Validator::new(json!({"minimum": 3}));
        assert!(validator.validate(&json!("anything")).is_ok());
        assert_eq!(validator.schema(), &json!({"minimum": 3}));
    }
}
