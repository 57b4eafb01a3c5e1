use typeprims_types::TypeCheckError;

/// Errors that can occur while evaluating a `type` constraint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The instance matched none of the declared types.
    #[error("{instance} is not of type {}", format_types(.expected))]
    TypeMismatch {
        instance: serde_json::Value,
        expected: Vec<String>,
    },

    /// The `type` keyword is neither a type name nor a list of type names.
    #[error("invalid type declaration: {0}")]
    InvalidTypeDeclaration(String),

    /// A declared type has no registered type check.
    #[error(transparent)]
    TypeCheck(#[from] TypeCheckError),
}

fn format_types(types: &[String]) -> String {
    types
        .iter()
        .map(|name| format!("{name:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ValidationError>;
