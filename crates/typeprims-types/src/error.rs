/// Errors raised by type-checker registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeCheckError {
    /// The type name is not registered in the type checker.
    #[error("no type check registered for type {type_name:?}")]
    UndefinedTypeCheck { type_name: String },
}

impl TypeCheckError {
    pub(crate) fn undefined(type_name: impl Into<String>) -> Self {
        Self::UndefinedTypeCheck {
            type_name: type_name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TypeCheckError>;
