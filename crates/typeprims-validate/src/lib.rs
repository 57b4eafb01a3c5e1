//! JSON Schema `type` keyword evaluation.
//!
//! A [`ValidatorConfig`] binds one immutable type checker to a draft.
//! Configurations are extended by deriving a new one, either from a
//! replacement [`TypeChecker`](typeprims_types::TypeChecker) or from a legacy
//! mapping of type names to native type tags. The base configuration, and
//! every validator built from it, keep their registry.

pub mod config;
pub mod error;
pub mod validator;

pub use config::{TypeExtension, ValidatorConfig};
pub use error::{Result, ValidationError};
pub use validator::Validator;
