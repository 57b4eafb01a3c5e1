//! Persistent JSON Schema type-checker registry.
//!
//! Maps schema type names (`"integer"`, `"object"`, ...) to predicates over
//! [`serde_json::Value`]. Registries never change once built: every
//! redefinition or removal returns a new [`TypeChecker`] that shares
//! structure with its parent, so a registry can be handed to any number of
//! validators and threads without coordination.
//!
//! - [`predicate`]: the primitive classification functions
//! - [`checker`]: the registry and its derivation operations
//! - [`draft`]: the draft-3, draft-4 and draft-6 registries
//! - [`legacy`]: native type tags from the older extension mechanism

pub mod checker;
pub mod draft;
pub mod error;
pub mod legacy;
pub mod predicate;

pub use checker::{Predicate, TypeCheck, TypeChecker};
pub use draft::{Draft, DRAFT3, DRAFT4, DRAFT6};
pub use error::{Result, TypeCheckError};
pub use legacy::{LegacyTypeSet, NativeType};
