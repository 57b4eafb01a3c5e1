//! Immutable, draft-aware JSON Schema type checking.
//!
//! typeprims maps schema type names to predicates in persistent registries
//! that can be extended without affecting anyone else holding them.
//!
//! # Crate Structure
//!
//! - [`types`] — Predicates, the type-checker registry and per-draft registries
//! - [`validate`] — `type` keyword evaluation and validator configuration
//!   (behind the default `validate` feature)

/// Re-export type-checker types.
pub mod types {
    pub use typeprims_types::*;
}

/// Re-export validation types (requires `validate` feature).
#[cfg(feature = "validate")]
pub mod validate {
    pub use typeprims_validate::*;
}

pub use typeprims_types::{Draft, TypeCheckError, TypeChecker, DRAFT3, DRAFT4, DRAFT6};
