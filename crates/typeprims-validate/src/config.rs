use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;
use typeprims_types::{Draft, LegacyTypeSet, TypeChecker};

use crate::error::Result;
use crate::validator::check_declared_type;

/// How to derive a configuration's type checker from its base.
#[derive(Debug, Clone)]
pub enum TypeExtension {
    /// Use this type checker in place of the base one.
    Checker(TypeChecker),
    /// Register native type tags on top of the base type checker.
    Legacy(BTreeMap<String, LegacyTypeSet>),
}

/// Binds a type checker to a schema draft.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    draft: Draft,
    type_checker: TypeChecker,
}

impl ValidatorConfig {
    /// Configuration using the shared type checker of `draft`.
    pub fn new(draft: Draft) -> Self {
        Self {
            draft,
            type_checker: draft.type_checker().clone(),
        }
    }

    /// Pick the draft named by the schema's `$schema`, defaulting to draft 6.
    pub fn for_schema(schema: &Value) -> Self {
        Self::for_schema_with_default(schema, Draft::default())
    }

    /// Pick the draft named by the schema's `$schema`, defaulting to `default`.
    pub fn for_schema_with_default(schema: &Value, default: Draft) -> Self {
        let declared = schema.get("$schema").and_then(Value::as_str);
        let draft = match declared.map(|uri| (uri, Draft::from_schema_uri(uri))) {
            Some((_, Some(draft))) => draft,
            Some((uri, None)) => {
                debug!(uri, %default, "unrecognized $schema, using default draft");
                default
            }
            None => default,
        };
        Self::new(draft)
    }

    /// Derive a configuration with an extended type checker.
    ///
    /// `None` keeps the base type checker. `self` is never modified.
    pub fn extend(&self, extension: Option<TypeExtension>) -> Self {
        let type_checker = match extension {
            None => self.type_checker.clone(),
            Some(TypeExtension::Checker(checker)) => {
                debug!(draft = %self.draft, types = checker.len(), "replaced type checker");
                checker
            }
            Some(TypeExtension::Legacy(types)) => {
                debug!(draft = %self.draft, legacy = types.len(), "registered legacy types");
                self.type_checker.redefine_legacy_many(types)
            }
        };
        Self {
            draft: self.draft,
            type_checker,
        }
    }

    /// Draft this configuration follows.
    pub fn draft(&self) -> Draft {
        self.draft
    }

    /// Type checker used for the `type` keyword.
    pub fn type_checker(&self) -> &TypeChecker {
        &self.type_checker
    }

    /// Check `instance` against a `type` declaration: one type name or a
    /// list of alternatives.
    pub fn check_type(&self, instance: &Value, declared: &Value) -> Result<()> {
        check_declared_type(&self.type_checker, instance, declared)
    }

    /// Whether `instance` is of the single type `type_name`.
    pub fn is_type(&self, instance: &Value, type_name: &str) -> Result<bool> {
        Ok(self.type_checker.is_type(instance, type_name)?)
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::new(Draft::default())
    }
}
