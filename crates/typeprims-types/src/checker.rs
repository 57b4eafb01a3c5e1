use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TypeCheckError};
use crate::legacy::LegacyTypeSet;

/// A shareable type predicate.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Wrap a function or closure as a [`Predicate`].
pub fn predicate<F>(f: F) -> Predicate
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Arc::new(f)
}

/// How a registered type name is checked.
#[derive(Clone)]
pub enum TypeCheck {
    /// A predicate over the instance.
    Predicate(Predicate),
    /// Native type tags registered through the older extension mechanism.
    Legacy(LegacyTypeSet),
}

impl TypeCheck {
    fn check(&self, instance: &Value) -> bool {
        match self {
            Self::Predicate(predicate) => predicate(instance),
            Self::Legacy(types) => types.matches(instance),
        }
    }
}

impl fmt::Debug for TypeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Legacy(types) => f.debug_tuple("Legacy").field(types).finish(),
        }
    }
}

/// Immutable registry of type checks keyed by schema type name.
///
/// Every derivation returns a new registry sharing structure with the
/// receiver; nothing reachable from an existing `TypeChecker` ever changes.
/// Cloning is cheap.
#[derive(Clone, Default)]
pub struct TypeChecker {
    checkers: im::HashMap<String, TypeCheck>,
}

impl TypeChecker {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `instance` is of type `type_name`.
    ///
    /// Fails with [`TypeCheckError::UndefinedTypeCheck`] when no check is
    /// registered under `type_name`.
    pub fn is_type(&self, instance: &Value, type_name: &str) -> Result<bool> {
        let check = self
            .checkers
            .get(type_name)
            .ok_or_else(|| TypeCheckError::undefined(type_name))?;
        Ok(check.check(instance))
    }

    /// Return a registry where `type_name` is checked by `predicate`, added or
    /// replaced.
    pub fn redefine<F>(&self, type_name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.with_entry(type_name.into(), TypeCheck::Predicate(Arc::new(predicate)))
    }

    /// Return a registry with every `(type_name, predicate)` pair applied.
    pub fn redefine_many<I, N>(&self, definitions: I) -> Self
    where
        I: IntoIterator<Item = (N, Predicate)>,
        N: Into<String>,
    {
        self.with_entries(
            definitions
                .into_iter()
                .map(|(name, predicate)| (name.into(), TypeCheck::Predicate(predicate))),
        )
    }

    /// Return a registry where `type_name` is checked against native type tags.
    pub fn redefine_legacy(
        &self,
        type_name: impl Into<String>,
        types: impl Into<LegacyTypeSet>,
    ) -> Self {
        self.with_entry(type_name.into(), TypeCheck::Legacy(types.into()))
    }

    /// Return a registry with every `(type_name, tags)` pair applied as a
    /// legacy entry.
    pub fn redefine_legacy_many<I, N>(&self, definitions: I) -> Self
    where
        I: IntoIterator<Item = (N, LegacyTypeSet)>,
        N: Into<String>,
    {
        self.with_entries(
            definitions
                .into_iter()
                .map(|(name, types)| (name.into(), TypeCheck::Legacy(types))),
        )
    }

    /// Return a registry without `type_name`.
    pub fn remove(&self, type_name: &str) -> Result<Self> {
        if !self.checkers.contains_key(type_name) {
            return Err(TypeCheckError::undefined(type_name));
        }
        let checkers = self.checkers.without(type_name);
        debug!(type_name, remaining = checkers.len(), "removed type check");
        Ok(Self { checkers })
    }

    /// Return a registry without any of `type_names`.
    ///
    /// Fails as a whole if any name is not registered; nothing is removed
    /// from any registry in that case.
    pub fn remove_many<I, N>(&self, type_names: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut checkers = self.checkers.clone();
        remove_all(&mut checkers, type_names)?;
        debug!(remaining = checkers.len(), "removed type checks");
        Ok(Self { checkers })
    }

    /// Apply `redefine` then `remove` in a single derivation.
    ///
    /// Fails as a whole if any name in `remove` is absent after the
    /// redefinitions are applied.
    pub fn update<R, D, N, M>(&self, redefine: R, remove: D) -> Result<Self>
    where
        R: IntoIterator<Item = (N, Predicate)>,
        N: Into<String>,
        D: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        let mut checkers = self.checkers.clone();
        for (name, predicate) in redefine {
            checkers.insert(name.into(), TypeCheck::Predicate(predicate));
        }
        remove_all(&mut checkers, remove)?;
        debug!(size = checkers.len(), "updated type checks");
        Ok(Self { checkers })
    }

    /// Whether a check is registered under `type_name`.
    pub fn contains(&self, type_name: &str) -> bool {
        self.checkers.contains_key(type_name)
    }

    /// The registered check for `type_name`, if any.
    pub fn get(&self, type_name: &str) -> Option<&TypeCheck> {
        self.checkers.get(type_name)
    }

    /// Number of registered type names.
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.checkers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn with_entry(&self, type_name: String, check: TypeCheck) -> Self {
        debug!(type_name = type_name.as_str(), "redefined type check");
        Self {
            checkers: self.checkers.update(type_name, check),
        }
    }

    fn with_entries(&self, entries: impl Iterator<Item = (String, TypeCheck)>) -> Self {
        // Local builder; the receiver's map is shared, not mutated.
        let mut checkers = self.checkers.clone();
        checkers.extend(entries);
        debug!(size = checkers.len(), "redefined type checks");
        Self { checkers }
    }
}

fn remove_all<I, N>(checkers: &mut im::HashMap<String, TypeCheck>, type_names: I) -> Result<()>
where
    I: IntoIterator<Item = N>,
    N: AsRef<str>,
{
    for name in type_names {
        let name = name.as_ref();
        if checkers.remove(name).is_none() {
            return Err(TypeCheckError::undefined(name));
        }
    }
    Ok(())
}

impl fmt::Debug for TypeChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.checkers.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        f.debug_map().entries(entries).finish()
    }
}
