//! Native type tags for the older extension mechanism.
//!
//! Before predicates, custom types were registered as one native type tag,
//! or a (possibly nested) group of them. Such entries still dispatch through
//! [`TypeChecker::is_type`](crate::TypeChecker::is_type) with the same
//! boolean/number disjointness as the predicates.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

/// A native runtime type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NativeType {
    Null,
    Bool,
    /// Numbers stored without a fractional part.
    Int,
    /// Numbers stored as floats, integral or not.
    Float,
    /// Any number.
    Number,
    Str,
    Array,
    Object,
    /// Root of the native hierarchy: matches every value.
    Any,
}

impl NativeType {
    /// Whether this tag names a numeric type.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Number)
    }

    /// Whether `instance` has this runtime kind.
    pub fn matches(self, instance: &Value) -> bool {
        match self {
            Self::Null => instance.is_null(),
            Self::Bool => instance.is_boolean(),
            Self::Int => instance.is_i64() || instance.is_u64(),
            Self::Float => instance.is_f64(),
            Self::Number => instance.is_number(),
            Self::Str => instance.is_string(),
            Self::Array => instance.is_array(),
            Self::Object => instance.is_object(),
            Self::Any => true,
        }
    }
}

/// One native tag or a nested group of tags.
///
/// Deserializes from `"int"` or `["int", ["float", "bool"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyTypeSet {
    Tag(NativeType),
    Group(Vec<LegacyTypeSet>),
}

impl LegacyTypeSet {
    /// Flatten nested groups into a set of tags.
    pub fn flatten(&self) -> BTreeSet<NativeType> {
        let mut tags = BTreeSet::new();
        self.collect_into(&mut tags);
        tags
    }

    fn collect_into(&self, tags: &mut BTreeSet<NativeType>) {
        match self {
            Self::Tag(tag) => {
                tags.insert(*tag);
            }
            Self::Group(members) => {
                for member in members {
                    member.collect_into(tags);
                }
            }
        }
    }

    /// Whether `instance` belongs to this set.
    ///
    /// A boolean never matches a set that names a numeric tag unless the set
    /// also names [`NativeType::Bool`].
    pub fn matches(&self, instance: &Value) -> bool {
        let tags = self.flatten();

        if instance.is_boolean()
            && tags.iter().any(|tag| tag.is_numeric())
            && !tags.contains(&NativeType::Bool)
        {
            trace!(?tags, "boolean rejected by numeric legacy type set");
            return false;
        }

        tags.iter().any(|tag| tag.matches(instance))
    }
}

impl From<NativeType> for LegacyTypeSet {
    fn from(tag: NativeType) -> Self {
        Self::Tag(tag)
    }
}

impl<const N: usize> From<[NativeType; N]> for LegacyTypeSet {
    fn from(tags: [NativeType; N]) -> Self {
        Self::Group(tags.into_iter().map(Self::Tag).collect())
    }
}

impl From<Vec<LegacyTypeSet>> for LegacyTypeSet {
    fn from(members: Vec<LegacyTypeSet>) -> Self {
        Self::Group(members)
    }
}
