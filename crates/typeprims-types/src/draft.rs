//! Per-draft type checkers.
//!
//! The drafts form a derivation chain: draft 4 is draft 3 without `"any"`,
//! and draft 6 is draft 4 with `"integer"` relaxed to accept integral floats.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::checker::{predicate, TypeChecker};
use crate::legacy::{LegacyTypeSet, NativeType};
use crate::predicate::{
    is_any, is_array, is_bool, is_integer, is_integer_draft6, is_null, is_number, is_object,
    is_string,
};

/// Draft 3 type checker: the full predicate library, including `"any"`.
pub static DRAFT3: Lazy<TypeChecker> = Lazy::new(|| {
    TypeChecker::new().redefine_many([
        ("any", predicate(is_any)),
        ("array", predicate(is_array)),
        ("boolean", predicate(is_bool)),
        ("integer", predicate(is_integer)),
        ("object", predicate(is_object)),
        ("null", predicate(is_null)),
        ("number", predicate(is_number)),
        ("string", predicate(is_string)),
    ])
});

/// Draft 4 type checker: draft 3 without `"any"`.
pub static DRAFT4: Lazy<TypeChecker> = Lazy::new(|| match DRAFT3.remove("any") {
    Ok(checker) => checker,
    Err(err) => unreachable!("draft 3 registers \"any\": {err}"),
});

/// Draft 6 type checker: draft 4 with integral floats accepted as integers.
pub static DRAFT6: Lazy<TypeChecker> =
    Lazy::new(|| DRAFT4.redefine("integer", is_integer_draft6));

/// A JSON Schema draft with its own type semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Draft {
    Draft3,
    Draft4,
    #[default]
    Draft6,
}

impl Draft {
    /// All supported drafts, oldest first.
    pub const ALL: [Draft; 3] = [Draft::Draft3, Draft::Draft4, Draft::Draft6];

    /// The shared type checker for this draft.
    pub fn type_checker(self) -> &'static TypeChecker {
        match self {
            Draft::Draft3 => &DRAFT3,
            Draft::Draft4 => &DRAFT4,
            Draft::Draft6 => &DRAFT6,
        }
    }

    /// Meta-schema URI for this draft, as written in `$schema`.
    pub fn schema_uri(self) -> &'static str {
        match self {
            Draft::Draft3 => "http://json-schema.org/draft-03/schema#",
            Draft::Draft4 => "http://json-schema.org/draft-04/schema#",
            Draft::Draft6 => "http://json-schema.org/draft-06/schema#",
        }
    }

    /// Resolve a `$schema` URI to a draft. The trailing empty fragment is
    /// optional.
    pub fn from_schema_uri(uri: &str) -> Option<Draft> {
        let uri = uri.trim_end_matches('#');
        Self::ALL
            .into_iter()
            .find(|draft| draft.schema_uri().trim_end_matches('#') == uri)
    }

    /// Native type tags equivalent to this draft's predicates.
    ///
    /// `None` for draft 6: integral floats cannot be expressed as tags.
    pub fn legacy_default_types(self) -> Option<Vec<(&'static str, LegacyTypeSet)>> {
        let mut types: Vec<(&'static str, LegacyTypeSet)> = vec![
            ("array", NativeType::Array.into()),
            ("boolean", NativeType::Bool.into()),
            ("integer", NativeType::Int.into()),
            ("null", NativeType::Null.into()),
            ("number", NativeType::Number.into()),
            ("object", NativeType::Object.into()),
            ("string", NativeType::Str.into()),
        ];
        match self {
            Draft::Draft3 => {
                types.insert(0, ("any", NativeType::Any.into()));
                Some(types)
            }
            Draft::Draft4 => Some(types),
            Draft::Draft6 => None,
        }
    }
}

impl fmt::Display for Draft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Draft::Draft3 => f.write_str("draft3"),
            Draft::Draft4 => f.write_str("draft4"),
            Draft::Draft6 => f.write_str("draft6"),
        }
    }
}

impl FromStr for Draft {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft3" | "3" => Ok(Draft::Draft3),
            "draft4" | "4" => Ok(Draft::Draft4),
            "draft6" | "6" => Ok(Draft::Draft6),
            other => Err(format!("unknown draft: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::error::TypeCheckError;

    fn samples() -> Vec<Value> {
        vec![
            json!(null),
            json!(true),
            json!(false),
            json!(0),
            json!(-3),
            json!(4.0),
            json!(4.5),
            json!(""),
            json!("4"),
            json!([]),
            json!([1]),
            json!({}),
            json!({"a": 1}),
        ]
    }

    #[test]
    fn draft3_entries() {
        assert_eq!(
            DRAFT3.type_names(),
            vec!["any", "array", "boolean", "integer", "null", "number", "object", "string"]
        );
        for value in samples() {
            assert!(DRAFT3.is_type(&value, "any").unwrap());
        }
    }

    #[test]
    fn draft4_has_no_any() {
        assert_eq!(
            DRAFT4.type_names(),
            vec!["array", "boolean", "integer", "null", "number", "object", "string"]
        );
        assert!(matches!(
            DRAFT4.is_type(&json!(1), "any"),
            Err(TypeCheckError::UndefinedTypeCheck { .. })
        ));
    }

    #[test]
    fn draft6_relaxes_integer_only() {
        assert_eq!(DRAFT6.type_names(), DRAFT4.type_names());
        assert!(DRAFT6.is_type(&json!(4.0), "integer").unwrap());
        assert!(!DRAFT4.is_type(&json!(4.0), "integer").unwrap());

        for value in samples() {
            for name in DRAFT4.type_names() {
                if name == "integer" {
                    continue;
                }
                assert_eq!(
                    DRAFT4.is_type(&value, name).unwrap(),
                    DRAFT6.is_type(&value, name).unwrap(),
                    "{name} on {value}"
                );
            }
        }
    }

    #[test]
    fn booleans_are_not_integers_in_any_draft() {
        for draft in Draft::ALL {
            let checker = draft.type_checker();
            assert!(!checker.is_type(&json!(true), "integer").unwrap());
            assert!(!checker.is_type(&json!(true), "number").unwrap());
            assert!(checker.is_type(&json!(true), "boolean").unwrap());
        }
    }

    #[test]
    fn legacy_defaults_match_predicates() {
        for draft in [Draft::Draft3, Draft::Draft4] {
            let types = draft.legacy_default_types().unwrap();
            let legacy = TypeChecker::new().redefine_legacy_many(types);
            let modern = draft.type_checker();

            assert_eq!(legacy.type_names(), modern.type_names());
            for value in samples() {
                for name in modern.type_names() {
                    assert_eq!(
                        legacy.is_type(&value, name).unwrap(),
                        modern.is_type(&value, name).unwrap(),
                        "{draft} {name} on {value}"
                    );
                }
            }
        }
        assert!(Draft::Draft6.legacy_default_types().is_none());
    }

    #[test]
    fn schema_uri_resolution() {
        assert_eq!(
            Draft::from_schema_uri("http://json-schema.org/draft-04/schema#"),
            Some(Draft::Draft4)
        );
        assert_eq!(
            Draft::from_schema_uri("http://json-schema.org/draft-06/schema"),
            Some(Draft::Draft6)
        );
        assert_eq!(Draft::from_schema_uri("https://example.com/schema"), None);
    }

    #[test]
    fn draft_names_round_trip() {
        for draft in Draft::ALL {
            assert_eq!(draft.to_string().parse::<Draft>(), Ok(draft));
            let encoded = serde_json::to_value(draft).unwrap();
            assert_eq!(encoded, json!(draft.to_string()));
        }
        assert!("draft7".parse::<Draft>().is_err());
    }
}
