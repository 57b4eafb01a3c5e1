//! Extend example — derives a custom type checker without touching draft 6.
//!
//! Run with:
//!   cargo run --example extend-types --features validate

use serde_json::json;
use typeprims::types::{LegacyTypeSet, NativeType};
use typeprims::validate::{TypeExtension, Validator, ValidatorConfig};
use typeprims::{Draft, DRAFT6};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Predicate-based: "integer" also accepts numeric strings.
    let lenient = DRAFT6.redefine("integer", |v: &serde_json::Value| {
        DRAFT6.is_type(v, "integer").unwrap_or(false)
            || v.as_str().is_some_and(|s| s.parse::<i64>().is_ok())
    });
    let config = ValidatorConfig::new(Draft::Draft6).extend(Some(TypeExtension::Checker(lenient)));
    let validator = Validator::with_config(json!({"type": "integer"}), config);

    for instance in [json!(4), json!("4"), json!(4.4)] {
        eprintln!("[lenient] {instance} valid={}", validator.is_valid(&instance)?);
    }

    // Legacy native tags: "flag" is an integer or a boolean.
    let legacy = ValidatorConfig::default().extend(Some(TypeExtension::Legacy(
        [(
            "flag".to_string(),
            LegacyTypeSet::from([NativeType::Int, NativeType::Bool]),
        )]
        .into_iter()
        .collect(),
    )));
    let flags = Validator::with_config(json!({"type": "flag"}), legacy);
    for instance in [json!(true), json!(1), json!("yes")] {
        eprintln!("[legacy] {instance} valid={}", flags.is_valid(&instance)?);
    }

    // The shared draft registry is unchanged.
    eprintln!(
        "[draft6] \"4\" is integer: {}",
        DRAFT6.is_type(&json!("4"), "integer")?
    );
    Ok(())
}
