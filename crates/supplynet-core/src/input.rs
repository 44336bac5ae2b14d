//! Relationship-list parsing and validation.
//!
//! Shells (the CLI, any transport layer) call [`parse_relationships`]
//! before handing the list to the analysis core, which assumes every
//! relationship has two non-empty endpoints.

use serde_json::Value;
use tracing::debug;

use crate::error::ErrorCode;
use crate::model::Relationship;

/// Reasons a relationship document is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("Invalid input. Expected an array of relationships.")]
    NotAnArray,

    #[error(
        "Invalid relationship at index {index}. Each relationship must have \"from\" and \"to\" properties."
    )]
    InvalidRelationship { index: usize },
}

impl InputError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::Malformed(_) => ErrorCode::MalformedInput,
            Self::NotAnArray => ErrorCode::InvalidInput,
            Self::InvalidRelationship { .. } => ErrorCode::InvalidRelationship,
        }
    }
}

/// Parse and validate a JSON relationship array.
///
/// # Errors
///
/// Returns [`InputError::Malformed`] for invalid JSON, otherwise whatever
/// [`validate_relationships`] reports.
pub fn parse_relationships(text: &str) -> Result<Vec<Relationship>, InputError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| InputError::Malformed(e.to_string()))?;
    validate_relationships(&value)
}

/// Validate an already-parsed JSON document as a relationship array.
///
/// Every element must be an object with non-empty string `from` and `to`
/// fields. Other fields are ignored. The first offending element is
/// reported.
///
/// # Errors
///
/// Returns [`InputError::NotAnArray`] when `value` is not an array and
/// [`InputError::InvalidRelationship`] for the first bad element.
pub fn validate_relationships(value: &Value) -> Result<Vec<Relationship>, InputError> {
    let items = value.as_array().ok_or(InputError::NotAnArray)?;

    let relationships = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let from = endpoint(item, "from");
            let to = endpoint(item, "to");
            match (from, to) {
                (Some(from), Some(to)) => Ok(Relationship::new(from, to)),
                _ => Err(InputError::InvalidRelationship { index }),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = relationships.len(), "validated relationship list");
    Ok(relationships)
}

fn endpoint<'a>(item: &'a Value, field: &str) -> Option<&'a str> {
    item.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_valid_list_in_order() {
        let rels =
            parse_relationships(r#"[{"from":"A","to":"B"},{"from":"B","to":"C"}]"#).expect("valid");
        assert_eq!(
            rels,
            vec![Relationship::new("A", "B"), Relationship::new("B", "C")]
        );
    }

    #[test]
    fn empty_array_is_valid() {
        assert_eq!(parse_relationships("[]").expect("valid"), Vec::new());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let rels = validate_relationships(&json!([{"from": "A", "to": "B", "weight": 3}]))
            .expect("valid");
        assert_eq!(rels, vec![Relationship::new("A", "B")]);
    }

    #[test]
    fn object_body_is_rejected() {
        let err = validate_relationships(&json!({"from": "A", "to": "B"}))
            .expect_err("must be rejected");
        assert_eq!(err, InputError::NotAnArray);
        assert_eq!(err.error_code(), ErrorCode::InvalidInput);
    }

    #[test]
    fn first_bad_element_is_reported() {
        let err = validate_relationships(&json!([
            {"from": "A", "to": "B"},
            {"from": "", "to": "C"},
            {"to": "D"}
        ]))
        .expect_err("must be rejected");
        assert_eq!(err, InputError::InvalidRelationship { index: 1 });
        assert_eq!(err.error_code(), ErrorCode::InvalidRelationship);
    }

    #[test]
    fn non_string_endpoints_are_rejected() {
        let err = validate_relationships(&json!([{"from": 1, "to": "B"}]))
            .expect_err("must be rejected");
        assert_eq!(err, InputError::InvalidRelationship { index: 0 });

        let err = validate_relationships(&json!(["A"])).expect_err("must be rejected");
        assert_eq!(err, InputError::InvalidRelationship { index: 0 });
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = parse_relationships("[{").expect_err("must be rejected");
        assert!(matches!(err, InputError::Malformed(_)));
        assert_eq!(err.error_code(), ErrorCode::MalformedInput);
    }

    #[test]
    fn self_loop_is_accepted() {
        let rels = parse_relationships(r#"[{"from":"A","to":"A"}]"#).expect("valid");
        assert!(rels[0].is_self_loop());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn well_formed_lists_survive_validation(
                pairs in prop::collection::vec(("[a-zA-Z0-9 ]{1,12}", "[a-zA-Z0-9 ]{1,12}"), 0..16)
            ) {
                let doc = serde_json::to_string(
                    &pairs
                        .iter()
                        .map(|(from, to)| json!({"from": from, "to": to}))
                        .collect::<Vec<_>>(),
                )
                .expect("serialize");

                let rels = parse_relationships(&doc).expect("valid");
                prop_assert_eq!(rels.len(), pairs.len());
                for (rel, (from, to)) in rels.iter().zip(&pairs) {
                    prop_assert_eq!(&rel.from, from);
                    prop_assert_eq!(&rel.to, to);
                }
            }

            #[test]
            fn arbitrary_text_never_panics(text in ".{0,64}") {
                let _ = parse_relationships(&text);
            }
        }
    }
}
