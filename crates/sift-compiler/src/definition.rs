//! Filter definition types
//!
//! The serde document model for declarative filters. A definition is either
//! a single condition (`{key, op, value}`) or a group carrying exactly one
//! of `all`, `any` or `not`:
//!
//! ```yaml
//! all:
//!   - { key: date, op: ge, value: "2014-01-01" }
//!   - any:
//!       - { key: lang, op: eq, value: EN }
//!       - not: { key: foo, op: eq, value: bar }
//! ```

use serde::{Deserialize, Serialize};
use sift_core::Operator;

/// A filter definition: a single condition or a logical group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FilterDef {
    /// Single condition on one parameter
    Leaf(LeafDef),
    /// Logical grouping of nested definitions
    Group(GroupDef),
}

/// A single parameter condition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeafDef {
    /// Parameter key to look up
    pub key: String,
    /// Operator to apply
    pub op: Operator,
    /// Literal to compare against
    pub value: String,
}

/// Logical grouping with all/any/not semantics.
///
/// Unknown fields are rejected; without this, any malformed leaf map would
/// fall through the untagged `FilterDef` and match as an empty group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct GroupDef {
    /// All conditions must be true (AND logic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<FilterDef>>,
    /// At least one condition must be true (OR logic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub any: Option<Vec<FilterDef>>,
    /// Negation of one nested definition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<FilterDef>>,
}

impl FilterDef {
    /// Create a leaf definition
    pub fn leaf(key: impl Into<String>, op: Operator, value: impl Into<String>) -> Self {
        FilterDef::Leaf(LeafDef {
            key: key.into(),
            op,
            value: value.into(),
        })
    }

    /// Create an `all` group
    pub fn all(items: Vec<FilterDef>) -> Self {
        FilterDef::Group(GroupDef {
            all: Some(items),
            ..GroupDef::default()
        })
    }

    /// Create an `any` group
    pub fn any(items: Vec<FilterDef>) -> Self {
        FilterDef::Group(GroupDef {
            any: Some(items),
            ..GroupDef::default()
        })
    }

    /// Create a `not` group
    pub fn not(item: FilterDef) -> Self {
        FilterDef::Group(GroupDef {
            not: Some(Box::new(item)),
            ..GroupDef::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_deserializes_from_json() {
        let def: FilterDef =
            serde_json::from_str(r#"{"key": "lang", "op": "eq", "value": "EN"}"#).unwrap();
        assert_eq!(def, FilterDef::leaf("lang", Operator::Eq, "EN"));
    }

    #[test]
    fn test_group_deserializes_from_json() {
        let def: FilterDef = serde_json::from_str(
            r#"{"all": [{"key": "lang", "op": "eq", "value": "EN"}]}"#,
        )
        .unwrap();
        assert_eq!(
            def,
            FilterDef::all(vec![FilterDef::leaf("lang", Operator::Eq, "EN")])
        );
    }

    #[test]
    fn test_nested_group_deserializes_from_yaml() {
        let yaml = r#"
all:
  - { key: date, op: ge, value: "2014-01-01" }
  - any:
      - { key: lang, op: eq, value: EN }
      - not: { key: foo, op: eq, value: bar }
"#;
        let def: FilterDef = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            def,
            FilterDef::all(vec![
                FilterDef::leaf("date", Operator::Ge, "2014-01-01"),
                FilterDef::any(vec![
                    FilterDef::leaf("lang", Operator::Eq, "EN"),
                    FilterDef::not(FilterDef::leaf("foo", Operator::Eq, "bar")),
                ]),
            ])
        );
    }

    #[test]
    fn test_definition_round_trip() {
        let def = FilterDef::any(vec![
            FilterDef::leaf("lang", Operator::Eq, "EN"),
            FilterDef::not(FilterDef::leaf("foo", Operator::Contains, "bar")),
        ]);

        let json = serde_json::to_string(&def).unwrap();
        let back: FilterDef = serde_json::from_str(&json).unwrap();
        assert_eq!(def, back);
    }

    #[test]
    fn test_unknown_operator_fails_to_deserialize() {
        let result: Result<FilterDef, _> =
            serde_json::from_str(r#"{"key": "lang", "op": "matches", "value": "EN"}"#);
        assert!(result.is_err());
    }
}
