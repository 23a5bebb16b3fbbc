use model::PropertyType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The parsed form of one filter expression.
///
/// Invariants, guaranteed by the parser: `restriction` is non-empty,
/// `property_names` holds at least one non-empty name, and `property_type`
/// was resolved against a type registry. Multiple property names are
/// OR-combined at translation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriterion {
    pub restriction: String,
    pub property_type: PropertyType,
    pub property_names: Vec<String>,
}

impl fmt::Display for FilterCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}_{}",
            self.restriction,
            self.property_type.code(),
            self.property_names.join("_OR_")
        )
    }
}

/// A criterion paired with its raw, uncoerced match literal.
///
/// Coercion happens lazily at translation time, once per target property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterEntry {
    pub criterion: FilterCriterion,
    pub match_value: String,
}

impl FilterEntry {
    pub fn new(criterion: FilterCriterion, match_value: impl Into<String>) -> Self {
        Self {
            criterion,
            match_value: match_value.into(),
        }
    }
}
