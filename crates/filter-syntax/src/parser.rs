//! Hand-written parser for the filter expression grammar.
//!
//! ```text
//! expression    := prefix "_" propertyNames
//! prefix        := restriction typeCode      ; typeCode is exactly 1 char
//! propertyNames := propertyName ("_OR_" propertyName)*
//! ```
//!
//! `EQS_name` parses to restriction `EQ`, type code `S`, property `name`;
//! `NEI_age_OR_score` to restriction `NE`, type code `I`, properties
//! `age` and `score`.

use crate::{
    ast::criterion::{FilterCriterion, FilterEntry},
    error::{Result, SyntaxError},
};
use model::TypeRegistry;

const OR_DELIMITER: &str = "_OR_";

/// Parses filter expressions against an injected type registry.
///
/// Parsing is a pure function of the input: no I/O, no shared mutable
/// state, safe for unrestricted concurrent use.
#[derive(Debug, Clone, Default)]
pub struct FilterParser {
    types: TypeRegistry,
}

impl FilterParser {
    pub fn new(types: TypeRegistry) -> Self {
        Self { types }
    }

    /// Parse one expression string into a criterion.
    pub fn parse(&self, expression: &str) -> Result<FilterCriterion> {
        if expression.trim().is_empty() {
            return Err(SyntaxError::EmptyExpression);
        }

        let (prefix, remainder) = match expression.split_once('_') {
            Some((prefix, remainder)) => (prefix, Some(remainder)),
            None => (expression, None),
        };

        let mut restriction = prefix.chars();
        let code = restriction
            .next_back()
            .ok_or_else(|| SyntaxError::MissingRestriction {
                expression: expression.to_string(),
            })?;
        let restriction = restriction.as_str();
        if restriction.is_empty() {
            return Err(SyntaxError::MissingRestriction {
                expression: expression.to_string(),
            });
        }

        let property_type =
            self.types
                .resolve(code)
                .map_err(|_| SyntaxError::UnknownTypeCode {
                    expression: expression.to_string(),
                    code,
                })?;

        let property_names = parse_property_names(expression, remainder)?;

        Ok(FilterCriterion {
            restriction: restriction.to_string(),
            property_type,
            property_names,
        })
    }

    /// Parse parallel expression/value sequences into filter entries.
    ///
    /// Both sequences empty is fine (empty result); differing lengths are
    /// rejected before any expression is parsed.
    pub fn parse_all(&self, expressions: &[&str], match_values: &[&str]) -> Result<Vec<FilterEntry>> {
        if expressions.len() != match_values.len() {
            return Err(SyntaxError::LengthMismatch {
                expressions: expressions.len(),
                values: match_values.len(),
            });
        }

        expressions
            .iter()
            .zip(match_values)
            .map(|(expression, value)| {
                self.parse(expression)
                    .map(|criterion| FilterEntry::new(criterion, *value))
            })
            .collect()
    }
}

fn parse_property_names(expression: &str, remainder: Option<&str>) -> Result<Vec<String>> {
    let Some(remainder) = remainder else {
        // No `_` at all: the grammar has no room for a property name.
        return Err(SyntaxError::EmptyPropertyName {
            expression: expression.to_string(),
        });
    };

    if remainder.contains(OR_DELIMITER) {
        let names: Vec<String> = remainder
            .split(OR_DELIMITER)
            .map(str::to_string)
            .collect();
        if names.iter().any(String::is_empty) {
            return Err(SyntaxError::EmptyPropertyName {
                expression: expression.to_string(),
            });
        }
        return Ok(names);
    }

    // Without an `_OR_` list the property name is whatever follows the LAST
    // underscore: `EQS_address_city` filters on `city`, not `address_city`.
    let name = expression.rsplit('_').next().unwrap_or_default();
    if name.is_empty() {
        return Err(SyntaxError::EmptyPropertyName {
            expression: expression.to_string(),
        });
    }
    Ok(vec![name.to_string()])
}
