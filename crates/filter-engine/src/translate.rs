//! Turns one filter entry into a predicate through a query context.

use crate::{
    context::QueryContext,
    error::{Result, TranslateError},
    operator::{OperatorKind, OperatorTable},
};
use filter_syntax::FilterEntry;
use model::{PropertyType, Value};
use tracing::trace;

/// Translates filter entries against an injected operator table.
#[derive(Debug, Clone, Default)]
pub struct RestrictionTranslator {
    operators: OperatorTable,
}

impl RestrictionTranslator {
    pub fn new(operators: OperatorTable) -> Self {
        Self { operators }
    }

    /// Translate one entry into a single predicate.
    ///
    /// The restriction resolves against the operator table first; the raw
    /// match value is then coerced once per target property, and the
    /// per-property predicates are OR-combined. A single property name
    /// yields its predicate unchanged.
    pub fn translate<C: QueryContext>(
        &self,
        entry: &FilterEntry,
        ctx: &mut C,
    ) -> Result<C::Predicate> {
        let op = self.operators.resolve(&entry.criterion.restriction)?;
        trace!(
            "translating {} ({} against {} properties)",
            entry.criterion, op, entry.criterion.property_names.len()
        );

        let mut predicates = Vec::with_capacity(entry.criterion.property_names.len());
        for property in &entry.criterion.property_names {
            let value = coerce_match_value(
                op,
                entry.criterion.property_type,
                property,
                &entry.match_value,
            )?;
            predicates.push(ctx.predicate(op, property, value));
        }

        Ok(or_combine(predicates, ctx))
    }
}

fn coerce_match_value(
    op: OperatorKind,
    property_type: PropertyType,
    property: &str,
    raw: &str,
) -> Result<Value> {
    let coerce = |raw: &str| {
        property_type
            .coerce(raw)
            .map_err(|source| TranslateError::Coercion {
                property: property.to_string(),
                property_type,
                value: raw.to_string(),
                source,
            })
    };

    if op.is_membership() {
        raw.split(',')
            .map(coerce)
            .collect::<Result<Vec<Value>>>()
            .map(Value::List)
    } else {
        coerce(raw)
    }
}

fn or_combine<C: QueryContext>(mut predicates: Vec<C::Predicate>, ctx: &mut C) -> C::Predicate {
    if predicates.len() == 1 {
        predicates.remove(0)
    } else {
        ctx.or(predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{MemoryContext, Predicate};
    use filter_syntax::FilterParser;
    use model::ModelError;

    fn entry(expression: &str, value: &str) -> FilterEntry {
        FilterEntry::new(FilterParser::default().parse(expression).unwrap(), value)
    }

    #[test]
    fn single_property_has_no_or_wrapper() {
        let mut ctx = MemoryContext::default();
        let predicate = RestrictionTranslator::default()
            .translate(&entry("EQS_name", "vincent"), &mut ctx)
            .unwrap();
        assert_eq!(
            predicate,
            Predicate::Cmp {
                op: OperatorKind::Eq,
                property: "name".to_string(),
                value: Value::Text("vincent".to_string()),
            }
        );
    }

    #[test]
    fn multiple_properties_are_or_combined() {
        let mut ctx = MemoryContext::default();
        let predicate = RestrictionTranslator::default()
            .translate(&entry("EQI_age_OR_score", "7"), &mut ctx)
            .unwrap();
        let expected = Predicate::Or(vec![
            Predicate::Cmp {
                op: OperatorKind::Eq,
                property: "age".to_string(),
                value: Value::Int(7),
            },
            Predicate::Cmp {
                op: OperatorKind::Eq,
                property: "score".to_string(),
                value: Value::Int(7),
            },
        ]);
        assert_eq!(predicate, expected);
    }

    #[test]
    fn membership_values_split_on_commas() {
        let mut ctx = MemoryContext::default();
        let predicate = RestrictionTranslator::default()
            .translate(&entry("INI_age", "1,2,3"), &mut ctx)
            .unwrap();
        assert_eq!(
            predicate,
            Predicate::Cmp {
                op: OperatorKind::In,
                property: "age".to_string(),
                value: Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
            }
        );
    }

    #[test]
    fn unknown_restriction_fails_before_coercion() {
        let mut ctx = MemoryContext::default();
        // The value would also fail integer coercion; the restriction
        // lookup wins.
        let err = RestrictionTranslator::default()
            .translate(&entry("XXI_age", "notanumber"), &mut ctx)
            .unwrap_err();
        assert_eq!(
            err,
            TranslateError::UnsupportedRestriction {
                restriction: "XX".to_string()
            }
        );
    }

    #[test]
    fn coercion_failure_names_the_property() {
        let mut ctx = MemoryContext::default();
        let err = RestrictionTranslator::default()
            .translate(&entry("EQI_age", "notanumber"), &mut ctx)
            .unwrap_err();
        assert_eq!(
            err,
            TranslateError::Coercion {
                property: "age".to_string(),
                property_type: PropertyType::Integer,
                value: "notanumber".to_string(),
                source: ModelError::Coerce {
                    property_type: PropertyType::Integer,
                    raw: "notanumber".to_string(),
                },
            }
        );
    }

    #[test]
    fn membership_coercion_failure_names_the_bad_element() {
        let mut ctx = MemoryContext::default();
        let err = RestrictionTranslator::default()
            .translate(&entry("INI_age", "1,two,3"), &mut ctx)
            .unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Coercion { value, .. } if value == "two"
        ));
    }

    #[test]
    fn isolated_operator_table_changes_the_accepted_restrictions() {
        let translator = RestrictionTranslator::new(
            OperatorTable::empty().with_operator("MATCH", OperatorKind::Like),
        );
        let mut ctx = MemoryContext::default();
        assert!(
            translator
                .translate(&entry("MATCHS_name", "bob"), &mut ctx)
                .is_ok()
        );
        assert!(
            translator
                .translate(&entry("EQS_name", "bob"), &mut ctx)
                .is_err()
        );
    }
}
