//! In-memory query context: predicates as owned condition trees, evaluated
//! against string-keyed rows. The reference backend for tests and callers
//! that filter in process; real query engines implement `QueryContext`
//! elsewhere.

use crate::{context::QueryContext, operator::OperatorKind};
use model::Value;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::HashMap};
use tracing::warn;

pub type Row = HashMap<String, Value>;

/// An owned predicate tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Matches every row; the identity for AND.
    True,
    Cmp {
        op: OperatorKind,
        property: String,
        value: Value,
    },
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Evaluate against one row. Missing properties and incomparable
    /// value combinations evaluate to false.
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Predicate::True => true,
            Predicate::And(children) => children.iter().all(|child| child.matches(row)),
            Predicate::Or(children) => children.iter().any(|child| child.matches(row)),
            Predicate::Cmp {
                op,
                property,
                value,
            } => match row.get(property) {
                None => false,
                Some(actual) => compare(*op, actual, value),
            },
        }
    }
}

fn compare(op: OperatorKind, actual: &Value, expected: &Value) -> bool {
    match op {
        OperatorKind::Eq => actual.equal(expected),
        OperatorKind::Ne => matches!(
            actual.compare(expected),
            Some(ordering) if ordering != Ordering::Equal
        ),
        OperatorKind::Gt => actual.compare(expected) == Some(Ordering::Greater),
        OperatorKind::Lt => actual.compare(expected) == Some(Ordering::Less),
        OperatorKind::Gte => matches!(
            actual.compare(expected),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        OperatorKind::Lte => matches!(
            actual.compare(expected),
            Some(Ordering::Less | Ordering::Equal)
        ),
        OperatorKind::Like | OperatorKind::StartsWith | OperatorKind::EndsWith => {
            compare_text(op, actual, expected)
        }
        OperatorKind::In | OperatorKind::NotIn => compare_membership(op, actual, expected),
    }
}

fn compare_text(op: OperatorKind, actual: &Value, expected: &Value) -> bool {
    let (Some(actual), Some(expected)) = (actual.as_text(), expected.as_text()) else {
        warn!("text operator {} applied to non-text values", op);
        return false;
    };
    match op {
        OperatorKind::Like => actual.contains(expected),
        OperatorKind::StartsWith => actual.starts_with(expected),
        OperatorKind::EndsWith => actual.ends_with(expected),
        _ => false,
    }
}

fn compare_membership(op: OperatorKind, actual: &Value, expected: &Value) -> bool {
    let Value::List(candidates) = expected else {
        warn!("membership operator {} applied to non-list value", op);
        return false;
    };
    let found = candidates.iter().any(|candidate| actual.equal(candidate));
    match op {
        OperatorKind::NotIn => !found,
        _ => found,
    }
}

/// Query context producing `Predicate` trees.
///
/// Tracks how many elementary predicates the current pass has issued;
/// `reset` clears the count when a composition pass ends.
#[derive(Debug, Default)]
pub struct MemoryContext {
    issued: usize,
}

impl MemoryContext {
    /// Elementary predicates issued in the current pass.
    pub fn issued(&self) -> usize {
        self.issued
    }
}

impl QueryContext for MemoryContext {
    type Predicate = Predicate;

    fn predicate(&mut self, op: OperatorKind, property: &str, value: Value) -> Predicate {
        self.issued += 1;
        Predicate::Cmp {
            op,
            property: property.to_string(),
            value,
        }
    }

    fn and(&mut self, predicates: Vec<Predicate>) -> Predicate {
        Predicate::And(predicates)
    }

    fn or(&mut self, predicates: Vec<Predicate>) -> Predicate {
        Predicate::Or(predicates)
    }

    fn always_true(&mut self) -> Predicate {
        Predicate::True
    }

    fn reset(&mut self) {
        self.issued = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    fn cmp(op: OperatorKind, property: &str, value: Value) -> Predicate {
        Predicate::Cmp {
            op,
            property: property.to_string(),
            value,
        }
    }

    #[test]
    fn equality_and_ordering() {
        let data = row(&[("age", Value::Int(30))]);
        assert!(cmp(OperatorKind::Eq, "age", Value::Int(30)).matches(&data));
        assert!(cmp(OperatorKind::Ne, "age", Value::Int(31)).matches(&data));
        assert!(cmp(OperatorKind::Gt, "age", Value::Int(29)).matches(&data));
        assert!(cmp(OperatorKind::Gte, "age", Value::Int(30)).matches(&data));
        assert!(cmp(OperatorKind::Lt, "age", Value::Int(31)).matches(&data));
        assert!(!cmp(OperatorKind::Lte, "age", Value::Int(29)).matches(&data));
    }

    #[test]
    fn missing_property_never_matches() {
        let data = row(&[]);
        assert!(!cmp(OperatorKind::Eq, "age", Value::Int(30)).matches(&data));
        assert!(!cmp(OperatorKind::Ne, "age", Value::Int(30)).matches(&data));
    }

    #[test]
    fn incomparable_values_never_match() {
        let data = row(&[("age", Value::Text("thirty".into()))]);
        assert!(!cmp(OperatorKind::Eq, "age", Value::Int(30)).matches(&data));
        assert!(!cmp(OperatorKind::Ne, "age", Value::Int(30)).matches(&data));
    }

    #[test]
    fn text_operators() {
        let data = row(&[("name", Value::Text("montgomery".into()))]);
        assert!(cmp(OperatorKind::Like, "name", Value::Text("gome".into())).matches(&data));
        assert!(cmp(OperatorKind::StartsWith, "name", Value::Text("mont".into())).matches(&data));
        assert!(cmp(OperatorKind::EndsWith, "name", Value::Text("ery".into())).matches(&data));
        assert!(!cmp(OperatorKind::Like, "name", Value::Text("xyz".into())).matches(&data));
    }

    #[test]
    fn membership_operators() {
        let data = row(&[("age", Value::Int(2))]);
        let list = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert!(cmp(OperatorKind::In, "age", list.clone()).matches(&data));
        assert!(!cmp(OperatorKind::NotIn, "age", list).matches(&data));
        assert!(
            cmp(
                OperatorKind::NotIn,
                "age",
                Value::List(vec![Value::Int(7)])
            )
            .matches(&data)
        );
    }

    #[test]
    fn tree_combinators() {
        let data = row(&[
            ("name", Value::Text("bob".into())),
            ("age", Value::Int(30)),
        ]);
        let tree = Predicate::And(vec![
            Predicate::Or(vec![
                cmp(OperatorKind::Eq, "name", Value::Text("bob".into())),
                cmp(OperatorKind::Eq, "name", Value::Text("alice".into())),
            ]),
            cmp(OperatorKind::Gte, "age", Value::Int(18)),
        ]);
        assert!(tree.matches(&data));
        assert!(Predicate::True.matches(&data));
    }
}
