use crate::error::{Result, TranslateError};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Predicate operators a query context must know how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    Eq,
    Ne,
    Like,
    StartsWith,
    EndsWith,
    Gt,
    Lt,
    Gte,
    Lte,
    In,
    NotIn,
}

impl OperatorKind {
    /// Membership operators take a list value built by splitting the raw
    /// match literal on `,`.
    pub const fn is_membership(self) -> bool {
        matches!(self, OperatorKind::In | OperatorKind::NotIn)
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::Eq => write!(f, "="),
            OperatorKind::Ne => write!(f, "!="),
            OperatorKind::Like => write!(f, "LIKE"),
            OperatorKind::StartsWith => write!(f, "STARTS WITH"),
            OperatorKind::EndsWith => write!(f, "ENDS WITH"),
            OperatorKind::Gt => write!(f, ">"),
            OperatorKind::Lt => write!(f, "<"),
            OperatorKind::Gte => write!(f, ">="),
            OperatorKind::Lte => write!(f, "<="),
            OperatorKind::In => write!(f, "IN"),
            OperatorKind::NotIn => write!(f, "NOT IN"),
        }
    }
}

/// Immutable restriction-name-to-operator table.
///
/// The default table registers the full restriction family; tests can
/// assemble isolated tables from `empty()` and `with_operator`. Registering
/// a restriction twice replaces the earlier binding.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    operators: HashMap<String, OperatorKind>,
}

impl OperatorTable {
    pub fn empty() -> Self {
        Self {
            operators: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_operator(mut self, restriction: impl Into<String>, op: OperatorKind) -> Self {
        self.operators.insert(restriction.into(), op);
        self
    }

    pub fn resolve(&self, restriction: &str) -> Result<OperatorKind> {
        self.operators
            .get(restriction)
            .copied()
            .ok_or_else(|| TranslateError::UnsupportedRestriction {
                restriction: restriction.to_string(),
            })
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::empty()
            .with_operator("EQ", OperatorKind::Eq)
            .with_operator("NE", OperatorKind::Ne)
            .with_operator("LIKE", OperatorKind::Like)
            .with_operator("RLIKE", OperatorKind::StartsWith)
            .with_operator("LLIKE", OperatorKind::EndsWith)
            .with_operator("GT", OperatorKind::Gt)
            .with_operator("LT", OperatorKind::Lt)
            .with_operator("GTE", OperatorKind::Gte)
            .with_operator("LTE", OperatorKind::Lte)
            .with_operator("IN", OperatorKind::In)
            .with_operator("NIN", OperatorKind::NotIn)
    }
}
