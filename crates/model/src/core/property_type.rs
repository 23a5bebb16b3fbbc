//! Property value types and their wire codes.
//!
//! Every type carries exactly one single-character code, embedded as the
//! last character of a filter expression prefix (`EQS_name` declares `S`).

use crate::{
    core::value::Value,
    error::{ModelError, Result},
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// The closed set of value types a filter expression can declare.
///
/// | code | type    |
/// |------|---------|
/// | `S`  | Text    |
/// | `I`  | Integer |
/// | `L`  | Long    |
/// | `N`  | Double  |
/// | `D`  | Date    |
/// | `B`  | Boolean |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Text,
    Integer,
    Long,
    Double,
    Date,
    Boolean,
}

impl PropertyType {
    pub const fn code(self) -> char {
        match self {
            PropertyType::Text => 'S',
            PropertyType::Integer => 'I',
            PropertyType::Long => 'L',
            PropertyType::Double => 'N',
            PropertyType::Date => 'D',
            PropertyType::Boolean => 'B',
        }
    }

    /// Coerce a raw match literal into a typed value.
    pub fn coerce(self, raw: &str) -> Result<Value> {
        match self {
            PropertyType::Text => Ok(Value::Text(raw.to_string())),
            PropertyType::Integer => raw
                .parse::<i32>()
                .map(Value::Int)
                .map_err(|_| self.coerce_error(raw)),
            PropertyType::Long => raw
                .parse::<i64>()
                .map(Value::Long)
                .map_err(|_| self.coerce_error(raw)),
            PropertyType::Double => raw
                .parse::<f64>()
                .map(Value::Double)
                .map_err(|_| self.coerce_error(raw)),
            PropertyType::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(Value::Boolean(true)),
                "false" | "0" => Ok(Value::Boolean(false)),
                _ => Err(self.coerce_error(raw)),
            },
            PropertyType::Date => parse_date(raw)
                .map(Value::Date)
                .ok_or_else(|| self.coerce_error(raw)),
        }
    }

    fn coerce_error(self, raw: &str) -> ModelError {
        ModelError::Coerce {
            property_type: self,
            raw: raw.to_string(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Text => write!(f, "text"),
            PropertyType::Integer => write!(f, "integer"),
            PropertyType::Long => write!(f, "long"),
            PropertyType::Double => write!(f, "double"),
            PropertyType::Date => write!(f, "date"),
            PropertyType::Boolean => write!(f, "boolean"),
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
                .map(|datetime| datetime.date())
                .ok()
        })
}

/// Immutable code-to-type table.
///
/// The default table registers the closed set above; tests can assemble
/// isolated tables from `empty()` and `with_type`. Registering a code twice
/// replaces the earlier binding.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<char, PropertyType>,
}

impl TypeRegistry {
    pub fn empty() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, code: char, property_type: PropertyType) -> Self {
        self.types.insert(code, property_type);
        self
    }

    pub fn resolve(&self, code: char) -> Result<PropertyType> {
        self.types
            .get(&code)
            .copied()
            .ok_or(ModelError::UnknownTypeCode { code })
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for property_type in [
            PropertyType::Text,
            PropertyType::Integer,
            PropertyType::Long,
            PropertyType::Double,
            PropertyType::Date,
            PropertyType::Boolean,
        ] {
            registry = registry.with_type(property_type.code(), property_type);
        }
        registry
    }
}
