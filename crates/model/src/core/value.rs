use crate::core::property_type::PropertyType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

/// A typed match value produced by coercing a raw filter literal.
///
/// `List` carries the element values of membership restrictions; all other
/// variants are scalars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Int(i32),
    Long(i64),
    Double(f64),
    Text(String),
    Boolean(bool),
    Date(NaiveDate),
    List(Vec<Value>),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(f64::from(*v)),
            Value::Long(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            Value::Text(_) => None,
            Value::Boolean(_) => None,
            Value::Date(_) => None,
            Value::List(_) => None,
        }
    }

    pub fn property_type(&self) -> Option<PropertyType> {
        match self {
            Value::Int(_) => Some(PropertyType::Integer),
            Value::Long(_) => Some(PropertyType::Long),
            Value::Double(_) => Some(PropertyType::Double),
            Value::Text(_) => Some(PropertyType::Text),
            Value::Boolean(_) => Some(PropertyType::Boolean),
            Value::Date(_) => Some(PropertyType::Date),
            Value::List(_) => None,
        }
    }

    /// Ordering between two values, widening across the numeric variants.
    /// Returns `None` for combinations that have no defined order.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => Some(a.cmp(b)),
            (Long(a), Long(b)) => Some(a.cmp(b)),
            (Int(a), Long(b)) => Some(i64::from(*a).cmp(b)),
            (Long(a), Int(b)) => Some(a.cmp(&i64::from(*b))),
            (Double(a), Double(b)) => a.partial_cmp(b),
            (Int(a), Double(b)) => f64::from(*a).partial_cmp(b),
            (Double(a), Int(b)) => a.partial_cmp(&f64::from(*b)),
            (Long(a), Double(b)) => (*a as f64).partial_cmp(b),
            (Double(a), Long(b)) => a.partial_cmp(&(*b as f64)),
            (Text(a), Text(b)) => Some(a.cmp(b)),
            (Boolean(a), Boolean(b)) => Some(a.cmp(b)),
            (Date(a), Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    pub fn equal(&self, other: &Value) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "'{}'", v.replace('\'', "''")),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Date(v) => write!(f, "'{v}'"),
            Value::List(values) => {
                let rendered = values
                    .iter()
                    .map(|value| value.to_string())
                    .collect::<Vec<String>>()
                    .join(", ");
                write!(f, "({rendered})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_widens_numeric_variants() {
        assert_eq!(
            Value::Int(2).compare(&Value::Long(10)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Long(10).compare(&Value::Double(2.5)),
            Some(Ordering::Greater)
        );
        assert!(Value::Int(3).equal(&Value::Double(3.0)));
    }

    #[test]
    fn compare_rejects_mixed_families() {
        assert_eq!(Value::Int(1).compare(&Value::Text("1".into())), None);
        assert_eq!(Value::Boolean(true).compare(&Value::Int(1)), None);
        assert!(!Value::Int(1).equal(&Value::Text("1".into())));
    }

    #[test]
    fn exposes_the_declared_type_and_numeric_view() {
        assert_eq!(Value::Long(5).property_type(), Some(PropertyType::Long));
        assert_eq!(
            Value::List(vec![Value::Int(1)]).property_type(),
            None
        );
        assert_eq!(Value::Long(5).as_f64(), Some(5.0));
        assert_eq!(Value::Text("5".into()).as_f64(), None);
    }

    #[test]
    fn display_quotes_text() {
        assert_eq!(Value::Text("o'brien".into()).to_string(), "'o''brien'");
        assert_eq!(
            Value::List(vec![Value::Int(1), Value::Int(2)]).to_string(),
            "(1, 2)"
        );
    }
}
