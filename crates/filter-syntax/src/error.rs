use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Expression string is empty or blank.
    #[error("filter expression is empty")]
    EmptyExpression,

    /// Prefix has no restriction name before its type code.
    #[error("filter expression '{expression}' has no restriction name")]
    MissingRestriction { expression: String },

    /// A property segment of the expression is zero-length.
    #[error("filter expression '{expression}' contains an empty property name")]
    EmptyPropertyName { expression: String },

    /// Type code not present in the registry.
    #[error("filter expression '{expression}' uses unknown property type code '{code}'")]
    UnknownTypeCode { expression: String, code: char },

    /// Parallel expression/value sequences differ in length.
    #[error("{expressions} expressions paired with {values} match values")]
    LengthMismatch { expressions: usize, values: usize },
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
