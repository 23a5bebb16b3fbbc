use model::{ModelError, PropertyType};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Restriction name missing from the operator table.
    #[error("unsupported restriction '{restriction}'")]
    UnsupportedRestriction { restriction: String },

    /// Match value cannot be coerced to the criterion's declared type.
    #[error("cannot coerce '{value}' to {property_type} for property '{property}'")]
    Coercion {
        property: String,
        property_type: PropertyType,
        value: String,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, TranslateError>;
