use crate::core::property_type::PropertyType;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Type code not present in the registry.
    #[error("unknown property type code '{code}'")]
    UnknownTypeCode { code: char },

    /// Raw literal cannot be converted to the declared type.
    #[error("cannot coerce '{raw}' to {property_type}")]
    Coerce {
        property_type: PropertyType,
        raw: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
