pub mod core;
pub mod error;

pub use self::core::property_type::{PropertyType, TypeRegistry};
pub use self::core::value::Value;
pub use self::error::{ModelError, Result};
