pub mod ast;
pub mod builder;
pub mod error;
pub mod parser;

pub use ast::criterion::{FilterCriterion, FilterEntry};
pub use builder::params_starting_with;
pub use error::{Result, SyntaxError};
pub use parser::FilterParser;
