//! # navslice Config
//!
//! Slice configuration, the fixed navigation icon layout, and validation.

mod error;
mod schema;
mod validator;

pub use error::ConfigError;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
