//! # ServiceBox Config
//!
//! Configuration management for ServiceBox: registry policy, logging and
//! the environment profile that selects which providers get wired.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
