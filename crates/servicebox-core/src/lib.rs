//! # ServiceBox Core
//!
//! Type-keyed service registry.
//!
//! ## Components
//!
//! - [`Registry`] - Maps a capability type to exactly one shared provider
//! - [`CapabilityId`] - Stable identifier derived from a capability type
//! - [`RegistryError`] - Failures reported by lookups and strict registration
//! - [`global`] - Lazily created process-wide registry
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use servicebox_core::{Registry, RegistryError};
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! let registry = Registry::new();
//! registry.register::<dyn Greeter>(Arc::new(English));
//!
//! let greeter = registry.get::<dyn Greeter>().unwrap();
//! assert_eq!(greeter.greet(), "hello");
//!
//! assert!(matches!(
//!     registry.get::<String>(),
//!     Err(RegistryError::NotRegistered { .. })
//! ));
//! ```

pub mod capability;
pub mod error;
pub mod global;
pub mod registry;

pub use capability::CapabilityId;
pub use error::RegistryError;
pub use global::global;
pub use registry::{DuplicatePolicy, Registry};
