//! Registry errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Capability not registered: {capability}")]
    NotRegistered { capability: &'static str },

    #[error("Type mismatch for capability {capability}: expected {expected}, found {found}")]
    TypeMismatch {
        capability: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Capability already registered: {capability}")]
    AlreadyRegistered { capability: &'static str },
}

impl RegistryError {
    /// Name of the capability the failed operation targeted.
    pub fn capability(&self) -> &'static str {
        match self {
            Self::NotRegistered { capability }
            | Self::TypeMismatch { capability, .. }
            | Self::AlreadyRegistered { capability } => *capability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_registered_error() {
        let err = RegistryError::NotRegistered { capability: "dyn app::Notifier" };
        let display = err.to_string();
        assert!(display.contains("not registered"));
        assert!(display.contains("dyn app::Notifier"));
    }

    #[test]
    fn test_type_mismatch_error() {
        let err = RegistryError::TypeMismatch {
            capability: "dyn app::Logger",
            expected: "alloc::sync::Arc<dyn app::Logger>",
            found: "u32",
        };
        let display = err.to_string();
        assert!(display.contains("mismatch"));
        assert!(display.contains("dyn app::Logger"));
        assert!(display.contains("found u32"));
    }

    #[test]
    fn test_already_registered_error() {
        let err = RegistryError::AlreadyRegistered { capability: "dyn app::Logger" };
        assert!(err.to_string().contains("already registered"));
    }

    #[test]
    fn test_capability_accessor() {
        let errors = [
            RegistryError::NotRegistered { capability: "a" },
            RegistryError::TypeMismatch { capability: "a", expected: "b", found: "c" },
            RegistryError::AlreadyRegistered { capability: "a" },
        ];
        for err in errors {
            assert_eq!(err.capability(), "a");
        }
    }

    #[test]
    fn test_variants_are_distinct() {
        let missing = RegistryError::NotRegistered { capability: "a" };
        let mismatch = RegistryError::TypeMismatch { capability: "a", expected: "b", found: "c" };
        assert_ne!(missing, mismatch);
    }
}
