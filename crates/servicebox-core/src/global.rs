//! Process-wide registry.
//!
//! Prefer constructing a [`Registry`] and passing it around as
//! `Arc<Registry>`. This instance exists for code that has no natural place
//! to receive one.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::registry::Registry;

static GLOBAL: Lazy<Arc<Registry>> = Lazy::new(|| Arc::new(Registry::new()));

/// The shared registry, created on first use and kept for the process lifetime.
pub fn global() -> &'static Arc<Registry> {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;

    struct GlobalMarker(u8);

    #[test]
    fn test_global_is_singleton() {
        assert!(Arc::ptr_eq(global(), global()));
    }

    #[test]
    fn test_global_register_and_get() {
        global().register_instance(GlobalMarker(7));
        assert_eq!(global().get::<GlobalMarker>().unwrap().0, 7);
    }
}
