//! Capability identifiers.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identifier for a capability, derived from its type.
///
/// Two call sites naming the same type always compute the same identifier,
/// and distinct types never collide. The type name is carried for
/// diagnostics only; equality and hashing use the [`TypeId`] alone.
#[derive(Debug, Clone, Copy)]
pub struct CapabilityId {
    type_id: TypeId,
    name: &'static str,
}

impl CapabilityId {
    /// Identifier for the capability type `C` (usually a `dyn Trait`).
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: type_name::<C>(),
        }
    }

    /// Human-readable name of the capability type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The capability's [`TypeId`]. Named apart from `Any::type_id`, which
    /// would describe `CapabilityId` itself.
    pub fn capability_type_id(&self) -> TypeId {
        self.type_id
    }
}

impl PartialEq for CapabilityId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for CapabilityId {}

impl Hash for CapabilityId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    trait Logger {}
    trait Notifier {}

    #[test]
    fn test_same_type_same_id() {
        assert_eq!(CapabilityId::of::<dyn Logger>(), CapabilityId::of::<dyn Logger>());
    }

    #[test]
    fn test_distinct_types_distinct_ids() {
        assert_ne!(CapabilityId::of::<dyn Logger>(), CapabilityId::of::<dyn Notifier>());
        assert_ne!(CapabilityId::of::<u32>(), CapabilityId::of::<u64>());
    }

    #[test]
    fn test_trait_object_differs_from_auto_trait_variant() {
        assert_ne!(
            CapabilityId::of::<dyn Logger>(),
            CapabilityId::of::<dyn Logger + Send + Sync>()
        );
    }

    #[test]
    fn test_name_mentions_type() {
        let id = CapabilityId::of::<dyn Logger>();
        assert!(id.name().contains("Logger"));
        assert_eq!(id.to_string(), id.name());
    }

    #[test]
    fn test_hash_set_dedup() {
        let mut set = HashSet::new();
        set.insert(CapabilityId::of::<dyn Logger>());
        set.insert(CapabilityId::of::<dyn Logger>());
        set.insert(CapabilityId::of::<dyn Notifier>());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_capability_type_id_accessor() {
        let id = CapabilityId::of::<String>();
        assert_eq!(id.capability_type_id(), TypeId::of::<String>());
        assert_ne!(id.capability_type_id(), TypeId::of::<CapabilityId>());
    }
}
