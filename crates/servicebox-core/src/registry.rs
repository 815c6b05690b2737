//! Type-keyed registry of shared providers.
//!
//! Each capability type maps to at most one provider, stored as `Arc<C>`.
//! Lookups hand out clones of that `Arc`, so every caller shares the same
//! instance and keeps it alive even after it has been replaced.

use std::any::{type_name, Any};
use std::sync::Arc;

use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::capability::CapabilityId;
use crate::error::RegistryError;

/// How [`Registry::register`] reports a registration that replaces an
/// existing provider. The replacement happens either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace silently (debug log only).
    #[default]
    Replace,
    /// Replace and emit a warning naming the capability.
    Warn,
}

/// A stored provider with its concrete stored type, kept for diagnostics.
struct Entry {
    handle: Box<dyn Any + Send + Sync>,
    stored_type: &'static str,
}

impl Entry {
    fn typed<C: ?Sized + Send + Sync + 'static>(provider: Arc<C>) -> Self {
        Self {
            handle: Box::new(provider),
            stored_type: type_name::<Arc<C>>(),
        }
    }

    fn erased<P: Any + Send + Sync>(value: P) -> Self {
        Self {
            handle: Box::new(value),
            stored_type: type_name::<P>(),
        }
    }
}

/// Registry mapping capabilities to their single shared provider.
///
/// Thread-safe: all operations take `&self` and may run concurrently.
/// No caller code runs while a map shard is locked. Providers are built
/// before [`register`](Self::register), and a replaced or removed provider
/// is dropped only after the lock is released, so a provider's `Drop` may
/// safely call back into the registry.
pub struct Registry {
    entries: DashMap<CapabilityId, Entry>,
    policy: DuplicatePolicy,
}

impl Registry {
    /// Create an empty registry with the default [`DuplicatePolicy`].
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Create an empty registry with the given duplicate policy.
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        Self {
            entries: DashMap::new(),
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Register `provider` as the implementation of capability `C`.
    ///
    /// The provider must already be coerced to the capability type, e.g.
    /// `registry.register::<dyn Logger>(Arc::new(ConsoleLogger))`, which
    /// lets the compiler check that it implements the contract.
    ///
    /// Last write wins. Handles obtained earlier keep pointing at the
    /// previous provider.
    pub fn register<C: ?Sized + Send + Sync + 'static>(&self, provider: Arc<C>) {
        let id = CapabilityId::of::<C>();
        let previous = self.entries.insert(id, Entry::typed(provider));
        match &previous {
            Some(old) => self.report_replacement(id, old.stored_type),
            None => debug!(capability = id.name(), "Registered provider"),
        }
        // Shard lock is already released here.
        drop(previous);
    }

    /// Register a concrete value as its own capability.
    pub fn register_instance<T: Send + Sync + 'static>(&self, value: T) {
        self.register::<T>(Arc::new(value));
    }

    /// Register `provider` only if `C` has no provider yet.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::AlreadyRegistered`] if a provider is present;
    /// the existing provider is kept.
    pub fn try_register<C: ?Sized + Send + Sync + 'static>(
        &self,
        provider: Arc<C>,
    ) -> Result<(), RegistryError> {
        let id = CapabilityId::of::<C>();
        let inserted = match self.entries.entry(id) {
            MapEntry::Occupied(_) => false,
            MapEntry::Vacant(slot) => {
                slot.insert(Entry::typed(provider));
                true
            }
        };

        if inserted {
            debug!(capability = id.name(), "Registered provider");
            Ok(())
        } else {
            debug!(capability = id.name(), "Rejected duplicate registration");
            Err(RegistryError::AlreadyRegistered {
                capability: id.name(),
            })
        }
    }

    /// Register a value under an identifier without a compile-time check.
    ///
    /// For call sites that only know the identifier at runtime (plugin
    /// loaders, bridges). `get::<C>()` succeeds only if `value` is an
    /// `Arc<C>` for the capability `id` names; otherwise it reports
    /// [`RegistryError::TypeMismatch`].
    pub fn register_erased<P: Any + Send + Sync>(&self, id: CapabilityId, value: P) {
        let previous = self.entries.insert(id, Entry::erased(value));
        match &previous {
            Some(old) => self.report_replacement(id, old.stored_type),
            None => debug!(
                capability = id.name(),
                stored = type_name::<P>(),
                "Registered unchecked provider"
            ),
        }
        drop(previous);
    }

    /// Get the provider currently registered for capability `C`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotRegistered`] if nothing is registered for `C`.
    /// - [`RegistryError::TypeMismatch`] if the stored value is not an
    ///   `Arc<C>` (only possible after [`register_erased`](Self::register_erased)).
    pub fn get<C: ?Sized + Send + Sync + 'static>(&self) -> Result<Arc<C>, RegistryError> {
        let id = CapabilityId::of::<C>();
        let entry = self
            .entries
            .get(&id)
            .ok_or(RegistryError::NotRegistered {
                capability: id.name(),
            })?;

        match (*entry.handle).downcast_ref::<Arc<C>>() {
            Some(provider) => {
                trace!(capability = id.name(), "Resolved provider");
                Ok(Arc::clone(provider))
            }
            None => Err(RegistryError::TypeMismatch {
                capability: id.name(),
                expected: type_name::<Arc<C>>(),
                found: entry.stored_type,
            }),
        }
    }

    /// Remove the provider for `C`. Returns whether one was present.
    pub fn unregister<C: ?Sized + 'static>(&self) -> bool {
        let id = CapabilityId::of::<C>();
        match self.entries.remove(&id) {
            Some(removed) => {
                debug!(capability = id.name(), "Unregistered provider");
                drop(removed);
                true
            }
            None => false,
        }
    }

    /// Check if a provider is registered for `C`.
    pub fn contains<C: ?Sized + 'static>(&self) -> bool {
        self.entries.contains_key(&CapabilityId::of::<C>())
    }

    /// Registered capabilities, sorted by name.
    pub fn capabilities(&self) -> Vec<CapabilityId> {
        let mut ids: Vec<CapabilityId> = self.entries.iter().map(|entry| *entry.key()).collect();
        ids.sort_by(|a, b| a.name().cmp(b.name()));
        ids
    }

    /// Get the number of registered capabilities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn report_replacement(&self, id: CapabilityId, previous: &'static str) {
        match self.policy {
            DuplicatePolicy::Replace => {
                debug!(capability = id.name(), previous, "Replaced provider")
            }
            DuplicatePolicy::Warn => {
                warn!(
                    capability = id.name(),
                    previous,
                    "Capability registered twice, replacing provider"
                )
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("capabilities", &self.capabilities())
            .field("policy", &self.policy)
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
