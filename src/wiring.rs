//! Startup wiring: picks the providers for a profile and registers them.

use std::sync::Arc;

use servicebox_config::{Environment, Platform, ProfileConfig};
use servicebox_core::{DuplicatePolicy, Registry};
use tracing::{info, Level};

use crate::services::{
    DesktopNotifier, Logger, MemoryLogger, Notifier, PushNotifier, RecordingNotifier,
    TracingLogger,
};

/// Create a registry with `policy` and wire the providers for `profile`.
pub fn build_registry(profile: ProfileConfig, policy: DuplicatePolicy) -> Arc<Registry> {
    let registry = Arc::new(Registry::with_policy(policy));
    wire(&registry, profile);
    registry
}

/// Register the `Logger` and `Notifier` providers for `profile`, plus the
/// profile itself so consumers can inspect it.
///
/// On mobile production the concrete [`PushNotifier`] is also registered so
/// the device sync can drain its outbox.
pub fn wire(registry: &Registry, profile: ProfileConfig) {
    let logger: Arc<dyn Logger> = match profile.environment {
        Environment::Production => Arc::new(TracingLogger),
        Environment::Test => Arc::new(MemoryLogger::default()),
    };

    let push = match (profile.environment, profile.platform) {
        (Environment::Production, Platform::Mobile) => Some(Arc::new(PushNotifier::default())),
        _ => None,
    };

    let notifier: Arc<dyn Notifier> = match (profile.environment, &push) {
        (Environment::Test, _) => Arc::new(RecordingNotifier::default()),
        (Environment::Production, Some(push)) => push.clone(),
        (Environment::Production, None) => Arc::new(DesktopNotifier),
    };

    info!(
        environment = %profile.environment,
        platform = %profile.platform,
        logger = logger.name(),
        notifier = notifier.name(),
        "Wiring providers"
    );
    logger.log(Level::DEBUG, "Providers wired");

    registry.register(logger);
    registry.register(notifier);
    registry.register_instance(profile);

    match push {
        Some(push) => registry.register::<PushNotifier>(push),
        None => {
            registry.unregister::<PushNotifier>();
        }
    }
}
