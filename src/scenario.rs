//! The register / lookup / replace walkthrough run by `servicebox demo`.

use std::sync::Arc;

use servicebox_core::{Registry, RegistryError};
use tracing::info;

use crate::services::{Logger, MemoryLogger, NoopLogger, Notifier};

/// What each step of the walkthrough observed.
#[derive(Debug)]
pub struct ScenarioReport {
    pub first_logger: &'static str,
    pub missing_notifier: Option<RegistryError>,
    pub second_logger: &'static str,
    /// The second lookup returned the exact instance registered second.
    pub replaced_in_place: bool,
}

/// Run the walkthrough against `registry`.
///
/// `registry` must not already provide a `Notifier`.
pub fn run(registry: &Registry) -> Result<ScenarioReport, RegistryError> {
    registry.register::<dyn Logger>(Arc::new(NoopLogger));
    let first = registry.get::<dyn Logger>()?;
    info!(provider = first.name(), "Resolved Logger");

    let missing_notifier = registry.get::<dyn Notifier>().err();
    match &missing_notifier {
        Some(err) => info!(error = %err, "Notifier lookup failed as expected"),
        None => info!("Notifier unexpectedly present"),
    }

    let second: Arc<dyn Logger> = Arc::new(MemoryLogger::default());
    registry.register(Arc::clone(&second));
    let resolved = registry.get::<dyn Logger>()?;
    info!(provider = resolved.name(), "Resolved replacement Logger");

    Ok(ScenarioReport {
        first_logger: first.name(),
        missing_notifier,
        second_logger: resolved.name(),
        replaced_in_place: Arc::ptr_eq(&second, &resolved),
    })
}
