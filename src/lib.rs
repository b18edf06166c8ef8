//! agent-bootstrap: fetch the agent source tree, lay out its workspace, install its
//! dependencies and optionally start its daemon.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use app::{Collaborators, InstallerContext, pipeline};

pub use app::InstallOptions;
pub use domain::{AppError, InstallReport, InstallerConfig, Step, StepOutcome};

/// Run the full install pipeline against the host system.
///
/// Returns the report of a completed (possibly degraded) install, or the fatal
/// error that stopped it.
pub fn install(
    config: InstallerConfig,
    options: &InstallOptions,
) -> Result<InstallReport, AppError> {
    config.validate()?;
    let collaborators = Collaborators::system(&config)?;
    let ctx = InstallerContext::new(config, collaborators);
    pipeline::execute(&ctx, options)
}
