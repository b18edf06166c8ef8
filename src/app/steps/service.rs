use crate::app::InstallerContext;
use crate::domain::StepOutcome;
use crate::ports::ServiceStatus;

/// Informational probe of the optional local service. Never fails the install.
pub fn execute(ctx: &InstallerContext) -> StepOutcome {
    let service = &ctx.config().service;
    let reporter = ctx.reporter();

    match ctx.probe().probe(&service.url) {
        ServiceStatus::Running { models: Some(count) } => {
            reporter.ok(&format!("{} is running ({} models available)", service.name, count));
        }
        ServiceStatus::Running { models: None } => {
            reporter.ok(&format!("{} is running", service.name));
        }
        ServiceStatus::NotDetected(reason) => {
            tracing::debug!(%reason, url = %service.url, "service probe failed");
            reporter.info(&format!(
                "{} not detected (optional - for local AI thinking)",
                service.name
            ));
            reporter.raw(&format!("       Install from: {}", service.install_hint));
        }
    }
    StepOutcome::Success
}
