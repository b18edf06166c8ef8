//! Installer pipeline driver.
//!
//! Steps run strictly in order. A `Fatal` outcome stops the run; warnings are
//! printed as they happen and collected for the completion summary.

use std::path::PathBuf;

use crate::app::InstallerContext;
use crate::app::steps::{
    acquire, config_file, daemon, dependencies, directories, environment, service, smoke_test,
    summary,
};
use crate::domain::{AppError, InstallLayout, InstallReport, Step, StepOutcome};

/// Per-run options taken from the command line.
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Target directory, relative or absolute.
    pub dir: PathBuf,
    /// Launch the daemon after install.
    pub start: bool,
    /// Skip dependency installation.
    pub skip_deps: bool,
}

/// Run every step against `options.dir`.
///
/// Returns `AppError::StepFailed` when the runtime check or source acquisition
/// fails; every other problem ends up as a warning in the report.
pub fn execute(
    ctx: &InstallerContext,
    options: &InstallOptions,
) -> Result<InstallReport, AppError> {
    summary::print_banner(ctx);

    let layout = InstallLayout::resolve(&options.dir, &ctx.config().layout)?;
    let mut report = InstallReport::default();

    for step in Step::ALL {
        let outcome = run_step(ctx, &layout, options, step);
        tracing::debug!(%step, ?outcome, "step finished");

        match &outcome {
            StepOutcome::Fatal(message) => {
                return Err(AppError::StepFailed {
                    step: step.name().to_string(),
                    message: message.clone(),
                });
            }
            StepOutcome::Warning(message) => ctx.reporter().warn(message),
            StepOutcome::Success | StepOutcome::Skipped(_) => {}
        }
        report.record(step, outcome);
    }

    summary::print_completion(ctx, &layout, &report);
    Ok(report)
}

fn run_step(
    ctx: &InstallerContext,
    layout: &InstallLayout,
    options: &InstallOptions,
    step: Step,
) -> StepOutcome {
    match step {
        Step::Environment => environment::execute(ctx),
        Step::Acquire => acquire::execute(ctx, layout),
        Step::Directories => directories::execute(ctx, layout),
        Step::Config => config_file::execute(ctx, layout),
        Step::Dependencies => dependencies::execute(ctx, layout, options.skip_deps),
        Step::ServiceProbe => service::execute(ctx),
        Step::SmokeTest => smoke_test::execute(ctx, layout),
        Step::Daemon => daemon::execute(ctx, layout, options.start),
    }
}
