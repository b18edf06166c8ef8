use crate::app::InstallerContext;
use crate::domain::{InstallLayout, StepOutcome};

/// Install the dependency manifest with the host package manager.
pub fn execute(ctx: &InstallerContext, layout: &InstallLayout, skip: bool) -> StepOutcome {
    if skip {
        return StepOutcome::Skipped("dependency installation disabled".to_string());
    }

    let manifest = layout.manifest();
    if !manifest.is_file() {
        return StepOutcome::warning(format!("No {} found", layout.names().manifest_file));
    }

    ctx.reporter().progress("Installing dependencies...");
    match ctx.runtime().install_manifest(&manifest) {
        Ok(()) => {
            ctx.reporter().ok("Dependencies installed");
            StepOutcome::Success
        }
        Err(err) => StepOutcome::warning(format!("Dependency installation failed: {}", err)),
    }
}
