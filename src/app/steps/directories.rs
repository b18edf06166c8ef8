use std::fs;

use crate::app::InstallerContext;
use crate::domain::{InstallLayout, StepOutcome};

/// Create every required directory. Existing directories are left alone.
pub fn execute(ctx: &InstallerContext, layout: &InstallLayout) -> StepOutcome {
    for dir in layout.required_dirs() {
        if let Err(err) = fs::create_dir_all(&dir) {
            return StepOutcome::warning(format!("Could not create {}: {}", dir.display(), err));
        }
    }
    ctx.reporter().ok("Directories created");
    StepOutcome::Success
}
