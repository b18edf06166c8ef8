//! Host runtime version gate.

use crate::app::InstallerContext;
use crate::domain::{AppError, StepOutcome};

pub fn execute(ctx: &InstallerContext) -> StepOutcome {
    let minimum = ctx.config().runtime.min_version;

    match ctx.runtime().version() {
        Ok(version) if version.satisfies(&minimum) => {
            ctx.reporter().ok(&format!("Python {}", version));
            StepOutcome::Success
        }
        Ok(version) => StepOutcome::fatal(
            AppError::UnsupportedRuntime {
                required: minimum.to_string(),
                found: format!("{}.{}", version.major, version.minor),
            }
            .to_string(),
        ),
        Err(err) => StepOutcome::fatal(format!(
            "Python {}+ required, but the interpreter could not be checked: {}",
            minimum, err
        )),
    }
}
