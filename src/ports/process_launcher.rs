use std::path::Path;

use crate::domain::AppError;

/// Start a script as a background process that outlives the installer.
pub trait ProcessLauncher {
    /// Spawn `script` from `cwd` without waiting for it.
    fn launch_detached(&self, script: &Path, cwd: &Path) -> Result<(), AppError>;
}
