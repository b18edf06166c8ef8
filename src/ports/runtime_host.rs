use std::path::Path;
use std::time::Duration;

use crate::domain::{AppError, RuntimeVersion};

/// Captured result of running a script under the host runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptRun {
    /// `None` when the process was killed or terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    pub timed_out: bool,
}

impl ScriptRun {
    pub fn succeeded(&self) -> bool {
        !self.timed_out && self.exit_code == Some(0)
    }
}

/// Host interpreter and its package manager.
pub trait RuntimeHost {
    /// Report the interpreter version.
    fn version(&self) -> Result<RuntimeVersion, AppError>;

    /// Install every package listed in `manifest`.
    fn install_manifest(&self, manifest: &Path) -> Result<(), AppError>;

    /// Run `script` from `cwd`, killing it after `timeout`.
    fn run_script(
        &self,
        script: &Path,
        cwd: &Path,
        timeout: Duration,
    ) -> Result<ScriptRun, AppError>;
}
