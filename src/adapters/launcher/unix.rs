use std::io;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::AppError;
use crate::ports::ProcessLauncher;

/// Runs the script in a new session with all standard streams closed.
#[derive(Debug, Clone)]
pub struct DetachedSessionLauncher {
    interpreter: String,
}

impl DetachedSessionLauncher {
    pub fn new<S: Into<String>>(interpreter: S) -> Self {
        Self { interpreter: interpreter.into() }
    }
}

impl ProcessLauncher for DetachedSessionLauncher {
    fn launch_detached(&self, script: &Path, cwd: &Path) -> Result<(), AppError> {
        let mut command = Command::new(&self.interpreter);
        command
            .arg(script)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        // SAFETY: setsid is async-signal-safe and only touches the forked child.
        unsafe {
            command.pre_exec(|| nix::unistd::setsid().map(|_| ()).map_err(io::Error::from));
        }
        let child = command.spawn().map_err(|e| AppError::ExternalToolError {
            tool: format!("daemon launch ({})", self.interpreter),
            error: e.to_string(),
        })?;

        tracing::debug!(pid = child.id(), script = %script.display(), "daemon detached");
        // Dropping the handle does not wait on or kill the child.
        drop(child);
        Ok(())
    }
}
