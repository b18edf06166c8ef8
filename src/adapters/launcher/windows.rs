use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::ProcessLauncher;

/// Opens a new console window that keeps running the script.
#[derive(Debug, Clone)]
pub struct ConsoleWindowLauncher {
    interpreter: String,
}

impl ConsoleWindowLauncher {
    pub fn new<S: Into<String>>(interpreter: S) -> Self {
        Self { interpreter: interpreter.into() }
    }
}

impl ProcessLauncher for ConsoleWindowLauncher {
    fn launch_detached(&self, script: &Path, cwd: &Path) -> Result<(), AppError> {
        let child = Command::new("cmd")
            .args(["/C", "start", "cmd", "/k", self.interpreter.as_str()])
            .arg(script)
            .current_dir(cwd)
            .spawn()
            .map_err(|e| AppError::ExternalToolError {
                tool: "daemon launch (cmd start)".to_string(),
                error: e.to_string(),
            })?;

        tracing::debug!(pid = child.id(), script = %script.display(), "daemon window opened");
        drop(child);
        Ok(())
    }
}
