use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

use crate::domain::AppError;
use crate::ports::VersionControl;

/// `VersionControl` backed by the git command-line tool.
#[derive(Debug, Clone)]
pub struct GitCommandAdapter {
    program: String,
}

impl GitCommandAdapter {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self { program: program.into() }
    }

    fn run(&self, args: &[&OsStr], cwd: Option<&Path>) -> Result<String, AppError> {
        let rendered = format!(
            "{} {}",
            self.program,
            args.iter().map(|arg| arg.to_string_lossy()).collect::<Vec<_>>().join(" ")
        );
        tracing::debug!(command = %rendered, cwd = ?cwd, "running git");

        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output: Output = command
            .output()
            .map_err(|e| AppError::GitError { command: rendered.clone(), details: e.to_string() })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError {
                command: rendered,
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl VersionControl for GitCommandAdapter {
    fn is_available(&self) -> bool {
        self.run(&[OsStr::new("--version")], None).is_ok()
    }

    fn clone_repo(&self, remote: &str, target: &Path) -> Result<(), AppError> {
        self.run(&[OsStr::new("clone"), OsStr::new(remote), target.as_os_str()], target.parent())?;
        Ok(())
    }

    fn pull(&self, repo: &Path) -> Result<(), AppError> {
        self.run(&[OsStr::new("pull")], Some(repo))?;
        Ok(())
    }
}
