//! Host Python interpreter and pip.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::{AppError, RuntimeVersion};
use crate::ports::{RuntimeHost, ScriptRun};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// How long to wait for output pipes to close once the script is gone.
const OUTPUT_GRACE: Duration = Duration::from_millis(500);

/// `RuntimeHost` that shells out to a Python interpreter.
#[derive(Debug, Clone)]
pub struct PythonRuntime {
    interpreter: String,
}

impl PythonRuntime {
    pub fn new<S: Into<String>>(interpreter: S) -> Self {
        Self { interpreter: interpreter.into() }
    }

    fn tool_error(&self, tool: &str, error: String) -> AppError {
        AppError::ExternalToolError { tool: format!("{} ({})", tool, self.interpreter), error }
    }
}

impl RuntimeHost for PythonRuntime {
    fn version(&self) -> Result<RuntimeVersion, AppError> {
        tracing::debug!(interpreter = %self.interpreter, "querying runtime version");
        let output = Command::new(&self.interpreter)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.tool_error("runtime", e.to_string()))?;

        if !output.status.success() {
            return Err(self.tool_error(
                "runtime",
                format!("--version exited with {}", output.status),
            ));
        }

        // Old interpreters print the banner on stderr.
        let banner = format!(
            "{} {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RuntimeVersion::from_version_output(&banner)
    }

    fn install_manifest(&self, manifest: &Path) -> Result<(), AppError> {
        tracing::debug!(manifest = %manifest.display(), "installing dependencies");
        let status = Command::new(&self.interpreter)
            .args(["-m", "pip", "install", "-r"])
            .arg(manifest)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| self.tool_error("pip install", e.to_string()))?;

        if !status.success() {
            return Err(self.tool_error("pip install", format!("exited with {}", status)));
        }
        Ok(())
    }

    fn run_script(
        &self,
        script: &Path,
        cwd: &Path,
        timeout: Duration,
    ) -> Result<ScriptRun, AppError> {
        tracing::debug!(script = %script.display(), ?timeout, "running script");
        let mut command = Command::new(&self.interpreter);
        command
            .arg(script)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        // Helpers started by the script share its group and die with it.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }
        let mut child = command.spawn().map_err(|e| self.tool_error("script", e.to_string()))?;

        let deadline = Instant::now() + timeout;
        let stdout = drain(child.stdout.take());
        let stderr = drain(child.stderr.take());

        let (exit_code, timed_out) = wait_until(&mut child, deadline)?;

        Ok(ScriptRun {
            exit_code,
            stdout: collect(child.id(), &stdout, deadline),
            stderr: collect(child.id(), &stderr, deadline),
            timed_out,
        })
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> mpsc::Receiver<String> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let mut buffer = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buffer);
        }
        let _ = sender.send(String::from_utf8_lossy(&buffer).into_owned());
    });
    receiver
}

/// Waits for a drained stream, never past `deadline` plus a short grace.
///
/// A stream still open at that point is held by a leftover helper process; the
/// group is killed and whatever the reader has by then is dropped with its thread.
fn collect(pid: u32, output: &mpsc::Receiver<String>, deadline: Instant) -> String {
    let budget = deadline.saturating_duration_since(Instant::now()) + OUTPUT_GRACE;
    if let Ok(text) = output.recv_timeout(budget) {
        return text;
    }
    tracing::debug!(pid, "output still held open, killing process group");
    kill_group(pid);
    output.recv_timeout(OUTPUT_GRACE).unwrap_or_default()
}

fn wait_until(child: &mut Child, deadline: Instant) -> Result<(Option<i32>, bool), AppError> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((status.code(), false));
        }
        if Instant::now() >= deadline {
            tracing::debug!(pid = child.id(), "script timed out, killing");
            kill_group(child.id());
            let _ = child.kill();
            let status = child.wait()?;
            return Ok((status.code(), true));
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(unix)]
fn kill_group(pid: u32) {
    use nix::sys::signal::{Signal, killpg};
    use nix::unistd::Pid;

    if let Err(err) = killpg(Pid::from_raw(pid as i32), Signal::SIGKILL) {
        tracing::debug!(pid, %err, "process group already gone");
    }
}

#[cfg(not(unix))]
fn kill_group(_pid: u32) {}
