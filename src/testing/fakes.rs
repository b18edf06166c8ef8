use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use url::Url;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::domain::{AppError, RuntimeVersion};
use crate::ports::{
    ArchiveSource, ProcessLauncher, Reporter, RuntimeHost, ScriptRun, ServiceProbe, ServiceStatus,
    Status, VersionControl,
};

/// Build an in-memory zip. Names ending in `/` become directories.
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, SimpleFileOptions::default()).unwrap();
        } else {
            writer.start_file(*name, SimpleFileOptions::default()).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
    }
    writer.finish().unwrap().into_inner()
}

fn write_tree(root: &Path, files: &[(String, String)]) {
    for (name, content) in files {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

#[derive(Default)]
struct VcsState {
    unavailable: bool,
    clone_error: Option<String>,
    pull_error: Option<String>,
    files: Vec<(String, String)>,
    clones: Vec<PathBuf>,
    pulls: Vec<PathBuf>,
}

/// Clones by writing a fixed file set plus a `.git` folder.
#[derive(Clone, Default)]
pub struct FakeVersionControl {
    state: Arc<Mutex<VcsState>>,
}

impl FakeVersionControl {
    pub fn set_unavailable(&self) {
        self.state.lock().unwrap().unavailable = true;
    }

    pub fn fail_clone(&self, message: &str) {
        self.state.lock().unwrap().clone_error = Some(message.to_string());
    }

    pub fn fail_pull(&self, message: &str) {
        self.state.lock().unwrap().pull_error = Some(message.to_string());
    }

    pub fn set_files(&self, files: &[(&str, &str)]) {
        self.state.lock().unwrap().files =
            files.iter().map(|(n, c)| (n.to_string(), c.to_string())).collect();
    }

    pub fn clones(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().clones.clone()
    }

    pub fn pulls(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().pulls.clone()
    }
}

impl VersionControl for FakeVersionControl {
    fn is_available(&self) -> bool {
        !self.state.lock().unwrap().unavailable
    }

    fn clone_repo(&self, remote: &str, target: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.clones.push(target.to_path_buf());
        if let Some(details) = &state.clone_error {
            // Interrupted clones can leave a half-written checkout behind.
            fs::create_dir_all(target.join(".git"))?;
            return Err(AppError::GitError {
                command: format!("git clone {}", remote),
                details: details.clone(),
            });
        }
        fs::create_dir_all(target.join(".git"))?;
        write_tree(target, &state.files);
        Ok(())
    }

    fn pull(&self, repo: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.pulls.push(repo.to_path_buf());
        match &state.pull_error {
            Some(details) => {
                Err(AppError::GitError { command: "git pull".into(), details: details.clone() })
            }
            None => Ok(()),
        }
    }
}

#[derive(Default)]
struct ArchiveState {
    payload: Option<Vec<u8>>,
    fetches: Vec<Url>,
}

/// Serves a configured payload, or fails like an offline network.
#[derive(Clone, Default)]
pub struct FakeArchiveSource {
    state: Arc<Mutex<ArchiveState>>,
}

impl FakeArchiveSource {
    pub fn serve(&self, bytes: Vec<u8>) {
        self.state.lock().unwrap().payload = Some(bytes);
    }

    pub fn fetches(&self) -> Vec<Url> {
        self.state.lock().unwrap().fetches.clone()
    }
}

impl ArchiveSource for FakeArchiveSource {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        let mut state = self.state.lock().unwrap();
        state.fetches.push(url.clone());
        state.payload.clone().ok_or_else(|| AppError::DownloadError {
            url: url.to_string(),
            details: "network unreachable".to_string(),
        })
    }
}

struct RuntimeState {
    version: Option<RuntimeVersion>,
    install_error: Option<String>,
    script_run: Option<ScriptRun>,
    installs: Vec<PathBuf>,
    scripts: Vec<PathBuf>,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            version: RuntimeVersion::parse("3.12.1"),
            install_error: None,
            script_run: Some(ScriptRun {
                exit_code: Some(0),
                stdout: "SYSTEM TEST\n".to_string(),
                stderr: String::new(),
                timed_out: false,
            }),
            installs: Vec::new(),
            scripts: Vec::new(),
        }
    }
}

/// Python 3.12 whose scripts print the smoke marker and exit 0 by default.
#[derive(Clone, Default)]
pub struct FakeRuntime {
    state: Arc<Mutex<RuntimeState>>,
}

impl FakeRuntime {
    pub fn set_version(&self, version: &str) {
        self.state.lock().unwrap().version = RuntimeVersion::parse(version);
    }

    /// Interpreter cannot be executed at all.
    pub fn set_missing(&self) {
        self.state.lock().unwrap().version = None;
    }

    pub fn fail_install(&self, message: &str) {
        self.state.lock().unwrap().install_error = Some(message.to_string());
    }

    pub fn set_script_run(&self, run: ScriptRun) {
        self.state.lock().unwrap().script_run = Some(run);
    }

    pub fn installs(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().installs.clone()
    }

    pub fn scripts(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().scripts.clone()
    }
}

impl RuntimeHost for FakeRuntime {
    fn version(&self) -> Result<RuntimeVersion, AppError> {
        self.state.lock().unwrap().version.ok_or_else(|| AppError::ExternalToolError {
            tool: "runtime (python3)".into(),
            error: "No such file or directory".into(),
        })
    }

    fn install_manifest(&self, manifest: &Path) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        state.installs.push(manifest.to_path_buf());
        match &state.install_error {
            Some(error) => Err(AppError::ExternalToolError {
                tool: "pip install (python3)".into(),
                error: error.clone(),
            }),
            None => Ok(()),
        }
    }

    fn run_script(
        &self,
        script: &Path,
        _cwd: &Path,
        _timeout: Duration,
    ) -> Result<ScriptRun, AppError> {
        let mut state = self.state.lock().unwrap();
        state.scripts.push(script.to_path_buf());
        state.script_run.clone().ok_or_else(|| AppError::ExternalToolError {
            tool: "script (python3)".into(),
            error: "spawn failed".into(),
        })
    }
}

/// Returns a fixed status; defaults to "not detected".
#[derive(Clone)]
pub struct FakeServiceProbe {
    status: Arc<Mutex<ServiceStatus>>,
}

impl Default for FakeServiceProbe {
    fn default() -> Self {
        Self {
            status: Arc::new(Mutex::new(ServiceStatus::NotDetected(
                "connection refused".to_string(),
            ))),
        }
    }
}

impl FakeServiceProbe {
    pub fn set_status(&self, status: ServiceStatus) {
        *self.status.lock().unwrap() = status;
    }
}

impl ServiceProbe for FakeServiceProbe {
    fn probe(&self, _url: &Url) -> ServiceStatus {
        self.status.lock().unwrap().clone()
    }
}

#[derive(Clone, Default)]
pub struct FakeLauncher {
    launches: Arc<Mutex<Vec<PathBuf>>>,
}

impl FakeLauncher {
    pub fn launches(&self) -> Vec<PathBuf> {
        self.launches.lock().unwrap().clone()
    }
}

impl ProcessLauncher for FakeLauncher {
    fn launch_detached(&self, script: &Path, _cwd: &Path) -> Result<(), AppError> {
        self.launches.lock().unwrap().push(script.to_path_buf());
        Ok(())
    }
}

/// Captures every status line for assertions.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<(Status, String)>>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<(Status, String)> {
        self.lines.lock().unwrap().clone()
    }

    pub fn has(&self, status: Status, needle: &str) -> bool {
        self.lines().iter().any(|(s, line)| *s == status && line.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn line(&self, status: Status, message: &str) {
        self.lines.lock().unwrap().push((status, message.to_string()));
    }

    fn raw(&self, _text: &str) {}
}
