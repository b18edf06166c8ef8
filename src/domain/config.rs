//! Installer configuration.
//!
//! Every constant the pipeline relies on lives here so a TOML override file can
//! point an install at local fixtures instead of the public endpoints.

use std::fs;
use std::path::{Component, Path};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, RuntimeVersion};

const REPO_URL: &str = "https://github.com/wetwi/claude-agent";
const ARCHIVE_URL: &str = "https://github.com/wetwi/claude-agent/archive/refs/heads/main.zip";
const DEFAULT_DIR: &str = "claude-agent";

/// Process-wide installer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    /// Installation directory used when `--dir` is not given.
    #[serde(default = "default_dir")]
    pub default_dir: String,
    /// Where the source tree comes from.
    #[serde(default)]
    pub source: SourceConfig,
    /// Files and folders inside the target directory.
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Host interpreter used for dependency install, smoke test and daemon.
    #[serde(default)]
    pub runtime: RuntimeConfig,
    /// Optional local service probed after install.
    #[serde(default)]
    pub service: ServiceConfig,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            default_dir: default_dir(),
            source: SourceConfig::default(),
            layout: LayoutConfig::default(),
            runtime: RuntimeConfig::default(),
            service: ServiceConfig::default(),
        }
    }
}

impl InstallerConfig {
    /// Load an override file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|err| {
            AppError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                err
            ))
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from string content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: InstallerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_dir.trim().is_empty() {
            return Err(AppError::config_error("default_dir must not be empty"));
        }
        self.source.validate()?;
        self.layout.validate()?;
        self.runtime.validate()?;
        self.service.validate()?;
        Ok(())
    }
}

/// Source acquisition settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Clone remote. May also be a local path for offline installs.
    #[serde(default = "default_repo_url")]
    pub repo_url: String,
    /// Zip snapshot used when cloning is unavailable or fails.
    #[serde(default = "default_archive_url")]
    pub archive_url: Url,
    /// Optional SHA-256 pin for the archive (lowercase hex).
    #[serde(default)]
    pub archive_sha256: Option<String>,
    /// Version-control program.
    #[serde(default = "default_git_program")]
    pub git_program: String,
    /// Archive download timeout in seconds.
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            repo_url: default_repo_url(),
            archive_url: default_archive_url(),
            archive_sha256: None,
            git_program: default_git_program(),
            download_timeout_secs: default_download_timeout(),
        }
    }
}

impl SourceConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.repo_url.trim().is_empty() {
            return Err(AppError::config_error("source.repo_url must not be empty"));
        }
        if self.git_program.trim().is_empty() {
            return Err(AppError::config_error("source.git_program must not be empty"));
        }
        if self.download_timeout_secs == 0 {
            return Err(AppError::config_error("source.download_timeout_secs must be > 0"));
        }
        if let Some(digest) = &self.archive_sha256 {
            if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(AppError::config_error(
                    "source.archive_sha256 must be 64 hexadecimal characters",
                ));
            }
        }
        Ok(())
    }
}

/// Layout of an installed tree, relative to the target directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// File whose presence marks an existing install.
    #[serde(default = "default_marker_file")]
    pub marker_file: String,
    /// Version-control metadata folder.
    #[serde(default = "default_vcs_dir")]
    pub vcs_dir: String,
    #[serde(default = "default_config_file")]
    pub config_file: String,
    #[serde(default = "default_config_template")]
    pub config_template: String,
    /// Dependency manifest handed to the package manager.
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,
    /// Script executed by the smoke test.
    #[serde(default = "default_entry_script")]
    pub entry_script: String,
    /// Script launched in the background by `--start`.
    #[serde(default = "default_daemon_script")]
    pub daemon_script: String,
    #[serde(default = "default_required_dirs")]
    pub required_dirs: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            marker_file: default_marker_file(),
            vcs_dir: default_vcs_dir(),
            config_file: default_config_file(),
            config_template: default_config_template(),
            manifest_file: default_manifest_file(),
            entry_script: default_entry_script(),
            daemon_script: default_daemon_script(),
            required_dirs: default_required_dirs(),
        }
    }
}

impl LayoutConfig {
    fn validate(&self) -> Result<(), AppError> {
        let files = [
            ("layout.marker_file", &self.marker_file),
            ("layout.vcs_dir", &self.vcs_dir),
            ("layout.config_file", &self.config_file),
            ("layout.config_template", &self.config_template),
            ("layout.manifest_file", &self.manifest_file),
            ("layout.entry_script", &self.entry_script),
            ("layout.daemon_script", &self.daemon_script),
        ];
        for (key, value) in files {
            validate_relative(key, value)?;
        }
        for dir in &self.required_dirs {
            validate_relative("layout.required_dirs", dir)?;
        }
        Ok(())
    }
}

/// Host runtime settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Interpreter program name or path.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    /// Minimum supported `major.minor`.
    #[serde(default = "default_min_version")]
    pub min_version: RuntimeVersion,
    /// Output substring that marks a passing smoke test.
    #[serde(default = "default_smoke_marker")]
    pub smoke_marker: String,
    #[serde(default = "default_smoke_timeout")]
    pub smoke_timeout_secs: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            min_version: default_min_version(),
            smoke_marker: default_smoke_marker(),
            smoke_timeout_secs: default_smoke_timeout(),
        }
    }
}

impl RuntimeConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.interpreter.trim().is_empty() {
            return Err(AppError::config_error("runtime.interpreter must not be empty"));
        }
        if self.smoke_timeout_secs == 0 {
            return Err(AppError::config_error("runtime.smoke_timeout_secs must be > 0"));
        }
        Ok(())
    }
}

/// Optional local service detected after install.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,
    /// Health endpoint expected to answer `200` to a GET.
    #[serde(default = "default_service_url")]
    pub url: Url,
    /// Where to get the service when it is missing.
    #[serde(default = "default_install_hint")]
    pub install_hint: String,
    #[serde(default = "default_probe_timeout")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            url: default_service_url(),
            install_hint: default_install_hint(),
            timeout_secs: default_probe_timeout(),
        }
    }
}

impl ServiceConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("service.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

fn validate_relative(key: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{} must not be empty", key)));
    }
    let path = Path::new(value);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(AppError::config_error(format!(
            "{} must be a relative path inside the install directory: '{}'",
            key, value
        )));
    }
    Ok(())
}

fn default_dir() -> String {
    DEFAULT_DIR.to_string()
}

fn default_repo_url() -> String {
    REPO_URL.to_string()
}

fn default_archive_url() -> Url {
    Url::parse(ARCHIVE_URL).expect("Default archive URL must be valid")
}

fn default_git_program() -> String {
    "git".to_string()
}

fn default_download_timeout() -> u64 {
    30
}

fn default_marker_file() -> String {
    "me.py".to_string()
}

fn default_vcs_dir() -> String {
    ".git".to_string()
}

fn default_config_file() -> String {
    "config.py".to_string()
}

fn default_config_template() -> String {
    "config.example.py".to_string()
}

fn default_manifest_file() -> String {
    "requirements.txt".to_string()
}

fn default_entry_script() -> String {
    "me.py".to_string()
}

fn default_daemon_script() -> String {
    "daemon.py".to_string()
}

fn default_required_dirs() -> Vec<String> {
    ["vault", "vault/Daemon Thoughts", "outbox", "memory", "snapshots"]
        .iter()
        .map(|dir| dir.to_string())
        .collect()
}

fn default_interpreter() -> String {
    if cfg!(windows) { "python".to_string() } else { "python3".to_string() }
}

fn default_min_version() -> RuntimeVersion {
    RuntimeVersion::new(3, 10)
}

fn default_smoke_marker() -> String {
    "SYSTEM TEST".to_string()
}

fn default_smoke_timeout() -> u64 {
    10
}

fn default_service_name() -> String {
    "Ollama".to_string()
}

fn default_service_url() -> Url {
    Url::parse("http://localhost:11434/api/tags").expect("Default service URL must be valid")
}

fn default_install_hint() -> String {
    "https://ollama.ai".to_string()
}

fn default_probe_timeout() -> u64 {
    2
}
