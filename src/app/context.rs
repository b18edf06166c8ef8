use std::time::Duration;

use crate::adapters::{
    ConsoleReporter, GitCommandAdapter, HttpArchiveSource, HttpServiceProbe, PythonRuntime,
    platform_launcher,
};
use crate::domain::{AppError, InstallerConfig};
use crate::ports::{
    ArchiveSource, ProcessLauncher, Reporter, RuntimeHost, ServiceProbe, VersionControl,
};

/// External collaborators the pipeline talks to.
pub struct Collaborators {
    pub vcs: Box<dyn VersionControl>,
    pub archives: Box<dyn ArchiveSource>,
    pub runtime: Box<dyn RuntimeHost>,
    pub probe: Box<dyn ServiceProbe>,
    pub launcher: Box<dyn ProcessLauncher>,
    pub reporter: Box<dyn Reporter>,
}

impl Collaborators {
    /// Real adapters for this host, configured from `config`.
    pub fn system(config: &InstallerConfig) -> Result<Self, AppError> {
        Ok(Self {
            vcs: Box::new(GitCommandAdapter::new(config.source.git_program.clone())),
            archives: Box::new(HttpArchiveSource::new(Duration::from_secs(
                config.source.download_timeout_secs,
            ))?),
            runtime: Box::new(PythonRuntime::new(config.runtime.interpreter.clone())),
            probe: Box::new(HttpServiceProbe::new(Duration::from_secs(
                config.service.timeout_secs,
            ))?),
            launcher: platform_launcher(&config.runtime.interpreter),
            reporter: Box::new(ConsoleReporter),
        })
    }
}

/// Application context holding configuration and collaborators for one install.
pub struct InstallerContext {
    config: InstallerConfig,
    collaborators: Collaborators,
}

impl InstallerContext {
    pub fn new(config: InstallerConfig, collaborators: Collaborators) -> Self {
        Self { config, collaborators }
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    pub fn vcs(&self) -> &dyn VersionControl {
        self.collaborators.vcs.as_ref()
    }

    pub fn archives(&self) -> &dyn ArchiveSource {
        self.collaborators.archives.as_ref()
    }

    pub fn runtime(&self) -> &dyn RuntimeHost {
        self.collaborators.runtime.as_ref()
    }

    pub fn probe(&self) -> &dyn ServiceProbe {
        self.collaborators.probe.as_ref()
    }

    pub fn launcher(&self) -> &dyn ProcessLauncher {
        self.collaborators.launcher.as_ref()
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.collaborators.reporter.as_ref()
    }
}
