use std::path::PathBuf;

use tempfile::TempDir;

use crate::app::{Collaborators, InstallOptions, InstallerContext};
use crate::domain::{InstallLayout, InstallerConfig};

use super::fakes::{
    FakeArchiveSource, FakeLauncher, FakeRuntime, FakeServiceProbe, FakeVersionControl,
    RecordingReporter,
};

/// Temporary install root plus shared handles to every fake.
pub struct TestHarness {
    root: TempDir,
    pub config: InstallerConfig,
    pub vcs: FakeVersionControl,
    pub archives: FakeArchiveSource,
    pub runtime: FakeRuntime,
    pub probe: FakeServiceProbe,
    pub launcher: FakeLauncher,
    pub reporter: RecordingReporter,
}

impl TestHarness {
    pub fn new() -> Self {
        let mut config = InstallerConfig::default();
        config.runtime.interpreter = "python3".to_string();

        Self {
            root: TempDir::new().expect("Failed to create temp directory for tests"),
            config,
            vcs: FakeVersionControl::default(),
            archives: FakeArchiveSource::default(),
            runtime: FakeRuntime::default(),
            probe: FakeServiceProbe::default(),
            launcher: FakeLauncher::default(),
            reporter: RecordingReporter::default(),
        }
    }

    pub fn context(&self) -> InstallerContext {
        InstallerContext::new(
            self.config.clone(),
            Collaborators {
                vcs: Box::new(self.vcs.clone()),
                archives: Box::new(self.archives.clone()),
                runtime: Box::new(self.runtime.clone()),
                probe: Box::new(self.probe.clone()),
                launcher: Box::new(self.launcher.clone()),
                reporter: Box::new(self.reporter.clone()),
            },
        )
    }

    pub fn target(&self) -> PathBuf {
        self.root.path().join("claude-agent")
    }

    pub fn layout(&self) -> InstallLayout {
        InstallLayout::resolve(&self.target(), &self.config.layout).unwrap()
    }

    pub fn options(&self) -> InstallOptions {
        InstallOptions { dir: self.target(), start: false, skip_deps: false }
    }
}
