//! Paths inside an install target.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, LayoutConfig};

/// Absolute target directory plus the well-known paths beneath it.
#[derive(Debug, Clone)]
pub struct InstallLayout {
    root: PathBuf,
    config: LayoutConfig,
}

impl InstallLayout {
    /// Resolve `dir` to absolute form. The directory does not need to exist.
    pub fn resolve(dir: &Path, config: &LayoutConfig) -> Result<Self, AppError> {
        let root = std::path::absolute(dir)?;
        Ok(Self { root, config: config.clone() })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn marker(&self) -> PathBuf {
        self.root.join(&self.config.marker_file)
    }

    pub fn vcs_dir(&self) -> PathBuf {
        self.root.join(&self.config.vcs_dir)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(&self.config.config_file)
    }

    pub fn config_template(&self) -> PathBuf {
        self.root.join(&self.config.config_template)
    }

    pub fn manifest(&self) -> PathBuf {
        self.root.join(&self.config.manifest_file)
    }

    pub fn entry_script(&self) -> PathBuf {
        self.root.join(&self.config.entry_script)
    }

    pub fn daemon_script(&self) -> PathBuf {
        self.root.join(&self.config.daemon_script)
    }

    pub fn required_dirs(&self) -> Vec<PathBuf> {
        self.config.required_dirs.iter().map(|dir| self.root.join(dir)).collect()
    }

    /// Relative names, for messages.
    pub fn names(&self) -> &LayoutConfig {
        &self.config
    }

    /// An install exists when the marker file is present.
    pub fn is_installed(&self) -> bool {
        self.marker().is_file()
    }

    pub fn has_vcs_metadata(&self) -> bool {
        self.vcs_dir().exists()
    }

    /// Sibling directory used to unpack an archive before it replaces the target.
    pub fn staging_dir(&self) -> PathBuf {
        let name = self
            .root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "install".to_string());
        self.parent().join(format!(".{}.partial", name))
    }

    pub fn parent(&self) -> PathBuf {
        self.root.parent().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone())
    }
}
