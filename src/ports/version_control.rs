use std::path::Path;

use crate::domain::AppError;

/// Version-control tool used to fetch and refresh the source tree.
pub trait VersionControl {
    /// Whether the tool can be invoked on this host.
    fn is_available(&self) -> bool;

    /// Clone `remote` into `target`.
    fn clone_repo(&self, remote: &str, target: &Path) -> Result<(), AppError>;

    /// Pull the latest changes into an existing checkout.
    fn pull(&self, repo: &Path) -> Result<(), AppError>;
}
