mod archive_source;
mod process_launcher;
mod reporter;
mod runtime_host;
mod service_probe;
mod version_control;

pub use archive_source::ArchiveSource;
pub use process_launcher::ProcessLauncher;
pub use reporter::{Reporter, Status};
pub use runtime_host::{RuntimeHost, ScriptRun};
pub use service_probe::{ServiceProbe, ServiceStatus};
pub use version_control::VersionControl;
