pub mod config;
pub mod error;
pub mod layout;
pub mod outcome;
pub mod version;

pub use config::{InstallerConfig, LayoutConfig, RuntimeConfig, ServiceConfig, SourceConfig};
pub use error::AppError;
pub use layout::InstallLayout;
pub use outcome::{InstallReport, Step, StepOutcome};
pub use version::RuntimeVersion;
