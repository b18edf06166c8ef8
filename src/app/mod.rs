pub mod cli;
mod context;
pub mod pipeline;
pub mod steps;

pub use context::{Collaborators, InstallerContext};
pub use pipeline::InstallOptions;
