//! Pipeline steps. Each converts its own failures into a `StepOutcome`.

pub mod acquire;
pub mod config_file;
pub mod daemon;
pub mod dependencies;
pub mod directories;
pub mod environment;
pub mod service;
pub mod summary;
