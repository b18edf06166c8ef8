//! Concrete implementations of the ports.

pub mod archive_http;
pub mod console_reporter;
pub mod git_command;
pub mod launcher;
pub mod python_runtime;
pub mod service_probe_http;
pub mod zip_archive;

pub use archive_http::HttpArchiveSource;
pub use console_reporter::ConsoleReporter;
pub use git_command::GitCommandAdapter;
pub use launcher::platform_launcher;
pub use python_runtime::PythonRuntime;
pub use service_probe_http::HttpServiceProbe;
