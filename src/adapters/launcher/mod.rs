//! Detached background launch, one implementation per host platform.

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
pub use unix::DetachedSessionLauncher;
#[cfg(windows)]
pub use windows::ConsoleWindowLauncher;

use crate::ports::ProcessLauncher;

/// Pick the launcher for the host platform.
pub fn platform_launcher(interpreter: &str) -> Box<dyn ProcessLauncher> {
    #[cfg(windows)]
    {
        Box::new(ConsoleWindowLauncher::new(interpreter))
    }
    #[cfg(unix)]
    {
        Box::new(DetachedSessionLauncher::new(interpreter))
    }
}
