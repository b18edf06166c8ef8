use crate::app::InstallerContext;
use crate::domain::{InstallLayout, StepOutcome};

/// Launch the daemon script in the background when requested.
pub fn execute(ctx: &InstallerContext, layout: &InstallLayout, start: bool) -> StepOutcome {
    if !start {
        return StepOutcome::Skipped("daemon start not requested".to_string());
    }

    ctx.reporter().raw("");
    ctx.reporter().progress("Starting daemon...");

    let script = layout.daemon_script();
    if !script.is_file() {
        let message = format!("{} not found", layout.names().daemon_script);
        ctx.reporter().error(&message);
        return StepOutcome::Skipped(message);
    }

    match ctx.launcher().launch_detached(&script, layout.root()) {
        Ok(()) => {
            ctx.reporter().ok("Daemon started");
            StepOutcome::Success
        }
        Err(err) => StepOutcome::warning(format!("Daemon launch failed: {}", err)),
    }
}
