//! Start banner and completion summary.

use crate::app::InstallerContext;
use crate::domain::{InstallLayout, InstallReport};

const INNER_WIDTH: usize = 55;

pub fn print_banner(ctx: &InstallerContext) {
    ctx.reporter().raw(
        r#"
    ╔═══════════════════════════════════════╗
    ║       CLAUDE BOOTSTRAP INSTALLER      ║
    ║   Persistent AI with Voice & Vision   ║
    ╚═══════════════════════════════════════╝
"#,
    );
}

pub fn print_completion(ctx: &InstallerContext, layout: &InstallLayout, report: &InstallReport) {
    ctx.reporter().raw(&render_completion(ctx, layout, report));
}

fn render_completion(
    ctx: &InstallerContext,
    layout: &InstallLayout,
    report: &InstallReport,
) -> String {
    let interpreter = &ctx.config().runtime.interpreter;
    let names = layout.names();

    let mut body = vec![
        String::new(),
        "To use Claude:".to_string(),
        format!("  cd {}", layout.root().display()),
        format!("  {:<29}# Test capabilities", format!("{} {}", interpreter, names.entry_script)),
        format!("  {:<29}# Start daemon", format!("{} {}", interpreter, names.daemon_script)),
        String::new(),
        format!("Edit {} to customize voice, models, etc.", names.config_file),
        "Edit vault/About Me.md to define your Claude.".to_string(),
        String::new(),
    ];

    let warnings = report.warnings();
    if !warnings.is_empty() {
        body.push(format!("Completed with {} warning(s):", warnings.len()));
        for (step, message) in warnings {
            body.push(format!("  - {}: {}", step, message));
        }
        body.push(String::new());
    }

    let rule = "═".repeat(INNER_WIDTH);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&format!("╔{}╗\n", rule));
    out.push_str(&format!("║{:^width$}║\n", "INSTALLATION COMPLETE", width = INNER_WIDTH));
    out.push_str(&format!("╠{}╣\n", rule));
    for line in body {
        out.push_str(&format!("║  {:<width$}║\n", line, width = INNER_WIDTH - 2));
    }
    out.push_str(&format!("╚{}╝", rule));
    out
}
