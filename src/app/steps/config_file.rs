//! Config materialization from the shipped template.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::app::InstallerContext;
use crate::domain::{InstallLayout, StepOutcome};

pub fn execute(ctx: &InstallerContext, layout: &InstallLayout) -> StepOutcome {
    let names = layout.names();
    let config = layout.config_file();
    let template = layout.config_template();

    if config.exists() {
        ctx.reporter().ok("Config already exists");
        return StepOutcome::Success;
    }
    if !template.is_file() {
        return StepOutcome::warning(format!(
            "No {} found, create {} manually",
            names.config_template, names.config_file
        ));
    }

    match copy_without_overwrite(&template, &config) {
        Ok(()) => {
            ctx.reporter().ok(&format!("Config created from {}", names.config_template));
            StepOutcome::Success
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            ctx.reporter().ok("Config already exists");
            StepOutcome::Success
        }
        Err(err) => {
            StepOutcome::warning(format!("Could not create {}: {}", names.config_file, err))
        }
    }
}

/// Copy `from` to `to`, failing with `AlreadyExists` instead of replacing `to`.
fn copy_without_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    let mut source = File::open(from)?;
    let mut dest = OpenOptions::new().write(true).create_new(true).open(to)?;
    io::copy(&mut source, &mut dest)?;
    Ok(())
}
