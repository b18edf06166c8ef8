//! Source acquisition: update in place, clone, or fall back to the zip snapshot.

use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::adapters::zip_archive;
use crate::app::InstallerContext;
use crate::domain::{AppError, InstallLayout, StepOutcome};

pub fn execute(ctx: &InstallerContext, layout: &InstallLayout) -> StepOutcome {
    ctx.reporter().info(&format!("Installing to: {}", layout.root().display()));

    if layout.is_installed() {
        return update_existing(ctx, layout);
    }
    fresh_install(ctx, layout)
}

fn update_existing(ctx: &InstallerContext, layout: &InstallLayout) -> StepOutcome {
    let reporter = ctx.reporter();
    reporter.ok("Already installed, updating...");

    if !layout.has_vcs_metadata() {
        reporter.info("No version-control metadata found, keeping the existing copy");
        return StepOutcome::Success;
    }
    if !ctx.vcs().is_available() {
        reporter.info("Git not found, keeping the existing copy");
        return StepOutcome::Success;
    }

    match ctx.vcs().pull(layout.root()) {
        Ok(()) => {
            reporter.ok("Repository updated");
            StepOutcome::Success
        }
        Err(err) => StepOutcome::warning(format!("Update failed, using existing copy: {}", err)),
    }
}

fn fresh_install(ctx: &InstallerContext, layout: &InstallLayout) -> StepOutcome {
    let reporter = ctx.reporter();
    // Anything already in a marker-less target belongs to the user.
    let occupied = has_entries(layout.root());

    if let Err(err) = fs::create_dir_all(layout.parent()) {
        return StepOutcome::fatal(format!(
            "Cannot create {}: {}",
            layout.parent().display(),
            err
        ));
    }

    if ctx.vcs().is_available() {
        let remote = &ctx.config().source.repo_url;
        reporter.progress(&format!("Cloning {}", remote));
        match ctx.vcs().clone_repo(remote, layout.root()) {
            Ok(()) => {
                reporter.ok("Repository cloned");
                return StepOutcome::Success;
            }
            Err(err) => {
                reporter.error(&format!("Git clone failed: {}", err));
                reporter.info("Falling back to zip download...");
            }
        }
    } else {
        reporter.info("Git not found, using zip download...");
    }

    match install_from_archive(ctx, layout, occupied) {
        Ok(()) => {
            reporter.ok("Downloaded and extracted");
            StepOutcome::Success
        }
        Err(err) => StepOutcome::fatal(format!("Download failed: {}", err)),
    }
}

fn install_from_archive(
    ctx: &InstallerContext,
    layout: &InstallLayout,
    occupied: bool,
) -> Result<(), AppError> {
    if occupied {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists and is not empty", layout.root().display()),
        )));
    }

    let source = &ctx.config().source;
    ctx.reporter().progress(&format!("Downloading {}", source.archive_url));
    let bytes = ctx.archives().fetch(&source.archive_url)?;

    if let Some(expected) = &source.archive_sha256 {
        verify_digest(&bytes, expected)?;
    }

    ctx.reporter().progress("Extracting...");
    let staging = layout.staging_dir();
    if staging.exists() {
        fs::remove_dir_all(&staging)?;
    }
    fs::create_dir_all(&staging)?;

    let result = move_into_place(&bytes, &staging, layout.root());
    if staging.exists() {
        let _ = fs::remove_dir_all(&staging);
    }
    result
}

fn move_into_place(bytes: &[u8], staging: &Path, target: &Path) -> Result<(), AppError> {
    let extracted = zip_archive::unpack(bytes, staging)?;

    if target.exists() {
        tracing::debug!(target = %target.display(), "removing partial install");
        fs::remove_dir_all(target)?;
    }
    tracing::debug!(from = %extracted.display(), to = %target.display(), "renaming extracted tree");
    fs::rename(&extracted, target)?;
    Ok(())
}

fn has_entries(dir: &Path) -> bool {
    fs::read_dir(dir).map(|mut entries| entries.next().is_some()).unwrap_or(false)
}

fn verify_digest(bytes: &[u8], expected: &str) -> Result<(), AppError> {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let actual: String = hasher.finalize().iter().map(|byte| format!("{:02x}", byte)).collect();

    if !actual.eq_ignore_ascii_case(expected) {
        return Err(AppError::ChecksumMismatch { expected: expected.to_string(), actual });
    }
    Ok(())
}
