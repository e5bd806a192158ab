//! Sub-build invocation.
//!
//! Each subproject answers the forwarded goal through its own Makefile.
//! `$MAKE` overrides the delegated program, as with recursive make.

use anyhow::{bail, Context, Result};
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

use crate::dispatch::outdir::BUILD_DIR_ENV;

/// The program used for sub-builds: `$MAKE` if set, else `make`.
pub fn make_program() -> OsString {
    std::env::var_os("MAKE").unwrap_or_else(|| OsString::from("make"))
}

/// Run one goal in one subproject, exporting the shared output directory.
/// Waits for completion; a non-success exit status is an error.
pub fn run_goal(make: &OsStr, dir: &Path, goal: &str, build_dir: &Path) -> Result<()> {
    let status = Command::new(make)
        .arg(goal)
        .current_dir(dir)
        .env(BUILD_DIR_ENV, build_dir)
        .status()
        .with_context(|| {
            format!(
                "Failed to run {} in {}",
                make.to_string_lossy(),
                dir.display()
            )
        })?;

    if !status.success() {
        bail!(
            "{} {} failed in {} ({})",
            make.to_string_lossy(),
            goal,
            dir.display(),
            status
        );
    }
    Ok(())
}
