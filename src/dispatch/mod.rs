//! Subdirectory build dispatch.
//!
//! Structure:
//! - `discover` - subproject enumeration
//! - `outdir` - shared output directory resolution
//! - `delegate` - per-subproject make invocation
//!
//! Single-pass, stateless fan-out: goals run left to right, subprojects in
//! sorted order, failing fast on the first unsuccessful sub-build. The
//! `clean` goal removes the output directory after every subproject clean
//! has succeeded.

pub mod delegate;
pub mod discover;
pub mod outdir;

use anyhow::{Context, Result};
use serde::Serialize;
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

pub const DEFAULT_GOAL: &str = "all";
pub const CLEAN_GOAL: &str = "clean";

/// Entry point for a parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    let root = match &cli.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("Failed to determine current directory")?,
    };

    let env_override = std::env::var_os(outdir::BUILD_DIR_ENV).map(PathBuf::from);
    let build_dir = outdir::resolve(&root, cli.build_dir.as_deref(), env_override.as_deref());
    let subprojects = discover::subprojects(&root, &build_dir)?;

    if cli.list {
        return list(&build_dir, &subprojects, cli.json);
    }

    let goals = normalize_goals(&cli.goals);
    let make = delegate::make_program();
    dispatch(&make, &root, &build_dir, &subprojects, &goals)
}

/// No goals means "all", as with plain `make`.
pub fn normalize_goals(goals: &[String]) -> Vec<String> {
    if goals.is_empty() {
        vec![DEFAULT_GOAL.to_string()]
    } else {
        goals.to_vec()
    }
}

/// Fan one goal at a time out to every subproject, in order.
pub fn dispatch(
    make: &OsStr,
    root: &Path,
    build_dir: &Path,
    subprojects: &[String],
    goals: &[String],
) -> Result<()> {
    for goal in goals {
        println!("=== {goal}: {} subprojects ===", subprojects.len());
        for name in subprojects {
            println!("  {goal}: {name}");
            delegate::run_goal(make, &root.join(name), goal, build_dir)?;
        }
        if goal == CLEAN_GOAL {
            remove_build_dir(build_dir)?;
        }
    }
    Ok(())
}

/// Remove the shared output directory. Already absent is fine; any other
/// failure is surfaced rather than ignored.
pub fn remove_build_dir(build_dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(build_dir) {
        Ok(()) => {
            println!("  Removed {}", build_dir.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to remove {}", build_dir.display()))
        }
    }
}

#[derive(Serialize)]
struct ListOutput<'a> {
    build_dir: &'a Path,
    subprojects: &'a [String],
}

fn list(build_dir: &Path, subprojects: &[String], json: bool) -> Result<()> {
    if json {
        let out = ListOutput {
            build_dir,
            subprojects,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Build dir: {}", build_dir.display());
    println!("Subprojects:");
    for name in subprojects {
        println!("  {name}");
    }
    Ok(())
}
