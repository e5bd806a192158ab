//! # umake
//!
//! Recursive build dispatcher for the userspace tree.
//!
//! ## Usage
//!
//! ```bash
//! umake                  # Build every subproject (goal "all")
//! umake clean            # Clean every subproject, then remove the build dir
//! umake all clean        # Goals run left to right
//! umake --list           # Show the build dir and discovered subprojects
//! ```
//!
//! Every immediate subdirectory is expected to carry its own Makefile that
//! answers the same goal names. The shared output directory (`BUILD_DIR`,
//! default `<tree>/build`) is exported to every sub-build and is never
//! dispatched into.

use anyhow::Result;
use clap::Parser;

mod cli;
mod dispatch;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    dispatch::run(&cli)
}
