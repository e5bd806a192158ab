//! Shared output directory resolution.
//!
//! Resolved once per invocation: explicit flag, then `$BUILD_DIR`, then
//! `<root>/build`. Every sub-build sees the same value.

use std::path::{Path, PathBuf};

/// Environment variable carrying the output directory, both as an inbound
/// override and as the export every sub-build receives.
pub const BUILD_DIR_ENV: &str = "BUILD_DIR";

/// Resolve the output directory against the tree root. A relative override
/// is interpreted relative to the root, not the process working directory.
/// An empty override counts as unset: resolving it would yield the root
/// itself, which clean would then remove.
pub fn resolve(root: &Path, flag: Option<&Path>, env: Option<&Path>) -> PathBuf {
    let raw = flag
        .filter(|p| !p.as_os_str().is_empty())
        .or_else(|| env.filter(|p| !p.as_os_str().is_empty()))
        .unwrap_or_else(|| Path::new("build"));
    if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        root.join(raw)
    }
}
