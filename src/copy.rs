//! Copy execution: applies one planned operation against the destination.
//!
//! The runtime dispatches steps one at a time (see `app`); this module is
//! the synchronous filesystem work of a single step.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::ops::{Op, OpKind};
use crate::Result;

/// Pacing delay before each step so per-item progress is visible.
/// UI pacing only, not a correctness requirement.
pub const STEP_DELAY: Duration = Duration::from_millis(200);

/// Apply a single operation, relative to `source_root` and `dest_root`.
///
/// `CreateDir` creates the destination directory including any missing
/// intermediates. `CopyFile` ensures the destination's parent exists and
/// copies the file byte-for-byte, creating or truncating the target.
pub fn apply(op: &Op, source_root: &Path, dest_root: &Path) -> Result<()> {
    let dest = dest_root.join(&op.rel_path);
    match op.kind {
        OpKind::CreateDir => {
            fs::create_dir_all(&dest)?;
        }
        OpKind::CopyFile => {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(source_root.join(&op.rel_path), &dest)?;
        }
    }
    Ok(())
}
