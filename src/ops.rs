//! Operation planning: one walk of a template tree produces the ordered
//! list of directory-creation and file-copy steps for the copy pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;

/// Kind of scaffolding operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    CreateDir,
    CopyFile,
}

/// A single scaffolding operation, relative to the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Op {
    pub kind: OpKind,
    pub rel_path: PathBuf,
}

impl Op {
    /// Human-readable completion line for the status display.
    pub fn describe(&self) -> String {
        match self.kind {
            OpKind::CreateDir => format!("Created directory: {}", self.rel_path.display()),
            OpKind::CopyFile => format!("Copied file: {}", self.rel_path.display()),
        }
    }
}

/// Walk `source_root` once and build the ordered operation list.
///
/// Every entry except the root itself yields one operation: `CreateDir`
/// for directories, `CopyFile` for files. Traversal is depth-first in
/// directory-entry order as returned by the filesystem, so a directory's
/// `CreateDir` always precedes the operations for its contents. Any
/// traversal failure aborts planning entirely.
pub fn plan(source_root: &Path) -> Result<Vec<Op>> {
    let mut ops = Vec::new();
    walk(source_root, Path::new(""), &mut ops)?;
    Ok(ops)
}

fn walk(dir: &Path, rel: &Path, ops: &mut Vec<Op>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let rel_path = rel.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            ops.push(Op {
                kind: OpKind::CreateDir,
                rel_path: rel_path.clone(),
            });
            walk(&entry.path(), &rel_path, ops)?;
        } else {
            ops.push(Op {
                kind: OpKind::CopyFile,
                rel_path,
            });
        }
    }
    Ok(())
}
