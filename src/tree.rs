//! Directory tree preview for the template selection pane.
//!
//! Produces plain text; colors are applied by the view layer.

use std::fs;
use std::path::Path;

const MID_CONNECTOR: &str = "├╼ ";
const END_CONNECTOR: &str = "└╼ ";

/// Placeholder shown when the template root contains nothing at all.
const EMPTY_PLACEHOLDER: &str = "E\nM\nP\nT\nY";

/// Render a depth-bounded tree view of `dir`, one line per entry.
///
/// Directories sort before files, each group case-insensitively by name.
/// A negative `max_depth` means unlimited recursion; otherwise recursion
/// into a directory stops once the current depth reaches `max_depth`
/// (the root's direct children are depth 1). Unreadable directories emit
/// an inline error line instead of aborting the render.
pub fn render(dir: &Path, max_depth: i32) -> String {
    let mut out = String::new();
    walk(dir, "", 1, max_depth, &mut out);
    if out.is_empty() {
        out.push_str(EMPTY_PLACEHOLDER);
    }
    out
}

fn walk(path: &Path, prefix: &str, depth: i32, max_depth: i32, out: &mut String) {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            out.push_str(prefix);
            out.push_str(&format!("Error reading directory: {e}\n"));
            return;
        }
    };

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            dirs.push(name);
        } else {
            files.push(name);
        }
    }
    dirs.sort_by_key(|n| n.to_lowercase());
    files.sort_by_key(|n| n.to_lowercase());

    let total = dirs.len() + files.len();
    for (i, name) in dirs.iter().chain(files.iter()).enumerate() {
        let last = i == total - 1;
        let connector = if last { END_CONNECTOR } else { MID_CONNECTOR };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(name);
        out.push('\n');

        let is_dir = i < dirs.len();
        if is_dir && (max_depth < 0 || depth < max_depth) {
            let child_prefix = if last {
                format!("{prefix}   ")
            } else {
                format!("{prefix}│  ")
            };
            walk(&path.join(name), &child_prefix, depth + 1, max_depth, out);
        }
    }
}
