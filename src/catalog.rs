//! Template catalog: the set of project templates available for scaffolding.
//!
//! A template is an immediate subdirectory of the template root. The set is
//! read once at startup; an unreadable or empty root is a startup error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{stlog_debug, Error, Result};

/// A named template directory under the template root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub path: PathBuf,
}

/// List the templates under `root`: immediate subdirectories only,
/// non-directory entries are ignored.
pub fn list(root: &Path) -> Result<Vec<Template>> {
    let mut templates = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            templates.push(Template {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
            });
        }
    }

    if templates.is_empty() {
        return Err(Error::NoTemplates(root.to_path_buf()));
    }

    stlog_debug!("catalog::list root={} count={}", root.display(), templates.len());
    Ok(templates)
}

/// Filter templates whose names contain `query` (case-insensitive).
/// An empty query returns the full input unchanged. The result preserves
/// the original relative order; there is no scoring or ranking.
pub fn filter(templates: &[Template], query: &str) -> Vec<Template> {
    if query.is_empty() {
        return templates.to_vec();
    }
    let lower_query = query.to_lowercase();
    templates
        .iter()
        .filter(|t| t.name.to_lowercase().contains(&lower_query))
        .cloned()
        .collect()
}
