//! Model for the TEA (The Elm Architecture) pattern.
//!
//! The Model is pure application state - no channels, no handles, no runtime
//! infrastructure.

use std::path::PathBuf;

use crate::catalog::Template;
use crate::ops::Op;

/// The mutually exclusive phase of the scaffolding session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    SelectTemplate,
    ProjectName,
    Copying,
    Done,
}

/// Live search sub-mode state within template selection.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<Template>,
    pub cursor: usize,
}

/// Pure application state - the single source of truth.
///
/// Background units of work never touch the Model; they report back
/// through Messages and only `update` mutates it.
pub struct Model {
    pub stage: Stage,

    // Template selection
    pub templates: Vec<Template>,
    pub cursor: usize,
    /// Some while the search sub-mode is active.
    pub search: Option<SearchState>,

    // Project name input
    pub input_buffer: String,
    pub project_name: String,

    // Copy pipeline
    pub ops: Vec<Op>,
    pub current_op: usize,
    /// Latest step result only - a rolling line, not a log.
    pub status_line: String,
    pub source_dir: Option<PathBuf>,
    pub dest_dir: Option<PathBuf>,

    // Presentation
    /// Preview tree depth; negative means unlimited.
    pub tree_depth: i32,
    pub blink: bool,
    pub spinner_frame: usize,
    pub show_help: bool,

    // Dirty flag - set when state changes and a render is needed
    pub dirty: bool,

    /// Terminal error: short-circuits rendering, program exits non-zero.
    pub fatal: Option<String>,
}

impl Model {
    pub fn new(templates: Vec<Template>, tree_depth: i32) -> Self {
        Self {
            stage: Stage::SelectTemplate,
            templates,
            cursor: 0,
            search: None,
            input_buffer: String::new(),
            project_name: String::new(),
            ops: Vec::new(),
            current_op: 0,
            status_line: String::new(),
            source_dir: None,
            dest_dir: None,
            tree_depth,
            blink: true,
            spinner_frame: 0,
            show_help: false,
            dirty: true,
            fatal: None,
        }
    }

    /// The template currently highlighted for preview: the search result
    /// under the search cursor while searching, otherwise the browse
    /// selection.
    pub fn highlighted_template(&self) -> Option<&Template> {
        match &self.search {
            Some(search) if !search.results.is_empty() => search.results.get(search.cursor),
            Some(_) => None,
            None => self.templates.get(self.cursor),
        }
    }
}
