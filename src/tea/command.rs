//! Commands for the TEA (The Elm Architecture) pattern.
//!
//! Commands are outputs from the update function - they represent side
//! effects to be executed by the runtime.

use std::path::PathBuf;

/// Output commands from the update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create the destination directory under the current working
    /// directory and build the operation plan for the chosen template.
    PrepareProject { name: String, source: PathBuf },

    /// Execute one copy step. Dispatched strictly one at a time: the next
    /// step is issued only after the previous completion was processed.
    RunStep { index: usize },

    // App lifecycle
    Quit,
}
