//! Messages for the TEA (The Elm Architecture) pattern.
//!
//! Messages are inputs to the update function - they come from keyboard
//! events, the blink timer, or completion callbacks of background work.

use std::path::PathBuf;

use crossterm::event::KeyEvent;

use crate::ops::Op;

/// Input messages to the update function.
#[derive(Debug)]
pub enum Message {
    // Keyboard/terminal events
    Key(KeyEvent),
    Resize(u16, u16),

    /// Periodic tick toggling the text cursor blink and advancing the
    /// spinner. Never affects control flow.
    Blink,

    // Command completion callbacks
    /// Destination directory created and operation plan built.
    ProjectPrepared { dest: PathBuf, ops: Vec<Op> },
    /// Directory creation or planning failed - fatal to the session.
    PrepareFailed(String),
    /// One copy step finished, successfully or not.
    StepDone {
        index: usize,
        op: Op,
        error: Option<String>,
    },
}
