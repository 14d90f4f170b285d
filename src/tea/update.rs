//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute. Each (stage, sub-mode)
//! pair accepts a fixed set of events; everything else is ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog;
use crate::{stlog_debug, stlog_warn};

use super::command::Command;
use super::message::Message;
use super::model::{Model, SearchState, Stage};

/// Pure update function: Model + Message → Commands
///
/// This function:
/// 1. Takes the current model and an input message
/// 2. Mutates the model state (and sets dirty flag)
/// 3. Returns a list of commands (side effects) to execute
///
/// The function itself has no side effects - all I/O happens via returned
/// Commands.
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            model.dirty = true;

            // Global: interrupt quits immediately from any stage.
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                cmds.push(Command::Quit);
                return cmds;
            }

            // Global: '?' flips the help panel without changing stage.
            if key.code == KeyCode::Char('?') {
                model.show_help = !model.show_help;
                return cmds;
            }

            match model.stage {
                Stage::SelectTemplate => {
                    if model.search.is_some() {
                        update_search_mode(model, key);
                    } else {
                        update_browse_mode(model, key, &mut cmds);
                    }
                }
                Stage::ProjectName => update_name_mode(model, key, &mut cmds),
                // Keys carry no meaning while copying or done.
                Stage::Copying | Stage::Done => {}
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true;
        }

        Message::Blink => {
            model.blink = !model.blink;
            model.spinner_frame = model.spinner_frame.wrapping_add(1);
            model.dirty = true;
        }

        Message::ProjectPrepared { dest, ops } => {
            stlog_debug!("Message::ProjectPrepared ops={}", ops.len());
            model.dest_dir = Some(dest);
            model.ops = ops;
            model.current_op = 0;
            model.status_line.clear();
            model.stage = Stage::Copying;
            model.dirty = true;
            if model.ops.is_empty() {
                finish_copy(model, &mut cmds);
            } else {
                cmds.push(Command::RunStep { index: 0 });
            }
        }

        Message::PrepareFailed(err) => {
            stlog_warn!("Message::PrepareFailed err={}", err);
            model.fatal = Some(err);
            model.dirty = true;
            cmds.push(Command::Quit);
        }

        Message::StepDone { index, op, error } => {
            // A completion from a cancelled or superseded step is discarded.
            if model.stage != Stage::Copying || index != model.current_op {
                stlog_debug!("Stale StepDone ignored: index={}", index);
                return cmds;
            }

            model.status_line = op.describe();
            if let Some(err) = error {
                stlog_warn!("Step failed: {} - {}", op.rel_path.display(), err);
                model.status_line.push_str(&format!(" [error: {err}]"));
            }

            model.current_op += 1;
            model.dirty = true;
            if model.current_op < model.ops.len() {
                cmds.push(Command::RunStep {
                    index: model.current_op,
                });
            } else {
                finish_copy(model, &mut cmds);
            }
        }
    }

    cmds
}

fn finish_copy(model: &mut Model, cmds: &mut Vec<Command>) {
    model.status_line = format!("Project \"{}\" created successfully!", model.project_name);
    model.stage = Stage::Done;
    cmds.push(Command::Quit);
}

fn update_browse_mode(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Char('/') => {
            // Enter search mode showing the full catalog.
            model.search = Some(SearchState {
                query: String::new(),
                results: model.templates.clone(),
                cursor: 0,
            });
        }

        KeyCode::Up | KeyCode::Char('k') => {
            model.cursor = model.cursor.saturating_sub(1);
        }

        KeyCode::Down | KeyCode::Char('j') => {
            if model.cursor + 1 < model.templates.len() {
                model.cursor += 1;
            }
        }

        KeyCode::Enter => {
            if let Some(template) = model.templates.get(model.cursor) {
                model.source_dir = Some(template.path.clone());
                model.stage = Stage::ProjectName;
            }
        }

        KeyCode::Char('q') => {
            cmds.push(Command::Quit);
        }

        _ => {}
    }
}

fn update_search_mode(model: &mut Model, key: KeyEvent) {
    let Some(search) = model.search.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => {
            // Back to normal browsing, search state cleared.
            model.search = None;
        }

        KeyCode::Enter => {
            // Confirming with zero results is a no-op: stay in search mode.
            if search.results.is_empty() {
                return;
            }
            let selection = search.results[search.cursor].clone();
            if let Some(pos) = model
                .templates
                .iter()
                .position(|t| t.name == selection.name)
            {
                model.cursor = pos;
            }
            model.source_dir = Some(selection.path);
            model.stage = Stage::ProjectName;
            model.search = None;
        }

        KeyCode::Backspace => {
            search.query.pop();
            search.results = catalog::filter(&model.templates, &search.query);
            search.cursor = search
                .cursor
                .min(search.results.len().saturating_sub(1));
        }

        KeyCode::Up => {
            search.cursor = search.cursor.saturating_sub(1);
        }

        KeyCode::Down => {
            if search.cursor + 1 < search.results.len() {
                search.cursor += 1;
            }
        }

        KeyCode::Char(c) => {
            search.query.push(c);
            search.results = catalog::filter(&model.templates, &search.query);
            search.cursor = 0;
        }

        _ => {}
    }
}

fn update_name_mode(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    match key.code {
        KeyCode::Enter => {
            let name = model.input_buffer.trim();
            // Empty trimmed name: stay in name entry, no filesystem writes.
            if name.is_empty() {
                return;
            }
            let Some(source) = model.source_dir.clone() else {
                return;
            };
            model.project_name = name.to_string();
            cmds.push(Command::PrepareProject {
                name: model.project_name.clone(),
                source,
            });
        }

        KeyCode::Backspace => {
            model.input_buffer.pop();
        }

        KeyCode::Char(c) => {
            model.input_buffer.push(c);
        }

        _ => {}
    }
}
