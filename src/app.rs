//! The runtime for the TEA core: a single cooperative event loop.
//!
//! One loop multiplexes keyboard events, completion callbacks from spawned
//! units of work, and the blink timer. Every message is processed to
//! completion before the next, so the Model needs no locking. Background
//! work communicates only by sending a single Message back on the loop's
//! channel; at most one copy step is in flight at a time.

use std::fs;
use std::io::Stdout;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::tea::{update, Command, Message, Model};
use crate::{copy, ops, stlog_debug, ui, util, Result};

const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Run the interactive session to completion and return the final model.
///
/// The caller owns terminal setup and restore; a fatal session error is
/// recorded on the returned model rather than returned as `Err`.
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, model: Model) -> Result<Model> {
    Runtime::new()?.block_on(run_async(terminal, model))
}

async fn run_async(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut model: Model,
) -> Result<Model> {
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();
    let mut events = EventStream::new();
    let mut blink = tokio::time::interval_at(
        tokio::time::Instant::now() + BLINK_INTERVAL,
        BLINK_INTERVAL,
    );

    terminal.draw(|frame| ui::draw(frame, &model))?;
    model.dirty = false;

    'session: loop {
        let msg = tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    Message::Key(key)
                }
                Some(Ok(Event::Resize(w, h))) => Message::Resize(w, h),
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
                None => break 'session,
            },
            Some(msg) = msg_rx.recv() => msg,
            _ = blink.tick() => Message::Blink,
        };

        for cmd in update(&mut model, msg) {
            if execute_command(&mut model, cmd, &msg_tx) {
                // Dropping msg_rx discards any in-flight step's completion.
                break 'session;
            }
        }

        if model.dirty {
            terminal.draw(|frame| ui::draw(frame, &model))?;
            model.dirty = false;
        }
    }

    Ok(model)
}

/// Execute one command from the update function. Returns true to quit.
fn execute_command(
    model: &mut Model,
    cmd: Command,
    msg_tx: &mpsc::UnboundedSender<Message>,
) -> bool {
    match cmd {
        Command::PrepareProject { name, source } => {
            stlog_debug!(
                "Command::PrepareProject name={} source={}",
                name,
                source.display()
            );
            let tx = msg_tx.clone();

            tokio::spawn(async move {
                let result = util::blocking(move || {
                    let dest = std::env::current_dir()?.join(&name);
                    fs::create_dir(&dest)?;
                    let ops = ops::plan(&source)?;
                    Ok((dest, ops))
                })
                .await;

                match result {
                    Ok((dest, ops)) => {
                        stlog_debug!("Project prepared: {} ops", ops.len());
                        let _ = tx.send(Message::ProjectPrepared { dest, ops });
                    }
                    Err(e) => {
                        let _ = tx.send(Message::PrepareFailed(e.to_string()));
                    }
                }
            });
        }

        Command::RunStep { index } => {
            let (Some(op), Some(source), Some(dest)) = (
                model.ops.get(index).cloned(),
                model.source_dir.clone(),
                model.dest_dir.clone(),
            ) else {
                return false;
            };
            stlog_debug!("Command::RunStep index={} rel={}", index, op.rel_path.display());
            let tx = msg_tx.clone();

            tokio::spawn(async move {
                // Pacing delay so per-item progress is visible.
                tokio::time::sleep(copy::STEP_DELAY).await;
                let step_op = op.clone();
                let result = util::blocking(move || copy::apply(&step_op, &source, &dest)).await;
                let _ = tx.send(Message::StepDone {
                    index,
                    op,
                    error: result.err().map(|e| e.to_string()),
                });
            });
        }

        Command::Quit => {
            stlog_debug!("Command::Quit");
            return true;
        }
    }

    false
}
