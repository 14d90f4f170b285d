//! End-to-end session scenarios: the real update function driven by key
//! events, with commands executed against real filesystem trees the same
//! way the runtime executes them.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use stencil::catalog;
use stencil::tea::{update, Command, Message, Model, Stage};
use stencil::{copy, ops};

use crate::fixtures;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn press(model: &mut Model, code: KeyCode) -> Vec<Command> {
    update(model, Message::Key(key(code)))
}

fn type_str(model: &mut Model, s: &str) {
    for c in s.chars() {
        press(model, KeyCode::Char(c));
    }
}

/// Execute commands the way the runtime does, but synchronously and
/// against `workdir` instead of the process working directory.
fn drive(model: &mut Model, cmds: Vec<Command>, workdir: &Path) {
    let mut queue: VecDeque<Command> = cmds.into();
    while let Some(cmd) = queue.pop_front() {
        match cmd {
            Command::PrepareProject { name, source } => {
                let msg = prepare(&name, &source, workdir);
                queue.extend(update(model, msg));
            }
            Command::RunStep { index } => {
                let op = model.ops[index].clone();
                let source = model.source_dir.clone().unwrap();
                let dest = model.dest_dir.clone().unwrap();
                let error = copy::apply(&op, &source, &dest)
                    .err()
                    .map(|e| e.to_string());
                queue.extend(update(model, Message::StepDone { index, op, error }));
            }
            Command::Quit => {}
        }
    }
}

fn prepare(name: &str, source: &Path, workdir: &Path) -> Message {
    let attempt = || -> stencil::Result<Message> {
        let dest = workdir.join(name);
        fs::create_dir(&dest)?;
        let ops = ops::plan(source)?;
        Ok(Message::ProjectPrepared { dest, ops })
    };
    attempt().unwrap_or_else(|e| Message::PrepareFailed(e.to_string()))
}

#[test]
fn full_scaffold_session() {
    let template_root = fixtures::template_root();
    let workdir = TempDir::new().unwrap();

    let templates = catalog::list(template_root.path()).unwrap();
    let mut model = Model::new(templates, -1);

    let cmds = press(&mut model, KeyCode::Enter);
    assert_eq!(model.stage, Stage::ProjectName);
    assert!(cmds.is_empty());

    type_str(&mut model, "demo");
    let cmds = press(&mut model, KeyCode::Enter);
    drive(&mut model, cmds, workdir.path());

    assert_eq!(model.stage, Stage::Done);
    assert_eq!(model.status_line, "Project \"demo\" created successfully!");
    fixtures::assert_trees_identical(
        &template_root.path().join("api"),
        &workdir.path().join("demo"),
    );
}

#[test]
fn search_selects_matching_template() {
    let root = TempDir::new().unwrap();
    for name in ["api", "web-app", "worker"] {
        fs::create_dir(root.path().join(name)).unwrap();
    }

    let templates = catalog::list(root.path()).unwrap();
    let mut model = Model::new(templates, -1);

    press(&mut model, KeyCode::Char('/'));
    type_str(&mut model, "wo");
    press(&mut model, KeyCode::Enter);

    assert_eq!(model.stage, Stage::ProjectName);
    assert_eq!(
        model.source_dir.as_deref(),
        Some(root.path().join("worker").as_path())
    );
}

#[test]
fn whitespace_name_writes_nothing() {
    let template_root = fixtures::template_root();
    let workdir = TempDir::new().unwrap();

    let templates = catalog::list(template_root.path()).unwrap();
    let mut model = Model::new(templates, -1);

    press(&mut model, KeyCode::Enter);
    type_str(&mut model, "   ");
    let cmds = press(&mut model, KeyCode::Enter);
    drive(&mut model, cmds, workdir.path());

    assert_eq!(model.stage, Stage::ProjectName);
    assert_eq!(
        fs::read_dir(workdir.path()).unwrap().count(),
        0,
        "No filesystem writes for an empty project name"
    );
}

#[test]
fn failing_step_is_annotated_and_run_completes() {
    let template_root = fixtures::template_root();
    let source = template_root.path().join("api");
    let workdir = TempDir::new().unwrap();

    let templates = catalog::list(template_root.path()).unwrap();
    let mut model = Model::new(templates, -1);
    press(&mut model, KeyCode::Enter);
    type_str(&mut model, "demo");
    model.project_name = "demo".to_string();

    // A five-step plan whose middle step references a missing source file.
    let mut planned = ops::plan(&source).unwrap();
    planned.insert(
        1,
        ops::Op {
            kind: stencil::OpKind::CopyFile,
            rel_path: "ghost.txt".into(),
        },
    );
    assert_eq!(planned.len(), 4);
    planned.push(ops::Op {
        kind: stencil::OpKind::CreateDir,
        rel_path: "extra".into(),
    });

    let dest = workdir.path().join("demo");
    fs::create_dir(&dest).unwrap();
    update(
        &mut model,
        Message::ProjectPrepared {
            dest,
            ops: planned.clone(),
        },
    );

    let mut saw_error = false;
    for (i, op) in planned.into_iter().enumerate() {
        let source_dir = model.source_dir.clone().unwrap();
        let dest_dir = model.dest_dir.clone().unwrap();
        let error = copy::apply(&op, &source_dir, &dest_dir)
            .err()
            .map(|e| e.to_string());
        update(&mut model, Message::StepDone { index: i, op, error });
        if model.status_line.contains("[error:") {
            saw_error = true;
        }
    }

    assert!(saw_error, "The failing step was surfaced in the status line");
    assert_eq!(model.stage, Stage::Done);
    assert_eq!(model.current_op, 5, "All five operations were processed");
    assert!(workdir.path().join("demo/extra").is_dir());
}

#[test]
fn existing_destination_is_fatal() {
    let template_root = fixtures::template_root();
    let workdir = TempDir::new().unwrap();
    fs::create_dir(workdir.path().join("demo")).unwrap();

    let templates = catalog::list(template_root.path()).unwrap();
    let mut model = Model::new(templates, -1);
    press(&mut model, KeyCode::Enter);
    type_str(&mut model, "demo");
    let cmds = press(&mut model, KeyCode::Enter);
    drive(&mut model, cmds, workdir.path());

    assert!(model.fatal.is_some(), "mkdir failure is fatal to the session");
    assert_ne!(model.stage, Stage::Done);
}
