//! Planner ordering and copy fidelity against real template trees.

use std::path::Path;

use tempfile::TempDir;

use stencil::ops::{plan, OpKind};
use stencil::{copy, ops};

use crate::fixtures;

#[test]
fn plan_covers_every_entry_once() {
    let template = fixtures::nested_template();
    let ops = plan(template.path()).unwrap();

    // a, a/b, a/b/c, top.txt, a/one.txt, a/b/two.bin, a/b/c/three.txt
    assert_eq!(ops.len(), 7);

    let mut rels: Vec<_> = ops.iter().map(|op| op.rel_path.clone()).collect();
    rels.sort();
    rels.dedup();
    assert_eq!(rels.len(), 7, "No entry is planned twice");
}

#[test]
fn plan_orders_parents_before_children() {
    let template = fixtures::nested_template();
    let ops = plan(template.path()).unwrap();

    for (i, op) in ops.iter().enumerate() {
        if let Some(parent) = op.rel_path.parent() {
            if parent == Path::new("") {
                continue;
            }
            let parent_pos = ops
                .iter()
                .position(|o| o.kind == OpKind::CreateDir && o.rel_path == parent)
                .expect("parent directory is planned");
            assert!(
                parent_pos < i,
                "{:?} must be created before {:?}",
                parent,
                op.rel_path
            );
        }
    }
}

#[test]
fn roundtrip_reproduces_source_tree() {
    let template = fixtures::nested_template();
    let dest = TempDir::new().unwrap();

    for op in plan(template.path()).unwrap() {
        copy::apply(&op, template.path(), dest.path()).unwrap();
    }

    fixtures::assert_trees_identical(template.path(), dest.path());
}

#[test]
fn roundtrip_of_flat_template() {
    let root = fixtures::template_root();
    let source = root.path().join("api");
    let dest = TempDir::new().unwrap();

    for op in plan(&source).unwrap() {
        copy::apply(&op, &source, dest.path()).unwrap();
    }

    fixtures::assert_trees_identical(&source, dest.path());
}

#[test]
fn failed_step_leaves_remaining_ops_applicable() {
    let template = fixtures::template_root();
    let source = template.path().join("api");
    let dest = TempDir::new().unwrap();

    let mut planned = ops::plan(&source).unwrap();
    // Inject a step whose source does not exist.
    planned.insert(
        0,
        ops::Op {
            kind: OpKind::CopyFile,
            rel_path: "ghost.txt".into(),
        },
    );

    let mut failures = 0;
    for op in &planned {
        if copy::apply(op, &source, dest.path()).is_err() {
            failures += 1;
        }
    }

    assert_eq!(failures, 1);
    // Every genuine operation still landed.
    fixtures::assert_trees_identical(&source, dest.path());
}
