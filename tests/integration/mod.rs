//! Integration test suite for stencil.
//!
//! These tests exercise the full scaffolding flow from template selection
//! to the finished project directory, driving the same update function and
//! executor the runtime uses.
//!
//! # Test Categories
//!
//! - `plan_roundtrip`: Planner ordering and copy fidelity against real
//!   template trees
//! - `scaffold_flow`: End-to-end session scenarios through the state
//!   machine

mod fixtures;

mod plan_roundtrip;
mod scaffold_flow;
