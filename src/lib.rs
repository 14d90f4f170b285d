pub mod catalog;
pub mod config;
pub mod copy;
pub mod error;
pub mod log;
pub mod ops;
pub mod tree;
pub mod util;

// TEA core and its runtime
pub mod app;
pub mod tea;
pub mod ui;

pub use catalog::Template;
pub use error::{Error, Result};
pub use ops::{Op, OpKind};
