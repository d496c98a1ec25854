//! Tetris Sprint (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris_sprint::{core, engine, input, term, types}`
//! so the binary, integration tests and benchmarks share one import root.

pub use tetris_sprint_core as core;
pub use tetris_sprint_engine as engine;
pub use tetris_sprint_input as input;
pub use tetris_sprint_term as term;
pub use tetris_sprint_types as types;
