//! Session layer: owns a [`Game`](tetris_sprint_core::Game), its timers and
//! the collaborators that show it.
//!
//! The host loop feeds key actions and elapsed frame time into a
//! [`GameSession`]; the session decides when the piece drops, when a second
//! passes and when the round is over, then pushes the new state out through
//! [`RenderSink`] and [`DisplaySink`].

pub mod config;
pub mod render;
pub mod scheduler;
pub mod session;

pub use tetris_sprint_core as core;
pub use tetris_sprint_types as types;

pub use config::SessionConfig;
pub use render::{render_game, DisplaySink, RenderSink};
pub use scheduler::{FrameTask, PeriodicTask, Scheduler};
pub use session::GameSession;
