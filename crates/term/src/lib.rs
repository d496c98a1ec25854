//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the session pushes state into a
//! [`Scene`], [`GameView`] draws the scene into a [`FrameBuffer`] and
//! [`TerminalRenderer`] flushes the framebuffer to the terminal.
//!
//! Board cells are 2 columns wide by default to compensate for the aspect
//! ratio of terminal glyphs.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_sprint_core as core;
pub use tetris_sprint_engine as engine;
pub use tetris_sprint_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Scene, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
