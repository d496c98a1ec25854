//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of a timed falling-block round. It has
//! **zero dependencies** on UI, terminals or timers, making it:
//!
//! - **Deterministic**: Same seed produces the same piece sequence
//! - **Testable**: Every rule is reachable through plain method calls
//! - **Portable**: The session layer decides when time passes
//!
//! # Module Structure
//!
//! - [`shapes`]: piece matrices, colors and the clockwise rotation primitive
//! - [`bag`]: 7-bag randomizer and the spawn position table
//! - [`collision`]: shape-versus-board overlap test
//! - [`board`]: 10x20 grid, locking and line clearing
//! - [`scoring`]: points per lock
//! - [`game`]: the `Idle` → `Running` → `GameOver` state machine
//!
//! # Rules
//!
//! - **7-Bag Randomizer**: each 7-piece cycle holds every kind exactly once
//! - **Rotation**: clockwise only, with five fixed wall-kick offsets
//! - **Hold**: once per turn, re-enabled when the next piece locks
//! - **Scoring**: 100 / 300 / 500 / 800 for 1-4 lines
//! - **Round**: 180 seconds; a blocked spawn or the clock ends it
//!
//! # Example
//!
//! ```
//! use tetris_sprint_core::Game;
//! use tetris_sprint_types::{GameAction, Phase};
//!
//! let mut game = Game::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::SoftDrop);
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.score(), 0);
//! ```

pub mod bag;
pub mod board;
pub mod collision;
pub mod game;
pub mod scoring;
pub mod shapes;

pub use tetris_sprint_types as types;

// Re-export commonly used types for convenience
pub use bag::{spawn_position, Bag, SimpleRng};
pub use board::Board;
pub use collision::collides;
pub use game::{Game, GameEvent, Tetromino, WALL_KICKS};
pub use scoring::line_clear_score;
pub use shapes::{rotate, shape, ShapeMatrix};
