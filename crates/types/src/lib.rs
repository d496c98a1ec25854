//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, session scheduling, terminal rendering).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the host loop (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Automatic soft drop interval (constant, no levels) |
//! | `COUNTDOWN_INTERVAL_MS` | 1000 | Countdown timer period |
//! | `ROUND_SECONDS` | 180 | Length of a round |
//!
//! # Examples
//!
//! ```
//! use tetris_sprint_types::{GameAction, PieceKind, Position, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! let p = Position::new(3, 0).offset(-1, 1);
//! assert_eq!(p, Position::new(2, 1));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Automatic drop interval. Constant for the whole round.
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Countdown timer period.
pub const COUNTDOWN_INTERVAL_MS: u32 = 1000;

/// Length of a round in seconds (3 minutes).
pub const ROUND_SECONDS: u32 = 180;

/// Points awarded per lock, indexed by the number of lines cleared.
///
/// Clears above 4 lines cannot happen on a 20-row board with 4-row pieces and score nothing.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_timing_defaults() {
        assert_eq!(TICK_MS, 16);
        assert_eq!(DROP_INTERVAL_MS, 1000);
        assert_eq!(COUNTDOWN_INTERVAL_MS, 1000);
        assert_eq!(ROUND_SECONDS, 180);
    }

    #[test]
    fn line_scores_table() {
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn piece_kind_all_is_in_definition_order() {
        assert_eq!(
            PieceKind::ALL,
            [
                PieceKind::I,
                PieceKind::O,
                PieceKind::T,
                PieceKind::L,
                PieceKind::J,
                PieceKind::S,
                PieceKind::Z,
            ]
        );
    }

    #[test]
    fn game_action_string_roundtrip() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::Rotate,
            GameAction::Hold,
            GameAction::Start,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn phase_is_running() {
        assert!(!Phase::Idle.is_running());
        assert!(Phase::Running.is_running());
        assert!(!Phase::GameOver.is_running());
    }
}

/// The seven tetromino piece kinds
///
/// The symbolic kind travels with every piece (active, next, held, and every locked
/// board cell), so nothing ever has to be recovered from shape data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// Every kind, in definition order. A freshly refilled bag starts from this list.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_sprint_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("J"), Some(PieceKind::J));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase single-letter name, as shown in the side panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Origin offset of a piece's shape matrix on the board.
///
/// `y` may be negative: pieces are allowed to poke out above row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Return this position shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Player-facing actions
///
/// Each input event maps 1:1 to one engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell; locks it when it cannot fall further
    SoftDrop,
    /// Rotate piece 90° clockwise, with wall kicks
    Rotate,
    /// Hold current piece (once per turn)
    Hold,
    /// Start a round (ignored while one is running)
    Start,
}

impl GameAction {
    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_sprint_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hold"), Some(GameAction::Hold));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "hold" => Some(GameAction::Hold),
            "start" | "restart" => Some(GameAction::Start),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Hold => "hold",
            GameAction::Start => "start",
        }
    }
}

/// Lifecycle phase of a round.
///
/// `Idle` → `Running` → `GameOver` → (restart) → `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Running,
    GameOver,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// A freshly spawned piece overlapped the stack.
    BlockedSpawn,
    /// The countdown reached zero.
    TimeUp,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::BlockedSpawn => "blocked_spawn",
            GameOverReason::TimeUp => "time_up",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Settled cell, tagged with the kind that locked there
pub type Cell = Option<PieceKind>;
