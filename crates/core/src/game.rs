//! Game module - the round state machine
//!
//! Ties together the board, shapes, bag and collision detection. A round moves
//! through `Idle` → `Running` → `GameOver`; `restart` goes back to `Running`.
//! Every mutator is a no-op outside `Running` and reports whether it changed state.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::bag::{spawn_position, Bag};
use crate::board::Board;
use crate::collision::collides;
use crate::scoring::line_clear_score;
use crate::shapes::{self, ShapeMatrix};
use crate::types::*;

/// Wall-kick offsets tried in order when a rotation collides in place:
/// no shift, left, right, left+up, right+up.
pub const WALL_KICKS: [(i8, i8); 5] = [(0, 0), (-1, 0), (1, 0), (-1, -1), (1, -1)];

/// Capacity of the pending event queue.
pub const EVENT_CAPACITY: usize = 16;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Current (possibly rotated) shape
    pub shape: ShapeMatrix,
    pub position: Position,
}

impl Tetromino {
    /// Unrotated piece at its spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: shapes::shape(kind),
            position: spawn_position(kind),
        }
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.position.x + dx, self.position.y + dy))
    }

    fn collides_at(&self, shape: &ShapeMatrix, position: Position, board: &Board) -> bool {
        collides(shape, position, board.width(), board.height(), board)
    }
}

/// Something the session (or any observer) may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Spawned { kind: PieceKind },
    Locked { kind: PieceKind },
    LinesCleared { lines: u32, points: u32 },
    GameOver { score: u32, reason: GameOverReason },
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    bag: Bag,
    phase: Phase,
    active: Option<Tetromino>,
    next: Option<PieceKind>,
    held: Option<PieceKind>,
    can_hold: bool,
    score: u32,
    time_remaining: u32,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl Game {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            bag: Bag::new(seed),
            phase: Phase::Idle,
            active: None,
            next: None,
            held: None,
            can_hold: true,
            score: 0,
            time_remaining: ROUND_SECONDS,
            events: ArrayVec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for scenario setup in tests and tools.
    ///
    /// Gameplay only changes the board through locks and line clears.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.held
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Drain pending events, oldest first.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            // Keep the newest events; callers drain after every operation.
            self.events.remove(0);
        }
        self.events.push(event);
    }

    /// Start a round. Ignored while a round is already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.reset_round();
        true
    }

    /// Reset everything and start a fresh round, whatever the current phase.
    pub fn restart(&mut self) -> bool {
        self.reset_round();
        true
    }

    fn reset_round(&mut self) {
        self.board.clear();
        self.score = 0;
        self.time_remaining = ROUND_SECONDS;
        self.held = None;
        self.can_hold = true;
        self.events.clear();

        let first = self.bag.draw_next();
        self.active = Some(Tetromino::spawn(first));
        self.next = Some(self.bag.draw_next());
        self.phase = Phase::Running;

        info!("round started, first piece {:?}", first);
        self.push_event(GameEvent::Started);
        self.push_event(GameEvent::Spawned { kind: first });
    }

    /// Promote the next piece to active at its spawn position and draw a new next piece.
    ///
    /// Ends the round if the new piece overlaps the stack where it spawns.
    pub fn spawn(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.bag.draw_next(),
        };
        let piece = Tetromino::spawn(kind);
        self.active = Some(piece);
        self.next = Some(self.bag.draw_next());

        debug!("spawned {:?} at {:?}", kind, piece.position);
        self.push_event(GameEvent::Spawned { kind });

        if piece.collides_at(&piece.shape, piece.position, &self.board) {
            self.end_round(GameOverReason::BlockedSpawn);
        }
        true
    }

    /// Shift the active piece one column. Blocked moves change nothing.
    pub fn move_horizontal(&mut self, direction: i8) -> bool {
        self.try_move(direction.signum(), 0)
    }

    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let target = active.position.offset(dx, dy);
        if active.collides_at(&active.shape, target, &self.board) {
            return false;
        }

        self.active = Some(Tetromino {
            position: target,
            ..active
        });
        true
    }

    /// Move the active piece down one row, or lock it when it cannot fall.
    ///
    /// Locking clears lines, scores them, spawns the next piece and re-enables
    /// hold. Used by both player input and the automatic drop timer.
    pub fn soft_drop(&mut self) -> bool {
        if !self.is_running() || self.active.is_none() {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_active();
        true
    }

    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock(&active.shape, active.position, active.kind);
        debug!("locked {:?} at {:?}", active.kind, active.position);
        self.push_event(GameEvent::Locked { kind: active.kind });

        let lines = self.board.clear_lines();
        if lines > 0 {
            let points = line_clear_score(lines);
            self.score = self.score.saturating_add(points);
            debug!("cleared {} lines for {} points", lines, points);
            self.push_event(GameEvent::LinesCleared { lines, points });
        }

        self.spawn();
        self.can_hold = true;
    }

    /// Rotate the active piece clockwise, trying the wall kicks in order.
    ///
    /// If every kick collides the piece is left exactly as it was.
    pub fn rotate(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = shapes::rotate(&active.shape);
        for (dx, dy) in WALL_KICKS {
            let position = active.position.offset(dx, dy);
            if !active.collides_at(&rotated, position, &self.board) {
                self.active = Some(Tetromino {
                    shape: rotated,
                    position,
                    ..active
                });
                return true;
            }
        }

        false
    }

    /// Put the active piece on hold, once per turn.
    ///
    /// With an empty hold slot the next piece becomes active and a new next piece
    /// is drawn. Otherwise active and held swap. The newly active piece starts
    /// unrotated at its spawn position. Overlap with the stack is not checked
    /// here; the piece can still be moved clear before it locks.
    pub fn hold(&mut self) -> bool {
        if !self.is_running() || !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let incoming = match self.held {
            Some(held) => held,
            None => {
                let kind = match self.next.take() {
                    Some(kind) => kind,
                    None => self.bag.draw_next(),
                };
                self.next = Some(self.bag.draw_next());
                kind
            }
        };

        self.held = Some(active.kind);
        self.active = Some(Tetromino::spawn(incoming));
        self.can_hold = false;
        debug!("held {:?}, now playing {:?}", active.kind, incoming);
        true
    }

    /// One second of the countdown. Reaching zero ends the round without a drop.
    pub fn tick_second(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.end_round(GameOverReason::TimeUp);
        }
        true
    }

    fn end_round(&mut self, reason: GameOverReason) {
        if !self.is_running() {
            return;
        }
        self.phase = Phase::GameOver;
        info!("game over ({}), score {}", reason.as_str(), self.score);
        self.push_event(GameEvent::GameOver {
            score: self.score,
            reason,
        });
    }

    /// Apply a player action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_horizontal(-1),
            GameAction::MoveRight => self.move_horizontal(1),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Hold => self.hold(),
            GameAction::Start => self.start(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
