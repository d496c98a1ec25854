//! Game session - one round's lifecycle around a [`Game`].
//!
//! The session owns the game, the drop and countdown tasks and the view.
//! Every entry point runs to completion before returning, so a game over is
//! observed, both tasks are cancelled and the view is told in the same call.

use log::{debug, info, trace};

use crate::config::SessionConfig;
use crate::core::{Game, GameEvent};
use crate::render::{render_game, DisplaySink, RenderSink};
use crate::scheduler::Scheduler;
use crate::types::{GameAction, GameOverReason, Phase};

pub struct GameSession<V> {
    game: Game,
    scheduler: Scheduler,
    view: V,
    frames: u64,
    outcome: Option<(u32, GameOverReason)>,
}

impl<V: RenderSink + DisplaySink> GameSession<V> {
    /// Create an idle session and show it.
    pub fn new(config: &SessionConfig, mut view: V) -> Self {
        let game = Game::new(config.seed);
        debug!("session created with seed {}", config.seed);
        view.set_start_enabled(true);
        render_game(&game, &mut view);

        Self {
            game,
            scheduler: Scheduler::new(),
            view,
            frames: 0,
            outcome: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Mutable game access for scenario setup. Changes are not rendered until
    /// the next operation or frame.
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn phase(&self) -> Phase {
        self.game.phase()
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Frames processed while a round was running.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Final score and reason of the last finished round.
    pub fn outcome(&self) -> Option<(u32, GameOverReason)> {
        self.outcome
    }

    /// Begin a round. Ignored while one is running.
    pub fn start(&mut self) -> bool {
        if !self.game.start() {
            return false;
        }
        self.begin_round();
        true
    }

    /// Abandon whatever is going on and begin a fresh round.
    pub fn restart(&mut self) -> bool {
        self.game.restart();
        self.begin_round();
        true
    }

    fn begin_round(&mut self) {
        self.outcome = None;
        self.scheduler.start();
        self.view.set_start_enabled(false);
        self.after_change();
    }

    /// Apply one player action. Re-renders only when the state changed.
    pub fn handle(&mut self, action: GameAction) -> bool {
        if action == GameAction::Start {
            return self.start();
        }
        if !self.scheduler.is_active() {
            return false;
        }
        let changed = self.game.apply_action(action);
        if changed {
            trace!("applied {}", action.as_str());
            self.after_change();
        }
        changed
    }

    /// Run one frame of `elapsed_ms`.
    ///
    /// The countdown is processed before the drop; if it reaches zero the drop
    /// is skipped. Returns false when the frame was ignored because no round
    /// is running.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.game.is_running() || !self.scheduler.is_active() {
            return false;
        }
        self.frames += 1;

        let seconds = self.scheduler.countdown.advance(elapsed_ms);
        for _ in 0..seconds {
            self.game.tick_second();
            if !self.game.is_running() {
                break;
            }
        }

        if self.game.is_running() && self.scheduler.drop.advance(elapsed_ms) {
            self.game.soft_drop();
        }

        self.after_change();
        true
    }

    /// Stop both tasks. Later frames and actions are ignored until the next
    /// start.
    pub fn teardown(&mut self) {
        if self.scheduler.is_active() {
            debug!("session torn down after {} frames", self.frames);
        }
        self.scheduler.cancel_all();
    }

    /// Tear down and hand the view back.
    pub fn into_view(mut self) -> V {
        self.teardown();
        self.view
    }

    fn after_change(&mut self) {
        for event in self.game.take_events() {
            match event {
                GameEvent::LinesCleared { lines, points } => {
                    debug!("{} lines cleared, +{}", lines, points);
                }
                GameEvent::GameOver { score, reason } => {
                    self.outcome = Some((score, reason));
                }
                other => trace!("{:?}", other),
            }
        }

        let finished = self.game.phase() == Phase::GameOver && self.scheduler.is_active();
        if finished {
            self.scheduler.cancel_all();
        }

        render_game(&self.game, &mut self.view);

        if finished {
            let score = self.game.score();
            info!("round finished with score {}", score);
            self.view.game_over(score);
            self.view.set_start_enabled(true);
        }
    }
}
