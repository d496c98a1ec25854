//! Session tests - timers, lifecycle and what the view receives

use tetris_sprint::engine::{GameSession, SessionConfig};
use tetris_sprint::term::Scene;
use tetris_sprint::types::{
    GameAction, GameOverReason, Phase, BOARD_HEIGHT, DROP_INTERVAL_MS, ROUND_SECONDS, TICK_MS,
};

fn session(seed: u32) -> GameSession<Scene> {
    GameSession::new(&SessionConfig::with_seed(seed), Scene::new())
}

/// Advance in 16 ms frames until `ms` have passed.
fn run_frames(session: &mut GameSession<Scene>, ms: u32) {
    let mut left = ms;
    while left > 0 {
        let step = left.min(TICK_MS);
        session.advance(step);
        left -= step;
    }
}

#[test]
fn test_scene_tracks_idle_session() {
    let session = session(1);
    let scene = session.view();

    assert!(scene.start_enabled);
    assert!(scene.active.is_none());
    assert_eq!(scene.time_remaining, ROUND_SECONDS);
    assert!(!scene.is_game_over());
}

#[test]
fn test_start_pushes_pieces_to_scene() {
    let mut session = session(1);
    assert!(session.handle(GameAction::Start));

    let scene = session.view();
    assert!(!scene.start_enabled);
    assert_eq!(scene.active, session.game().active());
    assert_eq!(scene.next, session.game().next());
    assert!(scene.held.is_none());
}

#[test]
fn test_piece_falls_once_per_drop_interval() {
    let mut session = session(6);
    session.start();
    let y0 = session.game().active().map(|p| p.position.y).unwrap_or_default();

    run_frames(&mut session, 3 * DROP_INTERVAL_MS + TICK_MS * 3);

    let y = session.view().active.map(|p| p.position.y).unwrap_or_default();
    assert_eq!(y, y0 + 3);
    assert_eq!(session.view().time_remaining, ROUND_SECONDS - 3);
}

#[test]
fn test_idle_pieces_lock_and_stack() {
    let mut session = session(6);
    session.start();

    // Enough time for the first piece to reach the floor and lock.
    run_frames(&mut session, (BOARD_HEIGHT as u32 + 2) * DROP_INTERVAL_MS);

    assert_eq!(session.phase(), Phase::Running);
    assert_eq!(session.view().board.occupied_count(), 4);
    assert!(session.view().active.is_some());
}

#[test]
fn test_unattended_round_ends() {
    let mut session = session(10);
    session.start();

    // Either the stack tops out or the clock runs down; both end the round.
    let mut elapsed = 0;
    while session.phase() == Phase::Running && elapsed < (ROUND_SECONDS + 5) * 1000 {
        session.advance(1000);
        elapsed += 1000;
    }

    assert_eq!(session.phase(), Phase::GameOver);
    assert!(session.view().is_game_over());
    assert!(session.view().start_enabled);
    assert!(!session.scheduler().is_active());
    let score = session.outcome().map(|(score, _)| score);
    assert!(score.is_some());
    assert_eq!(session.view().final_score, score);
}

#[test]
fn test_game_over_stops_timers_immediately() {
    let mut session = session(12);
    session.start();
    session.advance(ROUND_SECONDS * 1000);

    assert_eq!(session.outcome(), Some((0, GameOverReason::TimeUp)));
    let snapshot = session.view().clone();

    // Late frames change nothing.
    run_frames(&mut session, 5000);
    assert_eq!(session.view(), &snapshot);
}

#[test]
fn test_restart_from_game_over_clears_scene() {
    let mut session = session(12);
    session.start();
    session.handle(GameAction::Hold);
    session.advance(ROUND_SECONDS * 1000);
    assert!(session.view().is_game_over());

    assert!(session.handle(GameAction::Start));
    let scene = session.view();
    assert!(!scene.is_game_over());
    assert!(!scene.start_enabled);
    assert!(scene.held.is_none());
    assert_eq!(scene.score, 0);
    assert_eq!(scene.time_remaining, ROUND_SECONDS);
    assert_eq!(scene.board.occupied_count(), 0);
}

#[test]
fn test_config_seed_is_deterministic() {
    let mut a = session(99);
    let mut b = session(99);
    a.start();
    b.start();
    for _ in 0..30 {
        a.handle(GameAction::SoftDrop);
        b.handle(GameAction::SoftDrop);
    }
    assert_eq!(a.view(), b.view());
}
