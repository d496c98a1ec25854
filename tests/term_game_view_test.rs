use tetris_sprint::engine::{GameSession, SessionConfig};
use tetris_sprint::term::{AnchorY, FrameBuffer, GameView, Scene, Viewport};
use tetris_sprint::types::{GameAction, PieceKind, ROUND_SECONDS};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // 10*2 by 20*1 board cells plus the border => 22x22.
    let fb = view.render(&Scene::new(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut scene = Scene::new();
    scene.start_enabled = false;
    scene.board.set(0, 19, Some(PieceKind::I));

    let fb = GameView::default().render(&scene, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_custom_cell_size() {
    let mut scene = Scene::new();
    scene.start_enabled = false;
    scene.board.set(9, 0, Some(PieceKind::O));

    let view = GameView::new(1, 1).with_anchor_y(AnchorY::Top);
    let fb = view.render(&scene, Viewport::new(12, 22));

    assert_eq!(fb.get(10, 1).unwrap().ch, '█');
    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
}

#[test]
fn term_view_follows_session() {
    let mut session = GameSession::new(&SessionConfig::with_seed(4), Scene::new());
    let view = GameView::default();
    let vp = view.required_viewport();

    let idle = screen_text(&view.render(session.view(), vp));
    assert!(idle.contains("PRESS ENTER"));

    session.handle(GameAction::Start);
    let running = view.render(session.view(), vp);
    let text = screen_text(&running);
    assert!(!text.contains("PRESS ENTER"));
    assert!(text.contains("SCORE"));
    assert!(text.contains(&ROUND_SECONDS.to_string()));

    // The falling piece is on screen in its own color, bold.
    let bold_blocks = running
        .cells()
        .iter()
        .filter(|c| c.ch == '█' && c.style.bold)
        .count();
    assert_eq!(bold_blocks, 4 * 2);

    session.advance(ROUND_SECONDS * 1000);
    let over = screen_text(&view.render(session.view(), vp));
    assert!(over.contains("GAME OVER"));
    assert!(over.contains("SCORE 0"));
}

#[test]
fn term_view_shows_hold_after_hold_action() {
    let mut session = GameSession::new(&SessionConfig::with_seed(4), Scene::new());
    session.start();
    let held = session.game().active().map(|p| p.kind);
    session.handle(GameAction::Hold);
    assert_eq!(session.view().held, held);

    let view = GameView::default();
    let fb = view.render(session.view(), view.required_viewport());
    let blocks = fb.cells().iter().filter(|c| c.ch == '█').count();
    // Active, next and held pieces: 3 pieces x 4 cells x 2 columns.
    assert_eq!(blocks, 3 * 4 * 2);
}
