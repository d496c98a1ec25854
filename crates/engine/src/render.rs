//! Collaborator interfaces the session pushes state into.

use crate::core::{Board, Game, Tetromino};
use crate::types::PieceKind;

/// Draws the playfield and piece previews.
pub trait RenderSink {
    fn draw_board(&mut self, board: &Board);
    /// `None` while no piece is falling (idle, or after the final lock).
    fn draw_active_piece(&mut self, piece: Option<&Tetromino>);
    fn draw_next_piece(&mut self, kind: Option<PieceKind>);
    fn draw_held_piece(&mut self, kind: Option<PieceKind>);
}

/// Text and control surface next to the playfield.
pub trait DisplaySink {
    fn show_score(&mut self, score: u32);
    fn show_time_remaining(&mut self, seconds: u32);
    /// The round ended with `final_score`.
    fn game_over(&mut self, final_score: u32);
    /// Whether the start/restart control is usable.
    fn set_start_enabled(&mut self, enabled: bool);
}

/// Push one complete snapshot of `game` to `sink`.
pub fn render_game<S: RenderSink + DisplaySink + ?Sized>(game: &Game, sink: &mut S) {
    sink.draw_board(game.board());
    let active = game.active();
    sink.draw_active_piece(active.as_ref());
    sink.draw_next_piece(game.next());
    sink.draw_held_piece(game.held());
    sink.show_score(game.score());
    sink.show_time_remaining(game.time_remaining());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Calls(Vec<String>);

    impl RenderSink for Calls {
        fn draw_board(&mut self, board: &Board) {
            self.0.push(format!("board:{}", board.occupied_count()));
        }
        fn draw_active_piece(&mut self, piece: Option<&Tetromino>) {
            self.0.push(format!("active:{:?}", piece.map(|p| p.kind)));
        }
        fn draw_next_piece(&mut self, kind: Option<PieceKind>) {
            self.0.push(format!("next:{:?}", kind));
        }
        fn draw_held_piece(&mut self, kind: Option<PieceKind>) {
            self.0.push(format!("held:{:?}", kind));
        }
    }

    impl DisplaySink for Calls {
        fn show_score(&mut self, score: u32) {
            self.0.push(format!("score:{}", score));
        }
        fn show_time_remaining(&mut self, seconds: u32) {
            self.0.push(format!("time:{}", seconds));
        }
        fn game_over(&mut self, final_score: u32) {
            self.0.push(format!("over:{}", final_score));
        }
        fn set_start_enabled(&mut self, enabled: bool) {
            self.0.push(format!("start:{}", enabled));
        }
    }

    #[test]
    fn test_render_idle_game() {
        let game = Game::new(1);
        let mut calls = Calls::default();
        render_game(&game, &mut calls);

        assert_eq!(
            calls.0,
            vec![
                "board:0",
                "active:None",
                "next:None",
                "held:None",
                "score:0",
                "time:180",
            ]
        );
    }

    #[test]
    fn test_render_running_game_reports_pieces() {
        let mut game = Game::new(7);
        game.start();
        let mut calls = Calls::default();
        render_game(&game, &mut calls);

        let active = game.active().map(|p| p.kind);
        assert_eq!(calls.0[1], format!("active:{:?}", active));
        assert_eq!(calls.0[2], format!("next:{:?}", game.next()));
        assert_eq!(calls.0.len(), 6);
    }
}
