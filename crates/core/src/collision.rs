//! Collision detection between a shape at an offset and the board.

use crate::board::Board;
use crate::shapes::ShapeMatrix;
use crate::types::Position;

/// Test whether `shape` placed at `position` overlaps the walls, the floor, or a
/// settled cell.
///
/// An occupied cell collides when its absolute column is outside `[0, width)`,
/// its absolute row is `>= height`, or it lands on a filled board cell. Rows
/// above the board (`y < 0`) are never checked, which lets pieces spawn and
/// rotate partially above row 0. Rows the board does not have are skipped.
pub fn collides(
    shape: &ShapeMatrix,
    position: Position,
    width: u8,
    height: u8,
    board: &Board,
) -> bool {
    shape.occupied().any(|(dx, dy)| {
        let x = position.x as i16 + dx as i16;
        let y = position.y as i16 + dy as i16;

        if x < 0 || x >= width as i16 || y >= height as i16 {
            return true;
        }
        if y < 0 {
            return false;
        }
        board.is_occupied(x as i8, y as i8)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::shape;
    use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

    fn hits(kind: PieceKind, x: i8, y: i8, board: &Board) -> bool {
        collides(
            &shape(kind),
            Position::new(x, y),
            BOARD_WIDTH,
            BOARD_HEIGHT,
            board,
        )
    }

    #[test]
    fn test_empty_board_spawn_is_clear() {
        let board = Board::new();
        assert!(!hits(PieceKind::T, 3, 0, &board));
    }

    #[test]
    fn test_left_wall() {
        let board = Board::new();
        // T occupies columns 0..=2 of its matrix.
        assert!(!hits(PieceKind::T, 0, 0, &board));
        assert!(hits(PieceKind::T, -1, 0, &board));
    }

    #[test]
    fn test_right_wall() {
        let board = Board::new();
        assert!(!hits(PieceKind::T, 7, 0, &board));
        assert!(hits(PieceKind::T, 8, 0, &board));
    }

    #[test]
    fn test_empty_matrix_columns_may_leave_the_board() {
        let board = Board::new();
        // L only fills columns 1 and 2, so column 0 may hang off the left wall.
        assert!(!hits(PieceKind::L, -1, 0, &board));
        assert!(hits(PieceKind::L, -2, 0, &board));
    }

    #[test]
    fn test_floor() {
        let board = Board::new();
        // O fills rows 0 and 1.
        assert!(!hits(PieceKind::O, 4, 18, &board));
        assert!(hits(PieceKind::O, 4, 19, &board));
    }

    #[test]
    fn test_above_top_never_collides() {
        let board = Board::new();
        assert!(!hits(PieceKind::O, 4, -1, &board));
        assert!(!hits(PieceKind::O, 4, -10, &board));
    }

    #[test]
    fn test_settled_cell() {
        let mut board = Board::new();
        board.set(4, 5, Some(PieceKind::Z));
        assert!(hits(PieceKind::O, 4, 4, &board));
        assert!(hits(PieceKind::O, 3, 5, &board));
        assert!(!hits(PieceKind::O, 5, 4, &board));
    }

    #[test]
    fn test_settled_cell_above_board_is_ignored() {
        let mut board = Board::new();
        board.set(4, 0, Some(PieceKind::Z));
        // Bottom row of the O sits at y = 0 only when origin y = -1.
        assert!(hits(PieceKind::O, 4, -1, &board));
        assert!(!hits(PieceKind::O, 4, -2, &board));
    }

    #[test]
    fn test_smaller_bounds_than_board() {
        let board = Board::new();
        // Bounds passed in win over the board's own size.
        assert!(!hits(PieceKind::O, 0, 3, &board));
        assert!(collides(
            &shape(PieceKind::O),
            Position::new(0, 3),
            10,
            4,
            &board
        ));
    }
}
