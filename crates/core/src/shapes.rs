//! Shapes module - tetromino definitions and matrix rotation
//!
//! Every piece kind maps to a square 0/1 matrix (2x2 for O, 3x3 for T/L/J/S/Z,
//! 4x4 for I) and a display color. The definitions are constants; rotating a
//! piece builds a new matrix and never touches them.

use crate::types::PieceKind;

/// Largest bounding box side of any piece.
pub const MAX_SHAPE_SIZE: usize = 4;

/// A square shape matrix of side `size` (2..=4), stored padded in a 4x4 array.
///
/// Rows are indexed first: `cells[y][x]`. Cells outside `size x size` are always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix from padded rows. `size` must be in `1..=4`.
    pub const fn new(size: u8, cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        assert!(size >= 1 && size as usize <= MAX_SHAPE_SIZE);
        Self { size, cells }
    }

    /// Build a matrix from square rows (test and tooling helper).
    ///
    /// Returns `None` when the rows are not square or larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_SHAPE_SIZE || rows.iter().any(|r| r.len() != size) {
            return None;
        }
        let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = u8::from(v != 0);
            }
        }
        Some(Self {
            size: size as u8,
            cells,
        })
    }

    /// Side length of the bounding box.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at column `x`, row `y` is filled. Out of range is empty.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.cells[y][x] != 0
    }

    /// Occupied cells as `(x, y)` offsets from the matrix origin, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let n = self.size as usize;
        (0..n).flat_map(move |y| {
            (0..n).filter_map(move |x| {
                if self.cells[y][x] != 0 {
                    Some((x as i8, y as i8))
                } else {
                    None
                }
            })
        })
    }

    /// Rows of the matrix, trimmed to `size`.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells[..self.size as usize]
            .iter()
            .map(move |row| &row[..self.size as usize])
    }
}

const I_SHAPE: ShapeMatrix = ShapeMatrix::new(
    4,
    [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const O_SHAPE: ShapeMatrix = ShapeMatrix::new(
    2,
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const T_SHAPE: ShapeMatrix = ShapeMatrix::new(
    3,
    [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const L_SHAPE: ShapeMatrix = ShapeMatrix::new(
    3,
    [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
);

const J_SHAPE: ShapeMatrix = ShapeMatrix::new(
    3,
    [[0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
);

const S_SHAPE: ShapeMatrix = ShapeMatrix::new(
    3,
    [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

const Z_SHAPE: ShapeMatrix = ShapeMatrix::new(
    3,
    [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
);

/// Unrotated shape for a piece kind.
pub fn shape(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}

/// Display color of a piece kind as `[r, g, b]`.
pub fn color(kind: PieceKind) -> [u8; 3] {
    match kind {
        PieceKind::I => [0x0c, 0x96, 0xa2],
        PieceKind::O => [0xff, 0xff, 0x00],
        PieceKind::T => [0xaa, 0x00, 0xff],
        PieceKind::L => [0xff, 0x99, 0x00],
        PieceKind::J => [0x00, 0x00, 0xff],
        PieceKind::S => [0x00, 0xff, 0x00],
        PieceKind::Z => [0xff, 0x00, 0x00],
    }
}

/// Rotate a matrix 90° clockwise: `out[i][j] = in[n-1-j][i]`.
pub fn rotate(matrix: &ShapeMatrix) -> ShapeMatrix {
    let n = matrix.size as usize;
    let mut cells = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for (i, row) in cells.iter_mut().enumerate().take(n) {
        for (j, cell) in row.iter_mut().enumerate().take(n) {
            *cell = matrix.cells[n - 1 - j][i];
        }
    }
    ShapeMatrix {
        size: matrix.size,
        cells,
    }
}
