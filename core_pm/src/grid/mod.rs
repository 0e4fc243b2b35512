//! [`Grid`] is the square 2D array of [`CellKind`]s that the cursor moves around in
//!
//! See [`generate_grid`] to build one from a number of rows.

use crate::constants::{KEY_CODE_DOWN, KEY_CODE_LEFT, KEY_CODE_RIGHT, KEY_CODE_UP};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// What occupies a single cell of a [`Grid`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Part of the impassable outer ring
    Border,
    /// Walkable space
    Interior,
}

/// Enum for direction values.
///
/// The discriminants are the browser-style key codes of the matching arrow keys.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// -y
    Up = KEY_CODE_UP,
    /// +y
    Down = KEY_CODE_DOWN,
    /// -x
    Left = KEY_CODE_LEFT,
    /// +x
    #[default]
    Right = KEY_CODE_RIGHT,
}

impl Direction {
    /// All directions, in key code order
    pub fn get_all() -> [Direction; 4] {
        [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
        ]
    }

    /// Decode a key code; anything other than the four arrow keys is `None`
    pub fn from_key_code(code: u32) -> Option<Self> {
        u8::try_from(code)
            .ok()
            .and_then(|code| Direction::try_from(code).ok())
    }

    /// The key code that produces this direction
    pub fn key_code(self) -> u8 {
        self.into()
    }

    /// Unit step as `(dx, dy)`, where y increases downwards
    pub fn vector(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A location in the interior of a [`Grid`]
///
/// `(0, 0)` is the first interior cell, which sits at raw grid index `(1, 1)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column within the interior - increases to the right
    pub x: usize,
    /// Row within the interior - increases downwards
    pub y: usize,
}

impl Coordinate {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The raw `(row, col)` of the [`Grid`] cell this coordinate sits on
    pub fn grid_index(&self) -> (usize, usize) {
        (self.y + 1, self.x + 1)
    }
}

/// A square grid of [`CellKind`]s
///
/// The grid is indexed by `grid[(row, col)]`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<CellKind>>,
}

impl Grid {
    /// Number of rows, which is also the number of columns
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Width and height of the walkable interior
    pub fn interior_size(&self) -> usize {
        self.size().saturating_sub(2)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellKind> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = CellKind;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.cells[row][col]
    }
}

/// Build a `rows` x `rows` [`Grid`] with a one cell [`CellKind::Border`] around a
/// [`CellKind::Interior`]
///
/// No validation is done here; a size of 0 gives an empty grid, and sizes 1 and 2 are all
/// border.
///
/// # Examples
///
/// ```
/// use core_pm::grid::{generate_grid, CellKind};
///
/// let grid = generate_grid(4);
/// assert_eq!(grid.size(), 4);
/// assert_eq!(grid[(0, 2)], CellKind::Border);
/// assert_eq!(grid[(1, 2)], CellKind::Interior);
/// ```
pub fn generate_grid(rows: usize) -> Grid {
    let last = rows.saturating_sub(1);
    let cells = (0..rows)
        .map(|row| {
            (0..rows)
                .map(|col| {
                    if row == 0 || row == last || col == 0 || col == last {
                        CellKind::Border
                    } else {
                        CellKind::Interior
                    }
                })
                .collect()
        })
        .collect();

    Grid { cells }
}
