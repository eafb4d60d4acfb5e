//! Board representation for move validation queries
//!
//! The rules only ever talk to a board through [`BoardQuery`] (and
//! [`BoardMut`] for applying a validated move), so a front end is free to keep
//! its own storage. [`CheckerBoard`] is the plain 8x8 array used by the session
//! and the tests.
//!
//! All queries are total: asking about a square off the board answers
//! "empty, no color" instead of panicking.

use std::fmt;
use std::str::FromStr;

use crate::error::{RulesError, RulesResult};
use crate::types::{Coord, PieceColor, BOARD_SIZE};

/// Read-only view of board occupancy
pub trait BoardQuery {
    fn in_bounds(&self, at: Coord) -> bool;

    /// Color of the piece at `at`, `None` for empty or off-board squares
    fn color_at(&self, at: Coord) -> Option<PieceColor>;

    fn is_empty(&self, at: Coord) -> bool {
        self.color_at(at).is_none()
    }

    fn is_white(&self, at: Coord) -> bool {
        self.color_at(at) == Some(PieceColor::White)
    }

    fn is_black(&self, at: Coord) -> bool {
        self.color_at(at) == Some(PieceColor::Black)
    }
}

/// Board mutation, only to be driven by moves that already passed validation
pub trait BoardMut: BoardQuery {
    /// Relocate the occupant of `from` to `to` and clear `from`
    fn move_piece(&mut self, from: Coord, to: Coord) -> RulesResult<()>;

    /// Clear a square, returning what was on it
    fn remove_piece(&mut self, at: Coord) -> RulesResult<Option<PieceColor>>;
}

const SIZE: usize = BOARD_SIZE as usize;

/// 8x8 checkers board, indexed `cells[y][x]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckerBoard {
    cells: [[Option<PieceColor>; SIZE]; SIZE],
}

impl CheckerBoard {
    /// An empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Board in the opening position
    pub fn setup_position() -> Self {
        let mut board = Self::new();
        board.setup();
        board
    }

    /// Reset to the opening position
    ///
    /// Black fills the dark squares of ranks 0-2, White those of ranks 5-7.
    pub fn setup(&mut self) {
        self.cells = [[None; SIZE]; SIZE];
        for y in 0..BOARD_SIZE {
            let color = match y {
                0..=2 => PieceColor::Black,
                5..=7 => PieceColor::White,
                _ => continue,
            };
            for x in 0..BOARD_SIZE {
                let at = Coord::new(x, y);
                if at.is_dark() {
                    self.cells[y as usize][x as usize] = Some(color);
                }
            }
        }
    }

    /// Place (or clear, with `None`) a piece
    pub fn set(&mut self, at: Coord, piece: Option<PieceColor>) -> RulesResult<()> {
        let (x, y) = self.index(at)?;
        self.cells[y][x] = piece;
        Ok(())
    }

    /// Number of pieces of the given color on the board
    pub fn count(&self, color: PieceColor) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(color))
            .count()
    }

    /// All occupied squares with their colors, rank by rank
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, PieceColor)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|c| (Coord::new(x as i32, y as i32), c)))
        })
    }

    fn index(&self, at: Coord) -> RulesResult<(usize, usize)> {
        if self.in_bounds(at) {
            Ok((at.x as usize, at.y as usize))
        } else {
            Err(RulesError::OffBoard { at })
        }
    }
}

impl BoardQuery for CheckerBoard {
    fn in_bounds(&self, at: Coord) -> bool {
        (0..BOARD_SIZE).contains(&at.x) && (0..BOARD_SIZE).contains(&at.y)
    }

    fn color_at(&self, at: Coord) -> Option<PieceColor> {
        let (x, y) = self.index(at).ok()?;
        self.cells[y][x]
    }
}

impl BoardMut for CheckerBoard {
    fn move_piece(&mut self, from: Coord, to: Coord) -> RulesResult<()> {
        let (fx, fy) = self.index(from)?;
        let (tx, ty) = self.index(to)?;
        let piece = self.cells[fy][fx].ok_or(RulesError::NoPieceAt { at: from })?;
        self.cells[fy][fx] = None;
        self.cells[ty][tx] = Some(piece);
        Ok(())
    }

    fn remove_piece(&mut self, at: Coord) -> RulesResult<Option<PieceColor>> {
        let (x, y) = self.index(at)?;
        Ok(self.cells[y][x].take())
    }
}

/// Parses an 8-line diagram, top line is rank 7
///
/// `w` / `W` is a white piece, `b` / `B` a black piece, `.` or `_` an empty
/// square. Whitespace inside a line and blank lines are ignored.
impl FromStr for CheckerBoard {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<(usize, Vec<char>)> = s
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.chars().filter(|c| !c.is_whitespace()).collect()))
            .filter(|(_, row): &(usize, Vec<char>)| !row.is_empty())
            .collect();

        if rows.len() != SIZE {
            return Err(RulesError::DiagramShape {
                line: rows.last().map_or(0, |(line, _)| *line),
                found: rows.len(),
            });
        }

        let mut board = CheckerBoard::new();
        for (row_idx, (line, row)) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(RulesError::DiagramShape {
                    line: *line,
                    found: row.len(),
                });
            }
            let y = SIZE - 1 - row_idx;
            for (x, ch) in row.iter().enumerate() {
                board.cells[y][x] = match ch {
                    'w' | 'W' => Some(PieceColor::White),
                    'b' | 'B' => Some(PieceColor::Black),
                    '.' | '_' => None,
                    other => {
                        return Err(RulesError::DiagramChar {
                            line: *line,
                            ch: *other,
                        })
                    }
                };
            }
        }
        Ok(board)
    }
}

impl fmt::Display for CheckerBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..SIZE).rev() {
            for x in 0..SIZE {
                let ch = match self.cells[y][x] {
                    Some(PieceColor::White) => 'w',
                    Some(PieceColor::Black) => 'b',
                    None => '.',
                };
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
