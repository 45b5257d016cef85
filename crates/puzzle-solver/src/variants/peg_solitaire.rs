//! Peg solitaire on a rectangular grid.
//!
//! Markers: `*` peg, `.` hole, `#` unused cell. A move jumps a peg over an
//! orthogonally adjacent peg into a hole directly behind it, removing the
//! jumped peg. The puzzle is solved when a single peg remains.

use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::puzzle::Puzzle;

use super::check_rectangular;

pub const PEG: char = '*';
pub const HOLE: char = '.';
pub const UNUSED: char = '#';

/// Jump directions in generation order: left, right, up, down
const JUMPS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PegSolitaire {
    grid: Vec<Vec<char>>,
}

impl PegSolitaire {
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let grid: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        check_rectangular(&grid)?;
        for (row, cells) in grid.iter().enumerate() {
            if let Some((col, &marker)) = cells
                .iter()
                .enumerate()
                .find(|(_, m)| !matches!(**m, PEG | HOLE | UNUSED))
            {
                return Err(PuzzleError::InvalidMarker { marker, row, col });
            }
        }
        Ok(Self { grid })
    }

    /// Rows rendered as marker strings
    pub fn rows(&self) -> Vec<String> {
        self.grid.iter().map(|r| r.iter().collect()).collect()
    }

    pub fn peg_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&m| m == PEG).count()
    }

    /// Cell `(row + dr, col + dc)` if it lies on the board
    fn offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (c < self.grid.get(r)?.len()).then_some((r, c))
    }
}

impl fmt::Display for PegSolitaire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in &self.grid {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Puzzle for PegSolitaire {
    fn extensions(&self) -> Vec<Self> {
        let mut next = Vec::new();
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, &marker) in cells.iter().enumerate() {
                if marker != PEG {
                    continue;
                }
                for &(dr, dc) in &JUMPS {
                    let (Some(over), Some(land)) = (
                        self.offset(row, col, dr, dc),
                        self.offset(row, col, 2 * dr, 2 * dc),
                    ) else {
                        continue;
                    };
                    if self.grid[over.0][over.1] != PEG || self.grid[land.0][land.1] != HOLE {
                        continue;
                    }
                    let mut jumped = self.clone();
                    jumped.grid[row][col] = HOLE;
                    jumped.grid[over.0][over.1] = HOLE;
                    jumped.grid[land.0][land.1] = PEG;
                    next.push(jumped);
                }
            }
        }
        next
    }

    fn is_solved(&self) -> bool {
        self.peg_count() == 1
    }
}
