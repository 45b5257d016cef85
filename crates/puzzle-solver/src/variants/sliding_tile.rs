//! M×N sliding tile puzzle (15-puzzle family). The blank is `*`.

use std::fmt;
use std::rc::Rc;

use crate::error::{PuzzleError, Result};
use crate::puzzle::Puzzle;

use super::check_rectangular;

pub const BLANK: &str = "*";

/// Orthogonal neighbours of the blank, in the order moves are generated
const MOVES: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlidingTile {
    rows: usize,
    cols: usize,
    /// Row-major cells of the current configuration
    cells: Vec<String>,
    target: Rc<Vec<String>>,
}

fn to_cells<R, S>(grid: &[R]) -> Vec<Vec<String>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    grid.iter()
        .map(|row| row.as_ref().iter().map(|s| s.as_ref().to_string()).collect())
        .collect()
}

fn count_blanks(cells: &[String]) -> usize {
    cells.iter().filter(|c| c.as_str() == BLANK).count()
}

impl SlidingTile {
    /// Puzzle in configuration `from` working towards `to`
    pub fn new<R, S>(from: &[R], to: &[R]) -> Result<Self>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let from = to_cells(from);
        let to = to_cells(to);
        let cols = check_rectangular(&from)?;
        let to_cols = check_rectangular(&to)?;
        if from.len() != to.len() || cols != to_cols {
            return Err(PuzzleError::DimensionMismatch {
                from_rows: from.len(),
                from_cols: cols,
                to_rows: to.len(),
                to_cols,
            });
        }

        let rows = from.len();
        let cells: Vec<String> = from.into_iter().flatten().collect();
        let target: Vec<String> = to.into_iter().flatten().collect();
        for (grid, found) in [("start", count_blanks(&cells)), ("target", count_blanks(&target))] {
            if found != 1 {
                return Err(PuzzleError::BlankCount { grid, found });
            }
        }

        Ok(Self {
            rows,
            cols,
            cells,
            target: Rc::new(target),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(&self.cells[row * self.cols + col])
    }

    /// (row, col) of the blank
    pub fn blank(&self) -> (usize, usize) {
        let index = self
            .cells
            .iter()
            .position(|c| c.as_str() == BLANK)
            .unwrap_or_default();
        (index / self.cols, index % self.cols)
    }
}

impl fmt::Display for SlidingTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Puzzle for SlidingTile {
    fn extensions(&self) -> Vec<Self> {
        let (row, col) = self.blank();
        let blank = row * self.cols + col;
        MOVES
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr).filter(|&r| r < self.rows)?;
                let c = col.checked_add_signed(dc).filter(|&c| c < self.cols)?;
                let mut next = self.clone();
                next.cells.swap(blank, r * self.cols + c);
                Some(next)
            })
            .collect()
    }

    fn is_solved(&self) -> bool {
        self.cells == *self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOAL: [[&str; 3]; 2] = [["1", "2", "3"], ["4", "5", "*"]];

    fn puzzle(from: [[&str; 3]; 2]) -> SlidingTile {
        SlidingTile::new(&from, &GOAL).unwrap()
    }

    #[test]
    fn test_corner_blank_has_two_extensions() {
        let p = puzzle([["*", "2", "3"], ["4", "5", "1"]]);
        let next = p.extensions();
        assert_eq!(next.len(), 2);
        assert!(next.contains(&puzzle([["2", "*", "3"], ["4", "5", "1"]])));
        assert!(next.contains(&puzzle([["4", "2", "3"], ["*", "5", "1"]])));

        let p = puzzle([["1", "2", "3"], ["4", "5", "*"]]);
        assert_eq!(p.extensions().len(), 2);
    }

    #[test]
    fn test_edge_blank_has_three_extensions() {
        let p = puzzle([["2", "*", "3"], ["4", "5", "1"]]);
        assert_eq!(p.extensions().len(), 3);

        let p = puzzle([["1", "2", "3"], ["4", "*", "5"]]);
        assert_eq!(p.extensions().len(), 3);
    }

    #[test]
    fn test_is_solved() {
        assert!(puzzle(GOAL).is_solved());
        assert!(!puzzle([["*", "2", "3"], ["4", "5", "1"]]).is_solved());
    }

    #[test]
    fn test_cell_lookup_and_blank() {
        let p = puzzle([["2", "*", "3"], ["4", "5", "1"]]);
        assert_eq!(p.get(0, 0), Some("2"));
        assert_eq!(p.get(1, 2), Some("1"));
        assert_eq!(p.get(2, 0), None);
        assert_eq!(p.get(0, 3), None);
        assert_eq!(p.blank(), (0, 1));
    }

    #[test]
    fn test_display() {
        let p = puzzle([["*", "2", "3"], ["4", "5", "1"]]);
        assert_eq!(p.to_string(), "\n * 2 3\n 4 5 1\n");
    }

    #[test]
    fn test_equality_is_structural() {
        let a = puzzle([["*", "2", "3"], ["4", "5", "1"]]);
        let b = puzzle([["*", "2", "3"], ["4", "5", "1"]]);
        assert_eq!(a, b);
        let swapped = SlidingTile::new(&GOAL, &[["*", "2", "3"], ["4", "5", "1"]]).unwrap();
        assert_ne!(puzzle(GOAL), swapped);
    }

    #[test]
    fn test_rejects_bad_grids() {
        let ragged: [&[&str]; 2] = [&["*", "1"], &["2"]];
        assert!(matches!(
            SlidingTile::new(&ragged, &ragged),
            Err(PuzzleError::RaggedGrid { row: 1, .. })
        ));

        let wide = [["*", "1", "2"]];
        assert!(matches!(
            SlidingTile::new(&wide, &GOAL),
            Err(PuzzleError::DimensionMismatch { from_rows: 1, to_rows: 2, .. })
        ));

        let small = [["*", "1"]];

        let no_blank = [["1", "2"]];
        assert!(matches!(
            SlidingTile::new(&no_blank, &small),
            Err(PuzzleError::BlankCount { grid: "start", found: 0 })
        ));

        let empty: [[&str; 0]; 0] = [];
        assert!(matches!(
            SlidingTile::new(&empty, &empty),
            Err(PuzzleError::EmptyGrid)
        ));
    }
}
