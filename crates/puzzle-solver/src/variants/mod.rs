//! Concrete puzzle variants.
//!
//! Each type implements [`crate::Puzzle`] and nothing in the solvers knows
//! about them.

pub mod peg_solitaire;
pub mod sliding_tile;
pub mod word_ladder;

pub use peg_solitaire::PegSolitaire;
pub use sliding_tile::SlidingTile;
pub use word_ladder::WordLadder;

/// Check that `rows` is non-empty and rectangular, returning its width
fn check_rectangular<T>(rows: &[Vec<T>]) -> crate::error::Result<usize> {
    let width = rows.first().ok_or(crate::PuzzleError::EmptyGrid)?.len();
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != width {
            return Err(crate::PuzzleError::RaggedGrid {
                row,
                expected: width,
                got: cells.len(),
            });
        }
    }
    Ok(width)
}
