//! JSON description of a puzzle instance.
//!
//! ```json
//! {"kind": "word_ladder", "from": "cost", "to": "save", "words": ["cost", "cast"]}
//! {"kind": "sliding_tile", "from": [["*", "2"], ["1", "3"]], "to": [["1", "2"], ["3", "*"]]}
//! {"kind": "peg_solitaire", "grid": ["**.*."], "strategy": "dfs"}
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::solver::SearchStrategy;
use crate::variants::{PegSolitaire, SlidingTile, WordLadder};

/// A puzzle instance plus the strategy it prefers, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    #[serde(flatten)]
    pub puzzle: PuzzleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<SearchStrategy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PuzzleKind {
    WordLadder(WordLadderSpec),
    SlidingTile(SlidingTileSpec),
    PegSolitaire(PegSolitaireSpec),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordLadderSpec {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub words: Vec<String>,
    /// Whitespace-separated word list, merged with `words`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlidingTileSpec {
    pub from: Vec<Vec<String>>,
    pub to: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PegSolitaireSpec {
    pub grid: Vec<String>,
}

/// A constructed puzzle of any supported variant
#[derive(Debug, Clone)]
pub enum AnyPuzzle {
    WordLadder(WordLadder),
    SlidingTile(SlidingTile),
    PegSolitaire(PegSolitaire),
}

fn read_word_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

impl WordLadderSpec {
    pub fn build(&self) -> Result<WordLadder> {
        let mut words = self.words.clone();
        if let Some(path) = &self.words_file {
            words.extend(read_word_list(path)?);
        }
        WordLadder::new(&self.from, &self.to, words)
    }
}

impl SlidingTileSpec {
    pub fn build(&self) -> Result<SlidingTile> {
        SlidingTile::new(self.from.as_slice(), self.to.as_slice())
    }
}

impl PegSolitaireSpec {
    pub fn build(&self) -> Result<PegSolitaire> {
        PegSolitaire::new(self.grid.as_slice())
    }
}

impl PuzzleKind {
    pub fn build(&self) -> Result<AnyPuzzle> {
        Ok(match self {
            PuzzleKind::WordLadder(spec) => AnyPuzzle::WordLadder(spec.build()?),
            PuzzleKind::SlidingTile(spec) => AnyPuzzle::SlidingTile(spec.build()?),
            PuzzleKind::PegSolitaire(spec) => AnyPuzzle::PegSolitaire(spec.build()?),
        })
    }
}

impl PuzzleDefinition {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn build(&self) -> Result<AnyPuzzle> {
        self.puzzle.build()
    }
}
