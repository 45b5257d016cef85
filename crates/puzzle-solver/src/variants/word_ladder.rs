//! Word ladder: change one letter per move, staying inside a vocabulary.

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error::{PuzzleError, Result};
use crate::puzzle::Puzzle;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Current word, target word and the shared vocabulary
#[derive(Debug, Clone)]
pub struct WordLadder {
    word: String,
    target: String,
    vocabulary: Rc<BTreeSet<String>>,
}

fn check_word(word: &str) -> Result<()> {
    if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(PuzzleError::InvalidWord {
            word: word.to_string(),
        });
    }
    Ok(())
}

impl WordLadder {
    pub fn new<I, S>(from: &str, to: &str, vocabulary: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        check_word(from)?;
        check_word(to)?;
        Ok(Self {
            word: from.to_string(),
            target: to.to_string(),
            vocabulary: Rc::new(vocabulary.into_iter().map(Into::into).collect()),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn vocabulary(&self) -> &BTreeSet<String> {
        &self.vocabulary
    }

    fn step_to(&self, word: String) -> Self {
        Self {
            word,
            target: self.target.clone(),
            vocabulary: Rc::clone(&self.vocabulary),
        }
    }
}

impl PartialEq for WordLadder {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
            && self.target == other.target
            && (Rc::ptr_eq(&self.vocabulary, &other.vocabulary)
                || self.vocabulary == other.vocabulary)
    }
}

impl Eq for WordLadder {}

impl Hash for WordLadder {
    // Vocabulary left out; equal values still hash equally
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
        self.target.hash(state);
    }
}

impl fmt::Display for WordLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.word, self.target)
    }
}

impl Puzzle for WordLadder {
    fn extensions(&self) -> Vec<Self> {
        let mut next = Vec::new();
        let mut candidate = self.word.clone().into_bytes();
        for i in 0..candidate.len() {
            let original = candidate[i];
            for &c in ALPHABET {
                if c == original {
                    continue;
                }
                candidate[i] = c;
                // Only ascii letters are ever written, so this stays valid utf-8
                if let Ok(word) = std::str::from_utf8(&candidate) {
                    if self.vocabulary.contains(word) {
                        next.push(self.step_to(word.to_string()));
                    }
                }
            }
            candidate[i] = original;
        }
        next
    }

    fn is_solved(&self) -> bool {
        self.word == self.target
    }

    /// Substitutions never change length
    fn fail_fast(&self) -> bool {
        self.word.len() != self.target.len()
    }
}
