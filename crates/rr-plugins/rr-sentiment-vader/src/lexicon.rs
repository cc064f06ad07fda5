//! Valence lexicon: lowercase word to rating on the `[-4, 4]` scale.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::default_words::VALENCES;

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    let mut lexicon = Lexicon::new();
    for (word, valence) in VALENCES {
        lexicon.insert(word, *valence);
    }
    lexicon
});

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon entry at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashMap<String, f64>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in vocabulary.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Adds or replaces a word. Valences are clamped to `[-4, 4]`.
    pub fn insert(&mut self, word: &str, valence: f64) {
        self.words
            .insert(word.to_lowercase(), valence.clamp(-4.0, 4.0));
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Existing words are overwritten by `other`'s values.
    pub fn merge(&mut self, other: Lexicon) {
        self.words.extend(other.words);
    }

    /// Parses VADER-format text: `word<TAB>mean[<TAB>anything...]` per line.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self, LexiconError> {
        let mut lexicon = Self::new();
        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let word = fields.next().unwrap_or_default().trim();
            let mean = fields.next().ok_or_else(|| LexiconError::Parse {
                line: line_no,
                reason: "missing valence column".to_string(),
            })?;
            if word.is_empty() {
                return Err(LexiconError::Parse {
                    line: line_no,
                    reason: "empty word".to_string(),
                });
            }
            let valence: f64 = mean.trim().parse().map_err(|e| LexiconError::Parse {
                line: line_no,
                reason: format!("valence '{}': {e}", mean.trim()),
            })?;
            lexicon.insert(word, valence);
        }
        Ok(lexicon)
    }

    pub fn from_file(path: &Path) -> Result<Self, LexiconError> {
        let text = fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }
}
