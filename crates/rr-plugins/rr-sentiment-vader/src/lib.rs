//! # rr-sentiment-vader
//!
//! Rule-based `SentimentScorer` in the style of VADER (Valence Aware
//! Dictionary and sEntiment Reasoner).
//!
//! Each token gets a valence from the [`Lexicon`], adjusted by:
//! - ALL-CAPS emphasis when the text mixes case,
//! - booster and dampener words up to three tokens before it,
//! - negations up to three tokens before it,
//! - a contrastive "but" (earlier clause halved, later clause weighted up),
//! - trailing `!` and `?` emphasis.
//!
//! The summed valence is squashed into `[-1, 1]` for `compound`, and the
//! per-token valences are split into `neg` / `neu` / `pos` proportions.

mod default_words;
pub mod lexicon;

use std::path::Path;

use rr_core::models::SentimentScores;
use rr_core::traits::SentimentScorer;

use crate::default_words::{DAMPENERS, INCREASERS, NEGATIONS};
pub use crate::lexicon::{Lexicon, LexiconError};

const BOOSTER_INCR: f64 = 0.293;
const BOOSTER_DECR: f64 = -0.293;
const CAPS_INCR: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
/// Approximates the maximum expected summed valence.
const NORMALIZE_ALPHA: f64 = 15.0;
const EXCLAIM_INCR: f64 = 0.292;
const MAX_EXCLAIMS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;

#[derive(Debug, Clone)]
pub struct VaderScorer {
    lexicon: Lexicon,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new(Lexicon::builtin())
    }
}

impl VaderScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Built-in vocabulary extended (and overridden) by a VADER-format file.
    pub fn with_lexicon_file(path: &Path) -> Result<Self, LexiconError> {
        let mut lexicon = Lexicon::builtin();
        let extra = Lexicon::from_file(path)?;
        tracing::info!(path = %path.display(), words = extra.len(), "extra lexicon loaded");
        lexicon.merge(extra);
        Ok(Self::new(lexicon))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScores::default();
        }
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = is_cap_diff(&tokens);

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| self.token_valence(&tokens, &lowered, i, cap_diff))
            .collect();
        apply_but_contrast(&lowered, &mut valences);

        score_valences(&valences, punctuation_emphasis(text))
    }

    fn token_valence(&self, tokens: &[&str], lowered: &[String], i: usize, cap_diff: bool) -> f64 {
        let word = lowered[i].as_str();
        if is_booster(word) {
            return 0.0;
        }
        let Some(mut valence) = self.lexicon.get(word) else {
            return 0.0;
        };

        if cap_diff && is_upper(tokens[i]) {
            valence += CAPS_INCR.copysign(valence);
        }

        for distance in 1..=3usize {
            if i < distance {
                break;
            }
            let j = i - distance;
            if self.lexicon.contains(&lowered[j]) {
                continue;
            }
            let mut scalar = booster_scalar(tokens[j], &lowered[j], valence, cap_diff);
            match distance {
                2 => scalar *= 0.95,
                3 => scalar *= 0.9,
                _ => {}
            }
            valence += scalar;
            if is_negation(&lowered[j]) {
                valence *= NEGATION_SCALAR;
            }
        }
        valence
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> SentimentScores {
        self.polarity_scores(text)
    }
}

/// Whitespace tokens with edge punctuation removed; single characters dropped.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|raw| {
            let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.is_empty() {
                raw
            } else {
                stripped
            }
        })
        .filter(|t| t.chars().count() > 1)
        .collect()
}

fn is_upper(token: &str) -> bool {
    let mut letters = token.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(char::is_uppercase)
}

/// True when some, but not all, tokens are shouted.
fn is_cap_diff(tokens: &[&str]) -> bool {
    let shouted = tokens.iter().filter(|t| is_upper(t)).count();
    shouted > 0 && shouted < tokens.len()
}

fn is_booster(word: &str) -> bool {
    INCREASERS.contains(&word) || DAMPENERS.contains(&word)
}

fn is_negation(word: &str) -> bool {
    let squashed = word.replace('\'', "");
    NEGATIONS.contains(&squashed.as_str()) || word.contains("n't")
}

fn booster_scalar(token: &str, word: &str, valence: f64, cap_diff: bool) -> f64 {
    let base = if INCREASERS.contains(&word) {
        BOOSTER_INCR
    } else if DAMPENERS.contains(&word) {
        BOOSTER_DECR
    } else {
        return 0.0;
    };
    let mut scalar = if valence < 0.0 { -base } else { base };
    if cap_diff && is_upper(token) {
        scalar += CAPS_INCR.copysign(valence);
    }
    scalar
}

/// Text after the first "but" carries more weight than text before it.
fn apply_but_contrast(lowered: &[String], valences: &mut [f64]) {
    if let Some(pivot) = lowered.iter().position(|w| w == "but") {
        for (i, v) in valences.iter_mut().enumerate() {
            if i < pivot {
                *v *= 0.5;
            } else if i > pivot {
                *v *= 1.5;
            }
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclaims = text.matches('!').count().min(MAX_EXCLAIMS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => MAX_QUESTION_EMPHASIS,
    };
    exclaims as f64 * EXCLAIM_INCR + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZE_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn score_valences(valences: &[f64], emphasis: f64) -> SentimentScores {
    let mut sum: f64 = valences.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }
    let compound = normalize(sum);

    // Shift non-zero valences away from zero so weak words still register.
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neutral_count = 0usize;
    for &v in valences {
        if v > 0.0 {
            pos_sum += v + 1.0;
        } else if v < 0.0 {
            neg_sum += v - 1.0;
        } else {
            neutral_count += 1;
        }
    }
    if pos_sum > neg_sum.abs() {
        pos_sum += emphasis;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= emphasis;
    }

    let total = pos_sum + neg_sum.abs() + neutral_count as f64;
    if total == 0.0 {
        return SentimentScores::default();
    }
    SentimentScores {
        negative: round_to((neg_sum / total).abs(), 3),
        neutral: round_to(neutral_count as f64 / total, 3),
        positive: round_to(pos_sum / total, 3),
        compound: round_to(compound, 4),
    }
}
