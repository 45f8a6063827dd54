//! I-Sub string similarity.
//!
//! `isub` scores two strings in `[0, 1]` by repeatedly extracting their longest
//! common substring, penalizing whatever is left unmatched with a Hamacher
//! product, and boosting a shared prefix Winkler-style. Scoring is
//! deterministic: identical inputs always produce identical outputs.
//!
//! ```
//! let sim = isub::score("E56.Language", "languange", true).unwrap();
//! assert!((sim - 0.711348).abs() < 1e-5);
//! ```

pub mod matching;
pub mod scoring;
pub mod text;
pub mod types;

pub use scoring::{
    explain, score, score_chars, score_in_place, score_in_place_with, score_with, IsubScorer,
    Scorer,
};
pub use types::{ScoreBreakdown, ScoreError, ScoreOptions};
