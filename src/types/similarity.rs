use std::collections::TryReserveError;

use serde::{Deserialize, Serialize};

/// One span stripped from both working buffers during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    pub len: usize,
    /// False for the final span that was too short to count.
    pub counted: bool,
}

/// Every intermediate term of a similarity computation.
/// Field order is part of the serialized contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Lengths after normalization, before extraction.
    pub len1: usize,
    pub len2: usize,
    pub common_prefix_len: usize,

    pub fragments: Vec<Fragment>,
    pub common: usize,

    pub commonality: f64,
    pub dissimilarity: f64,
    pub winkler_bonus: f64,

    /// Raw result in `[-1, 1]`.
    pub result: f64,
    /// The value returned to callers, honouring `zero_to_one`.
    pub similarity: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("Failed to allocate working buffer: {0}")]
    Allocation(#[from] TryReserveError),
}
