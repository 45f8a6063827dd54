use serde::{Deserialize, Serialize};

/// Spans of this length or shorter never count toward the common length.
pub const DEFAULT_SUBSTRING_THRESHOLD: usize = 2;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreOptions {
    /// Lowercase both strings and delete `.`, `_` and space before comparing.
    pub normalize: bool,
    /// Map the raw result from `[-1, 1]` onto `[0, 1]`.
    pub zero_to_one: bool,
    /// A stripped span counts only when strictly longer than this.
    pub substring_threshold: usize,
}

impl ScoreOptions {
    /// The canonical I-Sub configuration.
    pub fn isub() -> Self {
        Self {
            normalize: false,
            zero_to_one: true,
            substring_threshold: DEFAULT_SUBSTRING_THRESHOLD,
        }
    }

    pub fn normalized() -> Self {
        Self {
            normalize: true,
            ..Self::isub()
        }
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self::isub()
    }
}
