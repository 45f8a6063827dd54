pub mod options;
pub mod similarity;

pub use options::{ScoreOptions, DEFAULT_SUBSTRING_THRESHOLD};
pub use similarity::{Fragment, ScoreBreakdown, ScoreError};
