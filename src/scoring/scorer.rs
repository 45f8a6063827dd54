use crate::types::{ScoreBreakdown, ScoreError, ScoreOptions};

pub trait Scorer {
    fn breakdown(&self, a: &str, b: &str) -> Result<ScoreBreakdown, ScoreError>;

    fn similarity(&self, a: &str, b: &str) -> Result<f64, ScoreError> {
        let similarity = self.breakdown(a, b)?.similarity;
        debug_assert!(!similarity.is_nan(), "similarity is NaN");
        Ok(similarity)
    }
}

/// I-Sub ("A String Metric For Ontology Alignment", Stoilos et al., ISWC 2005)
#[derive(Debug, Clone, Copy, Default)]
pub struct IsubScorer {
    options: ScoreOptions,
}

impl IsubScorer {
    pub fn new(options: ScoreOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ScoreOptions {
        &self.options
    }
}

impl Scorer for IsubScorer {
    fn breakdown(&self, a: &str, b: &str) -> Result<ScoreBreakdown, ScoreError> {
        super::explain(a, b, &self.options)
    }

    // Skips fragment capture.
    fn similarity(&self, a: &str, b: &str) -> Result<f64, ScoreError> {
        super::score_with(a, b, &self.options)
    }
}
