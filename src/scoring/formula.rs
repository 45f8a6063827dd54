/// Hamacher product parameter. At 1.0 it coincides with the algebraic product.
pub const HAMACHER_P: f64 = 0.6;

/// Prefix characters beyond this earn no extra bonus.
pub const MAX_PREFIX_BONUS_LEN: usize = 4;

pub const PREFIX_SCALE: f64 = 0.1;

/// Closed-form terms derived from the extraction result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formula {
    pub commonality: f64,
    pub dissimilarity: f64,
    pub winkler_bonus: f64,
    /// `commonality - dissimilarity + winkler_bonus`, in `[-1, 1]`.
    pub result: f64,
}

impl Formula {
    /// `len1` and `len2` must both be non-zero and `common <= min(len1, len2)`.
    pub fn evaluate(len1: usize, len2: usize, common: usize, common_prefix_len: usize) -> Self {
        debug_assert!(len1 > 0 && len2 > 0);

        let (l1, l2, common) = (len1 as f64, len2 as f64, common as f64);

        let commonality = 2.0 * common / (l1 + l2);

        let unmatched1 = (l1 - common) / l1;
        let unmatched2 = (l2 - common) / l2;
        let sum = unmatched1 + unmatched2;
        let product = unmatched1 * unmatched2;
        let dissimilarity = if sum - product == 0.0 {
            0.0
        } else {
            product / (HAMACHER_P + (1.0 - HAMACHER_P) * (sum - product))
        };

        let winkler_bonus = common_prefix_len.min(MAX_PREFIX_BONUS_LEN) as f64
            * PREFIX_SCALE
            * (1.0 - commonality);

        Self {
            commonality,
            dissimilarity,
            winkler_bonus,
            result: commonality - dissimilarity + winkler_bonus,
        }
    }

    /// Two empty strings.
    pub fn identical() -> Self {
        Self {
            commonality: 1.0,
            dissimilarity: 0.0,
            winkler_bonus: 0.0,
            result: 1.0,
        }
    }

    /// Exactly one empty string.
    pub fn disjoint() -> Self {
        Self {
            commonality: 0.0,
            dissimilarity: 1.0,
            winkler_bonus: 0.0,
            result: -1.0,
        }
    }

    /// Map the raw result onto `[0, 1]`.
    pub fn zero_to_one(&self) -> f64 {
        (self.result + 1.0) / 2.0
    }
}
