pub mod formula;
pub mod scorer;

use log::debug;

use crate::matching::{SpanExtractor, StrippedSpan};
use crate::text::{common_prefix_len, normalize_in_place};
use crate::types::{Fragment, ScoreBreakdown, ScoreError, ScoreOptions};
pub use formula::Formula;
pub use scorer::{IsubScorer, Scorer};

/// Similarity of `a` and `b` with the canonical options.
///
/// Works on private copies; the inputs are never touched. The only failure is
/// running out of memory for those copies.
pub fn score(a: &str, b: &str, normalize: bool) -> Result<f64, ScoreError> {
    score_with(a, b, &ScoreOptions::isub().with_normalize(normalize))
}

/// Like [`score`], over code points.
pub fn score_chars(a: &[char], b: &[char], normalize: bool) -> Result<f64, ScoreError> {
    let mut buf1 = copy_chars(a.iter().copied(), a.len())?;
    let mut buf2 = copy_chars(b.iter().copied(), b.len())?;
    Ok(score_in_place(&mut buf1, &mut buf2, normalize))
}

pub fn score_with(a: &str, b: &str, options: &ScoreOptions) -> Result<f64, ScoreError> {
    let mut buf1 = copy_str(a)?;
    let mut buf2 = copy_str(b)?;
    Ok(score_in_place_with(&mut buf1, &mut buf2, options))
}

/// Destructive variant of [`score`].
///
/// Takes exclusive use of both buffers for the call. Their contents afterwards
/// are unspecified and must not be read.
pub fn score_in_place(a: &mut [char], b: &mut [char], normalize: bool) -> f64 {
    score_in_place_with(a, b, &ScoreOptions::isub().with_normalize(normalize))
}

pub fn score_in_place_with(a: &mut [char], b: &mut [char], options: &ScoreOptions) -> f64 {
    let evaluation = evaluate(a, b, options, false, |_| {});
    finalize(&evaluation.formula, options)
}

/// Compute the similarity and report every intermediate term.
pub fn explain(a: &str, b: &str, options: &ScoreOptions) -> Result<ScoreBreakdown, ScoreError> {
    let mut buf1 = copy_str(a)?;
    let mut buf2 = copy_str(b)?;

    let mut fragments = Vec::new();
    let evaluation = evaluate(&mut buf1, &mut buf2, options, true, |stripped| {
        fragments.push(Fragment {
            len: stripped.span.len(),
            counted: stripped.counted,
            text: stripped.text.unwrap_or_default(),
        });
    });
    let Evaluation {
        len1,
        len2,
        common_prefix_len,
        common,
        formula,
    } = evaluation;

    let breakdown = ScoreBreakdown {
        len1,
        len2,
        common_prefix_len,
        fragments,
        common,
        commonality: formula.commonality,
        dissimilarity: formula.dissimilarity,
        winkler_bonus: formula.winkler_bonus,
        result: formula.result,
        similarity: finalize(&formula, options),
    };
    debug!("{breakdown:?}");

    Ok(breakdown)
}

/// Everything a single comparison produces before the final mapping.
struct Evaluation {
    len1: usize,
    len2: usize,
    common_prefix_len: usize,
    common: usize,
    formula: Formula,
}

/// The one scoring pipeline. `on_strip` sees every stripped span in order.
fn evaluate(
    a: &mut [char],
    b: &mut [char],
    options: &ScoreOptions,
    capture: bool,
    mut on_strip: impl FnMut(StrippedSpan),
) -> Evaluation {
    // 1. Normalization
    let (len1, len2) = prepare(a, b, options);

    // 2. Prefix is measured before extraction mutates the buffers
    let common_prefix_len = common_prefix_len(&a[..len1], &b[..len2]);

    // 3. Extraction
    let mut common = 0;
    let formula = match (len1, len2) {
        (0, 0) => Formula::identical(),
        (0, _) | (_, 0) => Formula::disjoint(),
        _ => {
            let extractor = SpanExtractor::new(a, len1, b, len2, options.substring_threshold)
                .capture_fragments(capture);
            for stripped in extractor {
                if stripped.counted {
                    common += stripped.span.len();
                }
                on_strip(stripped);
            }

            // 4. Closed form
            Formula::evaluate(len1, len2, common, common_prefix_len)
        }
    };

    Evaluation {
        len1,
        len2,
        common_prefix_len,
        common,
        formula,
    }
}

/// Normalize when requested and return the live lengths.
fn prepare(a: &mut [char], b: &mut [char], options: &ScoreOptions) -> (usize, usize) {
    if options.normalize {
        (
            normalize_in_place(a, a.len()),
            normalize_in_place(b, b.len()),
        )
    } else {
        (a.len(), b.len())
    }
}

fn finalize(formula: &Formula, options: &ScoreOptions) -> f64 {
    if options.zero_to_one {
        formula.zero_to_one()
    } else {
        formula.result
    }
}

fn copy_str(s: &str) -> Result<Vec<char>, ScoreError> {
    copy_chars(s.chars(), s.chars().count())
}

fn copy_chars(chars: impl Iterator<Item = char>, len: usize) -> Result<Vec<char>, ScoreError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)?;
    buf.extend(chars);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_count_code_points() {
        let buf = copy_str("héllo").unwrap();
        assert_eq!(buf, vec!['h', 'é', 'l', 'l', 'o']);
    }

    #[test]
    fn both_paths_share_one_evaluation() {
        let options = ScoreOptions::normalized();
        let mut a: Vec<char> = "E56.Language".chars().collect();
        let mut b: Vec<char> = "languange".chars().collect();

        let mut seen = Vec::new();
        let evaluation = evaluate(&mut a, &mut b, &options, true, |stripped| seen.push(stripped));

        assert_eq!((evaluation.len1, evaluation.len2), (11, 9));
        assert_eq!(seen.len(), 2);
        let counted: usize = seen
            .iter()
            .filter(|s| s.counted)
            .map(|s| s.span.len())
            .sum();
        assert_eq!(counted, evaluation.common);

        let explained = explain("E56.Language", "languange", &options).unwrap();
        assert_eq!(
            finalize(&evaluation.formula, &options).to_bits(),
            explained.similarity.to_bits()
        );
    }

    #[test]
    fn raw_scale_for_trivial_cases() {
        let raw = ScoreOptions {
            zero_to_one: false,
            ..ScoreOptions::isub()
        };
        assert_eq!(score_with("", "", &raw).unwrap(), 1.0);
        assert_eq!(score_with("", "x", &raw).unwrap(), -1.0);
    }
}
