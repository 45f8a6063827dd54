use log::trace;

use super::span::{find_longest_common_span, strip_span, MatchSpan};

/// Where the extraction loop currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The next step searches both live buffers for a span.
    Searching,
    /// A span was found and removed from both buffers.
    Stripped(MatchSpan),
    /// A buffer is empty or the last span was too short to count.
    Done,
}

/// A span removed from the working buffers in one iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrippedSpan {
    pub span: MatchSpan,
    /// Whether the span is long enough to add to the common length.
    pub counted: bool,
    /// Matched text, present only when fragment capture is enabled.
    pub text: Option<String>,
}

/// Repeatedly finds the longest common span of two buffers and strips it from
/// both, until a buffer empties or a span at or below the threshold is found.
///
/// The final short span is still stripped and yielded, with `counted` unset.
pub struct SpanExtractor<'a> {
    buf1: &'a mut [char],
    buf2: &'a mut [char],
    len1: usize,
    len2: usize,
    threshold: usize,
    capture: bool,
    phase: Phase,
}

impl<'a> SpanExtractor<'a> {
    /// Takes the live prefixes `buf1[..len1]` and `buf2[..len2]`.
    pub fn new(
        buf1: &'a mut [char],
        len1: usize,
        buf2: &'a mut [char],
        len2: usize,
        threshold: usize,
    ) -> Self {
        Self {
            buf1,
            buf2,
            len1,
            len2,
            threshold,
            capture: false,
            phase: Phase::Searching,
        }
    }

    /// Record the text of every stripped span.
    pub fn capture_fragments(mut self, capture: bool) -> Self {
        self.capture = capture;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn live1(&self) -> &[char] {
        &self.buf1[..self.len1]
    }

    pub fn live2(&self) -> &[char] {
        &self.buf2[..self.len2]
    }

    /// Advance by one iteration. Returns the stripped span, or `None` once done.
    pub fn step(&mut self) -> Option<StrippedSpan> {
        if self.phase == Phase::Done {
            return None;
        }
        if self.len1 == 0 || self.len2 == 0 {
            self.phase = Phase::Done;
            return None;
        }

        let Some(span) = find_longest_common_span(self.live1(), self.live2()) else {
            self.phase = Phase::Done;
            return None;
        };

        let text = self
            .capture
            .then(|| self.buf1[span.start1..span.end1].iter().collect::<String>());

        self.len1 = strip_span(self.buf1, self.len1, span.start1, span.end1);
        self.len2 = strip_span(self.buf2, self.len2, span.start2, span.end2);

        let counted = span.len() > self.threshold;
        trace!(
            "stripped {}..{} / {}..{} (len {}, counted: {counted}), remaining {} / {}",
            span.start1,
            span.end1,
            span.start2,
            span.end2,
            span.len(),
            self.len1,
            self.len2,
        );

        // A short span ends the loop on the next check.
        self.phase = if counted {
            Phase::Stripped(span)
        } else {
            Phase::Done
        };

        Some(StrippedSpan {
            span,
            counted,
            text,
        })
    }
}

impl Iterator for SpanExtractor<'_> {
    type Item = StrippedSpan;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_pair_strips_two_spans() {
        let mut a: Vec<char> = "e56language".chars().collect();
        let mut b: Vec<char> = "languange".chars().collect();
        let (la, lb) = (a.len(), b.len());

        let mut ex = SpanExtractor::new(&mut a, la, &mut b, lb, 2).capture_fragments(true);
        assert_eq!(ex.phase(), Phase::Searching);

        let first = ex.step().unwrap();
        assert_eq!(first.text.as_deref(), Some("langua"));
        assert!(first.counted);
        assert!(matches!(ex.phase(), Phase::Stripped(_)));
        assert_eq!(ex.live1().iter().collect::<String>(), "e56ge");
        assert_eq!(ex.live2().iter().collect::<String>(), "nge");

        let second = ex.step().unwrap();
        assert_eq!(second.text.as_deref(), Some("ge"));
        assert!(!second.counted);
        assert_eq!(ex.phase(), Phase::Done);
        assert_eq!(ex.live1().iter().collect::<String>(), "e56");
        assert_eq!(ex.live2().iter().collect::<String>(), "n");

        assert_eq!(ex.step(), None);
    }

    #[test]
    fn empty_buffer_is_done_immediately() {
        let mut a: Vec<char> = Vec::new();
        let mut b: Vec<char> = "abc".chars().collect();
        let mut ex = SpanExtractor::new(&mut a, 0, &mut b, 3, 2);
        assert_eq!(ex.step(), None);
        assert_eq!(ex.phase(), Phase::Done);
    }

    #[test]
    fn disjoint_alphabets_finish_without_stripping() {
        let mut a: Vec<char> = "abc".chars().collect();
        let mut b: Vec<char> = "xyz".chars().collect();
        let ex = SpanExtractor::new(&mut a, 3, &mut b, 3, 2);
        assert_eq!(ex.count(), 0);
    }

    fn counted_len(extractor: SpanExtractor<'_>) -> usize {
        extractor
            .filter(|stripped| stripped.counted)
            .map(|stripped| stripped.span.len())
            .sum()
    }

    #[test]
    fn counted_spans_cover_reordered_halves() {
        let mut a: Vec<char> = "helloworld".chars().collect();
        let mut b: Vec<char> = "worldhello".chars().collect();
        let ex = SpanExtractor::new(&mut a, 10, &mut b, 10, 2);
        assert_eq!(counted_len(ex), 10);
    }

    #[test]
    fn threshold_controls_counting() {
        let mut a: Vec<char> = "abcd".chars().collect();
        let mut b: Vec<char> = "abcd".chars().collect();
        let ex = SpanExtractor::new(&mut a, 4, &mut b, 4, 4);
        assert_eq!(counted_len(ex), 0);
    }
}
