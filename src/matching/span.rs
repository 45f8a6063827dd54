/// A run of identical characters located in both working buffers.
/// Bounds are half-open and relative to the buffers at search time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start1: usize,
    pub end1: usize,
    pub start2: usize,
    pub end2: usize,
}

impl MatchSpan {
    pub fn len(&self) -> usize {
        self.end1 - self.start1
    }

    pub fn is_empty(&self) -> bool {
        self.start1 == self.end1
    }
}

/// Find the longest run shared by `buf1` and `buf2`.
///
/// Ties go to the earliest start in `buf1`, then the earliest start in `buf2`:
/// a later candidate replaces the best only when strictly longer. Returns
/// `None` when the buffers share no character.
pub fn find_longest_common_span(buf1: &[char], buf2: &[char]) -> Option<MatchSpan> {
    let (l1, l2) = (buf1.len(), buf2.len());
    let mut best: Option<MatchSpan> = None;
    let mut best_len = 0;

    let mut i = 0;
    while i < l1 && l1 - i > best_len {
        let mut j = 0;
        while l2 - j > best_len {
            // Next occurrence of buf1[i] in buf2 at or after j
            match buf2[j..].iter().position(|&c| c == buf1[i]) {
                None => break,
                Some(offset) => {
                    let p = j + offset;
                    let mut k = i + 1;
                    j = p + 1;
                    while j < l2 && k < l1 && buf1[k] == buf2[j] {
                        j += 1;
                        k += 1;
                    }
                    // The scan resumes from j, the end of this extension.
                    if k - i > best_len {
                        best_len = k - i;
                        best = Some(MatchSpan {
                            start1: i,
                            end1: k,
                            start2: p,
                            end2: j,
                        });
                    }
                }
            }
        }
        i += 1;
    }

    best
}

/// Remove `buf[start..end]` from the live prefix `buf[..len]` by shifting the
/// tail left. Returns the new live length.
///
/// # Panics
///
/// Panics unless `start <= end <= len <= buf.len()`.
pub fn strip_span(buf: &mut [char], len: usize, start: usize, end: usize) -> usize {
    assert!(
        start <= end && end <= len && len <= buf.len(),
        "span {start}..{end} outside live length {len} of buffer with {} chars",
        buf.len()
    );
    buf.copy_within(end..len, start);
    len - (end - start)
}
