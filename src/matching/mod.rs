pub mod extraction;
pub mod span;

pub use extraction::{Phase, SpanExtractor, StrippedSpan};
pub use span::{find_longest_common_span, strip_span, MatchSpan};
