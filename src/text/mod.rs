pub mod normalize;

pub use normalize::{fold_case, is_separator, normalize, normalize_in_place, SEPARATORS};

/// Number of leading characters shared by `a` and `b`.
pub fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
