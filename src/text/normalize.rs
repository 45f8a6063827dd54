/// Characters deleted by normalization.
pub const SEPARATORS: [char; 3] = ['.', '_', ' '];

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Lowercase a single character without changing the buffer length.
/// Characters whose lowercase form expands to several characters are kept.
pub fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Normalize the live prefix `buf[..len]` in place and return its new length.
///
/// Lowercases every character, then compacts the buffer so that no separator
/// remains. Content past the returned length is unspecified.
///
/// # Panics
///
/// Panics if `len > buf.len()`.
pub fn normalize_in_place(buf: &mut [char], len: usize) -> usize {
    let live = &mut buf[..len];
    let mut out = 0;
    for i in 0..live.len() {
        let c = fold_case(live[i]);
        if !is_separator(c) {
            live[out] = c;
            out += 1;
        }
    }
    out
}

/// Owned normalization of a string.
pub fn normalize(s: &str) -> String {
    s.chars()
        .map(fold_case)
        .filter(|c| !is_separator(*c))
        .collect()
}
