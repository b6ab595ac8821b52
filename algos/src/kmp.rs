use crate::{StringSearch, Symbol, is_degenerate};

pub struct KMP;

impl StringSearch for KMP {
    type Config = ();

    fn find_symbols<S: Symbol>(_config: &Self::Config, text: &[S], pattern: &[S]) -> Option<usize> {
        kmp_find(text, pattern)
    }
}

/// The "longest proper prefix which is also suffix" (LPS) table.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixTable {
    lps: Vec<usize>,
}

impl PrefixTable {
    pub fn build<S: Symbol>(pattern: &[S]) -> Self {
        let m = pattern.len();
        let mut lps = vec![0; m];

        let mut len = 0;
        let mut i = 1;

        while i < m {
            if pattern[i] == pattern[len] {
                len += 1;
                lps[i] = len;
                i += 1;
            } else if len != 0 {
                len = lps[len - 1];
            } else {
                lps[i] = 0;
                i += 1;
            }
        }

        Self { lps }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.lps
    }

    /// Pattern position to resume from after a mismatch at `j` (`j > 0`).
    #[inline]
    pub fn fallback(&self, j: usize) -> usize {
        self.lps[j - 1]
    }
}

pub fn kmp_find<S: Symbol>(text: &[S], pattern: &[S]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if is_degenerate(n, m) {
        return None;
    }

    let lps = PrefixTable::build(pattern);

    let mut i = 0usize; // index in text
    let mut j = 0usize; // index in pattern

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                // full match ending at i-1
                return Some(i - j);
            }
        } else if j != 0 {
            j = lps.fallback(j);
        } else {
            i += 1;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_table() {
        let table = PrefixTable::build(b"AABAACAABAA");
        assert_eq!(table.as_slice(), &[0, 1, 0, 1, 2, 0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_prefix_table_falls_back_through_shorter_borders() {
        let table = PrefixTable::build(b"AAACAAAA");
        assert_eq!(table.as_slice(), &[0, 1, 2, 0, 1, 2, 3, 3]);
    }

    #[test]
    fn test_prefix_table_empty() {
        assert!(PrefixTable::build::<u8>(&[]).as_slice().is_empty());
    }

    #[test]
    fn test_kmp_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(kmp_find(hay, pat), Some(10));
    }

    #[test]
    fn test_kmp_not_found() {
        let hay = b"hello world";
        let pat = b"rust";
        assert_eq!(kmp_find(hay, pat), None);
    }

    #[test]
    fn test_kmp_degenerate_inputs() {
        let empty: &[u8] = b"";
        assert_eq!(kmp_find(b"abc", empty), None);
        assert_eq!(kmp_find(empty, b"a"), None);
        assert_eq!(kmp_find(b"ab", b"abc"), None);
    }

    #[test]
    fn test_kmp_leftmost_of_overlapping() {
        assert_eq!(kmp_find(b"AAAAAA", b"AAA"), Some(0));
        assert_eq!(kmp_find(b"AAAAB", b"AAB"), Some(2));
    }

    #[test]
    fn test_kmp_chars() {
        assert_eq!(KMP::find(&(), "🌍hello🌍hello", "🌍h"), Some(0));
        assert_eq!(KMP::find(&(), "системи ШІ покращують", "ШІ"), Some(8));
    }
}
