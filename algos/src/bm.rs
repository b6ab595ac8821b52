use std::collections::HashMap;

use crate::{StringSearch, Symbol, is_degenerate};

pub struct BM;

impl StringSearch for BM {
    type Config = ();

    fn find_symbols<S: Symbol>(_config: &Self::Config, text: &[S], pattern: &[S]) -> Option<usize> {
        bm_find(text, pattern)
    }
}

/// Last-occurrence table for the Boyer–Moore bad-character rule.
///
/// Symbols that never occur in the pattern report `-1`.
#[derive(Debug, Clone)]
pub struct BadCharTable<S: Symbol> {
    last: HashMap<S, isize>,
}

impl<S: Symbol> BadCharTable<S> {
    pub fn build(pattern: &[S]) -> Self {
        let mut last = HashMap::with_capacity(pattern.len());
        // later occurrences overwrite earlier ones
        for (i, &symbol) in pattern.iter().enumerate() {
            last.insert(symbol, i as isize);
        }
        Self { last }
    }

    #[inline]
    pub fn last_occurrence(&self, symbol: S) -> isize {
        self.last.get(&symbol).copied().unwrap_or(-1)
    }

    /// Number of distinct symbols in the pattern.
    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

/// Find the first occurrence of `pattern` in `text` using Boyer–Moore with
/// the bad-character rule only.
///
/// An empty pattern, an empty text or a pattern longer than the text is
/// never found.
pub fn bm_find<S: Symbol>(text: &[S], pattern: &[S]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if is_degenerate(n, m) {
        return None;
    }

    let bad_char = BadCharTable::build(pattern);

    let mut s = 0usize; // index in text where the current pattern alignment starts

    while s <= n - m {
        let mut j = (m - 1) as isize;

        while j >= 0 && pattern[j as usize] == text[s + j as usize] {
            j -= 1;
        }

        if j < 0 {
            return Some(s);
        }

        let last_occurrence = bad_char.last_occurrence(text[s + j as usize]);
        let shift = j - last_occurrence;
        s += if shift > 0 { shift as usize } else { 1 };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_char_table_last_occurrence_wins() {
        let table = BadCharTable::build(b"ABCAB");
        assert_eq!(table.last_occurrence(b'A'), 3);
        assert_eq!(table.last_occurrence(b'B'), 4);
        assert_eq!(table.last_occurrence(b'C'), 2);
        assert_eq!(table.last_occurrence(b'Z'), -1);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_bad_char_table_empty_pattern() {
        let table = BadCharTable::<u8>::build(&[]);
        assert!(table.is_empty());
        assert_eq!(table.last_occurrence(b'A'), -1);
    }

    #[test]
    fn test_bm_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(bm_find(hay, pat), Some(10));
    }

    #[test]
    fn test_bm_not_found() {
        let hay = b"hello world";
        let pat = b"rust";
        assert_eq!(bm_find(hay, pat), None);
    }

    #[test]
    fn test_bm_degenerate_inputs() {
        let empty: &[u8] = b"";
        assert_eq!(bm_find(b"abc", empty), None);
        assert_eq!(bm_find(empty, b"a"), None);
        assert_eq!(bm_find(b"ab", b"abc"), None);
    }

    #[test]
    fn test_bm_leftmost_of_overlapping() {
        assert_eq!(bm_find(b"AAAAAA", b"AAA"), Some(0));
        assert_eq!(bm_find(b"ABAAABCD", b"ABC"), Some(4));
    }

    #[test]
    fn test_bm_mismatch_right_of_last_occurrence() {
        // text 'A' mismatches at j = 1 while last['A'] = 2, a negative shift
        assert_eq!(bm_find(b"BAAXBAA", b"AXA"), None);
        assert_eq!(bm_find(b"CBABA", b"ABA"), Some(2));
    }

    #[test]
    fn test_bm_chars() {
        let hay: Vec<char> = "🌍hello🌍hello".chars().collect();
        let pat: Vec<char> = "o🌍h".chars().collect();
        assert_eq!(bm_find(&hay, &pat), Some(5));
        assert_eq!(BM::find(&(), "🌍hello🌍hello", "o🌍h"), Some(5));
    }
}
