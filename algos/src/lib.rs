mod bm;
mod error;
mod kmp;
mod rk;
mod symbol;

use std::fmt;

pub trait StringSearch {
    type Config;

    fn find_symbols<S: Symbol>(config: &Self::Config, text: &[S], pattern: &[S]) -> Option<usize>;

    fn find_bytes(config: &Self::Config, text: &[u8], pattern: &[u8]) -> Option<usize> {
        Self::find_symbols(config, text, pattern)
    }

    /// Searches by `char`; the returned index counts chars, not bytes.
    fn find(config: &Self::Config, text: &str, pattern: &str) -> Option<usize> {
        let text_chars: Vec<char> = text.chars().collect();
        let pattern_chars: Vec<char> = pattern.chars().collect();
        Self::find_symbols(config, &text_chars, &pattern_chars)
    }
}

pub use bm::{BM, BadCharTable, bm_find};
pub use error::{Result, SearchError};
pub use kmp::{KMP, PrefixTable, kmp_find};
pub use rk::{DEFAULT_BASE, DEFAULT_MODULUS, HashParams, MAX_MODULUS, RK, RollingHash, rk_find};
pub use symbol::Symbol;

/// Empty pattern, empty text and over-long pattern are all "not found".
#[inline]
pub(crate) fn is_degenerate(text_len: usize, pattern_len: usize) -> bool {
    pattern_len == 0 || text_len == 0 || pattern_len > text_len
}

/// Canonical integer form of a search result: the start index, or -1.
pub fn to_sentinel(result: Option<usize>) -> i64 {
    result.map_or(-1, |i| i as i64)
}

/// The searchers under comparison. Declaration order is the tie-break
/// priority: when two algorithms are equally fast the earlier one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum Algorithm {
    #[value(name = "bm")]
    BoyerMoore,
    Kmp,
    #[value(name = "rk")]
    RabinKarp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::BoyerMoore, Algorithm::Kmp, Algorithm::RabinKarp];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BoyerMoore => "Boyer-Moore",
            Algorithm::Kmp => "KMP",
            Algorithm::RabinKarp => "Rabin-Karp",
        }
    }

    /// `params` is only consulted by Rabin–Karp.
    pub fn find_symbols<S: Symbol>(
        self,
        params: &HashParams,
        text: &[S],
        pattern: &[S],
    ) -> Option<usize> {
        match self {
            Algorithm::BoyerMoore => BM::find_symbols(&(), text, pattern),
            Algorithm::Kmp => KMP::find_symbols(&(), text, pattern),
            Algorithm::RabinKarp => RK::find_symbols(params, text, pattern),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
