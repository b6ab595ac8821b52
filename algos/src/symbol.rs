use std::{fmt::Debug, hash::Hash};

/// A unit of text the searchers compare.
///
/// Equality drives every algorithm; `ordinal` only feeds the Rabin-Karp hash.
pub trait Symbol: Copy + Eq + Hash + Debug {
    fn ordinal(self) -> u64;
}

macro_rules! impl_symbol_for_uint {
    ($($t:ty),*) => {
        $(
            impl Symbol for $t {
                #[inline]
                fn ordinal(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_symbol_for_uint!(u8, u16, u32);

impl Symbol for char {
    #[inline]
    fn ordinal(self) -> u64 {
        self as u32 as u64
    }
}
