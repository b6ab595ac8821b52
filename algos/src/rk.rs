use log::trace;

use crate::{SearchError, StringSearch, Symbol, error::Result, is_degenerate};

/// Radix of the polynomial hash.
pub const DEFAULT_BASE: u64 = 256;
/// Small prime modulus; collisions are frequent and always re-checked.
pub const DEFAULT_MODULUS: u64 = 101;
/// Products are reduced through `u128`, so any modulus up to here is safe.
pub const MAX_MODULUS: u64 = 1 << 62;

pub struct RK;

impl StringSearch for RK {
    type Config = HashParams;

    fn find_symbols<S: Symbol>(config: &Self::Config, text: &[S], pattern: &[S]) -> Option<usize> {
        rk_find(config, text, pattern)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    base: u64,
    modulus: u64,
}

impl HashParams {
    pub fn new(base: u64, modulus: u64) -> Result<Self> {
        if base == 0 {
            return Err(SearchError::InvalidInput(
                "Rabin-Karp base must be positive".to_string(),
            ));
        }
        if !(2..=MAX_MODULUS).contains(&modulus) {
            return Err(SearchError::InvalidInput(format!(
                "Rabin-Karp modulus must be in 2..={MAX_MODULUS} (got {modulus})"
            )));
        }
        Ok(Self { base, modulus })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
        }
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, modulus: u64) -> u64 {
    ((a as u128 * b as u128) % modulus as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: usize, modulus: u64) -> u64 {
    let mut acc = 1 % modulus;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        exp >>= 1;
    }
    acc
}

/// Polynomial hash of a fixed-width window that can slide one symbol at a time.
#[derive(Debug, Clone)]
pub struct RollingHash {
    params: HashParams,
    /// base^(width - 1) mod modulus, the weight of the leading symbol
    high: u64,
    value: u64,
}

impl RollingHash {
    pub fn new<S: Symbol>(params: HashParams, window: &[S]) -> Self {
        let q = params.modulus;
        let value = window.iter().fold(0, |acc, s| {
            (mul_mod(acc, params.base, q) + s.ordinal() % q) % q
        });
        let high = pow_mod(params.base, window.len().saturating_sub(1), q);
        Self { params, high, value }
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Drop `outgoing` from the front of the window and append `incoming`.
    #[inline]
    pub fn roll<S: Symbol>(&mut self, outgoing: S, incoming: S) {
        let q = self.params.modulus;
        let lead = mul_mod(outgoing.ordinal() % q, self.high, q);
        // add q before subtracting so the value never goes negative
        let without_lead = (self.value + q - lead) % q;
        self.value = (mul_mod(without_lead, self.params.base, q) + incoming.ordinal() % q) % q;
    }
}

/// Find the first occurrence of `pattern` in `text` using Rabin–Karp.
///
/// A hash hit is only a candidate: the window is compared symbol by symbol
/// before it is reported.
pub fn rk_find<S: Symbol>(params: &HashParams, text: &[S], pattern: &[S]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if is_degenerate(n, m) {
        return None;
    }

    let target = RollingHash::new(*params, pattern).value();
    let mut window = RollingHash::new(*params, &text[..m]);

    for i in 0..=n - m {
        if window.value() == target {
            if text[i..i + m] == *pattern {
                return Some(i);
            }
            trace!("rabin-karp: hash collision rejected at {i}");
        }
        if i < n - m {
            window.roll(text[i], text[i + m]);
        }
    }

    None
}
