//! Random selection over [tinyrand] sources.

use std::time::{SystemTime, UNIX_EPOCH};

use tinyrand::{Rand, Seeded, StdRand};

/// Generates a number uniformly in `0..lim` using a widening multiply of a single 64-bit draw.
#[inline]
pub fn next_lim(rand: &mut impl Rand, lim: u64) -> u64 {
    debug_assert!(lim > 0);
    ((rand.next_u64() as u128 * lim as u128) >> 64) as u64
}

/// Picks one item from a non-empty slice with equal probability.
pub fn choose<'a, T>(rand: &mut impl Rand, items: &'a [T]) -> &'a T {
    assert!(!items.is_empty(), "cannot choose from an empty slice");
    &items[next_lim(rand, items.len() as u64) as usize]
}

/// Returns `true` with probability `numerator / denominator`.
pub fn odds(rand: &mut impl Rand, numerator: u64, denominator: u64) -> bool {
    assert!(denominator > 0, "denominator must be positive");
    next_lim(rand, denominator) < numerator
}

/// A generator seeded either with the given value or from the system clock.
pub fn seeded(seed: Option<u64>) -> StdRand {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_nanos() as u64)
            .unwrap_or_default()
    });
    StdRand::seed(seed)
}
