//! Bucket selection for the fixed-size table.

/// Number of buckets: one per three-letter prefix (26^3).
pub const N: usize = 17_576;

/// Maps a word to a bucket index in `0..N`.
///
/// Implementations must be deterministic and ASCII case-insensitive, and
/// must never return an index `>= N`.
pub trait BucketHash {
    fn bucket(&self, word: &str) -> usize;
}

/// Base-26 hash over the first three letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrefixHash;

impl BucketHash for PrefixHash {
    #[inline]
    fn bucket(&self, word: &str) -> usize {
        hash(word)
    }
}

/// Folds up to the first three bytes as base-26 digits (`'a'` is 0) and
/// reduces the result modulo `N`.
///
/// Input is not validated. A byte outside `a..=z` after lowercasing yields
/// an out-of-range digit; the arithmetic wraps as unsigned 32-bit, so the
/// result is still deterministic and in range.
pub fn hash(word: &str) -> usize {
    let mut value: u32 = 0;
    for b in word.bytes().take(3) {
        let digit = u32::from(b.to_ascii_lowercase()).wrapping_sub(u32::from(b'a'));
        value = value.wrapping_mul(26).wrapping_add(digit);
    }
    value as usize % N
}
