//! Word: bounds-checked owned word with case-insensitive matching.

use crate::error::WordError;
use core::fmt;

/// Maximum word length in bytes.
pub const LENGTH: usize = 45;

/// An owned word of 1..=`LENGTH` bytes, stored in its original case.
///
/// Equality through `matches` ignores ASCII case; the derived `PartialEq`
/// is exact and only used by tests and models.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Word(Box<str>);

impl Word {
    /// Copy `s` into a new word, rejecting empty or oversized input.
    ///
    /// The copy is allocated with `try_reserve_exact`, so an exhausted
    /// allocator surfaces as `WordError::Alloc` instead of an abort.
    pub fn new(s: &str) -> Result<Self, WordError> {
        if s.is_empty() {
            return Err(WordError::Empty);
        }
        if s.len() > LENGTH {
            return Err(WordError::TooLong {
                len: s.len(),
                max: LENGTH,
            });
        }
        let mut buf = String::new();
        buf.try_reserve_exact(s.len())
            .map_err(|_| WordError::Alloc)?;
        buf.push_str(s);
        Ok(Word(buf.into_boxed_str()))
    }

    /// Like `new`, but cuts oversized input down to `LENGTH` bytes.
    ///
    /// Cuts fall on a char boundary at or below `LENGTH`.
    pub fn truncated(s: &str) -> Result<Self, WordError> {
        let mut end = s.len().min(LENGTH);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        Self::new(&s[..end])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Full-length, ASCII case-insensitive comparison.
    #[inline]
    pub fn matches(&self, query: &str) -> bool {
        self.0.eq_ignore_ascii_case(query)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
