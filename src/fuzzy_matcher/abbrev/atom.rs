//! Byte/Char helpers
use memchr::{memchr2, memrchr2};

pub(super) trait Atom: PartialEq + Copy {
    /// Case-insensitive equality. Symmetric under uppercasing either side.
    fn eq_fold(self, other: Self) -> bool;
    /// Letters and digits; everything else separates words.
    fn is_word(self) -> bool;
    fn is_lowercase(self) -> bool;
    fn is_uppercase(self) -> bool;

    /// Return the index of the first case-insensitive occurrence of `self`
    /// in `haystack`, or `None` if not found.
    #[inline]
    fn find_first_in(self, haystack: &[Self]) -> Option<usize> {
        haystack.iter().position(|&c| self.eq_fold(c))
    }

    /// Return the index of the last case-insensitive occurrence of `self`
    /// in `haystack`, or `None` if not found.
    #[inline]
    fn find_last_in(self, haystack: &[Self]) -> Option<usize> {
        haystack.iter().rposition(|&c| self.eq_fold(c))
    }
}

impl Atom for u8 {
    #[inline(always)]
    fn eq_fold(self, b: Self) -> bool {
        self.eq_ignore_ascii_case(&b)
    }
    #[inline(always)]
    fn is_word(self) -> bool {
        self.is_ascii_alphanumeric()
    }
    #[inline(always)]
    fn is_lowercase(self) -> bool {
        self.is_ascii_lowercase()
    }
    #[inline(always)]
    fn is_uppercase(self) -> bool {
        self.is_ascii_uppercase()
    }

    /// Searches both case variants at once with SIMD-backed `memchr2`.
    #[inline]
    fn find_first_in(self, haystack: &[Self]) -> Option<usize> {
        memchr2(self.to_ascii_lowercase(), self.to_ascii_uppercase(), haystack)
    }

    #[inline]
    fn find_last_in(self, haystack: &[Self]) -> Option<usize> {
        memrchr2(self.to_ascii_lowercase(), self.to_ascii_uppercase(), haystack)
    }
}

impl Atom for char {
    /// Lowercase alone is not enough: `ς` and `ı` uppercase to `Σ` and `I`,
    /// which lowercase back to `σ` and `i`.
    #[inline(always)]
    fn eq_fold(self, b: Self) -> bool {
        self == b || self.to_lowercase().eq(b.to_lowercase()) || self.to_uppercase().eq(b.to_uppercase())
    }
    #[inline(always)]
    fn is_word(self) -> bool {
        self.is_alphanumeric()
    }
    #[inline(always)]
    fn is_lowercase(self) -> bool {
        char::is_lowercase(self)
    }
    #[inline(always)]
    fn is_uppercase(self) -> bool {
        char::is_uppercase(self)
    }
}
