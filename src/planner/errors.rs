//! Planner error types

use thiserror::Error;

use super::sortint::SORT_KEY_LEN;

/// A sortable integer key failed to decode.
///
/// The reference behavior for this backend family silently mapped
/// malformed keys to 0, which corrupts comparisons without any signal;
/// decoding here fails loudly instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortKeyError {
    /// Key is not exactly `SORT_KEY_LEN` characters
    #[error("sortable int key must be {SORT_KEY_LEN} characters, got {0}")]
    Length(usize),

    /// Key contains a character outside the lowercase base-32 alphabet
    #[error("invalid character {0:?} in sortable int key")]
    Digit(char),

    /// Key decodes past the 64-bit range
    #[error("sortable int key out of range")]
    Overflow,
}
