//! The alphabet window and the modular shift both ciphers are built on.

use crate::domain::model::{LOWER_BOUND, RANGE, UPPER_BOUND};

pub fn in_window(c: char) -> bool {
    (LOWER_BOUND..=UPPER_BOUND).contains(&c)
}

/// Returns `true` when every character of `text` lies in `' '..='_'`.
///
/// Stops at the first character outside the window. An empty string is in
/// bounds. The cipher functions never call this themselves.
pub fn string_in_bounds(text: &str) -> bool {
    text.chars().all(in_window)
}

/// Moves `c` by `key` positions through the window, wrapping at both ends.
///
/// Total over every `char` and every `i64`: characters outside the window are
/// still reduced modulo 64 and land inside it, and both operands are reduced
/// before they are added so no key can overflow.
pub fn shift(c: char, key: i64) -> char {
    let offset = (i64::from(u32::from(c)) - i64::from(u32::from(LOWER_BOUND))).rem_euclid(RANGE);
    let n = (offset + key.rem_euclid(RANGE)) % RANGE;
    // n < 64, so the sum stays within 32..=95
    char::from(LOWER_BOUND as u8 + n as u8)
}
