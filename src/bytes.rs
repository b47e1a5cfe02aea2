//! Byte cost of text under a fixed per-code-unit policy.
//!
//! Text is walked as UTF-16 code units. Each unit is costed by its own
//! value, including the two halves of a surrogate pair, so a character
//! outside the Basic Multilingual Plane costs twice the three-byte size.

use crate::config::ByteSizes;
use crate::consts::{ONE_BYTE_MAX, THREE_BYTE_MAX, TWO_BYTE_MAX};

/// Cost of one UTF-16 code unit.
pub fn unit_cost(unit: u32, sizes: &ByteSizes) -> usize {
    if unit <= ONE_BYTE_MAX {
        1
    } else if unit <= TWO_BYTE_MAX {
        sizes.two
    } else if unit <= THREE_BYTE_MAX {
        sizes.three
    } else {
        sizes.four
    }
}

fn char_cost(c: char, sizes: &ByteSizes) -> usize {
    let mut buf = [0_u16; 2];
    c.encode_utf16(&mut buf)
        .iter()
        .map(|&unit| unit_cost(u32::from(unit), sizes))
        .sum()
}

/// Total byte cost of `text`.
pub fn byte_length(text: &str, sizes: &ByteSizes) -> usize {
    text.encode_utf16()
        .map(|unit| unit_cost(u32::from(unit), sizes))
        .sum()
}

/// Longest prefix of `text` costing at most `max_bytes`.
///
/// The cut lands before the first code unit that would exceed the budget.
/// When that unit is the second half of a surrogate pair the first half is
/// dropped with it, since half a character is not a string.
pub fn truncate_to_byte_length<'a>(text: &'a str, max_bytes: usize, sizes: &ByteSizes) -> &'a str {
    let mut used = 0;
    for (offset, c) in text.char_indices() {
        used += char_cost(c, sizes);
        if used > max_bytes {
            return &text[..offset];
        }
    }
    text
}
