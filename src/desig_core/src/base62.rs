//! # Base-62
//!
//! Positional arithmetic over the `0-9A-Za-z` alphabet used by packed MPC
//! designations.
//!
//! Two forms are used by the packed format:
//!
//! - Pure base-62 fields of fixed width, used by the `~` numbered extension and the
//!   `_` extended provisional cycle counts.
//! - The legacy mixed form, where a single leading base-62 digit holds everything
//!   above a fixed number of trailing decimal digits. This is how `A0000` packs
//!   `100000` and how `A0` packs a cycle count of `100`.
//!
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use crate::errors::{DesigResult, Error};

/// The 62 digits in increasing order of value.
pub const BASE62_DIGITS: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Value of a single base-62 digit.
///
/// ```rust
///     use desig_core::base62::digit_value;
///     assert_eq!(digit_value('9'), Some(9));
///     assert_eq!(digit_value('A'), Some(10));
///     assert_eq!(digit_value('z'), Some(61));
///     assert_eq!(digit_value('~'), None);
/// ```
#[must_use]
pub fn digit_value(digit: char) -> Option<u32> {
    match digit {
        '0'..='9' => Some(u32::from(digit) - u32::from('0')),
        'A'..='Z' => Some(u32::from(digit) - u32::from('A') + 10),
        'a'..='z' => Some(u32::from(digit) - u32::from('a') + 36),
        _ => None,
    }
}

/// Base-62 digit for a value in `0..62`.
#[must_use]
pub fn digit_char(value: u32) -> Option<char> {
    BASE62_DIGITS
        .get(usize::try_from(value).ok()?)
        .map(|&b| char::from(b))
}

/// Encode a value as exactly `width` base-62 digits, most significant first.
///
/// # Errors
/// [`Error::OutOfRange`] if the value does not fit in `width` digits.
pub fn encode(value: u64, width: u32) -> DesigResult<String> {
    let capacity = 62_u64.checked_pow(width);
    if capacity.is_none_or(|cap| value >= cap) {
        return Err(Error::OutOfRange(format!(
            "{value} does not fit in {width} base-62 digits"
        )));
    }

    let mut digits = vec!['0'; width as usize];
    let mut remaining = value;
    for slot in digits.iter_mut().rev() {
        *slot = char::from(BASE62_DIGITS[(remaining % 62) as usize]);
        remaining /= 62;
    }
    Ok(digits.into_iter().collect())
}

/// Decode a string of base-62 digits.
///
/// Returns [`None`] for an empty string, any character outside the alphabet, or
/// an overflow of [`u64`].
#[must_use]
pub fn decode(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }
    text.chars().try_fold(0_u64, |total, digit| {
        total
            .checked_mul(62)?
            .checked_add(u64::from(digit_value(digit)?))
    })
}

/// Encode a value in the legacy mixed form: one base-62 digit followed by
/// `decimals` decimal digits.
///
/// The largest representable value is `62 * 10^decimals - 1`.
///
/// ```rust
///     use desig_core::base62::encode_mixed;
///     assert_eq!(encode_mixed(433, 4).unwrap(), "00433");
///     assert_eq!(encode_mixed(164060, 4).unwrap(), "G4060");
///     assert_eq!(encode_mixed(418, 1).unwrap(), "f8");
/// ```
///
/// # Errors
/// [`Error::OutOfRange`] if the leading digit would exceed `z`, or if `decimals`
/// is too wide for a [`u32`].
pub fn encode_mixed(value: u32, decimals: u32) -> DesigResult<String> {
    let scale = 10_u32.checked_pow(decimals).ok_or_else(|| {
        Error::OutOfRange(format!("{decimals} decimal digits do not fit in a u32"))
    })?;
    let lead = digit_char(value / scale).ok_or_else(|| {
        Error::OutOfRange(format!(
            "{value} exceeds the largest value of a base-62 digit and {decimals} decimals"
        ))
    })?;
    Ok(format!(
        "{lead}{:0width$}",
        value % scale,
        width = decimals as usize
    ))
}

/// Decode the legacy mixed form, see [`encode_mixed`].
///
/// Every character after the first must be a decimal digit.
#[must_use]
pub fn decode_mixed(text: &str) -> Option<u32> {
    let mut chars = text.chars();
    let lead = digit_value(chars.next()?)?;
    let tail = chars.as_str();
    if !tail.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let decimals = u32::try_from(tail.len()).ok()?;
    let rest = if tail.is_empty() {
        0
    } else {
        tail.parse::<u32>().ok()?
    };
    lead.checked_mul(10_u32.checked_pow(decimals)?)?
        .checked_add(rest)
}
