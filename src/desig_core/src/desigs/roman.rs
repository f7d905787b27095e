//! Roman numerals, as used by the permanent names of planetary satellites.
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

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Largest value with a standard Roman numeral.
pub const MAX_ROMAN: u32 = 3999;

/// Write a value as a Roman numeral, `None` outside of `1..=3999`.
#[must_use]
pub fn to_roman(mut value: u32) -> Option<String> {
    if value == 0 || value > MAX_ROMAN {
        return None;
    }
    let mut numeral = String::new();
    for (step, symbol) in NUMERALS {
        while value >= step {
            numeral.push_str(symbol);
            value -= step;
        }
    }
    Some(numeral)
}

/// Read a Roman numeral.
///
/// Only the canonical spelling is accepted, `IIII` or `IC` are rejected.
#[must_use]
pub fn from_roman(numeral: &str) -> Option<u32> {
    let mut total: u32 = 0;
    let mut rest = numeral;
    for (step, symbol) in NUMERALS {
        while let Some(tail) = rest.strip_prefix(symbol) {
            total += step;
            rest = tail;
        }
    }
    if !rest.is_empty() || total == 0 {
        return None;
    }
    (to_roman(total)? == numeral).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_roman() {
        assert_eq!(to_roman(1).unwrap(), "I");
        assert_eq!(to_roman(13).unwrap(), "XIII");
        assert_eq!(to_roman(24).unwrap(), "XXIV");
        assert_eq!(to_roman(210).unwrap(), "CCX");
        assert_eq!(to_roman(999).unwrap(), "CMXCIX");
        assert!(to_roman(0).is_none());
        assert!(to_roman(4000).is_none());
    }

    #[test]
    fn test_from_roman() {
        for value in 1..=MAX_ROMAN {
            assert_eq!(from_roman(&to_roman(value).unwrap()), Some(value));
        }
        assert_eq!(from_roman("IIII"), None);
        assert_eq!(from_roman("IC"), None);
        assert_eq!(from_roman("VX"), None);
        assert_eq!(from_roman(""), None);
        assert_eq!(from_roman("XIIA"), None);
    }
}
