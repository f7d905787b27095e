//! Line oriented lists of designation test cases.
//!
//! Each entry is a single line holding the packed designation, the category code,
//! and the unpacked designation, separated by blanks:
//!
//! ```text
//! # packed  cat unpacked
//! J95X00A    0  1995 XA
//! N210S      5  Neptune 210
//! ```
//!
//! Lines starting with `#` and blank lines are skipped.
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

use std::str::FromStr;

use super::Category;
use crate::errors::{DesigResult, Error};

/// A single entry of a designation test list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesigFixture {
    /// Packed designation.
    pub packed: String,

    /// Category of the designation.
    pub category: Category,

    /// Unpacked designation.
    pub unpacked: String,
}

impl FromStr for DesigFixture {
    type Err = Error;

    fn from_str(line: &str) -> DesigResult<Self> {
        let malformed = || Error::ValueError(format!("Malformed designation test line {line:?}"));

        let (packed, rest) = line.trim().split_once(char::is_whitespace).ok_or_else(malformed)?;
        let (code, unpacked) = rest
            .trim_start()
            .split_once(char::is_whitespace)
            .ok_or_else(malformed)?;
        let code: i8 = code.parse().map_err(|_| malformed())?;
        let unpacked = unpacked.trim();
        if unpacked.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            packed: packed.to_string(),
            category: Category::try_from(code)?,
            unpacked: unpacked.to_string(),
        })
    }
}

/// Parse every entry of a designation test list.
///
/// # Errors
/// Fails on the first malformed line.
pub fn parse_fixture(text: &str) -> DesigResult<Vec<DesigFixture>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(DesigFixture::from_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let entry = DesigFixture::from_str("~000a     1 (620036)").unwrap();
        assert_eq!(entry.packed, "~000a");
        assert_eq!(entry.category, Category::Numbered);
        assert_eq!(entry.unpacked, "(620036)");

        let entry = DesigFixture::from_str("WT1190F  -1 WT1190F").unwrap();
        assert_eq!(entry.category, Category::Unrecognized);

        let entry = DesigFixture::from_str("SK03J020  4 S/2003 J 2").unwrap();
        assert_eq!(entry.unpacked, "S/2003 J 2");
    }

    #[test]
    fn test_parse_errors() {
        assert!(DesigFixture::from_str("J95X00A").is_err());
        assert!(DesigFixture::from_str("J95X00A 0").is_err());
        assert!(DesigFixture::from_str("J95X00A 9 1995 XA").is_err());
        assert!(DesigFixture::from_str("J95X00A x 1995 XA").is_err());
    }

    #[test]
    fn test_skips_comments() {
        let text = "# header\n\nJ95X00A  0 1995 XA\n   \n00433  1 (433)\n";
        let entries = parse_fixture(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].packed, "00433");
    }
}
