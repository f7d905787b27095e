//! # Designations
//!
//! Minor planet, comet and natural satellite designations, along with conversion to
//! and from the packed format used by the Minor Planet Center (MPC).
//!
//! Every designation is represented by [`Desig`]. The human readable form is the
//! [`std::fmt::Display`] of a [`Desig`], the packed form comes from
//! [`Desig::try_pack`]. Each designation belongs to a [`Category`], whose integer
//! codes match the codes used by the MPC designation test lists.
//!
//! ```rust
//!     use desig_core::desigs::{pack, unpack, Category};
//!     assert_eq!(pack("1995 XA", None).unwrap(), "J95X00A");
//!     assert_eq!(pack("(620036)", Some(Category::Numbered)).unwrap(), "~000a");
//!     assert_eq!(
//!         unpack("N210S").unwrap(),
//!         ("Neptune CCX".to_string(), Category::PermanentSatellite)
//!     );
//! ```
//!
//! Packed layouts:
//!
//! | Layout                  | Example    | Unpacked          |
//! |-------------------------|------------|-------------------|
//! | Numbered                | `G4060`    | `(164060)`        |
//! | Numbered, extended      | `~000a`    | `(620036)`        |
//! | Provisional             | `K07Tf8A`  | `2007 TA418`      |
//! | Provisional, extended   | `_QC0000`  | `2026 CA620`      |
//! | Survey                  | `T3S3141`  | `3141 T-3`        |
//! | Comet                   | `DJ93F02b` | `D/1993 F2-B`     |
//! | Comet, numbered         | `3141Paz`  | `P/3141-AZ`       |
//! | Natural satellite       | `SK03J020` | `S/2003 J 2`      |
//! | Permanent satellite     | `N210S`    | `Neptune CCX`     |
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

mod fixture;
mod parse;
pub mod roman;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::base62::{self, decode_mixed, digit_char, digit_value, encode_mixed};
use crate::errors::{DesigResult, Error};

pub use self::fixture::{DesigFixture, parse_fixture};
use self::roman::to_roman;

/// Numbers at or above this value use the `~` extended numbered form.
pub const EXTENDED_NUMBER_START: u32 = 620_000;

/// Cycle counts at or above this value use the `_` extended provisional form.
pub const EXTENDED_CYCLE_START: u32 = 620;

/// First year which may be written in the extended provisional form.
pub const EXTENDED_YEAR_START: u32 = 2000;

/// Width of the designation field of an 80 column astrometric record.
pub const COLUMN_WIDTH: usize = 12;

/// Number of distinct order letters, `A` through `Z` without `I`.
const N_ORDER_LETTERS: u32 = 25;

/// Designation categories.
///
/// The integer codes are available through [`Category::code`] and
/// [`Category::try_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Text which does not match any designation grammar, code `-1`.
    Unrecognized,

    /// Provisional and survey designations of asteroids, code `0`.
    Provisional,

    /// Numbered minor planets, code `1`.
    Numbered,

    /// Comets with a provisional designation, code `2`.
    CometProvisional,

    /// Numbered periodic comets, code `3`.
    CometNumbered,

    /// Provisional designations of natural satellites, code `4`.
    Satellite,

    /// Permanent Roman numeral names of natural satellites, code `5`.
    ///
    /// Packing is lossy, both Arabic and Roman numerals pack identically and
    /// always unpack to the Roman form.
    PermanentSatellite,

    /// Other identifiers which have no packed form, code `6`.
    Other,
}

impl Category {
    /// All categories, ordered by code.
    pub const ALL: [Self; 8] = [
        Self::Unrecognized,
        Self::Provisional,
        Self::Numbered,
        Self::CometProvisional,
        Self::CometNumbered,
        Self::Satellite,
        Self::PermanentSatellite,
        Self::Other,
    ];

    /// Integer code of the category.
    #[must_use]
    pub fn code(self) -> i8 {
        match self {
            Self::Unrecognized => -1,
            Self::Provisional => 0,
            Self::Numbered => 1,
            Self::CometProvisional => 2,
            Self::CometNumbered => 3,
            Self::Satellite => 4,
            Self::PermanentSatellite => 5,
            Self::Other => 6,
        }
    }
}

impl TryFrom<i8> for Category {
    type Error = Error;

    fn try_from(code: i8) -> DesigResult<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or_else(|| Error::ValueError(format!("Unknown designation category {code}")))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Comet designation prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CometType {
    /// `P/`, periodic comet.
    Periodic,

    /// `C/`, non-periodic comet.
    NonPeriodic,

    /// `D/`, defunct or disappeared comet.
    Defunct,

    /// `X/`, comet without a meaningful orbit.
    Uncertain,

    /// `A/`, asteroid on a cometary orbit.
    Asteroidal,

    /// `I/`, interstellar object.
    Interstellar,
}

impl CometType {
    /// Letter used in both the packed and unpacked forms.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Periodic => 'P',
            Self::NonPeriodic => 'C',
            Self::Defunct => 'D',
            Self::Uncertain => 'X',
            Self::Asteroidal => 'A',
            Self::Interstellar => 'I',
        }
    }

    /// Comet type from its letter.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'P' => Some(Self::Periodic),
            'C' => Some(Self::NonPeriodic),
            'D' => Some(Self::Defunct),
            'X' => Some(Self::Uncertain),
            'A' => Some(Self::Asteroidal),
            'I' => Some(Self::Interstellar),
            _ => None,
        }
    }

    /// Only periodic, defunct and interstellar objects receive permanent numbers.
    #[must_use]
    pub fn is_numbered(self) -> bool {
        matches!(self, Self::Periodic | Self::Defunct | Self::Interstellar)
    }
}

/// Planets with natural satellite designations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    /// Mars, `M`.
    Mars,

    /// Jupiter, `J`.
    Jupiter,

    /// Saturn, `S`.
    Saturn,

    /// Uranus, `U`.
    Uranus,

    /// Neptune, `N`.
    Neptune,

    /// Pluto, `P`.
    Pluto,
}

impl Planet {
    /// All planets.
    pub const ALL: [Self; 6] = [
        Self::Mars,
        Self::Jupiter,
        Self::Saturn,
        Self::Uranus,
        Self::Neptune,
        Self::Pluto,
    ];

    /// Single letter code.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::Mars => 'M',
            Self::Jupiter => 'J',
            Self::Saturn => 'S',
            Self::Uranus => 'U',
            Self::Neptune => 'N',
            Self::Pluto => 'P',
        }
    }

    /// Full name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// Planet from its letter code.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|planet| planet.letter() == letter)
    }
}

/// Photographic surveys of the 1960s and 1970s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Survey {
    /// Palomar-Leiden survey, `P-L`.
    PalomarLeiden,

    /// First Trojan survey, `T-1`.
    Trojan1,

    /// Second Trojan survey, `T-2`.
    Trojan2,

    /// Third Trojan survey, `T-3`.
    Trojan3,
}

impl Survey {
    /// All surveys.
    pub const ALL: [Self; 4] = [
        Self::PalomarLeiden,
        Self::Trojan1,
        Self::Trojan2,
        Self::Trojan3,
    ];

    /// Suffix of the unpacked designation.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PalomarLeiden => "P-L",
            Self::Trojan1 => "T-1",
            Self::Trojan2 => "T-2",
            Self::Trojan3 => "T-3",
        }
    }

    /// Prefix of the packed designation.
    #[must_use]
    pub fn packed_prefix(self) -> &'static str {
        match self {
            Self::PalomarLeiden => "PLS",
            Self::Trojan1 => "T1S",
            Self::Trojan2 => "T2S",
            Self::Trojan3 => "T3S",
        }
    }
}

/// Is this letter a valid half-month letter, `A` through `Y` without `I`.
#[must_use]
pub fn is_half_month_letter(letter: char) -> bool {
    matches!(letter, 'A'..='Y') && letter != 'I'
}

/// Is this letter a valid order letter, `A` through `Z` without `I`.
#[must_use]
pub fn is_order_letter(letter: char) -> bool {
    letter.is_ascii_uppercase() && letter != 'I'
}

/// Position of an order letter within the 25 order letters.
fn order_index(letter: char) -> Option<u32> {
    if !is_order_letter(letter) {
        return None;
    }
    let idx = u32::from(letter) - u32::from('A');
    Some(if letter > 'I' { idx - 1 } else { idx })
}

/// Order letter at a position, inverse of [`order_index`].
fn order_letter(idx: u32) -> Option<char> {
    if idx >= N_ORDER_LETTERS {
        return None;
    }
    let offset = if idx >= 8 { idx + 1 } else { idx };
    char::from_u32(u32::from('A') + offset)
}

/// Pack a year as a base-62 century letter followed by two digits, `1995` is `J95`.
fn pack_year(year: u32) -> DesigResult<String> {
    if !(1000..6200).contains(&year) {
        return Err(Error::OutOfRange(format!(
            "year {year} cannot be written with a century letter"
        )));
    }
    encode_mixed(year, 2)
}

/// Inverse of [`pack_year`].
fn unpack_year(packed: &str) -> Option<u32> {
    if !packed.starts_with(|c: char| c.is_ascii_alphabetic()) || packed.len() != 3 {
        return None;
    }
    decode_mixed(packed)
}

/// Counts of up to 619 are stored as a base-62 digit followed by a decimal digit.
fn pack_cycle(cycle: u32) -> DesigResult<String> {
    encode_mixed(cycle, 1)
}

/// Provisional designation of a minor planet, such as `2007 TA418`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Provisional {
    /// Year of discovery.
    pub year: u32,

    /// Half-month letter, `A` through `Y` without `I`.
    pub half_month: char,

    /// Order of discovery within the half month, `A` through `Z` without `I`.
    pub order: char,

    /// Number of times the order letters have cycled, 0 if not present.
    pub cycle: u32,
}

impl Provisional {
    /// Pack the designation.
    ///
    /// Cycle counts below [`EXTENDED_CYCLE_START`] use the 7 character form
    /// `J95X00A`. Larger counts use the extended form, which starts with an
    /// underscore, holds the year as a single base-62 digit counted from
    /// [`EXTENDED_YEAR_START`], and places the cycle count and order letter in 4
    /// base-62 digits.
    ///
    /// # Errors
    /// Letters outside their allowed sets are [`Error::UnrecognizedDesignation`],
    /// years and cycle counts which cannot be written are [`Error::OutOfRange`].
    pub fn try_pack(&self) -> DesigResult<String> {
        if !is_half_month_letter(self.half_month) {
            return Err(Error::UnrecognizedDesignation(format!(
                "{self}: invalid half-month letter"
            )));
        }
        let order = order_index(self.order).ok_or_else(|| {
            Error::UnrecognizedDesignation(format!("{self}: invalid order letter"))
        })?;

        if self.cycle < EXTENDED_CYCLE_START {
            return Ok(format!(
                "{}{}{}{}",
                pack_year(self.year)?,
                self.half_month,
                pack_cycle(self.cycle)?,
                self.order
            ));
        }

        let year = self
            .year
            .checked_sub(EXTENDED_YEAR_START)
            .and_then(digit_char)
            .ok_or_else(|| {
                Error::OutOfRange(format!(
                    "{self}: extended cycle counts are only defined for 2000 to 2061"
                ))
            })?;
        let value = u64::from(self.cycle - EXTENDED_CYCLE_START) * u64::from(N_ORDER_LETTERS)
            + u64::from(order);
        let digits = base62::encode(value, 4)
            .map_err(|_| Error::OutOfRange(format!("{self}: cycle count is too large")))?;
        Ok(format!("_{year}{}{digits}", self.half_month))
    }

    /// Read a 7 character packed provisional designation.
    fn from_packed(packed: &str) -> Option<Self> {
        if packed.len() != 7 {
            return None;
        }
        let year = unpack_year(&packed[0..3])?;
        let half_month = packed[3..4].chars().next().filter(|&c| is_half_month_letter(c))?;
        let cycle = decode_mixed(&packed[4..6])?;
        let order = packed[6..7].chars().next().filter(|&c| is_order_letter(c))?;
        Some(Self {
            year,
            half_month,
            order,
            cycle,
        })
    }

    /// Read a 7 character extended provisional designation, such as `_QC0000`.
    fn from_packed_extended(packed: &str) -> Option<Self> {
        let rest = packed.strip_prefix('_')?;
        if rest.len() != 6 {
            return None;
        }
        let mut chars = rest.chars();
        let year = EXTENDED_YEAR_START + digit_value(chars.next()?)?;
        let half_month = chars.next().filter(|&c| is_half_month_letter(c))?;
        let value = u32::try_from(base62::decode(chars.as_str())?).ok()?;
        Some(Self {
            year,
            half_month,
            order: order_letter(value % N_ORDER_LETTERS)?,
            cycle: EXTENDED_CYCLE_START + value / N_ORDER_LETTERS,
        })
    }
}

impl fmt::Display for Provisional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.year, self.half_month, self.order)?;
        if self.cycle > 0 {
            write!(f, "{}", self.cycle)?;
        }
        Ok(())
    }
}

/// Designation of a minor planet, comet, or natural satellite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Desig {
    /// Numbered minor planet, `(433)`.
    Numbered(u32),

    /// Provisional minor planet designation, `1995 XA`.
    Provisional(Provisional),

    /// Survey designation, `2040 P-L`.
    Survey {
        /// Number within the survey.
        number: u32,

        /// Survey which assigned the designation.
        survey: Survey,
    },

    /// Numbered comet, `P/41` or a fragment such as `P/3141-AZ`.
    CometNumbered {
        /// Comet prefix.
        comet_type: CometType,

        /// Comet number.
        number: u32,

        /// Fragment, one or two uppercase letters.
        fragment: Option<String>,
    },

    /// Comet provisional designation, `C/1995 O1` or `D/1993 F2-B`.
    CometProvisional {
        /// Comet prefix.
        comet_type: CometType,

        /// Year of discovery.
        year: u32,

        /// Half-month letter.
        half_month: char,

        /// Order of discovery within the half month, starting at 1.
        number: u32,

        /// Fragment letter, uppercase.
        fragment: Option<char>,
    },

    /// Comet with a minor planet style provisional designation, `C/2001 OG108`.
    CometAsteroidal {
        /// Comet prefix.
        comet_type: CometType,

        /// The provisional designation.
        provisional: Provisional,
    },

    /// Provisional natural satellite designation, `S/2003 J 2`.
    Satellite {
        /// Host planet.
        planet: Planet,

        /// Year of discovery.
        year: u32,

        /// Order of discovery within the year, starting at 1.
        number: u32,
    },

    /// Permanent natural satellite name, `Uranus XXIV`.
    PermanentSatellite {
        /// Host planet.
        planet: Planet,

        /// Satellite number.
        number: u32,
    },

    /// Identifiers which are passed through unchanged, such as `1992-044A`.
    Other(String),

    /// Text which matches no designation grammar, passed through unchanged.
    Unrecognized(String),
}

impl Desig {
    /// Category of this designation.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::Numbered(_) => Category::Numbered,
            Self::Provisional(_) | Self::Survey { .. } => Category::Provisional,
            Self::CometProvisional { .. } | Self::CometAsteroidal { .. } => {
                Category::CometProvisional
            }
            Self::CometNumbered { .. } => Category::CometNumbered,
            Self::Satellite { .. } => Category::Satellite,
            Self::PermanentSatellite { .. } => Category::PermanentSatellite,
            Self::Other(_) => Category::Other,
            Self::Unrecognized(_) => Category::Unrecognized,
        }
    }

    /// Parse an unpacked MPC designation, detecting its category from the text.
    ///
    /// Text which does not match any grammar becomes [`Desig::Unrecognized`].
    ///
    /// # Errors
    /// Fails only on empty text.
    pub fn parse_mpc_designation(text: &str) -> DesigResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::UnrecognizedDesignation(text.to_string()));
        }
        Ok(parse::any_designation(text).unwrap_or_else(|| {
            debug!(designation = text, "No designation grammar matched, passing through.");
            Self::Unrecognized(text.to_string())
        }))
    }

    /// Parse an unpacked MPC designation which must belong to the given category.
    ///
    /// A bare integer is accepted as a numbered object here, where the automatic
    /// detection of [`Desig::parse_mpc_designation`] would leave it unrecognized.
    ///
    /// # Errors
    /// [`Error::UnrecognizedDesignation`] if the text does not match the grammar of
    /// the category.
    pub fn parse_mpc_designation_as(text: &str, category: Category) -> DesigResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(Error::UnrecognizedDesignation(text.to_string()));
        }
        parse::designation_of(trimmed, category).ok_or_else(|| {
            Error::UnrecognizedDesignation(format!("{trimmed} (category {category})"))
        })
    }

    /// Pack the designation.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] for numbers, years or cycle counts which have no
    /// packed form, [`Error::UnrecognizedDesignation`] for invalid letters and for
    /// pass-through text which would not unpack to itself.
    pub fn try_pack(&self) -> DesigResult<String> {
        match self {
            Self::Numbered(number) => pack_number(*number),
            Self::Provisional(provisional) => provisional.try_pack(),
            Self::Survey { number, survey } => {
                if !(1..=9999).contains(number) {
                    return Err(Error::OutOfRange(format!(
                        "{self}: survey numbers are between 1 and 9999"
                    )));
                }
                Ok(format!("{}{number:04}", survey.packed_prefix()))
            }
            Self::CometNumbered {
                comet_type,
                number,
                fragment,
            } => {
                if !comet_type.is_numbered() {
                    return Err(Error::UnrecognizedDesignation(format!(
                        "{self}: comet type is never numbered"
                    )));
                }
                if !(1..=9999).contains(number) {
                    return Err(Error::OutOfRange(format!(
                        "{self}: comet numbers are between 1 and 9999"
                    )));
                }
                let mut packed = format!("{number:04}{}", comet_type.letter());
                if let Some(fragment) = fragment {
                    if fragment.is_empty()
                        || fragment.len() > 2
                        || !fragment.chars().all(|c| c.is_ascii_uppercase())
                    {
                        return Err(Error::UnrecognizedDesignation(format!(
                            "{self}: fragments are one or two letters"
                        )));
                    }
                    packed.push_str(&fragment.to_ascii_lowercase());
                }
                Ok(packed)
            }
            Self::CometProvisional {
                comet_type,
                year,
                half_month,
                number,
                fragment,
            } => {
                if !is_half_month_letter(*half_month) {
                    return Err(Error::UnrecognizedDesignation(format!(
                        "{self}: invalid half-month letter"
                    )));
                }
                if *number == 0 {
                    return Err(Error::OutOfRange(format!(
                        "{self}: comet numbers start at 1"
                    )));
                }
                let fragment = match fragment {
                    None => '0',
                    Some(letter) if letter.is_ascii_uppercase() => letter.to_ascii_lowercase(),
                    Some(_) => {
                        return Err(Error::UnrecognizedDesignation(format!(
                            "{self}: invalid fragment letter"
                        )));
                    }
                };
                Ok(format!(
                    "{}{}{half_month}{}{fragment}",
                    comet_type.letter(),
                    pack_year(*year)?,
                    pack_cycle(*number)?
                ))
            }
            Self::CometAsteroidal {
                comet_type,
                provisional,
            } => Ok(format!("{}{}", comet_type.letter(), provisional.try_pack()?)),
            Self::Satellite {
                planet,
                year,
                number,
            } => {
                if *number == 0 {
                    return Err(Error::OutOfRange(format!(
                        "{self}: satellite numbers start at 1"
                    )));
                }
                Ok(format!(
                    "S{}{}{}0",
                    pack_year(*year)?,
                    planet.letter(),
                    pack_cycle(*number)?
                ))
            }
            Self::PermanentSatellite { planet, number } => {
                if !(1..=999).contains(number) {
                    return Err(Error::OutOfRange(format!(
                        "{} {number}: satellite numbers are between 1 and 999",
                        planet.name()
                    )));
                }
                Ok(format!("{}{number:03}S", planet.letter()))
            }
            Self::Other(text) | Self::Unrecognized(text) => pass_through(text),
        }
    }

    /// Parse a packed MPC designation.
    ///
    /// The layout is decided from the length, the leading character, and the
    /// character classes at fixed positions, then the matching layout is decoded.
    /// Any other text, inner blanks included, is returned as
    /// [`Desig::Unrecognized`].
    ///
    /// # Errors
    /// [`Error::UnrecognizedPackedForm`] for empty text, text with control
    /// characters, and `~` or `_` prefixed text which does not decode.
    pub fn parse_mpc_packed_designation(text: &str) -> DesigResult<Self> {
        let packed = text.trim();
        if packed.is_empty() || packed.chars().any(char::is_control) {
            return Err(Error::UnrecognizedPackedForm(text.to_string()));
        }

        if packed.is_ascii() {
            if let Some(desig) =
                PackedLayout::classify(packed).and_then(|layout| layout.decode(packed))
            {
                return Ok(desig);
            }
        }
        if packed.starts_with(['~', '_']) {
            return Err(Error::UnrecognizedPackedForm(packed.to_string()));
        }
        debug!(designation = packed, "No packed layout matched, passing through.");
        Ok(Self::Unrecognized(packed.to_string()))
    }

    /// Pack the designation into the 12 column field of an 80 column record.
    ///
    /// Numbered objects, numbered comets and permanent satellite names fill columns
    /// 1 to 5, with any comet fragment in columns 11 and 12. Everything else is
    /// right justified against column 12.
    ///
    /// # Errors
    /// Fails if the designation cannot be packed, or if a passed through identifier
    /// is too long for the field.
    pub fn try_pack_columns(&self) -> DesigResult<String> {
        let packed = self.try_pack()?;
        match self {
            Self::Numbered(_)
            | Self::PermanentSatellite { .. }
            | Self::CometNumbered { fragment: None, .. } => Ok(format!("{packed:<COLUMN_WIDTH$}")),
            Self::CometNumbered {
                fragment: Some(fragment),
                ..
            } => Ok(format!(
                "{}{:>7}",
                &packed[..5],
                fragment.to_ascii_lowercase()
            )),
            _ if packed.len() < COLUMN_WIDTH => Ok(format!("{packed:>COLUMN_WIDTH$}")),
            _ => Err(Error::OutOfRange(format!(
                "{packed:?} does not fit in {COLUMN_WIDTH} columns"
            ))),
        }
    }

    /// Parse the 12 column designation field of an 80 column record.
    ///
    /// When column 1 is not blank the numbered part in columns 1 to 5 is used, along
    /// with a comet fragment in columns 11 and 12 if present. Any provisional
    /// designation which follows a number is ignored.
    ///
    /// # Errors
    /// See [`Desig::parse_mpc_packed_designation`].
    pub fn parse_mpc_columns(field: &str) -> DesigResult<Self> {
        if field.len() > COLUMN_WIDTH || !field.is_ascii() {
            return Err(Error::UnrecognizedPackedForm(field.to_string()));
        }
        if field.starts_with(' ') || field.len() <= 5 {
            return Self::parse_mpc_packed_designation(field);
        }

        let (head, tail) = field.split_at(5);
        let fragment = tail.trim();
        let is_fragment = !fragment.is_empty()
            && fragment.len() <= 2
            && tail.ends_with(fragment)
            && fragment.chars().all(|c| c.is_ascii_lowercase());
        if is_fragment {
            Self::parse_mpc_packed_designation(&format!("{head}{fragment}"))
        } else {
            Self::parse_mpc_packed_designation(head)
        }
    }
}

impl fmt::Display for Desig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numbered(number) => write!(f, "({number})"),
            Self::Provisional(provisional) => write!(f, "{provisional}"),
            Self::Survey { number, survey } => write!(f, "{number} {}", survey.label()),
            Self::CometNumbered {
                comet_type,
                number,
                fragment,
            } => {
                write!(f, "{}/{number}", comet_type.letter())?;
                if let Some(fragment) = fragment {
                    write!(f, "-{fragment}")?;
                }
                Ok(())
            }
            Self::CometProvisional {
                comet_type,
                year,
                half_month,
                number,
                fragment,
            } => {
                write!(f, "{}/{year} {half_month}{number}", comet_type.letter())?;
                if let Some(fragment) = fragment {
                    write!(f, "-{fragment}")?;
                }
                Ok(())
            }
            Self::CometAsteroidal {
                comet_type,
                provisional,
            } => write!(f, "{}/{provisional}", comet_type.letter()),
            Self::Satellite {
                planet,
                year,
                number,
            } => write!(f, "S/{year} {} {number}", planet.letter()),
            Self::PermanentSatellite { planet, number } => match to_roman(*number) {
                Some(numeral) => write!(f, "{} {numeral}", planet.name()),
                None => write!(f, "{} {number}", planet.name()),
            },
            Self::Other(text) | Self::Unrecognized(text) => f.write_str(text),
        }
    }
}

impl FromStr for Desig {
    type Err = Error;

    /// Equivalent to [`Desig::parse_mpc_designation`].
    fn from_str(text: &str) -> DesigResult<Self> {
        Self::parse_mpc_designation(text)
    }
}

/// Identifiers without a packed form are packed as themselves, provided that
/// unpacking gives the same text back.
fn pass_through(text: &str) -> DesigResult<String> {
    match Desig::parse_mpc_packed_designation(text) {
        Ok(Desig::Other(packed) | Desig::Unrecognized(packed)) if packed == text => Ok(packed),
        _ => Err(Error::UnrecognizedDesignation(format!(
            "{text:?} would not unpack to itself"
        ))),
    }
}

/// Pack a numbered minor planet.
fn pack_number(number: u32) -> DesigResult<String> {
    match number {
        0 => Err(Error::OutOfRange("minor planet numbers start at 1".into())),
        1..EXTENDED_NUMBER_START => encode_mixed(number, 4),
        _ => {
            let digits = base62::encode(u64::from(number - EXTENDED_NUMBER_START), 4)
                .map_err(|_| Error::OutOfRange(format!("({number}) is too large to pack")))?;
            Ok(format!("~{digits}"))
        }
    }
}

/// Layouts of packed designations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PackedLayout {
    Numbered,
    NumberedExtended,
    PermanentSatellite,
    CometNumbered,
    Provisional,
    ProvisionalExtended,
    Survey,
    Satellite,
    Comet,
    Other,
}

impl PackedLayout {
    /// Decide the layout from the structure of the packed text.
    ///
    /// The text must be non-empty printable ASCII.
    fn classify(packed: &str) -> Option<Self> {
        let bytes = packed.as_bytes();
        let digits = |range: std::ops::Range<usize>| {
            bytes
                .get(range)
                .is_some_and(|part| part.iter().all(u8::is_ascii_digit))
        };

        let layout = match (bytes.len(), bytes[0]) {
            (5, b'~') => Self::NumberedExtended,
            (5, _) if bytes[4] == b'S' && digits(1..4) => Self::PermanentSatellite,
            (5, _) if digits(1..5) => Self::Numbered,
            (5..=7, _) if digits(0..4) && matches!(bytes[4], b'P' | b'D' | b'I') => {
                Self::CometNumbered
            }
            (7, b'_') => Self::ProvisionalExtended,
            (7, _) if bytes[2] == b'S' => Self::Survey,
            (7, _) => Self::Provisional,
            (8, b'S') => Self::Satellite,
            (8, first) if CometType::from_letter(char::from(first)).is_some() => Self::Comet,
            (9..=11, _) if bytes[4] == b'-' => Self::Other,
            _ => return None,
        };
        Some(layout)
    }

    /// Decode packed text already classified as this layout.
    fn decode(self, packed: &str) -> Option<Desig> {
        match self {
            Self::Numbered => decode_mixed(packed)
                .filter(|&number| number > 0)
                .map(Desig::Numbered),
            Self::NumberedExtended => {
                let offset = u32::try_from(base62::decode(&packed[1..])?).ok()?;
                Some(Desig::Numbered(EXTENDED_NUMBER_START + offset))
            }
            Self::PermanentSatellite => {
                let planet = Planet::from_letter(char::from(packed.as_bytes()[0]))?;
                let number = packed[1..4].parse().ok().filter(|&n: &u32| n > 0)?;
                Some(Desig::PermanentSatellite { planet, number })
            }
            Self::CometNumbered => {
                let number = packed[0..4].parse().ok().filter(|&n: &u32| n > 0)?;
                let comet_type = CometType::from_letter(char::from(packed.as_bytes()[4]))?;
                let fragment = &packed[5..];
                if !fragment.chars().all(|c| c.is_ascii_lowercase()) {
                    return None;
                }
                Some(Desig::CometNumbered {
                    comet_type,
                    number,
                    fragment: (!fragment.is_empty()).then(|| fragment.to_ascii_uppercase()),
                })
            }
            Self::Provisional => Provisional::from_packed(packed).map(Desig::Provisional),
            Self::ProvisionalExtended => {
                Provisional::from_packed_extended(packed).map(Desig::Provisional)
            }
            Self::Survey => {
                let survey = Survey::ALL
                    .into_iter()
                    .find(|survey| packed.starts_with(survey.packed_prefix()))?;
                let digits = &packed[3..];
                if !digits.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                let number = digits.parse().ok().filter(|&n: &u32| n > 0)?;
                Some(Desig::Survey { number, survey })
            }
            Self::Satellite => {
                let year = unpack_year(&packed[1..4])?;
                let planet = Planet::from_letter(char::from(packed.as_bytes()[4]))?;
                let number = decode_mixed(&packed[5..7]).filter(|&n| n > 0)?;
                (packed.as_bytes()[7] == b'0').then_some(Desig::Satellite {
                    planet,
                    year,
                    number,
                })
            }
            Self::Comet => {
                let comet_type = CometType::from_letter(char::from(packed.as_bytes()[0]))?;
                let body = &packed[1..];
                if body.starts_with('_') {
                    return Provisional::from_packed_extended(body).map(|provisional| {
                        Desig::CometAsteroidal {
                            comet_type,
                            provisional,
                        }
                    });
                }
                let last = char::from(body.as_bytes()[6]);
                if last.is_ascii_uppercase() {
                    return Provisional::from_packed(body).map(|provisional| {
                        Desig::CometAsteroidal {
                            comet_type,
                            provisional,
                        }
                    });
                }
                let year = unpack_year(&body[0..3])?;
                let half_month = char::from(body.as_bytes()[3]);
                if !is_half_month_letter(half_month) {
                    return None;
                }
                let number = decode_mixed(&body[4..6]).filter(|&n| n > 0)?;
                let fragment = match last {
                    '0' => None,
                    'a'..='z' => Some(last.to_ascii_uppercase()),
                    _ => return None,
                };
                Some(Desig::CometProvisional {
                    comet_type,
                    year,
                    half_month,
                    number,
                    fragment,
                })
            }
            Self::Other => parse::is_other(packed).then(|| Desig::Other(packed.to_string())),
        }
    }
}

/// Pack a designation, see [`Desig::try_pack`].
///
/// Without a category the grammar is detected from the text, and text which matches
/// no grammar is returned unchanged.
///
/// # Errors
/// See [`Desig::parse_mpc_designation_as`] and [`Desig::try_pack`].
pub fn pack(text: &str, category: Option<Category>) -> DesigResult<String> {
    let desig = match category {
        Some(category) => Desig::parse_mpc_designation_as(text, category)?,
        None => Desig::parse_mpc_designation(text)?,
    };
    desig.try_pack()
}

/// Unpack a packed designation, returning the readable form and its category.
///
/// # Errors
/// See [`Desig::parse_mpc_packed_designation`].
pub fn unpack(packed: &str) -> DesigResult<(String, Category)> {
    let desig = Desig::parse_mpc_packed_designation(packed)?;
    Ok((desig.to_string(), desig.category()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_DESIGS: &str = include_str!("../../data/test_des.txt");

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    }

    #[test]
    fn test_fixture() {
        init_logging();
        let entries = parse_fixture(TEST_DESIGS).unwrap();
        assert!(entries.len() > 50);

        for entry in entries {
            let packed = pack(&entry.unpacked, Some(entry.category)).unwrap();
            assert_eq!(packed, entry.packed, "packing {:?}", entry.unpacked);

            let auto = pack(&entry.unpacked, None).unwrap();
            assert_eq!(auto, entry.packed, "detecting {:?}", entry.unpacked);

            let (unpacked, category) = unpack(&entry.packed).unwrap();
            assert_eq!(category, entry.category, "category of {:?}", entry.packed);
            if entry.category == Category::PermanentSatellite {
                // Arabic numerals come back as Roman numerals.
                assert_eq!(pack(&unpacked, Some(category)).unwrap(), entry.packed);
                assert!(!unpacked.contains(|c: char| c.is_ascii_digit()));
            } else {
                assert_eq!(unpacked, entry.unpacked, "unpacking {:?}", entry.packed);
            }
        }
    }

    #[test]
    fn test_known_cases() {
        assert_eq!(pack("1995 XA", Some(Category::Provisional)).unwrap(), "J95X00A");
        assert_eq!(
            unpack("J95X00A").unwrap(),
            ("1995 XA".into(), Category::Provisional)
        );
        assert_eq!(pack("(433)", Some(Category::Numbered)).unwrap(), "00433");
        assert_eq!(pack("(620000)", Some(Category::Numbered)).unwrap(), "~0000");
        assert_eq!(pack("(620036)", Some(Category::Numbered)).unwrap(), "~000a");
        assert_eq!(pack("S/2003 J 2", Some(Category::Satellite)).unwrap(), "SK03J020");
        assert_eq!(pack("P/41", Some(Category::CometNumbered)).unwrap(), "0041P");
        assert_eq!(
            pack("Neptune 210", Some(Category::PermanentSatellite)).unwrap(),
            "N210S"
        );
        assert_eq!(
            unpack("N210S").unwrap(),
            ("Neptune CCX".into(), Category::PermanentSatellite)
        );
        assert_eq!(
            unpack("WT1190F").unwrap(),
            ("WT1190F".into(), Category::Unrecognized)
        );
        assert_eq!(pack("2026 CA620", Some(Category::Provisional)).unwrap(), "_QC0000");
        assert_eq!(
            unpack("_QC0000").unwrap(),
            ("2026 CA620".into(), Category::Provisional)
        );
    }

    #[test]
    fn test_category_codes() {
        for category in Category::ALL {
            assert_eq!(Category::try_from(category.code()).unwrap(), category);
        }
        assert!(Category::try_from(7).is_err());
        assert!(Category::try_from(-2).is_err());
        assert_eq!(Category::Unrecognized.to_string(), "-1");
    }

    #[test]
    fn test_order_letters() {
        let letters: String = (0..N_ORDER_LETTERS).filter_map(order_letter).collect();
        assert_eq!(letters, "ABCDEFGHJKLMNOPQRSTUVWXYZ");
        for (idx, letter) in letters.chars().enumerate() {
            assert_eq!(order_index(letter), Some(idx as u32));
        }
        assert_eq!(order_index('I'), None);
        assert_eq!(order_letter(25), None);
    }

    #[test]
    fn test_out_of_range() {
        let out_of_range = |result: DesigResult<String>| matches!(result, Err(Error::OutOfRange(_)));

        assert!(out_of_range(pack("(0)", None)));
        assert!(out_of_range(pack("(15396336)", None)));
        assert!(out_of_range(pack("(99999999999)", None)));
        assert!(out_of_range(pack("2061 YM591673", None)));
        assert!(out_of_range(pack("2062 AA620", None)));
        assert!(out_of_range(pack("1999 AA620", None)));
        assert!(out_of_range(pack("0999 AA", None)));
        assert!(out_of_range(pack("C/1995 O620", None)));
        assert!(out_of_range(pack("C/1995 O0", None)));
        assert!(out_of_range(pack("S/2003 J 620", None)));
        assert!(out_of_range(pack("P/10000", None)));
        assert!(out_of_range(pack("Neptune 1000", None)));
        assert!(out_of_range(pack("0 P-L", None)));
    }

    #[test]
    fn test_unrecognized_designation() {
        let unrecognized =
            |result: DesigResult<String>| matches!(result, Err(Error::UnrecognizedDesignation(_)));

        assert!(unrecognized(pack("1995 XA", Some(Category::Numbered))));
        assert!(unrecognized(pack("1995 IA", Some(Category::Provisional))));
        assert!(unrecognized(pack("C/1995 O1", Some(Category::CometNumbered))));
        assert!(unrecognized(pack("C/41", Some(Category::CometNumbered))));
        assert!(unrecognized(pack("Earth I", Some(Category::PermanentSatellite))));
        assert!(unrecognized(pack("", None)));

        // without a category unknown text passes through
        assert_eq!(pack("1995 IA", None).unwrap(), "1995 IA");
        assert_eq!(pack("  WT1190F ", None).unwrap(), "WT1190F");
        assert_eq!(pack("433", None).unwrap(), "433");
        assert_eq!(pack("433", Some(Category::Numbered)).unwrap(), "00433");
        assert_eq!(pack("anything", Some(Category::Other)).unwrap(), "anything");
    }

    #[test]
    fn test_unrecognized_packed() {
        for packed in ["", "   ", "~00!0", "~000", "_QI0000", "_QC00", "~ab cd", "J95\tX00A"] {
            assert!(
                matches!(unpack(packed), Err(Error::UnrecognizedPackedForm(_))),
                "{packed:?} should fail"
            );
        }

        // invalid letters or zero counts inside a layout are not designations
        for packed in [
            "00000",
            "J95I00A",
            "J95X00I",
            "CJ95O000",
            "SK03J021",
            "0000P",
            "Q013S",
            "J95 X00A",
            "J95X00A\u{e9}",
        ] {
            assert_eq!(
                unpack(packed).unwrap(),
                (packed.to_string(), Category::Unrecognized)
            );
        }

        assert_eq!(
            unpack("   J95X00A").unwrap(),
            ("1995 XA".into(), Category::Provisional)
        );
    }

    #[test]
    fn test_pass_through_identity() {
        init_logging();
        let texts = [
            "1995 IA",
            "WT 1190F",
            "X/41 junk",
            "WT1190F",
            "9496058",
            "433",
            "00000",
            "anything at all",
            "Ceres \u{e9}",
        ];
        for text in texts {
            for category in [None, Some(Category::Unrecognized)] {
                let packed = pack(text, category).unwrap();
                assert_eq!(packed, text, "packing {text:?}");
                assert_eq!(
                    unpack(&packed).unwrap(),
                    (text.to_string(), Category::Unrecognized),
                    "unpacking {packed:?}"
                );
            }
        }

        // text which unpacks to something else has no pass-through form
        let unrecognized =
            |result: DesigResult<String>| matches!(result, Err(Error::UnrecognizedDesignation(_)));
        for text in ["J95X00A", "~0000", "_QC0000", "~bad", "N210S", "WT\u{7}1190F"] {
            assert!(unrecognized(pack(text, None)), "{text:?} should fail");
            assert!(
                unrecognized(pack(text, Some(Category::Unrecognized))),
                "{text:?} should fail"
            );
        }
    }

    #[test]
    fn test_lossy_satellites() {
        for text in ["Neptune 210", "Neptune CCX"] {
            let packed = pack(text, None).unwrap();
            assert_eq!(packed, "N210S");
            assert_eq!(unpack(&packed).unwrap().0, "Neptune CCX");
        }
    }

    #[test]
    fn test_desig_round_trip() {
        let desigs = [
            Desig::Numbered(1),
            Desig::Numbered(619_999),
            Desig::Numbered(620_000),
            Desig::Numbered(15_396_335),
            Desig::Provisional(Provisional {
                year: 2035,
                half_month: 'Y',
                order: 'Z',
                cycle: 999,
            }),
            Desig::CometNumbered {
                comet_type: CometType::Defunct,
                number: 9999,
                fragment: Some("Z".into()),
            },
            Desig::CometAsteroidal {
                comet_type: CometType::Periodic,
                provisional: Provisional {
                    year: 2050,
                    half_month: 'A',
                    order: 'B',
                    cycle: 1234,
                },
            },
            Desig::Satellite {
                planet: Planet::Pluto,
                year: 2011,
                number: 1,
            },
        ];
        for desig in desigs {
            let packed = desig.try_pack().unwrap();
            assert_eq!(Desig::parse_mpc_packed_designation(&packed).unwrap(), desig);
            assert_eq!(Desig::parse_mpc_designation(&desig.to_string()).unwrap(), desig);
        }
    }

    #[test]
    fn test_serde() {
        let entries = parse_fixture(TEST_DESIGS).unwrap();
        for entry in entries {
            let desig = Desig::parse_mpc_packed_designation(&entry.packed).unwrap();
            let json = serde_json::to_string(&desig).unwrap();
            let loaded: Desig = serde_json::from_str(&json).unwrap();
            assert_eq!(loaded, desig, "{json}");
            assert_eq!(loaded.try_pack().unwrap(), entry.packed);
        }

        let json = serde_json::to_string(&Desig::Numbered(433)).unwrap();
        assert_eq!(json, r#"{"Numbered":433}"#);
        let category: Category = serde_json::from_str(r#""CometNumbered""#).unwrap();
        assert_eq!(category, Category::CometNumbered);
    }

    #[test]
    fn test_columns() {
        let cases = [
            ("(433)", "00433       "),
            ("1995 XA", "     J95X00A"),
            ("C/1995 O1", "    CJ95O010"),
            ("P/73-B", "0073P      b"),
            ("P/3141-AZ", "3141P     az"),
            ("Jupiter XIII", "J013S       "),
            ("WT1190F", "     WT1190F"),
        ];
        for (text, field) in cases {
            let desig = Desig::parse_mpc_designation(text).unwrap();
            assert_eq!(desig.try_pack_columns().unwrap(), field);
            assert_eq!(Desig::parse_mpc_columns(field).unwrap(), desig);
        }

        // number takes precedence over the provisional designation
        assert_eq!(
            Desig::parse_mpc_columns("z9987K06UJ8Y").unwrap(),
            Desig::Numbered(619_987)
        );
        assert!(Desig::parse_mpc_columns("0123456789ABC").is_err());
        assert!(
            Desig::Unrecognized("ABCDEFGHIJKL".into())
                .try_pack_columns()
                .is_err()
        );
    }
}
