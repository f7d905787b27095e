//! Grammars of unpacked designations.
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

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{alpha1, anychar, char, digit1, satisfy},
    combinator::{all_consuming, map, map_opt, opt, recognize, value},
    sequence::{delimited, preceded},
};

use super::roman::from_roman;
use super::{
    Category, CometType, Desig, Planet, Provisional, Survey, is_half_month_letter,
    is_order_letter,
};

/// Digits beyond the range of a [`u32`] saturate, so that packing reports them as
/// out of range instead of the text going unrecognized.
fn to_number(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

fn number(input: &str) -> IResult<&str, u32> {
    map(digit1, to_number).parse(input)
}

fn year(input: &str) -> IResult<&str, u32> {
    map(take_while_m_n(4, 4, |c: char| c.is_ascii_digit()), to_number).parse(input)
}

fn half_month(input: &str) -> IResult<&str, char> {
    satisfy(is_half_month_letter).parse(input)
}

/// Comet prefix including the slash, `P/`.
fn comet_type(input: &str) -> IResult<&str, CometType> {
    map_opt((anychar, char('/')), |(letter, _)| CometType::from_letter(letter)).parse(input)
}

fn planet_name(input: &str) -> IResult<&str, Planet> {
    alt((
        value(Planet::Mars, tag("Mars")),
        value(Planet::Jupiter, tag("Jupiter")),
        value(Planet::Saturn, tag("Saturn")),
        value(Planet::Uranus, tag("Uranus")),
        value(Planet::Neptune, tag("Neptune")),
        value(Planet::Pluto, tag("Pluto")),
    ))
    .parse(input)
}

fn survey_label(input: &str) -> IResult<&str, Survey> {
    alt((
        value(Survey::PalomarLeiden, tag("P-L")),
        value(Survey::Trojan1, tag("T-1")),
        value(Survey::Trojan2, tag("T-2")),
        value(Survey::Trojan3, tag("T-3")),
    ))
    .parse(input)
}

/// `1995 XA`, `2007 TA418`
fn provisional_fields(input: &str) -> IResult<&str, Provisional> {
    map(
        (year, char(' '), half_month, satisfy(is_order_letter), opt(number)),
        |(year, _, half_month, order, cycle)| Provisional {
            year,
            half_month,
            order,
            cycle: cycle.unwrap_or(0),
        },
    )
    .parse(input)
}

/// `(433)`
fn numbered(input: &str) -> IResult<&str, Desig> {
    map(delimited(char('('), number, char(')')), Desig::Numbered).parse(input)
}

/// `433`, only accepted when the category is known.
fn bare_number(input: &str) -> IResult<&str, Desig> {
    map(number, Desig::Numbered).parse(input)
}

fn provisional(input: &str) -> IResult<&str, Desig> {
    map(provisional_fields, Desig::Provisional).parse(input)
}

/// `2040 P-L`
fn survey(input: &str) -> IResult<&str, Desig> {
    map((number, char(' '), survey_label), |(number, _, survey)| {
        Desig::Survey { number, survey }
    })
    .parse(input)
}

/// `P/41`, `P/3141-AZ`
fn comet_numbered(input: &str) -> IResult<&str, Desig> {
    map(
        (
            comet_type,
            number,
            opt(preceded(
                char('-'),
                take_while_m_n(1, 2, |c: char| c.is_ascii_uppercase()),
            )),
        ),
        |(comet_type, number, fragment)| Desig::CometNumbered {
            comet_type,
            number,
            fragment: fragment.map(str::to_string),
        },
    )
    .parse(input)
}

/// `C/1995 O1`, `D/1993 F2-B`
fn comet_provisional(input: &str) -> IResult<&str, Desig> {
    map(
        (
            comet_type,
            year,
            char(' '),
            half_month,
            number,
            opt(preceded(char('-'), satisfy(|c| c.is_ascii_uppercase()))),
        ),
        |(comet_type, year, _, half_month, number, fragment)| Desig::CometProvisional {
            comet_type,
            year,
            half_month,
            number,
            fragment,
        },
    )
    .parse(input)
}

/// `C/2001 OG108`
fn comet_asteroidal(input: &str) -> IResult<&str, Desig> {
    map((comet_type, provisional_fields), |(comet_type, provisional)| {
        Desig::CometAsteroidal {
            comet_type,
            provisional,
        }
    })
    .parse(input)
}

/// `S/2003 J 2`
fn satellite(input: &str) -> IResult<&str, Desig> {
    map(
        (
            tag("S/"),
            year,
            char(' '),
            map_opt(anychar, Planet::from_letter),
            char(' '),
            number,
        ),
        |(_, year, _, planet, _, number)| Desig::Satellite {
            planet,
            year,
            number,
        },
    )
    .parse(input)
}

/// `Uranus XXIV`, `Neptune 210`
fn permanent_satellite(input: &str) -> IResult<&str, Desig> {
    map(
        (
            planet_name,
            char(' '),
            alt((number, map_opt(alpha1, from_roman))),
        ),
        |(planet, _, number)| Desig::PermanentSatellite { planet, number },
    )
    .parse(input)
}

/// International designators of artificial objects, `1992-044A`.
fn other(input: &str) -> IResult<&str, Desig> {
    map(
        recognize((
            take_while_m_n(4, 4, |c: char| c.is_ascii_digit()),
            char('-'),
            take_while_m_n(3, 3, |c: char| c.is_ascii_digit()),
            take_while_m_n(1, 3, |c: char| c.is_ascii_uppercase()),
        )),
        |text: &str| Desig::Other(text.to_string()),
    )
    .parse(input)
}

/// Does the text have the form of an international designator.
pub(crate) fn is_other(text: &str) -> bool {
    all_consuming(other).parse(text).is_ok()
}

/// Match the text against every grammar.
///
/// Grammars do not overlap, so at most one of them consumes the whole text.
pub(crate) fn any_designation(text: &str) -> Option<Desig> {
    alt((
        all_consuming(numbered),
        all_consuming(survey),
        all_consuming(provisional),
        all_consuming(comet_numbered),
        all_consuming(comet_provisional),
        all_consuming(comet_asteroidal),
        all_consuming(satellite),
        all_consuming(permanent_satellite),
        all_consuming(other),
    ))
    .parse(text)
    .ok()
    .map(|(_, desig)| desig)
}

/// Match the text against the grammars of a single category.
///
/// Unrecognized and other identifiers are taken as they are.
pub(crate) fn designation_of(text: &str, category: Category) -> Option<Desig> {
    let parsed = match category {
        Category::Unrecognized => return Some(Desig::Unrecognized(text.to_string())),
        Category::Other => return Some(Desig::Other(text.to_string())),
        Category::Numbered => {
            alt((all_consuming(numbered), all_consuming(bare_number))).parse(text)
        }
        Category::Provisional => {
            alt((all_consuming(survey), all_consuming(provisional))).parse(text)
        }
        Category::CometProvisional => alt((
            all_consuming(comet_provisional),
            all_consuming(comet_asteroidal),
        ))
        .parse(text),
        Category::CometNumbered => all_consuming(comet_numbered).parse(text),
        Category::Satellite => all_consuming(satellite).parse(text),
        Category::PermanentSatellite => all_consuming(permanent_satellite).parse(text),
    };
    parsed.ok().map(|(_, desig)| desig)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammars() {
        assert_eq!(
            any_designation("2007 TA418"),
            Some(Desig::Provisional(Provisional {
                year: 2007,
                half_month: 'T',
                order: 'A',
                cycle: 418
            }))
        );
        assert_eq!(
            any_designation("3141 T-3"),
            Some(Desig::Survey {
                number: 3141,
                survey: Survey::Trojan3
            })
        );
        assert_eq!(
            any_designation("P/3141-AZ"),
            Some(Desig::CometNumbered {
                comet_type: CometType::Periodic,
                number: 3141,
                fragment: Some("AZ".into())
            })
        );
        assert_eq!(
            any_designation("D/1993 F2-B"),
            Some(Desig::CometProvisional {
                comet_type: CometType::Defunct,
                year: 1993,
                half_month: 'F',
                number: 2,
                fragment: Some('B')
            })
        );
        assert_eq!(
            any_designation("S/1945 U 599"),
            Some(Desig::Satellite {
                planet: Planet::Uranus,
                year: 1945,
                number: 599
            })
        );
        assert_eq!(
            any_designation("Uranus XXIV"),
            any_designation("Uranus 24"),
        );
        assert_eq!(
            any_designation("1963-731KHG"),
            Some(Desig::Other("1963-731KHG".into()))
        );
    }

    #[test]
    fn test_rejected() {
        for text in [
            "433",
            "(433",
            "1995 IA",
            "1995 XI",
            "1995 ZA",
            "95 XA",
            "P/3141-ABC",
            "Q/41",
            "S/2003 Q 2",
            "Neptune IIII",
            "Earth I",
            "1992-44A",
            "WT1190F",
        ] {
            assert!(any_designation(text).is_none(), "{text} should not parse");
        }
    }

    #[test]
    fn test_category_hint() {
        assert_eq!(
            designation_of("433", Category::Numbered),
            Some(Desig::Numbered(433))
        );
        assert!(designation_of("(433)", Category::Provisional).is_none());
        assert!(designation_of("P/41", Category::CometProvisional).is_none());
        assert_eq!(
            designation_of("anything at all", Category::Unrecognized),
            Some(Desig::Unrecognized("anything at all".into()))
        );
    }

    #[test]
    fn test_saturating_numbers() {
        assert_eq!(
            any_designation("(99999999999)"),
            Some(Desig::Numbered(u32::MAX))
        );
    }
}
