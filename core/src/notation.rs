//! Throw notation: the textual form of a single dart's result.
//!
//! Notation is case-insensitive and surrounding whitespace is ignored. The
//! accepted forms are a bare segment number (`5`), a doubled or tripled
//! segment (`D16`, `T20`), the bulls (`BULL`/`50` for the inner bull,
//! `OB`/`25` for the outer ring), the literal `0`, and the empty string for
//! a dart that was not thrown or scored nothing.
//!
//! Parsing is pure: the same input always yields the same result, and
//! nothing here touches game state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One dart's result, parsed from notation.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub enum Throw {
    /// An unthrown or scoreless dart (empty notation or the literal `0`).
    Miss,
    /// A plain segment hit, 1 through 20.
    Single(u8),
    /// The double ring of a segment.
    Double(u8),
    /// The triple ring of a segment.
    Triple(u8),
    /// The outer bull, worth 25.
    OuterBull,
    /// The inner bull, worth 50.
    InnerBull,
}

impl Throw {
    /// The point value of this throw.
    pub fn value(self) -> u32 {
        match self {
            Throw::Miss => 0,
            Throw::Single(segment) => u32::from(segment),
            Throw::Double(segment) => 2 * u32::from(segment),
            Throw::Triple(segment) => 3 * u32::from(segment),
            Throw::OuterBull => 25,
            Throw::InnerBull => 50,
        }
    }
}

impl FromStr for Throw {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let value = raw.to_ascii_uppercase();
        match value.as_str() {
            "" | "0" => return Ok(Throw::Miss),
            "BULL" | "50" => return Ok(Throw::InnerBull),
            "OB" | "25" => return Ok(Throw::OuterBull),
            _ => {}
        }

        let (multiplier, digits): (fn(u8) -> Throw, &str) =
            if let Some(rest) = value.strip_prefix('T') {
                (Throw::Triple, rest)
            } else if let Some(rest) = value.strip_prefix('D') {
                (Throw::Double, rest)
            } else {
                (Throw::Single, value.as_str())
            };

        Ok(multiplier(parse_segment(digits, raw)?))
    }
}

/// Parse a segment number. The digits must round-trip exactly (no leading
/// zeros, sign, or stray characters) and land on the board, in 1..=20.
fn parse_segment(digits: &str, raw: &str) -> Result<u8, NotationError> {
    let segment = digits
        .parse::<u32>()
        .map_err(|_| NotationError::Unrecognized(raw.to_string()))?;
    if segment.to_string() != digits {
        return Err(NotationError::Unrecognized(raw.to_string()));
    }
    if segment < 1 || segment > 20 {
        return Err(NotationError::SegmentOutOfRange(segment));
    }
    Ok(segment as u8)
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotationError {
    #[error("unrecognized throw notation {0:?}")]
    Unrecognized(String),
    #[error("segment {0} is not on the board (1-20)")]
    SegmentOutOfRange(u32),
}

/// Whether `input` is acceptable throw notation.
pub fn validate(input: &str) -> bool {
    input.parse::<Throw>().is_ok()
}

/// The point value of `input`, or 0 if it isn't valid notation. Callers that
/// want to reject bad input instead of scoring it as a miss should run
/// [`validate`] (or parse a [`Throw`] themselves) first.
pub fn parse_score(input: &str) -> u32 {
    input.parse::<Throw>().map(Throw::value).unwrap_or(0)
}

/// Parse a whole turn's worth of per-dart notations into point values,
/// failing on the first invalid entry.
pub fn parse_turn<'a, I>(inputs: I) -> Result<Vec<u32>, NotationError>
where
    I: IntoIterator<Item = &'a str>,
{
    inputs
        .into_iter()
        .map(|input| input.parse::<Throw>().map(Throw::value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_score, parse_turn, validate, NotationError, Throw};

    #[test]
    pub fn test_validate_accepts_known_forms() {
        for input in &[
            "", "0", "5", "20", "T20", "D16", "t1", "d20", "BULL", "bull", "50", "OB", "ob", "25",
            "  T20  ",
        ] {
            assert!(validate(input), "{:?} should be valid", input);
        }
    }

    #[test]
    pub fn test_validate_rejects_malformed_input() {
        for input in &[
            "T21", "D0", "21", "ABC", "TD5", "DD5", "T", "D", "5.5", "+5", "-5", "007", "020",
            "T 20", "BULLS", "500",
        ] {
            assert!(!validate(input), "{:?} should be invalid", input);
        }
    }

    #[test]
    pub fn test_scoring_values() {
        assert_eq!(parse_score(""), 0);
        assert_eq!(parse_score("0"), 0);
        assert_eq!(parse_score("5"), 5);
        assert_eq!(parse_score("T20"), 60);
        assert_eq!(parse_score("D20"), 40);
        assert_eq!(parse_score("d16"), 32);
        assert_eq!(parse_score("BULL"), 50);
        assert_eq!(parse_score("50"), 50);
        assert_eq!(parse_score("OB"), 25);
        assert_eq!(parse_score("25"), 25);
        assert_eq!(parse_score(" t19 "), 57);
    }

    #[test]
    pub fn test_parse_score_degrades_to_zero_on_bad_input() {
        assert_eq!(parse_score("ABC"), 0);
        assert_eq!(parse_score("T21"), 0);
        assert_eq!(parse_score("D0"), 0);
    }

    #[test]
    pub fn test_parse_errors_distinguish_range_from_garbage() {
        assert_eq!(
            "T21".parse::<Throw>().unwrap_err(),
            NotationError::SegmentOutOfRange(21)
        );
        assert_eq!(
            "D0".parse::<Throw>().unwrap_err(),
            NotationError::SegmentOutOfRange(0)
        );
        assert_eq!(
            "T1X".parse::<Throw>().unwrap_err(),
            NotationError::Unrecognized("T1X".to_string())
        );
        assert_eq!(
            "007".parse::<Throw>().unwrap_err(),
            NotationError::Unrecognized("007".to_string())
        );
    }

    #[test]
    pub fn test_parse_turn_converts_or_fails_as_a_unit() {
        assert_eq!(parse_turn(vec!["T20", "", "D16"]), Ok(vec![60, 0, 32]));
        assert_eq!(
            parse_turn(vec!["T20", "huh", "D16"]),
            Err(NotationError::Unrecognized("huh".to_string()))
        );
    }
}
