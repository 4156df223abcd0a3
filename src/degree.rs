//! Maps chords back to scale degrees and Roman numerals.
//!
//! Matching is by root pitch class alone: the suffix of a chord is ignored,
//! so `B7` in C major is degree 7 even though the diatonic chord there is
//! `Bdim`. Numerals are cased by the key, not by the chord, so a diminished
//! seventh degree in a minor key is plain `vii`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chord::{diatonic_chords, ChordSymbol};
use crate::error::{Error, Result};
use crate::scale::{Key, DEGREE_COUNT};

/// A 1-based scale degree, always in `1..=7`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Degree(u8);

/// The vi-IV-I-V progression.
pub const SIX_FOUR_ONE_FIVE: [Degree; 4] = [Degree(6), Degree(4), Degree(1), Degree(5)];

const MAJOR_NUMERALS: [&str; DEGREE_COUNT] = ["I", "II", "III", "IV", "V", "VI", "VII"];
const MINOR_NUMERALS: [&str; DEGREE_COUNT] = ["i", "ii", "iii", "iv", "v", "vi", "vii"];

impl Degree {
    pub fn new(degree: u8) -> Result<Degree> {
        if (1..=DEGREE_COUNT as u8).contains(&degree) {
            Ok(Degree(degree))
        } else {
            Err(Error::InvalidDegree(degree))
        }
    }

    /// Degree of a zero-based scale position, which must be below 7.
    fn from_position(position: usize) -> Degree {
        Degree(position as u8 + 1)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position within the scale.
    pub fn position(self) -> usize {
        usize::from(self.0) - 1
    }

    pub fn all() -> impl Iterator<Item = Degree> {
        (0..DEGREE_COUNT).map(Degree::from_position)
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Degree {
    type Error = Error;

    fn try_from(degree: u8) -> Result<Degree> {
        Degree::new(degree)
    }
}

impl From<Degree> for u8 {
    fn from(degree: Degree) -> u8 {
        degree.0
    }
}

/// `I`..`VII` in a major-like key, `i`..`vii` in a minor-like key.
pub fn roman_numeral(degree: Degree, minor_like: bool) -> &'static str {
    if minor_like {
        MINOR_NUMERALS[degree.position()]
    } else {
        MAJOR_NUMERALS[degree.position()]
    }
}

/// The degree of a chord's root within `key`, if the root is in the scale.
pub fn degree_of_chord(chord: &ChordSymbol, key: &Key) -> Option<Degree> {
    key.position_of(chord.root_pitch_class())
        .map(Degree::from_position)
}

/// The degree of a chord symbol within `key`.
///
/// `None` when the root lies outside the scale or the symbol cannot be read.
pub fn degree_of(symbol: &str, key: &Key) -> Option<Degree> {
    ChordSymbol::parse(symbol)
        .chord()
        .and_then(|chord| degree_of_chord(chord, key))
}

/// A progression entry with its position in the key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DegreeLabel {
    pub symbol: String,
    pub degree: Option<Degree>,
    pub numeral: Option<&'static str>,
}

impl DegreeLabel {
    /// The numeral, or `?` for chords outside the key.
    pub fn display_numeral(&self) -> &'static str {
        self.numeral.unwrap_or("?")
    }
}

/// Label each chord of a progression with its degree and numeral.
pub fn label_progression<S: AsRef<str>>(symbols: &[S], key: &Key) -> Vec<DegreeLabel> {
    let minor_like = key.is_minor_like();

    symbols
        .iter()
        .map(|symbol| {
            let symbol = symbol.as_ref();
            let degree = degree_of(symbol, key);
            DegreeLabel {
                symbol: symbol.to_string(),
                degree,
                numeral: degree.map(|d| roman_numeral(d, minor_like)),
            }
        })
        .collect()
}

/// The diatonic chord and numeral on each requested degree.
pub fn chords_for_degrees(key: &Key, degrees: &[Degree]) -> Vec<(ChordSymbol, &'static str)> {
    let chords = diatonic_chords(key);
    let minor_like = key.is_minor_like();

    degrees
        .iter()
        .map(|&degree| {
            (chords[degree.position()].clone(), roman_numeral(degree, minor_like))
        })
        .collect()
}
