//! Defines chord qualities and chord symbols, and derives the diatonic
//! chords of a key.
//!
//! Chord symbols are free text such as `Am`, `C#dim` or `Bbmaj7`. They can
//! be built from a parsed root manually, but usually one would parse them:
//!
//! ```
//! use harmonylab::chord::{chord_tones, ChordQuality, ChordSymbol};
//! use harmonylab::pitch::PitchClass;
//!
//! let chord: ChordSymbol = "C#dim".parse().unwrap();
//! assert_eq!(chord.quality(), ChordQuality::Diminished);
//! assert_eq!(
//!     chord_tones("Am"),
//!     vec![PitchClass::A, PitchClass::C, PitchClass::E]
//! );
//! ```
//!
//! All chords have an implicit root interval of zero.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser;
use crate::pitch::{NoteName, PitchClass};
use crate::scale::{Key, DEGREE_COUNT};

/// The interval structure of a chord relative to its root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    MajorSeventh,
    MinorSeventh,
}

impl ChordQuality {
    /// Semitone intervals above the root in ascending order.
    pub fn intervals(self) -> &'static [u8] {
        use self::ChordQuality::*;

        match self {
            Major        => &[0, 4, 7],
            Minor        => &[0, 3, 7],
            Diminished   => &[0, 3, 6],
            MajorSeventh => &[0, 4, 7, 11],
            MinorSeventh => &[0, 3, 7, 10],
        }
    }

    /// The canonical suffix written after the root.
    pub fn suffix(self) -> &'static str {
        use self::ChordQuality::*;

        match self {
            Major        => "",
            Minor        => "m",
            Diminished   => "dim",
            MajorSeventh => "maj7",
            MinorSeventh => "m7",
        }
    }

    /// Infers a quality from the text following the root.
    ///
    /// The first rule that matches wins:
    ///
    /// ```text
    /// contains "dim"              => Diminished
    /// contains "maj7"             => MajorSeventh
    /// contains "m7"               => MinorSeventh
    /// an 'm' not followed by "aj" => Minor
    /// otherwise                   => Major
    /// ```
    pub fn from_suffix(suffix: &str) -> ChordQuality {
        if suffix.contains("dim") {
            ChordQuality::Diminished
        } else if suffix.contains("maj7") {
            ChordQuality::MajorSeventh
        } else if suffix.contains("m7") {
            ChordQuality::MinorSeventh
        } else if has_minor_marker(suffix) {
            ChordQuality::Minor
        } else {
            ChordQuality::Major
        }
    }
}

fn has_minor_marker(suffix: &str) -> bool {
    suffix
        .match_indices('m')
        .any(|(i, _)| !suffix[i + 1..].starts_with("aj"))
}

const MAJOR_TEMPLATE: [ChordQuality; DEGREE_COUNT] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Diminished,
];

const MINOR_TEMPLATE: [ChordQuality; DEGREE_COUNT] = [
    ChordQuality::Minor,
    ChordQuality::Diminished,
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Minor,
    ChordQuality::Major,
    ChordQuality::Major,
];

/// The triad quality on each degree of a major-like or minor-like key.
pub fn diatonic_qualities(minor_like: bool) -> &'static [ChordQuality; DEGREE_COUNT] {
    if minor_like {
        &MINOR_TEMPLATE
    } else {
        &MAJOR_TEMPLATE
    }
}

/// A chord written as a root plus a textual suffix.
///
/// The suffix is kept as written (`7`, `sus4`, `maj9`...) while `quality`
/// holds what could be inferred from it. Serialises as its text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChordSymbol {
    root: NoteName,
    suffix: String,
    quality: ChordQuality,
}

impl ChordSymbol {
    /// Construct a `ChordSymbol`, inferring its quality from `suffix`.
    pub fn new(root: NoteName, suffix: impl Into<String>) -> ChordSymbol {
        let suffix = suffix.into();
        let quality = ChordQuality::from_suffix(&suffix);
        ChordSymbol { root, suffix, quality }
    }

    /// Construct a chord from a pitch class and quality, spelled with sharps.
    pub fn from_quality(root: PitchClass, quality: ChordQuality) -> ChordSymbol {
        ChordSymbol {
            root: NoteName::from_pitch_class(root),
            suffix: quality.suffix().to_string(),
            quality,
        }
    }

    pub fn parse(input: &str) -> ParsedChord {
        match parser::parse_chord_symbol(input) {
            Some(chord) => ParsedChord::Chord(chord),
            None => ParsedChord::Unparseable(input.to_string()),
        }
    }

    pub fn root(&self) -> NoteName {
        self.root
    }

    pub fn root_pitch_class(&self) -> PitchClass {
        self.root.pitch_class()
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// Root, third, fifth and any seventh, in ascending interval order.
    pub fn chord_tones(&self) -> Vec<PitchClass> {
        let root = self.root_pitch_class();
        self.quality
            .intervals()
            .iter()
            .map(|&interval| root.transpose(i32::from(interval)))
            .collect()
    }
}

impl fmt::Display for ChordSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)
    }
}

impl FromStr for ChordSymbol {
    type Err = Error;

    fn from_str(input: &str) -> Result<ChordSymbol> {
        ChordSymbol::parse(input)
            .into_chord()
            .ok_or_else(|| Error::UnparseableChord(input.to_string()))
    }
}

impl TryFrom<String> for ChordSymbol {
    type Error = Error;

    fn try_from(input: String) -> Result<ChordSymbol> {
        input.parse()
    }
}

impl From<ChordSymbol> for String {
    fn from(chord: ChordSymbol) -> String {
        chord.to_string()
    }
}

/// The outcome of reading a chord symbol from free text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedChord {
    Chord(ChordSymbol),

    /// The text had no recognisable root; carries the original input.
    Unparseable(String),
}

impl ParsedChord {
    pub fn chord(&self) -> Option<&ChordSymbol> {
        match self {
            ParsedChord::Chord(chord) => Some(chord),
            ParsedChord::Unparseable(_) => None,
        }
    }

    pub fn into_chord(self) -> Option<ChordSymbol> {
        match self {
            ParsedChord::Chord(chord) => Some(chord),
            ParsedChord::Unparseable(_) => None,
        }
    }

    pub fn is_unparseable(&self) -> bool {
        matches!(self, ParsedChord::Unparseable(_))
    }
}

/// The seven diatonic triads of a key, in degree order.
///
/// Roots come from the key's own scale; qualities come from the major or
/// minor template.
pub fn diatonic_chords(key: &Key) -> Vec<ChordSymbol> {
    key.pitch_classes()
        .iter()
        .zip(diatonic_qualities(key.is_minor_like()).iter())
        .map(|(&root, &quality)| ChordSymbol::from_quality(root, quality))
        .collect()
}

/// The pitch classes of a chord symbol, or an empty list when the symbol has
/// no readable root.
pub fn chord_tones(symbol: &str) -> Vec<PitchClass> {
    match ChordSymbol::parse(symbol) {
        ParsedChord::Chord(chord) => chord.chord_tones(),
        ParsedChord::Unparseable(input) => {
            tracing::debug!(symbol = %input, "unparseable chord symbol, no tones");
            Vec::new()
        }
    }
}

/// Chord tones for every symbol of a progression.
///
/// A malformed symbol only empties its own entry.
pub fn progression_tones<S: AsRef<str>>(symbols: &[S]) -> Vec<Vec<PitchClass>> {
    symbols.iter().map(|symbol| chord_tones(symbol.as_ref())).collect()
}
