//! Scale patterns and keys.
//!
//! A `Key` is a root pitch class paired with one of the four supported
//! seven-note patterns. Scale degrees are 1-based and cyclic, so degree 8 is
//! the tonic again.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pitch::{Note, PitchClass};

/// The number of degrees in every supported scale.
pub const DEGREE_COUNT: usize = 7;

/// Semitone offsets from the root, one per degree, strictly increasing.
pub type ScaleOffsets = [u8; DEGREE_COUNT];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalePattern {
    #[default]
    #[serde(rename = "major")]
    Major,
    #[serde(rename = "minor")]
    NaturalMinor,
    #[serde(rename = "harmonic")]
    HarmonicMinor,
    #[serde(rename = "melodic")]
    MelodicMinor,
}

impl ScalePattern {
    pub const ALL: [ScalePattern; 4] = [
        ScalePattern::Major,
        ScalePattern::NaturalMinor,
        ScalePattern::HarmonicMinor,
        ScalePattern::MelodicMinor,
    ];

    pub fn offsets(self) -> &'static ScaleOffsets {
        match self {
            ScalePattern::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScalePattern::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            ScalePattern::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            ScalePattern::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
        }
    }

    /// The short identifier used by selection state and config files.
    pub fn id(self) -> &'static str {
        match self {
            ScalePattern::Major => "major",
            ScalePattern::NaturalMinor => "minor",
            ScalePattern::HarmonicMinor => "harmonic",
            ScalePattern::MelodicMinor => "melodic",
        }
    }

    pub fn from_id(id: &str) -> Option<ScalePattern> {
        ScalePattern::ALL.iter().copied().find(|pattern| pattern.id() == id)
    }

    /// Every pattern except `Major` takes the minor chord-quality template and
    /// lowercase numerals.
    pub fn is_minor_like(self) -> bool {
        self != ScalePattern::Major
    }
}

impl fmt::Display for ScalePattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ScalePattern {
    type Err = Error;

    fn from_str(input: &str) -> Result<ScalePattern> {
        ScalePattern::from_id(input).ok_or_else(|| Error::UnknownScale(input.to_string()))
    }
}

/// The pitch classes of a scale in degree order.
///
/// Element `i` is `(root + pattern[i]) mod 12`.
pub fn scale_pitch_classes(root: PitchClass, pattern: ScalePattern) -> [PitchClass; DEGREE_COUNT] {
    pattern.offsets().map(|offset| root.transpose(i32::from(offset)))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub root: PitchClass,
    pub pattern: ScalePattern,
}

impl Key {
    /// Construct and return a new `Key`.
    pub fn new(root: PitchClass, pattern: ScalePattern) -> Key {
        Key { root, pattern }
    }

    pub fn major(root: PitchClass) -> Key {
        Key::new(root, ScalePattern::Major)
    }

    pub fn minor(root: PitchClass) -> Key {
        Key::new(root, ScalePattern::NaturalMinor)
    }

    /// Resolve a key from selection text.
    ///
    /// This never fails: an unrecognised root falls back to C and an
    /// unrecognised scale identifier falls back to major.
    pub fn from_names(root: &str, scale: &str) -> Key {
        let root_pc = PitchClass::from_name(root).unwrap_or_else(|| {
            tracing::debug!(root, "unrecognised key root, falling back to C");
            PitchClass::C
        });

        let pattern = ScalePattern::from_id(scale).unwrap_or_else(|| {
            tracing::debug!(scale, "unrecognised scale, falling back to major");
            ScalePattern::Major
        });

        Key::new(root_pc, pattern)
    }

    pub fn pitch_classes(&self) -> [PitchClass; DEGREE_COUNT] {
        scale_pitch_classes(self.root, self.pattern)
    }

    /// The pitch class of a 1-based degree. Degrees wrap, so 8 is the tonic.
    pub fn degree(&self, degree: usize) -> PitchClass {
        let index = (degree % DEGREE_COUNT + DEGREE_COUNT - 1) % DEGREE_COUNT;
        self.root.transpose(i32::from(self.pattern.offsets()[index]))
    }

    pub fn is_minor_like(&self) -> bool {
        self.pattern.is_minor_like()
    }

    /// Zero-based position of a pitch class within the scale.
    pub fn position_of(&self, pitch_class: PitchClass) -> Option<usize> {
        self.pitch_classes().iter().position(|&pc| pc == pitch_class)
    }

    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.position_of(pitch_class).is_some()
    }

    /// The seven scale notes ascending from the tonic in `octave`.
    pub fn notes_from(&self, octave: i32) -> Vec<Note> {
        let tonic = Note::new(self.root, octave);
        self.pattern
            .offsets()
            .iter()
            .map(|&offset| tonic.transpose(i32::from(offset)))
            .collect()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.root, self.pattern)
    }
}
