//! Defines the chromatic pitch model: note letters, spelled note names,
//! pitch classes and octave-bearing notes.
//!
//! Names are read with the parsers in the `parser` module, so any of the
//! common spellings are accepted on input. Output always uses a single
//! sharp-preferred spelling per pitch class.
//!
//! ```
//! use harmonylab::pitch::{Note, PitchClass};
//!
//! let eb = PitchClass::from_name("Eb").unwrap();
//! assert_eq!(eb, PitchClass::from_name("D#").unwrap());
//! assert_eq!(eb.name(), "D#");
//!
//! let low_e: Note = "E2".parse().unwrap();
//! assert_eq!(low_e.transpose(12).to_string(), "E3");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::parser;

/// The total number of pitch classes in the chromatic scale.
pub const PITCH_CLASS_COUNT: u8 = 12;

const SHARP_NAMES: [&str; PITCH_CLASS_COUNT as usize] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const FLAT_NAMES: [&str; PITCH_CLASS_COUNT as usize] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// A single note letter without accidentals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C, D, E, F, G, A, B
}

impl Letter {
    /// Construct a `Letter` from an uppercase char.
    pub fn from_char(input: char) -> Option<Letter> {
        use self::Letter::*;

        match input {
            'C' => Some(C),
            'D' => Some(D),
            'E' => Some(E),
            'F' => Some(F),
            'G' => Some(G),
            'A' => Some(A),
            'B' => Some(B),
            _   => None
        }
    }

    pub fn to_char(self) -> char {
        use self::Letter::*;

        match self {
            C => 'C',
            D => 'D',
            E => 'E',
            F => 'F',
            G => 'G',
            A => 'A',
            B => 'B',
        }
    }

    /// Semitones from C up to the natural note of this letter.
    pub fn semitones(self) -> u8 {
        use self::Letter::*;

        match self {
            C => 0,
            D => 2,
            E => 4,
            F => 5,
            G => 7,
            A => 9,
            B => 11,
        }
    }
}

/// Represents an alteration of a base `Letter`.
///
/// Positive values are sharps and negative values are flats.
pub type PitchOffset = i8;

/// A spelled note name, such as `Bb` or `F#`.
///
/// Keeps the spelling the user wrote so it can be echoed back; reduce it
/// with `pitch_class` for any arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteName {
    /// The base letter
    pub letter: Letter,

    /// The resulting shift from accidentals
    pub offset: PitchOffset,
}

impl NoteName {
    /// Construct and return a new `NoteName`.
    pub fn new(letter: Letter, offset: PitchOffset) -> NoteName {
        NoteName { letter, offset }
    }

    /// The sharp-preferred spelling of a pitch class.
    pub fn from_pitch_class(pitch_class: PitchClass) -> NoteName {
        use self::Letter::*;

        const SPELLINGS: [(Letter, PitchOffset); PITCH_CLASS_COUNT as usize] = [
            (C, 0), (C, 1), (D, 0), (D, 1), (E, 0), (F, 0),
            (F, 1), (G, 0), (G, 1), (A, 0), (A, 1), (B, 0),
        ];

        let (letter, offset) = SPELLINGS[pitch_class.index() as usize];
        NoteName::new(letter, offset)
    }

    /// Chromatic offset from C before reduction, so `Cb` is -1 and `B#` is 12.
    pub fn raw_semitones(self) -> i32 {
        i32::from(self.letter.semitones()) + i32::from(self.offset)
    }

    pub fn pitch_class(self) -> PitchClass {
        PitchClass::from_semitones(self.raw_semitones())
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter.to_char())?;
        let accidental = if self.offset < 0 { 'b' } else { '#' };
        for _ in 0..self.offset.unsigned_abs() {
            write!(f, "{}", accidental)?;
        }
        Ok(())
    }
}

impl FromStr for NoteName {
    type Err = Error;

    fn from_str(input: &str) -> Result<NoteName> {
        parser::parse_note_name(input).ok_or_else(|| Error::UnknownNote(input.to_string()))
    }
}

/// One of the twelve chromatic pitch classes, `0` being C.
///
/// Serialises as its integer index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const C_SHARP: PitchClass = PitchClass(1);
    pub const D: PitchClass = PitchClass(2);
    pub const D_SHARP: PitchClass = PitchClass(3);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const F_SHARP: PitchClass = PitchClass(6);
    pub const G: PitchClass = PitchClass(7);
    pub const G_SHARP: PitchClass = PitchClass(8);
    pub const A: PitchClass = PitchClass(9);
    pub const A_SHARP: PitchClass = PitchClass(10);
    pub const B: PitchClass = PitchClass(11);

    /// Construct a `PitchClass`, reducing the index modulo 12.
    pub fn new(index: u8) -> PitchClass {
        PitchClass(index % PITCH_CLASS_COUNT)
    }

    /// Construct a `PitchClass` from any signed chromatic offset from C.
    pub fn from_semitones(semitones: i32) -> PitchClass {
        PitchClass(semitones.rem_euclid(i32::from(PITCH_CLASS_COUNT)) as u8)
    }

    /// Look up a pitch class by name, accepting sharp and flat spellings.
    ///
    /// Returns `None` for anything which is not a letter `A`-`G` followed by
    /// at most one accidental.
    pub fn from_name(name: &str) -> Option<PitchClass> {
        parser::parse_note_name(name).map(NoteName::pitch_class)
    }

    /// Iterate all pitch classes from C upwards.
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..PITCH_CLASS_COUNT).map(PitchClass)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// The canonical (sharp-preferred) display name.
    pub fn name(self) -> &'static str {
        SHARP_NAMES[self.0 as usize]
    }

    pub fn flat_name(self) -> &'static str {
        FLAT_NAMES[self.0 as usize]
    }

    /// Move by a number of semitones, wrapping around the octave.
    pub fn transpose(self, semitones: i32) -> PitchClass {
        let count = i32::from(PITCH_CLASS_COUNT);
        PitchClass::from_semitones(i32::from(self.0) + semitones.rem_euclid(count))
    }

    /// Semitones upwards from `self` to `other`, in `0..12`.
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + PITCH_CLASS_COUNT - self.0) % PITCH_CLASS_COUNT
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    fn from_str(input: &str) -> Result<PitchClass> {
        PitchClass::from_name(input).ok_or_else(|| Error::UnknownNote(input.to_string()))
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = Error;

    fn try_from(index: u8) -> Result<PitchClass> {
        if index < PITCH_CLASS_COUNT {
            Ok(PitchClass(index))
        } else {
            Err(Error::InvalidPitchClass(index))
        }
    }
}

impl From<PitchClass> for u8 {
    fn from(pitch_class: PitchClass) -> u8 {
        pitch_class.0
    }
}

/// Index of a pitch name in the chromatic scale, or `None` if not found.
pub fn index_of(name: &str) -> Option<u8> {
    PitchClass::from_name(name).map(PitchClass::index)
}

/// Canonical name of a chromatic index. Indices wrap modulo 12.
pub fn name_of(index: usize) -> &'static str {
    SHARP_NAMES[index % PITCH_CLASS_COUNT as usize]
}

/// A pitch class in a specific octave, in scientific pitch notation.
///
/// `C4` is middle C. Spellings which cross an octave boundary are
/// normalised, so `B#3` reads as `C4`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    pub pitch_class: PitchClass,
    pub octave: i32,
}

impl Note {
    /// Construct and return a new `Note`.
    pub fn new(pitch_class: PitchClass, octave: i32) -> Note {
        Note { pitch_class, octave }
    }

    /// Construct a `Note` from a spelled name, carrying any overflow of the
    /// spelling into the octave.
    pub fn from_name(name: NoteName, octave: i32) -> Note {
        Note::new(PitchClass::C, octave).transpose(name.raw_semitones())
    }

    /// Construct a `Note` from its absolute offset above `C0`.
    ///
    /// The octave saturates at the bounds of `i32`.
    pub fn from_semitones(semitones: i64) -> Note {
        let count = i64::from(PITCH_CLASS_COUNT);
        let octave = semitones
            .div_euclid(count)
            .clamp(i64::from(i32::MIN), i64::from(i32::MAX));

        Note {
            pitch_class: PitchClass::new(semitones.rem_euclid(count) as u8),
            octave: octave as i32,
        }
    }

    /// Absolute offset above `C0`.
    pub fn semitones(self) -> i64 {
        i64::from(self.octave) * i64::from(PITCH_CLASS_COUNT) + i64::from(self.pitch_class.index())
    }

    /// Move by a number of semitones, rolling the octave over at every C.
    pub fn transpose(self, semitones: i32) -> Note {
        Note::from_semitones(self.semitones() + i64::from(semitones))
    }

    pub fn same_pitch_class(self, other: Note) -> bool {
        self.pitch_class == other.pitch_class
    }
}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Note) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Note) -> Ordering {
        self.semitones().cmp(&other.semitones())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}

impl FromStr for Note {
    type Err = Error;

    fn from_str(input: &str) -> Result<Note> {
        parser::parse_note(input).ok_or_else(|| Error::InvalidNote(input.to_string()))
    }
}

impl TryFrom<String> for Note {
    type Error = Error;

    fn try_from(input: String) -> Result<Note> {
        input.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> String {
        note.to_string()
    }
}
