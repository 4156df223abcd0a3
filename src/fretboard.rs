//! Tunings and the notes sounding at each fretboard position.
//!
//! ```
//! use harmonylab::fretboard::{cells_in_range, note_at, Tuning};
//!
//! let tuning = Tuning::standard();
//! assert_eq!(note_at(&tuning, 0, 12).unwrap().to_string(), "E3");
//!
//! let board = cells_in_range(&tuning, 12);
//! assert_eq!(board.get(5, 5).unwrap().note.to_string(), "A4");
//! ```
//!
//! A `Fretboard` is a snapshot of one tuning; build a new one whenever the
//! tuning or fret range changes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pitch::{Note, PitchClass};
use crate::scale::Key;

/// The number of strings on a guitar.
pub const GUITAR_STRING_COUNT: usize = 6;

/// The fret range shown when none is configured.
pub const DEFAULT_FRET_COUNT: u8 = 12;

/// Open strings from lowest to highest pitch; the position is the string
/// index.
///
/// Serialises as the list of note names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Note>", into = "Vec<Note>")]
pub struct Tuning {
    strings: Vec<Note>,
}

impl Tuning {
    /// Construct a `Tuning`, checking that it is non-empty and ascending.
    pub fn new(strings: Vec<Note>) -> Result<Tuning> {
        if strings.is_empty() {
            return Err(Error::EmptyTuning);
        }

        for (string, pair) in strings.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(Error::UnorderedTuning {
                    string: string + 1,
                    note: pair[1].to_string(),
                    below: pair[0].to_string(),
                });
            }
        }

        Ok(Tuning { strings })
    }

    /// Construct a `Tuning` from note names such as `["E2", "A2", ...]`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Tuning> {
        let strings = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<Note>>>()?;
        Tuning::new(strings)
    }

    /// E2 A2 D3 G3 B3 E4.
    pub fn standard() -> Tuning {
        Tuning {
            strings: vec![
                Note::new(PitchClass::E, 2),
                Note::new(PitchClass::A, 2),
                Note::new(PitchClass::D, 3),
                Note::new(PitchClass::G, 3),
                Note::new(PitchClass::B, 3),
                Note::new(PitchClass::E, 4),
            ],
        }
    }

    /// D2 A2 D3 G3 B3 E4.
    pub fn drop_d() -> Tuning {
        let mut tuning = Tuning::standard();
        tuning.strings[0] = Note::new(PitchClass::D, 2);
        tuning
    }

    pub fn strings(&self) -> &[Note] {
        &self.strings
    }

    pub fn string_count(&self) -> usize {
        self.strings.len()
    }

    /// The open note of a string, if the tuning has it.
    pub fn open(&self, string: usize) -> Option<Note> {
        self.strings.get(string).copied()
    }
}

impl TryFrom<Vec<Note>> for Tuning {
    type Error = Error;

    fn try_from(strings: Vec<Note>) -> Result<Tuning> {
        Tuning::new(strings)
    }
}

impl From<Tuning> for Vec<Note> {
    fn from(tuning: Tuning) -> Vec<Note> {
        tuning.strings
    }
}

/// The note sounding at `fret` on `string`.
///
/// The pitch class is `(open + fret) mod 12` and the octave advances by one
/// for every twelve semitones counted from the open string's C. Returns
/// `None` only when the tuning has no such string.
pub fn note_at(tuning: &Tuning, string: usize, fret: u8) -> Option<Note> {
    tuning
        .open(string)
        .map(|open| open.transpose(i32::from(fret)))
}

/// One fretboard position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FretboardCell {
    pub string: usize,
    pub fret: u8,
    pub note: Note,
}

impl FretboardCell {
    pub fn pitch_class(&self) -> PitchClass {
        self.note.pitch_class
    }
}

/// A scale tone found on the fretboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleMarker {
    pub string: usize,
    pub fret: u8,
    pub pitch_class: PitchClass,
    pub is_root: bool,
}

/// Every cell of a tuning from the open string up to `max_fret` inclusive.
///
/// Only built by `cells_in_range`; it serialises for display but is never
/// read back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Fretboard {
    max_fret: u8,
    string_count: usize,
    cells: Vec<FretboardCell>,
}

/// Compute the full grid for a tuning. Nothing is cached between calls.
pub fn cells_in_range(tuning: &Tuning, max_fret: u8) -> Fretboard {
    let cells = tuning
        .strings()
        .iter()
        .enumerate()
        .flat_map(|(string, _)| {
            (0..=max_fret).filter_map(move |fret| {
                note_at(tuning, string, fret).map(|note| FretboardCell { string, fret, note })
            })
        })
        .collect();

    Fretboard {
        max_fret,
        string_count: tuning.string_count(),
        cells,
    }
}

impl Fretboard {
    pub fn max_fret(&self) -> u8 {
        self.max_fret
    }

    pub fn string_count(&self) -> usize {
        self.string_count
    }

    fn frets_per_string(&self) -> usize {
        usize::from(self.max_fret) + 1
    }

    pub fn get(&self, string: usize, fret: u8) -> Option<&FretboardCell> {
        if string >= self.string_count || fret > self.max_fret {
            return None;
        }
        self.cells.get(string * self.frets_per_string() + usize::from(fret))
    }

    /// All cells of one string, open string first.
    pub fn string(&self, string: usize) -> &[FretboardCell] {
        if string >= self.string_count {
            return &[];
        }
        let start = string * self.frets_per_string();
        self.cells
            .get(start..start + self.frets_per_string())
            .unwrap_or(&[])
    }

    /// All cells, string by string from the lowest.
    pub fn cells(&self) -> &[FretboardCell] {
        &self.cells
    }

    /// The cells whose pitch class belongs to `key`, with the tonic flagged.
    pub fn scale_markers(&self, key: &Key) -> Vec<ScaleMarker> {
        let scale = key.pitch_classes();

        self.cells
            .iter()
            .filter(|cell| scale.contains(&cell.pitch_class()))
            .map(|cell| ScaleMarker {
                string: cell.string,
                fret: cell.fret,
                pitch_class: cell.pitch_class(),
                is_root: cell.pitch_class() == key.root,
            })
            .collect()
    }
}
