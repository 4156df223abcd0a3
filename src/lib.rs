//! # harmonylab
//!
//! A crate providing the music theory behind a scale and chord explorer:
//! pitch-class arithmetic, scale and diatonic chord derivation, Roman numeral
//! labelling, circle-of-fifths selection and fretboard mapping.
//!
//! Every derivation is a pure function of the values passed in. A key, a
//! tuning or a chord symbol goes in and plain data comes out; nothing is
//! cached and no selection state is held.
//!
//! ```
//! use harmonylab::{diatonic_chords, degree_of, roman_numeral, Key};
//!
//! let key = Key::from_names("C", "major");
//! let chords: Vec<String> = diatonic_chords(&key).iter().map(|c| c.to_string()).collect();
//! assert_eq!(chords, ["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
//!
//! let four = degree_of("F", &key).unwrap();
//! assert_eq!(roman_numeral(four, key.is_minor_like()), "IV");
//! ```
//!
//! Malformed input never aborts a derivation: an unknown key root falls back
//! to C, an unreadable chord has no tones and no degree, and a chord without
//! a diagram is `ShapeLookup::Pending`.

pub mod chord;
pub mod circle;
pub mod degree;
mod error;
pub mod fretboard;
pub mod library;
mod parser;
pub mod pitch;
pub mod scale;
pub mod shape;

pub use chord::{chord_tones, diatonic_chords, ChordQuality, ChordSymbol, ParsedChord};
pub use circle::{resolve_selection, sector_at, Ring, Sector};
pub use degree::{degree_of, roman_numeral, Degree};
pub use error::{Error, Result};
pub use fretboard::{cells_in_range, note_at, Fretboard, FretboardCell, Tuning};
pub use library::{Library, Selection};
pub use pitch::{index_of, name_of, Note, NoteName, PitchClass};
pub use scale::{scale_pitch_classes, Key, ScalePattern};
pub use shape::{shape_for, ChordShape, ShapeLookup};
