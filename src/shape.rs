//! Fixed open and barre chord shapes for a six-string guitar in standard
//! tuning.
//!
//! Shapes are looked up, never computed. A symbol without an entry is
//! `ShapeLookup::Pending`, which renderers show as "diagram pending".
//!
//! ```
//! use harmonylab::shape::{shape_for, ShapeLookup, StringFret};
//!
//! match shape_for("Bb") {
//!     ShapeLookup::Shape(shape) => assert_eq!(shape.frets[0], StringFret::Muted),
//!     ShapeLookup::Pending => unreachable!(),
//! }
//! assert_eq!(shape_for("C7"), ShapeLookup::Pending);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chord::ChordSymbol;
use crate::fretboard::GUITAR_STRING_COUNT;

/// What a single string does in a chord shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringFret {
    Muted,

    /// A fretted string; `0` is the open string.
    Fret(u8),
}

impl fmt::Display for StringFret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            StringFret::Muted => f.write_str("x"),
            StringFret::Fret(fret) => write!(f, "{}", fret),
        }
    }
}

/// Per-string frets from low E to high E.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChordShape {
    pub frets: [StringFret; GUITAR_STRING_COUNT],
}

/// The five-fret slice of the neck a diagram should draw.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagramWindow {
    pub start: u8,
    pub end: u8,

    /// Lowest fretted note when the shape sits above the first fret, shown as
    /// a position label such as `5fr`.
    pub base_fret: Option<u8>,
}

/// Rows drawn by a diagram.
const WINDOW_FRETS: u8 = 5;

impl ChordShape {
    /// Lowest fret actually held down, ignoring open and muted strings.
    pub fn min_fret(&self) -> Option<u8> {
        self.frets
            .iter()
            .filter_map(|fret| match *fret {
                StringFret::Fret(n) if n > 0 => Some(n),
                _ => None,
            })
            .min()
    }

    pub fn window(&self) -> DiagramWindow {
        let lowest = self.min_fret().unwrap_or(1);
        let start = lowest.saturating_sub(1).max(1);

        DiagramWindow {
            start,
            end: start + WINDOW_FRETS - 1,
            base_fret: if lowest > 1 { Some(lowest) } else { None },
        }
    }
}

impl fmt::Display for ChordShape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, fret) in self.frets.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", fret)?;
        }
        Ok(())
    }
}

/// Result of a shape lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ShapeLookup {
    Shape(&'static ChordShape),

    /// No diagram exists for this symbol yet.
    Pending,
}

impl ShapeLookup {
    pub fn shape(self) -> Option<&'static ChordShape> {
        match self {
            ShapeLookup::Shape(shape) => Some(shape),
            ShapeLookup::Pending => None,
        }
    }

    pub fn is_pending(self) -> bool {
        self == ShapeLookup::Pending
    }
}

use self::StringFret::{Fret as F, Muted as X};

const fn shape(frets: [StringFret; GUITAR_STRING_COUNT]) -> ChordShape {
    ChordShape { frets }
}

/// Keyed by sharp spelling; flat roots are respelled before lookup.
static SHAPES: [(&str, ChordShape); 36] = [
    ("C",     shape([X,    F(3),  F(2),  F(0),  F(1),  F(0)])),
    ("Cm",    shape([X,    F(3),  F(5),  F(5),  F(4),  F(3)])),
    ("Cdim",  shape([X,    F(3),  F(4),  F(5),  F(4),  X])),
    ("C#",    shape([X,    F(4),  F(6),  F(6),  F(6),  F(4)])),
    ("C#m",   shape([X,    F(4),  F(6),  F(6),  F(5),  F(4)])),
    ("C#dim", shape([X,    F(4),  F(5),  F(6),  F(5),  X])),
    ("D",     shape([X,    X,     F(0),  F(2),  F(3),  F(2)])),
    ("Dm",    shape([X,    X,     F(0),  F(2),  F(3),  F(1)])),
    ("Ddim",  shape([X,    F(5),  F(6),  F(7),  F(6),  X])),
    ("D#",    shape([X,    F(6),  F(8),  F(8),  F(8),  F(6)])),
    ("D#m",   shape([X,    F(6),  F(8),  F(8),  F(7),  F(6)])),
    ("D#dim", shape([X,    F(6),  F(7),  F(8),  F(7),  X])),
    ("E",     shape([F(0), F(2),  F(2),  F(1),  F(0),  F(0)])),
    ("Em",    shape([F(0), F(2),  F(2),  F(0),  F(0),  F(0)])),
    ("Edim",  shape([X,    F(7),  F(8),  F(9),  F(8),  X])),
    ("F",     shape([F(1), F(3),  F(3),  F(2),  F(1),  F(1)])),
    ("Fm",    shape([F(1), F(3),  F(3),  F(1),  F(1),  F(1)])),
    ("Fdim",  shape([X,    F(8),  F(9),  F(10), F(9),  X])),
    ("F#",    shape([F(2), F(4),  F(4),  F(3),  F(2),  F(2)])),
    ("F#m",   shape([F(2), F(4),  F(4),  F(2),  F(2),  F(2)])),
    ("F#dim", shape([X,    F(9),  F(10), F(11), F(10), X])),
    ("G",     shape([F(3), F(2),  F(0),  F(0),  F(0),  F(3)])),
    ("Gm",    shape([F(3), F(5),  F(5),  F(3),  F(3),  F(3)])),
    ("Gdim",  shape([X,    F(10), F(11), F(12), F(11), X])),
    ("G#",    shape([F(4), F(6),  F(6),  F(5),  F(4),  F(4)])),
    ("G#m",   shape([F(4), F(6),  F(6),  F(4),  F(4),  F(4)])),
    ("G#dim", shape([X,    F(11), F(12), F(13), F(12), X])),
    ("A",     shape([X,    F(0),  F(2),  F(2),  F(2),  F(0)])),
    ("Am",    shape([X,    F(0),  F(2),  F(2),  F(1),  F(0)])),
    ("Adim",  shape([X,    F(12), F(13), F(14), F(13), X])),
    ("A#",    shape([X,    F(1),  F(3),  F(3),  F(3),  F(1)])),
    ("A#m",   shape([X,    F(1),  F(3),  F(3),  F(2),  F(1)])),
    ("A#dim", shape([X,    F(13), F(14), F(15), F(14), X])),
    ("B",     shape([X,    F(2),  F(4),  F(4),  F(4),  F(2)])),
    ("Bm",    shape([X,    F(2),  F(4),  F(4),  F(3),  F(2)])),
    ("Bdim",  shape([X,    F(2),  F(3),  F(4),  F(3),  X])),
];

/// The table key for a chord: sharp-spelled root plus the suffix as written.
fn table_key(chord: &ChordSymbol) -> String {
    format!("{}{}", chord.root_pitch_class().name(), chord.suffix())
}

/// Look up the diagram for a parsed chord.
pub fn shape_for_chord(chord: &ChordSymbol) -> ShapeLookup {
    let key = table_key(chord);

    match SHAPES.iter().find(|(name, _)| *name == key) {
        Some((_, shape)) => ShapeLookup::Shape(shape),
        None => {
            tracing::trace!(chord = %chord, "no chord shape, diagram pending");
            ShapeLookup::Pending
        }
    }
}

/// Look up the diagram for a chord symbol.
///
/// Unreadable symbols are `Pending` like any other symbol without a shape.
pub fn shape_for(symbol: &str) -> ShapeLookup {
    match ChordSymbol::parse(symbol).chord() {
        Some(chord) => shape_for_chord(chord),
        None => ShapeLookup::Pending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::chord::diatonic_chords;
    use crate::pitch::PitchClass;
    use crate::scale::Key;

    #[test]
    fn every_root_has_three_shapes() {
        for pc in PitchClass::all() {
            for suffix in ["", "m", "dim"].iter() {
                let symbol = format!("{}{}", pc.name(), suffix);
                assert!(!shape_for(&symbol).is_pending(), "missing {}", symbol);
            }
        }
    }

    #[test]
    fn flats_share_sharp_shapes() {
        assert_eq!(shape_for("Bb"), shape_for("A#"));
        assert_eq!(shape_for("Ebm"), shape_for("D#m"));
        assert_eq!(shape_for("Abdim"), shape_for("G#dim"));
    }

    #[test]
    fn unknown_symbols_are_pending() {
        assert!(shape_for("C7").is_pending());
        assert!(shape_for("Cmaj7").is_pending());
        assert!(shape_for("Hm").is_pending());
        assert_eq!(shape_for("").shape(), None);
    }

    #[test]
    fn diatonic_chords_all_have_shapes() {
        for pc in PitchClass::all() {
            for key in [Key::major(pc), Key::minor(pc)].iter() {
                for chord in diatonic_chords(key) {
                    assert!(!shape_for_chord(&chord).is_pending());
                }
            }
        }
    }

    #[test]
    fn open_chord_window() {
        let c = shape_for("C").shape().unwrap();
        assert_eq!(c.to_string(), "x 3 2 0 1 0");
        assert_eq!(c.min_fret(), Some(1));
        assert_eq!(
            c.window(),
            DiagramWindow { start: 1, end: 5, base_fret: None }
        );

        let em = shape_for("Em").shape().unwrap();
        assert_eq!(em.min_fret(), Some(2));
        assert_eq!(em.window().start, 1);
    }

    #[test]
    fn barre_chord_window() {
        let d_sharp = shape_for("D#").shape().unwrap();
        assert_eq!(
            d_sharp.window(),
            DiagramWindow { start: 5, end: 9, base_fret: Some(6) }
        );
    }
}
