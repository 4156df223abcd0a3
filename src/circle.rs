//! The circle of fifths as two fixed rings of labels.
//!
//! Sector 0 is C major over A minor; each following sector is a fifth
//! higher. A sector index selects a key on either ring.

use serde::{Deserialize, Serialize};

use crate::pitch::PitchClass;
use crate::scale::{Key, ScalePattern};

/// The number of sectors around the circle.
pub const SECTOR_COUNT: usize = 12;

static MAJOR_LABELS: [&str; SECTOR_COUNT] = [
    "C", "G", "D", "A", "E", "B", "F#", "C#", "G#", "D#", "A#", "F",
];

static MINOR_LABELS: [&str; SECTOR_COUNT] = [
    "Am", "Em", "Bm", "F#m", "C#m", "G#m", "D#m", "A#m", "Fm", "Cm", "Gm", "Dm",
];

/// Which ring of the circle a selection was made on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ring {
    Major,
    Minor,
}

/// A major key and its relative minor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Sector {
    pub index: usize,
    pub major: &'static str,
    pub minor: &'static str,
}

impl Sector {
    pub fn label(&self, ring: Ring) -> &'static str {
        match ring {
            Ring::Major => self.major,
            Ring::Minor => self.minor,
        }
    }
}

/// The sector at `index`, wrapping around the circle.
pub fn sector_at(index: usize) -> Sector {
    let index = index % SECTOR_COUNT;
    Sector {
        index,
        major: MAJOR_LABELS[index],
        minor: MINOR_LABELS[index],
    }
}

/// All sectors, clockwise from C.
pub fn sectors() -> impl Iterator<Item = Sector> {
    (0..SECTOR_COUNT).map(sector_at)
}

/// The key selected by clicking `label` on `ring`.
///
/// Minor labels lose their trailing `m`. Unknown roots resolve to C as in
/// `Key::from_names`.
pub fn resolve_selection(label: &str, ring: Ring) -> Key {
    match ring {
        Ring::Major => Key::from_names(label, ScalePattern::Major.id()),
        Ring::Minor => {
            let root = label.strip_suffix('m').unwrap_or(label);
            Key::from_names(root, ScalePattern::NaturalMinor.id())
        }
    }
}

/// The sector holding `root` on `ring`, for highlighting the current key.
///
/// Every pitch class sits on exactly one sector of each ring.
pub fn sector_of(root: PitchClass, ring: Ring) -> usize {
    // A minor root sits three semitones below its relative major.
    let major_root = match ring {
        Ring::Major => root,
        Ring::Minor => root.transpose(3),
    };
    // Seven semitones per step: the fifth is its own inverse modulo 12.
    usize::from(major_root.index()) * 7 % SECTOR_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sectors_wrap() {
        assert_eq!(sector_at(0).major, "C");
        assert_eq!(sector_at(0).minor, "Am");
        assert_eq!(sector_at(11).major, "F");
        assert_eq!(sector_at(12), sector_at(0));
        assert_eq!(sectors().count(), SECTOR_COUNT);
    }

    #[test]
    fn neighbours_are_a_fifth_apart() {
        for sector in sectors() {
            let next = sector_at(sector.index + 1);
            let here = PitchClass::from_name(sector.major).unwrap();
            let there = PitchClass::from_name(next.major).unwrap();
            assert_eq!(here.interval_to(there), 7);
        }
    }

    #[test]
    fn minors_are_relative() {
        for sector in sectors() {
            let major = PitchClass::from_name(sector.major).unwrap();
            let minor = resolve_selection(sector.minor, Ring::Minor);
            assert_eq!(minor.root.interval_to(major), 3);
            assert_eq!(minor.pattern, ScalePattern::NaturalMinor);
        }
    }

    #[test]
    fn sector_lookup_matches_labels() {
        for sector in sectors() {
            let major = PitchClass::from_name(sector.major).unwrap();
            let minor = resolve_selection(sector.minor, Ring::Minor).root;
            assert_eq!(sector_of(major, Ring::Major), sector.index);
            assert_eq!(sector_of(minor, Ring::Minor), sector.index);
        }
        assert_eq!(sector_of(PitchClass::from_name("Bb").unwrap(), Ring::Major), 10);
    }

    #[test]
    fn select_major_and_minor() {
        assert_eq!(resolve_selection("G", Ring::Major), Key::major(PitchClass::G));
        assert_eq!(resolve_selection("F#m", Ring::Minor), Key::minor(PitchClass::F_SHARP));
        assert_eq!(sector_at(3).label(Ring::Minor), "F#m");
    }
}
