//! Named tunings, progression presets and the default selection.
//!
//! The built-in library can be overridden from a TOML file. Each top-level
//! table present in the file replaces the built-in table of the same name;
//! tables left out keep their built-in contents.
//!
//! ```toml
//! [selection]
//! key = "A"
//! scale = "minor"
//! tuning = "Open G"
//! frets = 15
//!
//! [tunings]
//! "Open G" = ["D2", "G2", "D3", "G3", "B3", "D4"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fretboard::{cells_in_range, Fretboard, Tuning, DEFAULT_FRET_COUNT};
use crate::scale::{Key, ScalePattern};

/// The name of the tuning selected by default.
pub const STANDARD_TUNING: &str = "E Standard";

/// A sequence of chord symbols.
pub type Progression = Vec<String>;

/// The selection state a front end starts from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub key: String,
    pub scale: ScalePattern,
    pub tuning: String,
    pub frets: u8,
}

impl Default for Selection {
    fn default() -> Selection {
        Selection {
            key: "C".to_string(),
            scale: ScalePattern::Major,
            tuning: STANDARD_TUNING.to_string(),
            frets: DEFAULT_FRET_COUNT,
        }
    }
}

impl Selection {
    /// The selected key, with an unknown root falling back to C.
    pub fn key(&self) -> Key {
        Key::from_names(&self.key, self.scale.id())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Library {
    pub selection: Selection,
    pub tunings: BTreeMap<String, Tuning>,

    /// Progression sets keyed by mood, such as `sad` or `pop`.
    pub progressions: BTreeMap<String, Vec<Progression>>,
}

fn progression_set(progressions: &[[&str; 4]]) -> Vec<Progression> {
    progressions
        .iter()
        .map(|chords| chords.iter().map(|c| c.to_string()).collect())
        .collect()
}

impl Default for Library {
    fn default() -> Library {
        let mut tunings = BTreeMap::new();
        tunings.insert(STANDARD_TUNING.to_string(), Tuning::standard());
        tunings.insert("Drop D".to_string(), Tuning::drop_d());

        let mut progressions = BTreeMap::new();
        progressions.insert("sad".to_string(), progression_set(&[
            ["Am", "F", "C", "G"],
            ["Em", "C", "G", "D"],
            ["Dm", "Bb", "F", "C"],
            ["Cm", "Ab", "Eb", "Bb"],
            ["Bm", "G", "D", "A"],
            ["Gm", "Eb", "Bb", "F"],
            ["Em", "D", "C", "Am"],
        ]));
        progressions.insert("dark".to_string(), progression_set(&[
            ["Em", "G", "F", "Em"],
            ["Bm", "G", "A", "F#"],
            ["Cm", "Ab", "Eb", "Bb"],
            ["F#m", "D", "E", "C#"],
            ["Dm", "Gm", "Eb", "F"],
            ["Am", "F", "G", "Em"],
            ["Gm", "F", "Eb", "D"],
        ]));
        progressions.insert("asian".to_string(), progression_set(&[
            ["Am", "G", "F", "G"],
            ["Em", "D", "C", "D"],
            ["Dm", "C", "Bb", "C"],
            ["Em", "C", "D", "C"],
            ["Am", "Em", "G", "Em"],
            ["Dm", "Am", "G", "Am"],
            ["C", "G", "Am", "G"],
        ]));
        progressions.insert("ballad".to_string(), progression_set(&[
            ["C", "G", "Am", "F"],
            ["G", "Em", "C", "D"],
            ["F", "C", "Dm", "Bb"],
            ["Am", "F", "G", "C"],
            ["D", "A", "Bm", "G"],
            ["Bb", "F", "Gm", "Eb"],
            ["Em", "C", "G", "D"],
        ]));
        progressions.insert("haunted".to_string(), progression_set(&[
            ["Em", "C", "D", "B7"],
            ["Am", "F", "E", "E"],
            ["Dm", "Bb", "C", "A"],
            ["F#m", "D", "E", "C#dim"],
            ["Gm", "Eb", "F", "D"],
            ["Bm", "G", "A", "F#"],
            ["Em", "B7", "C", "Am"],
        ]));
        progressions.insert("pop".to_string(), progression_set(&[
            ["C", "G", "Am", "F"],
            ["G", "D", "Em", "C"],
            ["F", "C", "G", "Am"],
            ["D", "A", "Bm", "G"],
            ["E", "B", "C#m", "A"],
            ["A", "E", "F#m", "D"],
            ["Bb", "F", "Gm", "Eb"],
        ]));

        Library {
            selection: Selection::default(),
            tunings,
            progressions,
        }
    }
}

impl Library {
    /// Read a library from TOML text, filling absent tables with built-ins.
    pub fn from_toml(text: &str) -> Result<Library> {
        Ok(toml::from_str(text)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Library> {
        let path = path.as_ref();
        let library = Library::from_toml(&fs::read_to_string(path)?)?;

        tracing::debug!(
            path = %path.display(),
            tunings = library.tunings.len(),
            vibes = library.progressions.len(),
            "loaded library"
        );
        Ok(library)
    }

    pub fn tuning(&self, name: &str) -> Result<&Tuning> {
        self.tunings
            .get(name)
            .ok_or_else(|| Error::UnknownTuning(name.to_string()))
    }

    /// The progressions for a mood; empty when the mood is unknown.
    pub fn progressions(&self, vibe: &str) -> &[Progression] {
        self.progressions.get(vibe).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vibes(&self) -> impl Iterator<Item = &str> {
        self.progressions.keys().map(String::as_str)
    }

    pub fn selected_tuning(&self) -> Result<&Tuning> {
        self.tuning(&self.selection.tuning)
    }

    /// A freshly computed fretboard for the selected tuning and fret range.
    pub fn fretboard(&self) -> Result<Fretboard> {
        Ok(cells_in_range(self.selected_tuning()?, self.selection.frets))
    }
}
