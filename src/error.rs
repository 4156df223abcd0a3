//! Error types for fallible construction.
//!
//! The derivations themselves are total: a chord symbol that cannot be read
//! produces an empty tone list, an out-of-key chord has no degree, a missing
//! diagram is `ShapeLookup::Pending`. Only the explicit constructors
//! (`FromStr` implementations, `Tuning::from_names`, `Degree::new`) and the
//! library loader return an `Error`.
//!
//! ```
//! use harmonylab::Note;
//!
//! let err = "H2".parse::<Note>().unwrap_err();
//! assert_eq!(err.to_string(), "invalid note `H2`: expected a name such as `E2` or `Bb3`");
//! ```

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A pitch name which is not a letter `A`-`G` with an optional accidental.
    #[error("unrecognised note name `{0}`")]
    UnknownNote(String),

    /// A note with octave (`E2`) which could not be read.
    #[error("invalid note `{0}`: expected a name such as `E2` or `Bb3`")]
    InvalidNote(String),

    /// A pitch class index outside of `0..12`.
    #[error("invalid pitch class {0}, expected 0 to 11")]
    InvalidPitchClass(u8),

    /// A chord symbol without a readable root.
    #[error("unparseable chord symbol `{0}`")]
    UnparseableChord(String),

    /// A scale identifier outside of `major`, `minor`, `harmonic`, `melodic`.
    #[error("unknown scale `{0}`")]
    UnknownScale(String),

    #[error("a tuning needs at least one string")]
    EmptyTuning,

    /// Open strings must be listed from lowest to highest pitch.
    #[error("string {string} ({note}) is not above the string below it ({below})")]
    UnorderedTuning {
        string: usize,
        note: String,
        below: String,
    },

    #[error("unknown tuning `{0}`")]
    UnknownTuning(String),

    #[error("invalid scale degree {0}, expected 1 to 7")]
    InvalidDegree(u8),

    #[error("failed to read library file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid library file: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_tuning_message() {
        let err = Error::UnorderedTuning {
            string: 1,
            note: "D2".to_string(),
            below: "E2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "string 1 (D2) is not above the string below it (E2)"
        );
    }
}
