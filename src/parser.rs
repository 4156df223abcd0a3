//! Handles parsing of free-form note and chord text.
//!
//! Every entry point trims surrounding whitespace and must consume the whole
//! input. Failures are reported as `None`; callers decide whether that is a
//! fallback, an empty result or an `Error`.

use combine::error::ParseError;
use combine::parser::char::{char, digit};
use combine::{any, eof, many, many1, one_of, optional, satisfy_map, Parser, Stream};

use crate::chord::ChordSymbol;
use crate::pitch::{Letter, Note, NoteName, PitchOffset};

/// Parses a single accidental.
///
/// ```text
/// Accidental : 'b' '#' '♭' '♯'
///            ;
/// ```
fn accidental<Input>() -> impl Parser<Input, Output = PitchOffset>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    one_of("b#♭♯".chars())
        .map(|x| match x {
            '#' | '♯' => 1,
            _ => -1,
        })
        .expected("Accidental: [b#♭♯]")
}

/// Parses a root note plus an optional accidental.
///
/// ```text
/// NoteName : [A-G] Accidental?
///          ;
/// ```
fn note_name<Input>() -> impl Parser<Input, Output = NoteName>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let letter = satisfy_map(Letter::from_char).expected("Note: [A-G]");

    (letter, optional(accidental()))
        .map(|(letter, offset)| NoteName::new(letter, offset.unwrap_or(0)))
}

/// Parses a signed octave number.
///
/// Octaves which do not fit in an `i8` are rejected by yielding `None`.
///
/// ```text
/// Octave : '-'? [0-9]+
///        ;
/// ```
fn octave<Input>() -> impl Parser<Input, Output = Option<i32>>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (optional(char('-')), many1(digit()))
        .map(|(sign, digits): (Option<char>, String)| {
            digits.parse::<i8>().ok().map(|value| {
                let value = i32::from(value);
                if sign.is_some() { -value } else { value }
            })
        })
        .expected("Octave: -?[0-9]+")
}

/// Parses a note with its octave, as used for open strings.
///
/// ```text
/// Note : NoteName Octave
///      ;
/// ```
fn note<Input>() -> impl Parser<Input, Output = Option<Note>>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (note_name(), octave())
        .map(|(name, octave)| octave.map(|octave| Note::from_name(name, octave)))
}

/// Parses a chord symbol.
///
/// Everything following the root is kept verbatim as the suffix; the chord
/// quality is inferred from it by `ChordQuality::from_suffix`.
///
/// ```text
/// ChordSymbol : NoteName .*
///             ;
/// ```
fn chord_symbol<Input>() -> impl Parser<Input, Output = ChordSymbol>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (note_name(), many(any()))
        .map(|(root, suffix): (NoteName, String)| ChordSymbol::new(root, suffix))
}

pub fn parse_note_name(input: &str) -> Option<NoteName> {
    note_name()
        .skip(eof())
        .parse(input.trim())
        .ok()
        .map(|(name, _)| name)
}

pub fn parse_note(input: &str) -> Option<Note> {
    note()
        .skip(eof())
        .parse(input.trim())
        .ok()
        .and_then(|(note, _)| note)
}

pub fn parse_chord_symbol(input: &str) -> Option<ChordSymbol> {
    chord_symbol()
        .parse(input.trim())
        .ok()
        .map(|(chord, _)| chord)
}
