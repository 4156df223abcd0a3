//! Serialised shapes of the data handed to front ends.

use harmonylab::circle::sector_at;
use harmonylab::degree::label_progression;
use harmonylab::{
    cells_in_range, shape_for, ChordShape, ChordSymbol, Key, Note, PitchClass, ScalePattern, Tuning,
};
use serde_json::json;

#[test]
fn test_key_serialises_with_ids() {
    let key = Key::new(PitchClass::A, ScalePattern::HarmonicMinor);
    assert_eq!(
        serde_json::to_value(key).unwrap(),
        json!({ "root": 9, "pattern": "harmonic" })
    );

    let back: Key = serde_json::from_value(json!({ "root": 9, "pattern": "harmonic" })).unwrap();
    assert_eq!(back, key);
}

#[test]
fn test_invalid_values_are_rejected() {
    assert!(serde_json::from_value::<PitchClass>(json!(12)).is_err());
    assert!(serde_json::from_value::<Note>(json!("H2")).is_err());
    assert!(serde_json::from_value::<Tuning>(json!(["E2", "E2"])).is_err());
    assert!(serde_json::from_value::<ChordSymbol>(json!("m7")).is_err());
}

#[test]
fn test_chords_and_notes_as_text() {
    let chord: ChordSymbol = serde_json::from_value(json!("Bbm7")).unwrap();
    assert_eq!(serde_json::to_value(&chord).unwrap(), json!("Bbm7"));

    assert_eq!(
        serde_json::to_value(Tuning::drop_d()).unwrap(),
        json!(["D2", "A2", "D3", "G3", "B3", "E4"])
    );
}

#[test]
fn test_fretboard_cell() {
    let board = cells_in_range(&Tuning::standard(), 3);
    assert_eq!(
        serde_json::to_value(board.get(2, 3).unwrap()).unwrap(),
        json!({ "string": 2, "fret": 3, "note": "F3" })
    );
}

#[test]
fn test_labels_and_sectors() {
    let labels = label_progression(&["G", "X"], &Key::major(PitchClass::C));
    assert_eq!(
        serde_json::to_value(&labels).unwrap(),
        json!([
            { "symbol": "G", "degree": 5, "numeral": "V" },
            { "symbol": "X", "degree": null, "numeral": null },
        ])
    );

    assert_eq!(
        serde_json::to_value(sector_at(2)).unwrap(),
        json!({ "index": 2, "major": "D", "minor": "Bm" })
    );
}

#[test]
fn test_chord_shapes_read_back() {
    let shape = *shape_for("C").shape().unwrap();
    let value = serde_json::to_value(shape).unwrap();
    assert_eq!(
        value,
        json!({ "frets": ["muted", { "fret": 3 }, { "fret": 2 }, { "fret": 0 }, { "fret": 1 }, { "fret": 0 }] })
    );

    let back: ChordShape = serde_json::from_value(value).unwrap();
    assert_eq!(back, shape);
    assert!(serde_json::from_value::<ChordShape>(json!({ "frets": ["muted"] })).is_err());
}
