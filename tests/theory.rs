//! Integration tests for the theory derivations
//!
//! Exercises the public API the way a front end would: selection text in,
//! render data out.

use harmonylab::chord::progression_tones;
use harmonylab::circle::{sectors, sector_of};
use harmonylab::degree::label_progression;
use harmonylab::{
    cells_in_range, chord_tones, degree_of, diatonic_chords, index_of, note_at, resolve_selection,
    roman_numeral, scale_pitch_classes, sector_at, shape_for, Key, Note, PitchClass, Ring,
    ScalePattern, Tuning,
};

#[test]
fn test_scale_law_for_every_root_and_pattern() {
    for root in PitchClass::all() {
        for &pattern in ScalePattern::ALL.iter() {
            let scale = scale_pitch_classes(root, pattern);
            assert_eq!(scale.len(), 7);
            for (i, pc) in scale.iter().enumerate() {
                let expected = (root.index() + pattern.offsets()[i]) % 12;
                assert_eq!(pc.index(), expected);
                assert!(pc.index() < 12);
            }
        }
    }
}

#[test]
fn test_enharmonic_equivalence() {
    assert_eq!(index_of("D#"), index_of("Eb"));
    assert_eq!(index_of("G#"), index_of("Ab"));
    assert_eq!(index_of("A#"), index_of("Bb"));
}

#[test]
fn test_flat_key_selection_matches_sharp() {
    assert_eq!(Key::from_names("Eb", "major"), Key::from_names("D#", "major"));
    assert_eq!(
        Key::from_names("Eb", "major").pitch_classes(),
        Key::major(PitchClass::D_SHARP).pitch_classes()
    );
}

#[test]
fn test_diatonic_chords_always_seven() {
    for root in PitchClass::all() {
        for &pattern in ScalePattern::ALL.iter() {
            assert_eq!(diatonic_chords(&Key::new(root, pattern)).len(), 7);
        }
    }

    let c_major: Vec<String> = diatonic_chords(&Key::from_names("C", "major"))
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(c_major, ["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
}

#[test]
fn test_chord_tones() {
    let names = |symbol: &str| -> Vec<&'static str> {
        chord_tones(symbol).iter().map(|pc| pc.name()).collect()
    };

    assert_eq!(names("Am"), ["A", "C", "E"]);
    assert_eq!(names("C#dim"), ["C#", "E", "G"]);
    assert_eq!(names("Gmaj7"), ["G", "B", "D", "F#"]);
    assert!(names("not a chord").is_empty());
}

#[test]
fn test_progression_with_malformed_entry() {
    let tones = progression_tones(&["Am", "", "F"]);
    assert_eq!(tones[0].len(), 3);
    assert!(tones[1].is_empty());
    assert_eq!(tones[2].len(), 3);
}

#[test]
fn test_degrees_in_c_major() {
    let key = Key::from_names("C", "major");

    let f = degree_of("F", &key).unwrap();
    assert_eq!(f.get(), 4);
    assert_eq!(roman_numeral(f, false), "IV");

    // Suffixes are ignored: B7 resolves through its root B.
    let b7 = degree_of("B7", &key).unwrap();
    assert_eq!(b7.get(), 7);
    assert_eq!(roman_numeral(b7, key.is_minor_like()), "VII");

    assert_eq!(degree_of("C#", &key), None);
}

#[test]
fn test_progression_labels_in_minor() {
    let key = Key::from_names("E", "harmonic");
    let labels: Vec<_> = label_progression(&["Em", "B7", "C", "Am", "Bb"], &key)
        .iter()
        .map(|l| l.display_numeral())
        .collect();
    assert_eq!(labels, ["i", "v", "vi", "iv", "?"]);
}

#[test]
fn test_fretboard_octave_rollover() {
    let tuning = Tuning::from_names(&["E2", "A2", "D3", "G3", "B3", "E4"]).unwrap();
    let e2 = Note::new(PitchClass::E, 2);

    assert_eq!(note_at(&tuning, 0, 0), Some(e2));
    assert_eq!(note_at(&tuning, 0, 12), Some(Note::new(PitchClass::E, 3)));
    assert_eq!(note_at(&tuning, 0, 24), Some(Note::new(PitchClass::E, 4)));

    let board = cells_in_range(&tuning, 24);
    assert_eq!(board.cells().len(), 6 * 25);
    assert_eq!(board.get(0, 24).map(|c| c.note), Some(Note::new(PitchClass::E, 4)));
}

#[test]
fn test_fretboard_follows_tuning_changes() {
    let standard = cells_in_range(&Tuning::standard(), 12);
    let drop_d = cells_in_range(&Tuning::drop_d(), 12);

    assert_ne!(standard.get(0, 0), drop_d.get(0, 0));
    assert_eq!(standard.get(1, 5), drop_d.get(1, 5));
}

#[test]
fn test_idempotence() {
    let key = Key::from_names("F#", "melodic");
    let tuning = Tuning::drop_d();

    assert_eq!(diatonic_chords(&key), diatonic_chords(&key));
    assert_eq!(key.pitch_classes(), key.pitch_classes());
    assert_eq!(chord_tones("Bbm7"), chord_tones("Bbm7"));
    assert_eq!(degree_of("G#", &key), degree_of("G#", &key));
    assert_eq!(cells_in_range(&tuning, 15), cells_in_range(&tuning, 15));
    assert_eq!(shape_for("Am"), shape_for("Am"));
}

#[test]
fn test_circle_round_trip() {
    for sector in sectors() {
        let major = resolve_selection(sector_at(sector.index).major, Ring::Major);
        assert_eq!(major.root, PitchClass::from_name(sector.major).unwrap());
        assert_eq!(major.pattern, ScalePattern::Major);
        assert_eq!(sector_of(major.root, Ring::Major), sector.index);

        let minor = resolve_selection(sector.minor, Ring::Minor);
        assert_eq!(minor.pattern, ScalePattern::NaturalMinor);
        assert_eq!(sector_of(minor.root, Ring::Minor), sector.index);
    }
}

#[test]
fn test_diagrams_for_a_key() {
    let key = Key::from_names("D", "major");
    let pending: Vec<String> = diatonic_chords(&key)
        .iter()
        .map(|c| c.to_string())
        .filter(|symbol| shape_for(symbol).is_pending())
        .collect();
    assert!(pending.is_empty(), "pending diagrams: {:?}", pending);

    assert!(shape_for("Dmaj7").is_pending());
}
