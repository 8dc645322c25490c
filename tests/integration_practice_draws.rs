use std::collections::BTreeSet;

use chordmaster::catalog::{Catalog, ChordCategory};
use chordmaster::config::{FileSettingsStore, PracticeConfig, SettingsStore};
use chordmaster::inversion::{invert, InversionKind};
use chordmaster::selector::ChordSelector;
use chordmaster::session::PracticeSession;

#[test]
fn major_only_draws_are_rotations_of_documented_triads() {
    let config = PracticeConfig {
        duration_secs: 4,
        categories: BTreeSet::from([ChordCategory::Major]),
        inversions: BTreeSet::from(InversionKind::ALL),
    };
    let selector = ChordSelector::new();
    let catalog = Catalog::new();
    let majors = &catalog.lookup(ChordCategory::Major).chords;

    for _ in 0..1000 {
        let chord = selector.draw(&config);
        assert_eq!(chord.notes.len(), 3);
        let original = &majors
            .get(&chord.name)
            .unwrap_or_else(|| panic!("unknown major chord {}", chord.name))
            .notes;
        let rotations = [
            invert(original, InversionKind::Root),
            invert(original, InversionKind::First),
            invert(original, InversionKind::Second),
        ];
        assert!(
            rotations.contains(&chord.notes),
            "{} voiced as {:?} is not a rotation of {:?}",
            chord.name,
            chord.notes,
            original
        );
    }
}

#[test]
fn session_config_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chordMasterSettings.json");
    let store = FileSettingsStore::with_path(&path);

    // first run: user tweaks everything and the app persists each change
    let mut session = PracticeSession::new(store.load().unwrap_or_default());
    session.change_duration(9);
    session.toggle_category(ChordCategory::Augmented);
    session.toggle_inversion(InversionKind::First);
    store.save(session.config()).unwrap();

    // second run: the restored session picks up where the first left off
    let restored = PracticeSession::new(store.load().unwrap_or_default());
    assert_eq!(restored.config(), session.config());
    assert_eq!(restored.config().duration_secs, 9);
    assert!(restored
        .config()
        .categories
        .contains(&ChordCategory::Augmented));
    assert!(!restored.config().inversions.contains(&InversionKind::First));
}
