use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use serde::{Deserialize, Serialize};
use serde_json::from_str;
use std::collections::BTreeMap;

static CHORD_DIR: Dir = include_dir!("src/chords");

/// Chord quality categories the practice pool can draw from.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ChordCategory {
    Major,
    Minor,
    Diminished,
    Augmented,
    #[strum(serialize = "7th")]
    Seventh,
}

impl ChordCategory {
    pub const ALL: [ChordCategory; 5] = [
        ChordCategory::Major,
        ChordCategory::Minor,
        ChordCategory::Diminished,
        ChordCategory::Augmented,
        ChordCategory::Seventh,
    ];

    /// True for 3-note chords; seventh chords are 4-note and never inverted.
    pub fn is_triad(&self) -> bool {
        !matches!(self, ChordCategory::Seventh)
    }

    /// Display key shown to the user: root label plus a quality suffix,
    /// except seventh chords which are keyed by their full symbol already.
    pub fn display_key(&self, key: &str) -> String {
        match self {
            ChordCategory::Major | ChordCategory::Seventh => key.to_string(),
            ChordCategory::Minor => format!("{key}m"),
            ChordCategory::Diminished => format!("{key}dim"),
            ChordCategory::Augmented => format!("{key}aug"),
        }
    }

    fn file_name(&self) -> &'static str {
        match self {
            ChordCategory::Major => "major.json",
            ChordCategory::Minor => "minor.json",
            ChordCategory::Diminished => "diminished.json",
            ChordCategory::Augmented => "augmented.json",
            ChordCategory::Seventh => "seventh.json",
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ChordDefinition {
    pub notes: Vec<String>,
    pub intervals: Vec<u8>,
}

#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct ChordTable {
    pub name: String,
    pub size: u32,
    pub chords: BTreeMap<String, ChordDefinition>,
}

impl ChordTable {
    pub fn new(category: ChordCategory) -> Self {
        let file = CHORD_DIR
            .get_file(category.file_name())
            .expect("Chord table file not found");

        let file_as_str = file
            .contents_utf8()
            .expect("Unable to interpret file as a string");

        from_str(file_as_str).expect("Unable to deserialize chord table json")
    }
}

/// All five chord tables, loaded once from the embedded data.
#[derive(Clone, Debug)]
pub struct Catalog {
    major: ChordTable,
    minor: ChordTable,
    diminished: ChordTable,
    augmented: ChordTable,
    seventh: ChordTable,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            major: ChordTable::new(ChordCategory::Major),
            minor: ChordTable::new(ChordCategory::Minor),
            diminished: ChordTable::new(ChordCategory::Diminished),
            augmented: ChordTable::new(ChordCategory::Augmented),
            seventh: ChordTable::new(ChordCategory::Seventh),
        }
    }

    pub fn lookup(&self, category: ChordCategory) -> &ChordTable {
        match category {
            ChordCategory::Major => &self.major,
            ChordCategory::Minor => &self.minor,
            ChordCategory::Diminished => &self.diminished,
            ChordCategory::Augmented => &self.augmented,
            ChordCategory::Seventh => &self.seventh,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
