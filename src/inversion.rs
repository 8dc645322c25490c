use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Triad voicings: which chord tone sits at the bottom.
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
pub enum InversionKind {
    #[strum(serialize = "Root Position")]
    Root,
    #[strum(serialize = "1st Inversion")]
    First,
    #[strum(serialize = "2nd Inversion")]
    Second,
}

impl InversionKind {
    pub const ALL: [InversionKind; 3] = [
        InversionKind::Root,
        InversionKind::First,
        InversionKind::Second,
    ];
}

/// Rotate a triad's notes for the given inversion. Root position is the
/// identity; first and second inversions rotate the lowest note(s) to the
/// top. Only defined for 3-note chords.
pub fn invert(notes: &[String], kind: InversionKind) -> Vec<String> {
    debug_assert_eq!(notes.len(), 3, "inversions only apply to triads");
    match kind {
        InversionKind::Root => notes.to_vec(),
        InversionKind::First => vec![notes[1].clone(), notes[2].clone(), notes[0].clone()],
        InversionKind::Second => vec![notes[2].clone(), notes[0].clone(), notes[1].clone()],
    }
}
