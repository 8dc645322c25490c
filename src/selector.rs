use crate::catalog::{Catalog, ChordCategory};
use crate::config::PracticeConfig;
use crate::inversion::{invert, InversionKind};
use rand::seq::SliceRandom;

/// One flashcard's worth of chord, consumed by the display layer and
/// replaced on the next draw.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedChord {
    /// Display key, e.g. "F#m", "Bbdim", "Cmaj7".
    pub name: String,
    pub quality: ChordCategory,
    pub inversion: InversionKind,
    pub notes: Vec<String>,
    pub notation: String,
}

#[derive(Debug, Clone)]
struct Candidate {
    name: String,
    category: ChordCategory,
    notes: Vec<String>,
}

/// Draws random chords from the enabled categories and inversions.
pub struct ChordSelector {
    catalog: Catalog,
}

impl ChordSelector {
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
        }
    }

    pub fn draw(&self, config: &PracticeConfig) -> GeneratedChord {
        let pool = self.build_pool(config);
        let mut rng = rand::thread_rng();
        // build_pool falls back to the major table, so the pool is non-empty
        let candidate = pool.choose(&mut rng).expect("chord pool is never empty");

        let inversion = if candidate.category.is_triad() {
            let applicable: Vec<InversionKind> = InversionKind::ALL
                .into_iter()
                .filter(|kind| config.inversions.contains(kind))
                .collect();
            applicable
                .choose(&mut rng)
                .copied()
                .unwrap_or(InversionKind::Root)
        } else {
            // seventh chords are always shown in root position
            InversionKind::Root
        };

        let notes = if candidate.category.is_triad() {
            invert(&candidate.notes, inversion)
        } else {
            candidate.notes.clone()
        };

        let notation = notes.join(" - ");
        GeneratedChord {
            name: candidate.name.clone(),
            quality: candidate.category,
            inversion,
            notes,
            notation,
        }
    }

    /// Every chord of every enabled category, tagged with its display key.
    /// An empty selection degrades to the full major table rather than
    /// erroring; this is the single fallback rule for the whole engine.
    fn build_pool(&self, config: &PracticeConfig) -> Vec<Candidate> {
        let mut pool = Vec::new();
        for &category in ChordCategory::ALL.iter() {
            if config.categories.contains(&category) {
                self.append_category(&mut pool, category);
            }
        }
        if pool.is_empty() {
            self.append_category(&mut pool, ChordCategory::Major);
        }
        pool
    }

    fn append_category(&self, pool: &mut Vec<Candidate>, category: ChordCategory) {
        for (key, def) in &self.catalog.lookup(category).chords {
            pool.push(Candidate {
                name: category.display_key(key),
                category,
                notes: def.notes.clone(),
            });
        }
    }
}

impl Default for ChordSelector {
    fn default() -> Self {
        Self::new()
    }
}
