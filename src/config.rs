use crate::catalog::ChordCategory;
use crate::inversion::InversionKind;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DURATION_SECS: u64 = 4;

/// User-facing practice settings. Persisted as a single JSON record under
/// the `chordMasterSettings` name; the field names below are the record's
/// wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PracticeConfig {
    #[serde(rename = "chordDuration")]
    pub duration_secs: u64,
    #[serde(rename = "chordTypes")]
    pub categories: BTreeSet<ChordCategory>,
    #[serde(rename = "selectedInversions")]
    pub inversions: BTreeSet<InversionKind>,
}

impl Default for PracticeConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            categories: BTreeSet::from([ChordCategory::Major]),
            inversions: BTreeSet::from(InversionKind::ALL),
        }
    }
}

pub trait SettingsStore {
    /// None means no usable record exists; the caller keeps its defaults.
    fn load(&self) -> Option<PracticeConfig>;
    fn save(&self, cfg: &PracticeConfig) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "chordmaster") {
            pd.config_dir().join("chordMasterSettings.json")
        } else {
            PathBuf::from("chordMasterSettings.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }
}

impl Default for FileSettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Option<PracticeConfig> {
        let bytes = fs::read(&self.path).ok()?;
        let record: Value = serde_json::from_slice(&bytes).ok()?;
        if !record.is_object() {
            return None;
        }
        Some(config_from_record(&record))
    }

    fn save(&self, cfg: &PracticeConfig) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).unwrap_or_default();
        fs::write(&self.path, data)
    }
}

/// Rebuild a config from a persisted record, field by field. Any missing or
/// invalid field falls back to its default so a partially corrupt record
/// never loses the rest of the settings.
fn config_from_record(record: &Value) -> PracticeConfig {
    let defaults = PracticeConfig::default();

    let duration_secs = record
        .get("chordDuration")
        .and_then(Value::as_u64)
        .filter(|d| *d > 0)
        .unwrap_or(defaults.duration_secs);

    let categories = record
        .get("chordTypes")
        .and_then(|v| serde_json::from_value::<BTreeSet<ChordCategory>>(v.clone()).ok())
        .filter(|set| !set.is_empty())
        .unwrap_or(defaults.categories);

    let inversions = record
        .get("selectedInversions")
        .and_then(|v| serde_json::from_value::<BTreeSet<InversionKind>>(v.clone()).ok())
        .filter(|set| !set.is_empty())
        .unwrap_or(defaults.inversions);

    PracticeConfig {
        duration_secs,
        categories,
        inversions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chordMasterSettings.json");
        let store = FileSettingsStore::with_path(&path);
        let cfg = PracticeConfig::default();
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), Some(cfg));
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chordMasterSettings.json");
        let store = FileSettingsStore::with_path(&path);
        let cfg = PracticeConfig {
            duration_secs: 10,
            categories: BTreeSet::from([ChordCategory::Minor, ChordCategory::Seventh]),
            inversions: BTreeSet::from([InversionKind::Second]),
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), Some(cfg));
    }

    #[test]
    fn missing_record_loads_nothing() {
        let dir = tempdir().unwrap();
        let store = FileSettingsStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn corrupt_record_loads_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chordMasterSettings.json");
        fs::write(&path, b"not json at all {{{").unwrap();
        let store = FileSettingsStore::with_path(&path);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn partial_record_falls_back_per_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chordMasterSettings.json");
        fs::write(&path, br#"{"chordDuration": 8}"#).unwrap();
        let store = FileSettingsStore::with_path(&path);
        let cfg = store.load().unwrap();
        assert_eq!(cfg.duration_secs, 8);
        assert_eq!(cfg.categories, PracticeConfig::default().categories);
        assert_eq!(cfg.inversions, PracticeConfig::default().inversions);
    }

    #[test]
    fn invalid_fields_fall_back_independently() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chordMasterSettings.json");
        fs::write(
            &path,
            br#"{"chordDuration": 0, "chordTypes": ["major", "polka"], "selectedInversions": ["second"]}"#,
        )
        .unwrap();
        let store = FileSettingsStore::with_path(&path);
        let cfg = store.load().unwrap();
        // zero duration and the unknown chord type are both rejected
        assert_eq!(cfg.duration_secs, DEFAULT_DURATION_SECS);
        assert_eq!(cfg.categories, PracticeConfig::default().categories);
        assert_eq!(cfg.inversions, BTreeSet::from([InversionKind::Second]));
    }

    #[test]
    fn empty_sets_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chordMasterSettings.json");
        fs::write(
            &path,
            br#"{"chordDuration": 6, "chordTypes": [], "selectedInversions": []}"#,
        )
        .unwrap();
        let store = FileSettingsStore::with_path(&path);
        let cfg = store.load().unwrap();
        assert_eq!(cfg.duration_secs, 6);
        assert_eq!(cfg.categories, BTreeSet::from([ChordCategory::Major]));
        assert_eq!(cfg.inversions, BTreeSet::from(InversionKind::ALL));
    }
}
