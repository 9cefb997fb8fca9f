#![forbid(unsafe_code)]

//! Keyed persistence for multiple independent splits.
//!
//! An application usually hosts several splits (sidebar/content,
//! list/detail, editor/inspector) that persist independently. Each split
//! instance stores one position fraction and one visibility value under
//! an application-chosen identifier. [`SplitStateRegistry`] holds those
//! entries and hands out per-id adapter handles implementing
//! [`StateStore`], so a [`StateCell`](crate::state::StateCell) can
//! project over the registry without knowing about it.
//!
//! # Schema Versioning Policy
//!
//! Snapshots carry [`SPLIT_STATE_SCHEMA_VERSION`]; loaders reject unknown
//! versions with an actionable error rather than guessing at migration.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::state::{PaneVisibility, StateStore, StorageError};

/// Current persisted split-state schema version.
pub const SPLIT_STATE_SCHEMA_VERSION: u16 = 1;

/// Persisted values for one split instance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SplitEntry {
    /// Last committed divider position, `None` if never committed.
    pub position: Option<f32>,
    /// Last visibility state, `None` if never changed.
    pub visibility: Option<PaneVisibility>,
}

/// Serializable snapshot of every registered split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitStateSnapshot {
    /// Schema version for migration detection.
    pub schema_version: u16,
    /// Entries keyed by application-chosen split identifier.
    pub entries: Vec<(String, SplitEntry)>,
}

/// Snapshot validation/restore errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot was written by an unknown schema version.
    UnsupportedVersion { found: u16, supported: u16 },
    /// Two entries share the same identifier.
    DuplicateId(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedVersion { found, supported } => write!(
                f,
                "unsupported split-state schema version {found} (supported: {supported})"
            ),
            Self::DuplicateId(id) => write!(f, "duplicate split id '{id}' in snapshot"),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Shared registry of persisted split state, keyed by split id.
///
/// Cloning is cheap and shares the underlying map; the engine is
/// single-threaded (UI thread), so interior mutability via `RefCell` is
/// sufficient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitStateRegistry {
    inner: Rc<RefCell<FxHashMap<String, SplitEntry>>>,
}

impl SplitStateRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current entry for a split id.
    #[must_use]
    pub fn entry(&self, id: &str) -> SplitEntry {
        self.inner.borrow().get(id).copied().unwrap_or_default()
    }

    /// Write-through handle for one split's divider position.
    #[must_use]
    pub fn position_store(&self, id: impl Into<String>) -> RegistryPositionStore {
        RegistryPositionStore {
            registry: self.clone(),
            id: id.into(),
        }
    }

    /// Write-through handle for one split's visibility.
    #[must_use]
    pub fn visibility_store(&self, id: impl Into<String>) -> RegistryVisibilityStore {
        RegistryVisibilityStore {
            registry: self.clone(),
            id: id.into(),
        }
    }

    /// Snapshot every entry for serialization.
    ///
    /// Entries are sorted by id so snapshots are deterministic.
    #[must_use]
    pub fn snapshot(&self) -> SplitStateSnapshot {
        let mut entries: Vec<(String, SplitEntry)> = self
            .inner
            .borrow()
            .iter()
            .map(|(id, entry)| (id.clone(), *entry))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        SplitStateSnapshot {
            schema_version: SPLIT_STATE_SCHEMA_VERSION,
            entries,
        }
    }

    /// Rebuild a registry from a snapshot, validating it first.
    pub fn restore(snapshot: &SplitStateSnapshot) -> Result<Self, SnapshotError> {
        if snapshot.schema_version != SPLIT_STATE_SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.schema_version,
                supported: SPLIT_STATE_SCHEMA_VERSION,
            });
        }
        let mut map = FxHashMap::default();
        for (id, entry) in &snapshot.entries {
            if map.insert(id.clone(), *entry).is_some() {
                return Err(SnapshotError::DuplicateId(id.clone()));
            }
        }
        Ok(Self {
            inner: Rc::new(RefCell::new(map)),
        })
    }

    fn update(&self, id: &str, apply: impl FnOnce(&mut SplitEntry)) {
        let mut map = self.inner.borrow_mut();
        apply(map.entry(id.to_owned()).or_default());
    }
}

/// [`StateStore`] adapter for one split's position in a registry.
#[derive(Debug, Clone)]
pub struct RegistryPositionStore {
    registry: SplitStateRegistry,
    id: String,
}

impl StateStore<f32> for RegistryPositionStore {
    fn load(&self) -> Result<Option<f32>, StorageError> {
        Ok(self.registry.entry(&self.id).position)
    }

    fn save(&mut self, value: f32) -> Result<(), StorageError> {
        self.registry
            .update(&self.id, |entry| entry.position = Some(value));
        Ok(())
    }
}

/// [`StateStore`] adapter for one split's visibility in a registry.
#[derive(Debug, Clone)]
pub struct RegistryVisibilityStore {
    registry: SplitStateRegistry,
    id: String,
}

impl StateStore<PaneVisibility> for RegistryVisibilityStore {
    fn load(&self) -> Result<Option<PaneVisibility>, StorageError> {
        Ok(self.registry.entry(&self.id).visibility)
    }

    fn save(&mut self, value: PaneVisibility) -> Result<(), StorageError> {
        self.registry
            .update(&self.id, |entry| entry.visibility = Some(value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{
        SPLIT_STATE_SCHEMA_VERSION, SnapshotError, SplitEntry, SplitStateRegistry,
        SplitStateSnapshot,
    };
    use crate::state::{PaneVisibility, StateCell, StateStore};

    #[test]
    fn splits_persist_independently() {
        let registry = SplitStateRegistry::new();
        let mut sidebar = registry.position_store("sidebar");
        let mut inspector = registry.position_store("inspector");
        sidebar.save(0.3).unwrap();
        inspector.save(0.7).unwrap();
        assert_eq!(registry.entry("sidebar").position, Some(0.3));
        assert_eq!(registry.entry("inspector").position, Some(0.7));
    }

    #[test]
    fn cell_projects_over_registry() {
        let registry = SplitStateRegistry::new();
        registry
            .position_store("main")
            .save(0.25)
            .expect("in-memory save");

        let mut cell =
            StateCell::with_store(0.5_f32, Box::new(registry.position_store("main")));
        assert_eq!(cell.get(), 0.25);
        cell.set(0.6);
        assert_eq!(registry.entry("main").position, Some(0.6));
    }

    #[test]
    fn visibility_store_round_trips() {
        let registry = SplitStateRegistry::new();
        let mut store = registry.visibility_store("main");
        assert_eq!(store.load().unwrap(), None);
        store.save(PaneVisibility::Primary).unwrap();
        assert_eq!(store.load().unwrap(), Some(PaneVisibility::Primary));
    }

    #[test]
    fn snapshot_round_trip_through_json() {
        let registry = SplitStateRegistry::new();
        registry.position_store("a").save(0.5).unwrap();
        registry
            .visibility_store("b")
            .save(PaneVisibility::Secondary)
            .unwrap();

        let snapshot = registry.snapshot();
        let json = serde_json::to_string(&snapshot).expect("serialize");
        let decoded: SplitStateSnapshot = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, snapshot);

        let restored = SplitStateRegistry::restore(&decoded).expect("restore");
        assert_eq!(restored.entry("a").position, Some(0.5));
        assert_eq!(restored.entry("b").visibility, Some(PaneVisibility::Secondary));
    }

    #[test]
    fn snapshot_is_deterministic() {
        let registry = SplitStateRegistry::new();
        registry.position_store("zeta").save(0.1).unwrap();
        registry.position_store("alpha").save(0.2).unwrap();
        let snapshot = registry.snapshot();
        let ids: Vec<&str> = snapshot.entries.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn restore_rejects_unknown_version() {
        let snapshot = SplitStateSnapshot {
            schema_version: SPLIT_STATE_SCHEMA_VERSION + 1,
            entries: Vec::new(),
        };
        assert_eq!(
            SplitStateRegistry::restore(&snapshot),
            Err(SnapshotError::UnsupportedVersion {
                found: SPLIT_STATE_SCHEMA_VERSION + 1,
                supported: SPLIT_STATE_SCHEMA_VERSION,
            })
        );
    }

    #[test]
    fn restore_rejects_duplicate_ids() {
        let snapshot = SplitStateSnapshot {
            schema_version: SPLIT_STATE_SCHEMA_VERSION,
            entries: vec![
                ("main".into(), SplitEntry::default()),
                ("main".into(), SplitEntry::default()),
            ],
        };
        assert_eq!(
            SplitStateRegistry::restore(&snapshot),
            Err(SnapshotError::DuplicateId("main".into()))
        );
    }
}
