#![forbid(unsafe_code)]

//! Divider position and pane visibility state cells.
//!
//! State is owned by the caller (the screen composing the split) and may
//! be a thin projection over persisted storage. [`StateCell`] keeps an
//! in-memory value and, when a [`StateStore`] adapter is attached, reads
//! through it on `get` and writes through it on `set`.
//!
//! # Failure Modes
//!
//! Storage adapters are fire-and-forget from the engine's perspective: a
//! failing `load` falls back to the in-memory value, a failing `save` is
//! logged and dropped. Neither blocks the next frame's layout.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two panes managed by a split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneSide {
    Primary,
    Secondary,
}

impl PaneSide {
    /// The other pane.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

/// Which panes are currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaneVisibility {
    /// Only the primary pane.
    Primary,
    /// Only the secondary pane.
    Secondary,
    /// Both panes and the divider.
    #[default]
    Both,
}

impl PaneVisibility {
    /// Whether the primary pane is visible.
    #[must_use]
    pub const fn primary_visible(self) -> bool {
        matches!(self, Self::Primary | Self::Both)
    }

    /// Whether the secondary pane is visible.
    #[must_use]
    pub const fn secondary_visible(self) -> bool {
        matches!(self, Self::Secondary | Self::Both)
    }

    /// Whether the given pane is visible.
    #[must_use]
    pub const fn shows(self, side: PaneSide) -> bool {
        match side {
            PaneSide::Primary => self.primary_visible(),
            PaneSide::Secondary => self.secondary_visible(),
        }
    }

    /// The state with the given pane hidden.
    #[must_use]
    pub const fn hiding(side: PaneSide) -> Self {
        match side {
            PaneSide::Primary => Self::Secondary,
            PaneSide::Secondary => Self::Primary,
        }
    }
}

/// Error surfaced by a storage adapter.
///
/// The engine logs these and proceeds on its in-memory value; they exist
/// so adapter implementations can report what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store is not reachable right now.
    Unavailable,
    /// The backing store rejected the operation.
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "storage unavailable"),
            Self::Backend(msg) => write!(f, "storage backend: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// External storage adapter for one persisted value.
///
/// Implementations decide the mechanism (key-value store, database row,
/// in-memory default); the engine only calls `load`/`save`.
pub trait StateStore<T> {
    /// Read the persisted value, `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<T>, StorageError>;

    /// Write a new value.
    fn save(&mut self, value: T) -> Result<(), StorageError>;
}

/// Trivial in-memory adapter for callers without a persistence layer.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore<T> {
    value: Option<T>,
}

impl<T> MemoryStore<T> {
    /// Empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Store seeded with a value.
    #[must_use]
    pub const fn with_value(value: T) -> Self {
        Self { value: Some(value) }
    }
}

impl<T: Clone> StateStore<T> for MemoryStore<T> {
    fn load(&self) -> Result<Option<T>, StorageError> {
        Ok(self.value.clone())
    }

    fn save(&mut self, value: T) -> Result<(), StorageError> {
        self.value = Some(value);
        Ok(())
    }
}

/// A caller-owned state value with optional storage write-through.
///
/// No validation happens here; clamping is the drag machine's and layout
/// solver's responsibility.
pub struct StateCell<T> {
    value: T,
    store: Option<Box<dyn StateStore<T>>>,
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &self.value)
            .field("has_store", &self.store.is_some())
            .finish()
    }
}

impl<T: Copy> StateCell<T> {
    /// Cell with a plain in-memory value and no storage.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { value, store: None }
    }

    /// Cell projected over a storage adapter.
    ///
    /// `default` is used when the store has no saved value or fails to
    /// load at construction.
    #[must_use]
    pub fn with_store(default: T, store: Box<dyn StateStore<T>>) -> Self {
        let value = match store.load() {
            Ok(Some(loaded)) => loaded,
            Ok(None) => default,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "state load failed, using default");
                default
            }
        };
        Self {
            value,
            store: Some(store),
        }
    }

    /// Current value.
    ///
    /// Reads through the storage adapter when one is attached, falling
    /// back to the in-memory value on failure or absence.
    #[must_use]
    pub fn get(&self) -> T {
        if let Some(store) = &self.store
            && let Ok(Some(loaded)) = store.load()
        {
            return loaded;
        }
        self.value
    }

    /// Replace the value, writing through to storage when attached.
    ///
    /// A failing save is logged and dropped; the in-memory value is
    /// already updated and wins for subsequent reads.
    pub fn set(&mut self, value: T) {
        self.value = value;
        if let Some(store) = &mut self.store
            && let Err(_err) = store.save(value)
        {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "state save failed, keeping in-memory value");
        }
    }
}
