//! Durable pin storage
//!
//! [`PinStorage`] is the record store behind the pin store. Records come back
//! in insertion order. Every backend failure surfaces as
//! [`PlacesError::StorageUnavailable`].
//!
//! ## File layout
//!
//! ```text
//! <root>/.places/pins.toml
//!
//! next_id = 3
//!
//! [[pin]]
//! id = 1
//! title = "Cafe"
//! subtitle = "Good coffee"
//! latitude = 51.5
//! longitude = -0.1
//! created = "2026-10-19T09:00:00Z"
//! ```

use crate::domain::{Pin, PinFilter};
use crate::error::{PlacesError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Surrogate key assigned by storage. Never reused within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinId(pub u64);

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A persisted pin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinRecord {
    pub id: PinId,
    #[serde(flatten)]
    pub pin: Pin,
    pub created: DateTime<Utc>,
}

/// Record store for pins
pub trait PinStorage {
    /// Records matching `filter`, in storage order, at most `limit` of them
    fn fetch(&self, filter: &PinFilter, limit: Option<usize>) -> Result<Vec<PinRecord>>;

    /// Persist a new record and return it
    fn insert(&mut self, pin: &Pin) -> Result<PinRecord>;

    /// Remove the record with the given id
    fn remove(&mut self, id: PinId) -> Result<()>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PinTable {
    #[serde(default)]
    next_id: u64,
    #[serde(default, rename = "pin")]
    pins: Vec<PinRecord>,
}

impl PinTable {
    fn select(&self, filter: &PinFilter, limit: Option<usize>) -> Vec<PinRecord> {
        self.pins
            .iter()
            .filter(|record| filter.matches(&record.pin))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    fn push(&mut self, pin: &Pin) -> Result<PinRecord> {
        let exhausted = || PlacesError::StorageUnavailable("no pin ids left".to_string());

        let mut id = self.next_id.max(1);
        for record in &self.pins {
            id = id.max(record.id.0.checked_add(1).ok_or_else(exhausted)?);
        }
        self.next_id = id.checked_add(1).ok_or_else(exhausted)?;

        let record = PinRecord {
            id: PinId(id),
            pin: pin.clone(),
            created: Utc::now(),
        };
        self.pins.push(record.clone());
        Ok(record)
    }

    fn take(&mut self, id: PinId) -> Result<PinRecord> {
        let position = self
            .pins
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| PlacesError::NotFound(format!("no stored record {}", id)))?;
        Ok(self.pins.remove(position))
    }
}

/// TOML file backend at `<root>/.places/pins.toml`
#[derive(Debug, Clone)]
pub struct FileSystemStorage {
    path: PathBuf,
}

impl FileSystemStorage {
    /// Storage for the workspace rooted at `root`
    pub fn new(root: &Path) -> Self {
        FileSystemStorage {
            path: root.join(".places").join("pins.toml"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write an empty store file, failing if one is already present
    pub fn create(&self) -> Result<()> {
        if self.path.exists() {
            return Err(PlacesError::Config(format!(
                "Pin store already exists: {}",
                self.path.display()
            )));
        }
        self.write_table(&PinTable::default())
    }

    fn unavailable(&self, action: &str, detail: impl fmt::Display) -> PlacesError {
        PlacesError::StorageUnavailable(format!(
            "could not {} {}: {}",
            action,
            self.path.display(),
            detail
        ))
    }

    fn read_table(&self) -> Result<PinTable> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(PinTable::default());
            }
            Err(e) => return Err(self.unavailable("read", e)),
        };

        toml::from_str(&contents).map_err(|e| self.unavailable("parse", e))
    }

    /// Replace the store file: write a temp file beside it, then rename.
    fn write_table(&self, table: &PinTable) -> Result<()> {
        let contents =
            toml::to_string_pretty(table).map_err(|e| self.unavailable("serialize", e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| self.unavailable("create", e))?;
            }
        }

        let tmp_path = self
            .path
            .with_file_name(format!("pins.toml.places-tmp-{}", std::process::id()));
        fs::write(&tmp_path, contents).map_err(|e| self.unavailable("write", e))?;

        if self.path.exists() {
            // rename does not overwrite on Windows
            fs::remove_file(&self.path).map_err(|e| self.unavailable("replace", e))?;
        }
        fs::rename(&tmp_path, &self.path).map_err(|e| self.unavailable("replace", e))
    }
}

impl PinStorage for FileSystemStorage {
    fn fetch(&self, filter: &PinFilter, limit: Option<usize>) -> Result<Vec<PinRecord>> {
        Ok(self.read_table()?.select(filter, limit))
    }

    fn insert(&mut self, pin: &Pin) -> Result<PinRecord> {
        let mut table = self.read_table()?;
        let record = table.push(pin)?;
        self.write_table(&table)?;
        tracing::debug!(id = %record.id, path = %self.path.display(), "stored pin");
        Ok(record)
    }

    fn remove(&mut self, id: PinId) -> Result<()> {
        let mut table = self.read_table()?;
        table.take(id)?;
        self.write_table(&table)?;
        tracing::debug!(%id, path = %self.path.display(), "removed pin");
        Ok(())
    }
}

/// In-process backend. Can be switched offline to simulate a broken store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    table: PinTable,
    offline: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Make every subsequent call fail with `StorageUnavailable` (or recover)
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    fn check_online(&self) -> Result<()> {
        if self.offline {
            return Err(PlacesError::StorageUnavailable(
                "memory storage is offline".to_string(),
            ));
        }
        Ok(())
    }
}

impl PinStorage for MemoryStorage {
    fn fetch(&self, filter: &PinFilter, limit: Option<usize>) -> Result<Vec<PinRecord>> {
        self.check_online()?;
        Ok(self.table.select(filter, limit))
    }

    fn insert(&mut self, pin: &Pin) -> Result<PinRecord> {
        self.check_online()?;
        self.table.push(pin)
    }

    fn remove(&mut self, id: PinId) -> Result<()> {
        self.check_online()?;
        self.table.take(id).map(|_| ())
    }
}
