//! Pin store: durable pins plus the in-memory list the map and table show
//!
//! Every mutation hits storage first and touches the in-memory list only
//! after storage succeeded, so a failed call leaves the list as it was.

use crate::domain::{annotations, validate_labels, Annotation, Pin, PinFilter, Region};
use crate::error::{PlacesError, Result};
use crate::infrastructure::{PinRecord, PinStorage};

pub struct PinStore<S: PinStorage> {
    storage: S,
    records: Vec<PinRecord>,
}

impl<S: PinStorage> PinStore<S> {
    /// Store with an empty in-memory list. Call [`PinStore::load_all`] to fill it.
    pub fn new(storage: S) -> Self {
        PinStore {
            storage,
            records: Vec::new(),
        }
    }

    /// Create a store and load every persisted pin
    pub fn open(storage: S) -> Result<Self> {
        let mut store = PinStore::new(storage);
        store.load_all()?;
        Ok(store)
    }

    /// Replace the in-memory list with every persisted pin, in storage order.
    /// On failure the list is left unchanged.
    pub fn load_all(&mut self) -> Result<Vec<Pin>> {
        match self.storage.fetch(&PinFilter::all(), None) {
            Ok(records) => {
                tracing::debug!(count = records.len(), "loaded pins");
                self.records = records;
                Ok(self.pins().cloned().collect())
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not load pins");
                Err(e)
            }
        }
    }

    pub fn pins(&self) -> impl Iterator<Item = &Pin> {
        self.records.iter().map(|record| &record.pin)
    }

    pub fn records(&self) -> &[PinRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Display points for the map layer, in list order
    pub fn annotations(&self) -> Vec<Annotation> {
        annotations(self.pins())
    }

    pub fn get(&self, row: usize) -> Result<&Pin> {
        self.records
            .get(row)
            .map(|record| &record.pin)
            .ok_or_else(|| PlacesError::NotFound(format!("no pin at row {}", row + 1)))
    }

    /// Row of the first pin equal to `pin`
    pub fn index_of(&self, pin: &Pin) -> Option<usize> {
        self.records.iter().position(|record| record.pin == *pin)
    }

    /// Region to show when a row is selected
    pub fn region_for(&self, row: usize, span: f64) -> Result<Region> {
        let pin = self.get(row)?;
        Ok(Region::around(pin.coordinate(), span))
    }

    /// Persist a new pin, then append it to the list
    pub fn save(&mut self, pin: Pin) -> Result<&PinRecord> {
        pin.validate()?;

        let record = self.storage.insert(&pin)?;
        tracing::debug!(id = %record.id, title = %record.pin.title, "saved pin");
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Delete the first stored pin whose four fields all equal `target`.
    ///
    /// With duplicates only the first match in storage order goes; the
    /// others stay.
    pub fn delete(&mut self, target: &Pin) -> Result<PinRecord> {
        let filter = PinFilter::matching(target);
        let record = self
            .storage
            .fetch(&filter, Some(1))?
            .into_iter()
            .next()
            .ok_or_else(|| PlacesError::NotFound(target.to_string()))?;

        self.storage.remove(record.id)?;
        tracing::debug!(id = %record.id, title = %record.pin.title, "deleted pin");

        if let Some(position) = self.records.iter().position(|r| r.id == record.id) {
            self.records.remove(position);
        }
        Ok(record)
    }

    /// Delete the pin shown at `row`
    pub fn delete_at(&mut self, row: usize) -> Result<PinRecord> {
        let pin = self.get(row)?.clone();
        self.delete(&pin)
    }

    /// Relabel a pin: delete the old one, then save the new labels at the
    /// same coordinates.
    ///
    /// There is no transaction. If the save fails after the delete went
    /// through, the pin is gone from both storage and the list.
    pub fn update(&mut self, old: &Pin, title: &str, subtitle: &str) -> Result<&PinRecord> {
        validate_labels(title, subtitle)?;

        self.delete(old)?;
        match self.save(old.relabeled(title, subtitle)) {
            Ok(record) => Ok(record),
            Err(e) => {
                tracing::error!(error = %e, pin = %old, "pin lost: deleted but replacement not saved");
                Err(e)
            }
        }
    }

    /// Relabel the pin shown at `row`
    pub fn update_at(&mut self, row: usize, title: &str, subtitle: &str) -> Result<&PinRecord> {
        let pin = self.get(row)?.clone();
        self.update(&pin, title, subtitle)
    }
}
