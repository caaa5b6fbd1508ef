//! Edit pin use case
//!
//! The form starts out holding the pin's current labels. Submitting it
//! hands back a [`PinEdit`] for the caller to apply; nothing is written
//! until then.

use crate::application::PinStore;
use crate::domain::Pin;
use crate::error::Result;
use crate::infrastructure::{PinRecord, PinStorage};

#[derive(Debug, Clone)]
pub struct EditForm {
    original: Pin,
    pub title: String,
    pub subtitle: String,
}

impl EditForm {
    /// Form pre-filled with the pin's title and subtitle
    pub fn for_pin(pin: &Pin) -> Self {
        EditForm {
            original: pin.clone(),
            title: pin.title.clone(),
            subtitle: pin.subtitle.clone(),
        }
    }

    pub fn original(&self) -> &Pin {
        &self.original
    }

    /// `None` while either field is empty; the form stays open.
    pub fn submit(self) -> Option<PinEdit> {
        if self.title.is_empty() || self.subtitle.is_empty() {
            return None;
        }
        Some(PinEdit {
            original: self.original,
            title: self.title,
            subtitle: self.subtitle,
        })
    }
}

/// A confirmed edit, ready to apply
#[derive(Debug, Clone, PartialEq)]
pub struct PinEdit {
    pub original: Pin,
    pub title: String,
    pub subtitle: String,
}

impl PinEdit {
    pub fn apply<'a, S: PinStorage>(&self, store: &'a mut PinStore<S>) -> Result<&'a PinRecord> {
        store.update(&self.original, &self.title, &self.subtitle)
    }
}
