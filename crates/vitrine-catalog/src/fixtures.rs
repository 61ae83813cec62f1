use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use vitrine_core::{Completion, EntityLoader, defer};

use crate::CatalogEntity;

/// Loader over canned JSON documents.
///
/// Delivery goes through the deferred queue, the way a backend response
/// lands on a later turn of the cooperative schedule: a load issued now
/// resolves on the next `flush`. Ids marked with `hold` are parked instead
/// and only enter the queue when `deliver` is called, which lets callers
/// scramble completion order on purpose.
///
/// Unknown ids and malformed documents turn into load failures; the
/// document is parsed at delivery time, like a response body would be.
#[derive(Default)]
pub struct FixtureLoader {
    documents: RefCell<HashMap<String, String>>,
    hold_ids: RefCell<HashSet<String>>,
    parked: RefCell<HashMap<String, Completion<CatalogEntity>>>,
}

impl FixtureLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: impl Into<String>, json: impl Into<String>) {
        self.documents.borrow_mut().insert(id.into(), json.into());
    }

    pub fn with_document(self, id: impl Into<String>, json: impl Into<String>) -> Self {
        self.insert(id, json);
        self
    }

    /// Parks the next load for `id` until `deliver(id)` is called.
    pub fn hold(&self, id: impl Into<String>) {
        self.hold_ids.borrow_mut().insert(id.into());
    }

    /// Moves a parked completion into the deferred queue. Returns false if
    /// nothing was parked for `id`.
    pub fn deliver(&self, id: &str) -> bool {
        match self.parked.borrow_mut().remove(id) {
            Some(done) => {
                self.enqueue(id.to_string(), done);
                true
            }
            None => false,
        }
    }

    fn enqueue(&self, id: String, done: Completion<CatalogEntity>) {
        let doc = self.documents.borrow().get(&id).cloned();
        defer(move || match doc {
            None => done.fail(format!("no entity with id '{id}'")),
            Some(json) => match serde_json::from_str::<CatalogEntity>(&json) {
                Ok(entity) => done.ok(entity),
                Err(err) => done.fail(format!("malformed payload for '{id}': {err}")),
            },
        });
    }
}

impl EntityLoader<CatalogEntity> for FixtureLoader {
    fn load(&self, id: &str, done: Completion<CatalogEntity>) {
        if self.hold_ids.borrow().contains(id) {
            if let Some(stale) = self.parked.borrow_mut().insert(id.to_string(), done) {
                // A second load for a held id supersedes the parked one.
                log::debug!("dropping parked completion for '{id}'");
                drop(stale);
            }
            return;
        }
        self.enqueue(id.to_string(), done);
    }
}
