use std::rc::Rc;

use vitrine_core::{EntityLoader, LoadBinding, Slot};
use vitrine_ui::{Column, Modifier, View};

use crate::{CatalogEntity, VariantRegistry, VariantTag};

/// Loads a fixed, known-in-advance set of `(id, tag)` requests and keeps
/// the output index-aligned with the input, whatever order the loads
/// finish in. Every element renders through its own slot, so a list that
/// is half `Ready` and half `Pending` is a perfectly good list.
pub struct ListAggregator {
    loader: Rc<dyn EntityLoader<CatalogEntity>>,
}

impl ListAggregator {
    pub fn new(loader: Rc<dyn EntityLoader<CatalogEntity>>) -> Self {
        Self { loader }
    }

    /// Issues every load eagerly, in request order. Position `i` of the
    /// result corresponds to request `i`, always.
    pub fn load_all<S: Into<String>>(
        &self,
        requests: impl IntoIterator<Item = (S, VariantTag)>,
    ) -> AggregatedList {
        let entries = requests
            .into_iter()
            .map(|(id, tag)| ListEntry {
                tag,
                binding: LoadBinding::bind(self.loader.clone(), id),
            })
            .collect();
        AggregatedList { entries }
    }
}

struct ListEntry {
    tag: VariantTag,
    binding: LoadBinding<CatalogEntity>,
}

/// Ordered result of `ListAggregator::load_all`, owning one binding per
/// request.
pub struct AggregatedList {
    entries: Vec<ListEntry>,
}

impl AggregatedList {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn slot(&self, index: usize) -> Option<Rc<Slot<CatalogEntity>>> {
        self.entries.get(index).map(|e| e.binding.slot())
    }

    /// Index-aligned with the requests that produced this list.
    pub fn slots(&self) -> Vec<Rc<Slot<CatalogEntity>>> {
        self.entries.iter().map(|e| e.binding.slot()).collect()
    }

    pub fn tags(&self) -> Vec<VariantTag> {
        self.entries.iter().map(|e| e.tag).collect()
    }

    pub fn ids(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.binding.bound_id()).collect()
    }

    /// One view per request, in request order; each element renders its
    /// own slot state. No all-or-nothing barrier.
    pub fn present(&self, registry: &VariantRegistry) -> View {
        let children = self
            .entries
            .iter()
            .map(|e| registry.present_slot(e.tag, &e.binding.slot()))
            .collect();
        Column(Modifier::new().gap(12.0)).with_children(children)
    }

    /// Releases every binding (idempotent); still-in-flight completions
    /// become no-ops.
    pub fn release(&self) {
        for entry in &self.entries {
            entry.binding.release();
        }
    }

    /// Ties every binding's release to the current scope.
    pub fn release_on_dispose(&self) {
        for entry in &self.entries {
            entry.binding.release_on_dispose();
        }
    }
}
