use thiserror::Error;

use vitrine_core::{LoadError, Slot, SlotState};
use vitrine_ui::strategy::{CompositionStrategy, decorate};
use vitrine_ui::{Text, TextStyle, View, failure_view, theme};

use crate::{CatalogEntity, LiveDetails, MediaDetails, VariantTag};

/// Defect: a payload arrived under a different tag than the one requested.
/// Programmer (or collaborator-contract) error, surfaced loudly and
/// rendered as a visible failure, never a blank view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("entity arrived as {actual:?}, expected {expected:?}")]
pub struct VariantMismatch {
    pub expected: VariantTag,
    pub actual: VariantTag,
}

/// Dispatch table from variant tag to the strategy that renders it.
///
/// One field per variant: constructing the registry *is* the exhaustive
/// registration step. Dropping a variant's strategy is a missing field and
/// `dispatch` is a wildcard-free `match`, so the closed set cannot grow
/// without this type growing with it; the build breaks first.
pub struct VariantRegistry {
    standard: CompositionStrategy<MediaDetails>,
    live: CompositionStrategy<LiveDetails>,
}

impl Default for VariantRegistry {
    /// Default strategy per tag. The live description does not duplicate
    /// the standard one: it delegates to it and appends the audience line.
    fn default() -> Self {
        let standard = CompositionStrategy::<MediaDetails>::standard();
        let live = CompositionStrategy::<LiveDetails>::standard().description(decorate(
            standard.parts().description.clone(),
            |live: &LiveDetails| &live.media,
            |live: &LiveDetails| {
                Text(format!("{} watching now", live.watcher_count)).color(theme().accent)
            },
        ));
        Self { standard, live }
    }
}

impl VariantRegistry {
    pub fn new(
        standard: CompositionStrategy<MediaDetails>,
        live: CompositionStrategy<LiveDetails>,
    ) -> Self {
        Self { standard, live }
    }

    pub fn with_standard(mut self, strategy: CompositionStrategy<MediaDetails>) -> Self {
        self.standard = strategy;
        self
    }

    pub fn with_live(mut self, strategy: CompositionStrategy<LiveDetails>) -> Self {
        self.live = strategy;
        self
    }

    pub fn standard(&self) -> &CompositionStrategy<MediaDetails> {
        &self.standard
    }

    pub fn live(&self) -> &CompositionStrategy<LiveDetails> {
        &self.live
    }

    /// Applies the matching strategy's ready path to the payload.
    pub fn dispatch(&self, entity: &CatalogEntity) -> View {
        match entity {
            CatalogEntity::Standard(details) => self.standard.compose(details),
            CatalogEntity::Live(details) => self.live.compose(details),
        }
    }

    pub fn placeholder_for(&self, tag: VariantTag) -> View {
        match tag {
            VariantTag::Standard => self.standard.placeholder_view(),
            VariantTag::Live => self.live.placeholder_view(),
        }
    }

    /// Drives a whole slot through the registry: placeholder while the
    /// expected entity is pending, failure view on error, dispatch once
    /// ready. A payload under the wrong tag is a contract defect; it is
    /// logged at error level and rendered as a visible failure.
    pub fn present_slot(&self, expected: VariantTag, slot: &Slot<CatalogEntity>) -> View {
        match slot.current() {
            SlotState::Pending => self.placeholder_for(expected),
            SlotState::Failed(err) => failure_view(&err),
            SlotState::Ready(entity) => {
                let actual = entity.tag();
                if actual != expected {
                    let defect = VariantMismatch { expected, actual };
                    log::error!("{defect}");
                    return failure_view(&LoadError::new(defect.to_string()));
                }
                self.dispatch(&entity)
            }
        }
    }
}
