use serde::{Deserialize, Serialize};

use vitrine_ui::Previewable;

/// Shape shared by every catalog variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDetails {
    pub preview_ref: String,
    pub title: String,
    pub author: String,
}

/// A live item: everything a standard item has, plus the current audience.
/// Composition rather than field duplication keeps the base shape one type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveDetails {
    #[serde(flatten)]
    pub media: MediaDetails,
    pub watcher_count: u32,
}

/// Discriminant identifying which variant a payload is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantTag {
    Standard,
    Live,
}

/// Discriminated catalog entity, used whenever entities of different
/// variants travel through one pipeline.
///
/// Handling a subset of the variants is a build error, not a runtime
/// fallthrough:
///
/// ```compile_fail
/// use vitrine_catalog::CatalogEntity;
///
/// fn label(entity: &CatalogEntity) -> &'static str {
///     match entity {
///         CatalogEntity::Standard(_) => "standard",
///         // no arm for Live: non-exhaustive match, refuses to build
///     }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogEntity {
    Standard(MediaDetails),
    Live(LiveDetails),
}

impl CatalogEntity {
    pub fn tag(&self) -> VariantTag {
        match self {
            CatalogEntity::Standard(_) => VariantTag::Standard,
            CatalogEntity::Live(_) => VariantTag::Live,
        }
    }

    /// The base shape every variant shares.
    pub fn media(&self) -> &MediaDetails {
        match self {
            CatalogEntity::Standard(details) => details,
            CatalogEntity::Live(details) => &details.media,
        }
    }
}

impl Previewable for MediaDetails {
    fn preview_ref(&self) -> &str {
        &self.preview_ref
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn author(&self) -> &str {
        &self.author
    }
}

impl Previewable for LiveDetails {
    fn preview_ref(&self) -> &str {
        self.media.preview_ref()
    }
    fn title(&self) -> &str {
        self.media.title()
    }
    fn author(&self) -> &str {
        self.media.author()
    }
}
