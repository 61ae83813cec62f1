//! # Composition strategies
//!
//! A `CompositionStrategy<T>` renders one loaded entity as a composed view
//! built from three independently overridable parts: a media block, a
//! description block, and a loading placeholder. Overriding is injection
//! per call site, not subclassing: replace exactly the part you name,
//! keep the defaults for the rest.
//!
//! Richer entity shapes never re-implement the base description; they
//! `decorate` it: delegate to the base part over a projection of
//! themselves and append their extra block underneath.

use std::rc::Rc;

use vitrine_core::{LoadError, Slot, SlotState};

use crate::{Column, Image, Modifier, Row, Spinner, Text, TextStyle, View, ViewExt, theme};

pub type PartFn<T> = Rc<dyn Fn(&T) -> View>;
pub type PlaceholderFn = Rc<dyn Fn() -> View>;

/// Shape shared by every entity the default parts know how to render.
pub trait Previewable {
    fn preview_ref(&self) -> &str;
    fn title(&self) -> &str;
    fn author(&self) -> &str;
}

/// The three overridable sub-parts of a composed entity view.
pub struct StrategyParts<T> {
    pub media: PartFn<T>,
    pub description: PartFn<T>,
    pub placeholder: PlaceholderFn,
}

impl<T> Clone for StrategyParts<T> {
    fn clone(&self) -> Self {
        Self {
            media: self.media.clone(),
            description: self.description.clone(),
            placeholder: self.placeholder.clone(),
        }
    }
}

/// Per-call-site part replacements. Unset parts keep the strategy's own.
pub struct PartOverrides<T> {
    pub media: Option<PartFn<T>>,
    pub description: Option<PartFn<T>>,
    pub placeholder: Option<PlaceholderFn>,
}

impl<T> Default for PartOverrides<T> {
    fn default() -> Self {
        Self {
            media: None,
            description: None,
            placeholder: None,
        }
    }
}

impl<T> PartOverrides<T> {
    pub fn none() -> Self {
        Self::default()
    }
    pub fn media(mut self, f: impl Fn(&T) -> View + 'static) -> Self {
        self.media = Some(Rc::new(f));
        self
    }
    pub fn description(mut self, f: impl Fn(&T) -> View + 'static) -> Self {
        self.description = Some(Rc::new(f));
        self
    }
    pub fn placeholder(mut self, f: impl Fn() -> View + 'static) -> Self {
        self.placeholder = Some(Rc::new(f));
        self
    }
}

pub struct CompositionStrategy<T> {
    parts: StrategyParts<T>,
}

impl<T> Clone for CompositionStrategy<T> {
    fn clone(&self) -> Self {
        Self {
            parts: self.parts.clone(),
        }
    }
}

impl<T: Previewable> CompositionStrategy<T> {
    /// Default parts: preview image, bold title over a muted author line,
    /// spinner placeholder.
    pub fn standard() -> Self {
        Self::with_parts(StrategyParts {
            media: Rc::new(|v: &T| Image(v.preview_ref(), "preview")),
            description: Rc::new(|v: &T| {
                Column(Modifier::new().padding_left(10.0)).child((
                    Text(v.title()).bold(),
                    Text(v.author()).color(theme().muted),
                ))
            }),
            placeholder: Rc::new(|| Spinner("loading...")),
        })
    }
}

impl<T> CompositionStrategy<T> {
    pub fn with_parts(parts: StrategyParts<T>) -> Self {
        Self { parts }
    }

    pub fn parts(&self) -> &StrategyParts<T> {
        &self.parts
    }

    pub fn into_parts(self) -> StrategyParts<T> {
        self.parts
    }

    pub fn media(mut self, f: impl Fn(&T) -> View + 'static) -> Self {
        self.parts.media = Rc::new(f);
        self
    }

    pub fn description(mut self, f: impl Fn(&T) -> View + 'static) -> Self {
        self.parts.description = Rc::new(f);
        self
    }

    pub fn placeholder(mut self, f: impl Fn() -> View + 'static) -> Self {
        self.parts.placeholder = Rc::new(f);
        self
    }

    /// The `Ready` path: media laid out beside description.
    pub fn compose(&self, value: &T) -> View {
        Row(Modifier::new()).child(((self.parts.media)(value), (self.parts.description)(value)))
    }

    pub fn placeholder_view(&self) -> View {
        (self.parts.placeholder)()
    }

    /// Renders whatever state the slot is in right now.
    pub fn present(&self, slot: &Slot<T>) -> View
    where
        T: Clone,
    {
        self.present_with(slot, &PartOverrides::none())
    }

    /// Like `present`, with per-call-site part replacements. An override
    /// replaces exactly the named part; unnamed parts keep the defaults.
    pub fn present_with(&self, slot: &Slot<T>, overrides: &PartOverrides<T>) -> View
    where
        T: Clone,
    {
        let media = overrides.media.as_ref().unwrap_or(&self.parts.media);
        let description = overrides
            .description
            .as_ref()
            .unwrap_or(&self.parts.description);
        let placeholder = overrides
            .placeholder
            .as_ref()
            .unwrap_or(&self.parts.placeholder);

        match slot.current() {
            SlotState::Pending => placeholder(),
            SlotState::Failed(err) => failure_view(&err),
            SlotState::Ready(value) => {
                Row(Modifier::new()).child((media(&value), description(&value)))
            }
        }
    }
}

/// Error view for a `Failed` slot: error-colored, carries the cause, and
/// structurally distinct from both the placeholder and the success layout.
pub fn failure_view(err: &LoadError) -> View {
    Column(Modifier::new().padding(8.0)).child((
        Text("failed to load").color(theme().error).bold(),
        Text(err.cause.clone()).color(theme().error),
    ))
}

/// Builds a richer description part out of a base one: delegate to `base`
/// over a projection of the richer value, then append `extra` underneath.
/// The base rendering logic is reused, never duplicated.
pub fn decorate<T, B>(
    base: PartFn<B>,
    project: impl Fn(&T) -> &B + 'static,
    extra: impl Fn(&T) -> View + 'static,
) -> impl Fn(&T) -> View + 'static
where
    T: 'static,
    B: 'static,
{
    move |value: &T| Column(Modifier::new()).child((base(project(value)), extra(value)))
}
