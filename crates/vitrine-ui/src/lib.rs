#![allow(non_snake_case)]
//! Widget constructors, styling, and composition strategies.
//!
//! Constructors are plain functions returning a `View` tree; there is no
//! retained widget graph. `ViewExt::child` accepts a single view, vectors,
//! arrays and tuples:
//!
//! ```rust
//! use vitrine_ui::*;
//!
//! let card = Row(Modifier::new()).child((
//!     Image("https://example.test/cover.jpg", "cover"),
//!     Column(Modifier::new().padding_left(10.0)).child((
//!         Text("Title").bold(),
//!         Text("@author").color(theme().muted),
//!     )),
//! ));
//! assert_eq!(text_content(&card), "cover Title @author");
//! ```

pub mod color;
pub mod locals;
pub mod modifier;
pub mod strategy;
pub mod tests;
pub mod view;

pub use color::*;
pub use locals::*;
pub use modifier::*;
pub use strategy::*;
pub use view::*;

pub fn Box(modifier: Modifier) -> View {
    View::new(ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text {
        text: text.into(),
        color: theme().on_surface,
        font_size: 16.0,
        bold: false,
    })
}

pub fn Image(source: impl Into<String>, alt: impl Into<String>) -> View {
    View::new(ViewKind::Image {
        source: source.into(),
        alt: alt.into(),
    })
}

/// Indeterminate loading indicator.
pub fn Spinner(label: impl Into<String>) -> View {
    View::new(ViewKind::Spinner {
        label: label.into(),
    })
}

pub fn Spacer() -> View {
    Box(Modifier::new().fill_max_width())
}

/// List without virtualization (for small lists).
pub fn SimpleList<T: Clone + 'static>(
    items: Vec<T>,
    modifier: Modifier,
    item_builder: impl Fn(T, usize) -> View,
) -> View {
    let children: Vec<View> = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| item_builder(item, i))
        .collect();

    Column(modifier).with_children(children)
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);

/// Method styling
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, dp_font: f32) -> View;
    fn bold(self) -> View;
}
impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text {
            color: text_color, ..
        } = &mut self.kind
        {
            *text_color = c;
        }
        self
    }
    fn size(mut self, dp_font: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = dp_font;
        }
        self
    }
    fn bold(mut self) -> View {
        if let ViewKind::Text { bold, .. } = &mut self.kind {
            *bold = true;
        }
        self
    }
}
