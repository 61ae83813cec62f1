use crate::{Color, Modifier};

/// Composed view tree node. All variants are plain data so composed output
/// can be compared structurally and dumped as text.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Box,
    Row,
    Column,
    Text {
        text: String,
        color: Color,
        font_size: f32,
        bold: bool,
    },
    Image {
        source: String,
        alt: String,
    },
    Spinner {
        label: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
}

/// Flattened visible text of a subtree, in composition order. Image alt
/// text and spinner labels count as visible.
pub fn text_content(view: &View) -> String {
    let mut parts = Vec::new();
    collect_text(view, &mut parts);
    parts.join(" ")
}

fn collect_text(view: &View, out: &mut Vec<String>) {
    match &view.kind {
        ViewKind::Text { text, .. } => out.push(text.clone()),
        ViewKind::Image { alt, .. } => out.push(alt.clone()),
        ViewKind::Spinner { label } => out.push(label.clone()),
        ViewKind::Box | ViewKind::Row | ViewKind::Column => {}
    }
    for child in &view.children {
        collect_text(child, out);
    }
}
