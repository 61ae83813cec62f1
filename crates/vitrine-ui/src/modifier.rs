use crate::Color;

/// Layout hints attached to a view. These are declarative only; whatever
/// host embeds the composed tree decides what a dp of padding means.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Modifier {
    pub padding: Option<f32>,
    pub padding_left: Option<f32>,
    pub gap: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fill_max_width: bool,
    pub background: Option<Color>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn padding(mut self, dp: f32) -> Self {
        self.padding = Some(dp);
        self
    }
    pub fn padding_left(mut self, dp: f32) -> Self {
        self.padding_left = Some(dp);
        self
    }
    /// Spacing between children of a Row/Column.
    pub fn gap(mut self, dp: f32) -> Self {
        self.gap = Some(dp);
        self
    }
    pub fn width(mut self, dp: f32) -> Self {
        self.width = Some(dp);
        self
    }
    pub fn height(mut self, dp: f32) -> Self {
        self.height = Some(dp);
        self
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.width = Some(w);
        self.height = Some(h);
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_width = true;
        self
    }
    pub fn background(mut self, c: Color) -> Self {
        self.background = Some(c);
        self
    }
}
