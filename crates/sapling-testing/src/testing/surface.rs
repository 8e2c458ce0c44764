use sapling_ui_graphics::{Color, Point, Rect, Surface};

/// One call received by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    FillRect(Rect, Color),
    StrokeRect(Rect, Color),
    Text {
        origin: Point,
        text: String,
        color: Color,
    },
    Present,
}

/// Surface that records every drawing call instead of rasterizing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Returns and forgets everything recorded so far.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn presented_frames(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Present))
            .count()
    }

    /// Text drawn since the most recent clear.
    pub fn last_frame_texts(&self) -> Vec<&str> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear(_)))
            .unwrap_or(0);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Filled rectangles drawn since the most recent clear.
    pub fn last_frame_fills(&self) -> Vec<Rect> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Clear(_)))
            .unwrap_or(0);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect(rect, _) => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::StrokeRect(rect, color));
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.to_owned(),
            color,
        });
    }

    fn present(&mut self) {
        self.ops.push(DrawOp::Present);
    }
}
