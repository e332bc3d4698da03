//! The boundary between the grid's render pass and whatever actually paints pixels.

use super::elements::element::Rgba;
use super::util::vectors::PixelRect;

/// Something that can paint filled, axis aligned rectangles
pub trait CellRenderer {
    /// Whether draws can be accepted right now
    /// The render pass checks this once and skips the whole frame if it is false
    fn is_ready(&self) -> bool {
        true
    }
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba);
}

/// Records every draw call instead of painting
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub ready: bool,
    pub calls: Vec<(PixelRect, Rgba)>,
}

#[cfg(test)]
impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            ready: true,
            calls: Vec::new(),
        }
    }
}

#[cfg(test)]
impl CellRenderer for RecordingRenderer {
    fn is_ready(&self) -> bool {
        self.ready
    }
    fn fill_rect(&mut self, rect: PixelRect, color: Rgba) {
        self.calls.push((rect, color));
    }
}
