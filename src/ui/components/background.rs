use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::{mood::Gradient, util::colors::Rgb};

/// Paints a diagonal gradient into the cell backgrounds of `area`, leaving
/// symbols and foregrounds alone so content can be drawn on top.
pub struct Background {
    gradient: Gradient,
    /// Blend toward `base`; 1.0 is the full gradient.
    opacity: f32,
    base: Rgb,
}

impl Background {
    pub fn new(gradient: Gradient) -> Self {
        Self {
            gradient,
            opacity: 1.0,
            base: gradient.start,
        }
    }

    pub fn opacity(mut self, opacity: f32, base: Rgb) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.base = base;
        self
    }
}

impl Widget for Background {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let w = area.width.saturating_sub(1).max(1) as f32;
        let h = area.height.saturating_sub(1).max(1) as f32;

        for y in 0..area.height {
            for x in 0..area.width {
                let color = self
                    .base
                    .lerp(self.gradient.at(x as f32 / w, y as f32 / h), self.opacity);
                if let Some(cell) = buf.cell_mut((area.left() + x, area.top() + y)) {
                    cell.set_bg(Color::from(color));
                }
            }
        }
    }
}
