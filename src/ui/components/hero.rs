use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

use super::background::Background;
use crate::{
    mood::theme::{HOME_ACCENT, HOME_BACKGROUND},
    util::colors::{self, Rgb},
};

pub const WORDMARK: &str = "MoodyO";
pub const TAGLINE: &str = "Music for the way you feel";
pub const PROMPT: &str = "press any key to start";

/// The landing screen. While the entrance runs, the content fades and
/// tightens and then the whole hero fades into the base background.
pub struct Hero {
    content_opacity: f32,
    content_scale: f32,
    hero_opacity: f32,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            content_opacity: 1.0,
            content_scale: 1.0,
            hero_opacity: 1.0,
        }
    }
}

impl Hero {
    pub fn new(content_opacity: f32, content_scale: f32, hero_opacity: f32) -> Self {
        Self {
            content_opacity,
            content_scale,
            hero_opacity,
        }
    }

    /// Letter spacing stands in for scale: two columns at full size, none at 0.8.
    fn wordmark(&self) -> String {
        let gap = (((self.content_scale - 0.8) / 0.2) * 2.0).round().clamp(0.0, 2.0) as usize;
        let sep = " ".repeat(gap);
        WORDMARK
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join(&sep)
    }
}

impl Widget for Hero {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let base = Rgb::from_u32(0x0f1724);
        Background::new(HOME_BACKGROUND)
            .opacity(self.hero_opacity, base)
            .render(area, buf);

        let mid = HOME_BACKGROUND.at(0.5, 0.5);
        let opacity = self.content_opacity * self.hero_opacity;
        let accent = colors::fade(HOME_ACCENT, mid, opacity);
        let text = colors::fade(Rgb::from_u32(0xf5f5f5), mid, opacity);

        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .areas(area);

        let lines = vec![
            Line::styled(
                self.wordmark(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(TAGLINE, Style::default().fg(text)),
            Line::default(),
            Line::styled(PROMPT, Style::default().fg(text).add_modifier(Modifier::DIM)),
        ];
        Paragraph::new(lines).centered().render(content, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordmark_tightens_with_scale() {
        assert_eq!(Hero::new(1.0, 1.0, 1.0).wordmark(), "M  o  o  d  y  O");
        assert_eq!(Hero::new(1.0, 0.8, 1.0).wordmark(), "MoodyO");
    }

    #[test]
    fn renders_wordmark_centered() {
        let area = Rect::new(0, 0, 40, 9);
        let mut buf = Buffer::empty(area);
        Hero::default().render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 2)].symbol()).collect();
        assert!(row.contains("M  o  o  d  y  O"));
    }
}
