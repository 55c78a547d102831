use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use super::background::Background;
use crate::{
    mood::{Gradient, Track},
    ui::util::{get_active_track_icon, truncate},
    util::colors::{self, Rgb},
};

/// Modal dialog for the open player.
pub struct PlayerDialog<'a> {
    track: &'a Track,
    mood_title: &'a str,
    position: (usize, usize),
    playing: bool,
    liked: bool,
    accent: Rgb,
    clock: std::time::Duration,
    status: Option<&'a str>,
}

impl<'a> PlayerDialog<'a> {
    pub fn new(track: &'a Track, mood_title: &'a str, accent: Rgb) -> Self {
        Self {
            track,
            mood_title,
            position: (0, 0),
            playing: false,
            liked: false,
            accent,
            clock: std::time::Duration::ZERO,
            status: None,
        }
    }

    /// 0-based index and playlist length.
    pub fn position(mut self, index: usize, len: usize) -> Self {
        self.position = (index, len);
        self
    }

    pub fn playing(mut self, playing: bool, clock: std::time::Duration) -> Self {
        self.playing = playing;
        self.clock = clock;
        self
    }

    pub fn liked(mut self, liked: bool) -> Self {
        self.liked = liked;
        self
    }

    pub fn status(mut self, status: Option<&'a str>) -> Self {
        self.status = status;
        self
    }
}

impl<'a> Widget for PlayerDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let accent = Color::from(self.accent);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(accent))
            .title(format!(" {} ", self.mood_title))
            .title_bottom(Line::from(" esc close · space play/pause · n/p skip · l like ").centered())
            .style(Style::default().bg(colors::BACKGROUND));
        let inner = block.inner(area);
        block.render(area, buf);

        let [cover, _, info] = Layout::horizontal([
            Constraint::Length(14),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .areas(inner);

        // Cover placeholder: the accent fading into the dialog background.
        let cover_gradient = Gradient::diagonal(self.accent, Rgb::from_u32(0x0f1724));
        Background::new(cover_gradient).render(cover, buf);
        let note_y = cover.y + cover.height / 2;
        buf.set_string(
            cover.x + cover.width.saturating_sub(1) / 2,
            note_y,
            "♪",
            Style::default().fg(colors::LIGHT_TEXT),
        );

        let width = info.width as usize;
        let play = if self.playing { "⏸" } else { "▶" };
        let heart = if self.liked {
            Span::styled("♥ Liked", Style::default().fg(colors::LIKED))
        } else {
            Span::styled("♡ Like", Style::default().fg(colors::NEUTRAL))
        };
        let (index, len) = self.position;

        let mut lines = vec![
            Line::styled(
                truncate(&self.track.title, width),
                Style::default()
                    .fg(colors::LIGHT_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                truncate(&self.track.artist, width),
                Style::default().fg(colors::NEUTRAL),
            ),
            Line::default(),
            Line::from(vec![
                Span::styled("⏮   ", Style::default().fg(colors::LIGHT_TEXT)),
                Span::styled(play, Style::default().fg(accent).add_modifier(Modifier::BOLD)),
                Span::styled("   ⏭", Style::default().fg(colors::LIGHT_TEXT)),
                Span::raw("    "),
                heart,
            ]),
            Line::default(),
            Line::styled(
                format!(
                    "{} {}/{}",
                    get_active_track_icon(self.playing, self.clock),
                    index + 1,
                    len
                ),
                Style::default().fg(colors::NEUTRAL),
            ),
        ];
        if let Some(status) = self.status {
            lines.push(Line::styled(
                truncate(status, width),
                Style::default().fg(colors::ERROR),
            ));
        }

        Paragraph::new(lines).render(info, buf);
    }
}
