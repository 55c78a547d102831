use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    mood::{MoodDefinition, ThemeDescriptor, Track},
    ui::{
        navigation::RevealTarget,
        state::{AppState, GRID_COLUMNS},
        util::{get_active_track_icon, truncate},
    },
    util::colors::{self, Rgb},
};

const CARD_HEIGHT: u16 = 4;

/// A mood's header and its looping song grid. The grid shows the playlist
/// twice in a row; position `p` is track `p mod len`.
pub struct MoodPage<'a> {
    state: &'a AppState,
    theme: &'a ThemeDescriptor,
    mood_id: &'a str,
    mood: &'a MoodDefinition,
}

impl<'a> MoodPage<'a> {
    pub fn new(
        state: &'a AppState,
        theme: &'a ThemeDescriptor,
        mood_id: &'a str,
        mood: &'a MoodDefinition,
    ) -> Self {
        Self {
            state,
            theme,
            mood_id,
            mood,
        }
    }

    fn base(&self) -> Rgb {
        self.theme.background.at(0.5, 0.5)
    }

    fn header(&self, area: Rect, buf: &mut Buffer) {
        let opacity = self.state.navigation.opacity();
        let fg = colors::fade(self.theme.foreground(), self.base(), opacity);
        let accent = colors::fade(self.theme.accent, self.base(), opacity);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", self.mood.emoji),
                    Style::default().bg(accent),
                ),
                Span::raw("  "),
                Span::styled(
                    self.mood.title.clone(),
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                ),
            ])
            .centered(),
            Line::styled(self.mood.subtitle.clone(), Style::default().fg(fg)).centered(),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn card(&self, area: Rect, buf: &mut Buffer, position: usize, index: usize, track: &Track) {
        let opacity = self.state.navigation.opacity()
            * self
                .state
                .navigation
                .reveal(RevealTarget::Card(position))
                .clamp(0.0, 1.0);
        let selected = self.state.grid_selected == position;
        let now = self.state.player.now_playing();
        let is_current = now.is_some_and(|n| n.mood == self.mood_id && n.index == index);

        let border_color = colors::fade(self.theme.accent, self.base(), opacity);
        let text = colors::fade(self.theme.foreground(), self.base(), opacity);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(if selected {
                border::THICK
            } else {
                border::ROUNDED
            })
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width.saturating_sub(2) as usize;
        let prefix = if is_current {
            get_active_track_icon(self.state.player.is_playing(), self.state.clock)
        } else {
            " "
        };
        let heart = if self.state.is_liked(track) {
            Span::styled("♥", Style::default().fg(colors::LIKED))
        } else {
            Span::raw(" ")
        };

        let mut title_style = Style::default().fg(text);
        if selected {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        Paragraph::new(vec![
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(border_color)),
                Span::styled(truncate(&track.title, width.saturating_sub(2)), title_style),
                Span::raw(" "),
                heart,
            ]),
            Line::styled(
                format!(" {}", truncate(&track.artist, width)),
                Style::default().fg(text).add_modifier(Modifier::DIM),
            ),
        ])
        .render(inner, buf);
    }
}

impl<'a> Widget for MoodPage<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, _, grid] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        self.header(header, buf);

        let Some(tracks) = self.state.catalog.playlist(self.mood_id) else {
            return;
        };
        let positions = tracks.len() * 2;
        let rows = positions.div_ceil(GRID_COLUMNS);
        let visible_rows = (grid.height / CARD_HEIGHT).max(1) as usize;
        let selected_row = self.state.grid_selected / GRID_COLUMNS;
        let first_row = (selected_row + 1).saturating_sub(visible_rows);

        let width = grid.width / GRID_COLUMNS as u16;
        for row in first_row..rows.min(first_row + visible_rows) {
            for col in 0..GRID_COLUMNS {
                let position = row * GRID_COLUMNS + col;
                if position >= positions {
                    break;
                }
                let index = position % tracks.len();
                let card = Rect {
                    x: grid.x + col as u16 * width,
                    y: grid.y + (row - first_row) as u16 * CARD_HEIGHT,
                    width: width.saturating_sub(1),
                    height: CARD_HEIGHT,
                }
                .intersection(grid);
                self.card(card, buf, position, index, &tracks[index]);
            }
        }
    }
}
