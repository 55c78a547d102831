use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    mood::{MoodDefinition, ThemeDescriptor},
    ui::{
        navigation::{HOME_SUBTITLE, HOME_TITLE, RevealTarget},
        state::{AppState, HOME_COLUMNS},
        util::truncate,
    },
    util::colors::{self, Rgb},
};

pub const CREATE_CARD: &str = "Create Your Own";
const CARD_HEIGHT: u16 = 5;

pub struct HomeView<'a> {
    state: &'a AppState,
    theme: &'a ThemeDescriptor,
}

impl<'a> HomeView<'a> {
    pub fn new(state: &'a AppState, theme: &'a ThemeDescriptor) -> Self {
        Self { state, theme }
    }

    fn base(&self) -> Rgb {
        self.theme.background.at(0.5, 0.5)
    }

    fn opacity(&self, target: RevealTarget) -> f32 {
        self.state.navigation.opacity() * self.state.navigation.reveal(target).clamp(0.0, 1.0)
    }

    fn title(&self) -> Line<'a> {
        let fg = self.theme.foreground();
        let mut index = 0;
        let spans: Vec<Span> = HOME_TITLE
            .chars()
            .map(|c| {
                if c.is_whitespace() {
                    return Span::raw(" ");
                }
                let opacity = self.opacity(RevealTarget::TitleChar(index));
                index += 1;
                Span::styled(
                    c.to_string(),
                    Style::default()
                        .fg(colors::fade(fg, self.base(), opacity))
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        Line::from(spans).centered()
    }

    fn card(&self, area: Rect, buf: &mut Buffer, index: usize, mood: Option<&MoodDefinition>) {
        let opacity = self.opacity(RevealTarget::Card(index));
        let selected = self.state.home_selected == index;
        let accent = mood.map_or(self.theme.accent, |m| m.accent);
        let border_color = colors::fade(accent, self.base(), opacity);
        let text = colors::fade(self.theme.foreground(), self.base(), opacity);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        block = if selected {
            block.border_set(border::THICK)
        } else {
            block.border_set(border::ROUNDED)
        };
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let (emoji, label) = match mood {
            Some(m) => (m.emoji.as_str(), m.short_title()),
            None => ("✨", CREATE_CARD),
        };
        let mut label_style = Style::default().fg(text);
        if selected {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        Paragraph::new(vec![
            Line::from(emoji).centered(),
            Line::styled(truncate(label, width), label_style).centered(),
        ])
        .render(inner, buf);
    }
}

impl<'a> Widget for HomeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [_, title, subtitle, _, grid] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(self.title()).render(title, buf);

        let subtitle_fg = colors::fade(
            self.theme.foreground(),
            self.base(),
            self.opacity(RevealTarget::Subtitle) * 0.8,
        );
        Paragraph::new(Line::styled(HOME_SUBTITLE, Style::default().fg(subtitle_fg)).centered())
            .wrap(Wrap { trim: true })
            .render(subtitle, buf);

        let moods: Vec<Option<&MoodDefinition>> = self
            .state
            .registry
            .iter()
            .map(|(_, def)| Some(def))
            .chain(std::iter::once(None))
            .collect();

        let rows = moods.len().div_ceil(HOME_COLUMNS);
        let selected_row = self.state.home_selected / HOME_COLUMNS;
        let visible_rows = (grid.height / CARD_HEIGHT).max(1) as usize;
        let first_row = (selected_row + 1).saturating_sub(visible_rows);

        let width = grid.width / HOME_COLUMNS as u16;
        for row in first_row..rows.min(first_row + visible_rows) {
            for col in 0..HOME_COLUMNS {
                let index = row * HOME_COLUMNS + col;
                let Some(mood) = moods.get(index) else {
                    break;
                };
                let card = Rect {
                    x: grid.x + col as u16 * width,
                    y: grid.y + (row - first_row) as u16 * CARD_HEIGHT,
                    width: width.saturating_sub(1),
                    height: CARD_HEIGHT,
                }
                .intersection(grid);
                self.card(card, buf, index, *mood);
            }
        }
    }
}
