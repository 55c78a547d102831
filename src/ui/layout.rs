use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    mood::{Page, ThemeDescriptor},
    ui::{
        components::{
            background::Background, hero::Hero, menu::Menu, mood_form::MoodFormDialog,
            player::PlayerDialog,
        },
        navigation::EntranceTarget,
        state::AppState,
        util::centered_rect,
        views::{HomeView, MoodPage},
    },
    util::colors,
};

pub const FOOTER: &str = "Made with ❤️ MoodyO — mood based audio UI demo";
const MENU_WIDTH: u16 = 34;

pub struct AppLayout<'a> {
    pub state: &'a AppState,
}

impl<'a> AppLayout<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        if !self.state.is_shell_visible() {
            let hero = match self.state.entrance() {
                Some(entrance) => Hero::new(
                    entrance.value_or(EntranceTarget::ContentOpacity, 1.0),
                    entrance.value_or(EntranceTarget::ContentScale, 1.0),
                    entrance.value_or(EntranceTarget::HeroOpacity, 1.0),
                ),
                None => Hero::default(),
            };
            f.render_widget(hero, area);
            return;
        }

        let theme = self.state.theme();
        f.render_widget(Background::new(theme.background), area);

        let [header, content, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(f, header, &theme);
        self.render_page(f, content, &theme);
        f.render_widget(
            Paragraph::new(
                Line::styled(FOOTER, Style::default().fg(Color::from(theme.foreground())))
                    .centered(),
            ),
            footer,
        );

        let accent = Color::from(theme.accent);
        if self.state.menu.open {
            let menu_area = Rect {
                width: MENU_WIDTH.min(content.width),
                ..content
            };
            f.render_widget(ratatui::widgets::Clear, menu_area);
            f.render_widget(Background::new(theme.background), menu_area);
            f.render_widget(
                Menu::new(
                    self.state.menu_items(),
                    self.state.menu_selection(),
                    &self.state.registry,
                    &self.state.liked,
                )
                .expanded(self.state.menu.playlist_expanded)
                .accent(accent),
                menu_area,
            );
        }

        if let (Some(now), Some(track)) =
            (self.state.player.now_playing(), self.state.current_track())
        {
            let mood_title = self
                .state
                .registry
                .get(&now.mood)
                .map_or(now.mood.as_str(), |m| m.short_title());
            let mood_accent = self
                .state
                .registry
                .get(&now.mood)
                .map_or(theme.accent, |m| m.accent);
            f.render_widget(
                PlayerDialog::new(track, mood_title, mood_accent)
                    .position(now.index, self.state.catalog.len_of(&now.mood))
                    .playing(self.state.player.is_playing(), self.state.clock)
                    .liked(self.state.is_liked(track))
                    .status(self.state.status.as_deref()),
                centered_rect(area, 64, 10),
            );
        }

        if let Some(dialog) = &self.state.dialog {
            f.render_widget(
                MoodFormDialog::new(dialog, accent, self.state.clock),
                centered_rect(area, 64, 18),
            );
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect, theme: &ThemeDescriptor) {
        let fg: Color = theme.foreground().into();
        let accent: Color = theme.accent.into();
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(" ☰ ", Style::default().fg(accent)),
                Span::styled(
                    "MoodyO",
                    Style::default().fg(fg).add_modifier(Modifier::BOLD),
                ),
            ])),
            left,
        );
        f.render_widget(
            Paragraph::new(
                Line::styled(
                    "m menu · c create · q quit ",
                    Style::default().fg(fg).add_modifier(Modifier::DIM),
                )
                .right_aligned(),
            ),
            right,
        );
    }

    fn render_page(&self, f: &mut Frame, area: Rect, theme: &ThemeDescriptor) {
        let area = area.inner(ratatui::layout::Margin::new(2, 0));
        match self.state.active_page() {
            Page::Mood(id) => match self.state.registry.get(id) {
                Some(mood) => f.render_widget(MoodPage::new(self.state, theme, id, mood), area),
                None => f.render_widget(HomeView::new(self.state, theme), area),
            },
            _ => f.render_widget(HomeView::new(self.state, theme), area),
        }
    }
}
