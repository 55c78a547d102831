use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

use crate::{
    mood::{LikedSongs, MoodRegistry},
    ui::state::MenuItem,
    util::colors,
};

pub const EMPTY_PLAYLIST: &str = "Your liked songs will appear here.";

/// The left-side navigation sheet: home, every mood, then the liked list.
pub struct Menu<'a> {
    items: Vec<MenuItem>,
    selected_index: usize,
    expanded: bool,
    registry: &'a MoodRegistry,
    liked: &'a LikedSongs,
    accent: Color,
}

impl<'a> Menu<'a> {
    pub fn new(
        items: Vec<MenuItem>,
        selected_index: usize,
        registry: &'a MoodRegistry,
        liked: &'a LikedSongs,
    ) -> Self {
        Self {
            items,
            selected_index,
            expanded: false,
            registry,
            liked,
            accent: colors::PRIMARY,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    fn label(&self, item: &MenuItem) -> Line<'a> {
        match item {
            MenuItem::Home => Line::from("🏠 Home"),
            MenuItem::Mood(id) => match self.registry.get(id) {
                Some(def) => Line::from(format!("{} {}", def.emoji, def.short_title())),
                None => Line::from(id.clone()),
            },
            MenuItem::Playlist => {
                let arrow = if self.expanded { "▾" } else { "▸" };
                Line::from(format!("{arrow} My Playlist ({})", self.liked.len()))
            }
            MenuItem::Liked(i) => match self.liked.get(*i) {
                Some(track) => Line::from(vec![
                    Span::styled("  ♥ ", Style::default().fg(colors::LIKED)),
                    Span::raw(track.title.clone()),
                    Span::styled(
                        format!(" · {}", track.artist),
                        Style::default().fg(colors::NEUTRAL),
                    ),
                ]),
                None => Line::default(),
            },
        }
    }
}

impl<'a> Widget for Menu<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(self.accent))
            .title(" Menu ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if i == self.selected_index {
                    Style::default()
                        .fg(self.accent)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(colors::LIGHT_TEXT)
                };
                ListItem::new(self.label(item)).style(style)
            })
            .collect();

        if self.expanded && self.liked.is_empty() {
            items.push(
                ListItem::new(format!("  {EMPTY_PLAYLIST}"))
                    .style(Style::default().fg(colors::NEUTRAL)),
            );
        }

        List::new(items).render(inner, buf);
    }
}
