use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::spinner::Spinner;
use crate::{
    mood::{FormField, form::EMOJI_PRESETS},
    ui::state::MoodDialog,
    util::colors,
};

pub const DIALOG_TITLE: &str = " Create your own mood ";

pub struct MoodFormDialog<'a> {
    dialog: &'a MoodDialog,
    accent: Color,
    clock: Duration,
}

impl<'a> MoodFormDialog<'a> {
    pub fn new(dialog: &'a MoodDialog, accent: Color, clock: Duration) -> Self {
        Self {
            dialog,
            accent,
            clock,
        }
    }

    fn field(&self, label: &'static str, value: &str, field: FormField) -> Vec<Line<'a>> {
        let focused = self.dialog.form.focus == field;
        let label_style = if focused {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::NEUTRAL)
        };
        let cursor = if focused && !self.dialog.is_generating() {
            "▏"
        } else {
            ""
        };
        vec![
            Line::styled(label, label_style),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(value.to_string(), Style::default().fg(colors::LIGHT_TEXT)),
                Span::styled(cursor, Style::default().fg(self.accent)),
            ]),
        ]
    }

    fn presets(&self) -> Line<'a> {
        let selected = self.dialog.form.selected_preset();
        let mut spans = vec![Span::raw("  ")];
        for (i, preset) in EMOJI_PRESETS.iter().enumerate() {
            let style = if selected == Some(i) {
                Style::default().bg(self.accent)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {preset} "), style));
        }
        if self.dialog.form.focus == FormField::Emoji {
            spans.push(Span::styled(
                "  ←/→ presets",
                Style::default().fg(colors::NEUTRAL),
            ));
        }
        Line::from(spans)
    }

    fn submit(&self) -> Line<'a> {
        let label = if self.dialog.is_generating() {
            "[ Generating… ]"
        } else {
            "[ Generate mood ]"
        };
        let mut style = if self.dialog.can_submit() {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::NEUTRAL).add_modifier(Modifier::DIM)
        };
        if self.dialog.form.focus == FormField::Submit {
            style = style.add_modifier(Modifier::REVERSED);
        }
        Line::styled(label, style).centered()
    }
}

impl<'a> Widget for MoodFormDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(self.accent))
            .title(DIALOG_TITLE)
            .title_bottom(Line::from(" tab next field · enter submit · esc cancel ").centered())
            .style(Style::default().bg(colors::BACKGROUND));
        let inner = block.inner(area);
        block.render(area, buf);

        let form = &self.dialog.form;
        let mut lines = Vec::new();
        lines.extend(self.field("Mood name", &form.name, FormField::Name));
        lines.extend(self.field("Emoji", &form.emoji, FormField::Emoji));
        lines.push(self.presets());
        lines.extend(self.field(
            "Describe the vibe",
            &form.description,
            FormField::Description,
        ));
        lines.push(Line::default());
        lines.push(self.submit());

        let [body, status] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(2)]).areas(inner);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(body, buf);

        if self.dialog.is_generating() {
            Spinner::new(self.clock)
                .with_style(Style::default().fg(self.accent))
                .with_label("Asking the generator for a mood…")
                .render(status, buf);
        } else if let Some(error) = &self.dialog.error {
            Paragraph::new(error.as_str())
                .style(Style::default().fg(colors::ERROR))
                .wrap(Wrap { trim: true })
                .render(status, buf);
        }
    }
}
