use std::time::Instant;

use ratatui::crossterm::event::KeyEvent;

use crate::ui::{
    app::App,
    input::InputHandler,
    message::AppMessage,
    tui::{TerminalEvent, Tui},
};

pub struct EventHandler;

impl EventHandler {
    /// Waits for the next terminal event, then drains background events.
    /// Returns whether anything changed enough to redraw.
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui)? {
                should_render = true;
            }
        }

        if app.drain_events() > 0 {
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => app.last_tick = Instant::now(),
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Paste(text) => {
                if app.state.dialog.is_some() {
                    app.update(AppMessage::FormPaste(text));
                }
            }
            TerminalEvent::Tick => {
                let now = Instant::now();
                let dt = now.duration_since(app.last_tick);
                app.last_tick = now;
                app.update(AppMessage::Tick(dt));
                return Ok(app.has_focus);
            }
            TerminalEvent::Resize(..) => {}
        }

        Ok(true)
    }

    fn handle_key_event(app: &mut App, key: KeyEvent) {
        if let Some(msg) = InputHandler::handle_key(key, &app.state) {
            app.update(msg);
        }
    }
}
