use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    mood::{FormField, Page},
    ui::{message::AppMessage, state::AppState},
};

/// Which layer receives keys. Overlays win over the page under them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Landing,
    Entering,
    Dialog,
    Player,
    Menu,
    Page,
}

impl InputMode {
    pub fn of(state: &AppState) -> Self {
        if state.dialog.is_some() {
            InputMode::Dialog
        } else if state.player.is_open() {
            InputMode::Player
        } else if state.menu.open {
            InputMode::Menu
        } else if state.is_shell_visible() {
            InputMode::Page
        } else if state.entrance().is_some() {
            InputMode::Entering
        } else {
            InputMode::Landing
        }
    }
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, state: &AppState) -> Option<AppMessage> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppMessage::Quit);
        }

        match InputMode::of(state) {
            InputMode::Landing => Self::landing(key),
            InputMode::Entering => None,
            InputMode::Dialog => Self::dialog(key, state),
            InputMode::Player => Self::player(key),
            InputMode::Menu => Self::menu(key),
            InputMode::Page => Self::page(key, state),
        }
    }

    fn landing(key: KeyEvent) -> Option<AppMessage> {
        match key.code {
            KeyCode::Modifier(_) | KeyCode::Null => None,
            _ => Some(AppMessage::EnterApp),
        }
    }

    fn dialog(key: KeyEvent, state: &AppState) -> Option<AppMessage> {
        let focus = state.dialog.as_ref().map(|d| d.form.focus)?;
        match (key.code, focus) {
            (KeyCode::Esc, _) => Some(AppMessage::DismissMoodDialog),
            (KeyCode::Tab | KeyCode::Down, _) => Some(AppMessage::FormFocusNext),
            (KeyCode::BackTab | KeyCode::Up, _) => Some(AppMessage::FormFocusPrevious),
            (KeyCode::Enter, FormField::Submit) => Some(AppMessage::SubmitMood),
            (KeyCode::Enter, _) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(AppMessage::SubmitMood)
            }
            (KeyCode::Enter, _) => Some(AppMessage::FormFocusNext),
            (KeyCode::Left, FormField::Emoji) => Some(AppMessage::FormCyclePreset(false)),
            (KeyCode::Right, FormField::Emoji) => Some(AppMessage::FormCyclePreset(true)),
            (KeyCode::Backspace, _) => Some(AppMessage::FormBackspace),
            (KeyCode::Char(c), FormField::Name | FormField::Emoji | FormField::Description) => {
                Some(AppMessage::FormInput(c))
            }
            _ => None,
        }
    }

    fn player(key: KeyEvent) -> Option<AppMessage> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => Some(AppMessage::ClosePlayer),
            KeyCode::Char(' ') | KeyCode::Enter => Some(AppMessage::TogglePlayPause),
            KeyCode::Char('n') | KeyCode::Right => Some(AppMessage::NextTrack),
            KeyCode::Char('p') | KeyCode::Left => Some(AppMessage::PreviousTrack),
            KeyCode::Char('l') => Some(AppMessage::ToggleLikeCurrent),
            _ => None,
        }
    }

    fn menu(key: KeyEvent) -> Option<AppMessage> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => Some(AppMessage::CloseMenu),
            KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::MenuUp),
            KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::MenuDown),
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppMessage::MenuActivate),
            KeyCode::Char('q') => Some(AppMessage::Quit),
            _ => None,
        }
    }

    fn page(key: KeyEvent, state: &AppState) -> Option<AppMessage> {
        let on_mood = matches!(state.active_page(), Page::Mood(_));
        match key.code {
            KeyCode::Char('q') => Some(AppMessage::Quit),
            KeyCode::Char('m') | KeyCode::Tab => Some(AppMessage::ToggleMenu),
            KeyCode::Char('c') => Some(AppMessage::OpenMoodDialog),
            KeyCode::Esc | KeyCode::Char('h') if on_mood => {
                Some(AppMessage::OpenPage("home".to_string()))
            }
            KeyCode::Left => Some(AppMessage::MoveSelection(-1)),
            KeyCode::Right => Some(AppMessage::MoveSelection(1)),
            KeyCode::Up => Some(AppMessage::MoveSelectionRow(-1)),
            KeyCode::Down => Some(AppMessage::MoveSelectionRow(1)),
            KeyCode::Enter | KeyCode::Char(' ') => Some(AppMessage::ActivateSelection),
            KeyCode::Char('l') if on_mood => Some(AppMessage::ToggleLikeSelected),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10)? as usize - 1;
                let id = state.registry.ids().nth(index)?;
                Some(AppMessage::OpenPage(id.to_string()))
            }
            _ => None,
        }
    }
}
