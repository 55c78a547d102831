use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{
    animation::Timeline,
    message::{AppMessage, Command, Submission},
    navigation::{
        EntranceTarget, Navigation, entrance_timeline, home_reveal, home_title_chars, mood_reveal,
    },
};
use crate::{
    audio::{error::AudioError, state::PlayerState},
    mood::{
        Catalog, CustomMoodForm, GeneratedMood, GeneratorError, LikedSongs, MoodRegistry, Page,
        ThemeDescriptor, Track, compute_theme, slugify,
    },
};

pub const HOME_COLUMNS: usize = 3;
pub const GRID_COLUMNS: usize = 4;

#[derive(Debug, Clone, Default)]
pub enum Screen {
    #[default]
    Landing,
    Entering(Timeline<EntranceTarget>),
    Shell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Home,
    Mood(String),
    Playlist,
    Liked(usize),
}

#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pub open: bool,
    pub selected: usize,
    pub playlist_expanded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingGeneration {
    pub id: Uuid,
    pub name: String,
    pub emoji: String,
}

#[derive(Debug, Clone, Default)]
pub struct MoodDialog {
    pub form: CustomMoodForm,
    pub generating: Option<PendingGeneration>,
    pub error: Option<String>,
}

impl MoodDialog {
    pub fn is_generating(&self) -> bool {
        self.generating.is_some()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_generating() && self.form.is_valid()
    }
}

/// All page-level state, owned by the UI loop. Every mutation goes through
/// `update`; rendering reads it and derives the theme.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: MoodRegistry,
    pub catalog: Catalog,
    pub liked: LikedSongs,
    pub player: PlayerState,
    pub screen: Screen,
    pub navigation: Navigation,
    pub menu: MenuState,
    pub dialog: Option<MoodDialog>,
    pub home_selected: usize,
    pub grid_selected: usize,
    pub status: Option<String>,
    pub clock: Duration,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            registry: MoodRegistry::with_builtins(),
            catalog: Catalog::seeded(),
            liked: LikedSongs::new(),
            player: PlayerState::new(),
            screen: Screen::Landing,
            navigation: Navigation::new(),
            menu: MenuState::default(),
            dialog: None,
            home_selected: 0,
            grid_selected: 0,
            status: None,
            clock: Duration::ZERO,
        }
    }

    pub fn update(&mut self, msg: AppMessage) -> Option<Command> {
        match msg {
            AppMessage::Quit => return Some(Command::Quit),
            AppMessage::Tick(dt) => self.advance(dt),

            AppMessage::EnterApp => self.enter_app(),
            AppMessage::OpenPage(id) => self.open_page(&id),
            AppMessage::ToggleMenu => self.toggle_menu(),
            AppMessage::CloseMenu => self.menu.open = false,
            AppMessage::MenuUp => self.move_menu(-1),
            AppMessage::MenuDown => self.move_menu(1),
            AppMessage::MenuActivate => self.activate_menu(),

            AppMessage::MoveSelection(delta) => self.move_selection(delta),
            AppMessage::MoveSelectionRow(rows) => {
                let columns = match self.navigation.active() {
                    Page::Home => HOME_COLUMNS,
                    _ => GRID_COLUMNS,
                };
                self.move_selection(rows * columns as isize);
            }
            AppMessage::ActivateSelection => self.activate_selection(),
            AppMessage::ToggleLikeSelected => self.toggle_like_selected(),

            AppMessage::OpenPlayer { mood, index } => self.open_player(&mood, index),
            AppMessage::ClosePlayer => self.close_player(),
            AppMessage::TogglePlayPause => self.toggle_play_pause(),
            AppMessage::NextTrack => self.next(),
            AppMessage::PreviousTrack => self.previous(),
            AppMessage::ToggleLikeCurrent => {
                if let Some(track) = self.current_track().cloned() {
                    self.toggle_like(&track, None, None);
                }
            }

            AppMessage::OpenMoodDialog => self.open_mood_dialog(),
            AppMessage::DismissMoodDialog => {
                return self.dismiss_mood_dialog().map(Command::CancelGeneration);
            }
            AppMessage::FormInput(c) => self.edit_form(|form| form.input(c)),
            AppMessage::FormPaste(text) => self.edit_form(|form| form.paste(&text)),
            AppMessage::FormBackspace => self.edit_form(CustomMoodForm::backspace),
            AppMessage::FormFocusNext => self.edit_form(CustomMoodForm::focus_next),
            AppMessage::FormFocusPrevious => self.edit_form(CustomMoodForm::focus_previous),
            AppMessage::FormCyclePreset(forward) => {
                self.edit_form(|form| form.cycle_preset(forward))
            }
            AppMessage::SubmitMood => {
                return self.submit_custom_mood().map(Command::Generate);
            }
        }
        None
    }

    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;
        if let Screen::Entering(timeline) = &mut self.screen {
            timeline.advance(dt);
            if timeline.is_finished() {
                self.screen = Screen::Shell;
                info!("Entered app");
                self.open_page("home");
            }
        }

        if let Some(page) = self.navigation.advance(dt) {
            self.page_shown(page);
        }
    }

    /// Runs the one-shot landing exit. Later calls do nothing.
    pub fn enter_app(&mut self) {
        if matches!(self.screen, Screen::Landing) {
            self.screen = Screen::Entering(entrance_timeline());
        }
    }

    pub fn is_shell_visible(&self) -> bool {
        matches!(self.screen, Screen::Shell)
    }

    pub fn entrance(&self) -> Option<&Timeline<EntranceTarget>> {
        match &self.screen {
            Screen::Entering(timeline) => Some(timeline),
            _ => None,
        }
    }

    /// Navigates to a mood id or `"home"`. Ids that name no mood go home.
    pub fn open_page(&mut self, id: &str) {
        let page = match Page::from_id(id) {
            Page::Mood(mood) if self.registry.contains(&mood) => Page::Mood(mood),
            Page::Mood(mood) => {
                debug!("No mood {mood:?}, opening home");
                Page::Home
            }
            _ => Page::Home,
        };

        if let Some(page) = self.navigation.open(page) {
            self.page_shown(page);
        }
    }

    fn page_shown(&mut self, page: Page) {
        self.menu.open = false;
        let reveal = match &page {
            Page::Mood(mood) => {
                self.grid_selected = 0;
                mood_reveal(self.catalog.len_of(mood) * 2)
            }
            _ => {
                self.home_selected = self.home_selected.min(self.registry.len());
                home_reveal(home_title_chars(), self.registry.len() + 1)
            }
        };
        self.navigation.set_reveal(reveal);
        debug!("Page {:?} shown", page.id());
    }

    pub fn active_page(&self) -> &Page {
        self.navigation.active()
    }

    pub fn theme(&self) -> ThemeDescriptor {
        compute_theme(self.navigation.active(), &self.registry)
    }

    // Player

    pub fn open_player(&mut self, mood: &str, index: usize) {
        if !self.player.open(&self.catalog, mood, index) {
            warn!("Cannot play {mood:?}: no tracks");
        }
    }

    pub fn close_player(&mut self) {
        self.player.close();
    }

    pub fn next(&mut self) {
        self.player.next(&self.catalog);
    }

    pub fn previous(&mut self) {
        self.player.previous(&self.catalog);
    }

    pub fn toggle_play_pause(&mut self) {
        self.player.toggle_play_pause();
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.player.current_track(&self.catalog)
    }

    pub fn on_media_started(&mut self) {
        self.player.set_playing(true);
    }

    pub fn on_media_paused(&mut self) {
        self.player.set_playing(false);
    }

    pub fn on_media_ended(&mut self) {
        self.next();
    }

    pub fn on_media_failed(&mut self, error: &AudioError) {
        warn!("Playback failed: {error}");
        self.player.set_playing(false);
        self.status = Some(error.to_string());
    }

    // Liked songs

    /// Likes or unlikes `track`. Context falls back to the open player's position.
    pub fn toggle_like(&mut self, track: &Track, mood: Option<&str>, index: Option<usize>) -> bool {
        let now = self.player.now_playing();
        let mood = mood.or(now.map(|n| n.mood.as_str()));
        let index = index.or(now.map(|n| n.index));
        let context = mood.zip(index);
        self.liked.toggle(track, context)
    }

    pub fn is_liked(&self, track: &Track) -> bool {
        self.liked.contains(track)
    }

    fn toggle_like_selected(&mut self) {
        let Some(mood) = self.navigation.active().mood_id().map(str::to_string) else {
            return;
        };
        let len = self.catalog.len_of(&mood);
        if len == 0 {
            return;
        }
        let index = self.grid_selected % len;
        if let Some(track) = self.catalog.track(&mood, index).cloned() {
            self.toggle_like(&track, Some(&mood), Some(index));
        }
    }

    // Menu

    pub fn menu_items(&self) -> Vec<MenuItem> {
        let mut items = vec![MenuItem::Home];
        items.extend(self.registry.ids().map(|id| MenuItem::Mood(id.to_string())));
        items.push(MenuItem::Playlist);
        if self.menu.playlist_expanded {
            items.extend((0..self.liked.len()).map(MenuItem::Liked));
        }
        items
    }

    fn toggle_menu(&mut self) {
        if self.is_shell_visible() {
            self.menu.open = !self.menu.open;
        }
    }

    /// The highlighted menu row, kept inside the list after it shrinks.
    pub fn menu_selection(&self) -> usize {
        self.menu
            .selected
            .min(self.menu_items().len().saturating_sub(1))
    }

    fn move_menu(&mut self, delta: isize) {
        let len = self.menu_items().len() as isize;
        self.menu.selected = (self.menu_selection() as isize + delta).rem_euclid(len) as usize;
    }

    fn activate_menu(&mut self) {
        self.menu.selected = self.menu_selection();
        let items = self.menu_items();
        let Some(item) = items.get(self.menu.selected) else {
            return;
        };
        match item {
            MenuItem::Home => self.open_page("home"),
            MenuItem::Mood(id) => self.open_page(id),
            MenuItem::Playlist => {
                self.menu.playlist_expanded = !self.menu.playlist_expanded;
            }
            MenuItem::Liked(i) => {
                let origin = self
                    .liked
                    .get(*i)
                    .and_then(|t| t.origin_mood.clone().zip(t.origin_index));
                if let Some((mood, index)) = origin {
                    self.open_player(&mood, index);
                }
            }
        }
    }

    // Page selection

    fn selection_len(&self) -> usize {
        match self.navigation.active() {
            Page::Home => self.registry.len() + 1,
            Page::Mood(mood) => self.catalog.len_of(mood) * 2,
            Page::Landing => 0,
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.selection_len() as isize;
        if len == 0 {
            return;
        }
        let selected = match self.navigation.active() {
            Page::Home => &mut self.home_selected,
            _ => &mut self.grid_selected,
        };
        *selected = (*selected as isize + delta).rem_euclid(len) as usize;
    }

    fn activate_selection(&mut self) {
        match self.navigation.active().clone() {
            Page::Home => {
                let mood = self
                    .registry
                    .ids()
                    .nth(self.home_selected)
                    .map(str::to_string);
                match mood {
                    Some(id) => self.open_page(&id),
                    None => self.open_mood_dialog(),
                }
            }
            Page::Mood(mood) => self.open_player(&mood, self.grid_selected),
            Page::Landing => {}
        }
    }

    // Custom mood dialog

    pub fn open_mood_dialog(&mut self) {
        if self.dialog.is_none() {
            self.dialog = Some(MoodDialog::default());
        }
    }

    /// Closes the dialog. Returns the submission whose result must now be discarded.
    pub fn dismiss_mood_dialog(&mut self) -> Option<Uuid> {
        let dialog = self.dialog.take()?;
        let pending = dialog.generating.map(|p| p.id);
        if let Some(id) = pending {
            info!("Discarding in-flight mood generation {id}");
        }
        pending
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut CustomMoodForm)) {
        if let Some(dialog) = self.dialog.as_mut() {
            edit(&mut dialog.form);
        }
    }

    pub fn is_generating(&self) -> bool {
        self.dialog.as_ref().is_some_and(MoodDialog::is_generating)
    }

    /// Commits the form to a generator call, unless a field is blank or a call
    /// is already in flight.
    pub fn submit_custom_mood(&mut self) -> Option<Submission> {
        let dialog = self.dialog.as_mut()?;
        if dialog.is_generating() {
            return None;
        }
        let request = dialog.form.request()?;

        let id = Uuid::new_v4();
        dialog.error = None;
        dialog.generating = Some(PendingGeneration {
            id,
            name: request.name.clone(),
            emoji: request.emoji.clone(),
        });
        info!("Submitting mood {:?} ({id})", request.name);
        Some(Submission { id, request })
    }

    /// Applies a generator result. Results for dismissed or superseded
    /// submissions are dropped. Returns the new mood id on success.
    pub fn finish_generation(
        &mut self,
        submission: Uuid,
        outcome: Result<GeneratedMood, GeneratorError>,
    ) -> Option<String> {
        let Some(dialog) = self.dialog.as_mut() else {
            debug!("Dropping result of {submission}: dialog closed");
            return None;
        };
        let pending = match dialog.generating.take() {
            Some(p) if p.id == submission => p,
            other => {
                debug!("Dropping result of stale submission {submission}");
                dialog.generating = other;
                return None;
            }
        };

        let mood_id = slugify(&pending.name);
        match outcome.and_then(|mood| mood.into_mood(&mood_id, &pending.emoji)) {
            Ok((definition, tracks)) => {
                info!("Registered mood {mood_id:?} with {} tracks", tracks.len());
                if self.registry.insert(mood_id.clone(), definition).is_some() {
                    info!("Mood {mood_id:?} replaced an existing one");
                }
                self.catalog.insert(mood_id.clone(), tracks);
                self.revalidate_player();
                self.dialog = None;
                self.open_page(&mood_id);
                Some(mood_id)
            }
            Err(e) => {
                warn!("Failed to generate mood: {e}");
                dialog.error = Some(e.to_string());
                None
            }
        }
    }

    /// Keeps the player index inside a playlist that was just replaced.
    fn revalidate_player(&mut self) {
        if let Some(now) = self.player.now_playing().cloned() {
            let playing = self.player.is_playing();
            if self.player.open(&self.catalog, &now.mood, now.index) {
                self.player.set_playing(playing);
            } else {
                self.player.close();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::generator::{GeneratedSong, ThemeColors};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn in_shell() -> AppState {
        let mut state = AppState::new();
        state.update(AppMessage::EnterApp);
        state.update(AppMessage::Tick(ms(1000)));
        state
    }

    fn generated(songs: usize) -> GeneratedMood {
        GeneratedMood {
            title: "Cosmic Jazz".to_string(),
            subtitle: "Late night jazz in a space lounge".to_string(),
            theme: ThemeColors {
                accent_color: "#7C4DFF".to_string(),
                gradient_start: "#0B0B2B".to_string(),
                gradient_end: "#1A237E".to_string(),
            },
            playlist: (0..songs)
                .map(|i| GeneratedSong {
                    title: format!("Song {i}"),
                    artist: "Orbit".to_string(),
                })
                .collect(),
        }
    }

    fn fill_form(state: &mut AppState, name: &str, emoji: &str, description: &str) {
        state.update(AppMessage::OpenMoodDialog);
        state.update(AppMessage::FormPaste(name.to_string()));
        state.update(AppMessage::FormFocusNext);
        state.update(AppMessage::FormPaste(emoji.to_string()));
        state.update(AppMessage::FormFocusNext);
        state.update(AppMessage::FormPaste(description.to_string()));
    }

    #[test]
    fn entrance_runs_once_then_opens_home() {
        let mut state = AppState::new();
        assert_eq!(state.active_page(), &Page::Landing);

        state.update(AppMessage::EnterApp);
        assert!(state.entrance().is_some());
        state.update(AppMessage::Tick(ms(400)));
        state.update(AppMessage::EnterApp);
        assert!(!state.is_shell_visible());

        state.update(AppMessage::Tick(ms(400)));
        assert!(state.is_shell_visible());
        assert_eq!(state.active_page(), &Page::Home);

        state.update(AppMessage::EnterApp);
        assert!(state.is_shell_visible());
    }

    #[test]
    fn unknown_page_opens_home() {
        let mut state = in_shell();
        state.open_page("sad");
        state.update(AppMessage::Tick(ms(300)));
        state.open_page("nonexistent-mood-id");
        state.update(AppMessage::Tick(ms(300)));

        assert_eq!(state.active_page(), &Page::Home);
        assert_eq!(state.theme(), compute_theme(&Page::Home, &state.registry));
    }

    #[test]
    fn navigation_closes_menu_on_completion() {
        let mut state = in_shell();
        state.update(AppMessage::ToggleMenu);
        state.update(AppMessage::MenuDown);
        state.update(AppMessage::MenuActivate);
        assert!(state.menu.open);

        state.update(AppMessage::Tick(ms(300)));
        assert!(!state.menu.open);
        assert_eq!(state.active_page(), &Page::from_id("happy"));
    }

    #[test]
    fn grid_positions_wrap_into_playlist() {
        let mut state = in_shell();
        state.open_page("sad");
        state.update(AppMessage::Tick(ms(300)));

        state.update(AppMessage::MoveSelection(-1));
        assert_eq!(state.grid_selected, 19);
        state.update(AppMessage::ActivateSelection);

        let now = state.player.now_playing().unwrap();
        assert_eq!((now.mood.as_str(), now.index), ("sad", 9));
        assert_eq!(state.current_track(), state.catalog.track("sad", 9));
    }

    #[test]
    fn like_from_grid_records_origin() {
        let mut state = in_shell();
        state.open_page("joyful");
        state.update(AppMessage::Tick(ms(300)));
        state.update(AppMessage::MoveSelection(12));
        state.update(AppMessage::ToggleLikeSelected);

        let liked = state.liked.get(0).unwrap();
        assert_eq!(liked.origin_mood.as_deref(), Some("joyful"));
        assert_eq!(liked.origin_index, Some(2));

        state.update(AppMessage::ToggleMenu);
        state.update(AppMessage::MenuUp);
        state.update(AppMessage::MenuActivate);
        assert_eq!(state.menu_items().last(), Some(&MenuItem::Liked(0)));
        state.update(AppMessage::MenuDown);
        state.update(AppMessage::MenuActivate);

        let now = state.player.now_playing().unwrap();
        assert_eq!((now.mood.as_str(), now.index), ("joyful", 2));
    }

    #[test]
    fn menu_selection_follows_shrinking_playlist() {
        let mut state = in_shell();
        state.open_player("sad", 3);
        state.update(AppMessage::ToggleLikeCurrent);
        state.close_player();

        state.update(AppMessage::ToggleMenu);
        state.update(AppMessage::MenuUp);
        state.update(AppMessage::MenuActivate);
        state.update(AppMessage::MenuDown);
        assert_eq!(state.menu_items()[state.menu.selected], MenuItem::Liked(0));

        state.update(AppMessage::MenuActivate);
        state.update(AppMessage::ToggleLikeCurrent);
        assert!(state.liked.is_empty());

        let last = state.menu_items().len() - 1;
        assert_eq!(state.menu_selection(), last);
        assert_eq!(state.menu_items()[last], MenuItem::Playlist);

        state.update(AppMessage::MenuUp);
        assert_eq!(state.menu.selected, last - 1);
    }

    #[test]
    fn like_from_player_uses_player_context() {
        let mut state = in_shell();
        state.update(AppMessage::OpenPlayer {
            mood: "happy".to_string(),
            index: 4,
        });
        state.update(AppMessage::ToggleLikeCurrent);

        let liked = state.liked.get(0).unwrap();
        assert_eq!(liked.origin_mood.as_deref(), Some("happy"));
        assert_eq!(liked.origin_index, Some(4));

        state.update(AppMessage::ToggleLikeCurrent);
        assert!(state.liked.is_empty());
    }

    #[test]
    fn media_events_drive_player() {
        let mut state = in_shell();
        state.open_player("sad", 9);
        state.on_media_paused();
        assert!(!state.player.is_playing());

        state.on_media_ended();
        assert_eq!(state.player.now_playing().unwrap().index, 0);
        assert!(state.player.is_playing());

        state.on_media_failed(&AudioError::NetworkError("offline".to_string()));
        assert!(!state.player.is_playing());
        assert!(state.status.is_some());
    }

    #[test]
    fn blank_field_does_not_submit() {
        let mut state = in_shell();
        fill_form(&mut state, "Cosmic Jazz", "", "Late night jazz");
        assert_eq!(state.update(AppMessage::SubmitMood), None);
        assert!(!state.is_generating());
        assert_eq!(state.registry.len(), 4);
    }

    #[test]
    fn submit_while_generating_is_noop() {
        let mut state = in_shell();
        fill_form(&mut state, "Cosmic Jazz", "🎷", "Late night jazz");

        let Some(Command::Generate(submission)) = state.update(AppMessage::SubmitMood) else {
            panic!("expected a generator call");
        };
        assert_eq!(submission.request.name, "Cosmic Jazz");
        assert!(state.is_generating());
        assert_eq!(state.update(AppMessage::SubmitMood), None);
    }

    #[test]
    fn successful_generation_registers_and_navigates() {
        let mut state = in_shell();
        fill_form(&mut state, "Cosmic Jazz", "🎷", "Late night jazz");
        let Some(Command::Generate(submission)) = state.update(AppMessage::SubmitMood) else {
            panic!("expected a generator call");
        };

        let id = state.finish_generation(submission.id, Ok(generated(7)));
        assert_eq!(id.as_deref(), Some("cosmic-jazz"));
        assert!(state.dialog.is_none());
        assert_eq!(state.catalog.len_of("cosmic-jazz"), 7);
        assert_eq!(
            state.registry.get("cosmic-jazz").unwrap().title,
            "Cosmic Jazz — AI Generated"
        );

        state.update(AppMessage::Tick(ms(300)));
        assert_eq!(state.active_page(), &Page::from_id("cosmic-jazz"));
        assert!(state.theme().has_marker("theme-active"));
    }

    #[test]
    fn failed_generation_keeps_dialog_for_retry() {
        let mut state = in_shell();
        fill_form(&mut state, "Cosmic Jazz", "🎷", "Late night jazz");
        let Some(Command::Generate(submission)) = state.update(AppMessage::SubmitMood) else {
            panic!("expected a generator call");
        };

        let outcome = Err(GeneratorError::Request("connection refused".to_string()));
        assert_eq!(state.finish_generation(submission.id, outcome), None);

        let dialog = state.dialog.as_ref().unwrap();
        assert!(!dialog.is_generating());
        assert!(dialog.error.as_ref().unwrap().contains("connection refused"));
        assert_eq!(dialog.form.name, "Cosmic Jazz");
        assert_eq!(state.registry.len(), 4);
        assert!(matches!(
            state.update(AppMessage::SubmitMood),
            Some(Command::Generate(_))
        ));
    }

    #[test]
    fn malformed_result_is_a_failure() {
        let mut state = in_shell();
        fill_form(&mut state, "Empty", "🎷", "Nothing");
        let Some(Command::Generate(submission)) = state.update(AppMessage::SubmitMood) else {
            panic!("expected a generator call");
        };

        assert_eq!(state.finish_generation(submission.id, Ok(generated(0))), None);
        assert!(state.dialog.as_ref().unwrap().error.is_some());
        assert!(!state.registry.contains("empty"));
    }

    #[test]
    fn dismissed_generation_is_discarded() {
        let mut state = in_shell();
        fill_form(&mut state, "Cosmic Jazz", "🎷", "Late night jazz");
        let Some(Command::Generate(submission)) = state.update(AppMessage::SubmitMood) else {
            panic!("expected a generator call");
        };

        assert_eq!(
            state.update(AppMessage::DismissMoodDialog),
            Some(Command::CancelGeneration(submission.id))
        );
        assert_eq!(state.finish_generation(submission.id, Ok(generated(3))), None);
        assert!(!state.registry.contains("cosmic-jazz"));

        // A fresh dialog does not accept the old submission either.
        state.update(AppMessage::OpenMoodDialog);
        assert_eq!(state.finish_generation(submission.id, Ok(generated(3))), None);
        assert!(!state.registry.contains("cosmic-jazz"));
    }

    #[test]
    fn mood_named_home_gets_its_own_page() {
        let mut state = in_shell();
        fill_form(&mut state, "Home", "🏠", "Cozy evenings in");
        let Some(Command::Generate(submission)) = state.update(AppMessage::SubmitMood) else {
            panic!("expected a generator call");
        };

        let id = state.finish_generation(submission.id, Ok(generated(4)));
        assert_eq!(id.as_deref(), Some("home-mood"));
        state.update(AppMessage::Tick(ms(300)));

        assert_eq!(state.active_page(), &Page::Mood("home-mood".to_string()));
        let theme = state.theme();
        assert!(theme.has_marker("home-mood-active"));
        assert!(!theme.has_marker("home-active"));
        assert!(
            state
                .menu_items()
                .contains(&MenuItem::Mood("home-mood".to_string()))
        );
    }

    #[test]
    fn overriding_playing_mood_keeps_index_valid() {
        let mut state = in_shell();
        fill_form(&mut state, "Happy", "🎷", "Replace the builtin");
        let Some(Command::Generate(submission)) = state.update(AppMessage::SubmitMood) else {
            panic!("expected a generator call");
        };
        state.open_player("happy", 8);

        state.finish_generation(submission.id, Ok(generated(3)));
        assert_eq!(state.registry.len(), 4);
        assert_eq!(state.player.now_playing().unwrap().index, 2);
        assert!(state.current_track().is_some());
    }
}
