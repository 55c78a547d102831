use crate::mood::{Catalog, Track};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub mood: String,
    pub index: usize,
}

/// Which catalog entry the player dialog shows and whether it should be audible.
/// The player is open exactly when `now_playing` is set, and `index` is always
/// in range for that mood's playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    now_playing: Option<NowPlaying>,
    playing: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.now_playing.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn now_playing(&self) -> Option<&NowPlaying> {
        self.now_playing.as_ref()
    }

    /// Opens `mood` at `index` (wrapped). Does nothing for a mood without tracks.
    pub fn open(&mut self, catalog: &Catalog, mood: &str, index: usize) -> bool {
        let len = catalog.len_of(mood);
        if len == 0 {
            return false;
        }
        self.now_playing = Some(NowPlaying {
            mood: mood.to_string(),
            index: index % len,
        });
        self.playing = true;
        true
    }

    pub fn close(&mut self) {
        self.playing = false;
        self.now_playing = None;
    }

    pub fn next(&mut self, catalog: &Catalog) -> bool {
        self.step(catalog, 1)
    }

    pub fn previous(&mut self, catalog: &Catalog) -> bool {
        self.step(catalog, -1)
    }

    fn step(&mut self, catalog: &Catalog, delta: isize) -> bool {
        let Some(now) = self.now_playing.as_mut() else {
            return false;
        };
        let len = catalog.len_of(&now.mood);
        if len == 0 {
            return false;
        }
        let len = len as isize;
        now.index = ((now.index as isize + delta).rem_euclid(len)) as usize;
        self.playing = true;
        true
    }

    pub fn toggle_play_pause(&mut self) {
        if self.is_open() {
            self.playing = !self.playing;
        }
    }

    /// Mirrors the media element's own state back into the flag.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing && self.is_open();
    }

    pub fn current_track<'a>(&self, catalog: &'a Catalog) -> Option<&'a Track> {
        self.now_playing
            .as_ref()
            .and_then(|now| catalog.track(&now.mood, now.index))
    }
}
