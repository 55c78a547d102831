use tracing::debug;

use super::{commands::MediaCommand, state::PlayerState, traits::MediaElement};
use crate::mood::Catalog;

/// Keeps the media element in step with `PlayerState`. This is the only place
/// that issues media commands, and it only issues the ones needed to get from
/// what was last applied to what the state asks for.
pub struct AudioSystem {
    media: Box<dyn MediaElement>,
    loaded: Option<String>,
    playing: bool,
}

impl AudioSystem {
    pub fn new(media: Box<dyn MediaElement>) -> Self {
        Self {
            media,
            loaded: None,
            playing: false,
        }
    }

    pub fn sync(&mut self, player: &PlayerState, catalog: &Catalog) {
        let wanted = player
            .current_track(catalog)
            .map(|track| (track.src.as_str(), player.is_playing()));

        match wanted {
            None => {
                if self.loaded.take().is_some() {
                    debug!("Stopping media");
                    self.send(MediaCommand::Stop);
                }
                self.playing = false;
            }
            Some((src, playing)) if self.loaded.as_deref() != Some(src) => {
                debug!("Loading {src}");
                self.send(MediaCommand::Load {
                    src: src.to_string(),
                    autoplay: playing,
                });
                self.loaded = Some(src.to_string());
                self.playing = playing;
            }
            Some((_, playing)) if playing != self.playing => {
                self.send(if playing {
                    MediaCommand::Play
                } else {
                    MediaCommand::Pause
                });
                self.playing = playing;
            }
            Some(_) => {}
        }
    }

    /// Records a play/pause the element did on its own, so the next sync does
    /// not echo it back.
    pub fn acknowledge(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// The element finished its source; whatever plays next must be reloaded
    /// even when it is the same URL.
    pub fn on_ended(&mut self) {
        self.loaded = None;
        self.playing = false;
    }

    fn send(&mut self, cmd: MediaCommand) {
        self.media.handle_command(cmd);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    pub struct RecordingMedia {
        pub commands: Arc<Mutex<Vec<MediaCommand>>>,
    }

    impl RecordingMedia {
        pub fn take(&self) -> Vec<MediaCommand> {
            std::mem::take(&mut *self.commands.lock().unwrap())
        }
    }

    impl MediaElement for RecordingMedia {
        fn handle_command(&mut self, cmd: MediaCommand) {
            self.commands.lock().unwrap().push(cmd);
        }
    }

    fn setup() -> (AudioSystem, RecordingMedia, Catalog, PlayerState) {
        let media = RecordingMedia::default();
        let system = AudioSystem::new(Box::new(media.clone()));
        (system, media, Catalog::seeded(), PlayerState::new())
    }

    #[test]
    fn open_loads_with_autoplay() {
        let (mut system, media, catalog, mut player) = setup();
        player.open(&catalog, "sad", 0);
        system.sync(&player, &catalog);

        assert_eq!(
            media.take(),
            [MediaCommand::Load {
                src: catalog.track("sad", 0).unwrap().src.clone(),
                autoplay: true
            }]
        );

        system.sync(&player, &catalog);
        assert!(media.take().is_empty());
    }

    #[test]
    fn toggle_pauses_and_resumes() {
        let (mut system, media, catalog, mut player) = setup();
        player.open(&catalog, "sad", 0);
        system.sync(&player, &catalog);
        media.take();

        player.toggle_play_pause();
        system.sync(&player, &catalog);
        player.toggle_play_pause();
        system.sync(&player, &catalog);

        assert_eq!(media.take(), [MediaCommand::Pause, MediaCommand::Play]);
    }

    #[test]
    fn close_stops_once() {
        let (mut system, media, catalog, mut player) = setup();
        player.open(&catalog, "happy", 2);
        system.sync(&player, &catalog);
        media.take();

        player.close();
        system.sync(&player, &catalog);
        system.sync(&player, &catalog);
        assert_eq!(media.take(), [MediaCommand::Stop]);
    }

    #[test]
    fn acknowledged_pause_is_not_echoed() {
        let (mut system, media, catalog, mut player) = setup();
        player.open(&catalog, "happy", 2);
        system.sync(&player, &catalog);
        media.take();

        player.set_playing(false);
        system.acknowledge(false);
        system.sync(&player, &catalog);
        assert!(media.take().is_empty());
    }

    #[test]
    fn ended_reloads_same_source() {
        let (mut system, media, mut catalog, mut player) = setup();
        catalog.insert(
            "solo",
            vec![crate::mood::Track::new("One", "A", "https://media.test/1.mp3", "c")],
        );
        player.open(&catalog, "solo", 0);
        system.sync(&player, &catalog);
        media.take();

        system.on_ended();
        player.next(&catalog);
        system.sync(&player, &catalog);
        assert_eq!(
            media.take(),
            [MediaCommand::Load {
                src: "https://media.test/1.mp3".to_string(),
                autoplay: true
            }]
        );
    }
}
