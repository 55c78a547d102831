use std::{
    io::Cursor,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use flume::Sender;
use rodio::Decoder;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{
    commands::MediaCommand, engine::PlaybackEngine, error::AudioError, traits::MediaElement,
};
use crate::{event::events::Event, http::ApiService};

/// Load generation shared between the UI thread and load tasks. Holding the
/// lock orders a load's sink writes against `stop`.
#[derive(Clone, Default)]
struct LoadGate(Arc<Mutex<u64>>);

impl LoadGate {
    fn lock(&self) -> MutexGuard<'_, u64> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Supersedes every outstanding load, running `stop` under the lock.
    fn advance(&self, stop: impl FnOnce()) -> u64 {
        let mut current = self.lock();
        *current += 1;
        stop();
        *current
    }

    fn run_if_current<R>(&self, generation: u64, f: impl FnOnce() -> R) -> Option<R> {
        let current = self.lock();
        (*current == generation).then(f)
    }
}

/// Fetches a track over HTTP, decodes it with rodio and plays it on the default
/// output device.
pub struct RodioMedia {
    engine: PlaybackEngine,
    api: Arc<ApiService>,
    event_tx: Sender<Event>,
    gate: LoadGate,
    ready: Arc<AtomicBool>,
    playing: Arc<AtomicBool>,
    wants_play: Arc<AtomicBool>,
    load_task: Option<JoinHandle<()>>,
}

impl RodioMedia {
    pub fn new(api: Arc<ApiService>, event_tx: Sender<Event>) -> Result<Self, AudioError> {
        let media = Self {
            engine: PlaybackEngine::new()?,
            api,
            event_tx,
            gate: LoadGate::default(),
            ready: Arc::new(AtomicBool::new(false)),
            playing: Arc::new(AtomicBool::new(false)),
            wants_play: Arc::new(AtomicBool::new(false)),
            load_task: None,
        };
        media.start_monitor();
        Ok(media)
    }

    fn start_monitor(&self) {
        let sink = self.engine.sink();
        let ready = self.ready.clone();
        let playing = self.playing.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(100)).await;

                if ready.load(Ordering::Acquire) && playing.load(Ordering::Acquire) && sink.empty()
                {
                    ready.store(false, Ordering::Release);
                    playing.store(false, Ordering::Release);
                    if event_tx.send(Event::MediaEnded).is_err() {
                        break;
                    }
                }
            }
        });
    }

    fn reset(&mut self) -> u64 {
        if let Some(task) = self.load_task.take() {
            task.abort();
        }
        let engine = &self.engine;
        let generation = self.gate.advance(|| engine.stop());
        self.ready.store(false, Ordering::Release);
        self.playing.store(false, Ordering::Release);
        generation
    }

    fn load(&mut self, src: String, autoplay: bool) {
        let generation = self.reset();
        self.wants_play.store(autoplay, Ordering::Release);

        let gate = self.gate.clone();
        let api = self.api.clone();
        let sink = self.engine.sink();
        let ready = self.ready.clone();
        let playing = self.playing.clone();
        let wants_play = self.wants_play.clone();
        let event_tx = self.event_tx.clone();

        self.load_task = Some(tokio::spawn(async move {
            let decoded = match api.fetch_media(&src).await {
                Ok(bytes) => tokio::task::spawn_blocking(move || decode(bytes))
                    .await
                    .unwrap_or_else(|e| Err(AudioError::DecodingError(e.to_string()))),
                Err(e) => Err(e),
            };

            let delivered = gate.run_if_current(generation, || match decoded {
                Ok(source) => {
                    let play = wants_play.load(Ordering::Acquire);
                    sink.append(source);
                    if play {
                        sink.play();
                    } else {
                        sink.pause();
                    }
                    playing.store(play, Ordering::Release);
                    ready.store(true, Ordering::Release);
                    info!("Loaded {src}");
                    let _ = event_tx.send(if play {
                        Event::MediaStarted
                    } else {
                        Event::MediaPaused
                    });
                }
                Err(e) => {
                    warn!("Failed to load {src}: {e}");
                    let _ = event_tx.send(Event::MediaFailed(e));
                }
            });

            if delivered.is_none() {
                debug!("Dropped superseded load of {src}");
            }
        }));
    }
}

fn decode(bytes: Vec<u8>) -> Result<Decoder<Cursor<Vec<u8>>>, AudioError> {
    let len = bytes.len() as u64;
    Decoder::builder()
        .with_data(Cursor::new(bytes))
        .with_byte_len(len)
        .with_hint("mp3")
        .with_gapless(true)
        .build()
        .map_err(|e| AudioError::DecodingError(e.to_string()))
}

impl MediaElement for RodioMedia {
    fn handle_command(&mut self, cmd: MediaCommand) {
        match cmd {
            MediaCommand::Load { src, autoplay } => self.load(src, autoplay),
            MediaCommand::Play => {
                self.wants_play.store(true, Ordering::Release);
                self.engine.play();
                if self.ready.load(Ordering::Acquire) {
                    self.playing.store(true, Ordering::Release);
                }
            }
            MediaCommand::Pause => {
                self.wants_play.store(false, Ordering::Release);
                self.engine.pause();
                self.playing.store(false, Ordering::Release);
            }
            MediaCommand::Stop => {
                self.wants_play.store(false, Ordering::Release);
                self.reset();
            }
        }
    }
}

impl Drop for RodioMedia {
    fn drop(&mut self) {
        self.reset();
    }
}

/// Stands in for the output device when audio is muted or unavailable. It
/// reports loads as started and never finishes a track.
pub struct SilentMedia {
    event_tx: Sender<Event>,
}

impl SilentMedia {
    pub fn new(event_tx: Sender<Event>) -> Self {
        Self { event_tx }
    }
}

impl MediaElement for SilentMedia {
    fn handle_command(&mut self, cmd: MediaCommand) {
        if let MediaCommand::Load { src, autoplay } = cmd {
            info!("Silent playback of {src}");
            let _ = self.event_tx.send(if autoplay {
                Event::MediaStarted
            } else {
                Event::MediaPaused
            });
        }
    }
}
