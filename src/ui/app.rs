use std::{sync::Arc, time::Instant};

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{debug, info};

use crate::{
    audio::{system::AudioSystem, traits::MediaElement},
    config::Config,
    event::events::Event,
    mood::MoodGenerator,
    util::task::TaskManager,
};

use super::{
    layout::AppLayout,
    message::{AppMessage, Command, Submission},
    state::AppState,
    tui::{self, TerminalEvent},
    util::handler::EventHandler,
};

const GENERATE_TASK: &str = "generate";

pub struct App {
    pub state: AppState,
    pub audio_system: AudioSystem,
    pub generator: Arc<dyn MoodGenerator>,
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub task_manager: TaskManager,
    pub config: Config,
    pub has_focus: bool,
    pub should_quit: bool,
    pub last_tick: Instant,
}

impl App {
    pub fn new(
        config: Config,
        media: Box<dyn MediaElement>,
        generator: Arc<dyn MoodGenerator>,
        (event_tx, event_rx): (Sender<Event>, Receiver<Event>),
    ) -> Self {
        Self {
            state: AppState::new(),
            audio_system: AudioSystem::new(media),
            generator,
            event_rx,
            event_tx,
            task_manager: TaskManager::new(),
            config,
            has_focus: true,
            should_quit: false,
            last_tick: Instant::now(),
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?
            .tick_rate(self.config.tick_rate)
            .paste(true);
        tui.enter()?;

        EventHandler::handle_event(self, TerminalEvent::Init, &mut tui)?;
        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        info!("Bye");
        Ok(())
    }

    fn ui(&self, frame: &mut Frame) {
        if self.has_focus {
            AppLayout::new(&self.state).render(frame, frame.area());
        }
    }

    /// Applies a message and runs whatever side effect it asks for.
    pub fn update(&mut self, msg: AppMessage) {
        if let Some(command) = self.state.update(msg) {
            self.execute(command);
        }
        self.sync_audio();
    }

    pub fn handle_action(&mut self, evt: Event) {
        match evt {
            Event::MediaStarted => {
                self.state.on_media_started();
                self.audio_system.acknowledge(self.state.player.is_playing());
            }
            Event::MediaPaused => {
                self.state.on_media_paused();
                self.audio_system.acknowledge(false);
            }
            Event::MediaEnded => {
                self.audio_system.on_ended();
                self.state.on_media_ended();
            }
            Event::MediaFailed(e) => {
                self.state.on_media_failed(&e);
                self.audio_system.acknowledge(false);
            }
            Event::MoodGenerated {
                submission,
                outcome,
            } => {
                if let Some(id) = self.state.finish_generation(submission, outcome) {
                    debug!("Now showing generated mood {id}");
                }
            }
        }
        self.sync_audio();
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::Generate(submission) => self.spawn_generation(submission),
            Command::CancelGeneration(id) => {
                if self.task_manager.abort(GENERATE_TASK) {
                    info!("Cancelled mood generation {id}");
                }
            }
        }
    }

    fn spawn_generation(&mut self, Submission { id, request }: Submission) {
        let generator = self.generator.clone();
        let tx = self.event_tx.clone();

        self.task_manager.spawn(
            GENERATE_TASK,
            tokio::spawn(async move {
                let outcome = generator.generate(&request).await;
                let _ = tx.send(Event::MoodGenerated {
                    submission: id,
                    outcome,
                });
            }),
        );
    }

    fn sync_audio(&mut self) {
        self.audio_system
            .sync(&self.state.player, &self.state.catalog);
    }

    /// Handles every event background tasks have queued so far.
    pub fn drain_events(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(evt) = self.event_rx.try_recv() {
            self.handle_action(evt);
            handled += 1;
        }
        handled
    }
}
