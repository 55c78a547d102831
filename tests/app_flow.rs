use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use moodyo::{
    audio::{commands::MediaCommand, traits::MediaElement},
    config::Config,
    event::events::Event,
    mood::{
        GeneratedMood, GeneratorError, MoodGenerator, MoodRequest, Page,
        generator::{GeneratedSong, ThemeColors},
    },
    ui::{app::App, message::AppMessage},
};

#[derive(Clone, Default)]
struct RecordingMedia {
    commands: Arc<Mutex<Vec<MediaCommand>>>,
}

impl RecordingMedia {
    fn take(&self) -> Vec<MediaCommand> {
        std::mem::take(&mut *self.commands.lock().unwrap())
    }
}

impl MediaElement for RecordingMedia {
    fn handle_command(&mut self, cmd: MediaCommand) {
        self.commands.lock().unwrap().push(cmd);
    }
}

enum Reply {
    Songs(usize),
    Fail(GeneratorError),
    Hang,
}

struct StubGenerator {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<MoodRequest>>,
}

impl StubGenerator {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MoodGenerator for StubGenerator {
    async fn generate(&self, request: &MoodRequest) -> Result<GeneratedMood, GeneratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            Reply::Songs(n) => Ok(GeneratedMood {
                title: request.name.clone(),
                subtitle: format!("{} vibes", request.description),
                theme: ThemeColors {
                    accent_color: "#7C4DFF".to_string(),
                    gradient_start: "#0B0B2B".to_string(),
                    gradient_end: "#1A237E".to_string(),
                },
                playlist: (0..*n)
                    .map(|i| GeneratedSong {
                        title: format!("Orbit {i}"),
                        artist: "The Satellites".to_string(),
                    })
                    .collect(),
            }),
            Reply::Fail(e) => Err(e.clone()),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(GeneratorError::Timeout)
            }
        }
    }
}

fn app_with(generator: Arc<StubGenerator>) -> (App, RecordingMedia) {
    let media = RecordingMedia::default();
    let mut app = App::new(
        Config::default(),
        Box::new(media.clone()),
        generator,
        flume::unbounded(),
    );
    app.update(AppMessage::EnterApp);
    app.update(AppMessage::Tick(Duration::from_secs(1)));
    (app, media)
}

fn fill_form(app: &mut App, name: &str, emoji: &str, description: &str) {
    app.update(AppMessage::OpenMoodDialog);
    app.update(AppMessage::FormPaste(name.to_string()));
    app.update(AppMessage::FormFocusNext);
    app.update(AppMessage::FormPaste(emoji.to_string()));
    app.update(AppMessage::FormFocusNext);
    app.update(AppMessage::FormPaste(description.to_string()));
}

async fn next_event(app: &App) -> Option<Event> {
    tokio::time::timeout(Duration::from_secs(2), app.event_rx.recv_async())
        .await
        .ok()?
        .ok()
}

#[tokio::test]
async fn cosmic_jazz_is_generated_and_opened() {
    let generator = StubGenerator::new(Reply::Songs(6));
    let (mut app, _) = app_with(generator.clone());

    fill_form(&mut app, "Cosmic Jazz", "🎷", "Late night jazz in a space lounge");
    app.update(AppMessage::SubmitMood);
    assert!(app.state.is_generating());

    let event = next_event(&app).await.expect("generator result");
    app.handle_action(event);
    app.update(AppMessage::Tick(Duration::from_millis(300)));

    assert_eq!(generator.calls(), 1);
    assert_eq!(
        generator.requests.lock().unwrap()[0],
        MoodRequest {
            name: "Cosmic Jazz".to_string(),
            emoji: "🎷".to_string(),
            description: "Late night jazz in a space lounge".to_string(),
        }
    );

    let mood = app.state.registry.get("cosmic-jazz").expect("registered");
    assert_eq!(mood.title, "Cosmic Jazz — AI Generated");
    assert_eq!(mood.emoji, "🎷");
    assert_eq!(app.state.catalog.len_of("cosmic-jazz"), 6);
    assert!(app.state.dialog.is_none());
    assert_eq!(app.state.active_page(), &Page::from_id("cosmic-jazz"));

    let theme = app.state.theme();
    assert!(theme.has_marker("cosmic-jazz-active"));
    assert!(theme.has_marker("custom-theme-active"));
    assert!(theme.has_marker("theme-active"));
}

#[tokio::test]
async fn empty_field_never_reaches_generator() {
    let generator = StubGenerator::new(Reply::Songs(3));
    let (mut app, _) = app_with(generator.clone());

    fill_form(&mut app, "Cosmic Jazz", "🎷", "   ");
    app.update(AppMessage::SubmitMood);

    assert!(!app.state.is_generating());
    assert!(next_event(&app).await.is_none());
    assert_eq!(generator.calls(), 0);
    assert_eq!(app.state.registry.len(), 4);
}

#[tokio::test]
async fn failure_keeps_dialog_open() {
    let generator = StubGenerator::new(Reply::Fail(GeneratorError::Status {
        status: 502,
        body: "bad gateway".to_string(),
    }));
    let (mut app, _) = app_with(generator.clone());

    fill_form(&mut app, "Cosmic Jazz", "🎷", "Late night jazz");
    app.update(AppMessage::SubmitMood);
    let event = next_event(&app).await.expect("generator result");
    app.handle_action(event);

    let dialog = app.state.dialog.as_ref().expect("dialog stays open");
    assert!(!dialog.is_generating());
    assert!(dialog.error.as_deref().unwrap().contains("502"));
    assert!(!app.state.registry.contains("cosmic-jazz"));
    assert_eq!(app.state.active_page(), &Page::Home);
}

#[tokio::test]
async fn dismissing_aborts_generation() {
    let generator = StubGenerator::new(Reply::Hang);
    let (mut app, _) = app_with(generator.clone());

    fill_form(&mut app, "Cosmic Jazz", "🎷", "Late night jazz");
    app.update(AppMessage::SubmitMood);
    tokio::task::yield_now().await;
    assert!(app.task_manager.is_running("generate"));

    app.update(AppMessage::DismissMoodDialog);
    assert!(app.state.dialog.is_none());
    assert!(!app.task_manager.is_running("generate"));
    assert!(next_event(&app).await.is_none());
    assert_eq!(app.state.registry.len(), 4);
}

#[tokio::test]
async fn media_follows_player() {
    let generator = StubGenerator::new(Reply::Songs(1));
    let (mut app, media) = app_with(generator);
    media.take();

    app.update(AppMessage::OpenPlayer {
        mood: "sad".to_string(),
        index: 9,
    });
    let src = app.state.current_track().unwrap().src.clone();
    assert_eq!(
        media.take(),
        vec![MediaCommand::Load {
            src,
            autoplay: true
        }]
    );

    app.update(AppMessage::TogglePlayPause);
    assert_eq!(media.take(), vec![MediaCommand::Pause]);

    app.handle_action(Event::MediaStarted);
    app.handle_action(Event::MediaEnded);
    let now = app.state.player.now_playing().unwrap();
    assert_eq!((now.mood.as_str(), now.index), ("sad", 0));
    assert!(matches!(
        media.take().as_slice(),
        [MediaCommand::Load { autoplay: true, .. }]
    ));

    app.update(AppMessage::ClosePlayer);
    assert_eq!(media.take(), vec![MediaCommand::Stop]);
    assert!(!app.state.player.is_playing());
}
