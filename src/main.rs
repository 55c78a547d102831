use std::sync::Arc;

use flume::Sender;
use moodyo::{
    audio::{
        media::{RodioMedia, SilentMedia},
        traits::MediaElement,
    },
    config::Config,
    event::events::Event,
    http::ApiService,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};
use tracing::{info, warn};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let config = Config::from_env()?;
    info!("Starting with generator at {}", config.generator_url);

    let (event_tx, event_rx) = flume::unbounded();
    let api = Arc::new(ApiService::new(&config)?);
    let media = open_media(&config, api.clone(), event_tx.clone());

    let mut app = App::new(config, media, api, (event_tx, event_rx));
    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    set_panic_hook();
    initialize_logging()
}

fn open_media(
    config: &Config,
    api: Arc<ApiService>,
    event_tx: Sender<Event>,
) -> Box<dyn MediaElement> {
    if config.mute {
        info!("Audio muted, using silent playback");
        return Box::new(SilentMedia::new(event_tx));
    }

    match RodioMedia::new(api, event_tx.clone()) {
        Ok(media) => Box::new(media),
        Err(e) => {
            warn!("No audio output ({e}), using silent playback");
            Box::new(SilentMedia::new(event_tx))
        }
    }
}
