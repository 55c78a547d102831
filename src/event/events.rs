use uuid::Uuid;

use crate::{
    audio::error::AudioError,
    mood::{GeneratedMood, GeneratorError},
};

/// Everything background tasks report to the UI loop.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    // Media element
    MediaStarted,
    MediaPaused,
    MediaEnded,
    MediaFailed(AudioError),

    // Generator
    MoodGenerated {
        submission: Uuid,
        outcome: Result<GeneratedMood, GeneratorError>,
    },
}
