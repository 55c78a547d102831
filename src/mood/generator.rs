use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    catalog::{Track, generated_tracks},
    registry::{Gradient, MoodDefinition, MoodOrigin},
};
use crate::util::colors::Rgb;

pub const GENERATED_THEME_CLASS: &str = "custom-theme-active";
pub const GENERATED_TITLE_SUFFIX: &str = "— AI Generated";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("Generator request failed: {0}")]
    Request(String),

    #[error("Generator timed out")]
    Timeout,

    #[error("Generator returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Generator returned a malformed mood: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodRequest {
    pub name: String,
    pub emoji: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    #[serde(alias = "accent")]
    pub accent_color: String,
    #[serde(alias = "start")]
    pub gradient_start: String,
    #[serde(alias = "end")]
    pub gradient_end: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedSong {
    pub title: String,
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedMood {
    pub title: String,
    pub subtitle: String,
    pub theme: ThemeColors,
    pub playlist: Vec<GeneratedSong>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Wrapped { result: GeneratedMood },
    Bare(GeneratedMood),
}

impl GeneratedMood {
    /// Parses either the bare output object or one wrapped as `{"result": ...}`.
    pub fn from_json(body: &str) -> Result<Self, GeneratorError> {
        match serde_json::from_str::<Envelope>(body) {
            Ok(Envelope::Wrapped { result }) | Ok(Envelope::Bare(result)) => Ok(result),
            Err(e) => Err(GeneratorError::Malformed(e.to_string())),
        }
    }

    /// Builds the registry entry and playlist for mood `id`.
    pub fn into_mood(
        self,
        id: &str,
        emoji: &str,
    ) -> Result<(MoodDefinition, Vec<Track>), GeneratorError> {
        let color = |value: &str| {
            value
                .parse::<Rgb>()
                .map_err(|e| GeneratorError::Malformed(e.to_string()))
        };
        let accent = color(&self.theme.accent_color)?;
        let start = color(&self.theme.gradient_start)?;
        let end = color(&self.theme.gradient_end)?;

        if self.playlist.is_empty() {
            return Err(GeneratorError::Malformed("empty playlist".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(GeneratorError::Malformed("empty title".to_string()));
        }

        let tracks = generated_tracks(
            id,
            self.playlist
                .iter()
                .map(|song| (song.title.as_str(), song.artist.as_str())),
        );

        let definition = MoodDefinition {
            title: format!("{} {}", self.title.trim(), GENERATED_TITLE_SUFFIX),
            subtitle: self.subtitle,
            accent,
            background: Gradient::diagonal(start, end),
            emoji: emoji.to_string(),
            theme_class: GENERATED_THEME_CLASS.to_string(),
            origin: MoodOrigin::Generated,
        };

        Ok((definition, tracks))
    }
}

/// The external capability that turns a name/emoji/description into a mood.
#[async_trait]
pub trait MoodGenerator: Send + Sync {
    async fn generate(&self, request: &MoodRequest) -> Result<GeneratedMood, GeneratorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r##"{
        "title": "Cosmic Jazz",
        "subtitle": "Late night grooves among the stars",
        "theme": { "accentColor": "#7C4DFF", "gradientStart": "#0B0B2B", "gradientEnd": "#1A237E" },
        "playlist": [
            { "title": "Nebula Walk", "artist": "Orbit Trio" },
            { "title": "Saturn Swing", "artist": "Ring Quartet" },
            { "title": "Lunar Blue", "artist": "Apollo Keys" }
        ]
    }"##;

    #[test]
    fn parses_bare_and_wrapped() {
        let bare = GeneratedMood::from_json(BODY).unwrap();
        let wrapped = GeneratedMood::from_json(&format!(r#"{{"result": {BODY}}}"#)).unwrap();

        assert_eq!(bare, wrapped);
        assert_eq!(bare.playlist.len(), 3);
        assert_eq!(bare.theme.accent_color, "#7C4DFF");
    }

    #[test]
    fn accepts_short_theme_keys() {
        let body = r##"{"title":"T","subtitle":"S","theme":{"accent":"#111111","start":"#222222","end":"#333333"},"playlist":[{"title":"a","artist":"b"}]}"##;
        let mood = GeneratedMood::from_json(body).unwrap();
        assert_eq!(mood.theme.gradient_end, "#333333");
    }

    #[test]
    fn missing_fields_are_malformed() {
        let err = GeneratedMood::from_json(r#"{"title":"only"}"#).unwrap_err();
        assert!(matches!(err, GeneratorError::Malformed(_)));
    }

    #[test]
    fn into_mood_builds_definition_and_tracks() {
        let (def, tracks) = GeneratedMood::from_json(BODY)
            .unwrap()
            .into_mood("cosmic-jazz", "🎷")
            .unwrap();

        assert_eq!(def.title, "Cosmic Jazz — AI Generated");
        assert_eq!(def.short_title(), "Cosmic Jazz");
        assert_eq!(def.emoji, "🎷");
        assert_eq!(def.theme_class, GENERATED_THEME_CLASS);
        assert!(def.is_generated());
        assert_eq!(
            def.background.to_string(),
            "linear-gradient(135deg, #0B0B2B 0%, #1A237E 100%)"
        );
        assert_eq!(tracks.len(), 3);
        assert_eq!(tracks[2].title, "Lunar Blue");
    }

    #[test]
    fn bad_colors_and_empty_playlists_are_rejected() {
        let mut mood = GeneratedMood::from_json(BODY).unwrap();
        mood.theme.accent_color = "purple".to_string();
        assert!(matches!(
            mood.into_mood("x", "🎷"),
            Err(GeneratorError::Malformed(_))
        ));

        let mut mood = GeneratedMood::from_json(BODY).unwrap();
        mood.theme.gradient_start = "#+12345".to_string();
        assert!(matches!(
            mood.into_mood("x", "🎷"),
            Err(GeneratorError::Malformed(_))
        ));

        let mut mood = GeneratedMood::from_json(BODY).unwrap();
        mood.playlist.clear();
        assert_eq!(
            mood.into_mood("x", "🎷"),
            Err(GeneratorError::Malformed("empty playlist".to_string()))
        );
    }
}
