use std::collections::HashMap;

const SAMPLE_TITLES: [&str; 10] = [
    "Sunny Days",
    "Golden Hour",
    "Sparkle",
    "Warm Breeze",
    "Lemonade",
    "Candy Skies",
    "Bloom",
    "Brightside",
    "Hummingbird",
    "Radiant",
];

const SAMPLE_ARTISTS: [&str; 10] = [
    "MoodyO Mix",
    "Acoustic",
    "Indie Pop",
    "Lo-Fi",
    "Electro Pop",
    "Indie",
    "Bedroom Pop",
    "Folk",
    "Chillhop",
    "Dance",
];

const SAMPLE_BASES: [(&str, usize); 4] = [("happy", 0), ("joyful", 4), ("sad", 8), ("depression", 12)];

pub fn sample_audio_url(n: usize) -> String {
    format!(
        "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-{}.mp3",
        n % 16 + 1
    )
}

pub fn cover_url(seed: &str) -> String {
    format!("https://picsum.photos/seed/{seed}/600/600")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub src: String,
    pub cover: String,
    pub origin_mood: Option<String>,
    pub origin_index: Option<usize>,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        src: impl Into<String>,
        cover: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            src: src.into(),
            cover: cover.into(),
            origin_mood: None,
            origin_index: None,
        }
    }

    pub fn with_origin(mut self, mood: impl Into<String>, index: usize) -> Self {
        self.origin_mood = Some(mood.into());
        self.origin_index = Some(index);
        self
    }

    /// Same song, compared by audio source the way the liked list does.
    pub fn same_source(&self, other: &Track) -> bool {
        self.src == other.src
    }
}

pub fn sample_tracks(base: usize) -> Vec<Track> {
    SAMPLE_TITLES
        .iter()
        .zip(SAMPLE_ARTISTS.iter())
        .enumerate()
        .map(|(i, (title, artist))| {
            Track::new(
                *title,
                *artist,
                sample_audio_url(base + i),
                cover_url(&format!("h{}", base + i)),
            )
        })
        .collect()
}

/// Maps generator songs onto placeholder media derived from the mood id and position.
pub fn generated_tracks<'a, I>(mood_id: &str, songs: I) -> Vec<Track>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    songs
        .into_iter()
        .enumerate()
        .map(|(i, (title, artist))| {
            Track::new(
                title,
                artist,
                sample_audio_url(1 + i),
                cover_url(&format!("{mood_id}{i}")),
            )
        })
        .collect()
}

/// Mood id to ordered playlist. Playlists are never stored empty.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    playlists: HashMap<String, Vec<Track>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for (mood, base) in SAMPLE_BASES {
            catalog.insert(mood, sample_tracks(base));
        }
        catalog
    }

    /// Stores `tracks` under `mood`. An empty list removes the entry instead.
    pub fn insert(&mut self, mood: impl Into<String>, tracks: Vec<Track>) {
        let mood = mood.into();
        if tracks.is_empty() {
            self.playlists.remove(&mood);
        } else {
            self.playlists.insert(mood, tracks);
        }
    }

    pub fn playlist(&self, mood: &str) -> Option<&[Track]> {
        self.playlists.get(mood).map(Vec::as_slice)
    }

    pub fn len_of(&self, mood: &str) -> usize {
        self.playlists.get(mood).map_or(0, Vec::len)
    }

    pub fn track(&self, mood: &str, index: usize) -> Option<&Track> {
        self.playlists.get(mood).and_then(|tracks| tracks.get(index))
    }
}
