use super::catalog::Track;

/// Favorited tracks in the order they were liked, unique by audio source.
#[derive(Debug, Clone, Default)]
pub struct LikedSongs {
    tracks: Vec<Track>,
}

impl LikedSongs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, track: &Track) -> bool {
        self.tracks.iter().any(|liked| liked.same_source(track))
    }

    /// Unlikes `track` if present, otherwise appends a copy tagged with where it
    /// was liked from. Context already on the track wins over `context`.
    /// Returns whether the track is liked afterwards.
    pub fn toggle(&mut self, track: &Track, context: Option<(&str, usize)>) -> bool {
        if self.contains(track) {
            self.tracks.retain(|liked| !liked.same_source(track));
            return false;
        }

        let mut liked = track.clone();
        if let Some((mood, index)) = context {
            if liked.origin_mood.is_none() {
                liked.origin_mood = Some(mood.to_string());
            }
            if liked.origin_index.is_none() {
                liked.origin_index = Some(index);
            }
        }
        self.tracks.push(liked);
        true
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
