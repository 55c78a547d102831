use std::fmt;

use super::theme::HOME_ID;
use crate::util::colors::Rgb;

/// A diagonal two-stop gradient, the only kind of background a mood page has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub angle: u16,
    pub start: Rgb,
    pub end: Rgb,
}

impl Gradient {
    pub const fn diagonal(start: Rgb, end: Rgb) -> Self {
        Self {
            angle: 135,
            start,
            end,
        }
    }

    /// Color at a relative position, `x` and `y` in `0.0..=1.0` from the top-left.
    pub fn at(&self, x: f32, y: f32) -> Rgb {
        let t = match self.angle {
            90 => x,
            180 => y,
            _ => (x + y) / 2.0,
        };
        self.start.lerp(self.end, t)
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({}deg, {} 0%, {} 100%)",
            self.angle, self.start, self.end
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodOrigin {
    BuiltIn,
    Generated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoodDefinition {
    pub title: String,
    pub subtitle: String,
    pub accent: Rgb,
    pub background: Gradient,
    pub emoji: String,
    pub theme_class: String,
    pub origin: MoodOrigin,
}

impl MoodDefinition {
    /// The part of the title before the em dash, as shown on cards and in the menu.
    pub fn short_title(&self) -> &str {
        self.title
            .split('—')
            .next()
            .map(str::trim)
            .unwrap_or(&self.title)
    }

    pub fn is_generated(&self) -> bool {
        self.origin == MoodOrigin::Generated
    }
}

struct BuiltIn {
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    accent: u32,
    start: u32,
    end: u32,
    emoji: &'static str,
}

const BUILT_INS: [BuiltIn; 4] = [
    BuiltIn {
        id: "happy",
        title: "Happy — Vibrant Beats",
        subtitle: "Feel-good tracks with a deep groove",
        accent: 0xFFB347,
        start: 0xFFF8E1,
        end: 0xFFE0B2,
        emoji: "😄",
    },
    BuiltIn {
        id: "joyful",
        title: "Joyful — Energetic Beats",
        subtitle: "High-energy songs — perfect for smiles and movement",
        accent: 0xFF4081,
        start: 0xFFF0F6,
        end: 0xFF80AB,
        emoji: "🥳",
    },
    BuiltIn {
        id: "sad",
        title: "Sad — Melancholy",
        subtitle: "Slow, emotional tracks to reflect",
        accent: 0x2196F3,
        start: 0xE3F2FD,
        end: 0x90CAF9,
        emoji: "😢",
    },
    BuiltIn {
        id: "depression",
        title: "Depression — Ambient & Soothing",
        subtitle: "Ambient textures and slow soundscapes",
        accent: 0x5E3370,
        start: 0x1A1A1A,
        end: 0x000000,
        emoji: "😔",
    },
];

/// Ordered mood lookup. Insertion order is display order; overriding an id
/// keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct MoodRegistry {
    entries: Vec<(String, MoodDefinition)>,
}

impl MoodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for b in &BUILT_INS {
            registry.insert(
                b.id,
                MoodDefinition {
                    title: b.title.to_string(),
                    subtitle: b.subtitle.to_string(),
                    accent: Rgb::from_u32(b.accent),
                    background: Gradient::diagonal(Rgb::from_u32(b.start), Rgb::from_u32(b.end)),
                    emoji: b.emoji.to_string(),
                    theme_class: format!("{}-active", b.id),
                    origin: MoodOrigin::BuiltIn,
                },
            );
        }
        registry
    }

    /// Inserts or overrides `id`, returning the replaced definition.
    pub fn insert(&mut self, id: impl Into<String>, def: MoodDefinition) -> Option<MoodDefinition> {
        let id = id.into();
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => Some(std::mem::replace(existing, def)),
            None => {
                self.entries.push((id, def));
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&MoodDefinition> {
        self.entries
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, def)| def)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MoodDefinition)> {
        self.entries.iter().map(|(id, def)| (id.as_str(), def))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const FALLBACK_SLUG: &str = "custom-mood";
/// Taken by a mood whose name slugs to the home page id.
pub const HOME_MOOD_SLUG: &str = "home-mood";

/// Lowercases `name` and collapses every run of non-alphanumeric characters
/// into one `-`, without leading or trailing separators. Never returns a page
/// id that is not a mood.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }

    match slug.as_str() {
        "" => FALLBACK_SLUG.to_string(),
        HOME_ID => HOME_MOOD_SLUG.to_string(),
        _ => slug,
    }
}
