use super::registry::{Gradient, MoodRegistry};
use crate::util::colors::Rgb;

pub const HOME_ID: &str = "home";
pub const HOME_ACCENT: Rgb = Rgb::from_u32(0x60a5fa);
pub const HOME_BACKGROUND: Gradient =
    Gradient::diagonal(Rgb::from_u32(0x1d2b3c), Rgb::from_u32(0x0f1724));

pub const THEME_ACTIVE: &str = "theme-active";
pub const HOME_ACTIVE: &str = "home-active";

const EMOTIVE_MOODS: [&str; 3] = ["happy", "joyful", "sad"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    /// Nothing entered yet; the landing hero is showing.
    #[default]
    Landing,
    Home,
    Mood(String),
}

impl Page {
    /// Parses a page id. `""` is the landing page and `"home"` the home page.
    pub fn from_id(id: &str) -> Self {
        match id {
            "" => Page::Landing,
            HOME_ID => Page::Home,
            mood => Page::Mood(mood.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Page::Landing => "",
            Page::Home => HOME_ID,
            Page::Mood(id) => id,
        }
    }

    pub fn mood_id(&self) -> Option<&str> {
        match self {
            Page::Mood(id) => Some(id),
            _ => None,
        }
    }
}

/// Everything the renderer needs to paint a page's theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeDescriptor {
    pub background: Gradient,
    pub accent: Rgb,
    pub markers: Vec<String>,
}

impl ThemeDescriptor {
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.iter().any(|m| m == marker)
    }

    /// Foreground that stays readable over the middle of the background.
    pub fn foreground(&self) -> Rgb {
        if self.background.at(0.5, 0.5).is_light() {
            Rgb::from_u32(0x1a1a1a)
        } else {
            Rgb::from_u32(0xf5f5f5)
        }
    }
}

/// Derives the theme for `page`. Anything that is not a registered mood gets
/// the home theme.
pub fn compute_theme(page: &Page, registry: &MoodRegistry) -> ThemeDescriptor {
    let resolved = page
        .mood_id()
        .and_then(|id| registry.get(id).map(|def| (id, def)));

    match resolved {
        Some((id, def)) => {
            let mut markers = vec![format!("{id}-active")];
            if !markers.contains(&def.theme_class) {
                markers.push(def.theme_class.clone());
            }
            if EMOTIVE_MOODS.contains(&id) || def.is_generated() {
                markers.push(THEME_ACTIVE.to_string());
            }
            ThemeDescriptor {
                background: def.background,
                accent: def.accent,
                markers,
            }
        }
        None => ThemeDescriptor {
            background: HOME_BACKGROUND,
            accent: HOME_ACCENT,
            markers: vec![HOME_ACTIVE.to_string()],
        },
    }
}
