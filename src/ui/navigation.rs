use std::time::Duration;

use super::animation::{Ease, Timeline, Tween};
use crate::mood::Page;

pub const PAGE_FADE: Duration = Duration::from_millis(300);

pub const HOME_TITLE: &str = "How are you feeling today?";
pub const HOME_SUBTITLE: &str =
    "Tap a mood to explore curated songs and vibes. Each page has its own theme ✨";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeTarget {
    PageOpacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    TitleChar(usize),
    Subtitle,
    Card(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceTarget {
    ContentOpacity,
    ContentScale,
    HeroOpacity,
}

#[derive(Debug, Clone)]
struct PendingPage {
    target: Page,
    fade: Timeline<FadeTarget>,
}

/// The active page and the fade that swaps it. Only one fade exists at a time:
/// opening a page while another fade runs replaces that fade, starting from
/// wherever the opacity currently is.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    active: Page,
    pending: Option<PendingPage>,
    reveal: Option<Timeline<RevealTarget>>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &Page {
        &self.active
    }

    pub fn pending_target(&self) -> Option<&Page> {
        self.pending.as_ref().map(|p| &p.target)
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts a transition to `target`. When nothing is showing yet the swap is
    /// immediate and the new page is returned.
    pub fn open(&mut self, target: Page) -> Option<Page> {
        if self.active == Page::Landing && self.pending.is_none() {
            return Some(self.swap(target));
        }

        let from = self.opacity();
        self.reveal = None;
        self.pending = Some(PendingPage {
            target,
            fade: Timeline::new().then(
                FadeTarget::PageOpacity,
                Tween::new(from, 0.0, PAGE_FADE).ease(Ease::Power2In),
            ),
        });
        None
    }

    /// Moves the clock. Returns the page that became active, if a fade completed.
    pub fn advance(&mut self, dt: Duration) -> Option<Page> {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.advance(dt);
        }

        let pending = self.pending.as_mut()?;
        pending.fade.advance(dt);
        if !pending.fade.is_finished() {
            return None;
        }

        let target = self.pending.take()?.target;
        Some(self.swap(target))
    }

    fn swap(&mut self, target: Page) -> Page {
        self.active = target;
        self.reveal = None;
        self.active.clone()
    }

    pub fn set_reveal(&mut self, reveal: Timeline<RevealTarget>) {
        self.reveal = Some(reveal);
    }

    pub fn opacity(&self) -> f32 {
        match &self.pending {
            Some(p) => p.fade.value_or(FadeTarget::PageOpacity, 0.0),
            None => 1.0,
        }
    }

    /// Reveal progress of one element of the active page; 1.0 once settled.
    pub fn reveal(&self, target: RevealTarget) -> f32 {
        self.reveal
            .as_ref()
            .map_or(1.0, |r| r.value_or(target, 1.0))
    }
}

pub fn home_title_chars() -> usize {
    HOME_TITLE.chars().filter(|c| !c.is_whitespace()).count()
}

pub fn home_reveal(title_chars: usize, cards: usize) -> Timeline<RevealTarget> {
    Timeline::new()
        .stagger(
            (0..title_chars).map(RevealTarget::TitleChar),
            Tween::new(0.0, 1.0, Duration::from_millis(800)).ease(Ease::BackOut(1.7)),
            Duration::from_millis(30),
            Duration::ZERO,
        )
        .overlap(
            RevealTarget::Subtitle,
            Tween::new(0.0, 1.0, Duration::from_millis(600)).ease(Ease::Power3Out),
            Duration::from_millis(600),
        )
        .stagger(
            (0..cards).map(RevealTarget::Card),
            Tween::new(0.0, 1.0, Duration::from_millis(500)).ease(Ease::BackOut(1.4)),
            Duration::from_millis(150),
            Duration::from_millis(400),
        )
}

pub fn mood_reveal(cards: usize) -> Timeline<RevealTarget> {
    Timeline::new().stagger(
        (0..cards).map(RevealTarget::Card),
        Tween::new(0.0, 1.0, Duration::from_millis(500)).ease(Ease::BackOut(1.4)),
        Duration::from_millis(80),
        Duration::ZERO,
    )
}

/// Hero content shrinks and fades while the hero itself fades out, slightly later.
pub fn entrance_timeline() -> Timeline<EntranceTarget> {
    let content = Duration::from_millis(800);
    Timeline::new()
        .at(
            EntranceTarget::ContentOpacity,
            Tween::new(1.0, 0.0, content).ease(Ease::Power3In),
            Duration::ZERO,
        )
        .at(
            EntranceTarget::ContentScale,
            Tween::new(1.0, 0.8, content).ease(Ease::Power3In),
            Duration::ZERO,
        )
        .overlap(
            EntranceTarget::HeroOpacity,
            Tween::new(1.0, 0.0, Duration::from_millis(600)).ease(Ease::Power3In),
            Duration::from_millis(600),
        )
}
