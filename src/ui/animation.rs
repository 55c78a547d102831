//! A small tween scheduler. Screens name what they animate with their own
//! target keys and sample the timeline while rendering; nothing here knows about
//! widgets.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    /// Cubic ease-in.
    Power2In,
    /// Quartic ease-in.
    Power3In,
    /// Quartic ease-out.
    Power3Out,
    /// Overshoots past the end by an amount controlled by the parameter.
    BackOut(f32),
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2In => t.powi(3),
            Ease::Power3In => t.powi(4),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub ease: Ease,
    start: Duration,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            ease: Ease::Linear,
            start: Duration::ZERO,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn start(&self) -> Duration {
        self.start
    }

    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    pub fn sample(&self, at: Duration) -> f32 {
        if at <= self.start {
            return self.from;
        }
        if self.duration.is_zero() || at >= self.end() {
            return self.to;
        }
        let t = (at - self.start).as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.ease.apply(t)
    }
}

/// Tweens placed on a shared clock. Builders place each tween relative to the
/// end of the previous placement, like a sequenced timeline.
#[derive(Debug, Clone)]
pub struct Timeline<K> {
    tweens: Vec<(K, Tween)>,
    cursor: Duration,
    elapsed: Duration,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self {
            tweens: Vec::new(),
            cursor: Duration::ZERO,
            elapsed: Duration::ZERO,
        }
    }
}

impl<K: Copy + PartialEq> Timeline<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `tween` after everything placed so far.
    pub fn then(self, target: K, tween: Tween) -> Self {
        let at = self.cursor;
        self.at(target, tween, at)
    }

    /// Places `tween` so it starts `overlap` before the previous placement ends.
    pub fn overlap(self, target: K, tween: Tween, overlap: Duration) -> Self {
        let at = self.cursor.saturating_sub(overlap);
        self.at(target, tween, at)
    }

    /// Places `tween` at an absolute offset.
    pub fn at(mut self, target: K, mut tween: Tween, start: Duration) -> Self {
        tween.start = start;
        self.cursor = tween.end();
        self.tweens.push((target, tween));
        self
    }

    /// Places one copy of `tween` per target, each starting `each` after the
    /// previous one, beginning `overlap` before the previous placement ends.
    pub fn stagger<I>(mut self, targets: I, tween: Tween, each: Duration, overlap: Duration) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let base = self.cursor.saturating_sub(overlap);
        let mut group_end = base;
        for (i, target) in targets.into_iter().enumerate() {
            let mut t = tween.clone();
            t.start = base + each * i as u32;
            group_end = group_end.max(t.end());
            self.tweens.push((target, t));
        }
        self.cursor = group_end;
        self
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration());
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn duration(&self) -> Duration {
        self.tweens
            .iter()
            .map(|(_, t)| t.end())
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration()
    }

    /// Current value of `target`: the latest tween that has started, or the
    /// starting value of the first one if none has.
    pub fn value(&self, target: K) -> Option<f32> {
        let mut first: Option<&Tween> = None;
        let mut active: Option<&Tween> = None;

        for (key, tween) in &self.tweens {
            if *key != target {
                continue;
            }
            if first.is_none_or(|f| tween.start < f.start) {
                first = Some(tween);
            }
            if tween.start <= self.elapsed && active.is_none_or(|a| tween.start >= a.start) {
                active = Some(tween);
            }
        }

        active.or(first).map(|t| t.sample(self.elapsed))
    }

    pub fn value_or(&self, target: K, default: f32) -> f32 {
        self.value(target).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Target {
        A,
        B,
        Card(usize),
    }

    #[test]
    fn eases_hit_endpoints() {
        for ease in [
            Ease::Linear,
            Ease::Power2In,
            Ease::Power3In,
            Ease::Power3Out,
            Ease::BackOut(1.7),
        ] {
            assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?}");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?}");
        }
        assert!(Ease::BackOut(1.7).apply(0.7) > 1.0);
        assert!(Ease::Power2In.apply(0.5) < 0.5);
    }

    #[test]
    fn sample_before_during_after() {
        let tween = Tween::new(1.0, 0.0, ms(100));
        assert_eq!(tween.sample(Duration::ZERO), 1.0);
        assert!((tween.sample(ms(50)) - 0.5).abs() < 1e-6);
        assert_eq!(tween.sample(ms(500)), 0.0);
    }

    #[test]
    fn overlap_positions_relative_to_previous_end() {
        let timeline = Timeline::new()
            .then(Target::A, Tween::new(1.0, 0.0, ms(800)))
            .overlap(Target::B, Tween::new(1.0, 0.0, ms(600)), ms(600));

        assert_eq!(timeline.duration(), ms(800));
        let mut timeline = timeline;
        timeline.advance(ms(200));
        assert_eq!(timeline.value(Target::B), Some(1.0));
        timeline.advance(ms(300));
        assert!((timeline.value(Target::B).unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn stagger_spreads_starts() {
        let mut timeline = Timeline::new().stagger(
            (0..3).map(Target::Card),
            Tween::new(0.0, 1.0, ms(100)),
            ms(50),
            Duration::ZERO,
        );
        assert_eq!(timeline.duration(), ms(200));

        timeline.advance(ms(100));
        assert_eq!(timeline.value(Target::Card(0)), Some(1.0));
        assert!((timeline.value(Target::Card(1)).unwrap() - 0.5).abs() < 1e-6);
        assert_eq!(timeline.value(Target::Card(2)), Some(0.0));
        assert_eq!(timeline.value(Target::A), None);
    }

    #[test]
    fn advance_clamps_and_finishes() {
        let mut timeline = Timeline::new().then(Target::A, Tween::new(0.0, 1.0, ms(300)));
        assert!(!timeline.is_finished());
        timeline.advance(ms(1000));
        assert!(timeline.is_finished());
        assert_eq!(timeline.elapsed(), ms(300));
        assert_eq!(timeline.value_or(Target::A, 0.0), 1.0);
    }

    #[test]
    fn empty_timeline_is_finished() {
        assert!(Timeline::<Target>::new().is_finished());
    }
}
