//! Per-dot tweens.
//!
//! Each dot carries two eased channels: its scale, and its presence in the
//! strip. Presence runs from 0.0 (gone, takes no room) to 1.0 (a full slot)
//! and doubles as opacity, so a dot that is hidden fades out while the dots
//! after it slide into the space it gives up.
//!
//! Retargeting a channel mid-flight starts the new tween from wherever the
//! old one had got to, so the most recent target always wins and there is
//! nothing to cancel.

use std::f64::consts::PI;
use std::time::{Duration, Instant};

use crate::renderer::DotSurface;

#[derive(Debug, Clone, Copy)]
struct Channel {
    from: f64,
    to: f64,
    started: Option<Instant>,
}

impl Channel {
    fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            started: None,
        }
    }

    fn progress(&self, now: Instant, duration: Duration) -> f64 {
        match self.started {
            Some(t0) if !duration.is_zero() => {
                let elapsed = now.saturating_duration_since(t0).as_secs_f64();
                (elapsed / duration.as_secs_f64()).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    fn value(&self, now: Instant, duration: Duration) -> f64 {
        let t = self.progress(now, duration);
        // Accelerate, then decelerate.
        let eased = (1.0 - (PI * t).cos()) / 2.0;
        self.from + (self.to - self.from) * eased
    }

    fn retarget(&mut self, target: f64, now: Instant, duration: Duration) {
        if self.to == target {
            return;
        }
        self.from = self.value(now, duration);
        self.to = target;
        self.started = Some(now);
    }

    fn is_moving(&self, now: Instant, duration: Duration) -> bool {
        self.from != self.to && self.progress(now, duration) < 1.0
    }
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    scale: Channel,
    presence: Channel,
    visible: bool,
}

/// Where and how to draw one dot at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotFrame {
    pub index: usize,
    /// Dot center, in slots from the left edge of the occupied strip.
    pub center: f64,
    pub scale: f64,
    pub opacity: f64,
}

/// Tweens for a row of dots, addressed by index.
#[derive(Debug, Clone)]
pub struct ScaleTweens {
    dots: Vec<Tween>,
    duration: Duration,
}

impl ScaleTweens {
    pub fn new(duration: Duration) -> Self {
        Self {
            dots: Vec::new(),
            duration,
        }
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Add a visible dot resting at `scale`; returns its index.
    pub fn push(&mut self, scale: f64) -> usize {
        self.dots.push(Tween {
            scale: Channel::settled(scale),
            presence: Channel::settled(1.0),
            visible: true,
        });
        self.dots.len() - 1
    }

    /// Start moving dot `index` toward `target` as of `now`.
    ///
    /// Unknown indices are ignored.
    pub fn retarget(&mut self, index: usize, target: f64, now: Instant) {
        let duration = self.duration;
        if let Some(tween) = self.dots.get_mut(index) {
            tween.scale.retarget(target, now, duration);
        }
    }

    /// Start fading dot `index` in or out as of `now`.
    pub fn set_visible_at(&mut self, index: usize, visible: bool, now: Instant) {
        let duration = self.duration;
        if let Some(tween) = self.dots.get_mut(index) {
            tween.visible = visible;
            let target = if visible { 1.0 } else { 0.0 };
            tween.presence.retarget(target, now, duration);
        }
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.dots.get(index).is_some_and(|t| t.visible)
    }

    /// Current scale of dot `index`, or 0.0 for an unknown index.
    pub fn scale_at(&self, index: usize, now: Instant) -> f64 {
        self.dots
            .get(index)
            .map_or(0.0, |t| t.scale.value(now, self.duration))
    }

    /// Current presence of dot `index`, or 0.0 for an unknown index.
    pub fn presence_at(&self, index: usize, now: Instant) -> f64 {
        self.dots
            .get(index)
            .map_or(0.0, |t| t.presence.value(now, self.duration))
    }

    pub fn visible_count(&self) -> usize {
        self.dots.iter().filter(|t| t.visible).count()
    }

    /// Width the dots take up at `now`, in slots. Fractional while a dot
    /// fades in or out.
    pub fn occupied_slots(&self, now: Instant) -> f64 {
        self.dots
            .iter()
            .map(|t| t.presence.value(now, self.duration))
            .sum()
    }

    /// Every dot with any presence at `now`, laid out left to right.
    pub fn frames(&self, now: Instant) -> Vec<DotFrame> {
        let mut frames = Vec::new();
        let mut offset = 0.0;
        for (index, tween) in self.dots.iter().enumerate() {
            let presence = tween.presence.value(now, self.duration);
            if presence <= 0.0 {
                continue;
            }
            frames.push(DotFrame {
                index,
                center: offset + presence / 2.0,
                scale: tween.scale.value(now, self.duration),
                opacity: presence,
            });
            offset += presence;
        }
        frames
    }

    /// Whether anything on screen is still moving at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.dots.iter().any(|t| {
            t.presence.is_moving(now, self.duration)
                || (t.visible && t.scale.is_moving(now, self.duration))
        })
    }
}

impl DotSurface for ScaleTweens {
    type Handle = usize;

    fn clear(&mut self) {
        self.dots.clear();
    }

    fn add_dot(&mut self, initial_scale: f64) -> usize {
        self.push(initial_scale)
    }

    fn set_visible(&mut self, dot: usize, visible: bool) {
        self.set_visible_at(dot, visible, Instant::now());
    }

    fn animate_scale(&mut self, dot: usize, target: f64) {
        self.retarget(dot, target, Instant::now());
    }
}
