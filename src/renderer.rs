//! Applies computed tiers to a row of dots.
//!
//! [`IndicatorRenderer`] owns the dot handles and the selection history. It
//! is host-agnostic: page counts come from a [`PageSource`], and dots live on
//! a [`DotSurface`] that knows how to show, hide and animate them.

use tracing::{debug, trace};

use crate::error::SourceError;
use crate::tier::ScaleTier;
use crate::window::{self, Mode};

/// Where the page count comes from.
///
/// Subscribing registers for change notifications; the host then calls
/// [`IndicatorRenderer::sync`] when one arrives.
pub trait PageSource {
    fn page_count(&self) -> usize;

    fn subscribe(&mut self) -> Result<(), SourceError> {
        Ok(())
    }

    /// Stop change notifications. May fail with [`SourceError::Detached`]
    /// if the source is already gone.
    fn unsubscribe(&mut self) -> Result<(), SourceError> {
        Ok(())
    }
}

/// The visual side of the dots.
///
/// `animate_scale` is fire-and-forget: a later call on the same dot
/// retargets whatever is in flight.
pub trait DotSurface {
    type Handle: Copy;

    /// Remove every dot.
    fn clear(&mut self);
    /// Append a visible dot resting at `initial_scale`.
    fn add_dot(&mut self, initial_scale: f64) -> Self::Handle;
    fn set_visible(&mut self, dot: Self::Handle, visible: bool);
    fn animate_scale(&mut self, dot: Self::Handle, target: f64);
}

#[derive(Debug, Clone, Copy)]
struct Dot<H> {
    handle: H,
    /// Last tier sent to the surface.
    tier: ScaleTier,
    visible: bool,
}

pub struct IndicatorRenderer<S: DotSurface> {
    surface: S,
    max_visible: usize,
    dots: Vec<Dot<S::Handle>>,
    count: usize,
    last_selected: Option<usize>,
}

impl<S: DotSurface> IndicatorRenderer<S> {
    pub fn new(surface: S, max_visible: usize) -> Self {
        Self {
            surface,
            max_visible,
            dots: Vec::new(),
            count: 0,
            last_selected: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Page count the dots were built for.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn mode(&self) -> Mode {
        Mode::for_counts(self.count, self.max_visible)
    }

    pub fn last_selected(&self) -> Option<usize> {
        self.last_selected
    }

    /// Tier currently applied to each dot, with hidden dots as
    /// [`ScaleTier::Gone`].
    pub fn tiers(&self) -> Vec<ScaleTier> {
        self.dots
            .iter()
            .map(|dot| if dot.visible { dot.tier } else { ScaleTier::Gone })
            .collect()
    }

    /// Subscribe to `source` and build dots for its current page count.
    pub fn attach<P: PageSource + ?Sized>(&mut self, source: &mut P) {
        if let Err(err) = source.subscribe() {
            debug!(%err, "page source refused change notifications");
        }
        self.on_attach(source.page_count());
    }

    /// Re-read the page count after a change notification.
    pub fn sync<P: PageSource + ?Sized>(&mut self, source: &P) {
        self.on_count_changed(source.page_count());
    }

    /// Unsubscribe from `source`. A source that is already gone is fine.
    pub fn detach<P: PageSource + ?Sized>(&mut self, source: &mut P) {
        if let Err(err) = source.unsubscribe() {
            debug!(%err, "ignoring unsubscribe failure on detach");
        }
    }

    /// Discard the dots and rebuild them for `count` pages, then select the
    /// first page.
    pub fn on_attach(&mut self, count: usize) {
        self.last_selected = None;
        self.count = count;
        self.surface.clear();
        self.dots.clear();

        // A single page needs no indicator.
        if count > 1 {
            let initial = match self.mode() {
                Mode::Simple => ScaleTier::Normal,
                Mode::Overflow => ScaleTier::Smallest,
            };
            self.dots.reserve(count);
            for _ in 0..count {
                let handle = self.surface.add_dot(initial.factor());
                self.dots.push(Dot {
                    handle,
                    tier: initial,
                    visible: true,
                });
            }
        }
        debug!(count, mode = ?self.mode(), "rebuilt indicator dots");

        self.on_page_selected(0);
    }

    /// Rebuild only if the page count actually changed.
    pub fn on_count_changed(&mut self, count: usize) {
        if count != self.count {
            self.on_attach(count);
        }
    }

    /// Move the selection to `position`.
    ///
    /// Positions outside `0..=count` and empty page sets are ignored.
    pub fn on_page_selected(&mut self, position: isize) {
        let Some(tiers) = window::compute(position, self.count, self.max_visible) else {
            trace!(position, count = self.count, "ignoring selection");
            return;
        };
        // compute() only accepts non-negative positions.
        let position = position.unsigned_abs();

        match self.mode() {
            Mode::Simple => {
                // Only the outgoing and incoming selection change.
                let previous = self.last_selected.filter(|&prev| prev != position);
                for index in previous.into_iter().chain([position]) {
                    if let Some(&tier) = tiers.get(index) {
                        self.apply(index, tier);
                    }
                }
            }
            Mode::Overflow => {
                for (index, tier) in tiers.into_iter().enumerate() {
                    self.apply(index, tier);
                }
            }
        }
        trace!(position, count = self.count, "selection applied");

        self.last_selected = Some(position);
    }

    fn apply(&mut self, index: usize, tier: ScaleTier) {
        let Some(dot) = self.dots.get_mut(index) else {
            return;
        };
        if !tier.is_visible() {
            if dot.visible {
                self.surface.set_visible(dot.handle, false);
                dot.visible = false;
            }
            return;
        }
        if !dot.visible {
            self.surface.set_visible(dot.handle, true);
            dot.visible = true;
        }
        if dot.tier != tier {
            self.surface.animate_scale(dot.handle, tier.factor());
            dot.tier = tier;
        }
    }
}
