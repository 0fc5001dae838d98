//! Overflow page indicator view.
//!
//! Draws one dot per page, or a tapered sliding window of dots once the page
//! count exceeds `max_visible`. Page count and selection are read from
//! closures, so any signal the closures touch drives the indicator.

use std::rc::Rc;
use std::time::Instant;

use floem::action::exec_after;
use floem::kurbo::{Circle, Point, Rect, Stroke};
use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, PaintCx, UpdateCx},
    View, ViewId,
};
use floem_renderer::Renderer;
use tracing::warn;

use crate::animation::ScaleTweens;
use crate::config::IndicatorConfig;
use crate::constants;
use crate::renderer::IndicatorRenderer;

enum IndicatorUpdate {
    Count(usize),
    Selected(usize),
    Frame,
}

pub struct OverflowIndicator {
    id: ViewId,
    config: IndicatorConfig,
    renderer: IndicatorRenderer<ScaleTweens>,
    size: floem::taffy::prelude::Size<f32>,
    /// A frame tick is already scheduled.
    frame_pending: bool,
}

/// Creates a page indicator.
///
/// - `page_count`: number of pages; re-read whenever the signals it touches
///   change, rebuilding the dots if the count differs.
/// - `selected`: the page the list has settled on.
///
/// An out-of-range config is logged and used as given.
pub fn overflow_indicator(
    config: IndicatorConfig,
    page_count: impl Fn() -> usize + 'static,
    selected: impl Fn() -> usize + 'static,
) -> OverflowIndicator {
    if let Err(err) = config.validate() {
        warn!(%err, "overflow indicator configured outside the supported range");
    }

    let id = ViewId::new();
    let page_count: Rc<dyn Fn() -> usize> = Rc::new(page_count);

    let mut renderer = IndicatorRenderer::new(
        ScaleTweens::new(constants::SCALE_ANIMATION),
        config.max_visible,
    );
    renderer.on_attach(page_count());

    let count = page_count.clone();
    create_effect(move |_| {
        id.update_state(IndicatorUpdate::Count(count()));
    });

    create_effect(move |_| {
        id.update_state(IndicatorUpdate::Selected(selected()));
    });

    let sizing = config.clone();

    OverflowIndicator {
        id,
        config,
        renderer,
        size: Default::default(),
        frame_pending: false,
    }
    .style(move |s| {
        s.width(sizing.strip_width(page_count()) as f32)
            .height(sizing.dot_size as f32)
    })
}

impl OverflowIndicator {
    /// Keep a frame tick in flight while any dot is still tweening.
    fn schedule_frame(&mut self) {
        if self.frame_pending || !self.renderer.surface().is_animating(Instant::now()) {
            return;
        }
        self.frame_pending = true;
        let id = self.id;
        exec_after(constants::FRAME_INTERVAL, move |_| {
            id.update_state(IndicatorUpdate::Frame);
        });
    }
}

impl View for OverflowIndicator {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<IndicatorUpdate>() {
            match *update {
                IndicatorUpdate::Count(count) => {
                    if count != self.renderer.count() {
                        self.renderer.on_count_changed(count);
                        self.id.request_layout();
                    }
                }
                IndicatorUpdate::Selected(position) => {
                    let position = isize::try_from(position).unwrap_or(isize::MAX);
                    self.renderer.on_page_selected(position);
                }
                IndicatorUpdate::Frame => self.frame_pending = false,
            }
            self.schedule_frame();
            self.id.request_paint();
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }

        let now = Instant::now();
        let tweens = self.renderer.surface();
        let slot = self.config.slot_width();

        // Dots fading out give up their room gradually; center what is left.
        let start_x = self.config.strip_origin(w, tweens.occupied_slots(now));
        let cy = h / 2.0;

        for frame in tweens.frames(now) {
            if frame.scale <= 0.0 {
                continue;
            }
            let fill = self.config.fill_color.faded(frame.opacity).to_peniko();
            let stroke_color = self.config.stroke_color.faded(frame.opacity).to_peniko();

            let center = Point::new(start_x + frame.center * slot, cy);
            let radius = self.config.dot_size / 2.0 * frame.scale;
            cx.fill(&Circle::new(center, radius), fill, 0.0);

            // Stroke sits inside the dot's outline, scaled with it.
            let stroke_width = self.config.stroke_width * frame.scale;
            if stroke_width > 0.0 {
                let inset = Circle::new(center, (radius - stroke_width / 2.0).max(0.0));
                cx.stroke(&inset, stroke_color, &Stroke::new(stroke_width));
            }
        }
    }
}
