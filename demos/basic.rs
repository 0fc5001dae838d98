//! Standalone demo: a page counter with prev/next buttons driving the indicator.
//!
//! Run with `RUST_LOG=floem_overflow_indicator=trace` to see selection updates.

use floem::prelude::*;
use floem::reactive::{SignalGet, SignalUpdate};
use floem::window::WindowConfig;
use floem_overflow_indicator::{overflow_indicator, DotColor, IndicatorConfig};
use tracing_subscriber::EnvFilter;

fn demo_button(text: &'static str, on_click: impl Fn() + 'static) -> impl IntoView {
    label(move || text)
        .style(|s| {
            s.padding_horiz(8.0)
                .padding_vert(4.0)
                .border(1.0)
                .border_radius(4.0)
                .cursor(floem::style::CursorStyle::Pointer)
        })
        .on_click_stop(move |_| on_click())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pages = RwSignal::new(20_usize);
    let current = RwSignal::new(0_usize);

    let config = IndicatorConfig::default()
        .with_fill_color(DotColor::from_rgb(59, 130, 246))
        .with_stroke_color(DotColor::WHITE)
        .with_stroke_width(1.5);

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    label(move || format!("page {} of {}", current.get() + 1, pages.get())),
                    overflow_indicator(config.clone(), move || pages.get(), move || current.get()),
                    h_stack((
                        demo_button("prev", move || {
                            current.update(|p| *p = p.saturating_sub(1));
                        }),
                        demo_button("next", move || {
                            let last = pages.get_untracked().saturating_sub(1);
                            current.update(|p| *p = (*p + 1).min(last));
                        }),
                        demo_button("fewer pages", move || {
                            pages.update(|n| *n = n.saturating_sub(5).max(1));
                            current.set(0);
                        }),
                        demo_button("more pages", move || {
                            pages.update(|n| *n += 5);
                            current.set(0);
                        }),
                    ))
                    .style(|s| s.gap(8.0)),
                ))
                .style(|s| s.gap(16.0).padding(24.0).items_center().size_full())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 160.0))
                    .title("floem-overflow-indicator"),
            ),
        )
        .run();
}
