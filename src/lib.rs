//! # floem-overflow-indicator
//!
//! A page indicator for [Floem](https://github.com/lapce/floem): a row of
//! dots tracking the selected page of a paged list.
//!
//! Up to `max_visible` pages every page gets a dot and the selected one is
//! drawn larger. Past that, the row becomes a fixed-width window that slides
//! with the selection, with dots shrinking toward both edges so it reads as
//! a longer strip scrolling behind the visible part.
//!
//! The tier computation ([`compute`]) and the dot bookkeeping
//! ([`IndicatorRenderer`]) do not depend on Floem and can drive any host
//! through [`PageSource`] and [`DotSurface`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem::reactive::SignalGet;
//! use floem_overflow_indicator::{overflow_indicator, IndicatorConfig};
//!
//! let pages = RwSignal::new(20_usize);
//! let current = RwSignal::new(0_usize);
//! let _indicator = overflow_indicator(
//!     IndicatorConfig::default(),
//!     move || pages.get(),
//!     move || current.get(),
//! );
//! // Place the indicator in your Floem view tree and set `current` as the
//! // list settles on a page.
//! ```

mod animation;
mod color;
mod config;
mod constants;
mod error;
#[cfg(feature = "view")]
mod indicator;
mod renderer;
mod tier;
mod window;

pub use animation::{DotFrame, ScaleTweens};
pub use color::DotColor;
pub use config::IndicatorConfig;
pub use constants::{MIN_MAX_VISIBLE, SCALE_ANIMATION};
pub use error::{ConfigError, SourceError};
#[cfg(feature = "view")]
pub use indicator::{overflow_indicator, OverflowIndicator};
pub use renderer::{DotSurface, IndicatorRenderer, PageSource};
pub use tier::ScaleTier;
pub use window::{compute, Mode};
