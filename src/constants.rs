//! Sizing, timing, and default styling constants for the indicator.

use std::time::Duration;

use crate::color::DotColor;

/// Default visible-dot budget before the strip starts to overflow
pub const DEFAULT_MAX_VISIBLE: usize = 9;

/// Smallest budget the windowing arithmetic supports
pub const MIN_MAX_VISIBLE: usize = 5;

/// Dot diameter at scale 1.0
pub const DEFAULT_DOT_SIZE: f64 = 12.0;

/// Horizontal margin on each side of a dot
pub const DEFAULT_DOT_MARGIN: f64 = 2.0;

/// Stroke width at scale 1.0
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

pub const DEFAULT_FILL_COLOR: DotColor = DotColor::WHITE;
pub const DEFAULT_STROKE_COLOR: DotColor = DotColor::BLACK;

/// Duration of a scale transition
pub const SCALE_ANIMATION: Duration = Duration::from_millis(300);

/// Repaint cadence while a transition is running
#[cfg(feature = "view")]
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);
