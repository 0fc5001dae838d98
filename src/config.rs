//! Construction-time options for the indicator.

use crate::color::DotColor;
use crate::constants;
use crate::error::ConfigError;

/// Indicator options, passed straight through to the view.
///
/// Only `max_visible` influences which dots are shown; the rest is styling.
/// Lengths are logical pixels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct IndicatorConfig {
    pub max_visible: usize,
    pub dot_size: f64,
    pub dot_margin: f64,
    pub fill_color: DotColor,
    pub stroke_color: DotColor,
    pub stroke_width: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            max_visible: constants::DEFAULT_MAX_VISIBLE,
            dot_size: constants::DEFAULT_DOT_SIZE,
            dot_margin: constants::DEFAULT_DOT_MARGIN,
            fill_color: constants::DEFAULT_FILL_COLOR,
            stroke_color: constants::DEFAULT_STROKE_COLOR,
            stroke_width: constants::DEFAULT_STROKE_WIDTH,
        }
    }
}

impl IndicatorConfig {
    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        self.max_visible = max_visible;
        self
    }

    pub fn with_dot_size(mut self, dot_size: f64) -> Self {
        self.dot_size = dot_size;
        self
    }

    pub fn with_dot_margin(mut self, dot_margin: f64) -> Self {
        self.dot_margin = dot_margin;
        self
    }

    pub fn with_fill_color(mut self, color: DotColor) -> Self {
        self.fill_color = color;
        self
    }

    pub fn with_stroke_color(mut self, color: DotColor) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Width of one dot slot including its margins.
    pub fn slot_width(&self) -> f64 {
        self.dot_size + 2.0 * self.dot_margin
    }

    /// Width of the strip for `count` pages: one slot per page, capped at
    /// the visible budget.
    pub fn strip_width(&self, count: usize) -> f64 {
        count.min(self.max_visible) as f64 * self.slot_width()
    }

    /// Left edge of the occupied dots when `occupied_slots` worth of dots is
    /// centered in a view `width` wide.
    pub fn strip_origin(&self, width: f64, occupied_slots: f64) -> f64 {
        (width - occupied_slots * self.slot_width()) / 2.0
    }

    /// Check the options against what the indicator supports.
    ///
    /// An invalid config is still usable; the tier computation never panics,
    /// but below [`MIN_MAX_VISIBLE`](constants::MIN_MAX_VISIBLE) dots the
    /// window layout is not meaningful.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_visible < constants::MIN_MAX_VISIBLE {
            return Err(ConfigError::MaxVisibleTooSmall {
                max_visible: self.max_visible,
                min: constants::MIN_MAX_VISIBLE,
            });
        }
        for (name, value) in [
            ("dot_size", self.dot_size),
            ("dot_margin", self.dot_margin),
            ("stroke_width", self.stroke_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        if self.dot_size == 0.0 {
            return Err(ConfigError::InvalidDimension {
                name: "dot_size",
                value: self.dot_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = IndicatorConfig::default();
        assert_eq!(config.max_visible, 9);
        assert_eq!(config.slot_width(), 16.0);
        assert_eq!(config.fill_color.to_hex(), "#FFFFFF");
        assert_eq!(config.stroke_color.to_hex(), "#000000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_strip_width_caps_at_budget() {
        let config = IndicatorConfig::default();
        assert_eq!(config.strip_width(0), 0.0);
        assert_eq!(config.strip_width(3), 48.0);
        assert_eq!(config.strip_width(9), 144.0);
        assert_eq!(config.strip_width(20), 144.0);
    }

    #[test]
    fn test_strip_origin_centers_occupied_dots() {
        let config = IndicatorConfig::default();
        // Simple mode fills the strip exactly.
        assert_eq!(config.strip_origin(config.strip_width(3), 3.0), 0.0);
        // Overflow with one dot half faded out leaves half a slot each side.
        let width = config.strip_width(20);
        assert_eq!(config.strip_origin(width, 8.5), 4.0);
        assert_eq!(config.strip_origin(width, 9.0), 0.0);
    }

    #[test]
    fn test_small_budget_is_reported() {
        let config = IndicatorConfig::default().with_max_visible(4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MaxVisibleTooSmall {
                max_visible: 4,
                min: 5
            })
        );
        assert!(config.with_max_visible(5).validate().is_ok());
    }

    #[test]
    fn test_bad_dimensions_are_reported() {
        let config = IndicatorConfig::default().with_dot_size(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimension { name: "dot_size", .. })
        ));

        let config = IndicatorConfig::default().with_dot_margin(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimension { name: "dot_margin", .. })
        ));

        let config = IndicatorConfig::default().with_stroke_width(f64::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimension { name: "stroke_width", .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_toml() {
        let config: IndicatorConfig = toml::from_str(
            r##"
            max_visible = 7
            fill_color = "#80FF0000"
            stroke_color = "navy"
            "##,
        )
        .unwrap();
        assert_eq!(config.max_visible, 7);
        assert_eq!(config.fill_color.to_argb(), (0x80, 0xFF, 0, 0));
        assert_eq!(config.stroke_color.to_hex(), "#000080");
        assert_eq!(config.dot_size, constants::DEFAULT_DOT_SIZE);
        assert_eq!(config.stroke_width, constants::DEFAULT_STROKE_WIDTH);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_bad_color() {
        let result: Result<IndicatorConfig, _> = toml::from_str(r#"fill_color = "mauve-ish""#);
        assert!(result.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_writes_hex_colors() {
        let text = toml::to_string(&IndicatorConfig::default()).unwrap();
        assert!(text.contains(r##"fill_color = "#FFFFFF""##));
        assert!(text.contains("max_visible = 9"));
    }
}
