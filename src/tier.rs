//! Discrete dot sizes.

/// Visual scale level of a single dot.
///
/// Variants are ordered from hidden to fully emphasized, but only
/// [`ScaleTier::factor`] is meaningful to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScaleTier {
    /// Hidden; takes no space in the strip.
    Gone,
    Smallest,
    Small,
    Normal,
    Selected,
}

impl ScaleTier {
    /// Scale factor applied to the dot diameter.
    pub fn factor(self) -> f64 {
        match self {
            ScaleTier::Gone => 0.0,
            ScaleTier::Smallest => 0.2,
            ScaleTier::Small => 0.4,
            ScaleTier::Normal => 0.6,
            ScaleTier::Selected => 1.0,
        }
    }

    pub fn is_visible(self) -> bool {
        self != ScaleTier::Gone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_increase_with_tier() {
        let tiers = [
            ScaleTier::Gone,
            ScaleTier::Smallest,
            ScaleTier::Small,
            ScaleTier::Normal,
            ScaleTier::Selected,
        ];
        for pair in tiers.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].factor() < pair[1].factor());
        }
        assert_eq!(ScaleTier::Gone.factor(), 0.0);
        assert_eq!(ScaleTier::Selected.factor(), 1.0);
    }

    #[test]
    fn test_only_gone_is_hidden() {
        assert!(!ScaleTier::Gone.is_visible());
        assert!(ScaleTier::Smallest.is_visible());
        assert!(ScaleTier::Selected.is_visible());
    }
}
