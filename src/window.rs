//! Sliding-window tier computation.
//!
//! Given the selected page, the page count and the visible-dot budget, decide
//! the [`ScaleTier`] of every dot. Once the page count exceeds the budget the
//! strip becomes a fixed-width window that follows the selection, with dots
//! shrinking toward both edges so the row reads as a longer strip scrolling
//! behind a small aperture.
//!
//! Everything here is pure: the same inputs always produce the same tiers.

use crate::tier::ScaleTier;

/// How the strip is laid out for a given page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every page has a dot; only the selected one stands out.
    Simple,
    /// More pages than dots; a tapered window follows the selection.
    Overflow,
}

impl Mode {
    pub fn for_counts(total: usize, max_visible: usize) -> Self {
        if total <= max_visible {
            Mode::Simple
        } else {
            Mode::Overflow
        }
    }
}

/// Compute the tier of every dot for `selected` out of `total` pages.
///
/// Returns `None` when there is nothing to do: no pages, or a selection
/// outside `0..=total`. Out-of-range selections are ignored, never clamped,
/// since selection events can race with page-count changes.
///
/// A selection equal to `total` is accepted but lands past the last dot, so
/// the result holds no [`ScaleTier::Selected`] entry.
pub fn compute(selected: isize, total: usize, max_visible: usize) -> Option<Vec<ScaleTier>> {
    if total == 0 {
        return None;
    }
    let selected = usize::try_from(selected).ok().filter(|&p| p <= total)?;

    Some(match Mode::for_counts(total, max_visible) {
        Mode::Simple => simple_tiers(selected, total),
        Mode::Overflow => overflow_tiers(selected, total, max_visible),
    })
}

fn simple_tiers(selected: usize, total: usize) -> Vec<ScaleTier> {
    let mut tiers = vec![ScaleTier::Normal; total];
    if let Some(slot) = tiers.get_mut(selected) {
        *slot = ScaleTier::Selected;
    }
    tiers
}

fn overflow_tiers(selected: usize, total: usize, max_visible: usize) -> Vec<ScaleTier> {
    let p = selected as isize;
    let n = total as isize;
    let m = max_visible as isize;

    // One spare slot absorbs a selection of exactly `total`.
    let mut tiers = vec![ScaleTier::Gone; total + 1];

    let mut real_start = (p - m + 4).max(0);

    if real_start + m > n {
        // Pinned to the tail: the last two dots stay full size.
        real_start = n - m;
        put(&mut tiers, n - 1, ScaleTier::Normal);
        put(&mut tiers, n - 2, ScaleTier::Normal);
    } else {
        if real_start + m - 2 < n {
            put(&mut tiers, real_start + m - 2, ScaleTier::Small);
        }
        if real_start + m - 1 < n {
            put(&mut tiers, real_start + m - 1, ScaleTier::Smallest);
        }
    }

    for i in real_start..real_start + m - 2 {
        put(&mut tiers, i, ScaleTier::Normal);
    }

    // Leading taper keys off the absolute page, not the window offset.
    if p > 5 {
        put(&mut tiers, real_start, ScaleTier::Smallest);
        put(&mut tiers, real_start + 1, ScaleTier::Small);
    } else if p == 5 {
        put(&mut tiers, real_start, ScaleTier::Small);
    }

    put(&mut tiers, p, ScaleTier::Selected);

    tiers.truncate(total);
    tiers
}

/// Assign `tier` at `index`, skipping indices outside the slice. Only a
/// budget below five can produce such an index.
fn put(tiers: &mut [ScaleTier], index: isize, tier: ScaleTier) {
    if let Some(slot) = usize::try_from(index).ok().and_then(|i| tiers.get_mut(i)) {
        *slot = tier;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ScaleTier::{Gone, Normal, Selected, Small, Smallest};

    fn visible(tiers: &[ScaleTier]) -> usize {
        tiers.iter().filter(|t| t.is_visible()).count()
    }

    fn selected_indices(tiers: &[ScaleTier]) -> Vec<usize> {
        tiers
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Selected)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_mode_for_counts() {
        assert_eq!(Mode::for_counts(9, 9), Mode::Simple);
        assert_eq!(Mode::for_counts(3, 9), Mode::Simple);
        assert_eq!(Mode::for_counts(10, 9), Mode::Overflow);
    }

    #[test]
    fn test_simple_mode_single_selection() {
        assert_eq!(compute(1, 3, 9), Some(vec![Normal, Selected, Normal]));

        for n in 1..=9 {
            for p in 0..n {
                let tiers = compute(p as isize, n, 9).unwrap();
                assert_eq!(tiers.len(), n);
                assert_eq!(selected_indices(&tiers), vec![p]);
                assert!(tiers
                    .iter()
                    .enumerate()
                    .all(|(i, t)| i == p || *t == Normal));
            }
        }
    }

    #[test]
    fn test_overflow_first_page() {
        let tiers = compute(0, 20, 9).unwrap();
        let mut expected = vec![Gone; 20];
        expected[0] = Selected;
        for slot in &mut expected[1..7] {
            *slot = Normal;
        }
        expected[7] = Small;
        expected[8] = Smallest;
        assert_eq!(tiers, expected);
    }

    #[test]
    fn test_overflow_last_page_pins_to_tail() {
        let tiers = compute(19, 20, 9).unwrap();
        assert!(tiers[..11].iter().all(|t| *t == Gone));
        assert_eq!(tiers[11], Smallest);
        assert_eq!(tiers[12], Small);
        assert!(tiers[13..19].iter().all(|t| *t == Normal));
        assert_eq!(tiers[19], Selected);
        assert_eq!(visible(&tiers), 9);
    }

    #[test]
    fn test_overflow_leading_taper_past_five() {
        let tiers = compute(6, 20, 9).unwrap();
        assert_eq!(
            &tiers[..10],
            &[Gone, Smallest, Small, Normal, Normal, Normal, Selected, Normal, Small, Smallest]
        );
        assert!(tiers[10..].iter().all(|t| *t == Gone));
    }

    #[test]
    fn test_overflow_leading_taper_at_five_uses_absolute_position() {
        // The window still starts at 0 here, yet the first dot is tapered
        // as though earlier pages were scrolling off.
        let tiers = compute(5, 20, 9).unwrap();
        assert_eq!(
            &tiers[..9],
            &[Small, Normal, Normal, Normal, Normal, Selected, Normal, Small, Smallest]
        );
        assert!(tiers[9..].iter().all(|t| *t == Gone));
    }

    #[test]
    fn test_overflow_properties_hold_everywhere() {
        for m in 5..=12 {
            for n in (m + 1)..=(m + 25) {
                for p in 0..n {
                    let tiers = compute(p as isize, n, m).unwrap();
                    assert_eq!(tiers.len(), n);
                    assert_eq!(selected_indices(&tiers), vec![p], "n={n} m={m} p={p}");
                    assert!(visible(&tiers) <= m, "n={n} m={m} p={p}");

                    let real_start = (p as isize - m as isize + 4).max(0) as usize;
                    if real_start + m > n {
                        for tail in [n - 1, n - 2] {
                            assert!(
                                matches!(tiers[tail], Normal | Selected),
                                "n={n} m={m} p={p} tail={tail}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_overflow_is_pure() {
        for p in 0..30 {
            assert_eq!(compute(p, 30, 7), compute(p, 30, 7));
        }
    }

    #[test]
    fn test_invalid_input_is_ignored() {
        assert_eq!(compute(0, 0, 9), None);
        assert_eq!(compute(-1, 20, 9), None);
        assert_eq!(compute(21, 20, 9), None);
        assert_eq!(compute(-1, 3, 9), None);
        assert_eq!(compute(4, 3, 9), None);
    }

    #[test]
    fn test_selection_equal_to_count_has_no_selected_dot() {
        let tiers = compute(20, 20, 9).unwrap();
        assert_eq!(tiers.len(), 20);
        assert!(selected_indices(&tiers).is_empty());
        assert_eq!(tiers[18], Normal);
        assert_eq!(tiers[19], Normal);

        let simple = compute(3, 3, 9).unwrap();
        assert_eq!(simple, vec![Normal; 3]);
    }

    #[test]
    fn test_small_budget_does_not_panic() {
        for m in 0..5 {
            for n in (m + 1)..12 {
                for p in 0..=n {
                    let tiers = compute(p as isize, n, m).unwrap();
                    assert_eq!(tiers.len(), n);
                }
            }
        }
    }
}
