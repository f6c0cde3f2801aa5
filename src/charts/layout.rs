//! Bar Layout Module
//! Positions for a grouped bar chart: one group per integer tick, one bar per series.

/// Derived bar positions for `groups` groups of `series` bars each.
///
/// The bars of a group share `total_width` and are centred on the group's
/// integer tick. Pure data, recomputed on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub groups: usize,
    pub series: usize,
    pub total_width: f64,
}

impl BarLayout {
    pub fn new(groups: usize, series: usize, total_width: f64) -> Self {
        Self {
            groups,
            series,
            total_width,
        }
    }

    /// Width of a single bar.
    pub fn width(&self) -> f64 {
        self.total_width / self.series as f64
    }

    /// Left-most bar position of each group: `i - (total_width - width) / 2`.
    pub fn base_positions(&self) -> Vec<f64> {
        let shift = (self.total_width - self.width()) / 2.0;
        (0..self.groups).map(|i| i as f64 - shift).collect()
    }

    /// Bar positions for series `index`: `base + index * width`.
    pub fn series_offsets(&self, index: usize) -> Vec<f64> {
        let step = index as f64 * self.width();
        self.base_positions().iter().map(|x| x + step).collect()
    }

    /// Tick label anchors, placed on the second bar of each group.
    pub fn tick_positions(&self) -> Vec<f64> {
        self.series_offsets(1)
    }

    /// Horizontal extent of all bars, padded by `margin` of the span on each side.
    pub fn x_bounds(&self, margin: f64) -> (f64, f64) {
        let half = self.width() / 2.0;
        let base = self.base_positions();
        let (Some(first), Some(last)) = (base.first(), base.last()) else {
            return (-0.5, 0.5);
        };
        let lo = first - half;
        let hi = last + self.series.saturating_sub(1) as f64 * self.width() + half;
        let pad = (hi - lo) * margin;
        (lo - pad, hi + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPS, "{a} != {e}");
        }
    }

    #[test]
    fn width_is_total_over_series() {
        let layout = BarLayout::new(3, 3, 0.8);
        assert!((layout.width() - 0.8 / 3.0).abs() < EPS);
        assert!((layout.width() - 0.266_666_666_666).abs() < 1e-9);
    }

    #[test]
    fn base_positions_centre_each_group() {
        let layout = BarLayout::new(3, 3, 0.8);
        let shift = (0.8 - 0.8 / 3.0) / 2.0;
        approx(&layout.base_positions(), &[-shift, 1.0 - shift, 2.0 - shift]);
        approx(
            &layout.base_positions(),
            &[-0.266_666_666_666_666_7, 0.733_333_333_333_333_3, 1.733_333_333_333_333_3],
        );
    }

    #[test]
    fn series_offsets_step_by_width() {
        let layout = BarLayout::new(3, 3, 0.8);
        let w = layout.width();
        let x = layout.base_positions();
        for k in 0..3 {
            let expected: Vec<f64> = x.iter().map(|v| v + k as f64 * w).collect();
            approx(&layout.series_offsets(k), &expected);
        }
    }

    #[test]
    fn bars_within_a_group_do_not_overlap() {
        let layout = BarLayout::new(3, 3, 0.8);
        let w = layout.width();
        let offsets: Vec<Vec<f64>> = (0..3).map(|k| layout.series_offsets(k)).collect();
        for g in 0..3 {
            for k in 1..3 {
                let gap = offsets[k][g] - offsets[k - 1][g];
                assert!(gap >= w - EPS, "bars {k} and {} overlap in group {g}", k - 1);
            }
        }
    }

    #[test]
    fn ticks_sit_on_middle_series() {
        let layout = BarLayout::new(3, 3, 0.8);
        let w = layout.width();
        let expected: Vec<f64> = layout.base_positions().iter().map(|x| x + w).collect();
        approx(&layout.tick_positions(), &expected);
        approx(&layout.tick_positions(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn repeated_computation_is_bit_identical() {
        let layout = BarLayout::new(3, 3, 0.8);
        let bits = |v: Vec<f64>| v.into_iter().map(f64::to_bits).collect::<Vec<_>>();
        assert_eq!(bits(layout.base_positions()), bits(layout.base_positions()));
        assert_eq!(
            bits(BarLayout::new(3, 3, 0.8).series_offsets(2)),
            bits(layout.series_offsets(2))
        );
    }

    #[test]
    fn x_bounds_cover_every_bar() {
        let layout = BarLayout::new(3, 3, 0.8);
        let (lo, hi) = layout.x_bounds(0.0);
        assert!((lo + 0.4).abs() < EPS);
        assert!((hi - 2.4).abs() < EPS);

        let (lo, hi) = layout.x_bounds(0.05);
        assert!(lo < -0.4 && hi > 2.4);
    }

    #[test]
    fn x_bounds_without_groups_fall_back() {
        assert_eq!(BarLayout::new(0, 3, 0.8).x_bounds(0.05), (-0.5, 0.5));
    }
}
