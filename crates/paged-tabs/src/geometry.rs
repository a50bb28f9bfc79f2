//! Layout and interpolation math for the tab bar.
//!
//! Pure functions over the measured container width and the current
//! scroll offset. The component's reactive layer subscribes to these;
//! nothing in here touches the DOM.

/// Layout-derived measurements, recomputed on every calibration.
///
/// Invariant after `measure`: `tab_width * count + 2 * side_padding`
/// equals `width` (within float tolerance), and `max_range` is the
/// farthest the underline can travel from its leftmost position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabLayout {
    /// Measured width of the whole widget, px.
    pub width: f64,
    /// Width of one tab column, px.
    pub tab_width: f64,
    /// Scroll offset of the last page, px.
    pub max_input: f64,
    /// Maximum underline travel distance, px.
    pub max_range: f64,
}

impl Default for TabLayout {
    // Width starts at 1 so position math never divides by zero before
    // the first measurement.
    fn default() -> Self {
        Self {
            width: 1.0,
            tab_width: 0.0,
            max_input: 0.0,
            max_range: 0.0,
        }
    }
}

impl TabLayout {
    /// Derives the layout from a measured width.
    ///
    /// An empty route stack is laid out as a single full-width column,
    /// so the division below is always defined.
    pub fn measure(width: f64, tab_count: usize, side_padding: f64) -> Self {
        let count = tab_count.max(1) as f64;
        let tab_width = (width - 2.0 * side_padding) / count;
        Self {
            width,
            tab_width,
            max_input: (count - 1.0) * width,
            max_range: width - tab_width - 2.0 * side_padding,
        }
    }
}

/// Piecewise-linear interpolation of `value` over matching control
/// points, with optional clamping at the outer points.
///
/// `input` must be sorted ascending and the same length as `output`
/// (at least two points). Without clamping, values outside the domain
/// extrapolate linearly along the outermost segment.
pub fn interpolate(value: f64, input: &[f64], output: &[f64], clamp: bool) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    debug_assert!(input.len() >= 2);

    let last = input.len() - 1;
    if clamp {
        if value <= input[0] {
            return output[0];
        }
        if value >= input[last] {
            return output[last];
        }
    }

    let mut seg = last - 1;
    for k in 0..last {
        if value < input[k + 1] {
            seg = k;
            break;
        }
    }

    let (x0, x1) = (input[seg], input[seg + 1]);
    let (y0, y1) = (output[seg], output[seg + 1]);
    if x1 == x0 {
        return y0;
    }
    y0 + (value - x0) * (y1 - y0) / (x1 - x0)
}

/// Opacity of marker `tab` at the given continuous position.
///
/// Fading mode interpolates across the whole inter-tab range; non-fading
/// mode holds full opacity strictly inside the half-integer band around
/// the tab and snaps to `inactive` at its edges.
pub fn marker_opacity(position: f64, tab: usize, inactive: f64, fade: bool) -> f64 {
    let i = tab as f64;
    if fade {
        interpolate(
            position,
            &[i - 1.0, i, i + 1.0],
            &[inactive, 1.0, inactive],
            true,
        )
    } else {
        const EPS: f64 = 1e-9;
        interpolate(
            position,
            &[i - 0.5, i - 0.5 + EPS, i, i + 0.5 - EPS, i + 0.5],
            &[inactive, 1.0, 1.0, 1.0, inactive],
            true,
        )
    }
}

/// Underline offset for the given position, mapping `[0, count-1]` onto
/// `[0, max_range]`. Unclamped: elastic overscroll extrapolates past the
/// ends, which is visible only transiently.
pub fn underline_offset(position: f64, tab_count: usize, max_range: f64) -> f64 {
    let last = tab_count.saturating_sub(1) as f64;
    interpolate(position, &[0.0, last], &[0.0, max_range], false)
}

/// Scroll offset of page `index`.
pub fn page_offset(index: usize, width: f64) -> f64 {
    index as f64 * width
}

/// Reports the page the scroller settled on, if the offset sits exactly
/// on a page boundary and the page differs from the last recorded one.
/// Partial offsets and repeats return `None`, so a page is reported at
/// most once per landing. Negative offsets (elastic overscroll) never
/// report.
pub fn settled_page(offset: f64, width: f64, last_page: usize) -> Option<usize> {
    if width <= 0.0 || offset < 0.0 {
        return None;
    }
    if offset % width != 0.0 {
        return None;
    }
    let page = (offset / width) as usize;
    (page != last_page).then_some(page)
}

/// Recovers the page the user was on before a resize, from the scroll
/// offset and the width it was measured against. On the first
/// calibration there is no previous width and the index is 0.
pub fn intended_page(offset: f64, previous_width: Option<f64>) -> usize {
    match previous_width {
        Some(w) if w > 0.0 => (offset / w).ceil().max(0.0) as usize,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_measure_three_tabs() {
        let layout = TabLayout::measure(300.0, 3, 10.0);
        assert!((layout.tab_width - 280.0 / 3.0).abs() < TOL);
        assert!((layout.max_input - 600.0).abs() < TOL);
        assert!((layout.max_range - (300.0 - 280.0 / 3.0 - 20.0)).abs() < TOL);
    }

    #[test]
    fn test_measure_partitions_width_exactly() {
        let layout = TabLayout::measure(300.0, 3, 10.0);
        assert!((layout.tab_width * 3.0 + 20.0 - 300.0).abs() < TOL);
    }

    #[test]
    fn test_measure_is_idempotent() {
        let a = TabLayout::measure(375.0, 4, 8.0);
        let b = TabLayout::measure(375.0, 4, 8.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_measure_empty_stack_degenerates_to_one_column() {
        let layout = TabLayout::measure(300.0, 0, 10.0);
        assert!((layout.tab_width - 280.0).abs() < TOL);
        assert!((layout.max_input - 0.0).abs() < TOL);
    }

    #[test]
    fn test_fading_opacity_at_control_points() {
        for i in 0..3 {
            assert!((marker_opacity(i as f64, i, 0.5, true) - 1.0).abs() < TOL);
        }
        assert!((marker_opacity(0.0, 1, 0.5, true) - 0.5).abs() < TOL);
        assert!((marker_opacity(2.0, 1, 0.5, true) - 0.5).abs() < TOL);
    }

    #[test]
    fn test_fading_opacity_midway() {
        // Halfway between tabs 0 and 1 both markers sit at the midpoint
        // of the fade.
        assert!((marker_opacity(0.5, 0, 0.5, true) - 0.75).abs() < TOL);
        assert!((marker_opacity(0.5, 1, 0.5, true) - 0.75).abs() < TOL);
    }

    #[test]
    fn test_fading_opacity_clamps_beyond_neighbors() {
        assert!((marker_opacity(3.0, 1, 0.4, true) - 0.4).abs() < TOL);
        assert!((marker_opacity(-2.0, 1, 0.4, true) - 0.4).abs() < TOL);
    }

    #[test]
    fn test_snap_opacity_holds_inside_half_integer_band() {
        for i in 0..3 {
            assert!((marker_opacity(i as f64, i, 0.5, false) - 1.0).abs() < TOL);
            assert!((marker_opacity(i as f64 + 0.4, i, 0.5, false) - 1.0).abs() < 1e-6);
            assert!((marker_opacity(i as f64 - 0.4, i, 0.5, false) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_snap_opacity_inactive_at_band_edges() {
        assert!((marker_opacity(1.5, 1, 0.5, false) - 0.5).abs() < TOL);
        assert!((marker_opacity(0.5, 1, 0.5, false) - 0.5).abs() < TOL);
        assert!((marker_opacity(1.7, 1, 0.5, false) - 0.5).abs() < TOL);
    }

    #[test]
    fn test_underline_spans_full_range() {
        let max_range = 186.67;
        assert!((underline_offset(0.0, 3, max_range)).abs() < TOL);
        assert!((underline_offset(2.0, 3, max_range) - max_range).abs() < TOL);
        assert!((underline_offset(1.0, 3, max_range) - max_range / 2.0).abs() < TOL);
    }

    #[test]
    fn test_underline_extrapolates_on_overscroll() {
        let max_range = 200.0;
        assert!((underline_offset(-0.1, 3, max_range) + 10.0).abs() < TOL);
        assert!((underline_offset(2.1, 3, max_range) - 210.0).abs() < TOL);
    }

    #[test]
    fn test_underline_single_tab_stays_put() {
        assert_eq!(underline_offset(0.0, 1, 0.0), 0.0);
    }

    #[test]
    fn test_page_offset_targets() {
        assert_eq!(page_offset(2, 300.0), 600.0);
        assert_eq!(page_offset(0, 300.0), 0.0);
    }

    #[test]
    fn test_settled_page_fires_once_per_landing() {
        // Dragging from page 0 to page 1: partial offsets report nothing,
        // the exact boundary reports once, repeats are suppressed.
        assert_eq!(settled_page(100.0, 300.0, 0), None);
        assert_eq!(settled_page(200.0, 300.0, 0), None);
        assert_eq!(settled_page(300.0, 300.0, 0), Some(1));
        assert_eq!(settled_page(300.0, 300.0, 1), None);
    }

    #[test]
    fn test_settled_page_ignores_overscroll_and_zero_width() {
        assert_eq!(settled_page(-300.0, 300.0, 1), None);
        assert_eq!(settled_page(300.0, 0.0, 0), None);
    }

    #[test]
    fn test_intended_page_uses_previous_width() {
        assert_eq!(intended_page(600.0, Some(300.0)), 2);
        // Mid-drag offsets round up to the page the user was headed to.
        assert_eq!(intended_page(450.0, Some(300.0)), 2);
        assert_eq!(intended_page(0.0, Some(300.0)), 0);
    }

    #[test]
    fn test_intended_page_without_previous_width() {
        assert_eq!(intended_page(240.0, None), 0);
        assert_eq!(intended_page(240.0, Some(0.0)), 0);
    }
}
