//! SVG geometry for the dashboard charts: scales, paths, bands and arcs.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Drawing surface in SVG user units with room for axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl PlotArea {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin_left: 56.0,
            margin_right: 16.0,
            margin_top: 16.0,
            margin_bottom: 32.0,
        }
    }

    pub fn left(&self) -> f64 {
        self.margin_left
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn top(&self) -> f64 {
        self.margin_top
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }

    pub fn inner_width(&self) -> f64 {
        (self.right() - self.left()).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Maps a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Values of a degenerate domain all land on the start of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Rounds up to 1, 2, 2.5 or 5 times a power of ten so axis ticks stay
/// readable. Non-positive input gives `1.0`.
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(value.log10().floor() as i32);
    let normalized = value / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s + 1e-9)
        .unwrap_or(10.0);
    step * magnitude
}

/// `count + 1` evenly spaced ticks from zero to `max`.
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return vec![0.0];
    }
    (0..=count)
        .map(|i| max * i as f64 / count as f64)
        .collect()
}

/// Polyline path (`M x,y L x,y ...`). Empty input gives an empty path.
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path.push(' ');
        }
        path.push_str(&format!("{}{:.2},{:.2}", cmd, x, y));
    }
    path
}

/// Closed area under a line down to `baseline`.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} L{:.2},{:.2} L{:.2},{:.2} Z",
        line_path(points),
        last.0,
        baseline,
        first.0,
        baseline
    )
}

/// Horizontal band of one bar: left edge and width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub x: f64,
    pub width: f64,
}

impl Band {
    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Splits `[start, start + width]` into `count` bars separated by gaps of
/// `gap_ratio` of the slot width.
pub fn bands(count: usize, start: f64, width: f64, gap_ratio: f64) -> Vec<Band> {
    if count == 0 || width <= 0.0 {
        return Vec::new();
    }
    let slot = width / count as f64;
    let gap = slot * gap_ratio.clamp(0.0, 0.9);
    (0..count)
        .map(|i| Band {
            x: start + slot * i as f64 + gap / 2.0,
            width: slot - gap,
        })
        .collect()
}

/// Angular extent of one donut slice, radians clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSlice {
    pub start: f64,
    pub end: f64,
    pub fraction: f64,
}

/// Slices proportional to `values`. Negative values count as zero; when the
/// total is zero every slice is empty.
pub fn arc_slices(values: &[f64]) -> Vec<ArcSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut angle = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = if total > 0.0 { v.max(0.0) / total } else { 0.0 };
            let start = angle;
            angle += fraction * TAU;
            ArcSlice {
                start,
                end: angle,
                fraction,
            }
        })
        .collect()
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let a = angle - FRAC_PI_2;
    (cx + r * a.cos(), cy + r * a.sin())
}

/// Ring segment between `inner` and `outer` radii.
pub fn donut_segment_path(cx: f64, cy: f64, outer: f64, inner: f64, slice: &ArcSlice) -> String {
    if slice.fraction <= 0.0 {
        return String::new();
    }
    // A full ring cannot be drawn with a single arc whose ends coincide.
    let end = if slice.end - slice.start >= TAU - 1e-6 {
        slice.start + TAU - 1e-4
    } else {
        slice.end
    };
    let large_arc = if end - slice.start > std::f64::consts::PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, slice.start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, slice.start);
    format!(
        "M{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large_arc} 1 {ox1:.2},{oy1:.2} \
         L{ix1:.2},{iy1:.2} A{inner:.2},{inner:.2} 0 {large_arc} 0 {ix0:.2},{iy0:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_linearly_and_inverts_y() {
        let scale = LinearScale::new((0.0, 100.0), (200.0, 0.0));
        assert_eq!(scale.map(0.0), 200.0);
        assert_eq!(scale.map(50.0), 100.0);
        assert_eq!(scale.map(100.0), 0.0);
    }

    #[test]
    fn degenerate_scale_maps_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (10.0, 90.0));
        assert_eq!(scale.map(5.0), 10.0);
        assert_eq!(scale.map(42.0), 10.0);
    }

    #[test]
    fn nice_ceiling_rounds_up() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(7.0), 10.0);
        assert_eq!(nice_ceiling(18.0), 20.0);
        assert_eq!(nice_ceiling(2300.0), 2500.0);
        assert_eq!(nice_ceiling(41_000.0), 50_000.0);
        assert_eq!(nice_ceiling(100.0), 100.0);
    }

    #[test]
    fn ticks_are_evenly_spaced() {
        assert_eq!(ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(ticks(10.0, 0), vec![0.0]);
    }

    #[test]
    fn paths() {
        assert_eq!(line_path(&[]), "");
        assert_eq!(line_path(&[(0.0, 10.0), (5.0, 2.5)]), "M0.00,10.00 L5.00,2.50");
        assert_eq!(
            area_path(&[(0.0, 10.0), (5.0, 2.5)], 20.0),
            "M0.00,10.00 L5.00,2.50 L5.00,20.00 L0.00,20.00 Z"
        );
        assert_eq!(area_path(&[], 20.0), "");
    }

    #[test]
    fn bands_cover_the_width() {
        let b = bands(4, 10.0, 200.0, 0.2);
        assert_eq!(b.len(), 4);
        assert!((b[0].x - 15.0).abs() < 1e-9);
        assert!((b[0].width - 40.0).abs() < 1e-9);
        assert!((b[3].center() - 185.0).abs() < 1e-9);
        assert!(bands(0, 0.0, 100.0, 0.2).is_empty());
    }

    #[test]
    fn arc_slices_are_proportional() {
        let slices = arc_slices(&[1.0, 3.0]);
        assert!((slices[0].fraction - 0.25).abs() < 1e-9);
        assert!((slices[0].end - TAU / 4.0).abs() < 1e-9);
        assert!((slices[1].start - slices[0].end).abs() < 1e-9);
        assert!((slices[1].end - TAU).abs() < 1e-9);
    }

    #[test]
    fn arc_slices_with_zero_total_are_empty() {
        let slices = arc_slices(&[0.0, -5.0]);
        assert!(slices.iter().all(|s| s.fraction == 0.0));
        assert_eq!(donut_segment_path(50.0, 50.0, 40.0, 20.0, &slices[0]), "");
    }

    #[test]
    fn full_ring_segment_is_drawable() {
        let slices = arc_slices(&[10.0]);
        let path = donut_segment_path(50.0, 50.0, 40.0, 20.0, &slices[0]);
        assert!(path.starts_with("M50.00,10.00 A40.00,40.00 0 1 1"));
        assert!(path.ends_with('Z'));
    }
}
