use super::build::{clip_rect, interval_polygons, skew_dx};
use super::scanline::intervals;
use super::snap::snap;
use super::*;
use crate::geom::{Contour, Point, RegionMembership, Shape, WindingRule};
use proptest::prelude::*;

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
    Shape::new(vec![Contour::rect(x0, y0, x1, y1)])
}

#[test]
fn bands_for_reference_rectangle() {
    // 230 high, 11 bars, gap 20: 200 of gaps, 30 left for bars.
    let bands = compute_bands(0.0, 230.0, 11, 20.0).unwrap();
    assert_eq!(bands.len(), 11);
    let bar_h = 30.0 / 11.0;
    assert!((bands[0].height() - bar_h).abs() < 1e-9);
    assert!((bar_h - 2.727).abs() < 1e-3);
    for w in bands.windows(2) {
        assert!((w[1].y_bottom - w[0].y_top - 20.0).abs() < 1e-9);
    }
    assert_eq!(bands[0].y_bottom, 0.0);
    assert_eq!(bands[10].y_top, 230.0);
    assert!(bands[0].is_first && !bands[0].is_last);
    assert!(bands[10].is_last && !bands[10].is_first);
    let total: f64 = bands.iter().map(Band::height).sum::<f64>() + 10.0 * 20.0;
    assert!((total - 230.0).abs() < 1e-9);
}

#[test]
fn single_band_spans_full_height() {
    let bands = compute_bands(-12.0, 700.0, 1, 50.0).unwrap();
    assert_eq!(bands.len(), 1);
    assert_eq!(bands[0].y_bottom, -12.0);
    assert_eq!(bands[0].y_top, 700.0);
    assert!(bands[0].is_first && bands[0].is_last);
}

#[test]
fn infeasible_gap_yields_none() {
    assert!(compute_bands(0.0, 100.0, 3, 50.0).is_none());
    assert!(compute_bands(0.0, 100.0, 2, 100.0).is_none());
    assert!(compute_bands(0.0, 100.0, 0, 1.0).is_none());
    assert!(bar_height(100.0, 2, 99.0).is_some());
}

#[test]
fn scanline_finds_rectangle_span() {
    let s = rect(10.0, 0.0, 90.0, 50.0);
    let m = RegionMembership::new(&s, WindingRule::NonZero);
    let iv = intervals(&m, 25.0, 0.0, 100.0, 0.5, 0.4);
    assert_eq!(iv, vec![Interval { start: 10.0, end: 90.0 }]);
}

#[test]
fn scanline_keeps_run_already_inside_at_scan_start() {
    // Region covers the whole scan range. The scan starts outside, so the
    // first sample opens a run at x_min instead of being skipped.
    let s = rect(-10.0, 0.0, 200.0, 50.0);
    let m = RegionMembership::new(&s, WindingRule::NonZero);
    let iv = intervals(&m, 25.0, 0.0, 100.0, 0.4, 0.4);
    assert_eq!(iv, vec![Interval { start: 0.0, end: 100.0 }]);
}

#[test]
fn scanline_two_runs_and_misses_off_line() {
    let s = Shape::new(vec![
        Contour::rect(10.0, 0.0, 20.0, 50.0),
        Contour::rect(40.0, 0.0, 60.0, 50.0),
    ]);
    let m = RegionMembership::new(&s, WindingRule::NonZero);
    let iv = intervals(&m, 10.0, 0.0, 100.0, 1.0, 0.4);
    assert_eq!(
        iv,
        vec![
            Interval { start: 10.0, end: 20.0 },
            Interval { start: 40.0, end: 60.0 }
        ]
    );
    assert!(intervals(&m, 60.0, 0.0, 100.0, 1.0, 0.4).is_empty());
}

#[test]
fn scanline_drops_short_runs() {
    // 1.5 wide sliver sampled every 1.0 gives a run of length 1 or 2.
    let s = Shape::new(vec![
        Contour::rect(10.25, 0.0, 11.75, 50.0),
        Contour::rect(40.0, 0.0, 60.0, 50.0),
    ]);
    let m = RegionMembership::new(&s, WindingRule::NonZero);
    let iv = intervals(&m, 10.0, 0.0, 100.0, 1.0, 5.0);
    assert_eq!(iv, vec![Interval { start: 40.0, end: 60.0 }]);
}

#[test]
fn scanline_degenerate_step_is_empty() {
    let s = rect(0.0, 0.0, 10.0, 10.0);
    let m = RegionMembership::new(&s, WindingRule::NonZero);
    assert!(intervals(&m, 5.0, 0.0, 10.0, 0.0, 0.4).is_empty());
    assert!(intervals(&m, 5.0, 10.0, 0.0, 1.0, 0.4).is_empty());
}

#[test]
fn rectangles_without_skew() {
    let band = compute_bands(0.0, 100.0, 1, 0.0).unwrap()[0];
    let polys = interval_polygons(&band, &[Interval { start: 5.0, end: 15.0 }], 0.0, false);
    assert_eq!(polys.len(), 1);
    assert_eq!(polys[0], Contour::rect(5.0, 0.0, 15.0, 100.0));
}

#[test]
fn parallelogram_offset_is_tan_times_height() {
    // Reference rectangle with a single band of height 20.909.
    let band = Band {
        index: 3,
        y_bottom: 10.0,
        y_top: 30.909,
        is_first: false,
        is_last: false,
    };
    let polys = interval_polygons(&band, &[Interval { start: 0.0, end: 50.0 }], 30.0, true);
    let p = &polys[0].points;
    let dx = p[3].x - p[0].x;
    assert!((dx - 30f64.to_radians().tan() * 20.909).abs() < 1e-9);
    assert!((dx - 12.075).abs() < 1e-2);
    assert!((p[2].x - p[1].x - dx).abs() < 1e-12);
    assert_eq!(p[0].y, 10.0);
    assert_eq!(p[2].y, 30.909);
    assert!((skew_dx(30.0, 20.909) - dx).abs() < 1e-12);
    // Same offset regardless of which band it is.
    let other = Band { index: 0, y_bottom: 100.0, y_top: 120.909, ..band };
    let q = interval_polygons(&other, &[Interval { start: 0.0, end: 50.0 }], 30.0, true);
    assert!((q[0].points[3].x - q[0].points[0].x - dx).abs() < 1e-9);
}

#[test]
fn clip_rect_extends_only_outer_bands() {
    let bands = compute_bands(0.0, 100.0, 3, 5.0).unwrap();
    let first = clip_rect(&bands[0], 0.0, 50.0, 0.15).bounds().unwrap();
    let mid = clip_rect(&bands[1], 0.0, 50.0, 0.15).bounds().unwrap();
    let last = clip_rect(&bands[2], 0.0, 50.0, 0.15).bounds().unwrap();
    assert!((first.min.y + 0.15).abs() < 1e-12);
    assert_eq!(first.max.y, bands[0].y_top);
    assert_eq!(mid.min.y, bands[1].y_bottom);
    assert_eq!(mid.max.y, bands[1].y_top);
    assert!((last.max.y - 100.15).abs() < 1e-12);
    assert_eq!(last.min.x, 0.0);
    assert_eq!(last.max.x, 50.0);
}

#[test]
fn snap_bottom_and_top_touch_only_y() {
    let s = Shape::new(vec![Contour::new(vec![
        Point::new(1.0, -0.15),
        Point::new(2.0, 0.3),
        Point::new(3.0, 0.7),
        Point::new(4.0, 9.9),
        Point::new(5.0, 10.2),
    ])]);
    let bottom = snap(&s, 0.0, 0.6, Edge::Bottom);
    let ys: Vec<f64> = bottom.contours[0].points.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![0.0, 0.0, 0.7, 9.9, 10.2]);
    let top = snap(&s, 10.0, 0.6, Edge::Top);
    let ys: Vec<f64> = top.contours[0].points.iter().map(|p| p.y).collect();
    assert_eq!(ys, vec![-0.15, 0.3, 0.7, 10.0, 10.0]);
    let xs: Vec<f64> = top.contours[0].points.iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    // Input untouched.
    assert_eq!(s.contours[0].points[0].y, -0.15);
}

#[test]
fn config_validation() {
    assert!(LayoutConfig::default().validate().is_ok());
    let bad = LayoutConfig { bar_count: 0, ..Default::default() };
    assert_eq!(bad.validate().unwrap_err(), "bar count must be ≥ 1");
    let ok = LayoutConfig { bar_count: MAX_BAR_COUNT, ..Default::default() };
    assert!(ok.validate().is_ok());
    let bad = LayoutConfig { bar_count: MAX_BAR_COUNT + 1, ..Default::default() };
    assert_eq!(bad.validate().unwrap_err(), "bar count must be ≤ 100000");
    let bad = LayoutConfig { sample_step_x: 0.0, ..Default::default() };
    assert!(bad.validate().is_err());
    let bad = LayoutConfig { gap: f64::NAN, ..Default::default() };
    assert!(bad.validate().is_err());
    let bad = LayoutConfig { angle_deg: 90.0, ..Default::default() };
    assert!(bad.validate().is_err());
    let ok = LayoutConfig { angle_deg: 90.0, fit_contour: true, ..Default::default() };
    assert!(ok.validate().is_ok());
    assert_eq!(ok.effective_angle_deg(), 0.0);
    assert!(!ok.is_skewed());
}

#[test]
fn config_partial_json_uses_defaults() {
    let cfg: LayoutConfig =
        serde_json::from_str(r#"{"barCount": 4, "fitContour": true}"#).unwrap();
    assert_eq!(cfg.bar_count, 4);
    assert!(cfg.fit_contour);
    assert_eq!(cfg.gap, 20.0);
    assert_eq!(cfg.sample_step_x, 0.4);
}

proptest! {
    #[test]
    fn band_heights_and_gaps_span_the_extent(
        y_min in -500.0f64..500.0,
        height in 1.0f64..2000.0,
        count in 1usize..40,
        gap_frac in 0.0f64..0.99,
    ) {
        let gap = if count > 1 { gap_frac * height / (count as f64 - 1.0) } else { 0.0 };
        let y_max = y_min + height;
        let bands = compute_bands(y_min, y_max, count, gap).unwrap();
        prop_assert_eq!(bands.len(), count);
        prop_assert_eq!(bands[0].y_bottom, y_min);
        prop_assert_eq!(bands[count - 1].y_top, y_max);
        let sum: f64 = bands.iter().map(Band::height).sum();
        prop_assert!((sum + (count as f64 - 1.0) * gap - height).abs() < 1e-6 * height.max(1.0));
        for w in bands.windows(2) {
            prop_assert!((w[1].y_bottom - w[0].y_top - gap).abs() < 1e-6 * height.max(1.0));
            prop_assert!(w[0].y_top > w[0].y_bottom);
        }
    }
}
