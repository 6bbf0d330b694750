//! Integration tests for color wheel geometry

mod common;
use common::*;

use color_harmony::{
    indicators, ColorCombination, Harmony, Hsv, Indicator, Point, Rgb, WheelPoint, RED,
};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn cartesian_directions_map_to_angles() {
    let center = Point::new(100.0, 100.0);
    let radius = 50.0;

    let right = WheelPoint::from_cartesian(center, Point::new(150.0, 100.0), radius);
    assert!(close(right.angle, 0.0));
    assert!(close(right.distance, 1.0));

    // Screen y grows downward, so a smaller y is "up" on the wheel
    let up = WheelPoint::from_cartesian(center, Point::new(100.0, 75.0), radius);
    assert!(close(up.angle, 90.0));
    assert!(close(up.distance, 0.5));

    let left = WheelPoint::from_cartesian(center, Point::new(60.0, 100.0), radius);
    assert!(close(left.angle, 180.0));

    let down = WheelPoint::from_cartesian(center, Point::new(100.0, 130.0), radius);
    assert!(close(down.angle, 270.0));
}

#[test]
fn center_selects_grey_at_brightness() {
    let center = Point::new(10.0, 10.0);
    let point = WheelPoint::from_cartesian(center, center, 25.0);

    assert!(close(point.distance, 0.0));
    assert_eq!(point.to_rgb(0.6), Rgb::new(0.6, 0.6, 0.6));
}

#[test]
fn selection_outside_rim_is_fully_saturated() {
    let center = Point::new(0.0, 0.0);
    let point = WheelPoint::from_cartesian(center, Point::new(300.0, 0.0), 100.0);

    let hsv = point.to_hsv(1.0);
    assert_eq!(hsv.s, 1.0);
    assert!(colors_equal(point.to_rgb(1.0), RED));
}

#[test]
fn selection_uses_brightness_as_value() {
    let hsv = WheelPoint::new(120.0, 0.5).to_hsv(0.25);
    assert_eq!(hsv, Hsv::new(120.0, 0.5, 0.25));
    assert!(colors_equal(
        WheelPoint::new(120.0, 1.0).to_rgb(0.25),
        Rgb::new(0.0, 0.25, 0.0)
    ));
}

#[test]
fn selected_color_reports_back_its_position() {
    let point = WheelPoint::new(135.0, 0.8);
    let hsv = point.to_rgb(0.9).to_hsv();

    assert!(hue_distance(hsv.h, point.angle) < 1e-2);
    assert!((hsv.s - point.distance).abs() < 1e-4);

    let indicator = Indicator::for_color(hsv);
    assert!(hue_distance(-indicator.rotation, point.angle) < 1e-2);
    assert!((indicator.distance - 0.8).abs() < 1e-4);
}

#[test]
fn indicators_follow_offsets() {
    let base = Hsv::new(100.0, 0.5, 1.0);
    let placed = indicators(base, ColorCombination::Tetradic);

    let rotations: Vec<f32> = placed.iter().map(|i| i.rotation).collect();
    assert_eq!(rotations, vec![-100.0, -10.0, 80.0, -190.0]);
    assert!(placed.iter().all(|i| i.distance == 0.5));
}

#[test]
fn indicators_point_at_harmony_hues() {
    let base = Hsv::new(250.0, 0.7, 0.7);

    for combination in ColorCombination::ALL {
        let placed = indicators(base, combination);
        let colors = base.all_colors(combination);
        assert_eq!(placed.len(), colors.len());

        for (indicator, color) in placed.iter().zip(colors.iter()) {
            assert!(hue_distance(-indicator.rotation, color.h) < 1e-3);
        }
    }
}

#[test]
fn single_has_only_main_indicator() {
    let placed = indicators(Hsv::new(45.0, 0.2, 1.0), ColorCombination::Single);
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0], Indicator { rotation: -45.0, distance: 0.2 });
}

#[test]
fn brightness_change_keeps_wheel_position() {
    let selection = WheelPoint::new(300.0, 0.6).to_rgb(1.0);
    let dimmed = selection.with_value(0.3);
    let hsv = dimmed.to_hsv();

    assert!(hue_distance(hsv.h, 300.0) < 1e-2);
    assert!((hsv.s - 0.6).abs() < 1e-4);
    assert!((hsv.v - 0.3).abs() < 1e-4);
}
