use super::*;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::foundation::core::Rgb8;

fn rec() -> Record {
    let ts = NaiveDate::from_ymd_opt(2023, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    Record::new(ts, "Dongsi")
}

fn full() -> Record {
    rec()
        .with(Field::Pm25, 120.0)
        .with(Field::So2, 45.0)
        .with(Field::No2, 300.0)
        .with(Field::Co, 2.0)
        .with(Field::O3, 160.0)
        .with(Field::Temperature, 0.0)
        .with(Field::DewPoint, 55.0)
        .with(Field::WindSpeed, 4.0)
        .with(Field::WindDirection, 90.0)
}

#[test]
fn circle_radius_and_color_follow_pm25() {
    let mut rng = StdRng::seed_from_u64(1);
    let p = CircleParams::default();
    let c = circle(&full(), &p, &mut rng).unwrap();
    assert_eq!(c.radius, 2.4);
    assert_eq!(c.color, PaletteFamily::Primary.color_for(120.0));
    assert!((0.4..0.8).contains(&c.alpha));
    // displaced by +0.5 along y from a point inside [-8,8)^2
    assert!(c.center.y >= -7.5 && c.center.y < 8.5);
    assert!(c.center.x >= -8.0 && c.center.x < 8.0);

    let tiny = circle(&rec().with(Field::Pm25, 1.0), &p, &mut rng).unwrap();
    assert_eq!(tiny.radius, 0.5);
    assert!(circle(&rec(), &p, &mut rng).is_none());
}

#[test]
fn triangle_is_scaled_by_temperature() {
    let mut rng = StdRng::seed_from_u64(2);
    let p = TriangleParams::default();
    let t = triangle(&full(), &p, &mut rng).unwrap();
    assert!((t.size - 1.5 * 0.5).abs() < 1e-12);
    assert!((0.0..360.0).contains(&t.rotation));
    assert_eq!(t.color, PaletteFamily::Secondary.color_for(45.0));

    let frozen = rec().with(Field::So2, 45.0).with(Field::Temperature, -35.0);
    assert_eq!(triangle(&frozen, &p, &mut rng).unwrap().size, 0.0);
    let hot = rec().with(Field::So2, 45.0).with(Field::Temperature, 45.0);
    assert!((triangle(&hot, &p, &mut rng).unwrap().size - 1.5).abs() < 1e-12);

    assert!(triangle(&rec().with(Field::So2, 45.0), &p, &mut rng).is_none());
}

#[test]
fn rectangle_is_square_with_humidity_alpha() {
    let mut rng = StdRng::seed_from_u64(3);
    let p = RectangleParams::default();
    let r = rectangle(&full(), &p, &mut rng).unwrap();
    assert_eq!(r.width, 1.5);
    assert_eq!(r.width, r.height);
    assert!((r.alpha - 0.55).abs() < 1e-12);

    let dry = rec().with(Field::No2, 10.0).with(Field::DewPoint, -20.0);
    let r = rectangle(&dry, &p, &mut rng).unwrap();
    assert_eq!(r.alpha, 0.2);
    assert_eq!(r.width, 0.25);
}

#[test]
fn line_respects_threshold() {
    let mut rng = StdRng::seed_from_u64(4);
    let p = LineParams::default();
    for speed in [0.0, 1.0, 2.0] {
        let r = full().with(Field::WindSpeed, speed);
        assert!(line(&r, &p, &mut rng).is_none());
    }
    let l = line(&full(), &p, &mut rng).unwrap();
    assert_eq!(l.width, 4.0);
    // length 2 pointing along +y
    assert!((l.end.x - l.start.x).abs() < 1e-9);
    assert!((l.end.y - l.start.y - 2.0).abs() < 1e-9);
    assert_eq!(l.color, PaletteFamily::Neutral.color_for(2.0));

    let gale = full().with(Field::WindSpeed, 30.0);
    let l = line(&gale, &p, &mut rng).unwrap();
    assert_eq!(l.width, 5.0);
    assert!(((l.end - l.start).hypot() - 4.0).abs() < 1e-9);
}

#[test]
fn polygon_vertices_are_equidistant() {
    let mut rng = StdRng::seed_from_u64(5);
    let p = PolygonParams::default();
    for _ in 0..200 {
        let poly = polygon(&full(), &p, &mut rng).unwrap();
        assert!((5..=8).contains(&poly.vertices.len()));
        for v in &poly.vertices {
            assert!(((*v - poly.center).hypot() - 1.6).abs() < 1e-9);
        }
        assert!((0.3..0.6).contains(&poly.alpha));
    }
    let calm = full().with(Field::O3, 50.0);
    assert!(polygon(&calm, &p, &mut rng).is_none());
}

#[test]
fn regular_vertices_start_on_x_axis() {
    let v = regular_vertices(Point::new(1.0, 1.0), 2.0, 4);
    assert_eq!(v.len(), 4);
    assert!((v[0].x - 3.0).abs() < 1e-12 && (v[0].y - 1.0).abs() < 1e-12);
    assert!((v[1].x - 1.0).abs() < 1e-12 && (v[1].y - 3.0).abs() < 1e-12);
}

#[test]
fn colors_come_from_fixed_palettes() {
    let mut rng = StdRng::seed_from_u64(6);
    let all: Vec<Rgb8> = PaletteFamily::ALL
        .iter()
        .flat_map(|f| f.colors().iter().copied())
        .collect();
    let c = circle(&full(), &CircleParams::default(), &mut rng).unwrap();
    assert!(all.contains(&c.color));
}
