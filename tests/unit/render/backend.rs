use super::*;
use crate::compose::params::HaloParams;
use crate::geometry::overlay::{Arrow, TextAnchor};
use crate::geometry::primitive::{Circle, LineSegment, Rectangle};
use crate::render::recording::{DrawCall, RecordingRenderer};

fn comp() -> Composition {
    let mut c = Composition::empty(Rect::new(-10.0, -10.0, 10.0, 10.0));
    c.primitives = vec![
        Primitive::Circle(Circle {
            center: Point::new(1.0, 1.0),
            radius: 0.5,
            color: Rgb8::WHITE,
            alpha: 0.5,
        }),
        Primitive::Rectangle(Rectangle {
            center: Point::new(0.0, 0.0),
            width: 2.0,
            height: 2.0,
            color: Rgb8::WHITE,
            alpha: 0.4,
            rotation: 45.0,
        }),
        Primitive::Line(LineSegment {
            start: Point::new(0.0, 0.0),
            end: Point::new(1.0, 0.0),
            color: Rgb8::WHITE,
            width: 3.0,
            alpha: 0.6,
        }),
    ];
    c.overlays = vec![
        Overlay::Arrow(Arrow {
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, 2.0),
            color: Rgb8::CYAN,
            width: 2.0,
            alpha: 0.7,
            head_width: 0.2,
            head_length: 0.3,
        }),
        Overlay::Text(TextLabel {
            position: Point::new(5.0, 9.5),
            text: "stats".to_owned(),
            color: Rgb8::WHITE,
            size_px: 14.0,
            anchor: TextAnchor::Start,
        }),
    ];
    c
}

#[test]
fn draws_primitives_then_overlays_then_presents() {
    let mut r = RecordingRenderer::new();
    render_composition(&mut r, &comp()).unwrap();
    let calls = &r.frames()[0];
    assert_eq!(calls.len(), 7);
    assert!(matches!(calls[0], DrawCall::Begin { .. }));
    assert!(matches!(calls[1], DrawCall::Circle { .. }));
    assert!(matches!(calls[2], DrawCall::Polygon { .. }));
    assert!(matches!(calls[3], DrawCall::Line { width_px, .. } if width_px == 3.0));
    // arrow = shaft + head
    assert!(matches!(calls[4], DrawCall::Line { .. }));
    assert!(matches!(calls[5], DrawCall::Polygon { .. }));
    assert!(matches!(&calls[6], DrawCall::Text(t) if t.text == "stats"));
}

#[test]
fn rotation_is_applied_when_drawing() {
    let mut r = RecordingRenderer::new();
    render_composition(&mut r, &comp()).unwrap();
    let DrawCall::Polygon { vertices, .. } = &r.frames()[0][2] else {
        panic!("expected polygon");
    };
    // a square rotated 45° has a vertex on the -y axis at distance sqrt(2)
    let v = vertices[0] - Point::ZERO;
    assert!((v.hypot() - 2f64.sqrt()).abs() < 1e-9);
    assert!(v.x.abs() < 1e-9 && v.y < 0.0);
}

#[test]
fn empty_composition_still_presents_background() {
    let mut r = RecordingRenderer::new();
    render_composition(&mut r, &Composition::empty(Rect::new(0.0, 0.0, 1.0, 1.0))).unwrap();
    assert_eq!(r.frames().len(), 1);
    assert_eq!(r.frames()[0].len(), 1);
}

#[test]
fn present_failure_propagates() {
    let mut r = RecordingRenderer::failing_at(0);
    let err = render_composition(&mut r, &comp()).unwrap_err();
    assert!(err.to_string().starts_with("render error:"));
    assert!(r.frames().is_empty());
}

#[test]
fn haloed_circles_get_highlight_and_outer_ring() {
    let mut c = comp();
    c.halo = Some(HaloParams::default());
    let mut r = RecordingRenderer::new();
    render_composition(&mut r, &c).unwrap();

    let circles: Vec<(f64, Rgb8, f64)> = r.frames()[0]
        .iter()
        .filter_map(|call| match call {
            DrawCall::Circle {
                radius,
                color,
                alpha,
                ..
            } => Some((*radius, *color, *alpha)),
            _ => None,
        })
        .collect();
    // one generated circle of radius 0.5
    assert_eq!(circles.len(), 3);
    assert_eq!(circles[0], (0.5, Rgb8::WHITE, 0.5));
    assert!((circles[1].0 - 0.3).abs() < 1e-12);
    assert_eq!((circles[1].1, circles[1].2), (Rgb8::WHITE, 0.3));
    assert!((circles[2].0 - 0.65).abs() < 1e-12);
    assert_eq!(circles[2].2, 0.2);
    // the rest of the frame is unchanged
    assert_eq!(r.frames()[0].len(), 9);
}
