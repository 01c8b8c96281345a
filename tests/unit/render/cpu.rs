use super::*;
use crate::render::sink::InMemorySink;

fn small() -> CpuRendererOpts {
    CpuRendererOpts {
        canvas: Canvas {
            width: 40,
            height: 30,
        },
        font: None,
    }
}

fn pixel(frame: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * frame.width + x) * 4) as usize;
    [
        frame.data[i],
        frame.data[i + 1],
        frame.data[i + 2],
        frame.data[i + 3],
    ]
}

#[test]
fn world_to_pixel_centers_and_flips() {
    let canvas = Canvas {
        width: 400,
        height: 300,
    };
    let view = world_to_pixel(Rect::new(-10.0, -10.0, 10.0, 10.0), canvas);
    assert_eq!(view * Point::new(0.0, 0.0), Point::new(200.0, 150.0));
    // scale limited by height: 300 / 20 = 15 px per unit
    assert_eq!(view * Point::new(0.0, 10.0), Point::new(200.0, 0.0));
    assert_eq!(view * Point::new(10.0, 0.0), Point::new(350.0, 150.0));
}

#[test]
fn background_and_circle_are_rasterized() {
    let mut r = CpuRenderer::new(small(), InMemorySink::new()).unwrap();
    let bg = Rgb8::from_hex(0xE5DBC3);
    let red = Rgb8::from_hex(0xFF0000);
    r.begin_frame(bg, Rect::new(-10.0, -10.0, 10.0, 10.0)).unwrap();
    r.fill_circle(Point::new(0.0, 0.0), 4.0, red, 1.0).unwrap();
    r.present().unwrap();

    let sink = r.into_sink();
    assert_eq!(sink.config().unwrap().width, 40);
    let (idx, frame) = &sink.frames()[0];
    assert_eq!(*idx, 0);
    assert!(frame.premultiplied);
    assert_eq!(frame.data.len(), 40 * 30 * 4);
    assert_eq!(pixel(frame, 1, 1), [0xE5, 0xDB, 0xC3, 255]);
    assert_eq!(pixel(frame, 20, 15), [255, 0, 0, 255]);
}

#[test]
fn frames_are_independent() {
    let mut r = CpuRenderer::new(small(), InMemorySink::new()).unwrap();
    let domain = Rect::new(-10.0, -10.0, 10.0, 10.0);
    r.begin_frame(Rgb8::WHITE, domain).unwrap();
    r.fill_polygon(
        &[
            Point::new(-9.0, -9.0),
            Point::new(9.0, -9.0),
            Point::new(9.0, 9.0),
            Point::new(-9.0, 9.0),
        ],
        Rgb8::from_hex(0x0000FF),
        1.0,
    )
    .unwrap();
    r.present().unwrap();
    r.begin_frame(Rgb8::WHITE, domain).unwrap();
    r.present().unwrap();

    let frames = r.sink().frames();
    assert_eq!(frames.len(), 2);
    assert_eq!(pixel(&frames[0].1, 20, 15), [0, 0, 255, 255]);
    assert_eq!(pixel(&frames[1].1, 20, 15), [255, 255, 255, 255]);
    assert_eq!(frames[1].0, 1);
}

#[test]
fn text_without_font_is_a_no_op() {
    let mut r = CpuRenderer::new(small(), InMemorySink::new()).unwrap();
    r.begin_frame(Rgb8::WHITE, Rect::new(0.0, 0.0, 4.0, 3.0))
        .unwrap();
    r.draw_text(&TextLabel {
        position: Point::new(1.0, 1.0),
        text: "hello".to_owned(),
        color: Rgb8::CYAN,
        size_px: 12.0,
        anchor: TextAnchor::Start,
    })
    .unwrap();
    r.present().unwrap();
    let frame = &r.sink().frames()[0].1;
    assert!(frame.data.chunks_exact(4).all(|p| p == [255, 255, 255, 255]));
}

#[test]
fn release_ends_sink_once_and_rejects_bad_domain() {
    let mut r = CpuRenderer::new(small(), InMemorySink::new()).unwrap();
    assert!(
        r.begin_frame(Rgb8::WHITE, Rect::new(1.0, 1.0, 1.0, 2.0))
            .is_err()
    );
    r.release().unwrap();
    r.release().unwrap();
    assert!(r.sink().ended());
}

#[test]
fn oversized_canvas_is_rejected() {
    let opts = CpuRendererOpts {
        canvas: Canvas {
            width: 70_000,
            height: 10,
        },
        font: None,
    };
    assert!(CpuRenderer::new(opts, InMemorySink::new()).is_err());
}
