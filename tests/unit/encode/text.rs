use super::*;
use crate::{
    animation::{
        keyframe::{KeyframePatch, Segment},
        shape::Shape,
    },
    foundation::core::{Color, Dimensions, Position, Tick},
};

fn kf(tick: u64, x: i32, r: i32) -> Keyframe {
    Keyframe::new(
        Tick(tick),
        Position::new(x, 20),
        Dimensions::new(10, 5).unwrap(),
        Color::new(r, 0, 0).unwrap(),
    )
}

#[test]
fn empty_registry_emits_only_canvas() {
    let out = TextEncoder.encode(&Animation::new()).unwrap();
    assert_eq!(out, "canvas 0 0 0 0\n");
}

#[test]
fn emits_one_motion_per_consecutive_pair() {
    let mut m = Animation::new();
    m.set_canvas(-5, 10, 200, 100);
    m.add_shape(Shape::rectangle("R")).unwrap();
    m.add_shape(Shape::ellipse("idle")).unwrap();
    m.add_shape(Shape::ellipse("C")).unwrap();
    m.add_animation("R", Segment::new(kf(0, 0, 255), kf(10, 30, 255)).unwrap())
        .unwrap();
    m.add_animation("R", Segment::new(kf(10, 30, 255), kf(15, 30, 0)).unwrap())
        .unwrap();
    m.add_keyframe("C", Tick(3), KeyframePatch::from(kf(3, 1, 1)))
        .unwrap();

    let out = TextEncoder.encode(&m).unwrap();
    let expected = "\
canvas -5 10 200 100
shape R rectangle
motion R 0 0 20 10 5 255 0 0 10 30 20 10 5 255 0 0
motion R 10 30 20 10 5 255 0 0 15 30 20 10 5 0 0 0
shape C ellipse
keyframe C 3 1 20 10 5 1 0 0
";
    assert_eq!(out, expected);
}

#[test]
fn write_to_streams_the_document() {
    let mut m = Animation::new();
    m.set_canvas(1, 2, 3, 4);
    let mut buf = Vec::new();
    TextEncoder.write_to(&m, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "canvas 1 2 3 4\n");
}
