use super::*;
use crate::foundation::{core::Canvas, error::KeymotionError};

fn raw(t: i64, x: i32, y: i32, w: i32, h: i32, r: i32, g: i32, b: i32) -> RawPose {
    RawPose {
        t,
        x,
        y,
        w,
        h,
        r,
        g,
        b,
    }
}

#[test]
fn builds_registry_from_statements() {
    let mut b = ModelBuilder::new();
    b.set_bounds(200, 70, 360, 360).unwrap();
    b.declare_shape("R", "rectangle").unwrap();
    b.declare_shape("C", "ellipse").unwrap();
    b.add_motion(
        "R",
        raw(1, 200, 200, 50, 100, 255, 0, 0),
        raw(10, 200, 200, 50, 100, 255, 0, 0),
    )
    .unwrap();
    let model = b.build().unwrap();
    assert_eq!(model.canvas(), Canvas::new(200, 70, 360, 360));
    assert_eq!(model.len(), 2);
    assert_eq!(model.shape("R").unwrap().keyframes().len(), 2);
    assert_eq!(model.shape("C").unwrap().kind(), ShapeKind::Ellipse);
}

#[test]
fn motion_validates_values() {
    let mut b = ModelBuilder::new();
    b.declare_shape("R", "rectangle").unwrap();
    let ok = raw(0, 0, 0, 1, 1, 0, 0, 0);
    assert!(matches!(
        b.add_motion("R", ok, raw(5, 0, 0, 1, 1, 256, 0, 0)),
        Err(KeymotionError::Range(_))
    ));
    assert!(matches!(
        b.add_motion("R", ok, raw(5, 0, 0, 0, 1, 0, 0, 0)),
        Err(KeymotionError::Range(_))
    ));
    assert!(matches!(
        b.add_motion("R", raw(-1, 0, 0, 1, 1, 0, 0, 0), ok),
        Err(KeymotionError::Range(_))
    ));
    assert!(matches!(
        b.add_motion("R", raw(5, 0, 0, 1, 1, 0, 0, 0), raw(1, 0, 0, 1, 1, 0, 0, 0)),
        Err(KeymotionError::Ordering { .. })
    ));
    assert!(matches!(
        b.add_motion("R", ok, ok),
        Err(KeymotionError::DegenerateSegment { .. })
    ));
    assert!(b.build().unwrap().shape("R").unwrap().keyframes().is_empty());
}

#[test]
fn unknown_kind_and_duplicate_name_fail() {
    let mut b = ModelBuilder::new();
    assert!(matches!(
        b.declare_shape("T", "triangle"),
        Err(KeymotionError::Validation(_))
    ));
    b.declare_shape("R", "rectangle").unwrap();
    assert!(matches!(
        b.declare_shape("R", "ellipse"),
        Err(KeymotionError::DuplicateName(_))
    ));
}

#[test]
fn keyframe_statements_upsert() {
    let mut b = ModelBuilder::new();
    b.declare_shape("R", "rectangle").unwrap();
    b.add_keyframe("R", raw(10, 5, 5, 2, 2, 0, 0, 0)).unwrap();
    b.add_keyframe("R", raw(0, 0, 0, 2, 2, 0, 0, 0)).unwrap();
    b.add_keyframe("R", raw(10, 9, 9, 2, 2, 0, 0, 0)).unwrap();
    let model = b.build().unwrap();
    let shape = model.shape("R").unwrap();
    let ticks: Vec<_> = shape.keyframes().iter().map(|k| k.tick().0).collect();
    assert_eq!(ticks, vec![0, 10]);
    assert_eq!(shape.keyframes()[1].position(), Position::new(9, 9));
}

#[test]
fn raw_pose_round_trips_through_keyframe() {
    let pose = raw(7, -3, 4, 10, 20, 1, 2, 3);
    let kf = pose.to_keyframe().unwrap();
    assert_eq!(RawPose::from(&kf), pose);
}
